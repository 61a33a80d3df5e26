//! Component trait definition.

use crate::page::Page;

/// Trait for reusable UI components.
///
/// # Example
///
/// ```ignore
/// use stoneyard_router::component::Component;
/// use stoneyard_router::page::{IntoPage, Page};
///
/// struct Banner;
///
/// impl Component for Banner {
///     fn render(&self) -> Page {
///         Page::element("header").child("Stone yard").into_page()
///     }
///
///     fn name() -> &'static str {
///         "Banner"
///     }
/// }
/// ```
pub trait Component: 'static {
	/// Renders the component to a Page.
	fn render(&self) -> Page;

	/// Returns the component's name for debugging.
	fn name() -> &'static str
	where
		Self: Sized;
}
