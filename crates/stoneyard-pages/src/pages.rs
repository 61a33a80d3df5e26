//! Page components mounted by the route table.
//!
//! The pages carry no behavior of their own; each renders a labelled
//! section the outlet can host. Grouped pages live under the area they
//! belong to: [`factory::stone`] and [`quarry::order`].

pub mod factory;
pub mod home;
pub mod login;
pub mod quarry;

pub use factory::Factory;
pub use factory::stone::Stone;
pub use home::Home;
pub use login::Login;
pub use quarry::Quarry;
pub use quarry::order::QuarryOrder;

use stoneyard_router::Component;
use stoneyard_router::page::{IntoPage, Page, PageElement};

/// Identifies one of the application's page components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
	/// [`Login`]
	Login,
	/// [`Home`]
	Home,
	/// [`Factory`]
	Factory,
	/// [`Quarry`]
	Quarry,
	/// [`Stone`], grouped under the factory
	Stone,
	/// [`QuarryOrder`], grouped under the quarry
	QuarryOrder,
}

impl PageKind {
	/// All page kinds in route table order.
	pub const ALL: [PageKind; 6] = [
		PageKind::Login,
		PageKind::Home,
		PageKind::Factory,
		PageKind::Quarry,
		PageKind::Stone,
		PageKind::QuarryOrder,
	];

	/// Renders the page component this kind refers to.
	pub fn render(self) -> Page {
		match self {
			PageKind::Login => Login.render(),
			PageKind::Home => Home.render(),
			PageKind::Factory => Factory.render(),
			PageKind::Quarry => Quarry.render(),
			PageKind::Stone => Stone.render(),
			PageKind::QuarryOrder => QuarryOrder.render(),
		}
	}

	/// Label used for navigation links to this page.
	pub fn title(self) -> &'static str {
		match self {
			PageKind::Login => "Sign in",
			PageKind::Home => "Home",
			PageKind::Factory => "Factory",
			PageKind::Quarry => "Quarry",
			PageKind::Stone => "Stone",
			PageKind::QuarryOrder => "Orders",
		}
	}

	/// The component's name.
	pub fn component_name(self) -> &'static str {
		match self {
			PageKind::Login => Login::name(),
			PageKind::Home => Home::name(),
			PageKind::Factory => Factory::name(),
			PageKind::Quarry => Quarry::name(),
			PageKind::Stone => Stone::name(),
			PageKind::QuarryOrder => QuarryOrder::name(),
		}
	}
}

/// Wraps a page body in the section every page renders into.
pub(crate) fn page_shell(component: &'static str, title: &'static str) -> Page {
	PageElement::new("section")
		.attr("class", "page")
		.attr("data-page", component)
		.child(PageElement::new("h1").child(title))
		.into_page()
}

/// Returns the component name of a rendered page, read from its `data-page` marker.
pub fn rendered_component(page: &Page) -> Option<&str> {
	page.as_element().and_then(|el| el.attr_value("data-page"))
}
