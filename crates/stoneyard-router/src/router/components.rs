//! Router Components for navigation.
//!
//! [`Link`] renders an anchor the router can intercept, and
//! [`RouterOutlet`] hosts whichever page the current route selects.

use super::core::ClientRouter;
use super::history::join_base;
use crate::component::Component;
use crate::page::{IntoPage, Page, PageElement};
use std::rc::Rc;

/// A link that navigates without a full page reload.
///
/// Renders a plain `<a href>` so the link still works before the router
/// is installed; on wasm, clicks on links carrying `data-link` are
/// intercepted by [`install_link_interceptor`].
///
/// # Example
///
/// ```ignore
/// use stoneyard_router::router::Link;
///
/// let link = Link::new("/quarry", "Quarry").class("nav-link");
/// ```
#[derive(Debug, Clone)]
pub struct Link {
	/// The destination path.
	to: String,
	/// The link text.
	content: String,
	/// Base path prepended to `href`.
	base: String,
	/// Additional CSS classes.
	class: Option<String>,
	/// Whether to replace the current history entry.
	replace: bool,
	/// Whether to open in a new tab (disables SPA navigation).
	external: bool,
}

impl Link {
	/// Creates a new link.
	pub fn new(to: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			to: to.into(),
			content: content.into(),
			base: "/".to_string(),
			class: None,
			replace: false,
			external: false,
		}
	}

	/// Sets the base path the application is served under.
	pub fn base(mut self, base: impl Into<String>) -> Self {
		self.base = base.into();
		self
	}

	/// Sets the CSS class.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	/// Sets whether to replace the current history entry.
	pub fn replace(mut self, replace: bool) -> Self {
		self.replace = replace;
		self
	}

	/// Sets whether this is an external link.
	pub fn external(mut self, external: bool) -> Self {
		self.external = external;
		self
	}

	/// Returns the destination path.
	pub fn to(&self) -> &str {
		&self.to
	}

	/// Returns the URL placed in `href`.
	pub fn href(&self) -> String {
		if self.external {
			self.to.clone()
		} else {
			join_base(&self.base, &self.to)
		}
	}
}

impl Component for Link {
	fn render(&self) -> Page {
		let mut el = PageElement::new("a").attr("href", self.href());

		if let Some(ref class) = self.class {
			el = el.attr("class", class.clone());
		}

		if !self.external {
			el = el
				.attr("data-link", "true")
				.attr("data-to", self.to.clone());
			if self.replace {
				el = el.attr("data-replace", "true");
			}
		} else {
			el = el
				.attr("target", "_blank")
				.attr("rel", "noopener noreferrer");
		}

		el.child(self.content.clone()).into_page()
	}

	fn name() -> &'static str {
		"Link"
	}
}

/// Hosts the page selected by the current route.
///
/// The outlet holds at most one route page: navigating replaces its child
/// rather than appending to it.
#[derive(Debug, Clone)]
pub struct RouterOutlet {
	router: Rc<ClientRouter>,
	/// The ID attribute for the outlet element.
	id: Option<String>,
	/// CSS class for the outlet element.
	class: Option<String>,
}

impl RouterOutlet {
	/// Creates an outlet bound to `router`.
	pub fn new(router: Rc<ClientRouter>) -> Self {
		Self {
			router,
			id: None,
			class: None,
		}
	}

	/// Sets the ID attribute.
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Sets the CSS class.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}
}

impl Component for RouterOutlet {
	fn render(&self) -> Page {
		let mut el = PageElement::new("div").attr("data-router-outlet", "true");

		if let Some(ref id) = self.id {
			el = el.attr("id", id.clone());
		}

		if let Some(ref class) = self.class {
			el = el.attr("class", class.clone());
		}

		el.child(self.router.render_current()).into_page()
	}

	fn name() -> &'static str {
		"RouterOutlet"
	}
}

/// Whether a click should become in-app navigation.
///
/// Only an unmodified primary-button click qualifies; ctrl, meta, shift,
/// alt and other buttons keep the browser's default (new tab, new window,
/// download).
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn is_plain_primary_click(button: i16, ctrl: bool, meta: bool, shift: bool, alt: bool) -> bool {
	button == 0 && !(ctrl || meta || shift || alt)
}

/// Routes clicks on `a[data-link]` through `router` instead of the browser.
///
/// Modified clicks keep their default behavior, see [`is_plain_primary_click`].
#[cfg(target_arch = "wasm32")]
pub fn install_link_interceptor(
	router: Rc<ClientRouter>,
) -> Result<(), super::error::RouterError> {
	use super::error::RouterError;
	use wasm_bindgen::JsCast;
	use wasm_bindgen::closure::Closure;

	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| RouterError::NavigationFailed("document is not available".to_string()))?;

	let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |event: web_sys::MouseEvent| {
		if !is_plain_primary_click(
			event.button(),
			event.ctrl_key(),
			event.meta_key(),
			event.shift_key(),
			event.alt_key(),
		) {
			return;
		}
		let Some(anchor) = event
			.target()
			.and_then(|t| t.dyn_into::<web_sys::Element>().ok())
			.and_then(|el| el.closest("a[data-link]").ok().flatten())
		else {
			return;
		};
		let Some(to) = anchor.get_attribute("data-to") else {
			return;
		};

		event.prevent_default();
		let result = if anchor.get_attribute("data-replace").as_deref() == Some("true") {
			router.replace(&to)
		} else {
			router.push(&to)
		};
		if let Err(err) = result {
			crate::error_log!("Link navigation to {} failed: {}", to, err);
		}
	});

	document
		.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
		.map_err(|e| RouterError::NavigationFailed(format!("{:?}", e)))?;

	// The listener lives as long as the page.
	closure.forget();
	Ok(())
}
