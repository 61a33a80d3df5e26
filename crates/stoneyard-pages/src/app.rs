//! Application root.
//!
//! [`App`] receives its router by injection; nothing here reaches for a
//! global. It renders the navigation bar and a [`RouterOutlet`] hosting
//! the page of the current route.

use crate::routes::route_entries;
use std::rc::Rc;
use stoneyard_router::Component;
use stoneyard_router::page::{IntoPage, Page, PageElement};
use stoneyard_router::router::{ClientRouter, Link, RouterOutlet};

/// Errors raised while mounting the application into the document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
	/// No global `window`.
	#[error("no global `window` exists")]
	NoWindow,
	/// The window has no document.
	#[error("window has no document")]
	NoDocument,
	/// The root element is missing.
	#[error("root element #{0} not found")]
	MissingRoot(String),
	/// The router could not be created or installed.
	#[error("router setup failed: {0}")]
	Router(#[from] stoneyard_router::RouterError),
}

/// The application shell: navigation plus the route outlet.
#[derive(Debug, Clone)]
pub struct App {
	router: Rc<ClientRouter>,
}

impl App {
	/// Creates the application over an existing router.
	pub fn new(router: Rc<ClientRouter>) -> Self {
		Self { router }
	}

	/// Returns the injected router.
	pub fn router(&self) -> &Rc<ClientRouter> {
		&self.router
	}

	fn nav(&self) -> PageElement {
		let base = self.router.history().base().to_string();
		let links = route_entries().iter().map(|entry| {
			Link::new(entry.path, entry.component.title())
				.base(base.clone())
				.class("nav-link")
				.render()
		});
		PageElement::new("nav")
			.attr("class", "app-nav")
			.children(links)
	}

	/// Renders the application to an HTML string.
	pub fn render_to_string(&self) -> String {
		self.render().render_to_string()
	}

	/// Writes the application into the element with id `root_id` and
	/// re-renders it after every navigation.
	#[cfg(target_arch = "wasm32")]
	pub fn mount(&self, root_id: &str) -> Result<(), MountError> {
		let window = web_sys::window().ok_or(MountError::NoWindow)?;
		let document = window.document().ok_or(MountError::NoDocument)?;
		let root = document
			.get_element_by_id(root_id)
			.ok_or_else(|| MountError::MissingRoot(root_id.to_string()))?;

		root.set_inner_html(&self.render_to_string());

		let app = self.clone();
		self.router.current_path().subscribe(move |_: &String| {
			root.set_inner_html(&app.render_to_string());
		});
		stoneyard_router::info_log!("Mounted app at #{}", root_id);
		Ok(())
	}
}

impl Component for App {
	fn render(&self) -> Page {
		PageElement::new("div")
			.attr("class", "app")
			.child(self.nav())
			.child(
				RouterOutlet::new(Rc::clone(&self.router))
					.id("router-outlet")
					.render(),
			)
			.into_page()
	}

	fn name() -> &'static str {
		"App"
	}
}

/// Browser entry point: builds the web router, routes link clicks
/// through it, and mounts the application at `#app`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
	use stoneyard_router::settings::RouterSettings;

	let router = crate::routes::create_web_router(RouterSettings::default())
		.map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))?;
	let router = Rc::new(router);

	stoneyard_router::router::install_link_interceptor(Rc::clone(&router))
		.map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))?;

	App::new(router)
		.mount("app")
		.map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::routes::create_router;
	use rstest::rstest;
	use stoneyard_router::router::MemoryHistory;

	fn app() -> App {
		App::new(Rc::new(create_router(MemoryHistory::new()).unwrap()))
	}

	fn outlet_html(html: &str) -> &str {
		let start = html.find("<div data-router-outlet").unwrap();
		&html[start..]
	}

	#[rstest]
	fn test_nav_links_every_route() {
		let html = app().render_to_string();

		for entry in route_entries() {
			assert!(html.contains(&format!("href=\"{}\"", entry.path)));
		}
		assert!(!html.contains('#'));
	}

	#[rstest]
	fn test_initial_render_hosts_login() {
		let html = app().render_to_string();

		assert!(outlet_html(&html).contains("data-page=\"Login\""));
	}

	#[rstest]
	fn test_navigation_replaces_outlet_page() {
		// Arrange
		let app = app();
		app.router().push("/factory").unwrap();
		assert!(outlet_html(&app.render_to_string()).contains("data-page=\"Factory\""));

		// Act
		app.router().push("/stone").unwrap();

		// Assert
		let html = app.render_to_string();
		let outlet = outlet_html(&html);
		assert!(outlet.contains("data-page=\"Stone\""));
		assert!(!outlet.contains("data-page=\"Factory\""));
		assert_eq!(outlet.matches("data-page=").count(), 1);
	}

	#[rstest]
	fn test_unknown_path_renders_empty_outlet() {
		let app = app();
		app.router().push("/nonexistent").unwrap();

		let html = app.render_to_string();
		assert!(html.ends_with("<div data-router-outlet=\"true\" id=\"router-outlet\"></div></div>"));
	}

	#[rstest]
	fn test_mount_error_messages() {
		assert_eq!(
			MountError::MissingRoot("app".to_string()).to_string(),
			"root element #app not found"
		);
		assert_eq!(MountError::NoWindow.to_string(), "no global `window` exists");
	}
}
