//! Route table for the stone yard front end.
//!
//! The table is literal and ordered. [`create_router`] registers it on a
//! [`ClientRouter`] in the same order, so the first matching entry wins.

use crate::pages::PageKind;
use stoneyard_router::router::{ClientRouter, ClientRouterBuilder, History, RouterError};
use stoneyard_router::settings::RouterSettings;

/// One entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
	/// Exact URL path.
	pub path: &'static str,
	/// Route name, used for named navigation.
	pub name: Option<&'static str>,
	/// The page mounted when the path matches.
	pub component: PageKind,
}

const ROUTES: &[RouteEntry] = &[
	RouteEntry {
		path: "/",
		name: Some("Login"),
		component: PageKind::Login,
	},
	RouteEntry {
		path: "/home",
		name: Some("Home"),
		component: PageKind::Home,
	},
	RouteEntry {
		path: "/factory",
		name: None,
		component: PageKind::Factory,
	},
	RouteEntry {
		path: "/quarry",
		name: None,
		component: PageKind::Quarry,
	},
	RouteEntry {
		path: "/stone",
		name: None,
		component: PageKind::Stone,
	},
	RouteEntry {
		path: "/orders",
		name: None,
		component: PageKind::QuarryOrder,
	},
];

/// Returns the route table in registration order.
pub fn route_entries() -> &'static [RouteEntry] {
	ROUTES
}

/// Registers every route table entry on `builder`, in order.
pub fn register_routes(builder: ClientRouterBuilder) -> ClientRouterBuilder {
	route_entries().iter().fold(builder, |builder, entry| {
		let kind = entry.component;
		match entry.name {
			Some(name) => builder.named_route(name, entry.path, move || kind.render()),
			None => builder.route(entry.path, move || kind.render()),
		}
	})
}

/// Creates a router over the route table using `history`.
///
/// # Errors
///
/// Returns the [`RouterError`] raised while validating the table.
pub fn create_router(history: impl History + 'static) -> Result<ClientRouter, RouterError> {
	create_router_with(history, RouterSettings::default())
}

/// Like [`create_router`], with explicit matching settings.
pub fn create_router_with(
	history: impl History + 'static,
	settings: RouterSettings,
) -> Result<ClientRouter, RouterError> {
	register_routes(ClientRouter::builder(history).settings(settings)).build()
}

/// Creates the production router on browser-native history.
///
/// URLs are written as `base + path`; no `#` fragment is ever used for
/// routing.
pub fn create_web_router(settings: RouterSettings) -> Result<ClientRouter, RouterError> {
	let history = stoneyard_router::router::WebHistory::with_base(&settings.base);
	create_router_with(history, settings)
}
