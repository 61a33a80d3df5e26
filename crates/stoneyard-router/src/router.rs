//! Client-side routing.
//!
//! - [`ClientRouter`]: route table, matching and navigation
//! - [`ClientPathPattern`]: compiled path patterns
//! - [`History`], [`WebHistory`], [`MemoryHistory`]: where navigations are recorded
//! - [`Link`], [`RouterOutlet`]: navigation components

mod components;
mod core;
mod error;
mod history;
mod pattern;

pub use self::components::{Link, RouterOutlet};
#[cfg(target_arch = "wasm32")]
pub use self::components::install_link_interceptor;
pub use self::core::{ClientRoute, ClientRouteMatch, ClientRouter, ClientRouterBuilder, RouteComponent};
pub use self::error::RouterError;
pub use self::history::{
	History, HistoryListener, HistoryState, MemoryHistory, NavigationType, WebHistory, join_base,
	strip_base,
};
pub use self::pattern::{ClientPathPattern, PatternOptions, strip_query_and_hash};
