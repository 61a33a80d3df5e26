//! Stoneyard Router - client-side routing for the stone yard front end
//!
//! Maps URL paths to page components and keeps the browser address bar in
//! sync through browser-native history (`pushState`/`popstate`, no `#`
//! fragments). The same code runs natively, where history is kept in
//! memory, so routing behavior is testable without a browser.
//!
//! ## Modules
//!
//! - [`router`]: route table, path patterns, history backends, Link and RouterOutlet
//! - [`page`]: the view tree route components render to
//! - [`component`]: the `Component` trait
//! - [`reactive`]: `Signal`, used to publish the current route
//! - [`settings`]: base path and matching options
//! - [`logging`]: console/tracing logging macros
//!
//! ## Example
//!
//! ```ignore
//! use stoneyard_router::page::Page;
//! use stoneyard_router::router::{ClientRouter, WebHistory};
//!
//! let router = ClientRouter::builder(WebHistory::new())
//!     .named_route("Home", "/home", || Page::text("Home"))
//!     .route("/quarry", || Page::text("Quarry"))
//!     .build()?;
//!
//! router.push("/quarry")?;
//! ```

#![warn(missing_docs)]

pub mod component;
pub mod logging;
pub mod page;
pub mod reactive;
pub mod router;
pub mod settings;

pub use component::Component;
pub use page::{IntoPage, Page, PageElement};
pub use reactive::Signal;
pub use router::{ClientRouter, Link, RouterError, RouterOutlet};
pub use settings::{RouterSettings, SettingsError};

#[doc(hidden)]
pub mod __private {
	pub use tracing;
	pub use web_sys;
}
