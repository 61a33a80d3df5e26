//! # Stoneyard
//!
//! Browser front end for the stone yard. Login, home, factory, quarry,
//! stone and order pages sit behind a client-side router that uses the
//! browser's native history, so every page has a clean URL (`/quarry`,
//! not `/#/quarry`).
//!
//! ## Crates
//!
//! - [`router`]: the generic router (patterns, history backends, `Link`, `RouterOutlet`)
//! - [`pages`]: the application pages, the route table and the `App` root
//!
//! ## Feature Flags
//!
//! - `debug-hooks`: per-navigation debug logging
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::rc::Rc;
//! use stoneyard::prelude::*;
//!
//! let router = Rc::new(create_router(MemoryHistory::new())?);
//! router.push("/factory")?;
//! router.push("/stone")?;
//!
//! let html = App::new(router).render_to_string();
//! ```

pub use stoneyard_pages as pages;
pub use stoneyard_router as router;

pub use stoneyard_pages::{App, MountError, RouteEntry, create_router, create_web_router, route_entries};
pub use stoneyard_router::{ClientRouter, RouterError, RouterSettings};

/// Commonly used items.
pub mod prelude {
	pub use stoneyard_pages::pages::{Factory, Home, Login, PageKind, Quarry, QuarryOrder, Stone};
	pub use stoneyard_pages::{App, RouteEntry, create_router, create_router_with, route_entries};
	pub use stoneyard_router::router::{History, Link, MemoryHistory, RouterOutlet, WebHistory};
	pub use stoneyard_router::{ClientRouter, Component, Page, RouterError, RouterSettings};
}
