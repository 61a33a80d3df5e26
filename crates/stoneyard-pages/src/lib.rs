//! Stoneyard Pages - the stone yard front end
//!
//! Six pages behind one route table:
//!
//! | Path       | Name  | Page                   |
//! |------------|-------|------------------------|
//! | `/`        | Login | [`pages::Login`]       |
//! | `/home`    | Home  | [`pages::Home`]        |
//! | `/factory` |       | [`pages::Factory`]     |
//! | `/quarry`  |       | [`pages::Quarry`]      |
//! | `/stone`   |       | [`pages::Stone`]       |
//! | `/orders`  |       | [`pages::QuarryOrder`] |
//!
//! Paths are matched against the browser's real pathname; the router never
//! writes a `#` fragment.
//!
//! ```ignore
//! use std::rc::Rc;
//! use stoneyard_pages::{App, create_router};
//! use stoneyard_router::router::MemoryHistory;
//!
//! let router = Rc::new(create_router(MemoryHistory::new())?);
//! router.push("/quarry")?;
//! let html = App::new(router).render_to_string();
//! ```

pub mod app;
pub mod pages;
pub mod routes;

pub use app::{App, MountError};
pub use pages::PageKind;
pub use routes::{RouteEntry, create_router, create_router_with, create_web_router, route_entries};
