//! Home page.

use super::{PageKind, page_shell};
use stoneyard_router::Component;
use stoneyard_router::page::Page;

/// Landing page after sign-in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Home;

impl Component for Home {
	fn render(&self) -> Page {
		page_shell(Self::name(), PageKind::Home.title())
	}

	fn name() -> &'static str {
		"Home"
	}
}
