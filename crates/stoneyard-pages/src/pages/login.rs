//! Login page.

use super::{PageKind, page_shell};
use stoneyard_router::Component;
use stoneyard_router::page::Page;

/// Entry page served at `/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Login;

impl Component for Login {
	fn render(&self) -> Page {
		page_shell(Self::name(), PageKind::Login.title())
	}

	fn name() -> &'static str {
		"Login"
	}
}
