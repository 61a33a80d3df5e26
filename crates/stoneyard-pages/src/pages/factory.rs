//! Factory area.

pub mod stone;

use super::{PageKind, page_shell};
use stoneyard_router::Component;
use stoneyard_router::page::Page;

/// Factory overview.
#[derive(Debug, Clone, Copy, Default)]
pub struct Factory;

impl Component for Factory {
	fn render(&self) -> Page {
		page_shell(Self::name(), PageKind::Factory.title())
	}

	fn name() -> &'static str {
		"Factory"
	}
}
