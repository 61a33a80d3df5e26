//! Quarry area.

pub mod order;

use super::{PageKind, page_shell};
use stoneyard_router::Component;
use stoneyard_router::page::Page;

/// Quarry overview.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quarry;

impl Component for Quarry {
	fn render(&self) -> Page {
		page_shell(Self::name(), PageKind::Quarry.title())
	}

	fn name() -> &'static str {
		"Quarry"
	}
}
