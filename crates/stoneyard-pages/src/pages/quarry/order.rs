use crate::pages::{PageKind, page_shell};
use stoneyard_router::Component;
use stoneyard_router::page::Page;

/// Orders placed with the quarry.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuarryOrder;

impl Component for QuarryOrder {
	fn render(&self) -> Page {
		page_shell(Self::name(), PageKind::QuarryOrder.title())
	}

	fn name() -> &'static str {
		"QuarryOrder"
	}
}
