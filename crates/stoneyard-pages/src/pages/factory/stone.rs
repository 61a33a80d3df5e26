use crate::pages::{PageKind, page_shell};
use stoneyard_router::Component;
use stoneyard_router::page::Page;

/// Stone stock handled by the factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stone;

impl Component for Stone {
	fn render(&self) -> Page {
		page_shell(Self::name(), PageKind::Stone.title())
	}

	fn name() -> &'static str {
		"Stone"
	}
}
