use crate::application::orchestrator::{CatalogDisplay, StatusMessage};
use crate::domain::{SortOrder, SourceControls, UnifiedBookRecord};

use super::views::{BookCardView, CatalogView, ControlsView};

/// Collects the state of the `#catalog` section for the askama templates.
#[derive(Default)]
pub struct HtmlCatalogDisplay {
    view: CatalogView,
}

impl HtmlCatalogDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_view(self) -> CatalogView {
        self.view
    }
}

impl CatalogDisplay for HtmlCatalogDisplay {
    fn clear(&mut self) {
        self.view.cards.clear();
    }

    fn configure_controls(&mut self, controls: &SourceControls, selected: SortOrder, search_term: &str) {
        self.view.controls = ControlsView::new(controls, selected, search_term);
    }

    fn show_status(&mut self, status: StatusMessage) {
        self.view.status = Some(status.into());
    }

    fn hide_status(&mut self) {
        self.view.status = None;
    }

    fn append_card(&mut self, record: &UnifiedBookRecord) {
        self.view.cards.push(BookCardView::from_domain(record));
    }
}
