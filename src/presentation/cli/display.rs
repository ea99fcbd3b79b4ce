use std::fmt::Write;

use crate::application::orchestrator::{CatalogDisplay, StatusMessage};
use crate::domain::{SortOrder, SourceControls, UnifiedBookRecord};

/// Terminal rendition of the catalog: collects records and the status line,
/// then renders them as plain-text cards.
#[derive(Debug, Default)]
pub struct TerminalDisplay {
    records: Vec<UnifiedBookRecord>,
    status: Option<StatusMessage>,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[UnifiedBookRecord] {
        &self.records
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (index, record) in self.records.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "{}", record.title);
            let _ = writeln!(out, "  {}", record.author_line);
            let _ = writeln!(out, "  {}", record.meta_line);
            let _ = writeln!(out, "  View:     {}", record.view_link);
            match &record.download_link {
                Some(link) if record.is_downloadable() => {
                    let _ = writeln!(out, "  {}: {link}", record.download_label);
                }
                _ => {
                    let _ = writeln!(out, "  {}", record.download_label);
                }
            }
        }
        out
    }
}

impl CatalogDisplay for TerminalDisplay {
    fn clear(&mut self) {
        self.records.clear();
    }

    fn configure_controls(&mut self, _controls: &SourceControls, _selected: SortOrder, _search_term: &str) {}

    fn show_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    fn hide_status(&mut self) {
        self.status = None;
    }

    fn append_card(&mut self, record: &UnifiedBookRecord) {
        self.records.push(record.clone());
    }
}
