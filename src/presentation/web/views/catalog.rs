use crate::application::orchestrator::StatusMessage;
use crate::domain::{BookSource, SortOrder, SourceControls};

use super::BookCardView;

pub struct SourceOptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

pub struct SortOptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Loading text shown in the browser while a request for `source` is in flight.
pub struct LoadingView {
    pub source: &'static str,
    pub text: String,
}

/// Search form state: the active source's placeholder and its complete sort
/// option set.
pub struct ControlsView {
    pub search_term: String,
    pub placeholder: &'static str,
    pub source_options: Vec<SourceOptionView>,
    pub sort_options: Vec<SortOptionView>,
    pub loading_messages: Vec<LoadingView>,
}

impl ControlsView {
    pub fn new(controls: &SourceControls, selected: SortOrder, search_term: &str) -> Self {
        Self {
            search_term: search_term.to_string(),
            placeholder: controls.placeholder,
            source_options: BookSource::ALL
                .iter()
                .map(|source| SourceOptionView {
                    value: source.as_str(),
                    label: source.display_label(),
                    selected: *source == controls.source,
                })
                .collect(),
            sort_options: controls
                .sort_options
                .iter()
                .map(|option| SortOptionView {
                    value: option.order.as_str(),
                    label: option.label,
                    selected: option.order == selected,
                })
                .collect(),
            loading_messages: BookSource::ALL
                .iter()
                .map(|source| LoadingView {
                    source: source.as_str(),
                    text: StatusMessage::loading(*source).text,
                })
                .collect(),
        }
    }
}

impl Default for ControlsView {
    fn default() -> Self {
        let controls = SourceControls::for_source(BookSource::default());
        Self::new(&controls, controls.default_sort, "")
    }
}

pub struct StatusView {
    pub text: String,
    pub is_error: bool,
}

impl From<StatusMessage> for StatusView {
    fn from(status: StatusMessage) -> Self {
        Self {
            is_error: status.is_error(),
            text: status.text,
        }
    }
}

/// The `#catalog` section: controls, status area and results container.
#[derive(Default)]
pub struct CatalogView {
    pub controls: ControlsView,
    pub status: Option<StatusView>,
    pub cards: Vec<BookCardView>,
}
