use async_trait::async_trait;

use super::FetchError;
use super::books::{BookSource, SortOrder, UnifiedBookRecord};

/// A catalog that can be searched and whose raw records normalize into
/// [`UnifiedBookRecord`]s.
#[async_trait]
pub trait SourceProvider: Send + Sync {
    fn source(&self) -> BookSource;

    /// Convert one raw record, as found in the source payload, into the
    /// unified model. Fails only when `id` or `title` is missing.
    fn normalize(&self, raw: serde_json::Value) -> Result<UnifiedBookRecord, FetchError>;

    /// Issue exactly one request and return the normalized, ordered results.
    async fn fetch(
        &self,
        search_term: &str,
        sort_order: SortOrder,
    ) -> Result<Vec<UnifiedBookRecord>, FetchError>;

    fn controls(&self) -> SourceControls {
        SourceControls::for_source(self.source())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SortOption {
    pub order: SortOrder,
    pub label: &'static str,
}

/// Search vocabulary a source exposes to the page: placeholder text and the
/// complete set of sort options.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SourceControls {
    pub source: BookSource,
    pub placeholder: &'static str,
    pub sort_options: Vec<SortOption>,
    pub default_sort: SortOrder,
}

impl SourceControls {
    pub fn for_source(source: BookSource) -> Self {
        match source {
            BookSource::Gutenberg => Self {
                source,
                placeholder: "Search by title or author...",
                sort_options: vec![
                    SortOption {
                        order: SortOrder::Popular,
                        label: "Most Popular",
                    },
                    SortOption {
                        order: SortOrder::Ascending,
                        label: "Oldest Entries (ID \u{2191})",
                    },
                    SortOption {
                        order: SortOrder::Descending,
                        label: "Newest Entries (ID \u{2193})",
                    },
                ],
                default_sort: SortOrder::Popular,
            },
            BookSource::Ncert => Self {
                source,
                placeholder: "Search by title, class or subject...",
                sort_options: vec![
                    SortOption {
                        order: SortOrder::Ascending,
                        label: "Class (Low to High)",
                    },
                    SortOption {
                        order: SortOrder::Descending,
                        label: "Class (High to Low)",
                    },
                ],
                default_sort: SortOrder::Ascending,
            },
        }
    }

    pub fn offers(&self, order: SortOrder) -> bool {
        self.sort_options.iter().any(|option| option.order == order)
    }

    /// The requested order if this source offers it, otherwise the source default.
    pub fn resolve_sort(&self, requested: Option<SortOrder>) -> SortOrder {
        requested
            .filter(|order| self.offers(*order))
            .unwrap_or(self.default_sort)
    }
}
