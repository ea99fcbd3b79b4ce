use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::{BookSource, FetchError, SortOrder, SourceControls, UnifiedBookRecord};
use crate::infrastructure::sources::SourceRegistry;

/// Where rendered output goes: the results container, the status area and
/// the search controls.
pub trait CatalogDisplay: Send {
    /// Remove every rendered card.
    fn clear(&mut self);

    /// Replace the search placeholder and the whole sort option set.
    fn configure_controls(&mut self, controls: &SourceControls, selected: SortOrder, search_term: &str);

    fn show_status(&mut self, status: StatusMessage);

    fn hide_status(&mut self);

    /// Render one record as a card at the end of the container.
    fn append_card(&mut self, record: &UnifiedBookRecord);
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn loading(source: BookSource) -> Self {
        Self {
            text: format!("Loading {} books...", source.display_label()),
            kind: StatusKind::Info,
        }
    }

    pub fn no_results(search_term: &str) -> Self {
        Self {
            text: format!(
                "No results found for \"{search_term}\". Please try a different search or filter."
            ),
            kind: StatusKind::Info,
        }
    }

    pub fn failure(err: &FetchError) -> Self {
        Self {
            text: format!("Failed to load books: {err}. Please try again."),
            kind: StatusKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[repr(u8)]
pub enum LoadState {
    Idle = 0,
    Loading = 1,
    Rendered = 2,
    Error = 3,
}

impl LoadState {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => LoadState::Loading,
            2 => LoadState::Rendered,
            3 => LoadState::Error,
            _ => LoadState::Idle,
        }
    }
}

/// What the user selected when triggering a load.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct LoadRequest {
    pub source: BookSource,
    pub search_term: String,
    /// `None` selects the source's default order.
    pub sort_order: Option<SortOrder>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct LoadToken(u64);

/// A load that has been started and whose response has not been applied yet.
#[derive(Debug, Clone)]
pub struct PendingLoad {
    pub token: LoadToken,
    pub source: BookSource,
    pub search_term: String,
    pub sort_order: SortOrder,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LoadOutcome {
    Rendered { count: usize },
    NoResults,
    Failed(FetchError),
    /// A newer load was started before this one finished; nothing was applied.
    Superseded,
}

/// Drives Idle → Loading → Rendered | Error for one display.
///
/// Every load is issued a token. A response is applied only when its token is
/// still the latest one, so a slow response can never overwrite the results of
/// a load started after it.
pub struct LoadOrchestrator {
    registry: SourceRegistry,
    latest: AtomicU64,
    state: AtomicU8,
}

impl LoadOrchestrator {
    pub fn new(registry: SourceRegistry) -> Self {
        Self {
            registry,
            latest: AtomicU64::new(0),
            state: AtomicU8::new(LoadState::Idle as u8),
        }
    }

    pub fn state(&self) -> LoadState {
        LoadState::from_u8(self.state.load(Ordering::Acquire))
    }

    fn set_state(&self, state: LoadState) {
        self.state.store(state as u8, Ordering::Release);
    }

    pub fn is_current(&self, token: LoadToken) -> bool {
        self.latest.load(Ordering::Acquire) == token.0
    }

    /// Enter Loading: issue a token, clear the container, show the loading
    /// message and switch the controls to the active source's vocabulary.
    pub fn begin(&self, request: LoadRequest, display: &mut dyn CatalogDisplay) -> PendingLoad {
        let token = LoadToken(self.latest.fetch_add(1, Ordering::AcqRel) + 1);
        let controls = self.registry.provider(request.source).controls();
        let sort_order = controls.resolve_sort(request.sort_order);

        display.clear();
        display.configure_controls(&controls, sort_order, &request.search_term);
        display.show_status(StatusMessage::loading(request.source));
        self.set_state(LoadState::Loading);

        info!(
            token = token.0,
            source = %request.source,
            search = %request.search_term,
            sort = %sort_order,
            "loading books"
        );

        PendingLoad {
            token,
            source: request.source,
            search_term: request.search_term,
            sort_order,
        }
    }

    pub async fn fetch(&self, pending: &PendingLoad) -> Result<Vec<UnifiedBookRecord>, FetchError> {
        self.registry
            .provider(pending.source)
            .fetch(&pending.search_term, pending.sort_order)
            .await
    }

    /// Apply a fetch result to the display, unless a newer load has started.
    pub fn finish(
        &self,
        pending: PendingLoad,
        result: Result<Vec<UnifiedBookRecord>, FetchError>,
        display: &mut dyn CatalogDisplay,
    ) -> LoadOutcome {
        if !self.is_current(pending.token) {
            debug!(token = pending.token.0, "discarding superseded load");
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(records) if records.is_empty() => {
                display.show_status(StatusMessage::no_results(&pending.search_term));
                self.set_state(LoadState::Error);
                LoadOutcome::NoResults
            }
            Ok(records) => {
                display.hide_status();
                for record in &records {
                    display.append_card(record);
                }
                self.set_state(LoadState::Rendered);
                LoadOutcome::Rendered {
                    count: records.len(),
                }
            }
            Err(err) => {
                warn!(token = pending.token.0, source = %pending.source, error = %err, "failed to load books");
                display.show_status(StatusMessage::failure(&err));
                self.set_state(LoadState::Error);
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Run a whole load against a shared display. The display lock is not held
    /// while the request is in flight.
    pub async fn load<D: CatalogDisplay>(&self, request: LoadRequest, display: &Mutex<D>) -> LoadOutcome {
        let pending = {
            let mut guard = display.lock().await;
            self.begin(request, &mut *guard)
        };

        let result = self.fetch(&pending).await;

        let mut guard = display.lock().await;
        self.finish(pending, result, &mut *guard)
    }
}
