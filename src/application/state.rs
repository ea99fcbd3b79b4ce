use std::path::PathBuf;

use crate::application::orchestrator::LoadOrchestrator;
use crate::infrastructure::sources::{CatalogLocation, SourceRegistry};

/// Everything that varies between production and test environments.
pub struct AppStateConfig {
    pub http_client: reqwest::Client,
    pub gutenberg_url: String,
    pub ncert_location: CatalogLocation,
}

#[derive(Clone)]
pub struct AppState {
    pub sources: SourceRegistry,
    /// Dataset served at `/ncert_books.json` when the catalog lives on disk.
    pub ncert_file: Option<PathBuf>,
}

impl AppState {
    pub fn from_config(config: AppStateConfig) -> Self {
        let ncert_file = match &config.ncert_location {
            CatalogLocation::File(path) => Some(path.clone()),
            CatalogLocation::Url(_) => None,
        };

        Self {
            sources: SourceRegistry::from_config(
                config.http_client,
                &config.gutenberg_url,
                config.ncert_location,
            ),
            ncert_file,
        }
    }

    /// Each page request drives its own display, so it gets its own orchestrator.
    pub fn orchestrator(&self) -> LoadOrchestrator {
        LoadOrchestrator::new(self.sources.clone())
    }
}
