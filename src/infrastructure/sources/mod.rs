pub mod gutenberg;
pub mod ncert;

use std::sync::Arc;

use crate::domain::{BookSource, SourceProvider};

pub use gutenberg::{GUTENDEX_URL, GutenbergProvider};
pub use ncert::{CatalogLocation, DEFAULT_CATALOG_FILE, NcertProvider};

/// Selects the provider for a source tag.
#[derive(Clone)]
pub struct SourceRegistry {
    gutenberg: Arc<dyn SourceProvider>,
    ncert: Arc<dyn SourceProvider>,
}

impl SourceRegistry {
    pub fn new(gutenberg: Arc<dyn SourceProvider>, ncert: Arc<dyn SourceProvider>) -> Self {
        Self { gutenberg, ncert }
    }

    /// Registry backed by the live Gutendex API (or a compatible `gutenberg_url`)
    /// and the NCERT dataset at `ncert_location`.
    pub fn from_config(
        client: reqwest::Client,
        gutenberg_url: &str,
        ncert_location: CatalogLocation,
    ) -> Self {
        Self::new(
            Arc::new(GutenbergProvider::new(client.clone(), gutenberg_url)),
            Arc::new(NcertProvider::new(client, ncert_location)),
        )
    }

    pub fn provider(&self, source: BookSource) -> Arc<dyn SourceProvider> {
        match source {
            BookSource::Gutenberg => Arc::clone(&self.gutenberg),
            BookSource::Ncert => Arc::clone(&self.ncert),
        }
    }
}
