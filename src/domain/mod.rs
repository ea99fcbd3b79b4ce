pub mod books;
pub mod errors;
pub mod formatting;
pub mod sources;

// Re-exports
pub use books::{BookId, BookSource, DownloadFormat, SortOrder, UnifiedBookRecord};
pub use errors::FetchError;
pub use sources::{SortOption, SourceControls, SourceProvider};
