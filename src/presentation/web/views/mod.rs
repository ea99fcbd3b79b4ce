mod books;
mod catalog;

pub use books::{BookCardView, DownloadView};
pub use catalog::{CatalogView, ControlsView, LoadingView, SortOptionView, SourceOptionView, StatusView};
