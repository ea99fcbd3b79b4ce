pub mod display;
pub mod templates;
pub mod views;

pub use display::HtmlCatalogDisplay;
