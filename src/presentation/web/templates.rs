use askama::Template;

use super::views::{BookCardView, CatalogView};
use crate::domain::UnifiedBookRecord;

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub version_info: &'static crate::VersionInfo,
    pub catalog: CatalogView,
}

#[derive(Template)]
#[template(path = "partials/catalog.html")]
pub struct CatalogTemplate {
    pub catalog: CatalogView,
}

#[derive(Template)]
#[template(path = "partials/book_card.html")]
pub struct BookCardTemplate {
    pub card: BookCardView,
}

pub fn render_template<T: Template>(template: T) -> Result<String, askama::Error> {
    template.render()
}

/// Render a single record as its card markup.
pub fn render_card(record: &UnifiedBookRecord) -> Result<String, askama::Error> {
    render_template(BookCardTemplate {
        card: BookCardView::from_domain(record),
    })
}
