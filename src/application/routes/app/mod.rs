pub(crate) mod catalog;

use axum::routing::get;

use crate::application::state::AppState;

pub(super) fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", get(catalog::catalog_page))
        .route("/books", get(catalog::catalog_page))
}
