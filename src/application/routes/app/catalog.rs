use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::errors::map_app_error;
use crate::application::routes::render_html;
use crate::application::routes::support::{CatalogQuery, is_datastar_request, render_fragment};
use crate::application::state::AppState;
use crate::presentation::web::HtmlCatalogDisplay;
use crate::presentation::web::templates::{CatalogTemplate, HomeTemplate};

/// Catalog page. Every visit is one load: initial page load, search submit,
/// sort change and source change all arrive here with the current selections.
///
/// Datastar requests get only the `#catalog` section back.
#[tracing::instrument(skip(state, headers))]
pub(crate) async fn catalog_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CatalogQuery>,
) -> Result<Response, StatusCode> {
    let request = query.into_request().map_err(map_app_error)?;

    let display = Mutex::new(HtmlCatalogDisplay::new());
    let orchestrator = state.orchestrator();
    let outcome = orchestrator.load(request, &display).await;

    // Fetch failures are rendered into the status area, not the status code.
    debug!(?outcome, "catalog load finished");

    let catalog = display.into_inner().into_view();

    if is_datastar_request(&headers) {
        return render_fragment(CatalogTemplate { catalog }, "#catalog").map_err(map_app_error);
    }

    let template = HomeTemplate {
        version_info: &crate::VERSION_INFO,
        catalog,
    };

    render_html(template).map(IntoResponse::into_response)
}
