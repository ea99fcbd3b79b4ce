use axum::Json;
use axum::extract::{Query, State};

use crate::application::errors::ApiError;
use crate::application::routes::support::CatalogQuery;
use crate::application::state::AppState;
use crate::domain::UnifiedBookRecord;

/// Unified records for a search, in the order the source returned them.
///
/// Unlike the page, the requested sort order is not limited to the source's
/// menu: `sort=popular` on NCERT runs class high to low.
#[tracing::instrument(skip(state))]
pub(crate) async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<Vec<UnifiedBookRecord>>, ApiError> {
    let request = query.into_request()?;
    let provider = state.sources.provider(request.source);
    // Fetchers accept every sort order; only a missing one falls back to the
    // source's default.
    let sort_order = request
        .sort_order
        .unwrap_or(provider.controls().default_sort);

    let records = provider.fetch(&request.search_term, sort_order).await?;
    Ok(Json(records))
}
