use askama::Template;
use axum::http::{HeaderMap, HeaderValue, header::CONTENT_TYPE};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use crate::application::errors::AppError;
use crate::application::orchestrator::LoadRequest;
use crate::domain::{BookSource, SortOrder};

/// Query string shared by the catalog page, its fragment and the JSON API.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CatalogQuery {
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    q: Option<String>,
    #[serde(default)]
    sort: Option<String>,
}

impl CatalogQuery {
    /// Blank values select defaults; unknown values are rejected.
    pub(crate) fn into_request(self) -> Result<LoadRequest, AppError> {
        let source = match self.source.as_deref().map(str::trim) {
            None | Some("") => BookSource::default(),
            Some(value) => value.parse::<BookSource>().map_err(AppError::validation)?,
        };

        let sort_order = match self.sort.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(value.parse::<SortOrder>().map_err(AppError::validation)?),
        };

        Ok(LoadRequest {
            source,
            search_term: self.q.map(|q| q.trim().to_string()).unwrap_or_default(),
            sort_order,
        })
    }
}

pub fn is_datastar_request(headers: &HeaderMap) -> bool {
    headers
        .get("datastar-request")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.eq_ignore_ascii_case("true"))
}

pub fn set_datastar_patch_headers(headers: &mut HeaderMap, selector: &'static str) {
    let _ = headers.insert("datastar-selector", HeaderValue::from_static(selector));
    let _ = headers.insert("datastar-mode", HeaderValue::from_static("replace"));
}

pub fn render_fragment<T: Template>(template: T, selector: &'static str) -> Result<Response, AppError> {
    let html = crate::presentation::web::templates::render_template(template)
        .map_err(|err| AppError::unexpected(format!("failed to render fragment: {err}")))?;

    let mut response = Html(html).into_response();
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("text/html"));
    set_datastar_patch_headers(response.headers_mut(), selector);
    Ok(response)
}
