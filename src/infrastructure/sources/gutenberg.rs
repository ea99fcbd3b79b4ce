use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::books::DOWNLOAD_UNAVAILABLE_LABEL;
use crate::domain::formatting::{PLACEHOLDER_COVER_URL, force_https, suggested_file_name};
use crate::domain::{
    BookId, BookSource, DownloadFormat, FetchError, SortOrder, SourceProvider, UnifiedBookRecord,
};
use crate::infrastructure::http::get_json;

pub const GUTENDEX_URL: &str = "https://gutendex.com";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

const EBOOK_PAGE_BASE: &str = "https://www.gutenberg.org/ebooks";
const COVER_MIME_TYPES: [&str; 2] = ["image/jpeg", "image/png"];
const HTML_MIME_TYPE: &str = "text/html";

// --- Gutendex wire types ---

#[derive(Debug, Deserialize)]
struct GutendexPage {
    results: Vec<Value>,
}

/// One entry of a Gutendex `results` array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GutenbergBook {
    pub id: Option<u64>,
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Option<Vec<GutenbergPerson>>,
    /// MIME type to URL, in payload order.
    #[serde(default)]
    pub formats: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GutenbergPerson {
    #[serde(default)]
    pub name: Option<String>,
}

// --- Normalization ---

/// First URL whose MIME key contains `mime_fragment`, in payload order.
fn find_format(formats: &Map<String, Value>, mime_fragment: &str) -> Option<String> {
    formats
        .iter()
        .filter(|(key, _)| key.contains(mime_fragment))
        .filter_map(|(_, value)| value.as_str())
        .map(str::trim)
        .find(|url| !url.is_empty())
        .map(ToString::to_string)
}

pub fn normalize_gutenberg(book: GutenbergBook) -> Result<UnifiedBookRecord, FetchError> {
    let id = book
        .id
        .ok_or_else(|| FetchError::malformed("Gutenberg record is missing `id`"))?;
    let title = book
        .title
        .ok_or_else(|| FetchError::malformed(format!("Gutenberg record {id} is missing `title`")))?;

    let author = book
        .authors
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|person| person.name)
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

    let formats = book.formats.unwrap_or_default();

    let view_link = find_format(&formats, HTML_MIME_TYPE)
        .map(|url| force_https(&url))
        .unwrap_or_else(|| format!("{EBOOK_PAGE_BASE}/{id}"));

    let cover_url = COVER_MIME_TYPES
        .iter()
        .find_map(|mime| find_format(&formats, mime))
        .map(|url| force_https(&url))
        .unwrap_or_else(|| PLACEHOLDER_COVER_URL.to_string());

    let download = DownloadFormat::PRIORITY
        .iter()
        .find_map(|format| find_format(&formats, format.mime_fragment()).map(|url| (*format, url)));

    let (download_link, download_label, suggested) = match download {
        Some((format, url)) => (
            Some(force_https(&url)),
            format.download_label().to_string(),
            Some(suggested_file_name(&title, &author, format.extension())),
        ),
        None => (None, DOWNLOAD_UNAVAILABLE_LABEL.to_string(), None),
    };

    Ok(UnifiedBookRecord {
        id: BookId::Number(id),
        author_line: format!("Author: {author}"),
        meta_line: format!("Gutenberg ID: {id}"),
        title,
        cover_url,
        view_link,
        download_link,
        download_label,
        suggested_file_name: suggested,
        source: BookSource::Gutenberg,
    })
}

// --- Provider ---

/// Value of Gutendex's `sort` query parameter for a sort order.
pub fn sort_param(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Popular => "popular",
        SortOrder::Ascending => "id",
        SortOrder::Descending => "-id",
    }
}

/// Remote catalog backed by the Gutendex API. Searching and ordering are
/// delegated entirely to the API.
pub struct GutenbergProvider {
    client: reqwest::Client,
    base_url: String,
}

impl GutenbergProvider {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// `<base>/books/?search=<term>&sort=<order>&`. An empty term omits `search`.
    pub fn search_url(&self, search_term: &str, sort_order: SortOrder) -> String {
        let mut url = format!("{}/books/?", self.base_url);
        let term = search_term.trim();
        if !term.is_empty() {
            let encoded: String = url::form_urlencoded::byte_serialize(term.as_bytes()).collect();
            url.push_str(&format!("search={encoded}&"));
        }
        url.push_str(&format!("sort={}&", sort_param(sort_order)));
        url
    }
}

#[async_trait]
impl SourceProvider for GutenbergProvider {
    fn source(&self) -> BookSource {
        BookSource::Gutenberg
    }

    fn normalize(&self, raw: Value) -> Result<UnifiedBookRecord, FetchError> {
        let book: GutenbergBook = serde_json::from_value(raw)?;
        normalize_gutenberg(book)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch(
        &self,
        search_term: &str,
        sort_order: SortOrder,
    ) -> Result<Vec<UnifiedBookRecord>, FetchError> {
        let url = self.search_url(search_term, sort_order);
        let page: GutendexPage = get_json(&self.client, &url).await?;
        debug!(url, count = page.results.len(), "fetched Gutendex results");

        page.results
            .into_iter()
            .map(|raw| self.normalize(raw))
            .collect()
    }
}
