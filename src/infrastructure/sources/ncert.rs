use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::domain::books::DOWNLOAD_UNAVAILABLE_LABEL;
use crate::domain::formatting::{PLACEHOLDER_COVER_URL, sanitize_title};
use crate::domain::{
    BookId, BookSource, DownloadFormat, FetchError, SortOrder, SourceProvider, UnifiedBookRecord,
};
use crate::infrastructure::http::get_json;

pub const DEFAULT_CATALOG_FILE: &str = "ncert_books.json";
const UNKNOWN_SUBJECT: &str = "Unknown Subject";

/// Where the NCERT dataset lives: served over HTTP or read from disk.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CatalogLocation {
    Url(String),
    File(PathBuf),
}

impl FromStr for CatalogLocation {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match Url::parse(trimmed) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(CatalogLocation::Url(url.into())),
            _ => Ok(CatalogLocation::File(PathBuf::from(trimmed))),
        }
    }
}

impl fmt::Display for CatalogLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogLocation::Url(url) => f.write_str(url),
            CatalogLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// One entry of the NCERT dataset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NcertBook {
    pub id: Option<BookId>,
    pub title: Option<String>,
    #[serde(default, rename = "class")]
    pub class_name: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub html_link: Option<String>,
    #[serde(default)]
    pub epub_link: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Numeric class from the leading digits of the last word, so `"Class 7"` and
/// `"Class 7A"` are both 7. Unparseable values sort as 0.
pub fn class_number(class_name: &str) -> u32 {
    class_name
        .split_whitespace()
        .last()
        .map(|token| {
            let end = token
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(token.len());
            &token[..end]
        })
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(0)
}

/// `"Class 7"` becomes `"7"`; other values, such as `"Classic Tales"`, are
/// kept as written.
fn class_label(class_name: &str) -> &str {
    let trimmed = class_name.trim();
    let Some((word, rest)) = trimmed.split_once(char::is_whitespace) else {
        return trimmed;
    };
    if word.eq_ignore_ascii_case("class") && !rest.trim().is_empty() {
        rest.trim()
    } else {
        trimmed
    }
}

/// Case-insensitive substring match over title, class, subject and id.
pub fn matches_term(book: &NcertBook, search_term: &str) -> bool {
    let needle = search_term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let id = book.id.as_ref().map(ToString::to_string).unwrap_or_default();
    let haystack = format!(
        "{} {} {} {}",
        book.title.as_deref().unwrap_or_default(),
        book.class_name.as_deref().unwrap_or_default(),
        book.subject.as_deref().unwrap_or_default(),
        id,
    )
    .to_lowercase();

    haystack.contains(&needle)
}

/// Class is the primary key and title the secondary key. `Ascending` runs
/// low to high; `Descending` and `Popular` run high to low on both keys.
pub fn compare_books(a: &NcertBook, b: &NcertBook, sort_order: SortOrder) -> Ordering {
    let key = |book: &NcertBook| {
        (
            class_number(book.class_name.as_deref().unwrap_or_default()),
            book.title.clone().unwrap_or_default(),
        )
    };
    let ordering = key(a).cmp(&key(b));
    match sort_order {
        SortOrder::Ascending => ordering,
        SortOrder::Descending | SortOrder::Popular => ordering.reverse(),
    }
}

/// Filter and order dataset entries for one search, keeping whatever value
/// travels with each entry.
pub fn select_books<T>(
    entries: Vec<(NcertBook, T)>,
    search_term: &str,
    sort_order: SortOrder,
) -> Vec<T> {
    let mut selected: Vec<(NcertBook, T)> = entries
        .into_iter()
        .filter(|(book, _)| matches_term(book, search_term))
        .collect();
    selected.sort_by(|(a, _), (b, _)| compare_books(a, b, sort_order));
    selected.into_iter().map(|(_, value)| value).collect()
}

pub fn normalize_ncert(book: NcertBook) -> Result<UnifiedBookRecord, FetchError> {
    let id = book
        .id
        .ok_or_else(|| FetchError::malformed("NCERT record is missing `id`"))?;
    let title = book
        .title
        .ok_or_else(|| FetchError::malformed(format!("NCERT record {id} is missing `title`")))?;

    let epub_link = non_empty(book.epub_link.as_deref()).map(ToString::to_string);
    let view_link = non_empty(book.html_link.as_deref())
        .map(ToString::to_string)
        .or_else(|| epub_link.clone())
        .ok_or_else(|| {
            FetchError::malformed(format!("NCERT record {id} has neither `html_link` nor `epub_link`"))
        })?;

    let cover_url = non_empty(book.cover_url.as_deref())
        .unwrap_or(PLACEHOLDER_COVER_URL)
        .to_string();
    let subject = non_empty(book.subject.as_deref()).unwrap_or(UNKNOWN_SUBJECT);
    let class_name = book.class_name.as_deref().unwrap_or_default();

    let (download_label, suggested) = if epub_link.is_some() {
        let format = DownloadFormat::Epub;
        (
            format.download_label().to_string(),
            Some(format!("{}.{}", sanitize_title(&title).trim(), format.extension())),
        )
    } else {
        (DOWNLOAD_UNAVAILABLE_LABEL.to_string(), None)
    };

    Ok(UnifiedBookRecord {
        author_line: format!("Subject: {subject}"),
        meta_line: format!("Class: {}", class_label(class_name)),
        id,
        title,
        cover_url,
        view_link,
        download_link: epub_link,
        download_label,
        suggested_file_name: suggested,
        source: BookSource::Ncert,
    })
}

/// Curated NCERT textbook dataset, filtered and ordered locally.
pub struct NcertProvider {
    client: reqwest::Client,
    location: CatalogLocation,
}

impl NcertProvider {
    pub fn new(client: reqwest::Client, location: CatalogLocation) -> Self {
        Self { client, location }
    }

    async fn load_dataset(&self) -> Result<Vec<Value>, FetchError> {
        match &self.location {
            CatalogLocation::Url(url) => get_json(&self.client, url).await,
            CatalogLocation::File(path) => {
                let bytes = tokio::fs::read(path).await.map_err(|e| {
                    FetchError::request(format!("failed to read {}: {e}", path.display()))
                })?;
                Ok(serde_json::from_slice(&bytes)?)
            }
        }
    }
}

#[async_trait]
impl SourceProvider for NcertProvider {
    fn source(&self) -> BookSource {
        BookSource::Ncert
    }

    fn normalize(&self, raw: Value) -> Result<UnifiedBookRecord, FetchError> {
        let book: NcertBook = serde_json::from_value(raw)?;
        normalize_ncert(book)
    }

    #[tracing::instrument(skip(self), fields(location = %self.location))]
    async fn fetch(
        &self,
        search_term: &str,
        sort_order: SortOrder,
    ) -> Result<Vec<UnifiedBookRecord>, FetchError> {
        let dataset = self.load_dataset().await?;
        let total = dataset.len();

        // Every entry is normalized before filtering, so a malformed dataset
        // fails the same way whatever the search term.
        let entries = dataset
            .into_iter()
            .map(|raw| -> Result<_, FetchError> {
                let book: NcertBook = serde_json::from_value(raw)?;
                let record = normalize_ncert(book.clone())?;
                Ok((book, record))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let selected = select_books(entries, search_term, sort_order);
        debug!(total, matched = selected.len(), "filtered NCERT dataset");

        Ok(selected)
    }
}
