use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a book within its source catalog.
///
/// Gutendex uses integers; the NCERT dataset uses either integers or strings.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookId {
    Number(u64),
    Text(String),
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookId::Number(value) => write!(f, "{value}"),
            BookId::Text(value) => f.write_str(value),
        }
    }
}

impl From<u64> for BookId {
    fn from(value: u64) -> Self {
        BookId::Number(value)
    }
}

impl From<&str> for BookId {
    fn from(value: &str) -> Self {
        BookId::Text(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookSource {
    #[default]
    Gutenberg,
    Ncert,
}

impl BookSource {
    pub const ALL: [BookSource; 2] = [BookSource::Gutenberg, BookSource::Ncert];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookSource::Gutenberg => "gutenberg",
            BookSource::Ncert => "ncert",
        }
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            BookSource::Gutenberg => "Project Gutenberg",
            BookSource::Ncert => "NCERT",
        }
    }
}

impl fmt::Display for BookSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gutenberg" => Ok(BookSource::Gutenberg),
            "ncert" => Ok(BookSource::Ncert),
            other => Err(format!("unknown book source: {other}")),
        }
    }
}

/// Requested ordering. Each source interprets it with its own vocabulary.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Popular,
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Popular => "popular",
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "popular" => Ok(SortOrder::Popular),
            "ascending" | "asc" => Ok(SortOrder::Ascending),
            "descending" | "desc" => Ok(SortOrder::Descending),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

/// A downloadable artifact format, in the order downloads are preferred.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DownloadFormat {
    Epub,
    Pdf,
    PlainText,
}

impl DownloadFormat {
    pub const PRIORITY: [DownloadFormat; 3] = [
        DownloadFormat::Epub,
        DownloadFormat::Pdf,
        DownloadFormat::PlainText,
    ];

    pub fn mime_fragment(&self) -> &'static str {
        match self {
            DownloadFormat::Epub => "application/epub+zip",
            DownloadFormat::Pdf => "application/pdf",
            DownloadFormat::PlainText => "text/plain",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DownloadFormat::Epub => "epub",
            DownloadFormat::Pdf => "pdf",
            DownloadFormat::PlainText => "txt",
        }
    }

    pub fn download_label(&self) -> &'static str {
        match self {
            DownloadFormat::Epub => "Download EPUB",
            DownloadFormat::Pdf => "Download PDF",
            DownloadFormat::PlainText => "Download TXT",
        }
    }
}

pub const DOWNLOAD_UNAVAILABLE_LABEL: &str = "Download Unavailable";

/// The source-agnostic book representation consumed by the card renderer.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct UnifiedBookRecord {
    pub id: BookId,
    pub title: String,
    pub author_line: String,
    pub meta_line: String,
    pub cover_url: String,
    pub view_link: String,
    pub download_link: Option<String>,
    pub download_label: String,
    pub suggested_file_name: Option<String>,
    pub source: BookSource,
}

impl UnifiedBookRecord {
    /// Whether the download control should be rendered as an active link.
    pub fn is_downloadable(&self) -> bool {
        self.download_link.as_deref().is_some_and(|link| !link.is_empty())
            && self.download_label != DOWNLOAD_UNAVAILABLE_LABEL
    }
}
