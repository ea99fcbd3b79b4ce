use crate::domain::UnifiedBookRecord;

/// Everything a card template needs, already decided.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookCardView {
    pub id: String,
    pub source: &'static str,
    pub title: String,
    pub cover_url: String,
    pub cover_alt: String,
    pub view_link: String,
    pub author_line: String,
    pub meta_line: String,
    pub download: DownloadView,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DownloadView {
    Available {
        href: String,
        label: String,
        file_name: Option<String>,
    },
    Disabled {
        label: String,
    },
}

impl DownloadView {
    pub fn href(&self) -> Option<&str> {
        match self {
            DownloadView::Available { href, .. } => Some(href),
            DownloadView::Disabled { .. } => None,
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        match self {
            DownloadView::Available { file_name, .. } => file_name.as_deref(),
            DownloadView::Disabled { .. } => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DownloadView::Available { label, .. } | DownloadView::Disabled { label } => label,
        }
    }
}

impl BookCardView {
    pub fn from_domain(record: &UnifiedBookRecord) -> Self {
        let download = match (&record.download_link, record.is_downloadable()) {
            (Some(href), true) => DownloadView::Available {
                href: href.clone(),
                label: record.download_label.clone(),
                file_name: record.suggested_file_name.clone(),
            },
            _ => DownloadView::Disabled {
                label: record.download_label.clone(),
            },
        };

        Self {
            id: record.id.to_string(),
            source: record.source.as_str(),
            title: record.title.clone(),
            cover_url: record.cover_url.clone(),
            cover_alt: format!("Cover of {}", record.title),
            view_link: record.view_link.clone(),
            author_line: record.author_line.clone(),
            meta_line: record.meta_line.clone(),
            download,
        }
    }
}
