use url::Url;

/// Cover shown when a source provides no image.
pub const PLACEHOLDER_COVER_URL: &str = "https://via.placeholder.com/200x300?text=No+Cover";

/// Upgrade an `http://` URL to `https://`. Other URLs are returned unchanged.
pub fn force_https(url: &str) -> String {
    let trimmed = url.trim();
    match Url::parse(trimmed) {
        Ok(mut parsed) if parsed.scheme() == "http" => match parsed.set_scheme("https") {
            Ok(()) => parsed.into(),
            Err(()) => trimmed.to_string(),
        },
        _ => trimmed.to_string(),
    }
}

/// Strip every character that is neither a word character (`[A-Za-z0-9_]`)
/// nor whitespace.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

/// Build a download filename hint: `<sanitized title> - <author>.<ext>`.
pub fn suggested_file_name(title: &str, author: &str, extension: &str) -> String {
    format!("{} - {author}.{extension}", sanitize_title(title))
}
