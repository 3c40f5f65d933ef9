/// Data structures for Site Marks
use serde::{Deserialize, Serialize};

/// A saved site: display label plus the URL exactly as the user typed it
///
/// Stored as `{"name": ..., "URL": ...}`; the capitalized key is what
/// existing saved data uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkRecord {
    pub name: String,
    #[serde(rename = "URL")]
    pub url: String,
}

impl BookmarkRecord {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> BookmarkRecord {
        BookmarkRecord {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Link target for the Visit action
    pub fn visit_url(&self) -> String {
        visit_url(&self.url)
    }
}

/// Prefix `https://` unless the url already carries an http(s) scheme
pub fn visit_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}
