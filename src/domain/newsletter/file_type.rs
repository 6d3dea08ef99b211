//! Newsletter file type value object.

use serde::{Deserialize, Serialize};

/// Format of an uploaded newsletter file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsletterFileType {
    /// RFC 822 email message (`.eml`).
    Eml,
    /// Raw newsletter HTML (`.html` / `.htm`).
    Html,
}

impl NewsletterFileType {
    /// Determines the file type from a filename's extension.
    ///
    /// Matching is case-insensitive. Returns `None` for unsupported
    /// extensions or filenames without one.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let extension = filename.rsplit_once('.')?.1.to_ascii_lowercase();
        match extension.as_str() {
            "eml" => Some(NewsletterFileType::Eml),
            "html" | "htm" => Some(NewsletterFileType::Html),
            _ => None,
        }
    }

    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsletterFileType::Eml => "eml",
            NewsletterFileType::Html => "html",
        }
    }
}

impl std::fmt::Display for NewsletterFileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
