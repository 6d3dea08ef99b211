//! Newsletter aggregate entity.
//!
//! A newsletter is an uploaded source file awaiting (or having received)
//! digest processing. The raw file content is kept verbatim so processing
//! can be re-run against the original upload.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{NewsletterId, Timestamp};

use super::errors::NewsletterError;
use super::file_type::NewsletterFileType;

/// Maximum accepted upload size in bytes (10 MiB).
pub const MAX_FILE_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Newsletter aggregate - an uploaded newsletter file.
///
/// # Invariants
///
/// - `filename` is non-empty and carries a supported extension
/// - `file_content` is non-empty and at most [`MAX_FILE_SIZE_BYTES`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Newsletter {
    /// Unique identifier for this newsletter.
    id: NewsletterId,

    /// Original filename as uploaded.
    filename: String,

    /// Detected file format.
    file_type: NewsletterFileType,

    /// Raw file content, unmodified.
    file_content: String,

    /// When the file was uploaded.
    uploaded_at: Timestamp,
}

impl Newsletter {
    /// Create a new newsletter from an upload.
    ///
    /// # Errors
    ///
    /// - `EmptyFilename` / `EmptyContent` for blank inputs
    /// - `UnsupportedFileType` for extensions other than `.eml`/`.html`/`.htm`
    /// - `FileTooLarge` when the content exceeds [`MAX_FILE_SIZE_BYTES`]
    pub fn new(filename: String, file_content: String) -> Result<Self, NewsletterError> {
        if filename.trim().is_empty() {
            return Err(NewsletterError::EmptyFilename);
        }
        if file_content.is_empty() {
            return Err(NewsletterError::EmptyContent);
        }
        if file_content.len() > MAX_FILE_SIZE_BYTES {
            return Err(NewsletterError::FileTooLarge {
                size_bytes: file_content.len(),
                max_bytes: MAX_FILE_SIZE_BYTES,
            });
        }
        let file_type = NewsletterFileType::from_filename(&filename)
            .ok_or_else(|| NewsletterError::UnsupportedFileType {
                filename: filename.clone(),
            })?;

        Ok(Self {
            id: NewsletterId::new(),
            filename,
            file_type,
            file_content,
            uploaded_at: Timestamp::now(),
        })
    }

    /// Reconstitute a newsletter from persistence (no validation).
    pub fn reconstitute(
        id: NewsletterId,
        filename: String,
        file_type: NewsletterFileType,
        file_content: String,
        uploaded_at: Timestamp,
    ) -> Self {
        Self {
            id,
            filename,
            file_type,
            file_content,
            uploaded_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the newsletter ID.
    pub fn id(&self) -> &NewsletterId {
        &self.id
    }

    /// Returns the original filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the detected file type.
    pub fn file_type(&self) -> NewsletterFileType {
        self.file_type
    }

    /// Returns the raw file content.
    pub fn file_content(&self) -> &str {
        &self.file_content
    }

    /// Returns the upload timestamp.
    pub fn uploaded_at(&self) -> &Timestamp {
        &self.uploaded_at
    }

    /// Returns the content size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.file_content.len()
    }

    /// Returns the filename without its `.eml` extension, if present.
    ///
    /// Used as the digest title fallback when the generated markdown
    /// carries no `#` heading.
    pub fn title_fallback(&self) -> String {
        self.filename
            .strip_suffix(".eml")
            .unwrap_or(&self.filename)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_eml_upload() {
        let newsletter =
            Newsletter::new("weekly.eml".to_string(), "From: a@b.c\n\nBody".to_string()).unwrap();
        assert_eq!(newsletter.filename(), "weekly.eml");
        assert_eq!(newsletter.file_type(), NewsletterFileType::Eml);
        assert_eq!(newsletter.size_bytes(), 17);
    }

    #[test]
    fn rejects_unsupported_extension() {
        let err = Newsletter::new("notes.pdf".to_string(), "content".to_string()).unwrap_err();
        assert!(matches!(err, NewsletterError::UnsupportedFileType { .. }));
    }

    #[test]
    fn rejects_oversized_content() {
        let big = "x".repeat(MAX_FILE_SIZE_BYTES + 1);
        let err = Newsletter::new("big.html".to_string(), big).unwrap_err();
        assert!(matches!(err, NewsletterError::FileTooLarge { .. }));
    }

    #[test]
    fn rejects_empty_inputs() {
        assert!(matches!(
            Newsletter::new("  ".to_string(), "content".to_string()),
            Err(NewsletterError::EmptyFilename)
        ));
        assert!(matches!(
            Newsletter::new("a.eml".to_string(), String::new()),
            Err(NewsletterError::EmptyContent)
        ));
    }

    #[test]
    fn title_fallback_strips_eml_extension_only() {
        let eml = Newsletter::new("roundup.eml".to_string(), "x".to_string()).unwrap();
        assert_eq!(eml.title_fallback(), "roundup");

        let html = Newsletter::new("roundup.html".to_string(), "x".to_string()).unwrap();
        assert_eq!(html.title_fallback(), "roundup.html");
    }
}
