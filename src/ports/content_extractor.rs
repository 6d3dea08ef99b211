//! Content extractor port.
//!
//! Turns an uploaded newsletter file into plain text suitable for the AI
//! prompt. Extraction is best-effort text recovery, not MIME parsing, so
//! the operations are total.

use crate::domain::newsletter::Newsletter;

/// Port for newsletter text extraction.
pub trait ContentExtractor: Send + Sync {
    /// Extracts readable plain text from the newsletter file.
    fn extract_text(&self, newsletter: &Newsletter) -> String;

    /// Guesses the newsletter's source name from its extracted text.
    ///
    /// Falls back to `"Unknown Source"` when no pattern matches.
    fn extract_source_name(&self, content: &str) -> String;
}
