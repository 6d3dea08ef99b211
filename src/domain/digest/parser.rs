//! Digest markdown parser.
//!
//! Recovers structured sections from the semi-structured markdown digest
//! produced by the AI model. The model is instructed to follow a fixed
//! section skeleton but its output is best-effort, so every extraction
//! step degrades to an empty value instead of failing: a partially-empty
//! [`ParsedDigest`] is a normal, renderable outcome.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Title used when the markdown carries no `#` heading at all.
pub const UNTITLED_DIGEST: &str = "Untitled Digest";

/// Prefix the model is asked to put in front of the digest headline.
const TITLE_PREFIX: &str = "Newsletter Digest: ";

/// Structured view of an AI-generated digest document.
///
/// Immutable once produced; sequences preserve source document order.
/// Fields for absent sections hold empty strings or empty vecs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDigest {
    /// Digest headline.
    pub title: String,
    /// Free text from the "Executive Summary" section.
    pub executive_summary: String,
    /// Themes from the "Key Themes" section, in document order.
    pub themes: Vec<DigestTheme>,
    /// Quotes from the "Notable Quotes" section, in document order.
    pub notable_quotes: Vec<String>,
    /// Items from the "Action Items & Takeaways" section, in document order.
    pub action_items: Vec<String>,
    /// Free text from the "Source Information" section.
    pub source_info: String,
}

/// One theme block from the "Key Themes" section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestTheme {
    /// First line after the `### Theme N:` marker.
    pub title: String,
    /// One-line synopsis. When the block has no free-text line this
    /// duplicates the first detail bullet.
    pub summary: String,
    /// De-markered bullet lines, in original order.
    pub details: Vec<String>,
}

/// Regex-based parser for AI digest markdown.
///
/// Total over arbitrary input: `parse` never fails and never allocates
/// anything but the returned record. Patterns are precompiled so the
/// parser can be shared across requests.
#[derive(Debug, Clone)]
pub struct DigestMarkdownParser {
    title_regex: Regex,
    executive_summary_regex: Regex,
    key_themes_regex: Regex,
    notable_quotes_regex: Regex,
    action_items_regex: Regex,
    source_info_regex: Regex,
    theme_marker_regex: Regex,
}

impl Default for DigestMarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DigestMarkdownParser {
    /// Creates a new parser with precompiled regexes.
    pub fn new() -> Self {
        Self {
            // Matches the first level-1 heading: "# <title>"
            title_regex: Regex::new(r"(?m)^#\s+(.+)$").unwrap(),
            executive_summary_regex: section_regex("Executive Summary"),
            key_themes_regex: section_regex("Key Themes"),
            notable_quotes_regex: section_regex("Notable Quotes"),
            action_items_regex: section_regex("Action Items & Takeaways"),
            source_info_regex: section_regex("Source Information"),
            // Matches theme block markers: "### Theme 1:", "### Theme 2:", ...
            theme_marker_regex: Regex::new(r"### Theme \d+:").unwrap(),
        }
    }

    /// Parses one markdown digest document into a [`ParsedDigest`].
    ///
    /// Total function: malformed or missing sections yield empty fields,
    /// never an error. Identical input always yields an identical record.
    pub fn parse(&self, markdown: &str) -> ParsedDigest {
        ParsedDigest {
            title: self.extract_title(markdown).unwrap_or_else(|| UNTITLED_DIGEST.to_string()),
            executive_summary: extract_section(&self.executive_summary_regex, markdown),
            themes: self.extract_themes(markdown),
            notable_quotes: self.extract_quotes(markdown),
            action_items: self.extract_action_items(markdown),
            source_info: extract_section(&self.source_info_regex, markdown),
        }
    }

    /// Extracts the digest title from the first `#` heading, with the
    /// `"Newsletter Digest: "` prefix stripped.
    ///
    /// Returns `None` when no level-1 heading exists; callers choose their
    /// own fallback (the parser uses [`UNTITLED_DIGEST`], the processing
    /// pipeline falls back to the newsletter filename).
    pub fn extract_title(&self, markdown: &str) -> Option<String> {
        self.title_regex
            .captures(markdown)
            .map(|caps| caps[1].replacen(TITLE_PREFIX, "", 1))
    }

    /// Extracts themes from the "Key Themes" section.
    ///
    /// The section is split on `### Theme N:` markers; text before the
    /// first marker is section preamble and is discarded. Segments are
    /// never dropped once a marker produced them, even when degenerate.
    fn extract_themes(&self, markdown: &str) -> Vec<DigestTheme> {
        let section = extract_section(&self.key_themes_regex, markdown);
        if section.is_empty() {
            return Vec::new();
        }

        let mut themes = Vec::new();
        for segment in self.theme_marker_regex.split(&section).skip(1) {
            let segment = segment.trim();
            let mut lines = segment.lines();

            // First line is the theme title.
            let title = lines.next().unwrap_or("").trim().to_string();

            let mut details = Vec::new();
            let mut summary = String::new();

            for line in lines {
                let trimmed = line.trim();
                if let Some(rest) = trimmed.strip_prefix("- ") {
                    details.push(rest.to_string());
                } else if !trimmed.is_empty() && summary.is_empty() {
                    // First free-text line becomes the summary, once only.
                    summary = trimmed.to_string();
                }
            }

            // No explicit summary line: fall back to the first detail,
            // duplicating it into both fields.
            if summary.is_empty() {
                if let Some(first) = details.first() {
                    summary = first.clone();
                }
            }

            themes.push(DigestTheme {
                title,
                summary,
                details,
            });
        }

        themes
    }

    /// Extracts quotes from the "Notable Quotes" section.
    ///
    /// Each `> `-prefixed line is one independent entry; surrounding
    /// double-quote characters are stripped one each, independently.
    fn extract_quotes(&self, markdown: &str) -> Vec<String> {
        let section = extract_section(&self.notable_quotes_regex, markdown);

        section
            .lines()
            .filter_map(|line| {
                let trimmed = line.trim();
                let quote = trimmed.strip_prefix("> ")?;
                let quote = quote.strip_prefix('"').unwrap_or(quote);
                let quote = quote.strip_suffix('"').unwrap_or(quote);
                Some(quote.to_string())
            })
            .collect()
    }

    /// Extracts bullets from the "Action Items & Takeaways" section.
    fn extract_action_items(&self, markdown: &str) -> Vec<String> {
        let section = extract_section(&self.action_items_regex, markdown);

        section
            .lines()
            .filter_map(|line| line.trim().strip_prefix("- ").map(str::to_string))
            .collect()
    }
}

/// Builds the extraction regex for one `## <label>` section.
///
/// Captures everything after the heading line up to (but excluding) the
/// next level-2 heading or end of input. Case-insensitive on the label;
/// only the first occurrence is used.
fn section_regex(label: &str) -> Regex {
    Regex::new(&format!(
        r"(?is)## {}\s*\n(.*?)(?:\n## |\z)",
        regex::escape(label)
    ))
    .unwrap()
}

/// Applies a section regex, trimming the captured block.
///
/// An absent heading yields the empty string.
fn extract_section(regex: &Regex, markdown: &str) -> String {
    regex
        .captures(markdown)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default()
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
