//! Regex-based newsletter text extractor.
//!
//! Best-effort recovery of readable text from `.eml` and `.html` uploads:
//! header/body split, MIME-boundary skipping, and basic HTML stripping.
//! Deliberately not a MIME parser; newsletters that defeat it simply
//! produce noisier prompt text.

use regex::Regex;

use crate::domain::newsletter::{Newsletter, NewsletterFileType};
use crate::ports::ContentExtractor;

/// Source name used when no heuristic pattern matches.
const UNKNOWN_SOURCE: &str = "Unknown Source";

/// Regex-based implementation of ContentExtractor.
#[derive(Debug, Clone)]
pub struct EmlContentExtractor {
    script_regex: Regex,
    style_regex: Regex,
    tag_regex: Regex,
    blank_lines_regex: Regex,
    spaces_regex: Regex,
    source_patterns: Vec<Regex>,
}

impl Default for EmlContentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EmlContentExtractor {
    /// Creates a new extractor with precompiled regexes.
    pub fn new() -> Self {
        Self {
            script_regex: Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap(),
            style_regex: Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap(),
            tag_regex: Regex::new(r"<[^>]+>").unwrap(),
            blank_lines_regex: Regex::new(r"\n\s*\n").unwrap(),
            spaces_regex: Regex::new(r"[ \t]+").unwrap(),
            // Tried in order; first capture wins.
            source_patterns: vec![
                Regex::new(r"From:.*?<(.+?)>").unwrap(),
                Regex::new(r"From:\s*(.+?)(?:\n|$)").unwrap(),
                Regex::new(r"(?i)Newsletter:\s*(.+?)(?:\n|$)").unwrap(),
                Regex::new(r"(?im)^(.+?)\s*Newsletter").unwrap(),
            ],
        }
    }

    /// Extracts the text body of an `.eml` file.
    ///
    /// Headers end at the first blank line; a `Content-Type: text/html`
    /// header marks the body as HTML. Inside the body, MIME boundary
    /// lines and nested `Content-*` headers are skipped.
    fn extract_from_eml(&self, eml_content: &str) -> String {
        let mut in_body = false;
        let mut is_html = false;
        let mut body_lines = Vec::new();

        for line in eml_content.lines() {
            if !in_body {
                if line.trim().is_empty() {
                    in_body = true;
                    continue;
                }
                if line.to_lowercase().contains("content-type: text/html") {
                    is_html = true;
                }
                continue;
            }

            if line.starts_with("--") || line.to_lowercase().starts_with("content-") {
                continue;
            }
            body_lines.push(line);
        }

        let content = body_lines.join("\n");
        if is_html {
            self.strip_html(&content)
        } else {
            content
        }
    }

    /// Strips tags and decodes the handful of entities newsletters
    /// actually use.
    fn strip_html(&self, html: &str) -> String {
        let without_scripts = self.script_regex.replace_all(html, "");
        let without_styles = self.style_regex.replace_all(&without_scripts, "");
        let without_tags = self.tag_regex.replace_all(&without_styles, " ");

        without_tags
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
    }

    /// Collapses whitespace: blank-line runs to one blank line,
    /// horizontal runs to a single space.
    fn clean_whitespace(&self, content: &str) -> String {
        let collapsed = self.blank_lines_regex.replace_all(content, "\n\n");
        let collapsed = self.spaces_regex.replace_all(&collapsed, " ");
        collapsed.trim().to_string()
    }
}

impl ContentExtractor for EmlContentExtractor {
    fn extract_text(&self, newsletter: &Newsletter) -> String {
        let content = match newsletter.file_type() {
            NewsletterFileType::Eml => self.extract_from_eml(newsletter.file_content()),
            NewsletterFileType::Html => self.strip_html(newsletter.file_content()),
        };
        self.clean_whitespace(&content)
    }

    fn extract_source_name(&self, content: &str) -> String {
        for pattern in &self.source_patterns {
            if let Some(caps) = pattern.captures(content) {
                let name = caps[1].trim();
                if !name.is_empty() {
                    return name.to_string();
                }
            }
        }
        UNKNOWN_SOURCE.to_string()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> EmlContentExtractor {
        EmlContentExtractor::new()
    }

    fn eml_newsletter(content: &str) -> Newsletter {
        Newsletter::new("test.eml".to_string(), content.to_string()).unwrap()
    }

    #[test]
    fn splits_headers_from_plain_text_body() {
        let newsletter = eml_newsletter(
            "From: Tech Weekly <news@tech.example>\nSubject: Issue 42\n\nHello readers,\nthis week was busy.\n",
        );
        let text = extractor().extract_text(&newsletter);
        assert_eq!(text, "Hello readers,\nthis week was busy.");
    }

    #[test]
    fn skips_mime_boundaries_and_nested_headers() {
        let newsletter = eml_newsletter(
            "Subject: x\n\n--boundary123\nContent-Transfer-Encoding: 7bit\nactual text\n--boundary123--\n",
        );
        let text = extractor().extract_text(&newsletter);
        assert_eq!(text, "actual text");
    }

    #[test]
    fn strips_html_when_headers_declare_it() {
        let newsletter = eml_newsletter(
            "Content-Type: text/html\n\n<html><style>p{}</style><p>Hello &amp; welcome</p></html>\n",
        );
        let text = extractor().extract_text(&newsletter);
        assert_eq!(text, "Hello & welcome");
    }

    #[test]
    fn html_upload_is_stripped_without_headers() {
        let newsletter = Newsletter::new(
            "issue.html".to_string(),
            "<script>alert(1)</script><h1>Big News</h1><p>Details&nbsp;inside</p>".to_string(),
        )
        .unwrap();
        let text = extractor().extract_text(&newsletter);
        assert_eq!(text, "Big News Details inside");
    }

    #[test]
    fn collapses_blank_line_runs() {
        let newsletter = eml_newsletter("Subject: x\n\nfirst\n\n\n\nsecond\n");
        let text = extractor().extract_text(&newsletter);
        assert_eq!(text, "first\n\nsecond");
    }

    #[test]
    fn source_name_prefers_angle_bracket_address() {
        let name = extractor()
            .extract_source_name("From: Tech Weekly <news@tech.example>\nbody");
        assert_eq!(name, "news@tech.example");
    }

    #[test]
    fn source_name_falls_back_through_patterns() {
        let ex = extractor();
        assert_eq!(ex.extract_source_name("From: Morning Brew\nbody"), "Morning Brew");
        assert_eq!(ex.extract_source_name("newsletter: The Batch\n"), "The Batch");
        assert_eq!(ex.extract_source_name("Pragmatic Engineer Newsletter\n"), "Pragmatic Engineer");
        assert_eq!(ex.extract_source_name("nothing to see"), UNKNOWN_SOURCE);
    }
}
