//! ProcessNewsletterHandler - runs the extract/summarize/persist pipeline.

use std::sync::Arc;

use crate::domain::digest::{Digest, DigestError, DigestMarkdownParser};
use crate::domain::foundation::NewsletterId;
use crate::ports::{
    AiProvider, CompletionRequest, ContentExtractor, DigestRepository, MessageRole,
    NewsletterRepository,
};

/// Extracted content beyond this many characters is cut before prompting,
/// leaving room for the instructions within the model's context window.
const MAX_CONTENT_CHARS: usize = 10_000;

const TRUNCATION_NOTICE: &str = "\n\n[Content truncated due to length...]";

const MAX_COMPLETION_TOKENS: u32 = 2_000;

const COMPLETION_TEMPERATURE: f32 = 0.3;

/// Command to process an uploaded newsletter into a digest.
#[derive(Debug, Clone)]
pub struct ProcessNewsletterCommand {
    pub newsletter_id: NewsletterId,
}

/// Result of a completed processing run.
#[derive(Debug, Clone)]
pub struct ProcessNewsletterResult {
    pub digest: Digest,
}

/// Handler orchestrating the newsletter-to-digest pipeline.
///
/// The pipeline is: load the newsletter, extract plain text from its raw
/// file content, ask the AI provider for a structured markdown digest, then
/// persist the digest with a title pulled from the markdown heading.
pub struct ProcessNewsletterHandler {
    newsletter_repository: Arc<dyn NewsletterRepository>,
    digest_repository: Arc<dyn DigestRepository>,
    content_extractor: Arc<dyn ContentExtractor>,
    ai_provider: Arc<dyn AiProvider>,
    parser: DigestMarkdownParser,
}

impl ProcessNewsletterHandler {
    pub fn new(
        newsletter_repository: Arc<dyn NewsletterRepository>,
        digest_repository: Arc<dyn DigestRepository>,
        content_extractor: Arc<dyn ContentExtractor>,
        ai_provider: Arc<dyn AiProvider>,
    ) -> Self {
        Self {
            newsletter_repository,
            digest_repository,
            content_extractor,
            ai_provider,
            parser: DigestMarkdownParser::new(),
        }
    }

    pub async fn handle(
        &self,
        cmd: ProcessNewsletterCommand,
    ) -> Result<ProcessNewsletterResult, DigestError> {
        let newsletter = self
            .newsletter_repository
            .find_by_id(&cmd.newsletter_id)
            .await?
            .ok_or_else(|| DigestError::newsletter_not_found(cmd.newsletter_id))?;

        let extracted = self.content_extractor.extract_text(&newsletter);
        if extracted.trim().is_empty() {
            return Err(DigestError::EmptyNewsletterContent(*newsletter.id()));
        }
        let content = truncate_content(&extracted);

        tracing::info!(
            newsletter_id = %newsletter.id(),
            filename = newsletter.filename(),
            content_chars = content.chars().count(),
            "Processing newsletter"
        );

        let request = CompletionRequest::new()
            .with_system_prompt(digest_system_prompt())
            .with_message(
                MessageRole::User,
                format!(
                    "Please analyze this newsletter content and create a comprehensive \
                     markdown digest:\n\n{content}"
                ),
            )
            .with_max_tokens(MAX_COMPLETION_TOKENS)
            .with_temperature(COMPLETION_TEMPERATURE);

        let response = self
            .ai_provider
            .complete(request)
            .await
            .map_err(|err| DigestError::Provider(err.to_string()))?;

        let markdown = response.content;
        let title = self
            .parser
            .extract_title(&markdown)
            .unwrap_or_else(|| newsletter.title_fallback());
        let source_name = self.content_extractor.extract_source_name(&content);

        let digest = Digest::new(
            *newsletter.id(),
            title,
            source_name,
            markdown,
        );
        self.digest_repository.save(&digest).await?;

        tracing::info!(
            digest_id = %digest.id(),
            newsletter_id = %newsletter.id(),
            title = digest.title(),
            "Digest created"
        );

        Ok(ProcessNewsletterResult { digest })
    }
}

fn truncate_content(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(MAX_CONTENT_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}{TRUNCATION_NOTICE}")
    } else {
        head
    }
}

fn digest_system_prompt() -> String {
    let today = chrono::Utc::now().format("%-m/%-d/%Y");
    format!(
        r#"You are an expert newsletter analyst. Create a comprehensive markdown digest of the newsletter content.

Structure your response as follows:
# Newsletter Digest: [Title]

## Executive Summary
A 2-3 sentence overview of the main points.

## Key Themes
### Theme 1: [Theme Name]
- Key insight 1
- Key insight 2
- Supporting details

### Theme 2: [Theme Name]
- Key insight 1
- Key insight 2
- Supporting details

(Continue for 3-5 themes as appropriate)

## Notable Quotes
> "Important quote 1"

> "Important quote 2"

## Action Items & Takeaways
- Actionable insight 1
- Actionable insight 2
- Key learning 3

## Source Information
- **Source**: [Newsletter name if identifiable]
- **Processed**: {today}

Focus on extracting valuable insights, identifying patterns, and presenting information in a scannable format."#
    )
}
