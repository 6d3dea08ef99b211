//! Digest module - AI-generated newsletter digests.
//!
//! Owns the digest record and the markdown parser that recovers a
//! structured view from the model's free-text output.

#[allow(clippy::module_inception)]
mod digest;
mod errors;
mod parser;

pub use digest::Digest;
pub use errors::DigestError;
pub use parser::{DigestMarkdownParser, DigestTheme, ParsedDigest, UNTITLED_DIGEST};
