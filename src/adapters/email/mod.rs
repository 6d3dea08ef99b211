//! Email adapters - newsletter text extraction.

mod eml_extractor;

pub use eml_extractor::EmlContentExtractor;
