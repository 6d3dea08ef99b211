//! Digest command and query handlers.

mod get_digest;
mod list_digests;
mod process_newsletter;

pub use get_digest::{DigestView, GetDigestHandler, GetDigestQuery};
pub use list_digests::{ListDigestsHandler, ListDigestsQuery};
pub use process_newsletter::{
    ProcessNewsletterCommand, ProcessNewsletterHandler, ProcessNewsletterResult,
};
