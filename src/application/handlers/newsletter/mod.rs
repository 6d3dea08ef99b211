//! Newsletter command and query handlers.

mod get_newsletter;
mod upload_newsletter;

pub use get_newsletter::{GetNewsletterHandler, GetNewsletterQuery};
pub use upload_newsletter::{
    UploadNewsletterCommand, UploadNewsletterHandler, UploadNewsletterResult,
};
