//! Application handlers grouped by aggregate.

pub mod digest;
pub mod newsletter;
