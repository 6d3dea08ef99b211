//! Domain layer - pure types and logic, no I/O.

pub mod digest;
pub mod foundation;
pub mod newsletter;
