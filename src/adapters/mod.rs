//! Adapters layer - implementations of ports backed by infrastructure.

pub mod ai;
pub mod email;
pub mod http;
pub mod postgres;
