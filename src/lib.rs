//! NewsDigest - AI Newsletter Digest Service
//!
//! This crate turns uploaded newsletter files (.eml or HTML) into structured
//! markdown digests via an AI summarization pipeline, and parses those digests
//! back into sections for display.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
