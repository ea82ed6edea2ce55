//! Multi-Translate - translate text through a LibreTranslate-compatible HTTP API
//!
//! The library wraps a single outbound request per translation: it builds the
//! `{q, source, target, format}` payload, posts it to the configured (or
//! default public) endpoint and extracts the translated text from whichever
//! response shape the backend uses.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    client::TranslationClient,
    config::{EndpointConfig, TranslatorConfig, DEFAULT_ENDPOINT},
    errors::{Result, TranslationError},
    models::{resolve_language, TranslationRequest, AUTO_DETECT, LANGUAGES},
    response::interpret_body,
};
