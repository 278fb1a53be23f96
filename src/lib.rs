//! Quick Translate - launcher action for Google Translate
//!
//! This library turns the unofficial `translate_a/single` payload into the
//! nested result lists a desktop launcher displays: translations, examples,
//! related words, synonyms, usages, and a menu of other target languages.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod processors;

// Re-export key types for convenience
pub use core::{
    action::TranslateAction,
    client::{build_url, GoogleTranslateClient, TranslationBackend},
    config::TranslatorConfig,
    errors::TranslationError,
    models::{ItemAction, ResultItem, TranslationQuery, TranslationResponse},
    throttle::Throttle,
};

pub use processors::{
    formatter::format,
    languages::{build_menu, LanguageEntry, LANGUAGES},
    render::render_items,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
