//! Internationalization for the embedvideo extension
//!
//! This crate provides the bundled message catalogs with language
//! negotiation and Fluent-based message formatting.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lang;
pub mod translator;

pub use lang::{available_languages, negotiate, LanguagePrefs};
pub use translator::{Translator, TranslatorError};
