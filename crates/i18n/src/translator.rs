//! Fluent-based message formatting
//!
//! Wraps a [`FluentBundle`] over the bundled catalogs. Bidi isolation
//! marks are disabled so formatted output is byte-stable for hosts that
//! splice it straight into markup.

use crate::lang::{self, LanguagePrefs};
use fluent::{FluentArgs, FluentBundle, FluentResource};
use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// Errors that can occur while building a translator
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranslatorError {
    /// No bundled catalog for the requested locale
    #[error("no bundled catalog for locale: {0}")]
    UnknownLocale(String),

    /// Bundled catalog failed to parse or load
    #[error("invalid catalog for locale: {0}")]
    Catalog(String),
}

/// Result type for translator operations
pub type Result<T> = std::result::Result<T, TranslatorError>;

const EN_US_FTL: &str = include_str!("../resources/en-US.ftl");

fn catalog(langid: &LanguageIdentifier) -> Option<&'static str> {
    match langid.to_string().as_str() {
        "en-US" => Some(EN_US_FTL),
        _ => None,
    }
}

/// Formats messages from one bundled catalog.
pub struct Translator {
    bundle: FluentBundle<FluentResource>,
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator").finish_non_exhaustive()
    }
}

impl Translator {
    /// Build a translator for one bundled locale tag.
    pub fn new(locale: &str) -> Result<Self> {
        let langid: LanguageIdentifier = locale
            .parse()
            .map_err(|_| TranslatorError::UnknownLocale(locale.to_string()))?;
        let source = catalog(&langid).ok_or_else(|| {
            TranslatorError::UnknownLocale(locale.to_string())
        })?;

        let resource = FluentResource::try_new(source.to_string())
            .map_err(|_| TranslatorError::Catalog(locale.to_string()))?;

        let mut bundle = FluentBundle::new(vec![langid]);
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|_| TranslatorError::Catalog(locale.to_string()))?;

        Ok(Self { bundle })
    }

    /// Build a translator for the best bundled catalog matching the
    /// preferences.
    pub fn for_prefs(prefs: &LanguagePrefs) -> Result<Self> {
        let locale = lang::negotiate(&prefs.requested());
        Self::new(&locale.to_string())
    }

    /// Format a message with named arguments.
    ///
    /// Unknown keys render as the bare key so a missing catalog entry
    /// stays visible on the page.
    pub fn message(&self, key: &str, args: &[(&str, &str)]) -> String {
        let Some(message) = self.bundle.get_message(key) else {
            return key.to_string();
        };
        let Some(pattern) = message.value() else {
            return key.to_string();
        };

        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }

        let mut errors = Vec::new();
        self.bundle
            .format_pattern(pattern, Some(&fluent_args), &mut errors)
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_message_without_arguments() {
        let translator = Translator::new("en-US").unwrap();
        assert_eq!(
            translator.message("embedvideo-missing-params", &[]),
            "EmbedVideo is missing a required parameter."
        );
    }

    #[test]
    fn test_formats_message_with_named_arguments() {
        let translator = Translator::new("en-US").unwrap();
        let message = translator.message(
            "embedvideo-unrecognized-service",
            &[("service", "unknownxyz")],
        );
        assert_eq!(
            message,
            "EmbedVideo does not recognize the video service \"unknownxyz\"."
        );
    }

    #[test]
    fn test_output_has_no_isolation_marks() {
        let translator = Translator::new("en-US").unwrap();
        let message = translator.message("embedvideo-illegal-width", &[("width", "bogus")]);
        assert!(!message.contains('\u{2068}'));
        assert!(!message.contains('\u{2069}'));
        assert!(message.contains("bogus"));
    }

    #[test]
    fn test_unknown_key_renders_as_bare_key() {
        let translator = Translator::new("en-US").unwrap();
        assert_eq!(translator.message("no-such-key", &[]), "no-such-key");
    }

    #[test]
    fn test_unknown_locale_is_rejected() {
        assert_eq!(
            Translator::new("xx-XX").unwrap_err(),
            TranslatorError::UnknownLocale("xx-XX".to_string())
        );
    }

    #[test]
    fn test_prefs_fall_back_to_bundled_catalog() {
        let translator = Translator::for_prefs(&LanguagePrefs::new("fr-FR")).unwrap();
        assert_eq!(
            translator.message("embedvideo-missing-params", &[]),
            "EmbedVideo is missing a required parameter."
        );
    }

    #[test]
    fn test_bad_id_message_carries_both_arguments() {
        let translator = Translator::new("en-US").unwrap();
        let message = translator.message(
            "embedvideo-bad-id",
            &[("id", "???"), ("service", "youtube")],
        );
        assert_eq!(
            message,
            "EmbedVideo received the bad id \"???\" for the service \"youtube\"."
        );
    }
}
