//! Language negotiation
//!
//! Selects the best bundled message catalog for a user's requested
//! languages.

use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// Locale tags with a bundled message catalog. The first entry is the
/// ultimate fallback.
pub const AVAILABLE: &[&str] = &["en-US"];

/// User language preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguagePrefs {
    /// Preferred display language (BCP 47 tag)
    pub primary: String,
    /// Ordered fallback languages
    #[serde(default)]
    pub fallbacks: Vec<String>,
}

impl Default for LanguagePrefs {
    fn default() -> Self {
        Self {
            primary: "en-US".to_string(),
            fallbacks: Vec::new(),
        }
    }
}

impl LanguagePrefs {
    /// Create preferences with a single language.
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            fallbacks: Vec::new(),
        }
    }

    /// All requested languages in preference order, skipping malformed
    /// tags.
    pub fn requested(&self) -> Vec<LanguageIdentifier> {
        std::iter::once(&self.primary)
            .chain(self.fallbacks.iter())
            .filter_map(|tag| tag.parse().ok())
            .collect()
    }
}

/// Languages with a bundled message catalog.
pub fn available_languages() -> Vec<LanguageIdentifier> {
    AVAILABLE.iter().filter_map(|tag| tag.parse().ok()).collect()
}

/// Pick the best bundled catalog for the requested languages, falling
/// back to the first bundled locale.
pub fn negotiate(requested: &[LanguageIdentifier]) -> LanguageIdentifier {
    let available = available_languages();
    let negotiated = negotiate_languages(
        requested,
        &available,
        available.first(),
        NegotiationStrategy::Filtering,
    );
    negotiated
        .first()
        .map(|lang| (**lang).clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_is_selected() {
        let requested = LanguagePrefs::new("en-US").requested();
        assert_eq!(negotiate(&requested).to_string(), "en-US");
    }

    #[test]
    fn test_language_match_without_region() {
        let requested = LanguagePrefs::new("en").requested();
        assert_eq!(negotiate(&requested).to_string(), "en-US");
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let requested = LanguagePrefs::new("xx-XX").requested();
        assert_eq!(negotiate(&requested).to_string(), "en-US");
    }

    #[test]
    fn test_malformed_tags_are_skipped() {
        let prefs = LanguagePrefs {
            primary: "!!!".to_string(),
            fallbacks: vec!["en-US".to_string()],
        };
        assert_eq!(negotiate(&prefs.requested()).to_string(), "en-US");
    }

    #[test]
    fn test_prefs_serialization_round_trip() {
        let prefs = LanguagePrefs {
            primary: "de-DE".to_string(),
            fallbacks: vec!["en-US".to_string()],
        };
        let json = serde_json::to_string(&prefs).unwrap();
        let back: LanguagePrefs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }
}
