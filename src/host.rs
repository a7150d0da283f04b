//! Default host wiring
//!
//! A stock [`Host`] implementation backed by the bundled Fluent
//! catalogs, for hosts and tests that do not bring their own renderer
//! services.

use host_api::Host;
use i18n::{LanguagePrefs, Translator, TranslatorError};
use std::cell::Cell;

/// Stock host collaborator set.
///
/// Localization goes through the bundled catalogs; the cache-disable
/// hook records into a flag the host can read back after the render.
/// One `WikiHost` serves one render at a time.
pub struct WikiHost {
    translator: Translator,
    script_path: String,
    cache_disabled: Cell<bool>,
}

impl WikiHost {
    /// Create a host with the default catalog.
    pub fn new(script_path: impl Into<String>) -> Result<Self, TranslatorError> {
        Self::with_prefs(script_path, &LanguagePrefs::default())
    }

    /// Create a host honoring the given language preferences.
    pub fn with_prefs(
        script_path: impl Into<String>,
        prefs: &LanguagePrefs,
    ) -> Result<Self, TranslatorError> {
        Ok(Self {
            translator: Translator::for_prefs(prefs)?,
            script_path: script_path.into(),
            cache_disabled: Cell::new(false),
        })
    }

    /// Whether a resolution marked the current render non-cacheable.
    pub fn cache_disabled(&self) -> bool {
        self.cache_disabled.get()
    }

    /// Reset the cache flag before a new render.
    pub fn reset_cache_flag(&self) {
        self.cache_disabled.set(false);
    }
}

impl Host for WikiHost {
    fn localize(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.translator.message(key, args)
    }

    fn disable_caching(&self) {
        self.cache_disabled.set(true);
    }

    fn script_path(&self) -> &str {
        &self.script_path
    }
}
