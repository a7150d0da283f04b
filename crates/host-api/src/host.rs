//! Collaborator interface provided by the host renderer
//!
//! The embed core never talks to the host engine directly; everything it
//! needs during a resolution call flows through this trait.

use std::borrow::Cow;

/// Services the host renderer makes available to the embed core for the
/// duration of one resolution call.
///
/// Message lookup takes named arguments rather than positional ones, so a
/// reordered catalog template cannot silently swap values.
pub trait Host {
    /// Resolve a message key to a display string.
    ///
    /// `args` are named substitution values, already escaped where the
    /// caller needs them escaped. Implementations should render unknown
    /// keys as the bare key so a missing catalog entry stays visible on
    /// the page.
    fn localize(&self, key: &str, args: &[(&str, &str)]) -> String;

    /// Escape a string for an HTML attribute or text context.
    fn escape_html<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        htmlize::escape_attribute(raw)
    }

    /// Notify the host that the current render must not be cached.
    ///
    /// Fire-and-forget; the host owns cache invalidation.
    fn disable_caching(&self);

    /// Base path of the host installation, substituted into extern
    /// templates as `$path`.
    fn script_path(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BareHost;

    impl Host for BareHost {
        fn localize(&self, key: &str, _args: &[(&str, &str)]) -> String {
            key.to_string()
        }

        fn disable_caching(&self) {}

        fn script_path(&self) -> &str {
            "/w"
        }
    }

    #[test]
    fn test_default_escaping_covers_markup_characters() {
        let host = BareHost;
        assert_eq!(host.escape_html("plain-id_123"), "plain-id_123");
        let escaped = host.escape_html("<svc> & \"quote\"");
        assert!(escaped.contains("&lt;svc&gt;"));
        assert!(escaped.contains("&amp;"));
        assert!(escaped.contains("&quot;quote&quot;"));
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
    }

    #[test]
    fn test_escaping_borrows_clean_input() {
        let host = BareHost;
        assert!(matches!(host.escape_html("abc123"), Cow::Borrowed(_)));
    }
}
