//! Directive argument handling
//!
//! The host hands this extension positional string arguments in one of
//! two historically equivalent orders; both are mapped into one canonical
//! request struct here instead of being permuted in place.

use serde::{Deserialize, Serialize};

/// One video-embed directive, in canonical named form.
///
/// `service` and `id` are required for a successful resolution but kept
/// optional here so their absence is reported as a uniform inline error
/// rather than rejected at the call boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedRequest {
    /// Video service name, as written by the document author
    pub service: Option<String>,
    /// Media identifier on that service
    pub id: Option<String>,
    /// Requested width in pixels, still unparsed
    pub width: Option<String>,
    /// Alignment token; presence alone switches to the thumbnail layout
    pub align: Option<String>,
    /// Caption markup, honored only when an alignment is present
    pub desc: Option<String>,
}

impl EmbedRequest {
    /// Create a request with only the required arguments set.
    pub fn new(service: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            service: Some(service.into()),
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Set the requested width.
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Set the alignment token.
    pub fn align(mut self, align: impl Into<String>) -> Self {
        self.align = Some(align.into());
        self
    }

    /// Set the caption markup.
    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Build a request from the primary argument order:
    /// `service, id, width, align, desc`.
    pub fn from_primary_args(args: &[Option<&str>]) -> Self {
        Self {
            service: arg(args, 0),
            id: arg(args, 1),
            width: arg(args, 2),
            align: arg(args, 3),
            desc: arg(args, 4),
        }
    }

    /// Build a request from the historical argument order:
    /// `service, id, desc, align, width`.
    pub fn from_legacy_args(args: &[Option<&str>]) -> Self {
        Self {
            service: arg(args, 0),
            id: arg(args, 1),
            desc: arg(args, 2),
            align: arg(args, 3),
            width: arg(args, 4),
        }
    }
}

fn arg(args: &[Option<&str>], index: usize) -> Option<String> {
    args.get(index).and_then(|a| a.map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_and_legacy_orders_agree() {
        let primary = EmbedRequest::from_primary_args(&[
            Some("youtube"),
            Some("abc123"),
            Some("640"),
            Some("right"),
            Some("A caption"),
        ]);
        let legacy = EmbedRequest::from_legacy_args(&[
            Some("youtube"),
            Some("abc123"),
            Some("A caption"),
            Some("right"),
            Some("640"),
        ]);
        assert_eq!(primary, legacy);
        assert_eq!(primary.width.as_deref(), Some("640"));
        assert_eq!(primary.desc.as_deref(), Some("A caption"));
    }

    #[test]
    fn test_unset_trailing_arguments_are_none() {
        let request = EmbedRequest::from_primary_args(&[Some("youtube"), Some("abc123")]);
        assert_eq!(request.service.as_deref(), Some("youtube"));
        assert_eq!(request.id.as_deref(), Some("abc123"));
        assert!(request.width.is_none());
        assert!(request.align.is_none());
        assert!(request.desc.is_none());
    }

    #[test]
    fn test_explicit_null_arguments_are_none() {
        let request =
            EmbedRequest::from_primary_args(&[Some("youtube"), None, Some("640"), None, None]);
        assert!(request.id.is_none());
        assert_eq!(request.width.as_deref(), Some("640"));
    }

    #[test]
    fn test_builder_matches_adapter() {
        let built = EmbedRequest::new("youtube", "abc123")
            .width("640")
            .align("right")
            .desc("A caption");
        let adapted = EmbedRequest::from_primary_args(&[
            Some("youtube"),
            Some("abc123"),
            Some("640"),
            Some("right"),
            Some("A caption"),
        ]);
        assert_eq!(built, adapted);
    }
}
