//! Service registry
//!
//! Maps a service name to the configuration describing how to build an
//! embed for that host. The registry is read-only for the duration of one
//! resolution call; the host may rebuild it out of band on configuration
//! reload.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for one named video service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEntry {
    /// Unique registry key
    pub name: String,
    /// Embed URL template, substituted with `$id`, `$width`, `$height`
    pub url_template: String,
    /// Service-specific markup override, substituted with `$path`, `$id`,
    /// `$width`, `$height`. When set it replaces the generic embed markup
    /// entirely and the page carrying it is marked non-cacheable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extern_template: Option<String>,
    /// Fallback width when the directive gives none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_width: Option<u32>,
    /// Width/height ratio used for height derivation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_ratio: Option<f64>,
    /// Reserved identifier pattern. Carried so host configuration round
    /// trips; identifier validation is a presence check only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_pattern: Option<String>,
}

impl ServiceEntry {
    /// Create an entry with only a name and URL template.
    pub fn new(name: impl Into<String>, url_template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url_template: url_template.into(),
            extern_template: None,
            default_width: None,
            default_ratio: None,
            id_pattern: None,
        }
    }

    /// Set a markup override template.
    pub fn extern_template(mut self, template: impl Into<String>) -> Self {
        self.extern_template = Some(template.into());
        self
    }

    /// Set the fallback width.
    pub fn default_width(mut self, width: u32) -> Self {
        self.default_width = Some(width);
        self
    }

    /// Set the width/height ratio.
    pub fn default_ratio(mut self, ratio: f64) -> Self {
        self.default_ratio = Some(ratio);
        self
    }
}

/// Registry of known video services.
#[derive(Debug, Clone, Default)]
pub struct ServiceRegistry {
    services: HashMap<String, ServiceEntry>,
}

impl ServiceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in service table.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for entry in default_entries() {
            registry.insert(entry);
        }
        registry
    }

    /// Add or replace an entry, keyed by its name.
    pub fn insert(&mut self, entry: ServiceEntry) {
        self.services.insert(entry.name.clone(), entry);
    }

    /// Look up a service by name. Exact, case-sensitive match.
    pub fn lookup(&self, service: &str) -> Option<&ServiceEntry> {
        self.services.get(service)
    }

    /// Number of registered services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

/// Built-in service table.
fn default_entries() -> Vec<ServiceEntry> {
    vec![
        ServiceEntry::new("youtube", "https://www.youtube.com/v/$id"),
        ServiceEntry::new(
            "googlevideo",
            "https://video.google.com/googleplayer.swf?docid=$id",
        )
        .default_ratio(400.0 / 326.0),
        ServiceEntry::new("dailymotion", "https://www.dailymotion.com/swf/$id"),
        ServiceEntry::new(
            "funnyordie",
            "https://player.ordienetworks.com/flash/fodplayer.swf?key=$id",
        ),
        ServiceEntry::new(
            "revver",
            "https://flash.revver.com/player/1.0/player.swf?mediaId=$id",
        )
        .default_ratio(480.0 / 392.0),
        ServiceEntry::new(
            "sevenload",
            "https://page.sevenload.com/swf/en_GB/player.swf?id=$id",
        ),
        ServiceEntry::new("teachertube", "https://www.teachertube.com/embed/video/$id")
            .extern_template(
                "<object width=\"$width\" height=\"$height\">\
                 <param name=\"movie\" value=\"$path/extensions/embedvideo/mvplayer.swf\"></param>\
                 <param name=\"flashvars\" value=\"file=https://www.teachertube.com/flvideo/$id.flv&width=$width&height=$height\"></param>\
                 <embed src=\"$path/extensions/embedvideo/mvplayer.swf\" type=\"application/x-shockwave-flash\" flashvars=\"file=https://www.teachertube.com/flvideo/$id.flv&width=$width&height=$height\" width=\"$width\" height=\"$height\"></embed></object>",
            ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_finds_registered_entry() {
        let registry = ServiceRegistry::with_defaults();
        let entry = registry.lookup("youtube").unwrap();
        assert_eq!(entry.name, "youtube");
        assert!(entry.url_template.contains("$id"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = ServiceRegistry::with_defaults();
        assert!(registry.lookup("youtube").is_some());
        assert!(registry.lookup("YouTube").is_none());
        assert!(registry.lookup("YOUTUBE").is_none());
    }

    #[test]
    fn test_lookup_unknown_service_returns_none() {
        let registry = ServiceRegistry::with_defaults();
        assert!(registry.lookup("unknownxyz").is_none());
    }

    #[test]
    fn test_insert_replaces_existing_entry() {
        let mut registry = ServiceRegistry::with_defaults();
        let before = registry.len();

        registry.insert(ServiceEntry::new("youtube", "https://example.com/$id"));

        assert_eq!(registry.len(), before);
        assert_eq!(
            registry.lookup("youtube").unwrap().url_template,
            "https://example.com/$id"
        );
    }

    #[test]
    fn test_default_table_has_one_extern_service() {
        let registry = ServiceRegistry::with_defaults();
        let entry = registry.lookup("teachertube").unwrap();
        let template = entry.extern_template.as_deref().unwrap();
        assert!(template.contains("$path"));
        assert!(template.contains("$id"));
    }

    #[test]
    fn test_entry_serialization_round_trip() {
        let entry = ServiceEntry::new("example", "https://example.com/$id")
            .default_width(512)
            .default_ratio(16.0 / 9.0);

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("urlTemplate"));
        assert!(json.contains("defaultWidth"));
        assert!(!json.contains("externTemplate"));

        let back: ServiceEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_entry_deserializes_with_optional_fields_absent() {
        let entry: ServiceEntry =
            serde_json::from_str(r#"{"name":"x","urlTemplate":"https://x.example/$id"}"#).unwrap();
        assert!(entry.extern_template.is_none());
        assert!(entry.default_width.is_none());
        assert!(entry.default_ratio.is_none());
        assert!(entry.id_pattern.is_none());
    }
}
