//! Host configuration
//!
//! Raw, possibly misconfigured values exactly as the host supplies them.
//! Bounds normalization and registry merging happen once when a resolver
//! is built from the configuration, not lazily at first use.

use crate::dimensions::WidthBounds;
use crate::registry::{ServiceEntry, ServiceRegistry};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration file
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Process-wide host configuration, pre-normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmbedConfig {
    /// Raw minimum embed width; unset or out-of-envelope values fall back
    /// to the built-in floor
    pub min_width: Option<u32>,
    /// Raw maximum embed width; unset or out-of-envelope values fall back
    /// to the built-in ceiling
    pub max_width: Option<u32>,
    /// Host base path substituted into extern templates as `$path`
    pub script_path: String,
    /// Include the built-in service table
    pub use_default_services: bool,
    /// Additional or overriding service entries
    pub services: Vec<ServiceEntry>,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            min_width: None,
            max_width: None,
            script_path: String::new(),
            use_default_services: true,
            services: Vec::new(),
        }
    }
}

impl EmbedConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Normalized width bounds.
    pub fn bounds(&self) -> WidthBounds {
        if self.min_width.is_some_and(|m| m < WidthBounds::MIN_FLOOR) {
            tracing::warn!(
                "Configured minimum width is below {}, using the floor",
                WidthBounds::MIN_FLOOR
            );
        }
        if self.max_width.is_some_and(|m| m > WidthBounds::MAX_CEILING) {
            tracing::warn!(
                "Configured maximum width is above {}, using the ceiling",
                WidthBounds::MAX_CEILING
            );
        }
        WidthBounds::from_raw(self.min_width, self.max_width)
    }

    /// Service registry for this configuration: the built-in table unless
    /// disabled, merged with host-supplied entries. Host entries win on
    /// name collision.
    pub fn registry(&self) -> ServiceRegistry {
        let mut registry = if self.use_default_services {
            ServiceRegistry::with_defaults()
        } else {
            ServiceRegistry::new()
        };
        for entry in &self.services {
            registry.insert(entry.clone());
        }
        registry
    }
}
