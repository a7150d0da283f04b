//! Width validation and height derivation
//!
//! Widths are validated against process-wide bounds that are normalized
//! once when the resolver is built; heights derive from a per-service
//! aspect ratio.

use crate::registry::ServiceEntry;
use thiserror::Error;

/// Errors that can occur while resolving display dimensions
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DimensionError {
    /// Width did not parse as whole pixels or fell outside the bounds
    #[error("illegal width value: {0}")]
    IllegalWidth(String),
}

/// Result type for dimension resolution
pub type Result<T> = std::result::Result<T, DimensionError>;

/// Width used when neither the directive nor the service supplies one
pub const DEFAULT_WIDTH: u32 = 425;

/// Width/height ratio used when the service does not override it
pub const DEFAULT_RATIO: f64 = 425.0 / 350.0;

/// Normalized width bounds.
///
/// Construction applies an asymmetric clamp: an unset or too-small
/// minimum falls back to [`WidthBounds::MIN_FLOOR`], and an unset or
/// too-large maximum falls back to [`WidthBounds::MAX_CEILING`]. A
/// configured value that is valid but extreme in the other direction
/// passes through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthBounds {
    /// Smallest width a directive may request
    pub min: u32,
    /// Largest width a directive may request
    pub max: u32,
}

impl WidthBounds {
    /// Fallback minimum width
    pub const MIN_FLOOR: u32 = 100;

    /// Fallback maximum width
    pub const MAX_CEILING: u32 = 1024;

    /// Normalize raw configured bounds.
    ///
    /// `None` stands for an unset or non-numeric configuration value.
    pub fn from_raw(min: Option<u32>, max: Option<u32>) -> Self {
        Self {
            min: min
                .filter(|m| *m >= Self::MIN_FLOOR)
                .unwrap_or(Self::MIN_FLOOR),
            max: max
                .filter(|m| *m <= Self::MAX_CEILING)
                .unwrap_or(Self::MAX_CEILING),
        }
    }

    /// Check whether a width falls inside the bounds.
    pub fn contains(&self, width: u32) -> bool {
        width >= self.min && width <= self.max
    }

    /// Clamp a width into the bounds.
    pub fn clamp(&self, width: u32) -> u32 {
        width.clamp(self.min, self.max)
    }
}

impl Default for WidthBounds {
    fn default() -> Self {
        Self::from_raw(None, None)
    }
}

/// Display dimensions for one embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDimensions {
    /// Horizontal size in pixels
    pub width: u32,
    /// Vertical size in pixels, derived as `width / ratio` rounded half
    /// away from zero
    pub height: u32,
}

/// Resolve the display dimensions for one directive.
///
/// An absent width falls back to the service default clamped into the
/// bounds, or [`DEFAULT_WIDTH`]; an absent width can therefore never
/// fail. A present width must parse as whole pixels and fall inside the
/// bounds.
pub fn resolve(
    raw_width: Option<&str>,
    entry: &ServiceEntry,
    bounds: &WidthBounds,
) -> Result<ResolvedDimensions> {
    let width = match raw_width {
        None => bounds.clamp(entry.default_width.unwrap_or(DEFAULT_WIDTH)),
        Some(raw) => {
            let parsed: u32 = raw
                .trim()
                .parse()
                .map_err(|_| DimensionError::IllegalWidth(raw.to_string()))?;
            if !bounds.contains(parsed) {
                return Err(DimensionError::IllegalWidth(raw.to_string()));
            }
            parsed
        }
    };

    let ratio = entry.default_ratio.unwrap_or(DEFAULT_RATIO);
    let height = (f64::from(width) / ratio).round() as u32;

    Ok(ResolvedDimensions { width, height })
}
