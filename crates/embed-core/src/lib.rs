//! Core resolution logic for the embedvideo extension
//!
//! This crate turns a video-embed directive (service name, media id, and
//! optional display parameters) into an HTML fragment, or an inline error
//! fragment when the directive is malformed.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod dimensions;
pub mod markup;
pub mod registry;
pub mod request;
pub mod resolver;

pub use config::{ConfigError, EmbedConfig};
pub use dimensions::{ResolvedDimensions, WidthBounds};
pub use registry::{ServiceEntry, ServiceRegistry};
pub use request::EmbedRequest;
pub use resolver::{EmbedError, EmbedResolver};
