//! Video embed directive extension for wiki-style document renderers
//!
//! Ties the member crates together: the resolver core, the host
//! collaborator surface, and the bundled message catalogs. Hosts that
//! want the stock behavior build a [`WikiHost`] and an [`EmbedResolver`]
//! from one [`EmbedConfig`] and hand directive arguments to
//! [`EmbedResolver::resolve`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod host;

pub use embed_core::{
    EmbedConfig, EmbedError, EmbedRequest, EmbedResolver, ResolvedDimensions, ServiceEntry,
    ServiceRegistry, WidthBounds,
};
pub use host::WikiHost;
pub use host_api::{Host, ParserOutput};
pub use i18n::LanguagePrefs;
