//! The resolution pipeline
//!
//! A single linear decision chain: missing parameters, unknown service,
//! illegal width, bad identifier, then markup selection. The first
//! failing check wins and later checks never run; failures render as
//! inline error boxes through the host's message lookup and flow back
//! through the same channel as success markup.

use crate::config::EmbedConfig;
use crate::dimensions::{self, DimensionError, ResolvedDimensions, WidthBounds};
use crate::markup;
use crate::registry::{ServiceEntry, ServiceRegistry};
use crate::request::EmbedRequest;
use host_api::{Host, ParserOutput};
use thiserror::Error;

/// Failure modes of one resolution call
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmbedError {
    /// Service or id argument missing from the directive
    #[error("missing required service or id argument")]
    MissingParams,

    /// Service not present in the registry
    #[error("unrecognized video service: {service}")]
    UnknownService {
        /// Service name as written in the directive
        service: String,
    },

    /// Width argument did not parse or fell outside the bounds
    #[error("illegal width argument: {width}")]
    InvalidWidth {
        /// Raw width argument
        width: String,
    },

    /// Identifier empty after trimming
    #[error("bad id {id:?} for service {service:?}")]
    InvalidId {
        /// Raw identifier
        id: String,
        /// Service the identifier was meant for
        service: String,
    },
}

impl EmbedError {
    /// Message catalog key for this failure.
    pub fn message_key(&self) -> &'static str {
        match self {
            EmbedError::MissingParams => "embedvideo-missing-params",
            EmbedError::UnknownService { .. } => "embedvideo-unrecognized-service",
            EmbedError::InvalidWidth { .. } => "embedvideo-illegal-width",
            EmbedError::InvalidId { .. } => "embedvideo-bad-id",
        }
    }
}

/// Resolves video-embed directives into HTML fragments.
///
/// Holds the service registry and the normalized width bounds for the
/// lifetime of the process; both are read-only during a resolution call.
#[derive(Debug, Clone)]
pub struct EmbedResolver {
    registry: ServiceRegistry,
    bounds: WidthBounds,
}

impl EmbedResolver {
    /// Create a resolver over a registry and already-normalized bounds.
    pub fn new(registry: ServiceRegistry, bounds: WidthBounds) -> Self {
        Self { registry, bounds }
    }

    /// Create a resolver from host configuration.
    pub fn from_config(config: &EmbedConfig) -> Self {
        Self::new(config.registry(), config.bounds())
    }

    /// The normalized width bounds in effect.
    pub fn bounds(&self) -> &WidthBounds {
        &self.bounds
    }

    /// Resolve one directive.
    ///
    /// Always returns a fragment; a malformed directive degrades to an
    /// inline error box in place, leaving the surrounding document
    /// unaffected.
    pub fn resolve(&self, host: &dyn Host, request: &EmbedRequest) -> ParserOutput {
        match self.try_resolve(host, request) {
            Ok(fragment) => ParserOutput::html(fragment),
            Err(err) => {
                tracing::warn!("Embed directive failed: {}", err);
                ParserOutput::html(error_box(host, &err))
            }
        }
    }

    fn try_resolve(&self, host: &dyn Host, request: &EmbedRequest) -> Result<String, EmbedError> {
        let (Some(service), Some(id)) = (request.service.as_deref(), request.id.as_deref()) else {
            return Err(EmbedError::MissingParams);
        };
        let service = service.trim();
        let id = id.trim();

        let entry = self
            .registry
            .lookup(service)
            .ok_or_else(|| EmbedError::UnknownService {
                service: service.to_string(),
            })?;

        let dims = dimensions::resolve(request.width.as_deref(), entry, &self.bounds)
            .map_err(|err| match err {
                DimensionError::IllegalWidth(width) => EmbedError::InvalidWidth { width },
            })?;

        // Presence check only: the id must survive HTML escaping non-empty.
        if host.escape_html(id).is_empty() {
            return Err(EmbedError::InvalidId {
                id: id.to_string(),
                service: service.to_string(),
            });
        }

        Ok(build_fragment(host, entry, id, request, &dims))
    }
}

/// Select and build the markup shape for a validated directive.
fn build_fragment(
    host: &dyn Host,
    entry: &ServiceEntry,
    id: &str,
    request: &EmbedRequest,
    dims: &ResolvedDimensions,
) -> String {
    let width = dims.width.to_string();
    let height = dims.height.to_string();

    let inner = match entry.extern_template.as_deref() {
        Some(template) => {
            // The override markup is assumed dynamic; the page carrying it
            // must not be cached.
            host.disable_caching();
            tracing::debug!(service = %entry.name, "extern clause used, caching disabled");
            markup::substitute(
                template,
                &[
                    ("path", host.script_path()),
                    ("id", id),
                    ("width", &width),
                    ("height", &height),
                ],
            )
        }
        None => {
            let url = markup::substitute(
                &entry.url_template,
                &[("id", id), ("width", &width), ("height", &height)],
            );
            markup::video_object(&url, dims)
        }
    };

    match request.align.as_deref() {
        Some(align) => markup::thumb_container(&inner, align, request.desc.as_deref(), dims.width),
        None => inner,
    }
}

/// Render a failure as an inline error fragment.
fn error_box(host: &dyn Host, err: &EmbedError) -> String {
    let message = match err {
        EmbedError::MissingParams => host.localize(err.message_key(), &[]),
        EmbedError::UnknownService { service } => {
            let service = host.escape_html(service);
            host.localize(err.message_key(), &[("service", service.as_ref())])
        }
        EmbedError::InvalidWidth { width } => {
            let width = host.escape_html(width);
            host.localize(err.message_key(), &[("width", width.as_ref())])
        }
        EmbedError::InvalidId { id, service } => {
            let id = host.escape_html(id);
            let service = host.escape_html(service);
            host.localize(
                err.message_key(),
                &[("id", id.as_ref()), ("service", service.as_ref())],
            )
        }
    };
    format!("<div class=\"errorbox\">{message}</div>")
}
