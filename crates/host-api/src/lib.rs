//! Host renderer interface for the embedvideo extension
//!
//! This crate defines the collaborator surface a host document renderer
//! provides to the embed core, and the return contract handed back to it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod host;
pub mod output;

pub use host::Host;
pub use output::ParserOutput;
