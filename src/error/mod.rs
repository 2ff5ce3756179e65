//! Error types for location resolution and text-to-stream conversion.
//!
//! This module provides:
//! - `ResolveError`: Failures raised by a `LocationResolver`
//! - `ConvertError`: The single error surface of the conversion operation

use std::io;

use thiserror::Error;

/// Errors raised while resolving a location string to a resource handle.
///
/// Resolution errors only cover the location string itself. Whether the
/// resource behind a well-formed location actually exists is not checked at
/// resolution time; that surfaces as an I/O error when the resource is
/// opened.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The location matched a recognized scheme but its remainder is unusable.
    #[error("malformed location `{location}`: {reason}")]
    Malformed { location: String, reason: String },
    /// The location carries a scheme the resolver does not handle.
    #[error("unsupported scheme `{scheme}` in location `{location}`")]
    UnsupportedScheme { scheme: String, location: String },
}

/// Errors raised by the text-to-stream conversion surface.
///
/// Callers binding text to a stream see one uniform error category; the
/// distinction between bad location syntax and an unreadable resource lives
/// in the variant and its source chain.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The converter was constructed without a resolver collaborator.
    #[error("location resolver must be supplied")]
    MissingResolver,
    /// Location resolution failed; propagated from the resolver unmodified.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    /// The resolved resource could not be opened for decoding.
    ///
    /// Carries the resource identity in the message and the original I/O
    /// failure as the source.
    #[error("failed to retrieve reader for `{resource}`")]
    Decode {
        /// Identity of the resolved resource
        resource: String,
        #[source]
        source: io::Error,
    },
    /// The declared encoding label is not a known WHATWG encoding name.
    #[error("unknown encoding label `{label}`")]
    UnknownEncoding { label: String },
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
