//! # charsource
//!
//! Resolve textual resource locations into decoded character streams.
//!
//! ## Overview
//!
//! charsource is a small adapter for configuration-binding code: it turns a
//! location string (a `file:` URL, a `classpath:` pseudo-URL, or a plain
//! file path) into a live, decoded character stream.
//!
//! - **`ReaderConverter`**: the text-to-stream adapter implementing the
//!   [`TextConverter`] contract (`set_from_text` / `as_text`)
//! - **`LocationResolver`**: maps location strings to byte-readable
//!   [`Resource`] handles; [`DefaultLocationResolver`] understands
//!   `classpath:` registry entries, `file:` URLs, and plain paths
//! - **`EncodedResource`**: pairs a resource with an optional declared
//!   encoding and produces a UTF-8 [`CharStream`] via `encoding_rs`
//! - **`SourceConfig`**: serde-deserializable source description for
//!   driving conversions from configuration files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use charsource::{ReaderConverter, TextConverter};
//!
//! let mut converter = ReaderConverter::new();
//! converter.set_from_text("file:/etc/app/settings.properties")?;
//!
//! let stream = converter.take_value().expect("location resolved");
//! let content = stream.read_all()?;
//! ```
//!
//! ## Stream ownership
//!
//! Streams produced by the converter belong to the caller. The converter
//! never closes a stream it produced: taking the value hands the underlying
//! handle to whoever holds the [`CharStream`], and it is closed when that
//! value is dropped. Conversion opens the underlying byte source eagerly,
//! so `set_from_text` may perform blocking I/O.
//!
//! ## Features
//!
//! - `miette` - Pretty error reporting with miette

// Core modules
pub mod config;
pub mod convert;
pub mod encoding;
pub mod error;
pub mod resource;

// Re-exports for convenience
pub use config::SourceConfig;
pub use convert::{ReaderConverter, TextConverter};
pub use encoding::{CharStream, EncodedResource};
pub use error::{ConvertError, ResolveError};
pub use resource::{
    ClasspathRegistry, ClasspathResource, DefaultLocationResolver, FileResource, InMemoryResource,
    LocationResolver, Resource,
};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::ConvertDiagnostic;

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
