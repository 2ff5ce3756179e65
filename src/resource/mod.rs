//! Resource handles and location resolution.
//!
//! This module provides:
//! - `Resource`: Trait for byte-readable resource handles
//! - `LocationResolver`: Trait for mapping location strings to resources
//! - `DefaultLocationResolver`: classpath/file/path resolution
//! - In-memory implementations for testing

mod memory;
mod resolver;
mod std_res;

pub use memory::InMemoryResource;
pub use resolver::{DefaultLocationResolver, LocationResolver};
pub use std_res::{ClasspathRegistry, ClasspathResource, FileResource};

use std::fmt::Debug;
use std::io::Read;

/// Trait for byte-readable resource handles.
///
/// Implementors represent an addressable byte source such as a file, a
/// registered classpath entry, or an in-memory buffer. A handle is cheap to
/// hold; I/O happens only when `open` is called.
pub trait Resource: Send + Sync + Debug {
    /// Returns an identifier for this resource.
    ///
    /// This is used for error messages and logging.
    /// Convention: the resolved path for files, the scheme-prefixed
    /// location for classpath entries.
    fn id(&self) -> &str;

    /// Open and return a new readable byte stream.
    ///
    /// Each call should return a fresh stream positioned at the beginning.
    /// Existence of the underlying source is only checked here, not at
    /// handle construction.
    fn open(&self) -> std::io::Result<Box<dyn Read + Send>>;
}
