//! Location resolver trait and the default scheme-dispatching resolver.

use std::fmt::Debug;
use std::path::PathBuf;
use std::sync::Arc;

use super::{ClasspathRegistry, ClasspathResource, FileResource, Resource};
use crate::error::ResolveError;

/// Trait for mapping location strings to resource handles.
///
/// `Ok(None)` is the resolver's "no value" convention; what counts as no
/// value (for example an empty string) is defined by the implementation,
/// not by callers.
pub trait LocationResolver: Send + Sync + Debug {
    /// Resolve a location string to a resource handle, or `None` when the
    /// location denotes no value.
    fn resolve(&self, location: &str) -> Result<Option<Arc<dyn Resource>>, ResolveError>;
}

const CLASSPATH_SCHEME: &str = "classpath:";
const FILE_SCHEME: &str = "file:";

/// Default resolver: `classpath:` entries, `file:` URLs, plain paths.
///
/// The location is trimmed first; a blank location resolves to no value.
/// Schemes other than `classpath:` and `file:` are recognized but rejected
/// with `ResolveError::UnsupportedScheme` (no network stack here); callers
/// that need them supply their own `LocationResolver`.
#[derive(Debug, Clone, Default)]
pub struct DefaultLocationResolver {
    registry: ClasspathRegistry,
}

impl DefaultLocationResolver {
    /// Create a resolver with an empty classpath registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver serving `classpath:` locations from the given registry.
    pub fn with_registry(registry: ClasspathRegistry) -> Self {
        Self { registry }
    }

    /// Get the classpath registry.
    pub fn registry(&self) -> &ClasspathRegistry {
        &self.registry
    }
}

impl LocationResolver for DefaultLocationResolver {
    fn resolve(&self, location: &str) -> Result<Option<Arc<dyn Resource>>, ResolveError> {
        let location = location.trim();
        if location.is_empty() {
            return Ok(None);
        }

        if let Some(rest) = location.strip_prefix(CLASSPATH_SCHEME) {
            if rest.is_empty() {
                return Err(ResolveError::Malformed {
                    location: location.into(),
                    reason: "classpath location has no entry path".into(),
                });
            }
            return Ok(Some(Arc::new(ClasspathResource::new(
                rest,
                self.registry.clone(),
            ))));
        }

        if let Some(rest) = location.strip_prefix(FILE_SCHEME) {
            let path = file_url_path(location, rest)?;
            return Ok(Some(Arc::new(FileResource::new(PathBuf::from(path)))));
        }

        if let Some(scheme) = scheme_of(location) {
            return Err(ResolveError::UnsupportedScheme {
                scheme: scheme.into(),
                location: location.into(),
            });
        }

        Ok(Some(Arc::new(FileResource::new(PathBuf::from(location)))))
    }
}

/// Extract the path part of a `file:` URL.
///
/// Accepts `file:/path`, `file:///path`, and relative `file:path`. A
/// non-empty authority (`file://host/path`) is rejected.
fn file_url_path<'a>(location: &str, rest: &'a str) -> Result<&'a str, ResolveError> {
    let path = match rest.strip_prefix("//") {
        Some(after) if after.starts_with('/') || after.is_empty() => after,
        Some(_) => {
            return Err(ResolveError::Malformed {
                location: location.into(),
                reason: "file URLs with a remote authority are not supported".into(),
            });
        }
        None => rest,
    };
    if path.is_empty() {
        return Err(ResolveError::Malformed {
            location: location.into(),
            reason: "file location has no path".into(),
        });
    }
    Ok(path)
}

/// Return the leading scheme token of the location, if any.
///
/// Single-character tokens are treated as paths, not schemes, so Windows
/// drive-letter paths (`C:\...`) fall through to filesystem interpretation.
fn scheme_of(location: &str) -> Option<&str> {
    let (scheme, _) = location.split_once(':')?;
    if scheme.len() < 2 {
        return None;
    }
    let mut chars = scheme.chars();
    if !chars.next()?.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(scheme)
    } else {
        None
    }
}
