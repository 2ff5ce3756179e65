//! Standard resource implementations for files and classpath entries.

use std::collections::HashMap;
use std::io::{self, Cursor, Read};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use super::Resource;

/// Resource handle backed by a filesystem path.
#[derive(Debug, Clone)]
pub struct FileResource {
    id: String,
    path: PathBuf,
}

impl FileResource {
    /// Create a new file resource handle.
    pub fn new(path: PathBuf) -> Self {
        let id = path.to_string_lossy().into_owned();
        Self { id, path }
    }

    /// Get the file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Resource for FileResource {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        let file = std::fs::File::open(&self.path)?;
        Ok(Box::new(file))
    }
}

/// Registry of named byte entries served under the `classpath:` scheme.
///
/// This is the crate's rendition of bundled application content: callers
/// register entries (for example with `include_bytes!` data) and resolve
/// them through `classpath:` locations. Clones share the same entry table.
#[derive(Debug, Clone, Default)]
pub struct ClasspathRegistry {
    entries: Arc<RwLock<HashMap<String, Arc<Vec<u8>>>>>,
}

impl ClasspathRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a byte entry under the given path.
    ///
    /// An existing entry at the same path is replaced.
    pub fn register(&self, path: impl Into<String>, data: Vec<u8>) {
        self.entries
            .write()
            .unwrap()
            .insert(path.into(), Arc::new(data));
    }

    /// Register a string entry under the given path.
    pub fn register_str(&self, path: impl Into<String>, data: impl Into<String>) {
        self.register(path, data.into().into_bytes());
    }

    /// Look up an entry by path.
    pub fn get(&self, path: &str) -> Option<Arc<Vec<u8>>> {
        self.entries.read().unwrap().get(path).cloned()
    }

    /// Check whether an entry is registered at the given path.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.read().unwrap().contains_key(path)
    }
}

/// Resource handle for a `classpath:` registry entry.
///
/// Lookup is deferred to `open`, so a handle for a missing entry resolves
/// fine and fails with `NotFound` when the stream is requested.
#[derive(Debug, Clone)]
pub struct ClasspathResource {
    id: String,
    path: String,
    registry: ClasspathRegistry,
}

impl ClasspathResource {
    /// Create a new classpath resource handle.
    pub fn new(path: impl Into<String>, registry: ClasspathRegistry) -> Self {
        let path = path.into();
        Self {
            id: format!("classpath:{path}"),
            path,
            registry,
        }
    }

    /// Get the entry path within the registry.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Resource for ClasspathResource {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        let data = self.registry.get(&self.path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("classpath entry `{}` is not registered", self.path),
            )
        })?;
        Ok(Box::new(Cursor::new(data.as_ref().clone())))
    }
}
