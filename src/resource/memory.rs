//! In-memory resource implementation for testing.

use std::io::{self, Cursor, Read};
use std::sync::Arc;

use super::Resource;

/// In-memory resource for testing.
#[derive(Debug, Clone)]
pub struct InMemoryResource {
    id: String,
    data: Arc<Vec<u8>>,
}

impl InMemoryResource {
    /// Create a new in-memory resource with the given data.
    pub fn new(id: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            data: Arc::new(data),
        }
    }

    /// Create a new in-memory resource from a string.
    pub fn from_string(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self::new(id, data.into().into_bytes())
    }
}

impl Resource for InMemoryResource {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(self.data.as_ref().clone())))
    }
}
