//! Source configuration for driving conversions from config files.

use serde::Deserialize;

use crate::encoding::{CharStream, EncodedResource};
use crate::error::ConvertError;
use crate::resource::LocationResolver;

/// Declarative description of a character-stream source.
///
/// Deserializable from YAML/JSON configuration, for example:
///
/// ```yaml
/// location: "classpath:config/app.properties"
/// encoding: "windows-1252"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Resource location: `file:` URL, `classpath:` pseudo-URL, or plain path
    pub location: String,
    /// Declared encoding label ("utf-8", "windows-1252", ...)
    ///
    /// Defaults to UTF-8 with BOM sniffing when absent.
    #[serde(default)]
    pub encoding: Option<String>,
}

impl SourceConfig {
    /// Create a configuration for the given location.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            encoding: None,
        }
    }

    /// Set the declared encoding label.
    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    /// Resolve and open this source through the given resolver.
    ///
    /// Returns `Ok(None)` when the location denotes no value per the
    /// resolver's convention.
    pub fn open(
        &self,
        resolver: &dyn LocationResolver,
    ) -> Result<Option<CharStream>, ConvertError> {
        let Some(resource) = resolver.resolve(&self.location)? else {
            return Ok(None);
        };
        let encoded = match &self.encoding {
            Some(label) => EncodedResource::with_encoding_label(resource, label)?,
            None => EncodedResource::new(resource),
        };
        let stream = encoded.reader().map_err(|source| ConvertError::Decode {
            resource: encoded.resource().id().to_owned(),
            source,
        })?;
        Ok(Some(stream))
    }
}
