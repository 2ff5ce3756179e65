//! The text-to-character-stream adapter.

use std::sync::Arc;

use crate::encoding::{CharStream, EncodedResource};
use crate::error::ConvertError;
use crate::resource::{DefaultLocationResolver, LocationResolver};

/// The two-operation text-convertible value contract used by binding
/// frameworks: set a value from text, optionally render it back as text.
pub trait TextConverter {
    /// The converted value type.
    type Value;

    /// Replace the current value by converting from `text`.
    ///
    /// On failure the current value is left untouched.
    fn set_from_text(&mut self, text: &str) -> Result<(), ConvertError>;

    /// Render the current value as text, if a faithful representation exists.
    fn as_text(&self) -> Option<String>;

    /// Borrow the current value.
    fn value(&self) -> Option<&Self::Value>;
}

/// One-way converter from a resource location string to a decoded character
/// stream.
///
/// Supports standard `file:` URL notation and the `classpath:` pseudo-URL
/// (through [`DefaultLocationResolver`], or whatever the supplied resolver
/// understands). Each conversion resolves the location, eagerly opens the
/// resulting byte stream, and stores the decoded stream as the current
/// value, overwriting the previous one.
///
/// Note that streams produced here do not get closed by the converter; the
/// caller that takes the value owns the stream, and an overwritten value is
/// simply dropped.
#[derive(Debug)]
pub struct ReaderConverter {
    resolver: Arc<dyn LocationResolver>,
    value: Option<CharStream>,
}

impl ReaderConverter {
    /// Create a converter using a default-configured [`DefaultLocationResolver`].
    pub fn new() -> Self {
        Self::with_resolver(Arc::new(DefaultLocationResolver::new()))
    }

    /// Create a converter using the given resolver.
    pub fn with_resolver(resolver: Arc<dyn LocationResolver>) -> Self {
        Self {
            resolver,
            value: None,
        }
    }

    /// Create a converter from a dynamically wired resolver.
    ///
    /// Binding frameworks often obtain collaborators from lookups that may
    /// come up empty; an absent resolver is rejected here, before any
    /// conversion is attempted.
    pub fn from_resolver(
        resolver: Option<Arc<dyn LocationResolver>>,
    ) -> Result<Self, ConvertError> {
        match resolver {
            Some(resolver) => Ok(Self::with_resolver(resolver)),
            None => Err(ConvertError::MissingResolver),
        }
    }

    /// Get the resolver collaborator.
    pub fn resolver(&self) -> &dyn LocationResolver {
        self.resolver.as_ref()
    }

    /// Take ownership of the current value, leaving the converter empty.
    ///
    /// Reading consumes a stream, so this is the accessor callers normally
    /// use after a successful conversion.
    pub fn take_value(&mut self) -> Option<CharStream> {
        self.value.take()
    }
}

impl Default for ReaderConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextConverter for ReaderConverter {
    type Value = CharStream;

    fn set_from_text(&mut self, text: &str) -> Result<(), ConvertError> {
        let resource = self.resolver.resolve(text)?;
        self.value = match resource {
            Some(resource) => {
                let encoded = EncodedResource::new(resource);
                let stream = encoded.reader().map_err(|source| ConvertError::Decode {
                    resource: encoded.resource().id().to_owned(),
                    source,
                })?;
                Some(stream)
            }
            None => None,
        };
        Ok(())
    }

    /// Always `None`: a stream cannot be faithfully rendered back into the
    /// location string it came from, so this conversion has no inverse.
    fn as_text(&self) -> Option<String> {
        None
    }

    fn value(&self) -> Option<&CharStream> {
        self.value.as_ref()
    }
}
