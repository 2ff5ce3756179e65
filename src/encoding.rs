//! Encoding-aware decoding of byte resources into character streams.
//!
//! An [`EncodedResource`] pairs a [`Resource`] with an optional declared
//! character encoding. Its `reader` operation opens the underlying byte
//! stream and wraps it in an `encoding_rs` decoder, producing UTF-8 text
//! through the standard `Read` interface.

use std::fmt;
use std::io::{self, BufReader, Read};
use std::sync::Arc;

use encoding_rs::{Encoding, UTF_8};
use encoding_rs_rw::DecodingReader;

use crate::error::ConvertError;
use crate::resource::Resource;

/// A resource paired with an optional declared character encoding.
///
/// With no declared encoding the content is decoded as UTF-8. Either way a
/// leading byte-order mark is honored: BOM sniffing can switch the decoder
/// to UTF-16 regardless of the declared encoding.
pub struct EncodedResource {
    resource: Arc<dyn Resource>,
    encoding: Option<&'static Encoding>,
}

impl EncodedResource {
    /// Wrap a resource with no declared encoding (UTF-8 with BOM sniffing).
    pub fn new(resource: Arc<dyn Resource>) -> Self {
        Self {
            resource,
            encoding: None,
        }
    }

    /// Wrap a resource with an explicitly declared encoding.
    pub fn with_encoding(resource: Arc<dyn Resource>, encoding: &'static Encoding) -> Self {
        Self {
            resource,
            encoding: Some(encoding),
        }
    }

    /// Wrap a resource with an encoding given as a WHATWG label.
    ///
    /// Labels are the names understood by `encoding_rs`, for example
    /// `"utf-8"`, `"windows-1252"`, or `"shift_jis"`.
    pub fn with_encoding_label(
        resource: Arc<dyn Resource>,
        label: &str,
    ) -> Result<Self, ConvertError> {
        let encoding =
            Encoding::for_label(label.as_bytes()).ok_or_else(|| ConvertError::UnknownEncoding {
                label: label.into(),
            })?;
        Ok(Self::with_encoding(resource, encoding))
    }

    /// Get the wrapped resource.
    pub fn resource(&self) -> &dyn Resource {
        self.resource.as_ref()
    }

    /// Get the declared encoding, if any.
    pub fn encoding(&self) -> Option<&'static Encoding> {
        self.encoding
    }

    /// Open the underlying byte stream and wrap it in a decoding reader.
    ///
    /// The byte stream is opened eagerly. If opening fails, nothing is left
    /// open; the error carries the underlying I/O failure. Malformed byte
    /// sequences are reported as `InvalidData` errors from subsequent reads
    /// on the returned stream, not here.
    pub fn reader(&self) -> io::Result<CharStream> {
        let stream = self.resource.open()?;
        let encoding = self.encoding.unwrap_or(UTF_8);
        let decoder = DecodingReader::new(BufReader::new(stream), encoding.new_decoder());
        Ok(CharStream {
            id: self.resource.id().to_owned(),
            inner: Box::new(decoder),
        })
    }
}

impl fmt::Debug for EncodedResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedResource")
            .field("resource", &self.resource.id())
            .field("encoding", &self.encoding.map(|e| e.name()))
            .finish()
    }
}

/// A decoded, readable character stream.
///
/// Reads yield the resource's content re-encoded as UTF-8. The holder owns
/// the underlying byte stream; dropping the `CharStream` closes it.
pub struct CharStream {
    id: String,
    inner: Box<dyn Read + Send>,
}

impl CharStream {
    /// Identity of the resource this stream was decoded from.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Read the stream to the end and return its content as a string.
    pub fn read_all(mut self) -> io::Result<String> {
        let mut content = String::new();
        self.inner.read_to_string(&mut content)?;
        Ok(content)
    }
}

impl Read for CharStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl fmt::Debug for CharStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharStream")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
