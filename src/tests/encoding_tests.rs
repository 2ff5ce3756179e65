//! Tests for encoding-aware decoding.

use std::sync::Arc;

use crate::{
    ClasspathRegistry, ClasspathResource, ConvertError, EncodedResource, InMemoryResource, Resource,
};

fn resource(data: &[u8]) -> Arc<dyn Resource> {
    Arc::new(InMemoryResource::new("mem", data.to_vec()))
}

#[test]
fn default_encoding_decodes_utf8() {
    let encoded = EncodedResource::new(resource(b"hello"));
    assert!(encoded.encoding().is_none());

    let stream = encoded.reader().expect("open reader");
    assert_eq!(stream.id(), "mem");
    assert_eq!(stream.read_all().unwrap(), "hello");
}

#[test]
fn declared_encoding_label_is_applied() {
    // 0xE9 is `é` in windows-1252 and malformed as UTF-8.
    let encoded =
        EncodedResource::with_encoding_label(resource(&[0x63, 0xE9]), "windows-1252").unwrap();
    assert_eq!(encoded.encoding().unwrap().name(), "windows-1252");

    let stream = encoded.reader().expect("open reader");
    assert_eq!(stream.read_all().unwrap(), "c\u{e9}");
}

#[test]
fn utf8_bom_is_removed() {
    let encoded = EncodedResource::new(resource(&[0xEF, 0xBB, 0xBF, b'h', b'i']));
    let stream = encoded.reader().unwrap();
    assert_eq!(stream.read_all().unwrap(), "hi");
}

#[test]
fn utf16_bom_overrides_default_encoding() {
    let encoded = EncodedResource::new(resource(&[0xFF, 0xFE, b'h', 0x00, b'i', 0x00]));
    let stream = encoded.reader().unwrap();
    assert_eq!(stream.read_all().unwrap(), "hi");
}

#[test]
fn unknown_encoding_label_is_rejected() {
    let err = EncodedResource::with_encoding_label(resource(b"x"), "no-such-encoding").unwrap_err();
    match err {
        ConvertError::UnknownEncoding { label } => assert_eq!(label, "no-such-encoding"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn reader_surfaces_open_failure() {
    let missing: Arc<dyn Resource> = Arc::new(ClasspathResource::new(
        "missing.txt",
        ClasspathRegistry::new(),
    ));

    let err = EncodedResource::new(missing).reader().unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
