//! Tests for resource handle implementations.

use std::io::{Read, Write};
use std::path::PathBuf;

use crate::{ClasspathRegistry, ClasspathResource, FileResource, InMemoryResource, Resource};

#[test]
fn file_resource_reads_file_content() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"hello").unwrap();

    let resource = FileResource::new(file.path().to_path_buf());
    assert_eq!(resource.id(), file.path().to_string_lossy());

    let mut reader = resource.open().expect("open file resource");
    let mut buf = String::new();
    reader.read_to_string(&mut buf).unwrap();
    assert_eq!(buf, "hello");
}

#[test]
fn file_resource_open_fails_for_missing_file() {
    let resource = FileResource::new(PathBuf::from("/nonexistent/path.txt"));
    let err = resource.open().map(|_| ()).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn classpath_resource_reads_registered_entry() {
    let registry = ClasspathRegistry::new();
    registry.register("data.bin", vec![1, 2, 3]);

    let resource = ClasspathResource::new("data.bin", registry);
    assert_eq!(resource.id(), "classpath:data.bin");
    assert_eq!(resource.path(), "data.bin");

    let mut reader = resource.open().expect("open classpath resource");
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).unwrap();
    assert_eq!(buf, vec![1, 2, 3]);
}

#[test]
fn classpath_resource_open_fails_for_missing_entry() {
    let resource = ClasspathResource::new("missing.txt", ClasspathRegistry::new());
    let err = resource.open().map(|_| ()).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn registry_replaces_existing_entry() {
    let registry = ClasspathRegistry::new();
    registry.register_str("a.txt", "old");
    registry.register_str("a.txt", "new");

    assert!(registry.contains("a.txt"));
    assert_eq!(registry.get("a.txt").unwrap().as_slice(), b"new");
}

#[test]
fn registry_clones_share_entries() {
    let registry = ClasspathRegistry::new();
    let clone = registry.clone();
    registry.register_str("a.txt", "shared");

    assert!(clone.contains("a.txt"));
}

#[test]
fn in_memory_resource_reads_data() {
    let resource = InMemoryResource::from_string("mem", "hello");

    let mut reader = resource.open().expect("open in-memory resource");
    let mut buf = String::new();
    reader.read_to_string(&mut buf).unwrap();
    assert_eq!(buf, "hello");
}

#[test]
fn open_returns_fresh_stream_each_call() {
    let resource = InMemoryResource::from_string("mem", "hello");

    for _ in 0..2 {
        let mut reader = resource.open().unwrap();
        let mut buf = String::new();
        reader.read_to_string(&mut buf).unwrap();
        assert_eq!(buf, "hello");
    }
}
