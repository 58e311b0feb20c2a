//! Tests for the codec registry and factory

extern crate std;

use std::path::Path;
use crate::compression::{CodecFactory, CodecLevels, CodecRegistry, CODEC_NAMES};
use crate::errors::PressError;

#[test]
fn test_default_registry_contains_all_codecs() {
    let registry = CodecRegistry::with_defaults();
    std::assert_eq!(registry.len(), 4);
    for name in CODEC_NAMES {
        let codec = registry.get(name).unwrap();
        std::assert_eq!(codec.name(), name);
    }
    std::assert_eq!(registry.names(), vec!["brotli", "gzip", "lz4", "zlib"]);
}

#[test]
fn test_lookup_by_extension() {
    let registry = CodecRegistry::with_defaults();
    std::assert_eq!(registry.find_by_extension(".gz").unwrap().name(), "gzip");
    std::assert_eq!(registry.find_by_extension("br").unwrap().name(), "brotli");
    std::assert_eq!(registry.find_by_extension(".LZ4").unwrap().name(), "lz4");
    std::assert!(registry.find_by_extension(".zip").is_none());
}

#[test]
fn test_match_path_uses_final_extension() {
    let registry = CodecRegistry::with_defaults();
    std::assert_eq!(registry.match_path(Path::new("report.txt.br")).unwrap().name(), "brotli");
    std::assert_eq!(registry.match_path(Path::new("dir/ARCHIVE.ZLIB")).unwrap().name(), "zlib");
    std::assert!(registry.match_path(Path::new("report.txt")).is_none());
    std::assert!(registry.match_path(Path::new("no_extension")).is_none());
    std::assert!(registry.is_compressed(Path::new("a/b/c.gz")));
    std::assert!(!registry.is_compressed(Path::new("a/b.gz/c")));
}

#[test]
fn test_factory_rejects_unknown_names() {
    match CodecFactory::create_codec("zstd", &CodecLevels::default()) {
        Err(PressError::UnknownAlgorithm(name)) => std::assert_eq!(name, "zstd"),
        _ => panic!("zstd should not be available"),
    }
}

#[test]
fn test_registry_from_names() {
    let registry = CodecRegistry::from_names(&["lz4", "GZIP"], &CodecLevels::default()).unwrap();
    std::assert_eq!(registry.names(), vec!["gzip", "lz4"]);
    std::assert!(registry.get("brotli").is_none());
    std::assert!(CodecRegistry::from_names(&["rar"], &CodecLevels::default()).is_err());
}

#[test]
fn test_empty_registry() {
    let registry = CodecRegistry::new();
    std::assert!(registry.is_empty());
    std::assert!(!registry.is_compressed(Path::new("file.gz")));
}

#[test]
fn test_extensions_are_not_algorithm_names() {
    let levels = CodecLevels::default();
    std::assert!(matches!(CodecFactory::create_codec("gz", &levels), Err(PressError::UnknownAlgorithm(_))));
    std::assert!(matches!(CodecRegistry::from_names(&["br"], &levels), Err(PressError::UnknownAlgorithm(_))));

    let registry = CodecRegistry::with_defaults();
    std::assert!(registry.get("gz").is_none());
    std::assert!(registry.get("br").is_none());
}
