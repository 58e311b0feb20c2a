//! Tests for single-file compression and decompression

extern crate std;

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::compression::{BrotliCodec, Codec, CodecRegistry, GzipCodec};
use crate::errors::PressError;
use crate::processor::{Processor, SelectionMode};

fn processor(selector: &str) -> Processor {
    Processor::new(CodecRegistry::with_defaults(), SelectionMode::parse(selector), 2, false)
}

fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

// Derived outputs land next to the input's parent, so inputs live one
// level below the temp root
fn input_dir(root: &TempDir) -> PathBuf {
    let dir = root.path().join("input");
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_selection_mode_parsing() {
    std::assert_eq!(SelectionMode::parse("auto"), SelectionMode::Auto);
    std::assert_eq!(SelectionMode::parse(" AUTO "), SelectionMode::Auto);
    std::assert_eq!(SelectionMode::parse("Brotli"), SelectionMode::Forced("brotli".to_string()));
    std::assert_eq!(SelectionMode::from("lz4").to_string(), "lz4");
}

#[test]
fn test_worker_count_is_at_least_one() {
    let processor = Processor::new(CodecRegistry::with_defaults(), SelectionMode::Auto, 0, true);
    std::assert_eq!(processor.workers(), 1);
    std::assert!(processor.verbose());
}

#[test]
fn test_forced_gzip_writes_sibling_directory() {
    let root = TempDir::new().unwrap();
    let dir = root.path().join("docs");
    fs::create_dir(&dir).unwrap();
    let input = write_file(&dir, "hello.txt", &vec![b'a'; 1000]);

    let result = processor("gzip").process_one(&input, None);
    std::assert!(result.is_success(), "{:?}", result.error);

    let expected = root.path().join("docs_gz").join("hello.txt.gz");
    std::assert_eq!(result.output.as_deref(), Some(expected.as_path()));
    std::assert!(expected.exists());
    std::assert_eq!(result.codec, Some("gzip"));
    std::assert_eq!(result.original_size, 1000);
    std::assert!(result.compressed_size < 1000);
    std::assert!(result.ratio > 0.0 && result.ratio < 100.0);

    let restored = GzipCodec::default().decompress(&fs::read(&expected).unwrap()).unwrap();
    std::assert_eq!(restored, vec![b'a'; 1000]);
}

#[test]
fn test_auto_mode_uses_detector() {
    let root = TempDir::new().unwrap();
    let text = write_file(&input_dir(&root), "notes.txt", b"some text some text some text");
    let blob = write_file(&input_dir(&root), "blob.xyz", &[1, 2, 3, 4, 5]);

    let processor = processor("auto");
    std::assert_eq!(processor.process_one(&text, None).codec, Some("brotli"));
    std::assert_eq!(processor.process_one(&blob, None).codec, Some("gzip"));
}

#[test]
fn test_explicit_output_path_is_used_as_is() {
    let root = TempDir::new().unwrap();
    let input = write_file(&input_dir(&root), "data.bin", b"explicit output");
    let output = root.path().join("custom.out");

    let result = processor("zlib").process_one(&input, Some(&output));
    std::assert!(result.is_success());
    std::assert_eq!(result.output.as_deref(), Some(output.as_path()));
    std::assert!(output.exists());
}

#[test]
fn test_already_compressed_is_rejected_in_every_mode() {
    let root = TempDir::new().unwrap();
    let input = write_file(&input_dir(&root), "archive.txt.gz", b"not really gzip");

    for selector in ["auto", "gzip", "brotli", "missing"] {
        let result = processor(selector).process_one(&input, None);
        std::assert!(matches!(result.error, Some(PressError::AlreadyCompressed(_))), "{}", selector);
        std::assert_eq!(result.original_size, 0);
        std::assert_eq!(result.compressed_size, 0);
    }
}

#[test]
fn test_unknown_forced_algorithm_performs_no_io() {
    let root = TempDir::new().unwrap();
    let missing = input_dir(&root).join("does_not_exist.txt");

    // A missing input would be an I/O error if the file were read first
    let result = processor("zstd").process_one(&missing, None);
    match result.error {
        Some(PressError::UnknownAlgorithm(name)) => std::assert_eq!(name, "zstd"),
        other => panic!("expected UnknownAlgorithm, got {:?}", other),
    }
    std::assert_eq!(fs::read_dir(root.path()).unwrap().count(), 1);
}

#[test]
fn test_missing_input_is_io_error() {
    let root = TempDir::new().unwrap();
    let result = processor("gzip").process_one(&input_dir(&root).join("gone.bin"), None);
    std::assert!(matches!(result.error, Some(PressError::IoError(_))));
    std::assert!(result.output.is_none());
}

#[test]
fn test_decompress_restores_original() {
    let root = TempDir::new().unwrap();
    let content = b"round trip through every codec ".repeat(40);

    for name in ["gzip", "brotli", "lz4", "zlib"] {
        let dir = root.path().join(name);
        fs::create_dir(&dir).unwrap();
        let input = write_file(&dir, "report.txt", &content);

        let processor = processor(name);
        let compressed = processor.process_one(&input, None);
        std::assert!(compressed.is_success(), "{}: {:?}", name, compressed.error);

        let compressed_path = compressed.output.unwrap();
        fs::remove_file(&input).unwrap();
        let restored = processor.decompress_one(&compressed_path);
        std::assert!(restored.is_success(), "{}: {:?}", name, restored.error);

        let restored_path = restored.output.unwrap();
        std::assert_eq!(restored_path.file_name().unwrap(), "report.txt");
        std::assert_eq!(fs::read(&restored_path).unwrap(), content);
        std::assert_eq!(restored.original_size, content.len() as u64);
        std::assert_eq!(restored.compressed_size, fs::metadata(&compressed_path).unwrap().len());
    }
}

#[test]
fn test_decompress_unknown_extension_is_unknown_format() {
    let root = TempDir::new().unwrap();
    let input = write_file(&input_dir(&root), "archive.zip", b"PK\x03\x04");

    let result = processor("auto").decompress_one(&input);
    std::assert!(matches!(result.error, Some(PressError::UnknownFormat(_))));

    // Checked before the file is read
    let result = processor("auto").decompress_one(&root.path().join("missing.7z"));
    std::assert!(matches!(result.error, Some(PressError::UnknownFormat(_))));
}

#[test]
fn test_decompress_corrupt_data_is_codec_error() {
    let root = TempDir::new().unwrap();
    let stream = BrotliCodec::default().compress(&b"cut short ".repeat(200)).unwrap();
    let input = write_file(&input_dir(&root), "broken.br", &stream[..stream.len() / 2]);

    let result = processor("auto").decompress_one(&input);
    std::assert!(matches!(result.error, Some(PressError::CodecError { codec: "brotli", .. })));
    std::assert!(!input.with_extension("").exists());
}

#[test]
fn test_decompress_to_explicit_path() {
    let root = TempDir::new().unwrap();
    let input = write_file(&input_dir(&root), "data.csv", b"a,b,c\n1,2,3\n");
    let processor = processor("lz4");

    let compressed = processor.process_one(&input, None).output.unwrap();
    let target = input_dir(&root).join("elsewhere.csv");
    let result = processor.decompress_one_to(&compressed, &target);
    std::assert!(result.is_success());
    std::assert_eq!(fs::read(&target).unwrap(), b"a,b,c\n1,2,3\n");
}

#[test]
fn test_empty_file_round_trip() {
    let root = TempDir::new().unwrap();
    let input = write_file(&input_dir(&root), "empty.dat", b"");
    let processor = processor("brotli");

    let result = processor.process_one(&input, None);
    std::assert!(result.is_success());
    std::assert_eq!(result.original_size, 0);
    std::assert_eq!(result.ratio, 0.0);

    let restored = processor.decompress_one(result.output.as_ref().unwrap());
    std::assert!(restored.is_success());
    std::assert_eq!(fs::read(restored.output.unwrap()).unwrap(), b"");
}
