//! Tests for output path derivation

extern crate std;

use std::path::{Path, PathBuf};
use crate::processor::{compressed_output_path, compressed_path_in, decompressed_output_path, decompressed_path_in};

#[test]
fn test_sibling_directory_layout() {
    std::assert_eq!(compressed_output_path(Path::new("photos/img.bin"), ".gz"),
                    PathBuf::from("photos_gz/img.bin.gz"));
    std::assert_eq!(compressed_output_path(Path::new("/data/logs/app.log"), ".br"),
                    PathBuf::from("/data/logs_br/app.log.br"));
    std::assert_eq!(compressed_output_path(Path::new("a/b/c.txt"), "zlib"),
                    PathBuf::from("a/b_zlib/c.txt.zlib"));
}

#[test]
fn test_bare_file_name_uses_current_directory() {
    std::assert_eq!(compressed_output_path(Path::new("img.bin"), ".lz4"),
                    PathBuf::from("._lz4/img.bin.lz4"));
}

#[cfg(unix)]
#[test]
fn test_root_level_file_keeps_absolute_sibling() {
    std::assert_eq!(compressed_output_path(Path::new("/img.bin"), ".gz"),
                    PathBuf::from("/_gz/img.bin.gz"));
}

#[test]
fn test_explicit_directory_keeps_base_name() {
    std::assert_eq!(compressed_path_in(Path::new("out"), Path::new("deep/dir/file.csv"), ".gz"),
                    PathBuf::from("out/file.csv.gz"));
    std::assert_eq!(decompressed_path_in(Path::new("restored"), Path::new("x_gz/file.csv.gz")),
                    PathBuf::from("restored/file.csv"));
}

#[test]
fn test_decompressed_path_strips_one_extension() {
    std::assert_eq!(decompressed_output_path(Path::new("report.txt.br")), PathBuf::from("report.txt"));
    std::assert_eq!(decompressed_output_path(Path::new("dir_gz/a.gz")), PathBuf::from("dir_gz/a"));
}
