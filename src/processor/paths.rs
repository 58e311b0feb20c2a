//! Output path derivation

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Where a processed file is written
#[derive(Debug, Clone, Copy)]
pub enum OutputTarget<'p> {
    /// Derived from the input path
    Derived,
    /// Inside this directory, keeping the input's base name
    Directory(&'p Path),
    /// Exactly this file
    File(&'p Path),
}

/// Sibling-directory path for a compressed file
///
/// `photos/img.bin` compressed with `.gz` becomes `photos_gz/img.bin.gz`.
/// A bare file name is treated as living in `.`.
pub fn compressed_output_path(input: &Path, extension: &str) -> PathBuf {
    let suffix = extension.trim_start_matches('.');
    let parent = match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut dir_name: OsString = parent.as_os_str().to_os_string();
    dir_name.push("_");
    dir_name.push(suffix);

    PathBuf::from(dir_name).join(with_appended_extension(input, extension))
}

/// Compressed file name inside an explicit output directory
pub fn compressed_path_in(dir: &Path, input: &Path, extension: &str) -> PathBuf {
    dir.join(with_appended_extension(input, extension))
}

/// Input path with its codec extension stripped
///
/// `report.txt.br` becomes `report.txt`.
pub fn decompressed_output_path(input: &Path) -> PathBuf {
    input.with_extension("")
}

/// Decompressed file name inside an explicit output directory
pub fn decompressed_path_in(dir: &Path, input: &Path) -> PathBuf {
    match decompressed_output_path(input).file_name() {
        Some(name) => dir.join(name),
        None => dir.to_path_buf(),
    }
}

// Base name with the codec extension appended
fn with_appended_extension(input: &Path, extension: &str) -> OsString {
    let mut name = input
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(extension.trim_start_matches('.'));
    name
}
