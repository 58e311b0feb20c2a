//! Per-file processing outcome

use std::path::{Path, PathBuf};
use crate::errors::PressError;

/// Outcome of compressing or decompressing one file
///
/// Sizes are zero whenever `error` is set.
#[derive(Debug)]
pub struct ProcessingResult {
    /// File that was processed
    pub input: PathBuf,
    /// File that was written, if the operation got that far
    pub output: Option<PathBuf>,
    /// Registry name of the codec used
    pub codec: Option<&'static str>,
    /// Uncompressed size in bytes
    pub original_size: u64,
    /// Compressed size in bytes
    pub compressed_size: u64,
    /// Compressed size as a percentage of the original size
    pub ratio: f64,
    /// Failure, if any
    pub error: Option<PressError>,
}

impl ProcessingResult {
    /// Successful result
    pub fn success(input: &Path, output: PathBuf, codec: &'static str,
                   original_size: u64, compressed_size: u64) -> Self {
        ProcessingResult {
            input: input.to_path_buf(),
            output: Some(output),
            codec: Some(codec),
            original_size,
            compressed_size,
            ratio: compression_ratio(compressed_size, original_size),
            error: None,
        }
    }

    /// Failed result carrying only the error
    pub fn failed(input: &Path, error: PressError) -> Self {
        ProcessingResult {
            input: input.to_path_buf(),
            output: None,
            codec: None,
            original_size: 0,
            compressed_size: 0,
            ratio: 0.0,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// `compressed / original * 100`, or 0 for an empty original
pub fn compression_ratio(compressed_size: u64, original_size: u64) -> f64 {
    if original_size == 0 {
        0.0
    } else {
        compressed_size as f64 / original_size as f64 * 100.0
    }
}
