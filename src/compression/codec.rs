//! Codec trait definition

use crate::errors::PressResult;

/// Strategy trait for a single compression algorithm
///
/// Implementations hold no per-call mutable state: one instance is built at
/// startup and shared by every worker thread.
pub trait Codec: Send + Sync {
    /// Compress the data
    fn compress(&self, data: &[u8]) -> PressResult<Vec<u8>>;

    /// Decompress the data
    fn decompress(&self, data: &[u8]) -> PressResult<Vec<u8>>;

    /// Canonical lower-case file extension, including the leading dot
    fn extension(&self) -> &'static str;

    /// Registry key of this codec
    fn name(&self) -> &'static str;
}
