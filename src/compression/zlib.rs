//! Handler for zlib compressed data

use std::io::{Read, Write};
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use crate::errors::{PressError, PressResult};
use super::codec::Codec;

/// Zlib-wrapped deflate codec
pub struct ZlibCodec {
    level: u32,
}

impl ZlibCodec {
    /// Create a new zlib codec with the given level, clamped to 0-9
    pub fn new(level: u32) -> Self {
        ZlibCodec {
            level: level.min(9),
        }
    }
}

impl Default for ZlibCodec {
    fn default() -> Self {
        Self::new(6)
    }
}

impl Codec for ZlibCodec {
    fn compress(&self, data: &[u8]) -> PressResult<Vec<u8>> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(self.level));
        encoder
            .write_all(data)
            .map_err(|e| PressError::codec(self.name(), e))?;
        encoder.finish().map_err(|e| PressError::codec(self.name(), e))
    }

    fn decompress(&self, data: &[u8]) -> PressResult<Vec<u8>> {
        let mut decoder = ZlibDecoder::new(data);
        let mut decompressed_data = Vec::new();
        decoder
            .read_to_end(&mut decompressed_data)
            .map_err(|e| PressError::codec(self.name(), e))?;
        Ok(decompressed_data)
    }

    fn extension(&self) -> &'static str {
        ".zlib"
    }

    fn name(&self) -> &'static str {
        "zlib"
    }
}
