//! Handler for gzip compressed data

use std::io::{Read, Write};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::debug;
use crate::errors::{PressError, PressResult};
use super::codec::Codec;

/// Gzip (generic deflate) codec, the general-purpose default
pub struct GzipCodec {
    /// Compression level (0-9)
    level: u32,
}

impl GzipCodec {
    /// Create a new gzip codec with the given level, clamped to 0-9
    pub fn new(level: u32) -> Self {
        GzipCodec {
            level: level.min(9),
        }
    }

    /// Compression level in use
    pub fn level(&self) -> u32 {
        self.level
    }
}

impl Default for GzipCodec {
    fn default() -> Self {
        Self::new(6)
    }
}

impl Codec for GzipCodec {
    fn compress(&self, data: &[u8]) -> PressResult<Vec<u8>> {
        debug!("gzip compressing {} bytes with level {}", data.len(), self.level);
        let mut encoder = GzEncoder::new(Vec::new(), Compression::new(self.level));
        match encoder.write_all(data) {
            Ok(_) => (),
            Err(e) => return Err(PressError::codec(self.name(), e)),
        }

        match encoder.finish() {
            Ok(compressed) => Ok(compressed),
            Err(e) => Err(PressError::codec(self.name(), e)),
        }
    }

    fn decompress(&self, data: &[u8]) -> PressResult<Vec<u8>> {
        let mut decoder = GzDecoder::new(data);
        let mut decompressed_data = Vec::new();
        match decoder.read_to_end(&mut decompressed_data) {
            Ok(_) => Ok(decompressed_data),
            Err(e) => Err(PressError::codec(self.name(), e)),
        }
    }

    fn extension(&self) -> &'static str {
        ".gz"
    }

    fn name(&self) -> &'static str {
        "gzip"
    }
}
