//! Handler for Brotli compressed data

use ::brotli::enc::BrotliEncoderParams;
use log::debug;
use crate::errors::{PressError, PressResult};
use super::codec::Codec;

/// Sliding window size (log2) used for encoding
const BROTLI_WINDOW_BITS: i32 = 22;

/// Brotli codec, the highest-ratio choice for text-like content
pub struct BrotliCodec {
    /// Quality (0-11)
    quality: u32,
}

impl BrotliCodec {
    /// Create a new Brotli codec with the given quality, clamped to 0-11
    pub fn new(quality: u32) -> Self {
        BrotliCodec {
            quality: quality.min(11),
        }
    }

    fn encoder_params(&self) -> BrotliEncoderParams {
        let mut params = BrotliEncoderParams::default();
        params.quality = self.quality as i32;
        params.lgwin = BROTLI_WINDOW_BITS;
        params
    }
}

impl Default for BrotliCodec {
    fn default() -> Self {
        Self::new(6)
    }
}

impl Codec for BrotliCodec {
    fn compress(&self, data: &[u8]) -> PressResult<Vec<u8>> {
        debug!("brotli compressing {} bytes with quality {}", data.len(), self.quality);
        let mut input = data;
        let mut output = Vec::new();
        ::brotli::BrotliCompress(&mut input, &mut output, &self.encoder_params())
            .map_err(|e| PressError::codec(self.name(), e))?;
        Ok(output)
    }

    fn decompress(&self, data: &[u8]) -> PressResult<Vec<u8>> {
        let mut input = data;
        let mut output = Vec::new();
        ::brotli::BrotliDecompress(&mut input, &mut output)
            .map_err(|e| PressError::codec(self.name(), e))?;
        debug!("brotli decompressed {} bytes to {} bytes", data.len(), output.len());
        Ok(output)
    }

    fn extension(&self) -> &'static str {
        ".br"
    }

    fn name(&self) -> &'static str {
        "brotli"
    }
}
