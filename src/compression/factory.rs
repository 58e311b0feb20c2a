//! Factory for creating codecs

use crate::errors::{PressError, PressResult};
use super::codec::Codec;
use super::gzip::GzipCodec;
use super::brotli::BrotliCodec;
use super::lz4::Lz4Codec;
use super::zlib::ZlibCodec;

/// Names of every codec the factory can build, in registration order
pub const CODEC_NAMES: [&str; 4] = ["gzip", "brotli", "lz4", "zlib"];

/// Compression levels applied when codecs are constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecLevels {
    /// Gzip level (0-9)
    pub gzip: u32,
    /// Brotli quality (0-11)
    pub brotli: u32,
    /// Zlib level (0-9)
    pub zlib: u32,
}

impl Default for CodecLevels {
    fn default() -> Self {
        CodecLevels {
            gzip: 6,
            brotli: 6,
            zlib: 6,
        }
    }
}

/// Factory for creating codecs
pub struct CodecFactory;

impl CodecFactory {
    /// Create a codec by registry name
    pub fn create_codec(name: &str, levels: &CodecLevels) -> PressResult<Box<dyn Codec>> {
        match name.to_lowercase().as_str() {
            "gzip" => Ok(Box::new(GzipCodec::new(levels.gzip))),
            "brotli" => Ok(Box::new(BrotliCodec::new(levels.brotli))),
            "lz4" => Ok(Box::new(Lz4Codec::new())),
            "zlib" => Ok(Box::new(ZlibCodec::new(levels.zlib))),
            _ => Err(PressError::UnknownAlgorithm(name.to_string())),
        }
    }

    /// Create every available codec
    pub fn get_available_codecs(levels: &CodecLevels) -> Vec<Box<dyn Codec>> {
        vec![
            Box::new(GzipCodec::new(levels.gzip)),
            Box::new(BrotliCodec::new(levels.brotli)),
            Box::new(Lz4Codec::new()),
            Box::new(ZlibCodec::new(levels.zlib)),
        ]
    }
}
