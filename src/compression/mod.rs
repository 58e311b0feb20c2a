//! Compression codecs
//!
//! This module wraps each supported algorithm behind the [`Codec`] strategy
//! trait and collects them in a name-keyed [`CodecRegistry`].

mod codec;
mod gzip;
mod brotli;
mod lz4;
mod zlib;
mod factory;
mod registry;
#[cfg(test)]
mod tests;

pub use codec::Codec;
pub use gzip::GzipCodec;
pub use self::brotli::BrotliCodec;
pub use lz4::Lz4Codec;
pub use zlib::ZlibCodec;
pub use factory::{CodecFactory, CodecLevels, CODEC_NAMES};
pub use registry::CodecRegistry;
