//! Handler for LZ4 block compressed data
//!
//! Raw LZ4 blocks do not record their decompressed size, so every block is
//! framed as a little-endian `u32` original length followed by the block.
//! Decompression allocates exactly that many bytes.

use std::io::Cursor;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::{debug, warn};
use crate::errors::{PressError, PressResult};
use super::codec::Codec;

/// Size of the length prefix in bytes
const LENGTH_PREFIX_SIZE: usize = 4;

/// Upper bound on the LZ4 block expansion ratio
const MAX_EXPANSION_RATIO: usize = 255;

/// LZ4 block codec, the fast low-ratio choice for entropy-dense content
#[derive(Default)]
pub struct Lz4Codec;

impl Lz4Codec {
    /// Create a new LZ4 codec
    pub fn new() -> Self {
        Lz4Codec
    }
}

impl Codec for Lz4Codec {
    fn compress(&self, data: &[u8]) -> PressResult<Vec<u8>> {
        let original_len = u32::try_from(data.len())
            .map_err(|_| PressError::codec(self.name(), format!("input of {} bytes exceeds the frame limit", data.len())))?;

        let block = lz4_flex::block::compress(data);
        let mut framed = Vec::with_capacity(LENGTH_PREFIX_SIZE + block.len());
        framed.write_u32::<LittleEndian>(original_len)?;
        framed.extend_from_slice(&block);

        debug!("LZ4 compressed {} bytes to {} bytes", data.len(), framed.len());
        Ok(framed)
    }

    fn decompress(&self, data: &[u8]) -> PressResult<Vec<u8>> {
        if data.len() < LENGTH_PREFIX_SIZE {
            return Err(PressError::codec(self.name(), "truncated frame: missing length prefix"));
        }

        let original_len = Cursor::new(data).read_u32::<LittleEndian>()? as usize;
        let block = &data[LENGTH_PREFIX_SIZE..];
        if original_len == 0 {
            return Ok(Vec::new());
        }

        // A corrupt prefix must not turn into a huge allocation
        if original_len > block.len().saturating_mul(MAX_EXPANSION_RATIO) + 16 {
            warn!("LZ4 frame claims {} bytes from a {} byte block", original_len, block.len());
            return Err(PressError::codec(self.name(), format!(
                "frame length {} is impossible for a {} byte block", original_len, block.len())));
        }

        let decompressed = lz4_flex::block::decompress(block, original_len)
            .map_err(|e| PressError::codec(self.name(), e))?;

        if decompressed.len() != original_len {
            return Err(PressError::codec(self.name(), format!(
                "expected {} bytes, block decoded to {}", original_len, decompressed.len())));
        }

        Ok(decompressed)
    }

    fn extension(&self) -> &'static str {
        ".lz4"
    }

    fn name(&self) -> &'static str {
        "lz4"
    }
}
