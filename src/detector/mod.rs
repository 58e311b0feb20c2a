//! Automatic codec selection
//!
//! The detector looks at a file's extension first and its leading bytes
//! second. Text-like content gets the highest-ratio codec, content that is
//! already entropy-dense gets the fastest one, and everything else gets the
//! general-purpose default.
//!
//! Detection never fails. If the content sample cannot be read the default
//! codec is chosen and a warning is logged; the read error itself will
//! surface later when the processor reads the whole file.

mod mime;
mod signatures;

pub use mime::{builtin as builtin_mime_table, ContentCategory, MimeTable};
pub use signatures::{has_dense_marker, read_sample, SNIFF_LEN};

use std::path::Path;
use log::{debug, warn};

use crate::compression::{Codec, CodecRegistry};

/// Codec preferred for text, JSON and XML
pub const TEXT_CODEC: &str = "brotli";
/// Codec preferred for already-compressed payloads
pub const DENSE_CODEC: &str = "lz4";
/// General-purpose fallback codec
pub const DEFAULT_CODEC: &str = "gzip";

/// Picks a codec for a file under automatic selection
pub struct Detector<'a> {
    registry: &'a CodecRegistry,
    mime_table: &'a MimeTable,
}

impl<'a> Detector<'a> {
    /// Create a detector using the built-in MIME table
    pub fn new(registry: &'a CodecRegistry) -> Self {
        Detector {
            registry,
            mime_table: builtin_mime_table(),
        }
    }

    /// Create a detector with a custom MIME table
    pub fn with_mime_table(registry: &'a CodecRegistry, mime_table: &'a MimeTable) -> Self {
        Detector {
            registry,
            mime_table,
        }
    }

    /// Choose a codec for `path`
    ///
    /// Returns `None` only when the file already carries a registered codec
    /// extension; callers must not compress such a file again.
    pub fn detect(&self, path: &Path) -> Option<&'a dyn Codec> {
        if self.registry.is_compressed(path) {
            debug!("{} already carries a codec extension", path.display());
            return None;
        }

        let category = self.mime_table.category_for_path(path);
        if category == ContentCategory::Text {
            return self.preferred(TEXT_CODEC, path);
        }

        match read_sample(path) {
            Ok(sample) => {
                if has_dense_marker(&sample) {
                    return self.preferred(DENSE_CODEC, path);
                }
            }
            Err(e) => {
                warn!("Could not sample {}: {}; falling back to {}", path.display(), e, DEFAULT_CODEC);
                return self.registry.get(DEFAULT_CODEC);
            }
        }

        if category == ContentCategory::Image {
            return self.preferred(DENSE_CODEC, path);
        }

        self.registry.get(DEFAULT_CODEC)
    }

    // Preferred codec if registered, otherwise the default
    fn preferred(&self, name: &str, path: &Path) -> Option<&'a dyn Codec> {
        match self.registry.get(name) {
            Some(codec) => {
                debug!("Detected {} for {}", name, path.display());
                Some(codec)
            }
            None => self.registry.get(DEFAULT_CODEC),
        }
    }
}
