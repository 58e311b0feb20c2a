//! Name-keyed registry of codecs

use std::collections::BTreeMap;
use std::path::Path;
use log::debug;

use crate::errors::PressResult;
use super::codec::Codec;
use super::factory::{CodecFactory, CodecLevels};

/// Mapping from algorithm name to codec
///
/// Built once at startup and only read afterwards, so a shared reference can
/// be handed to any number of worker threads.
pub struct CodecRegistry {
    codecs: BTreeMap<String, Box<dyn Codec>>,
}

impl CodecRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        CodecRegistry {
            codecs: BTreeMap::new(),
        }
    }

    /// Create a registry holding the four standard codecs at default levels
    pub fn with_defaults() -> Self {
        Self::with_levels(&CodecLevels::default())
    }

    /// Create a registry holding the four standard codecs at the given levels
    pub fn with_levels(levels: &CodecLevels) -> Self {
        let mut registry = Self::new();
        for codec in CodecFactory::get_available_codecs(levels) {
            registry.register(codec);
        }
        registry
    }

    /// Create a registry containing only the named codecs
    pub fn from_names(names: &[&str], levels: &CodecLevels) -> PressResult<Self> {
        let mut registry = Self::new();
        for name in names {
            registry.register(CodecFactory::create_codec(name, levels)?);
        }
        Ok(registry)
    }

    /// Add a codec under its own name, replacing any previous entry
    pub fn register(&mut self, codec: Box<dyn Codec>) {
        debug!("Registering codec {} ({})", codec.name(), codec.extension());
        self.codecs.insert(codec.name().to_string(), codec);
    }

    /// Look up a codec by name
    pub fn get(&self, name: &str) -> Option<&dyn Codec> {
        self.codecs.get(name).map(|codec| codec.as_ref())
    }

    /// Look up a codec by its canonical extension (with or without the dot)
    pub fn find_by_extension(&self, extension: &str) -> Option<&dyn Codec> {
        let wanted = extension.trim_start_matches('.').to_lowercase();
        self.codecs
            .values()
            .find(|codec| codec.extension().trim_start_matches('.') == wanted)
            .map(|codec| codec.as_ref())
    }

    /// Codec whose extension matches the final extension of `path`
    pub fn match_path(&self, path: &Path) -> Option<&dyn Codec> {
        let extension = path.extension()?.to_str()?;
        self.find_by_extension(extension)
    }

    /// Whether `path` already carries a registered codec extension
    pub fn is_compressed(&self, path: &Path) -> bool {
        self.match_path(path).is_some()
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.codecs.keys().map(|name| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
