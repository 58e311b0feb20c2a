//! Extension to MIME type lookup
//!
//! The table lives in `mime_types.toml` and is embedded at compile time.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use lazy_static::lazy_static;
use log::warn;
use crate::errors::{PressError, PressResult};

lazy_static! {
    // Parse the embedded table on first use
    static ref MIME_TYPES: MimeTable = {
        let content = include_str!("../../mime_types.toml");
        MimeTable::from_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse embedded MIME table: {}", e);
            MimeTable::default()
        })
    };
}

/// Broad content category derived from a MIME type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentCategory {
    /// `text/*`, `application/json` or `application/xml`
    Text,
    /// `image/*`
    Image,
    /// Anything else, including unknown extensions
    Other,
}

impl ContentCategory {
    /// Classify a MIME type string
    pub fn from_mime(mime: &str) -> Self {
        let mime = mime.trim().to_lowercase();
        if mime.starts_with("text/")
            || mime.starts_with("application/json")
            || mime.starts_with("application/xml")
        {
            ContentCategory::Text
        } else if mime.starts_with("image/") {
            ContentCategory::Image
        } else {
            ContentCategory::Other
        }
    }
}

/// Extension to MIME type table
#[derive(Debug, Default)]
pub struct MimeTable {
    // Lower-case extension without dot -> MIME type
    by_extension: HashMap<String, String>,
}

impl MimeTable {
    /// Parse a table from TOML with an `[extensions]` section
    pub fn from_str(content: &str) -> PressResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(PressError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let mut table = MimeTable::default();
        if let Some(entries) = toml_value.get("extensions").and_then(|v| v.as_table()) {
            for (ext, mime) in entries {
                if let Some(mime) = mime.as_str() {
                    table.insert(ext, mime);
                }
            }
        }

        Ok(table)
    }

    /// Load a table from a TOML file
    pub fn from_file(path: &Path) -> PressResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Add or replace a mapping
    pub fn insert(&mut self, extension: &str, mime: &str) {
        let key = extension.trim_start_matches('.').to_lowercase();
        self.by_extension.insert(key, mime.to_string());
    }

    /// MIME type for an extension, with or without the leading dot
    pub fn mime_type(&self, extension: &str) -> Option<&str> {
        let key = extension.trim_start_matches('.').to_lowercase();
        self.by_extension.get(&key).map(|mime| mime.as_str())
    }

    /// MIME type for the final extension of a path
    pub fn mime_type_for_path(&self, path: &Path) -> Option<&str> {
        let extension = path.extension()?.to_str()?;
        self.mime_type(extension)
    }

    /// Content category for a path, `Other` when the extension is unknown
    pub fn category_for_path(&self, path: &Path) -> ContentCategory {
        self.mime_type_for_path(path)
            .map(ContentCategory::from_mime)
            .unwrap_or(ContentCategory::Other)
    }

    pub fn len(&self) -> usize {
        self.by_extension.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }
}

/// The built-in table
pub fn builtin() -> &'static MimeTable {
    &MIME_TYPES
}
