//! Runtime configuration
//!
//! Defaults can be overridden from a TOML file; command-line flags are
//! applied on top by the front-end.

use std::fs;
use std::path::Path;
use log::debug;

use crate::compression::CodecLevels;
use crate::errors::{PressError, PressResult};

/// Settings for a compression run
#[derive(Debug, Clone, PartialEq)]
pub struct PressConfig {
    /// `"auto"` or a codec name
    pub algorithm: String,
    /// Maximum number of files processed at once
    pub workers: usize,
    /// Debug-level logging
    pub verbose: bool,
    /// Show a progress bar
    pub progress: bool,
    /// Write log records to this file instead of the console logger
    pub log_file: Option<String>,
    /// Codec compression levels
    pub levels: CodecLevels,
}

impl Default for PressConfig {
    fn default() -> Self {
        PressConfig {
            algorithm: "auto".to_string(),
            workers: num_cpus::get().max(1),
            verbose: false,
            progress: false,
            log_file: None,
            levels: CodecLevels::default(),
        }
    }
}

impl PressConfig {
    /// Parse configuration from a TOML string, starting from the defaults
    pub fn from_str(content: &str) -> PressResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(PressError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let mut config = PressConfig::default();

        if let Some(algorithm) = Self::get_str(&toml_value, "algorithm")? {
            config.algorithm = algorithm.to_string();
        }
        if let Some(workers) = Self::get_int(&toml_value, "workers")? {
            if workers < 1 {
                return Err(PressError::ConfigError(format!("workers must be at least 1, got {}", workers)));
            }
            config.workers = workers as usize;
        }
        if let Some(verbose) = Self::get_bool(&toml_value, "verbose")? {
            config.verbose = verbose;
        }
        if let Some(progress) = Self::get_bool(&toml_value, "progress")? {
            config.progress = progress;
        }
        if let Some(log_file) = Self::get_str(&toml_value, "log_file")? {
            config.log_file = Some(log_file.to_string());
        }

        if let Some(levels) = toml_value.get("levels") {
            Self::parse_level(levels, "gzip", &mut config.levels.gzip)?;
            Self::parse_level(levels, "brotli", &mut config.levels.brotli)?;
            Self::parse_level(levels, "zlib", &mut config.levels.zlib)?;
        }

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> PressResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => return Err(PressError::IoError(e)),
        };

        Self::from_str(&contents)
    }

    fn get_str<'v>(value: &'v toml::Value, key: &str) -> PressResult<Option<&'v str>> {
        match value.get(key) {
            None => Ok(None),
            Some(v) => v.as_str().map(Some).ok_or_else(|| Self::type_error(key, "a string")),
        }
    }

    fn get_int(value: &toml::Value, key: &str) -> PressResult<Option<i64>> {
        match value.get(key) {
            None => Ok(None),
            Some(v) => v.as_integer().map(Some).ok_or_else(|| Self::type_error(key, "an integer")),
        }
    }

    fn get_bool(value: &toml::Value, key: &str) -> PressResult<Option<bool>> {
        match value.get(key) {
            None => Ok(None),
            Some(v) => v.as_bool().map(Some).ok_or_else(|| Self::type_error(key, "a boolean")),
        }
    }

    // Levels outside a codec's range are clamped by the codec itself
    fn parse_level(levels: &toml::Value, key: &str, target: &mut u32) -> PressResult<()> {
        if let Some(level) = Self::get_int(levels, key)? {
            *target = u32::try_from(level)
                .map_err(|_| PressError::ConfigError(format!("levels.{} must not be negative", key)))?;
        }
        Ok(())
    }

    fn type_error(key: &str, expected: &str) -> PressError {
        PressError::ConfigError(format!("{} must be {}", key, expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = PressConfig::from_str("").unwrap();
        std::assert_eq!(config.algorithm, "auto");
        std::assert!(config.workers >= 1);
        std::assert_eq!(config.levels, CodecLevels::default());
        std::assert!(config.log_file.is_none());
    }

    #[test]
    fn test_full_config() {
        let config = PressConfig::from_str(r#"
            algorithm = "lz4"
            workers = 3
            verbose = true
            progress = true
            log_file = "run.log"
            unknown_key = "ignored"

            [levels]
            gzip = 9
            brotli = 11
        "#).unwrap();

        std::assert_eq!(config.algorithm, "lz4");
        std::assert_eq!(config.workers, 3);
        std::assert!(config.verbose && config.progress);
        std::assert_eq!(config.log_file.as_deref(), Some("run.log"));
        std::assert_eq!(config.levels, CodecLevels { gzip: 9, brotli: 11, zlib: 6 });
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        std::assert!(matches!(PressConfig::from_str("workers = 0"), Err(PressError::ConfigError(_))));
        std::assert!(matches!(PressConfig::from_str("workers = \"four\""), Err(PressError::ConfigError(_))));
        std::assert!(matches!(PressConfig::from_str("[levels]\ngzip = -1"), Err(PressError::ConfigError(_))));
        std::assert!(PressConfig::from_str("algorithm = ").is_err());
    }
}
