//! Custom error types for file compression

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error kinds produced while compressing or decompressing a file
#[derive(Debug)]
pub enum PressError {
    /// I/O error while reading, writing or creating directories
    IoError(io::Error),
    /// Compression requested on a file that already carries a codec extension
    AlreadyCompressed(PathBuf),
    /// Forced algorithm name is not in the registry
    UnknownAlgorithm(String),
    /// Decompression requested on a file whose extension matches no codec
    UnknownFormat(PathBuf),
    /// The underlying compress/decompress transform failed
    CodecError {
        codec: &'static str,
        message: String,
    },
    /// Invalid configuration value
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl PressError {
    /// Build a codec error from any displayable cause
    pub fn codec(codec: &'static str, cause: impl fmt::Display) -> Self {
        PressError::CodecError {
            codec,
            message: cause.to_string(),
        }
    }
}

impl fmt::Display for PressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PressError::IoError(e) => write!(f, "I/O error: {}", e),
            PressError::AlreadyCompressed(path) => write!(f, "File {} is already compressed", path.display()),
            PressError::UnknownAlgorithm(name) => write!(f, "Unknown compression algorithm: {}", name),
            PressError::UnknownFormat(path) => write!(f, "Unknown compression format for file: {}", path.display()),
            PressError::CodecError { codec, message } => write!(f, "{} codec error: {}", codec, message),
            PressError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            PressError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for PressError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PressError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PressError {
    fn from(error: io::Error) -> Self {
        PressError::IoError(error)
    }
}

impl From<String> for PressError {
    fn from(msg: String) -> Self {
        PressError::GenericError(msg)
    }
}

/// Result type for compression operations
pub type PressResult<T> = Result<T, PressError>;
