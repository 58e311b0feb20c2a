//! Utility modules for common functionality
//!
//! This module provides logging, progress display, input collection and
//! formatting helpers used by the command-line front-end.

pub mod logger;
pub mod progress;
pub mod file_utils;
pub mod format_utils;
