//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod batch_job;
pub mod compress_command;
pub mod decompress_command;

pub use command_traits::{Command, CommandFactory};
pub use batch_job::BatchJob;
pub use compress_command::CompressCommand;
pub use decompress_command::DecompressCommand;

use std::path::Path;
use clap::ArgMatches;
use crate::config::PressConfig;
use crate::errors::{PressError, PressResult};

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct FilepressCommandFactory;

impl FilepressCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        FilepressCommandFactory
    }
}

impl Default for FilepressCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for FilepressCommandFactory {
    fn create_command(&self, args: &ArgMatches, config: &PressConfig) -> PressResult<Box<dyn Command>> {
        if args.get_flag("decompress") {
            Ok(Box::new(DecompressCommand::new(args, config)?))
        } else {
            // Default to compression
            Ok(Box::new(CompressCommand::new(args, config)?))
        }
    }
}

/// Build the effective configuration
///
/// Starts from the `--config` file (or the defaults) and applies any
/// command-line overrides on top.
pub fn resolve_config(args: &ArgMatches) -> PressResult<PressConfig> {
    let mut config = match args.get_one::<String>("config") {
        Some(path) => PressConfig::from_file(Path::new(path))?,
        None => PressConfig::default(),
    };

    if let Some(algorithm) = args.get_one::<String>("algorithm") {
        config.algorithm = algorithm.clone();
    }

    if let Some(workers) = args.get_one::<String>("concurrency") {
        let workers = workers.parse::<usize>()
            .map_err(|_| PressError::ConfigError(format!("Invalid worker count: {}", workers)))?;
        if workers == 0 {
            return Err(PressError::ConfigError("Worker count must be at least 1".to_string()));
        }
        config.workers = workers;
    }

    if args.get_flag("verbose") {
        config.verbose = true;
    }
    if args.get_flag("progress") {
        config.progress = true;
    }
    if let Some(log_file) = args.get_one::<String>("log-file") {
        config.log_file = Some(log_file.clone());
    }

    Ok(config)
}
