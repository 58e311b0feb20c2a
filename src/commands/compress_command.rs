//! Batch compression command
//!
//! This module implements the command that compresses every input file
//! with an automatically selected or forced codec.

use clap::ArgMatches;
use log::{error, info};

use crate::commands::batch_job::BatchJob;
use crate::commands::command_traits::Command;
use crate::compression::CodecRegistry;
use crate::config::PressConfig;
use crate::errors::{PressError, PressResult};
use crate::processor::{Operation, SelectionMode};

/// Command for compressing files
pub struct CompressCommand {
    /// Inputs and settings
    job: BatchJob,
}

impl CompressCommand {
    /// Create a new compress command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Effective configuration
    ///
    /// # Returns
    /// A new CompressCommand instance or an error
    pub fn new(args: &ArgMatches, config: &PressConfig) -> PressResult<Self> {
        // Reject an unknown forced algorithm before any file is touched
        if let SelectionMode::Forced(name) = SelectionMode::parse(&config.algorithm) {
            let registry = CodecRegistry::with_levels(&config.levels);
            if registry.get(&name).is_none() {
                error!("Available algorithms: auto, {}", registry.names().join(", "));
                return Err(PressError::UnknownAlgorithm(name));
            }
        }

        Ok(CompressCommand {
            job: BatchJob::new(args, config)?,
        })
    }
}

impl Command for CompressCommand {
    fn execute(&self) -> PressResult<()> {
        let report = self.job.run(Operation::Compress)?;
        info!("Compression completed for {} files", report.success_count());
        Ok(())
    }
}
