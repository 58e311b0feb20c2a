//! Batch decompression command

use clap::ArgMatches;
use log::info;

use crate::commands::batch_job::BatchJob;
use crate::commands::command_traits::Command;
use crate::config::PressConfig;
use crate::errors::PressResult;
use crate::processor::Operation;

/// Command for restoring compressed files
///
/// The codec is chosen from each file's extension; the algorithm setting
/// is ignored.
pub struct DecompressCommand {
    job: BatchJob,
}

impl DecompressCommand {
    pub fn new(args: &ArgMatches, config: &PressConfig) -> PressResult<Self> {
        Ok(DecompressCommand {
            job: BatchJob::new(args, config)?,
        })
    }
}

impl Command for DecompressCommand {
    fn execute(&self) -> PressResult<()> {
        let report = self.job.run(Operation::Decompress)?;
        info!("Decompression completed for {} files", report.success_count());
        Ok(())
    }
}
