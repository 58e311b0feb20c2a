//! Shared batch execution for the compress and decompress commands
//!
//! Collects input files, builds the processor from the configuration,
//! drives the batch with an optional progress bar and logs a summary.

use std::path::{Path, PathBuf};
use clap::ArgMatches;
use log::{error, info, warn};

use crate::compression::CodecRegistry;
use crate::config::PressConfig;
use crate::errors::{PressError, PressResult};
use crate::processor::{BatchReport, Operation, ProcessingResult, Processor, SelectionMode};
use crate::utils::file_utils::collect_files;
use crate::utils::format_utils::{format_megabytes, format_ratio};
use crate::utils::progress::ProgressTracker;

/// Inputs and settings for one batch run
pub struct BatchJob {
    /// Raw input arguments (files, directories, comma-separated lists)
    inputs: Vec<String>,
    /// Explicit output directory
    output_dir: Option<PathBuf>,
    /// Effective configuration
    config: PressConfig,
}

impl BatchJob {
    /// Build a job from CLI arguments
    pub fn new(args: &ArgMatches, config: &PressConfig) -> PressResult<Self> {
        let inputs: Vec<String> = args
            .get_many::<String>("input")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        if inputs.is_empty() {
            return Err(PressError::GenericError("Missing input files or directories".to_string()));
        }

        let output_dir = args.get_one::<String>("output").map(PathBuf::from);

        Ok(BatchJob {
            inputs,
            output_dir,
            config: config.clone(),
        })
    }

    /// Build the processor for this job
    pub fn processor(&self) -> Processor {
        Processor::new(
            CodecRegistry::with_levels(&self.config.levels),
            SelectionMode::parse(&self.config.algorithm),
            self.config.workers,
            self.config.verbose,
        )
    }

    /// Run the batch and log a summary
    ///
    /// Fails if no file could be processed or if any file failed.
    pub fn run(&self, operation: Operation) -> PressResult<BatchReport> {
        let files = collect_files(&self.inputs)?;
        if files.is_empty() {
            return Err(PressError::GenericError("No files found to process".to_string()));
        }

        let processor = self.processor();
        info!("{} {} files using {} ({} workers)",
              action_name(operation), files.len(), processor.mode(), processor.workers());

        let progress = if self.config.progress {
            ProgressTracker::new(files.len() as u64, action_name(operation))
        } else {
            ProgressTracker::hidden()
        };

        let mut report = processor.run_batch(&files, operation, self.output_dir.as_deref(), |result| {
            if let Some(e) = &result.error {
                warn!("Error processing {}: {}", result.input.display(), e);
            }
            progress.increment(1);
        });
        progress.finish();

        report.sort_by_input();
        log_summary(&report);

        let failures = report.failure_count();
        if report.success_count() == 0 {
            return Err(PressError::GenericError("No files were processed successfully".to_string()));
        }
        if failures > 0 {
            return Err(PressError::GenericError(format!("{} of {} files failed", failures, report.len())));
        }

        Ok(report)
    }
}

fn action_name(operation: Operation) -> &'static str {
    match operation {
        Operation::Compress => "Compressing",
        Operation::Decompress => "Decompressing",
    }
}

/// One summary line for a result
pub fn summary_line(result: &ProcessingResult) -> String {
    let name = display_name(&result.input);
    match &result.error {
        Some(e) => format!("{}: error - {}", name, e),
        None => format!("{}: {} ({} -> {})",
                        name,
                        format_ratio(result.ratio),
                        format_megabytes(result.original_size),
                        format_megabytes(result.compressed_size)),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn log_summary(report: &BatchReport) {
    for result in &report.results {
        if result.is_success() {
            info!("{}", summary_line(result));
        } else {
            error!("{}", summary_line(result));
        }
    }

    let succeeded = report.success_count();
    if succeeded > 0 {
        info!("Processed {} files successfully ({} -> {}, {})",
              succeeded,
              format_megabytes(report.total_original_size()),
              format_megabytes(report.total_compressed_size()),
              format_ratio(report.overall_ratio()));
    }
}
