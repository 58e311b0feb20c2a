//! Batch file processing
//!
//! This module turns files into compressed (or restored) files using the
//! codec registry, and runs lists of files through a bounded worker pool.

mod batch;
mod file_processor;
mod gate;
mod paths;
mod report;
mod result;
#[cfg(test)]
mod tests;

pub use batch::{run_batch, Operation};
pub use file_processor::{Processor, SelectionMode};
pub use gate::{AdmissionGate, GatePermit};
pub use paths::{compressed_output_path, compressed_path_in, decompressed_output_path,
                decompressed_path_in, OutputTarget};
pub use report::BatchReport;
pub use result::{compression_ratio, ProcessingResult};
