//! Aggregated batch results

use super::batch::Operation;
use super::result::{compression_ratio, ProcessingResult};

/// All results of one batch run, in completion order
#[derive(Debug)]
pub struct BatchReport {
    /// Direction of the run
    pub operation: Operation,
    /// One entry per submitted file
    pub results: Vec<ProcessingResult>,
}

impl BatchReport {
    pub fn new(operation: Operation, results: Vec<ProcessingResult>) -> Self {
        BatchReport { operation, results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results without an error
    pub fn succeeded(&self) -> impl Iterator<Item = &ProcessingResult> {
        self.results.iter().filter(|r| r.is_success())
    }

    /// Results with an error
    pub fn failed(&self) -> impl Iterator<Item = &ProcessingResult> {
        self.results.iter().filter(|r| !r.is_success())
    }

    pub fn success_count(&self) -> usize {
        self.succeeded().count()
    }

    pub fn failure_count(&self) -> usize {
        self.failed().count()
    }

    /// Sum of uncompressed sizes over successful files
    pub fn total_original_size(&self) -> u64 {
        self.succeeded().map(|r| r.original_size).sum()
    }

    /// Sum of compressed sizes over successful files
    pub fn total_compressed_size(&self) -> u64 {
        self.succeeded().map(|r| r.compressed_size).sum()
    }

    /// Overall ratio across successful files
    pub fn overall_ratio(&self) -> f64 {
        compression_ratio(self.total_compressed_size(), self.total_original_size())
    }

    /// Sort results by input path, for stable display
    pub fn sort_by_input(&mut self) {
        self.results.sort_by(|a, b| a.input.cmp(&b.input));
    }
}
