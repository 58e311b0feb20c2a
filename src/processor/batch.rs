//! Bounded-concurrency batch execution
//!
//! A fixed pool of scoped worker threads pulls paths from a work channel.
//! Every per-file operation runs while holding an [`AdmissionGate`] slot,
//! and results flow back over a single channel to the calling thread, which
//! is the only place the aggregate is built.

use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::thread;
use crossbeam::channel::unbounded;
use log::{debug, error};

use crate::errors::PressError;
use super::gate::AdmissionGate;
use super::result::ProcessingResult;

/// Direction of a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Compress,
    Decompress,
}

/// Run `task` for every path with at most `workers` in flight
///
/// Returns exactly one result per path, in completion order. A panicking
/// task is turned into an error result for that file. `on_complete` is
/// called on the calling thread as each result arrives.
pub fn run_batch<F, C>(paths: &[PathBuf], workers: usize, task: F, mut on_complete: C) -> Vec<ProcessingResult>
where
    F: Fn(&Path) -> ProcessingResult + Sync,
    C: FnMut(&ProcessingResult),
{
    let mut results = Vec::with_capacity(paths.len());
    if paths.is_empty() {
        return results;
    }

    let gate = AdmissionGate::new(workers);
    let pool_size = gate.capacity().min(paths.len());
    debug!("Processing {} files with {} workers", paths.len(), pool_size);

    let (job_tx, job_rx) = unbounded::<&Path>();
    for path in paths {
        if job_tx.send(path.as_path()).is_err() {
            break;
        }
    }
    drop(job_tx);

    let (result_tx, result_rx) = unbounded::<ProcessingResult>();

    thread::scope(|scope| {
        for worker_id in 0..pool_size {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();
            let gate = &gate;
            let task = &task;

            scope.spawn(move || {
                while let Ok(path) = job_rx.recv() {
                    let result = {
                        let _permit = gate.acquire();
                        run_guarded(task, path)
                    };
                    if result_tx.send(result).is_err() {
                        break;
                    }
                }
                debug!("Worker {} finished", worker_id);
            });
        }
        drop(result_tx);

        for result in result_rx.iter() {
            on_complete(&result);
            results.push(result);
        }
    });

    results
}

// Run one task, mapping a panic to an error result
fn run_guarded<F>(task: &F, path: &Path) -> ProcessingResult
where
    F: Fn(&Path) -> ProcessingResult + Sync,
{
    match panic::catch_unwind(AssertUnwindSafe(|| task(path))) {
        Ok(result) => result,
        Err(_) => {
            error!("Processing {} panicked", path.display());
            ProcessingResult::failed(path, PressError::GenericError(
                format!("processing {} panicked", path.display())))
        }
    }
}
