//! File processor
//!
//! Compresses and decompresses single files with codecs from a registry and
//! drives batches of them through the bounded worker pool.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, info, warn};

use crate::compression::{Codec, CodecRegistry};
use crate::detector::{Detector, DEFAULT_CODEC};
use crate::errors::{PressError, PressResult};
use super::batch::{self, Operation};
use super::paths::{self, OutputTarget};
use super::report::BatchReport;
use super::result::ProcessingResult;

/// How the compression codec is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMode {
    /// The detector picks a codec per file
    Auto,
    /// Always use the named registry entry
    Forced(String),
}

impl SelectionMode {
    /// Parse an algorithm selector: `"auto"` or a registry name
    pub fn parse(selector: &str) -> Self {
        let selector = selector.trim().to_lowercase();
        if selector == "auto" {
            SelectionMode::Auto
        } else {
            SelectionMode::Forced(selector)
        }
    }
}

impl From<&str> for SelectionMode {
    fn from(selector: &str) -> Self {
        SelectionMode::parse(selector)
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Auto => write!(f, "auto"),
            SelectionMode::Forced(name) => write!(f, "{}", name),
        }
    }
}

/// Compresses and decompresses files using a codec registry
pub struct Processor {
    /// Available codecs
    registry: CodecRegistry,
    /// Codec selection mode
    mode: SelectionMode,
    /// Maximum number of files in flight during a batch
    workers: usize,
    /// Passed through to front-ends for their own output
    verbose: bool,
}

impl Processor {
    /// Create a new processor; a worker count of 0 is treated as 1
    pub fn new(registry: CodecRegistry, mode: SelectionMode, workers: usize, verbose: bool) -> Self {
        Processor {
            registry,
            mode,
            workers: workers.max(1),
            verbose,
        }
    }

    pub fn registry(&self) -> &CodecRegistry {
        &self.registry
    }

    pub fn mode(&self) -> &SelectionMode {
        &self.mode
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Whether the file already carries a registered codec extension
    pub fn is_compressed(&self, path: &Path) -> bool {
        self.registry.is_compressed(path)
    }

    /// Compress one file
    ///
    /// Without an explicit `output` the file is written to the sibling
    /// directory `<parent>_<ext>/<name><ext>`, created if missing.
    pub fn process_one(&self, input: &Path, output: Option<&Path>) -> ProcessingResult {
        let target = match output {
            Some(path) => OutputTarget::File(path),
            None => OutputTarget::Derived,
        };
        self.compress_to(input, target)
    }

    /// Decompress one file next to itself, stripping the codec extension
    pub fn decompress_one(&self, input: &Path) -> ProcessingResult {
        self.decompress_to(input, OutputTarget::Derived)
    }

    /// Decompress one file to an explicit path
    pub fn decompress_one_to(&self, input: &Path, output: &Path) -> ProcessingResult {
        self.decompress_to(input, OutputTarget::File(output))
    }

    /// Compress a file to the given target
    pub fn compress_to(&self, input: &Path, target: OutputTarget<'_>) -> ProcessingResult {
        match self.try_compress(input, target) {
            Ok(result) => {
                info!("Compressed {} with {}: {} -> {} bytes ({:.1}%)",
                      input.display(), result.codec.unwrap_or("?"),
                      result.original_size, result.compressed_size, result.ratio);
                result
            }
            Err(e) => {
                warn!("Failed to compress {}: {}", input.display(), e);
                ProcessingResult::failed(input, e)
            }
        }
    }

    /// Decompress a file to the given target
    pub fn decompress_to(&self, input: &Path, target: OutputTarget<'_>) -> ProcessingResult {
        match self.try_decompress(input, target) {
            Ok(result) => {
                info!("Decompressed {} with {}: {} -> {} bytes",
                      input.display(), result.codec.unwrap_or("?"),
                      result.compressed_size, result.original_size);
                result
            }
            Err(e) => {
                warn!("Failed to decompress {}: {}", input.display(), e);
                ProcessingResult::failed(input, e)
            }
        }
    }

    /// Process every path with at most `workers` files in flight
    ///
    /// With `output_dir` set, outputs go into that directory instead of the
    /// derived locations. One file's failure never stops the others.
    pub fn run_batch<C>(&self, paths: &[PathBuf], operation: Operation,
                        output_dir: Option<&Path>, on_complete: C) -> BatchReport
    where
        C: FnMut(&ProcessingResult),
    {
        let target = match output_dir {
            Some(dir) => OutputTarget::Directory(dir),
            None => OutputTarget::Derived,
        };

        let results = batch::run_batch(paths, self.workers, |path| match operation {
            Operation::Compress => self.compress_to(path, target),
            Operation::Decompress => self.decompress_to(path, target),
        }, on_complete);

        BatchReport::new(operation, results)
    }

    fn try_compress(&self, input: &Path, target: OutputTarget<'_>) -> PressResult<ProcessingResult> {
        if self.is_compressed(input) {
            return Err(PressError::AlreadyCompressed(input.to_path_buf()));
        }

        // Forced names are checked before touching the file
        let forced = match &self.mode {
            SelectionMode::Forced(name) => Some(
                self.registry.get(name).ok_or_else(|| PressError::UnknownAlgorithm(name.clone()))?),
            SelectionMode::Auto => None,
        };

        let data = fs::read(input)?;

        let codec = match forced {
            Some(codec) => codec,
            None => self.detect_codec(input)?,
        };

        let compressed = codec.compress(&data)?;

        let output = match target {
            OutputTarget::File(path) => path.to_path_buf(),
            OutputTarget::Directory(dir) => paths::compressed_path_in(dir, input, codec.extension()),
            OutputTarget::Derived => paths::compressed_output_path(input, codec.extension()),
        };
        if !matches!(target, OutputTarget::File(_)) {
            if let Some(dir) = output.parent() {
                fs::create_dir_all(dir)?;
            }
        }

        fs::write(&output, &compressed)?;

        Ok(ProcessingResult::success(input, output, codec.name(),
                                     data.len() as u64, compressed.len() as u64))
    }

    fn try_decompress(&self, input: &Path, target: OutputTarget<'_>) -> PressResult<ProcessingResult> {
        let codec = self
            .registry
            .match_path(input)
            .ok_or_else(|| PressError::UnknownFormat(input.to_path_buf()))?;

        let data = fs::read(input)?;
        let decompressed = codec.decompress(&data)?;

        let output = match target {
            OutputTarget::File(path) => path.to_path_buf(),
            OutputTarget::Directory(dir) => {
                fs::create_dir_all(dir)?;
                paths::decompressed_path_in(dir, input)
            }
            OutputTarget::Derived => paths::decompressed_output_path(input),
        };

        fs::write(&output, &decompressed)?;

        Ok(ProcessingResult::success(input, output, codec.name(),
                                     decompressed.len() as u64, data.len() as u64))
    }

    // Detector choice, falling back to the default codec
    fn detect_codec(&self, input: &Path) -> PressResult<&dyn Codec> {
        if let Some(codec) = Detector::new(&self.registry).detect(input) {
            return Ok(codec);
        }

        debug!("No codec detected for {}, using {}", input.display(), DEFAULT_CODEC);
        self.registry
            .get(DEFAULT_CODEC)
            .ok_or_else(|| PressError::UnknownAlgorithm(DEFAULT_CODEC.to_string()))
    }
}
