pub mod errors;
pub mod compression;
pub mod detector;
pub mod processor;
pub mod config;
pub mod utils;
pub mod commands;
pub mod cli;

pub use errors::{PressError, PressResult};
pub use compression::{Codec, CodecRegistry};
pub use detector::Detector;
pub use processor::{BatchReport, Operation, ProcessingResult, Processor, SelectionMode};
pub use config::PressConfig;
