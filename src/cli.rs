//! Command-line interface definition

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the clap command for the `filepress` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("filepress")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Batch-compress or restore files with automatic algorithm selection")
        .arg(
            Arg::new("input")
                .help("Input files or directories (comma-separated lists accepted)")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("decompress")
                .short('d')
                .long("decompress")
                .help("Restore compressed files instead of compressing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output directory (default: <input-dir>_<ext>)")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .help("Algorithm (auto, gzip, brotli, lz4, zlib)")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("concurrency")
                .short('c')
                .long("concurrency")
                .help("Number of workers (default: number of CPUs)")
                .value_name("N")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("progress")
                .long("progress")
                .help("Show progress bar")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log records to this file")
                .value_name("FILE")
                .required(false),
        )
}
