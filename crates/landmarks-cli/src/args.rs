use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the landmarks summary tool
#[derive(Debug, Parser)]
#[command(
    name = "landmarks",
    version,
    about = "Summarize a per-frame pose/hand/face landmark JSON dump"
)]
pub struct CliArgs {
    /// Path to the landmark dump (default: json/landmarks_output.json)
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Log debug details to stderr (RUST_LOG still takes precedence)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
