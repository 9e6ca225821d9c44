//! landmarks — summary of a holistic-tracking landmark dump
//!
//! Loads `json/landmarks_output.json` from the working directory, prints the
//! number of frames and the landmark counts of the first frame, then one
//! status line saying whether the data is usable.
//!
//! Usage examples
//! --------------
//!
//! - Summarize the default dump
//!   $ landmarks
//!
//! - Summarize another file, with debug logging on stderr
//!   $ landmarks --input capture.json -v
//!
//! Every outcome is reported on stdout and the process exits with 0;
//! diagnostics go through `log` and are controlled by `RUST_LOG`.
mod args;

use crate::args::CliArgs;
use clap::Parser;
use landmarks_core::{read_landmarks_summary, read_landmarks_summary_from};
use log::{debug, warn};
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    let dataset = match args.input {
        Some(path) => {
            debug!("input override: {}", path.display());
            read_landmarks_summary_from(&path, &mut io::stdout().lock())
        }
        None => read_landmarks_summary(),
    };

    print_status(&mut io::stdout().lock(), dataset.is_some());

    Ok(())
}

/// Final status line. A closed or broken stdout is logged, not fatal.
fn print_status<W: Write>(out: &mut W, loaded: bool) {
    let line = if loaded {
        "Landmarks data is ready for further processing."
    } else {
        "Failed to load landmarks data."
    };
    if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
        warn!("could not write status line: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn status_lines() {
        let mut buf = Vec::new();
        print_status(&mut buf, true);
        print_status(&mut buf, false);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Landmarks data is ready for further processing.\nFailed to load landmarks data.\n"
        );
    }

    #[test]
    fn broken_stdout_is_not_fatal() {
        print_status(&mut BrokenPipe, true);
        print_status(&mut BrokenPipe, false);
    }
}
