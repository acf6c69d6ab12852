//! Decode a binary data file and re-encode it into a second file.
//!
//! Run: cargo run -p datacopy -- <input_file> <output_file>

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use bytebound::{Passthrough, ReadMode, copy_file};
use clap::Parser;
use log::{LevelFilter, info};

/// Copy a binary data file through the bounded byte stream layer.
///
/// The input is read with a bound equal to its size, decoded, and encoded
/// again into the output. A well-formed input yields a byte-identical copy.
#[derive(Debug, Parser)]
#[command(name = "datacopy", version, about)]
struct Cli {
    /// Binary file to read.
    input: PathBuf,

    /// Binary file to create or overwrite.
    output: PathBuf,

    /// Read until the input is exhausted instead of bounding reads by its size.
    #[arg(long)]
    unbounded: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn read_mode(&self) -> ReadMode {
        if self.unbounded {
            ReadMode::Unbounded
        } else {
            ReadMode::Bounded
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let report = copy_file(
        &Passthrough::new(),
        &cli.input,
        &cli.output,
        cli.read_mode(),
    )
    .with_context(|| {
        format!(
            "copying {} to {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;
    info!(
        "{} bytes read, {} bytes written",
        report.bytes_read, report.bytes_written
    );
    Ok(())
}

/// Process status for `result`, printing the error chain to `stderr` on failure.
fn exit_status(result: anyhow::Result<()>, stderr: &mut impl Write) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            // Nothing left to report to if stderr itself is gone.
            let _ = writeln!(stderr, "Error:\n{err:?}");
            1
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    ExitCode::from(exit_status(run(&cli), &mut io::stderr().lock()))
}
