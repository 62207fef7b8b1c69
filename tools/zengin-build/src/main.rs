//! CLI tool that builds a Zengin transfer file from a JSON batch.
//!
//! # Usage
//!
//! ```bash
//! # Build the Shift_JIS file
//! zengin-build --input batch.json --output transfer.txt
//!
//! # Override the transfer date from the batch
//! zengin-build -i batch.json --date 0725 -o transfer.txt
//!
//! # Inspect the records as UTF-8, one per line
//! cat batch.json | zengin-build --emit lines
//! ```

use std::fs::File;
use std::io::{Read, Write, stdin, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;
use zengin::prelude::*;

/// Build a Zengin (全銀) transfer file from a JSON batch.
///
/// Reads the batch from input (file or stdin) and writes the encoded file
/// to output (file or stdout).
#[derive(Parser, Debug)]
#[command(name = "zengin-build")]
#[command(version, about)]
struct Args {
    /// Batch file path. If not specified, reads from stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file path. If not specified, writes to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Transfer date (MMDD). Overrides the date in the batch.
    #[arg(long)]
    date: Option<String>,

    /// Output representation.
    #[arg(long, value_enum, default_value_t = EmitArg::ShiftJis)]
    emit: EmitArg,
}

/// What to write to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EmitArg {
    /// Shift_JIS bytes, records separated by CR LF.
    ShiftJis,
    /// UTF-8 records, one per line, for inspection.
    Lines,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Open input source
    let input: Box<dyn Read> = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open batch file: {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(stdin().lock()),
    };

    let mut batch = Batch::from_reader(input).context("Failed to read batch")?;
    if let Some(date) = args.date {
        debug!(%date, "overriding batch date");
        batch.date = date;
    }

    let (payload, transfers) = render(&batch, args.emit)?;

    // Open output destination
    let mut output: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(stdout().lock()),
    };
    output.write_all(&payload).context("Failed to write output")?;
    output.flush().context("Failed to flush output")?;

    // Report result to stderr (so it doesn't interfere with stdout output)
    eprintln!("Built {transfers} transfer record(s)");

    Ok(())
}

/// Assembles the document and renders it in the requested representation.
///
/// Returns the bytes to write and the number of transfers.
fn render(batch: &Batch, emit: EmitArg) -> Result<(Vec<u8>, usize)> {
    let document = batch.assemble().context("Failed to build zengin document")?;
    let transfers = document.transfer_count();

    let payload = match emit {
        EmitArg::ShiftJis => document.to_bytes().context("Failed to encode Shift_JIS")?,
        EmitArg::Lines => {
            let mut text = document.lines().join("\n");
            text.push('\n');
            text.into_bytes()
        }
    };
    Ok((payload, transfers))
}
