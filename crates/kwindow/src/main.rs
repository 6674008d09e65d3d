//! Find the longest run of a string with at most `k` distinct characters.
//!
//! # Examples
//!
//! ```sh
//! # Built-in example ("aaabaabaaa", k = 2)
//! kwindow
//!
//! # Literal input with a custom bound
//! kwindow -k 3 --text abaccc
//!
//! # Pipe content from stdin, textbook width, JSON output
//! cat input.txt | kwindow --stdin --inclusive --json
//!
//! # Show scan diagnostics on stderr
//! kwindow --text eceba -vv
//! ```

use std::path::PathBuf;
use std::process;

use clap::Parser;
use kwindow::{InputSource, ScanConfig, ScanReport, WidthPolicy, logging};
use tracing::info;

/// Find the longest run of a string with at most K distinct characters.
#[derive(Parser)]
#[command(name = "kwindow")]
struct Cli {
    // ── Scan parameters ────────────────────────────────────────
    /// Maximum distinct characters per window (values <= 0 yield 0)
    #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
    k: i64,

    /// Count the character at the window's right boundary in its width
    #[arg(long)]
    inclusive: bool,

    // ── Input ──────────────────────────────────────────────────
    /// Literal input text
    #[arg(long)]
    text: Option<String>,

    /// Read input from stdin
    #[arg(long)]
    stdin: bool,

    /// Read input from a file
    #[arg(long)]
    file: Option<PathBuf>,

    // ── Output ─────────────────────────────────────────────────
    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable logging
    #[arg(short, long)]
    quiet: bool,
}

fn run(cli: Cli) -> Result<String, String> {
    let source = InputSource::from_flags(cli.text, cli.stdin, cli.file)?;
    let text = source.load()?;

    let width = if cli.inclusive {
        WidthPolicy::Inclusive
    } else {
        WidthPolicy::Exclusive
    };
    let config = ScanConfig::new(cli.k).with_width(width);

    info!(
        source = %source.describe(),
        k = config.k,
        width = width.label(),
        "scanning input"
    );

    let report = ScanReport::build(source.describe(), &text, &config);
    if cli.json {
        report.to_json()
    } else {
        Ok(report.to_text())
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(logging::level_for(cli.verbose, cli.quiet));

    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
