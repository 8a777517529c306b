// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Debugging viewer for recorded interaction cassettes.
//!
//! Reads the YAML cassette files written by the HTTP recorder during test
//! runs and pretty-prints the request/response bodies, unwrapping SSE
//! framing and re-indenting embedded JSON for human inspection.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use cassette_format::{load_sources, CassetteSource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod printer;
pub mod style;

pub use clap::Parser;
pub use printer::PrintOptions;
pub use style::{ColorChoice, Style};

/// Default log level when RUST_LOG is not set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl CliLogLevel {
    fn as_filter(self) -> &'static str {
        match self {
            CliLogLevel::Error => "error",
            CliLogLevel::Warn => "warn",
            CliLogLevel::Info => "info",
            CliLogLevel::Debug => "debug",
            CliLogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser)]
#[command(
    name = "cassette-view",
    about = "Pretty-print request/response bodies of recorded interaction cassettes",
    version
)]
pub struct Cli {
    /// Cassette files, or directories containing them
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Print response bodies only, skipping request bodies
    #[arg(long)]
    pub response_only: bool,

    /// Keep `event:` lines in stream bodies instead of dropping them
    #[arg(long)]
    pub keep_events: bool,

    /// When to use ANSI styling
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Default log level when RUST_LOG is not set
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: CliLogLevel,
}

/// Set up tracing output on standard error. RUST_LOG takes precedence over
/// the `--log-level` default.
pub fn init_logging(default_level: CliLogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_filter()));
    let layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}

/// Load and print every cassette named on the command line.
///
/// Missing paths, unreadable files and malformed cassettes propagate as
/// errors; invoking the tool without a path prints usage and exits 1 without
/// touching the filesystem.
pub fn run(cli: Cli) -> Result<ExitCode> {
    if cli.paths.is_empty() {
        println!("Usage: cassette-view <PATH>...");
        return Ok(ExitCode::from(1));
    }

    let sources = cli.paths.iter().map(|path| {
        if path.is_dir() {
            CassetteSource::Directory(path.clone())
        } else {
            CassetteSource::File(path.clone())
        }
    });
    let records = load_sources(sources)?;
    tracing::debug!(cassettes = records.len(), "loaded sources");

    let style = Style::from_choice(cli.color);
    let options = PrintOptions {
        include_request: !cli.response_only,
        recognize_event_prefix: !cli.keep_events,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let show_headings = records.len() > 1;
    for record in &records {
        if show_headings {
            writeln!(out, "{}", style.bold(&record.path.display().to_string()))?;
        }
        printer::print_cassette(&mut out, &record.cassette, style, options)?;
    }
    Ok(ExitCode::SUCCESS)
}
