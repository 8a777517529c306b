// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use std::process::ExitCode;

use cassette_view::{init_logging, run, Cli, Parser};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("cassette-view: {err:#}");
            ExitCode::FAILURE
        }
    }
}
