// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use std::io::IsTerminal;

/// When to emit ANSI styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Style only when standard output is a terminal
    #[default]
    Auto,
    /// Always style
    Always,
    /// Never style
    Never,
}

/// Capability-scoped styling for the output writer.
///
/// Keeps the escape-sequence encoding out of the printer, so a no-color mode
/// is just a disabled `Style`.
#[derive(Clone, Copy, Debug)]
pub struct Style {
    enabled: bool,
}

impl Style {
    pub fn from_choice(choice: ColorChoice) -> Self {
        let enabled = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stdout().is_terminal(),
        };
        Self { enabled }
    }

    /// Disabled style, used in tests.
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.enabled {
            format!("\x1b[1m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}
