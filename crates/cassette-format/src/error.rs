// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use thiserror::Error;

/// Convenient result alias for cassette operations.
pub type Result<T> = std::result::Result<T, CassetteError>;

/// Errors that can occur while loading cassette files.
#[derive(Debug, Error)]
pub enum CassetteError {
    /// Underlying IO error while accessing cassette files.
    #[error("Cassette IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error, including missing required keys.
    #[error("Cassette parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Cassette source had an unexpected shape.
    #[error("Cassette validation error: {0}")]
    Validation(String),
}
