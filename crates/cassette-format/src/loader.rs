// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use crate::{model::Cassette, CassetteError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Source of cassettes to load.
#[derive(Debug, Clone)]
pub enum CassetteSource {
    File(PathBuf),
    Directory(PathBuf),
}

/// Loaded cassette along with its origin path.
#[derive(Debug, Clone)]
pub struct CassetteRecord {
    pub cassette: Cassette,
    pub path: PathBuf,
}

/// Load every cassette named by `sources`, preserving order.
///
/// Directory sources expand to their `*.yaml`/`*.yml` children in sorted
/// order. A directory without any cassette files is a validation error.
pub fn load_sources<S>(sources: S) -> Result<Vec<CassetteRecord>>
where
    S: IntoIterator<Item = CassetteSource>,
{
    let mut records = Vec::new();
    for source in sources {
        match source {
            CassetteSource::File(path) => {
                let cassette = Cassette::from_file(&path)?;
                records.push(CassetteRecord { cassette, path });
            }
            CassetteSource::Directory(dir) => load_directory(&dir, &mut records)?,
        }
    }
    Ok(records)
}

fn load_directory(dir: &Path, records: &mut Vec<CassetteRecord>) -> Result<()> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if matches!(ext, "yaml" | "yml") {
                paths.push(path);
            }
        }
    }
    if paths.is_empty() {
        return Err(CassetteError::Validation(format!(
            "Directory {:?} contains no cassette files",
            dir
        )));
    }
    paths.sort();
    for path in paths {
        let cassette = Cassette::from_file(&path)?;
        records.push(CassetteRecord { cassette, path });
    }
    Ok(())
}

impl Cassette {
    /// Load a cassette directly from a file path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let cassette: Cassette = serde_yaml::from_str(&contents)?;
        tracing::debug!(
            path = ?path.as_ref(),
            interactions = cassette.interactions.len(),
            "loaded cassette"
        );
        Ok(cassette)
    }
}
