// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Cassette parsing and body decoding shared by the viewer CLI.

mod error;
mod loader;
mod model;
pub mod sse;

pub use error::{CassetteError, Result};
pub use loader::{load_sources, CassetteRecord, CassetteSource};
pub use model::{Cassette, Interaction, RequestData, ResponseData};
