// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Typed view of recorded interaction cassettes.
//!
//! Cassette files carry more detail than this tool ever prints (headers,
//! URLs, methods, status codes, a format version). Only the keys needed for
//! body inspection are modeled; everything else is ignored on load.

use serde::Deserialize;

/// One cassette file: an ordered list of recorded interactions.
#[derive(Debug, Clone, Deserialize)]
pub struct Cassette {
    pub interactions: Vec<Interaction>,
}

/// One recorded request/response pair.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    #[serde(default)]
    pub request: Option<RequestData>,
    pub response: ResponseData,
}

/// Recorded request. The body is optional; GET requests have none.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestData {
    #[serde(default)]
    pub body: Option<String>,
}

/// Recorded response. A body is always present, possibly empty.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseData {
    pub body: String,
}

impl Interaction {
    /// Request body, if one was recorded and is non-empty.
    pub fn request_body(&self) -> Option<&str> {
        self.request
            .as_ref()
            .and_then(|r| r.body.as_deref())
            .filter(|body| !body.is_empty())
    }
}
