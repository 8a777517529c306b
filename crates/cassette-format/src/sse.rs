// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Line decoding for server-sent-event bodies.
//!
//! Streaming responses are recorded verbatim as one body string made of
//! `event:`/`data:` prefixed lines. The decoder strips the framing so each
//! payload chunk can be handled on its own.

const DATA_PREFIX: &str = "data:";
const EVENT_PREFIX: &str = "event:";

/// Whether `body` looks like a recorded SSE stream rather than a plain payload.
///
/// A leading `event:` line only counts when `recognize_event_prefix` is set;
/// otherwise such bodies are treated as plain text.
pub fn is_event_stream(body: &str, recognize_event_prefix: bool) -> bool {
    body.starts_with(DATA_PREFIX) || (recognize_event_prefix && body.starts_with(EVENT_PREFIX))
}

/// Iterate the payload lines of a stream body.
///
/// `event:` lines are dropped entirely when `recognize_event_prefix` is set
/// and passed through untouched otherwise. The `data:` prefix is stripped,
/// surrounding whitespace trimmed, and empty lines skipped.
pub fn data_lines(body: &str, recognize_event_prefix: bool) -> impl Iterator<Item = &str> {
    body.split('\n').filter_map(move |line| {
        if recognize_event_prefix && line.starts_with(EVENT_PREFIX) {
            return None;
        }
        let line = line.strip_prefix(DATA_PREFIX).unwrap_or(line).trim();
        if line.is_empty() {
            None
        } else {
            Some(line)
        }
    })
}
