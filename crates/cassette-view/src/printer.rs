// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Body formatting for recorded interactions.

use std::io::{self, Write};

use cassette_format::{sse, Cassette};

use crate::style::Style;

/// Which bodies to print and how stream framing is handled.
#[derive(Clone, Copy, Debug)]
pub struct PrintOptions {
    /// Print request bodies in addition to response bodies.
    pub include_request: bool,
    /// Treat `event:` lines as SSE framing and drop them.
    pub recognize_event_prefix: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            include_request: true,
            recognize_event_prefix: true,
        }
    }
}

/// Print every body of `cassette` to `out`, in interaction order.
pub fn print_cassette<W: Write>(
    out: &mut W,
    cassette: &Cassette,
    style: Style,
    options: PrintOptions,
) -> io::Result<()> {
    for interaction in &cassette.interactions {
        if options.include_request {
            if let Some(body) = interaction.request_body() {
                writeln!(out, "{}", style.bold("Request:"))?;
                print_body(out, body, options)?;
            }
        }
        writeln!(out, "{}", style.bold("Response:"))?;
        print_body(out, &interaction.response.body, options)?;
    }
    Ok(())
}

fn print_body<W: Write>(out: &mut W, body: &str, options: PrintOptions) -> io::Result<()> {
    if sse::is_event_stream(body, options.recognize_event_prefix) {
        for line in sse::data_lines(body, options.recognize_event_prefix) {
            print_chunk(out, line)?;
        }
    } else {
        print_chunk(out, body)?;
    }
    Ok(())
}

/// JSON payloads are re-printed with two-space indentation and their key
/// order preserved; anything else goes out verbatim.
fn print_chunk<W: Write>(out: &mut W, chunk: &str) -> io::Result<()> {
    match serde_json::from_str::<serde_json::Value>(chunk) {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(pretty) => writeln!(out, "{pretty}"),
            Err(_) => writeln!(out, "{chunk}"),
        },
        Err(_) => writeln!(out, "{chunk}"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(yaml: &str, options: PrintOptions) -> String {
        let cassette: Cassette = serde_yaml_from(yaml);
        let mut out = Vec::new();
        print_cassette(&mut out, &cassette, Style::plain(), options).expect("print");
        String::from_utf8(out).expect("utf8 output")
    }

    fn serde_yaml_from(yaml: &str) -> Cassette {
        serde_yaml::from_str(yaml).expect("parse cassette")
    }

    #[test]
    fn empty_cassette_prints_nothing() {
        assert_eq!(render("interactions: []\n", PrintOptions::default()), "");
    }

    #[test]
    fn json_bodies_round_trip_with_two_space_indent() {
        let yaml = r#"
interactions:
  - request:
      body: '{"b": 1, "a": [2, 3]}'
    response:
      body: '{"ok": true}'
"#;
        let output = render(yaml, PrintOptions::default());
        assert_eq!(
            output,
            "Request:\n{\n  \"b\": 1,\n  \"a\": [\n    2,\n    3\n  ]\n}\nResponse:\n{\n  \"ok\": true\n}\n"
        );
    }

    #[test]
    fn non_json_body_prints_verbatim() {
        let yaml = "interactions:\n  - response:\n      body: \"plain text, not json\"\n";
        let output = render(yaml, PrintOptions::default());
        assert_eq!(output, "Response:\nplain text, not json\n");
    }

    #[test]
    fn stream_body_prints_each_payload_separately() {
        let yaml = concat!(
            "interactions:\n",
            "  - response:\n",
            "      body: \"data: {\\\"a\\\":1}\\ndata: {\\\"b\\\":2}\\n\"\n",
        );
        let output = render(yaml, PrintOptions::default());
        assert_eq!(
            output,
            "Response:\n{\n  \"a\": 1\n}\n{\n  \"b\": 2\n}\n"
        );
    }

    #[test]
    fn event_lines_are_suppressed_by_default() {
        let yaml = concat!(
            "interactions:\n",
            "  - response:\n",
            "      body: \"event: ping\\ndata: {\\\"x\\\":1}\\n\"\n",
        );
        let output = render(yaml, PrintOptions::default());
        assert_eq!(output, "Response:\n{\n  \"x\": 1\n}\n");
    }

    #[test]
    fn event_lines_print_raw_when_kept() {
        let yaml = concat!(
            "interactions:\n",
            "  - response:\n",
            "      body: \"data: {\\\"x\\\":1}\\nevent: ping\\ndata: [DONE]\\n\"\n",
        );
        let options = PrintOptions {
            recognize_event_prefix: false,
            ..PrintOptions::default()
        };
        let output = render(yaml, options);
        assert_eq!(output, "Response:\n{\n  \"x\": 1\n}\nevent: ping\n[DONE]\n");
    }

    #[test]
    fn response_only_omits_request_bodies() {
        let yaml = r#"
interactions:
  - request:
      body: '{"prompt": "hi"}'
    response:
      body: '{"done": true}'
"#;
        let options = PrintOptions {
            include_request: false,
            ..PrintOptions::default()
        };
        let output = render(yaml, options);
        assert_eq!(output, "Response:\n{\n  \"done\": true\n}\n");
    }

    #[test]
    fn interaction_without_request_body_prints_response_only() {
        let yaml = "interactions:\n  - response:\n      body: ok\n";
        let output = render(yaml, PrintOptions::default());
        assert_eq!(output, "Response:\nok\n");
    }
}
