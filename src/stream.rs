// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Render a stream of JSON-lines events through a set of layouts.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::event::LogEvent;
use crate::layout::PatternLayout;
use crate::observability::messages::layout::EventDecodeFailed;
use crate::observability::messages::StructuredLog;

/// Totals for one pass over an event stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    pub rendered: usize,
    pub skipped: usize,
}

/// Read one JSON event per line and write every layout's rendering of it.
///
/// Blank lines are ignored and lines that are not valid events are logged
/// and skipped. Output lines are prefixed with the layout ID when more than
/// one layout is given, and always end with a newline.
pub async fn render_event_stream<R, W>(
    reader: R,
    layouts: &[Arc<PatternLayout>],
    out: &mut W,
) -> std::io::Result<StreamSummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut summary = StreamSummary::default();
    let mut line_number = 0;
    let mut buf = String::new();

    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        if line.trim().is_empty() {
            continue;
        }

        let event: LogEvent = match serde_json::from_str(&line) {
            Ok(event) => event,
            Err(e) => {
                EventDecodeFailed {
                    line_number,
                    error: &e,
                }
                .log();
                summary.skipped += 1;
                continue;
            }
        };

        for layout in layouts {
            buf.clear();
            if layouts.len() > 1 {
                buf.push_str(layout.id());
                buf.push_str(": ");
            }
            layout.format_into(&event, &mut buf);
            if !buf.ends_with('\n') {
                buf.push('\n');
            }
            out.write_all(buf.as_bytes()).await?;
        }
        summary.rendered += 1;
    }

    out.flush().await?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternParser;

    fn layouts(patterns: &[(&str, &str)]) -> Vec<Arc<PatternLayout>> {
        let parser = PatternParser::with_builtins();
        patterns
            .iter()
            .map(|(id, pattern)| Arc::new(PatternLayout::new(*id, pattern, &parser)))
            .collect()
    }

    #[tokio::test]
    async fn test_single_layout_stream() {
        let input = concat!(
            r#"{"logger":"com.foo.Bar","level":"INFO","message":"a"}"#,
            "\n\n",
            r#"{"logger":"com.foo.Baz","level":"WARN","message":"b"}"#,
            "\n",
        );
        let layouts = layouts(&[("console", "%equals{%logger}{com.foo.Bar}{REDACTED} %msg")]);
        let mut out = Vec::new();

        let summary = render_event_stream(input.as_bytes(), &layouts, &mut out).await.unwrap();

        assert_eq!(summary, StreamSummary { rendered: 2, skipped: 0 });
        assert_eq!(String::from_utf8(out).unwrap(), "REDACTED a\ncom.foo.Baz b\n");
    }

    #[tokio::test]
    async fn test_multiple_layouts_are_prefixed() {
        let input = "{\"logger\":\"x\",\"level\":\"error\",\"message\":\"m\"}\n";
        let layouts = layouts(&[("lvl", "%level%n"), ("msg", "%msg")]);
        let mut out = Vec::new();

        render_event_stream(input.as_bytes(), &layouts, &mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "lvl: ERROR\nmsg: m\n");
    }

    #[tokio::test]
    async fn test_bad_lines_are_skipped() {
        let input = "not json\n{\"message\":\"ok\"}\n{\"level\":\"LOUD\"}\n";
        let layouts = layouts(&[("console", "%msg")]);
        let mut out = Vec::new();

        let summary = render_event_stream(input.as_bytes(), &layouts, &mut out).await.unwrap();

        assert_eq!(summary, StreamSummary { rendered: 1, skipped: 2 });
        assert_eq!(String::from_utf8(out).unwrap(), "ok\n");
    }
}
