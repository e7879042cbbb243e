// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::event::LogEvent;
use crate::observability::messages::layout::{EventFormatted, LayoutCompilationStarted, LayoutCompiled};
use crate::observability::messages::StructuredLog;
use crate::pattern::{FormatterChain, PatternParser};

/// A pattern compiled once and rendered for every event.
///
/// Layouts are immutable and `Send + Sync`; share one behind an `Arc` and
/// give each rendering call its own buffer.
///
/// # Example
/// ```
/// use pattern_equals::event::{Level, LogEvent};
/// use pattern_equals::layout::PatternLayout;
/// use pattern_equals::pattern::PatternParser;
///
/// let parser = PatternParser::with_builtins();
/// let layout = PatternLayout::new("console", "%-5level %equals{%logger}{com.foo.Bar}{REDACTED} - %msg", &parser);
///
/// let event = LogEvent::new("com.foo.Bar", Level::Info, "started");
/// assert_eq!(layout.format(&event), "INFO  REDACTED - started");
/// ```
#[derive(Debug, Clone)]
pub struct PatternLayout {
    id: String,
    chain: FormatterChain,
}

impl PatternLayout {
    pub fn new(id: impl Into<String>, pattern: &str, parser: &PatternParser) -> Self {
        let id = id.into();

        let start_msg = LayoutCompilationStarted {
            layout_id: &id,
            pattern,
        };
        let span = start_msg.span("layout_compilation");
        let _guard = span.enter();
        start_msg.log();

        let chain = parser.parse(pattern);

        LayoutCompiled {
            layout_id: &id,
            pattern,
            formatter_count: chain.len(),
        }
        .log();

        Self { id, chain }
    }

    /// Append the rendering of `event` to `buf`.
    pub fn format_into(&self, event: &LogEvent, buf: &mut String) {
        let start = buf.len();
        self.chain.format(event, buf);

        EventFormatted {
            layout_id: &self.id,
            output_size: buf.len() - start,
        }
        .log();
    }

    /// Render `event` into a fresh string.
    pub fn format(&self, event: &LogEvent) -> String {
        let mut buf = String::new();
        self.format_into(event, &mut buf);
        buf
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn pattern(&self) -> &str {
        self.chain.source()
    }

    pub fn chain(&self) -> &FormatterChain {
        &self.chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Level;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn layout(pattern: &str) -> PatternLayout {
        PatternLayout::new("test", pattern, &PatternParser::with_builtins())
    }

    #[test]
    fn test_literal_scenarios_through_layout() {
        struct TestCase {
            name: &'static str,
            pattern: &'static str,
            event: LogEvent,
            expected: &'static str,
        }

        let test_cases = vec![
            TestCase {
                name: "matching logger redacted",
                pattern: "%equals{%logger}{com.foo.Bar}{REDACTED}",
                event: LogEvent::new("com.foo.Bar", Level::Info, ""),
                expected: "REDACTED",
            },
            TestCase {
                name: "other logger passes through",
                pattern: "%equals{%logger}{com.foo.Bar}{REDACTED}",
                event: LogEvent::new("com.foo.Baz", Level::Info, ""),
                expected: "com.foo.Baz",
            },
            TestCase {
                name: "substitution rendered from event",
                pattern: "%equals{%logger}{com.foo.Bar}{%level}",
                event: LogEvent::new("com.foo.Bar", Level::Error, ""),
                expected: "ERROR",
            },
            TestCase {
                name: "wrong option count leaves specifier text",
                pattern: "%equals{%logger}{com.foo.Bar} tail",
                event: LogEvent::new("com.foo.Bar", Level::Error, ""),
                expected: "%equals{%logger}{com.foo.Bar} tail",
            },
            TestCase {
                name: "longer rendering does not match",
                pattern: "%equals{%logger}{Bar}{Bar!}",
                event: LogEvent::new("Barr", Level::Info, ""),
                expected: "Barr",
            },
        ];

        for case in test_cases {
            assert_eq!(layout(case.pattern).format(&case.event), case.expected, "case: {}", case.name);
        }
    }

    #[test]
    fn test_equals_inside_larger_pattern() {
        let layout = layout("%d %-5level [%equals{%thread}{}{-}] %logger{1} - %msg%n");
        let event = LogEvent::new("com.foo.Bar", Level::Warn, "careful");

        assert_eq!(layout.format(&event), "%d WARN  [-] Bar - careful\n");
        assert_eq!(
            layout.format(&event.clone().with_thread("main")),
            "%d WARN  [main] Bar - careful\n"
        );
    }

    #[test]
    fn test_padding_applies_to_equals_output() {
        let layout = layout("[%-8equals{%logger}{a}{b}]");
        assert_eq!(layout.format(&LogEvent::new("a", Level::Info, "")), "[b       ]");
        assert_eq!(layout.format(&LogEvent::new("abc", Level::Info, "")), "[abc     ]");
    }

    #[test]
    fn test_format_into_appends() {
        let layout = layout("%msg");
        let mut buf = String::from("> ");
        layout.format_into(&LogEvent::new("app", Level::Info, "hello"), &mut buf);
        assert_eq!(buf, "> hello");
    }

    #[test]
    fn test_accessors() {
        let layout = layout("%level %msg");
        assert_eq!(layout.id(), "test");
        assert_eq!(layout.pattern(), "%level %msg");
        assert_eq!(layout.chain().len(), 3);
    }

    #[test]
    fn test_layout_shared_across_threads() {
        let layout = Arc::new(layout("%equals{%X{user}}{}{anonymous}:%msg"));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let layout = Arc::clone(&layout);
                std::thread::spawn(move || {
                    let mut event = LogEvent::new("app", Level::Info, format!("m{}", i));
                    if i % 2 == 1 {
                        event = event.with_context("user", format!("u{}", i));
                    }
                    layout.format(&event)
                })
            })
            .collect();

        let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(outputs, vec!["anonymous:m0", "u1:m1", "anonymous:m2", "u3:m3"]);
    }

    #[test]
    fn test_compilation_runs_inside_layout_span() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(logs.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            PatternLayout::new("audit", "%level %zzz", &PatternParser::with_builtins());
        });

        let output = logs.contents();
        let in_span = |needle: &str| {
            output
                .lines()
                .any(|line| line.contains("layout{") && line.contains("audit") && line.contains(needle))
        };

        assert!(in_span("Compiling layout 'audit'"), "logs: {}", output);
        assert!(in_span("Created converter 'level'"), "logs: {}", output);
        assert!(in_span("zzz"), "logs: {}", output);
        assert!(in_span("Layout 'audit' compiled"), "logs: {}", output);
    }
}
