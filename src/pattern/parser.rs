// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Format string parser.
//!
//! Splits a pattern such as `%-5level [%thread] %logger{1} - %msg%n` into
//! literal text and conversion specifiers, resolves each specifier through
//! the [`ConverterRegistry`], and returns the resulting [`FormatterChain`].
//!
//! # Grammar
//!
//! ```text
//! pattern    := (literal | "%%" | specifier)*
//! specifier  := "%" ["-"] [digits] ["." ["-"] digits] name ("{" option "}")*
//! name       := ASCII letters, longest registered prefix wins
//! option     := any text, braces balanced
//! ```
//!
//! Parsing never fails. A specifier whose converter is unknown, rejects its
//! options, or carries a width above [`MAX_FIELD_WIDTH`] is logged and kept
//! in the output as the literal text it was written as.

use std::sync::Arc;

use crate::converters::{ConverterRegistry, LiteralConverter};
use crate::errors::ConverterError;
use crate::observability::messages::converter::{
    ConverterCreated, ConverterCreationFailed, UnrecognizedConversionSpecifier,
};
use crate::observability::messages::StructuredLog;
use crate::pattern::{FormatterChain, FormattingInfo, PatternFormatter};
use crate::traits::{PatternCompiler, PatternConverter};

/// Character that introduces a conversion specifier.
pub const PATTERN_MARKER: char = '%';

/// Largest minimum or maximum width accepted on a specifier.
pub const MAX_FIELD_WIDTH: usize = 4096;

/// Compiles format strings using a converter registry.
#[derive(Clone)]
pub struct PatternParser {
    registry: Arc<ConverterRegistry>,
}

impl PatternParser {
    pub fn new(registry: ConverterRegistry) -> Self {
        Self::with_registry(Arc::new(registry))
    }

    pub fn with_registry(registry: Arc<ConverterRegistry>) -> Self {
        Self { registry }
    }

    /// Parser backed by every built-in converter.
    pub fn with_builtins() -> Self {
        Self::new(ConverterRegistry::with_builtins())
    }

    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }

    pub fn parse(&self, pattern: &str) -> FormatterChain {
        let mut cursor = Cursor::new(pattern);
        let mut formatters = Vec::new();
        let mut literal = String::new();

        while let Some(c) = cursor.bump() {
            if c != PATTERN_MARKER {
                literal.push(c);
                continue;
            }

            let spec_start = cursor.pos - c.len_utf8();
            match cursor.peek() {
                None => literal.push(PATTERN_MARKER),
                Some(PATTERN_MARKER) => {
                    cursor.bump();
                    literal.push(PATTERN_MARKER);
                }
                Some(_) => {
                    let info = parse_formatting_info(&mut cursor);
                    let run_start = cursor.pos;
                    let run = cursor.take_while(|c| c.is_ascii_alphabetic());
                    let name = self.longest_registered_prefix(run);
                    cursor.pos = run_start + name.len();
                    let options = parse_options(&mut cursor);

                    let created = match info {
                        Ok(info) => self
                            .create_converter(name, &options, spec_start)
                            .map(|converter| (converter, info)),
                        Err(error) => {
                            ConverterCreationFailed {
                                key: name,
                                position: spec_start,
                                error: &error,
                            }
                            .log();
                            None
                        }
                    };

                    match created {
                        Some((converter, info)) => {
                            flush_literal(&mut literal, &mut formatters);
                            formatters.push(PatternFormatter::new(converter, info));
                        }
                        None => literal.push_str(&pattern[spec_start..cursor.pos]),
                    }
                }
            }
        }

        flush_literal(&mut literal, &mut formatters);
        FormatterChain::new(pattern, formatters)
    }

    /// Converter names are matched greedily against the registry, so `%nText`
    /// resolves to `%n` followed by the literal `Text`.
    fn longest_registered_prefix<'p>(&self, run: &'p str) -> &'p str {
        (1..=run.len())
            .rev()
            .map(|n| &run[..n])
            .find(|prefix| self.registry.contains_key(prefix))
            .unwrap_or(run)
    }

    fn create_converter(
        &self,
        name: &str,
        options: &[String],
        position: usize,
    ) -> Option<Arc<dyn PatternConverter>> {
        if name.is_empty() {
            UnrecognizedConversionSpecifier {
                specifier: name,
                position,
            }
            .log();
            return None;
        }

        match self.registry.create(name, options, self) {
            Ok(converter) => {
                ConverterCreated {
                    key: name,
                    converter: converter.name(),
                    option_count: options.len(),
                }
                .log();
                Some(converter)
            }
            Err(ConverterError::UnknownConverter { .. }) => {
                UnrecognizedConversionSpecifier {
                    specifier: name,
                    position,
                }
                .log();
                None
            }
            Err(error) => {
                ConverterCreationFailed {
                    key: name,
                    position,
                    error: &error,
                }
                .log();
                None
            }
        }
    }
}

impl Default for PatternParser {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl std::fmt::Debug for PatternParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternParser")
            .field("registry", &self.registry)
            .finish()
    }
}

impl PatternCompiler for PatternParser {
    fn compile(&self, pattern: &str) -> FormatterChain {
        self.parse(pattern)
    }
}

fn flush_literal(literal: &mut String, formatters: &mut Vec<PatternFormatter>) {
    if !literal.is_empty() {
        let converter = Arc::new(LiteralConverter::new(std::mem::take(literal)));
        formatters.push(PatternFormatter::new(converter, FormattingInfo::default()));
    }
}

/// Reads `[-][min][.[-]max]`. The whole prefix is always consumed so a
/// rejected width still leaves the cursor on the converter name.
fn parse_formatting_info(cursor: &mut Cursor<'_>) -> Result<FormattingInfo, ConverterError> {
    let mut info = FormattingInfo::default();

    if cursor.eat('-') {
        info.left_align = true;
    }

    let min = cursor.take_while(|c| c.is_ascii_digit());
    let mut max = "";

    if cursor.eat('.') {
        if cursor.eat('-') {
            info.left_truncate = false;
        }
        max = cursor.take_while(|c| c.is_ascii_digit());
    }

    if !min.is_empty() {
        info.min_length = parse_width(min)?;
    }
    if !max.is_empty() {
        info.max_length = parse_width(max)?;
    }

    Ok(info)
}

fn parse_width(digits: &str) -> Result<usize, ConverterError> {
    digits
        .parse::<usize>()
        .ok()
        .filter(|width| *width <= MAX_FIELD_WIDTH)
        .ok_or_else(|| ConverterError::InvalidFieldWidth {
            width: digits.to_string(),
            limit: MAX_FIELD_WIDTH,
        })
}

/// Read `{...}` groups following a converter name. Nested braces stay part
/// of the option text; an unterminated group runs to the end of input.
fn parse_options(cursor: &mut Cursor<'_>) -> Vec<String> {
    let mut options = Vec::new();

    while cursor.eat('{') {
        let start = cursor.pos;
        let mut depth = 1usize;

        loop {
            match cursor.bump() {
                None => {
                    options.push(cursor.src[start..].to_string());
                    return options;
                }
                Some('{') => depth += 1,
                Some('}') => {
                    depth -= 1;
                    if depth == 0 {
                        options.push(cursor.src[start..cursor.pos - 1].to_string());
                        break;
                    }
                }
                Some(_) => {}
            }
        }
    }

    options
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.src[start..self.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Level, LogEvent};

    fn render(pattern: &str, event: &LogEvent) -> String {
        let chain = PatternParser::with_builtins().parse(pattern);
        let mut buf = String::new();
        chain.format(event, &mut buf);
        buf
    }

    fn sample_event() -> LogEvent {
        LogEvent::new("com.foo.Bar", Level::Error, "boom").with_thread("main")
    }

    #[test]
    fn test_parse_table_driven() {
        struct TestCase {
            name: &'static str,
            pattern: &'static str,
            expected: &'static str,
        }

        let test_cases = vec![
            TestCase { name: "plain literal", pattern: "hello", expected: "hello" },
            TestCase { name: "escaped marker", pattern: "100%% sure", expected: "100% sure" },
            TestCase { name: "trailing marker", pattern: "100%", expected: "100%" },
            TestCase { name: "simple converters", pattern: "%level - %msg%n", expected: "ERROR - boom\n" },
            TestCase { name: "short keys", pattern: "%p [%t] %c: %m", expected: "ERROR [main] com.foo.Bar: boom" },
            TestCase { name: "left aligned width", pattern: "[%-7level]", expected: "[ERROR  ]" },
            TestCase { name: "right aligned width", pattern: "[%7level]", expected: "[  ERROR]" },
            TestCase { name: "max width", pattern: "%.3logger", expected: "Bar" },
            TestCase { name: "max width from the right", pattern: "%.-3logger", expected: "com" },
            TestCase {
                name: "width overflowing usize kept literally",
                pattern: "%99999999999999999999999level",
                expected: "%99999999999999999999999level",
            },
            TestCase { name: "width above limit kept literally", pattern: "[%5000level]", expected: "[%5000level]" },
            TestCase { name: "max width above limit kept literally", pattern: "%.5000m!", expected: "%.5000m!" },
            TestCase { name: "logger precision option", pattern: "%logger{2}", expected: "foo.Bar" },
            TestCase { name: "unknown converter kept literally", pattern: "%zzz{x} done", expected: "%zzz{x} done" },
            TestCase { name: "longest registered prefix", pattern: "%nText", expected: "\nText" },
            TestCase { name: "longer key preferred", pattern: "%message", expected: "boom" },
            TestCase { name: "empty specifier kept literally", pattern: "% x", expected: "% x" },
            TestCase {
                name: "failed equals kept literally",
                pattern: "%equals{%logger}{a}",
                expected: "%equals{%logger}{a}",
            },
            TestCase {
                name: "equals replaces on match",
                pattern: "<%equals{%logger}{com.foo.Bar}{REDACTED}>",
                expected: "<REDACTED>",
            },
        ];

        let event = sample_event();
        for case in test_cases {
            assert_eq!(render(case.pattern, &event), case.expected, "case: {}", case.name);
        }
    }

    #[test]
    fn test_adjacent_literal_text_is_merged() {
        let chain = PatternParser::with_builtins().parse("a%%b%zzz");
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.iter().next().unwrap().converter().name(), "literal");
    }

    #[test]
    fn test_chain_keeps_source_pattern() {
        let chain = PatternParser::with_builtins().parse("%level %msg");
        assert_eq!(chain.source(), "%level %msg");
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn test_nested_options_are_balanced() {
        let mut cursor = Cursor::new("{%X{user}}{}{anon} tail");
        let options = parse_options(&mut cursor);

        assert_eq!(options, vec!["%X{user}", "", "anon"]);
        assert_eq!(&cursor.src[cursor.pos..], " tail");
    }

    #[test]
    fn test_unterminated_option_runs_to_end() {
        let mut cursor = Cursor::new("{user");
        assert_eq!(parse_options(&mut cursor), vec!["user"]);
    }

    #[test]
    fn test_nested_equals_with_context() {
        let pattern = "%equals{%X{user}}{}{anonymous}";

        assert_eq!(render(pattern, &sample_event()), "anonymous");
        assert_eq!(render(pattern, &sample_event().with_context("user", "alice")), "alice");
    }

    #[test]
    fn test_empty_pattern_yields_empty_chain() {
        let chain = PatternParser::with_builtins().parse("");
        assert!(chain.is_empty());
    }

    #[test]
    fn test_formatting_info_parsing() {
        let mut cursor = Cursor::new("-5.-10level");
        let info = parse_formatting_info(&mut cursor).unwrap();

        assert!(info.left_align);
        assert_eq!(info.min_length, 5);
        assert_eq!(info.max_length, 10);
        assert!(!info.left_truncate);
        assert_eq!(&cursor.src[cursor.pos..], "level");
    }

    #[test]
    fn test_oversized_width_is_rejected_and_consumed() {
        let mut cursor = Cursor::new("99999999999999999999999.2level");
        let error = parse_formatting_info(&mut cursor).unwrap_err();

        assert_eq!(
            error,
            ConverterError::InvalidFieldWidth {
                width: "99999999999999999999999".to_string(),
                limit: MAX_FIELD_WIDTH,
            }
        );
        assert_eq!(&cursor.src[cursor.pos..], "level");
    }

    #[test]
    fn test_width_at_limit_is_accepted() {
        let rendered = render("%-4096level|", &sample_event());

        assert_eq!(rendered.len(), MAX_FIELD_WIDTH + 1);
        assert!(rendered.starts_with("ERROR "));
        assert!(rendered.ends_with(" |"));
    }

    #[test]
    fn test_rejected_width_does_not_affect_later_specifiers() {
        let rendered = render("%99999999999999999999999level %level", &sample_event());
        assert_eq!(rendered, "%99999999999999999999999level ERROR");
    }
}
