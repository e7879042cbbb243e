// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Conditional replacement converter: `%equals{pattern}{test}{substitution}`.
//!
//! The converter renders `pattern` against the event. If the rendered text is
//! exactly `test` (same length, same characters, no trimming or case
//! folding) it is discarded and `substitution` is rendered in its place;
//! otherwise the rendered text stays as the output.
//!
//! `substitution` is itself a pattern when it contains `%`, so the
//! replacement can depend on the event:
//!
//! ```text
//! %equals{%logger}{com.foo.Bar}{REDACTED}   -> "REDACTED" for com.foo.Bar
//! %equals{%X{user}}{}{anonymous}            -> "anonymous" when user is unset
//! %equals{%logger}{com.foo.Bar}{%level}     -> the event's level for com.foo.Bar
//! ```
//!
//! # Example
//! ```
//! use pattern_equals::converters::EqualsReplacementConverter;
//! use pattern_equals::event::{Level, LogEvent};
//! use pattern_equals::pattern::PatternParser;
//! use pattern_equals::traits::PatternConverter;
//!
//! let parser = PatternParser::with_builtins();
//! let options = vec!["%logger".to_string(), "com.foo.Bar".to_string(), "REDACTED".to_string()];
//! let converter = EqualsReplacementConverter::new(&options, &parser)?;
//!
//! let mut buf = String::from("logger=");
//! converter.format(&LogEvent::new("com.foo.Bar", Level::Info, "hi"), &mut buf);
//! assert_eq!(buf, "logger=REDACTED");
//! # Ok::<(), pattern_equals::errors::ConverterError>(())
//! ```

use std::sync::Arc;

use crate::errors::ConverterError;
use crate::event::LogEvent;
use crate::pattern::{FormatterChain, PATTERN_MARKER};
use crate::traits::{PatternCompiler, PatternConverter};

/// Registry key and converter name.
pub const EQUALS_KEY: &str = "equals";

const OPTION_COUNT: usize = 3;

/// What gets rendered when the test matches.
///
/// Chosen once at construction: text containing the pattern marker is
/// compiled, anything else is appended verbatim.
#[derive(Debug, Clone)]
pub enum Substitution {
    Literal(String),
    Pattern(FormatterChain),
}

impl Substitution {
    pub fn compile(text: &str, compiler: &dyn PatternCompiler) -> Self {
        if text.contains(PATTERN_MARKER) {
            Substitution::Pattern(compiler.compile(text))
        } else {
            Substitution::Literal(text.to_string())
        }
    }

    pub fn render(&self, event: &LogEvent, buf: &mut String) {
        match self {
            Substitution::Pattern(chain) => chain.format(event, buf),
            Substitution::Literal(text) => buf.push_str(text),
        }
    }

    /// The substitution option as configured.
    pub fn source(&self) -> &str {
        match self {
            Substitution::Pattern(chain) => chain.source(),
            Substitution::Literal(text) => text.as_str(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EqualsReplacementConverter {
    test_chain: FormatterChain,
    test_literal: String,
    substitution: Substitution,
}

impl EqualsReplacementConverter {
    /// Build from the three `{...}` options: pattern, test string and
    /// substitution.
    pub fn new(options: &[String], compiler: &dyn PatternCompiler) -> Result<Self, ConverterError> {
        let options: Vec<Option<&str>> = options.iter().map(|o| Some(o.as_str())).collect();
        Self::from_optional(&options, compiler)
    }

    /// Same as [`new`](Self::new) for callers whose options may be absent.
    ///
    /// The option count is checked first, then each option in order. The
    /// compiler runs only after every check has passed: once for the
    /// pattern and once more if the substitution contains `%`.
    pub fn from_optional(
        options: &[Option<&str>],
        compiler: &dyn PatternCompiler,
    ) -> Result<Self, ConverterError> {
        if options.len() != OPTION_COUNT {
            return Err(ConverterError::IncorrectOptionCount {
                converter: EQUALS_KEY,
                expected: OPTION_COUNT,
                received: options.len(),
            });
        }

        let pattern = options[0].ok_or(ConverterError::MissingPattern { converter: EQUALS_KEY })?;
        let test_literal =
            options[1].ok_or(ConverterError::MissingTestString { converter: EQUALS_KEY })?;
        let substitution =
            options[2].ok_or(ConverterError::MissingSubstitution { converter: EQUALS_KEY })?;

        Ok(Self::from_parts(
            compiler.compile(pattern),
            test_literal,
            Substitution::compile(substitution, compiler),
        ))
    }

    pub fn from_parts(
        test_chain: FormatterChain,
        test_literal: impl Into<String>,
        substitution: Substitution,
    ) -> Self {
        Self {
            test_chain,
            test_literal: test_literal.into(),
            substitution,
        }
    }

    pub fn test_chain(&self) -> &FormatterChain {
        &self.test_chain
    }

    pub fn test_literal(&self) -> &str {
        &self.test_literal
    }

    pub fn substitution(&self) -> &Substitution {
        &self.substitution
    }

    fn render_substitution(&self, event: &LogEvent, buf: &mut String) {
        self.substitution.render(event, buf);
    }
}

impl PatternConverter for EqualsReplacementConverter {
    fn format(&self, event: &LogEvent, buf: &mut String) {
        let mark = buf.len();
        self.test_chain.format(event, buf);
        // Converters only ever append.
        debug_assert!(buf.len() >= mark, "test chain shrank the buffer below its mark");
        let rendered_len = buf.len() - mark;

        if region_equals(&self.test_literal, buf, mark, rendered_len) {
            buf.truncate(mark);
            self.render_substitution(event, buf);
        }
    }

    fn name(&self) -> &'static str {
        EQUALS_KEY
    }
}

/// Registry factory for `%equals`.
pub fn create(
    options: &[String],
    compiler: &dyn PatternCompiler,
) -> Result<Arc<dyn PatternConverter>, ConverterError> {
    Ok(Arc::new(EqualsReplacementConverter::new(options, compiler)?))
}

/// True when `buf[from..from + len]` is exactly `literal`.
fn region_equals(literal: &str, buf: &str, from: usize, len: usize) -> bool {
    literal.len() == len && literal.as_bytes() == &buf.as_bytes()[from..from + len]
}
