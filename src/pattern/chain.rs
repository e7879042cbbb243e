// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::event::LogEvent;
use crate::pattern::PatternFormatter;

/// An ordered, immutable sequence of formatter units compiled from one
/// format string.
///
/// The chain keeps the pattern it was compiled from so diagnostics can name
/// it; rendering never looks at the source again.
#[derive(Debug, Clone, Default)]
pub struct FormatterChain {
    source: String,
    formatters: Vec<PatternFormatter>,
}

impl FormatterChain {
    pub fn new(source: impl Into<String>, formatters: Vec<PatternFormatter>) -> Self {
        Self {
            source: source.into(),
            formatters,
        }
    }

    /// Render every formatter in order, appending to `buf`.
    pub fn format(&self, event: &LogEvent, buf: &mut String) {
        for formatter in &self.formatters {
            formatter.format(event, buf);
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatternFormatter> {
        self.formatters.iter()
    }

    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }
}
