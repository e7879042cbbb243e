// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::event::LogEvent;
use crate::traits::PatternConverter;

/// Appends fixed text regardless of the event.
#[derive(Debug, Clone)]
pub struct LiteralConverter {
    text: String,
}

impl LiteralConverter {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl PatternConverter for LiteralConverter {
    fn format(&self, _event: &LogEvent, buf: &mut String) {
        buf.push_str(&self.text);
    }

    fn name(&self) -> &'static str {
        "literal"
    }
}
