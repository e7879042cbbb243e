// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Converters that copy a single event field.

use crate::event::LogEvent;
use crate::traits::PatternConverter;

/// `%p` / `%level`
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelConverter;

impl PatternConverter for LevelConverter {
    fn format(&self, event: &LogEvent, buf: &mut String) {
        buf.push_str(event.level.as_str());
    }

    fn name(&self) -> &'static str {
        "level"
    }
}

/// `%m` / `%msg` / `%message`
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageConverter;

impl PatternConverter for MessageConverter {
    fn format(&self, event: &LogEvent, buf: &mut String) {
        buf.push_str(&event.message);
    }

    fn name(&self) -> &'static str {
        "message"
    }
}

/// `%t` / `%thread`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadConverter;

impl PatternConverter for ThreadConverter {
    fn format(&self, event: &LogEvent, buf: &mut String) {
        buf.push_str(&event.thread_name);
    }

    fn name(&self) -> &'static str {
        "thread"
    }
}

/// `%n`
#[derive(Debug, Clone, Copy, Default)]
pub struct LineSeparatorConverter;

pub const LINE_SEPARATOR: &str = "\n";

impl PatternConverter for LineSeparatorConverter {
    fn format(&self, _event: &LogEvent, buf: &mut String) {
        buf.push_str(LINE_SEPARATOR);
    }

    fn name(&self) -> &'static str {
        "line_separator"
    }
}
