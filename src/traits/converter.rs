// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::event::LogEvent;

/// A single named rendering step of a pattern layout.
///
/// Implementations append event-derived text to the caller's buffer. They
/// are built once at configuration time and shared across threads, so
/// `format` must not mutate converter state.
pub trait PatternConverter: Send + Sync {
    fn format(&self, event: &LogEvent, buf: &mut String);

    fn name(&self) -> &'static str;
}
