// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for layout compilation and event rendering.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Compilation of a layout pattern is starting.
///
/// # Log Level
/// `debug!` - Configuration detail
pub struct LayoutCompilationStarted<'a> {
    pub layout_id: &'a str,
    pub pattern: &'a str,
}

impl Display for LayoutCompilationStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Compiling layout '{}': pattern=\"{}\"",
            self.layout_id, self.pattern
        )
    }
}

impl StructuredLog for LayoutCompilationStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            layout_id = self.layout_id,
            pattern = self.pattern,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "layout",
            span_name = name,
            layout_id = self.layout_id,
            pattern = self.pattern,
        )
    }
}

/// A layout pattern was compiled into a formatter chain.
///
/// # Log Level
/// `debug!` - Configuration detail
pub struct LayoutCompiled<'a> {
    pub layout_id: &'a str,
    pub pattern: &'a str,
    pub formatter_count: usize,
}

impl Display for LayoutCompiled<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Layout '{}' compiled: pattern=\"{}\", formatters={}",
            self.layout_id, self.pattern, self.formatter_count
        )
    }
}

impl StructuredLog for LayoutCompiled<'_> {
    fn log(&self) {
        tracing::debug!(
            layout_id = self.layout_id,
            pattern = self.pattern,
            formatter_count = self.formatter_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "layout",
            span_name = name,
            layout_id = self.layout_id,
            pattern = self.pattern,
        )
    }
}

/// An event was rendered by a layout.
///
/// # Log Level
/// `trace!` - Per-event detail
pub struct EventFormatted<'a> {
    pub layout_id: &'a str,
    pub output_size: usize,
}

impl Display for EventFormatted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Layout '{}' rendered event: output={} bytes",
            self.layout_id, self.output_size
        )
    }
}

impl StructuredLog for EventFormatted<'_> {
    fn log(&self) {
        tracing::trace!(
            layout_id = self.layout_id,
            output_size = self.output_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!("layout", span_name = name, layout_id = self.layout_id)
    }
}

/// An input line could not be decoded as an event and was skipped.
///
/// # Log Level
/// `warn!` - Degraded input
pub struct EventDecodeFailed<'a> {
    pub line_number: usize,
    pub error: &'a dyn std::error::Error,
}

impl Display for EventDecodeFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Skipping line {}: not a valid event: {}",
            self.line_number, self.error
        )
    }
}

impl StructuredLog for EventDecodeFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            line_number = self.line_number,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("input", span_name = name, line_number = self.line_number)
    }
}

/// An event stream was fully rendered.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use pattern_equals::observability::messages::layout::EventStreamCompleted;
///
/// let msg = EventStreamCompleted {
///     rendered: 10,
///     skipped: 1,
/// };
///
/// assert_eq!(msg.to_string(), "Rendered 10 event(s), skipped 1");
/// ```
pub struct EventStreamCompleted {
    pub rendered: usize,
    pub skipped: usize,
}

impl Display for EventStreamCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rendered {} event(s), skipped {}",
            self.rendered, self.skipped
        )
    }
}

impl StructuredLog for EventStreamCompleted {
    fn log(&self) {
        tracing::info!(
            rendered = self.rendered,
            skipped = self.skipped,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("input", span_name = name, rendered = self.rendered)
    }
}
