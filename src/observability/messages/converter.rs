// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for converter creation and pattern parsing.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A conversion specifier was resolved to a converter.
///
/// # Log Level
/// `debug!` - Configuration detail
pub struct ConverterCreated<'a> {
    pub key: &'a str,
    pub converter: &'a str,
    pub option_count: usize,
}

impl Display for ConverterCreated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Created converter '{}' for specifier '%{}' with {} option(s)",
            self.converter, self.key, self.option_count
        )
    }
}

impl StructuredLog for ConverterCreated<'_> {
    fn log(&self) {
        tracing::debug!(
            key = self.key,
            converter = self.converter,
            option_count = self.option_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "converter",
            span_name = name,
            key = self.key,
            converter = self.converter,
        )
    }
}

/// A converter factory rejected its options. The converter is unavailable
/// and its specifier is rendered as literal text.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use pattern_equals::errors::ConverterError;
/// use pattern_equals::observability::messages::converter::ConverterCreationFailed;
///
/// let error = ConverterError::MissingPattern { converter: "equals" };
/// let msg = ConverterCreationFailed {
///     key: "equals",
///     position: 0,
///     error: &error,
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Failed to create converter '%equals' at position 0: No pattern supplied on equals"
/// );
/// ```
pub struct ConverterCreationFailed<'a> {
    pub key: &'a str,
    pub position: usize,
    pub error: &'a dyn std::error::Error,
}

impl Display for ConverterCreationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to create converter '%{}' at position {}: {}",
            self.key, self.position, self.error
        )
    }
}

impl StructuredLog for ConverterCreationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            key = self.key,
            position = self.position,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "converter",
            span_name = name,
            key = self.key,
            position = self.position,
        )
    }
}

/// A specifier named no registered converter.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct UnrecognizedConversionSpecifier<'a> {
    pub specifier: &'a str,
    pub position: usize,
}

impl Display for UnrecognizedConversionSpecifier<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.specifier.is_empty() {
            write!(f, "Empty conversion specifier starting at position {}", self.position)
        } else {
            write!(
                f,
                "Unrecognized conversion specifier [{}] starting at position {}",
                self.specifier, self.position
            )
        }
    }
}

impl StructuredLog for UnrecognizedConversionSpecifier<'_> {
    fn log(&self) {
        tracing::error!(
            specifier = self.specifier,
            position = self.position,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "converter",
            span_name = name,
            specifier = self.specifier,
            position = self.position,
        )
    }
}
