// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration validation errors.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Two layouts share an ID.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct DuplicateLayoutId<'a> {
    pub layout_id: &'a str,
}

impl Display for DuplicateLayoutId<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Duplicate layout ID '{}'", self.layout_id)
    }
}

impl StructuredLog for DuplicateLayoutId<'_> {
    fn log(&self) {
        tracing::error!(layout_id = self.layout_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("validation", span_name = name, layout_id = self.layout_id)
    }
}

/// A layout has no ID.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct EmptyLayoutId {
    pub index: usize,
}

impl Display for EmptyLayoutId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Layout at index {} has an empty ID", self.index)
    }
}

impl StructuredLog for EmptyLayoutId {
    fn log(&self) {
        tracing::error!(index = self.index, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("validation", span_name = name, index = self.index)
    }
}

/// A layout has an empty pattern.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct EmptyPattern<'a> {
    pub layout_id: &'a str,
}

impl Display for EmptyPattern<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Layout '{}' has an empty pattern", self.layout_id)
    }
}

impl StructuredLog for EmptyPattern<'_> {
    fn log(&self) {
        tracing::error!(layout_id = self.layout_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("validation", span_name = name, layout_id = self.layout_id)
    }
}

/// The configuration has no layouts at all.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct NoLayoutsConfigured;

impl Display for NoLayoutsConfigured {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Configuration defines no layouts")
    }
}

impl StructuredLog for NoLayoutsConfigured {
    fn log(&self) {
        tracing::error!("{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("validation", span_name = name)
    }
}
