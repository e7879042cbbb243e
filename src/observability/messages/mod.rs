// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! [`StructuredLog`] to emit itself at its own level with its fields
//! attached.
//!
//! # Usage Pattern
//!
//! ```rust
//! use pattern_equals::observability::messages::layout::LayoutCompiled;
//! use pattern_equals::observability::messages::StructuredLog;
//!
//! let msg = LayoutCompiled {
//!     layout_id: "console",
//!     pattern: "%level %msg%n",
//!     formatter_count: 4,
//! };
//!
//! msg.log();
//! ```

pub mod converter;
pub mod layout;
pub mod validation;

use tracing::Span;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
