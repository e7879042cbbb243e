// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Every diagnostic emitted by the crate is a message struct with a
//! `Display` implementation and a [`messages::StructuredLog`] implementation
//! that records the same data as tracing fields. Call sites build the struct
//! and call `.log()`; no log text lives at the call site.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::converter` - converter creation and pattern parsing
//! * `messages::layout` - layout compilation and event rendering
//! * `messages::validation` - configuration validation errors
//!
//! # Usage
//!
//! ```rust
//! use pattern_equals::observability::messages::converter::UnrecognizedConversionSpecifier;
//!
//! let msg = UnrecognizedConversionSpecifier {
//!     specifier: "nope",
//!     position: 4,
//! };
//!
//! tracing::error!("{}", msg);
//! ```

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install a `fmt` subscriber writing to stderr.
///
/// Filtering comes from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
