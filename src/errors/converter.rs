// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while building pattern converters.
//!
//! These are configuration-time errors only. Once a converter exists its
//! `format` call cannot fail.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConverterError {
    /// The converter received the wrong number of `{...}` options.
    #[error("Incorrect number of options on {converter}. Expected {expected} received {received}")]
    IncorrectOptionCount {
        converter: &'static str,
        expected: usize,
        received: usize,
    },

    #[error("No pattern supplied on {converter}")]
    MissingPattern { converter: &'static str },

    #[error("No test string supplied on {converter}")]
    MissingTestString { converter: &'static str },

    #[error("No substitution supplied on {converter}")]
    MissingSubstitution { converter: &'static str },

    /// No factory is registered under the requested key.
    #[error("Unrecognized conversion specifier '{key}'")]
    UnknownConverter { key: String },

    /// An option was present but could not be interpreted.
    #[error("Invalid option '{option}' on {converter}: {reason}")]
    InvalidOption {
        converter: &'static str,
        option: String,
        reason: String,
    },

    /// A `%` specifier carried a width that is not a usable field width.
    #[error("Invalid field width '{width}': must be at most {limit}")]
    InvalidFieldWidth { width: String, limit: usize },
}
