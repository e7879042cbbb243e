// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in pattern converters and the registry that resolves them by key.
//!
//! | Keys | Converter |
//! |---|---|
//! | `equals` | [`EqualsReplacementConverter`] |
//! | `c`, `logger` | [`LoggerConverter`] |
//! | `p`, `level` | [`LevelConverter`] |
//! | `m`, `msg`, `message` | [`MessageConverter`] |
//! | `t`, `thread` | [`ThreadConverter`] |
//! | `X`, `mdc`, `MDC` | [`ContextConverter`] |
//! | `n` | [`LineSeparatorConverter`] |
//!
//! Literal text between specifiers becomes a [`LiteralConverter`]; it has no
//! key.

pub mod context;
pub mod equals;
pub mod event_fields;
pub mod literal;
pub mod logger;
pub mod registry;

pub use context::ContextConverter;
pub use equals::{EqualsReplacementConverter, Substitution};
pub use event_fields::{LevelConverter, LineSeparatorConverter, MessageConverter, ThreadConverter};
pub use literal::LiteralConverter;
pub use logger::LoggerConverter;
pub use registry::{ConverterFactory, ConverterRegistry};
