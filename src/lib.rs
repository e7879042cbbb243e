// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;        // layout config loading + validation
pub mod converters;    // built-in converters + registry
pub mod errors;        // error handling
pub mod event;         // log event model
pub mod layout;        // compiled layouts
pub mod observability;
pub mod pattern;       // pattern parser + formatter chains
pub mod stream;        // JSON-lines rendering
pub mod traits;        // unified abstractions
