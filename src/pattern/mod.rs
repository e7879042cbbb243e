// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Pattern compilation: format strings in, formatter chains out.

mod chain;
mod formatter;
mod parser;

pub use chain::FormatterChain;
pub use formatter::{FormattingInfo, PatternFormatter};
pub use parser::{PatternParser, MAX_FIELD_WIDTH, PATTERN_MARKER};
