// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::pattern::FormatterChain;

/// Compiles a format string into a chain of formatter units.
///
/// Converters that embed sub-patterns (such as `%equals`) receive this at
/// construction time and never call it per event.
pub trait PatternCompiler {
    fn compile(&self, pattern: &str) -> FormatterChain;
}
