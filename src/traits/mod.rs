// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod compiler;
pub mod converter;

pub use compiler::PatternCompiler;
pub use converter::PatternConverter;
