// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Compiled layouts: the entry point for turning events into text.

mod layout_map;
mod pattern_layout;

pub use layout_map::LayoutMap;
pub use pattern_layout::PatternLayout;
