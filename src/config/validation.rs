// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation.
//!
//! Checks run in order and all errors are collected:
//!
//! 1. At least one layout is configured
//! 2. Every layout has a non-empty ID
//! 3. Layout IDs are unique
//! 4. Every layout has a non-empty pattern
//!
//! Pattern syntax is not checked here. The parser never rejects a pattern;
//! unknown specifiers are logged when the layout is compiled.

use std::collections::HashSet;

use crate::config::Config;
use crate::errors::ValidationError;
use crate::observability::messages::validation::{
    DuplicateLayoutId, EmptyLayoutId, EmptyPattern, NoLayoutsConfigured,
};
use crate::observability::messages::StructuredLog;

pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.layouts.is_empty() {
        NoLayoutsConfigured.log();
        errors.push(ValidationError::NoLayouts);
    }

    let mut seen = HashSet::new();
    for (index, layout) in config.layouts.iter().enumerate() {
        if layout.id.trim().is_empty() {
            EmptyLayoutId { index }.log();
            errors.push(ValidationError::EmptyLayoutId { index });
        } else if !seen.insert(layout.id.as_str()) {
            DuplicateLayoutId {
                layout_id: &layout.id,
            }
            .log();
            errors.push(ValidationError::DuplicateLayoutId {
                layout_id: layout.id.clone(),
            });
        }

        if layout.pattern.is_empty() {
            EmptyPattern {
                layout_id: &layout.id,
            }
            .log();
            errors.push(ValidationError::EmptyPattern {
                layout_id: layout.id.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
