// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::event::LogEvent;
use crate::traits::PatternConverter;

/// `%X{key}` renders one context entry, or nothing when the key is absent.
/// `%X` without a key renders the whole context as `{k1=v1, k2=v2}`.
#[derive(Debug, Clone, Default)]
pub struct ContextConverter {
    key: Option<String>,
}

impl ContextConverter {
    pub fn new(options: &[String]) -> Self {
        let key = options.first().filter(|k| !k.is_empty()).cloned();
        Self { key }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

impl PatternConverter for ContextConverter {
    fn format(&self, event: &LogEvent, buf: &mut String) {
        match &self.key {
            Some(key) => {
                if let Some(value) = event.context.get(key) {
                    buf.push_str(value);
                }
            }
            None => {
                buf.push('{');
                for (i, (k, v)) in event.context.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    buf.push_str(k);
                    buf.push('=');
                    buf.push_str(v);
                }
                buf.push('}');
            }
        }
    }

    fn name(&self) -> &'static str {
        "context"
    }
}
