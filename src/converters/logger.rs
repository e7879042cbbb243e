// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ConverterError;
use crate::event::LogEvent;
use crate::traits::PatternConverter;

/// `%c` / `%logger`, with an optional precision `{N}` that keeps only the
/// last `N` dot-separated segments of the logger name.
#[derive(Debug, Clone, Default)]
pub struct LoggerConverter {
    precision: Option<usize>,
}

impl LoggerConverter {
    pub fn new(options: &[String]) -> Result<Self, ConverterError> {
        let precision = match options.first().map(|o| o.trim()) {
            None | Some("") => None,
            Some(option) => {
                let n: usize = option.parse().map_err(|_| ConverterError::InvalidOption {
                    converter: "logger",
                    option: option.to_string(),
                    reason: "precision must be a positive integer".to_string(),
                })?;
                if n == 0 {
                    return Err(ConverterError::InvalidOption {
                        converter: "logger",
                        option: option.to_string(),
                        reason: "precision must be a positive integer".to_string(),
                    });
                }
                Some(n)
            }
        };

        Ok(Self { precision })
    }

    pub fn precision(&self) -> Option<usize> {
        self.precision
    }
}

impl PatternConverter for LoggerConverter {
    fn format(&self, event: &LogEvent, buf: &mut String) {
        let name = event.logger_name.as_str();
        match self.precision {
            None => buf.push_str(name),
            Some(n) => {
                let start = name
                    .rmatch_indices('.')
                    .nth(n - 1)
                    .map(|(i, _)| i + 1)
                    .unwrap_or(0);
                buf.push_str(&name[start..]);
            }
        }
    }

    fn name(&self) -> &'static str {
        "logger"
    }
}
