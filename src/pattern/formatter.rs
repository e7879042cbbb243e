// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::sync::Arc;

use crate::event::LogEvent;
use crate::traits::PatternConverter;

/// Width and truncation modifiers of a conversion specifier.
///
/// Parsed from `%[-][min][.[-]max]name`:
/// * `-` pads on the right instead of the left
/// * `min` pads output shorter than `min` characters with spaces
/// * `.max` keeps the last `max` characters, `.-max` keeps the first `max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingInfo {
    pub min_length: usize,
    pub max_length: usize,
    pub left_align: bool,
    pub left_truncate: bool,
}

impl Default for FormattingInfo {
    fn default() -> Self {
        Self {
            min_length: 0,
            max_length: usize::MAX,
            left_align: false,
            left_truncate: true,
        }
    }
}

impl FormattingInfo {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Pad or truncate the text written since `field_start`.
    ///
    /// Lengths are measured in chars, so truncation never splits a
    /// multi-byte character.
    pub fn apply(&self, field_start: usize, buf: &mut String) {
        let raw_len = buf[field_start..].chars().count();

        if raw_len > self.max_length {
            if self.left_truncate {
                let skip = raw_len - self.max_length;
                let cut = nth_char_offset(&buf[field_start..], skip);
                buf.replace_range(field_start..field_start + cut, "");
            } else {
                let keep = nth_char_offset(&buf[field_start..], self.max_length);
                buf.truncate(field_start + keep);
            }
        } else if raw_len < self.min_length {
            let padding = " ".repeat(self.min_length - raw_len);
            if self.left_align {
                buf.push_str(&padding);
            } else {
                buf.insert_str(field_start, &padding);
            }
        }
    }
}

fn nth_char_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len())
}

/// One formatter unit: a converter plus its formatting modifiers.
#[derive(Clone)]
pub struct PatternFormatter {
    converter: Arc<dyn PatternConverter>,
    info: FormattingInfo,
}

impl PatternFormatter {
    pub fn new(converter: Arc<dyn PatternConverter>, info: FormattingInfo) -> Self {
        Self { converter, info }
    }

    pub fn format(&self, event: &LogEvent, buf: &mut String) {
        if self.info.is_default() {
            self.converter.format(event, buf);
        } else {
            let start = buf.len();
            self.converter.format(event, buf);
            self.info.apply(start, buf);
        }
    }

    pub fn converter(&self) -> &Arc<dyn PatternConverter> {
        &self.converter
    }

    pub fn info(&self) -> &FormattingInfo {
        &self.info
    }
}

impl fmt::Debug for PatternFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternFormatter")
            .field("converter", &self.converter.name())
            .field("info", &self.info)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(info: FormattingInfo, prefix: &str, field: &str) -> String {
        let mut buf = String::from(prefix);
        let start = buf.len();
        buf.push_str(field);
        info.apply(start, &mut buf);
        buf
    }

    #[test]
    fn test_apply_table_driven() {
        struct TestCase {
            name: &'static str,
            info: FormattingInfo,
            field: &'static str,
            expected: &'static str,
        }

        let test_cases = vec![
            TestCase {
                name: "default leaves text alone",
                info: FormattingInfo::default(),
                field: "INFO",
                expected: ">INFO",
            },
            TestCase {
                name: "right aligned padding",
                info: FormattingInfo { min_length: 5, ..FormattingInfo::default() },
                field: "INFO",
                expected: "> INFO",
            },
            TestCase {
                name: "left aligned padding",
                info: FormattingInfo { min_length: 5, left_align: true, ..FormattingInfo::default() },
                field: "INFO",
                expected: ">INFO ",
            },
            TestCase {
                name: "truncate keeps trailing chars",
                info: FormattingInfo { max_length: 3, ..FormattingInfo::default() },
                field: "com.foo.Bar",
                expected: ">Bar",
            },
            TestCase {
                name: "right truncate keeps leading chars",
                info: FormattingInfo { max_length: 3, left_truncate: false, ..FormattingInfo::default() },
                field: "com.foo.Bar",
                expected: ">com",
            },
            TestCase {
                name: "truncation counts chars not bytes",
                info: FormattingInfo { max_length: 2, ..FormattingInfo::default() },
                field: "héé",
                expected: ">éé",
            },
        ];

        for case in test_cases {
            assert_eq!(apply(case.info, ">", case.field), case.expected, "case: {}", case.name);
        }
    }
}
