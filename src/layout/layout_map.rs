// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::Config;
use crate::layout::PatternLayout;
use crate::pattern::PatternParser;

/// Compiled layouts keyed by their configured ID.
///
/// Layouts are wrapped in `Arc` so callers can hand them to worker threads
/// without cloning the compiled chains.
#[derive(Debug, Clone, Default)]
pub struct LayoutMap(pub HashMap<String, Arc<PatternLayout>>);

impl LayoutMap {
    /// Create a new empty layout map
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Compile every layout in the configuration.
    ///
    /// Pattern problems never abort the build: a bad specifier is logged and
    /// rendered as literal text by the parser.
    pub fn from_config(cfg: &Config, parser: &PatternParser) -> Self {
        let layouts = cfg
            .layouts
            .iter()
            .map(|l| {
                let layout = PatternLayout::new(l.id.clone(), &l.pattern, parser);
                (l.id.clone(), Arc::new(layout))
            })
            .collect();

        Self(layouts)
    }

    /// Insert a layout under its own ID
    pub fn insert(&mut self, layout: PatternLayout) {
        self.0.insert(layout.id().to_string(), Arc::new(layout));
    }

    /// Get a layout by ID
    pub fn get(&self, id: &str) -> Option<&Arc<PatternLayout>> {
        self.0.get(id)
    }

    /// Check if a layout exists
    pub fn contains_key(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Get all layout IDs
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, Arc<PatternLayout>>> for LayoutMap {
    fn from(map: HashMap<String, Arc<PatternLayout>>) -> Self {
        Self(map)
    }
}

impl From<LayoutMap> for HashMap<String, Arc<PatternLayout>> {
    fn from(map: LayoutMap) -> Self {
        map.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::event::{Level, LogEvent};

    fn layout_config(id: &str, pattern: &str) -> LayoutConfig {
        LayoutConfig {
            id: id.to_string(),
            pattern: pattern.to_string(),
            description: None,
        }
    }

    #[test]
    fn test_from_config_table_driven() {
        struct TestCase {
            name: &'static str,
            config: Config,
            expected_ids: Vec<&'static str>,
        }

        let test_cases = vec![
            TestCase {
                name: "empty config",
                config: Config { layouts: vec![] },
                expected_ids: vec![],
            },
            TestCase {
                name: "single layout",
                config: Config {
                    layouts: vec![layout_config("console", "%msg")],
                },
                expected_ids: vec!["console"],
            },
            TestCase {
                name: "several layouts",
                config: Config {
                    layouts: vec![
                        layout_config("console", "%msg"),
                        layout_config("audit", "%equals{%logger}{audit}{AUDIT}"),
                        layout_config("broken", "%equals{x}"),
                    ],
                },
                expected_ids: vec!["audit", "broken", "console"],
            },
        ];

        let parser = PatternParser::with_builtins();
        for case in test_cases {
            let layouts = LayoutMap::from_config(&case.config, &parser);

            let mut ids: Vec<&str> = layouts.keys().map(String::as_str).collect();
            ids.sort();
            assert_eq!(ids, case.expected_ids, "case: {}", case.name);
            assert_eq!(layouts.len(), case.expected_ids.len(), "case: {}", case.name);
        }
    }

    #[test]
    fn test_insert_and_get() {
        let parser = PatternParser::with_builtins();
        let mut layouts = LayoutMap::new();
        assert!(layouts.is_empty());

        layouts.insert(PatternLayout::new("short", "%level", &parser));

        assert!(layouts.contains_key("short"));
        let layout = layouts.get("short").unwrap();
        assert_eq!(layout.format(&LogEvent::new("app", Level::Debug, "")), "DEBUG");
    }
}
