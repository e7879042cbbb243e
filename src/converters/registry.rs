// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::Arc;

use super::equals;
use super::{
    ContextConverter, LevelConverter, LineSeparatorConverter, LoggerConverter, MessageConverter,
    ThreadConverter,
};
use crate::errors::ConverterError;
use crate::traits::{PatternCompiler, PatternConverter};

/// Builds a converter from its `{...}` options.
///
/// The compiler is the one parsing the enclosing pattern, so converters that
/// embed sub-patterns compile them with the same registry.
pub type ConverterFactory =
    fn(&[String], &dyn PatternCompiler) -> Result<Arc<dyn PatternConverter>, ConverterError>;

/// Maps conversion specifier keys (`logger`, `equals`, ...) to factories.
///
/// Registration is explicit: [`with_builtins`](Self::with_builtins) installs
/// the bundled converters and [`register`](Self::register) adds or replaces
/// entries before the registry is handed to a parser.
#[derive(Clone, Default)]
pub struct ConverterRegistry(HashMap<&'static str, ConverterFactory>);

impl ConverterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Registry with every built-in converter:
    /// - "equals" -> EqualsReplacementConverter (exactly 3 options)
    /// - "c", "logger" -> LoggerConverter (optional precision)
    /// - "p", "level" -> LevelConverter
    /// - "m", "msg", "message" -> MessageConverter
    /// - "t", "thread" -> ThreadConverter
    /// - "X", "mdc", "MDC" -> ContextConverter (optional key)
    /// - "n" -> LineSeparatorConverter
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.register(equals::EQUALS_KEY, equals::create);

        for key in ["c", "logger"] {
            registry.register(key, create_logger);
        }
        for key in ["p", "level"] {
            registry.register(key, create_level);
        }
        for key in ["m", "msg", "message"] {
            registry.register(key, create_message);
        }
        for key in ["t", "thread"] {
            registry.register(key, create_thread);
        }
        for key in ["X", "mdc", "MDC"] {
            registry.register(key, create_context);
        }
        registry.register("n", create_line_separator);

        registry
    }

    /// Add a factory, replacing any existing one under the same key
    pub fn register(&mut self, key: &'static str, factory: ConverterFactory) {
        self.0.insert(key, factory);
    }

    /// Build the converter registered under `key`
    pub fn create(
        &self,
        key: &str,
        options: &[String],
        compiler: &dyn PatternCompiler,
    ) -> Result<Arc<dyn PatternConverter>, ConverterError> {
        let factory = self.0.get(key).ok_or_else(|| ConverterError::UnknownConverter {
            key: key.to_string(),
        })?;
        factory(options, compiler)
    }

    /// Check if a key is registered
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Get all registered keys
    pub fn keys(&self) -> impl Iterator<Item = &&'static str> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<_> = self.0.keys().collect();
        keys.sort();
        f.debug_struct("ConverterRegistry")
            .field("converter_count", &self.0.len())
            .field("keys", &keys)
            .finish()
    }
}

fn create_logger(
    options: &[String],
    _compiler: &dyn PatternCompiler,
) -> Result<Arc<dyn PatternConverter>, ConverterError> {
    Ok(Arc::new(LoggerConverter::new(options)?))
}

fn create_level(
    _options: &[String],
    _compiler: &dyn PatternCompiler,
) -> Result<Arc<dyn PatternConverter>, ConverterError> {
    Ok(Arc::new(LevelConverter))
}

fn create_message(
    _options: &[String],
    _compiler: &dyn PatternCompiler,
) -> Result<Arc<dyn PatternConverter>, ConverterError> {
    Ok(Arc::new(MessageConverter))
}

fn create_thread(
    _options: &[String],
    _compiler: &dyn PatternCompiler,
) -> Result<Arc<dyn PatternConverter>, ConverterError> {
    Ok(Arc::new(ThreadConverter))
}

fn create_context(
    options: &[String],
    _compiler: &dyn PatternCompiler,
) -> Result<Arc<dyn PatternConverter>, ConverterError> {
    Ok(Arc::new(ContextConverter::new(options)))
}

fn create_line_separator(
    _options: &[String],
    _compiler: &dyn PatternCompiler,
) -> Result<Arc<dyn PatternConverter>, ConverterError> {
    Ok(Arc::new(LineSeparatorConverter))
}
