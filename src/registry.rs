//! Formatter registry for language lookup
//!
//! Maps language tags to formatter instances. Lookup never fails: any tag without a
//! registered formatter resolves to the default Lavendeux formatter.

use std::collections::HashMap;

use crate::engine::RuleEngine;
use crate::languages::Language;
use crate::rule::RuleError;
use crate::style::Styler;

/// Registry of language formatters
///
/// # Examples
///
/// ```
/// use lavendeux_syntax::registry::FormatterRegistry;
/// use lavendeux_syntax::style::Styler;
///
/// let registry = FormatterRegistry::new(&Styler::default()).unwrap();
/// let html = registry.get("javascript").format("return 0x5");
/// assert!(html.starts_with("<pre"));
/// ```
#[derive(Debug, Clone)]
pub struct FormatterRegistry {
    fallback: RuleEngine,
    formatters: HashMap<String, RuleEngine>,
}

impl FormatterRegistry {
    /// Create a registry holding every built-in language
    pub fn new(styler: &Styler) -> Result<Self, RuleError> {
        let mut registry = FormatterRegistry {
            fallback: Language::DEFAULT.build(styler)?,
            formatters: HashMap::new(),
        };

        for language in Language::ALL {
            if language != Language::DEFAULT {
                registry.register(language.name(), language.build(styler)?);
            }
        }

        Ok(registry)
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced. Registering the
    /// default language replaces the fallback.
    pub fn register(&mut self, name: &str, engine: RuleEngine) {
        if name == Language::DEFAULT.name() {
            self.fallback = engine;
        } else {
            self.formatters.insert(name.to_string(), engine);
        }
    }

    /// Get a formatter by language tag, falling back to the default language
    pub fn get(&self, name: &str) -> &RuleEngine {
        match self.formatters.get(name) {
            Some(engine) => engine,
            None => {
                if name != Language::DEFAULT.name() {
                    log::debug!("No formatter for '{name}', using {}", Language::DEFAULT);
                }
                &self.fallback
            }
        }
    }

    /// Check if a formatter is registered under exactly this tag
    pub fn has(&self, name: &str) -> bool {
        name == Language::DEFAULT.name() || self.formatters.contains_key(name)
    }

    /// List all registered language tags (sorted)
    pub fn languages(&self) -> Vec<String> {
        let mut names: Vec<String> = self.formatters.keys().cloned().collect();
        names.push(Language::DEFAULT.name().to_string());
        names.sort();
        names
    }
}
