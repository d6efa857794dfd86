//!
//! Built-in language pipelines. Each language is a fixed, ordered list of rules; the order is
//! part of the contract, since earlier rules shadow the text later rules must not see.

mod javascript;
mod lavendeux;

pub use javascript::javascript;
pub use lavendeux::lavendeux;

use std::fmt;

use crate::engine::RuleEngine;
use crate::rule::{Rule, RuleError};
use crate::style::{Category, Styler};

pub(crate) const LINE_COMMENT: &str = r"(?m)//.*?$";
pub(crate) const BLOCK_COMMENT: &str = r"(?s)/\*.*?\*/";
pub(crate) const FUNCTION_OPEN: &str = r"[0-9A-Za-z_]+\(";
pub(crate) const CLOSING_PAREN: &str = r"\)";
pub(crate) const STRING: &str = r#"(?:"(?:\\.|[^"']|')*?")|(?:'(?:\\.|[^"']|")*?')"#;
pub(crate) const RADIX: &str = r"(?<![0-9.,$¥€£])0[xXbBoO]?[a-zA-Z0-9]+";
pub(crate) const DATA: &str = r"[$¥€£0-9A-Za-z._,]+(?:[eE]?[-+]?[0-7])?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Lavendeux,
    Javascript,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Lavendeux, Language::Javascript];

    /// Used for any unrecognized language tag
    pub const DEFAULT: Language = Language::Lavendeux;

    pub fn name(self) -> &'static str {
        match self {
            Language::Lavendeux => "lavendeux",
            Language::Javascript => "javascript",
        }
    }

    /// Exact, case-sensitive lookup
    pub fn from_name(name: &str) -> Option<Self> {
        Language::ALL.into_iter().find(|language| language.name() == name)
    }

    pub fn build(self, styler: &Styler) -> Result<RuleEngine, RuleError> {
        match self {
            Language::Lavendeux => lavendeux(styler),
            Language::Javascript => javascript(styler),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A rule wrapping each match in a closed span of the given category
pub(crate) fn span_rule(pattern: &str, styler: &Styler, category: Category) -> Result<Rule, RuleError> {
    let styler = styler.clone();
    Rule::new(pattern, move |s| styler.span(s, category))
}

pub(crate) fn function_open_rule(styler: &Styler) -> Result<Rule, RuleError> {
    let styler = styler.clone();
    Rule::new(FUNCTION_OPEN, move |s| styler.open_span(s, Category::Function))
}

pub(crate) fn closing_paren_rule(styler: &Styler) -> Result<Rule, RuleError> {
    let styler = styler.clone();
    Rule::new(CLOSING_PAREN, move |s| styler.close_span(s))
}

pub(crate) fn outer_rule(styler: &Styler) -> Rule {
    let styler = styler.clone();
    Rule::whole_string(move |s| styler.outer(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(Language::from_name("lavendeux"), Some(Language::Lavendeux));
        assert_eq!(Language::from_name("javascript"), Some(Language::Javascript));
        assert_eq!(Language::from_name("JavaScript"), None);
        assert_eq!(Language::from_name(""), None);
    }

    #[test]
    fn test_every_language_builds() {
        let styler = Styler::default();
        for language in Language::ALL {
            let engine = language.build(&styler).unwrap();
            assert!(engine.rules().last().unwrap().is_whole_string(), "{language}");
        }
    }
}
