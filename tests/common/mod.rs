/// Shared helpers for formatter integration tests
use lavendeux_syntax::registry::FormatterRegistry;
use lavendeux_syntax::style::{Palette, StyleMode, Styler};
use lavendeux_syntax::{Language, RuleEngine};
use regex::Regex;

pub const COMMENT: &str = "#33cc33";
pub const STRING: &str = "#b1cbff";
pub const DATA: &str = "#6699ff";
pub const RADIX: &str = "#cc00cc";
pub const DECORATOR: &str = "#cc3300";
pub const FUNCTION: &str = "#ff9900";

/// Formatter for `language` with the default inline style
#[allow(dead_code)]
pub fn formatter(language: Language) -> RuleEngine {
    language.build(&Styler::default()).unwrap()
}

/// Formatter for `language` emitting class names instead of colours
#[allow(dead_code)]
pub fn class_formatter(language: Language) -> RuleEngine {
    language
        .build(&Styler::new(StyleMode::Class, Palette::default()))
        .unwrap()
}

#[allow(dead_code)]
pub fn registry() -> FormatterRegistry {
    FormatterRegistry::new(&Styler::default()).unwrap()
}

/// An inline-styled span of the given colour
#[allow(dead_code)]
pub fn span(color: &str, inner: &str) -> String {
    format!("<span style=\"color:{color}\">{inner}</span>")
}

/// Assert that `output` matches `pattern` somewhere
#[allow(dead_code)]
pub fn assert_matches(output: &str, pattern: &str) {
    let regex = Regex::new(pattern).unwrap();
    assert!(regex.is_match(output), "expected /{pattern}/ to match {output:?}");
}
