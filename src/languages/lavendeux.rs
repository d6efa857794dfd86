use crate::engine::RuleEngine;
use crate::rule::RuleError;
use crate::style::{Category, Styler};

use super::{
    BLOCK_COMMENT, DATA, LINE_COMMENT, RADIX, STRING, closing_paren_rule, function_open_rule, outer_rule,
    span_rule,
};

const DECORATOR: &str = r"@[0-9A-Za-z_]+";

/// Formatter for Lavendeux expressions
pub fn lavendeux(styler: &Styler) -> Result<RuleEngine, RuleError> {
    let mut engine = RuleEngine::new();

    // Comments
    engine.push(span_rule(LINE_COMMENT, styler, Category::Comment)?)?;
    engine.push(span_rule(BLOCK_COMMENT, styler, Category::Comment)?)?;

    // Functions and decorators
    engine.push(span_rule(DECORATOR, styler, Category::Decorator)?)?;
    engine.push(function_open_rule(styler)?)?;
    engine.push(closing_paren_rule(styler)?)?;

    // Values and strings
    engine.push(span_rule(STRING, styler, Category::String)?)?;
    engine.push(span_rule(RADIX, styler, Category::Radix)?)?;
    engine.push(span_rule(DATA, styler, Category::Data)?)?;

    engine.push(outer_rule(styler))?;
    Ok(engine)
}
