//!
//! This module defines a formatting rule: a pattern paired with a handler that produces the
//! replacement markup for each match. Applying a rule is one step of the engine's pipeline.

use fancy_regex::Regex;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::engine::FormatState;

/// Produces the replacement text for a matched span
pub type Handler = Arc<dyn Fn(&str) -> String + Send + Sync>;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Invalid rule pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },
    #[error("A whole-string rule must be the last rule of a pipeline")]
    RuleAfterWholeString,
}

/// What a rule searches for
#[derive(Clone)]
pub enum Pattern {
    Regex(Regex),
    /// Applied once to the entire accumulated result
    WholeString,
}

#[derive(Clone)]
pub struct Rule {
    pattern: Pattern,
    handler: Handler,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pattern {
            Pattern::Regex(regex) => f.debug_struct("Rule").field("pattern", &regex.as_str()).finish(),
            Pattern::WholeString => f.debug_struct("Rule").field("pattern", &"<whole string>").finish(),
        }
    }
}

impl Rule {
    /// Compile `pattern` into a rule. Fails fast on an invalid expression.
    pub fn new<F>(pattern: &str, handler: F) -> Result<Self, RuleError>
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        let regex = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            source: Box::new(source),
        })?;
        Ok(Self {
            pattern: Pattern::Regex(regex),
            handler: Arc::new(handler),
        })
    }

    pub fn whole_string<F>(handler: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            pattern: Pattern::WholeString,
            handler: Arc::new(handler),
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn is_whole_string(&self) -> bool {
        matches!(self.pattern, Pattern::WholeString)
    }

    /// Apply this rule to a format state.
    ///
    /// Matches are searched for in the remainder buffer. The handler receives the result text
    /// at the matched range, so a match spanning earlier replacements wraps their markup
    /// instead of discarding it. Each match is replaced in the result
    /// buffer by the handler's output and in the remainder by as many spaces as the
    /// replacement is long, so both buffers keep the same length. Scanning resumes right
    /// after the inserted replacement.
    pub fn apply(&self, state: FormatState) -> FormatState {
        let regex = match &self.pattern {
            Pattern::Regex(regex) => regex,
            Pattern::WholeString => {
                let result = (self.handler)(&state.result);
                return FormatState {
                    remainder: result.clone(),
                    result,
                };
            }
        };

        let FormatState {
            mut result,
            mut remainder,
        } = state;
        let mut cursor = 0;

        while cursor <= remainder.len() {
            let found = match regex.find_from_pos(&remainder, cursor) {
                Ok(Some(found)) => found,
                Ok(None) => break,
                Err(e) => {
                    log::warn!("Rule `{}` stopped scanning at byte {cursor}: {e}", regex.as_str());
                    break;
                }
            };
            let (start, end) = (found.start(), found.end());

            // The match edge landed inside multi-byte markup of an earlier replacement
            if !result.is_char_boundary(start) || !result.is_char_boundary(end) {
                log::trace!("Skipping match {start}..{end} of `{}`", regex.as_str());
                cursor = if end > start { end } else { next_char_boundary(&remainder, start) };
                continue;
            }

            // The result slice keeps markup of earlier rules that the remainder only shows as spaces
            let replacement = (self.handler)(&result[start..end]);
            let shadow = " ".repeat(replacement.len());

            result.replace_range(start..end, &replacement);
            remainder.replace_range(start..end, &shadow);
            debug_assert_eq!(result.len(), remainder.len());

            cursor = if start == end && replacement.is_empty() {
                next_char_boundary(&remainder, start)
            } else {
                start + replacement.len()
            };
        }

        FormatState { result, remainder }
    }
}

/// First character boundary strictly after `index`, or one past the end
fn next_char_boundary(s: &str, index: usize) -> usize {
    let mut next = index + 1;
    while next < s.len() && !s.is_char_boundary(next) {
        next += 1;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap_a(s: &str) -> String {
        format!("A{s}A")
    }

    #[test]
    fn test_invalid_pattern_fails_fast() {
        let err = Rule::new("(unclosed", wrap_a).unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
    }

    #[test]
    fn test_apply_shadows_replacements() {
        let rule = Rule::new("test", wrap_a).unwrap();
        let state = rule.apply(FormatState::new("footesttesttestbar"));
        assert_eq!(state.result, "fooAtestAAtestAAtestAbar");
        assert_eq!(state.remainder, "foo                  bar");
    }

    #[test]
    fn test_apply_does_not_rematch_embedded_text() {
        // The handler embeds the match, which would match again without the cursor jump
        let rule = Rule::new("ab", |s: &str| format!("{s}{s}")).unwrap();
        let state = rule.apply(FormatState::new("ab ab"));
        assert_eq!(state.result, "abab abab");
    }

    #[test]
    fn test_match_across_replacement_keeps_its_markup() {
        let inner = Rule::new("b", |s: &str| format!("[{s}]")).unwrap();
        let outer = Rule::new("a +c", |s: &str| format!("<{s}>")).unwrap();
        let state = outer.apply(inner.apply(FormatState::new("abc")));
        assert_eq!(state.result, "<a[b]c>");
        assert_eq!(state.remainder, "       ");
    }

    #[test]
    fn test_whole_string_rule_replaces_both_buffers() {
        let rule = Rule::whole_string(|s: &str| format!("[{s}]"));
        let mut state = FormatState::new("x");
        state.remainder = " ".to_string();
        let state = rule.apply(state);
        assert_eq!(state.result, "[x]");
        assert_eq!(state.remainder, "[x]");
        assert!(rule.is_whole_string());
    }

    #[test]
    fn test_empty_matches_terminate() {
        let rule = Rule::new("x*", |_: &str| String::new()).unwrap();
        let state = rule.apply(FormatState::new("abc"));
        assert_eq!(state.result, "abc");
        assert_eq!(state.result.len(), state.remainder.len());
    }

    #[test]
    fn test_lookbehind_sees_text_before_cursor() {
        let rule = Rule::new("(?<![0-9])0[0-9]+", |s: &str| format!("<{s}>")).unwrap();
        let state = rule.apply(FormatState::new("07 107 007"));
        assert_eq!(state.result, "<07> 107 <007>");
    }

    #[test]
    fn test_multibyte_text_stays_aligned() {
        let rule = Rule::new("[¥0-9]+", |s: &str| format!("<{s}>")).unwrap();
        let state = rule.apply(FormatState::new("¥1 € ¥2"));
        assert_eq!(state.result, "<¥1> € <¥2>");
        assert_eq!(state.result.len(), state.remainder.len());
    }

    #[test]
    fn test_debug_shows_pattern() {
        let rule = Rule::new("abc", wrap_a).unwrap();
        assert!(format!("{rule:?}").contains("abc"));
        assert!(format!("{:?}", Rule::whole_string(wrap_a)).contains("whole string"));
    }
}
