//!
//! The rule engine: an ordered list of rules folded over a pair of index-aligned buffers.

use crate::rule::{Rule, RuleError};

/// Transient state of a single `format` call.
///
/// `remainder` mirrors `result` byte for byte, except that every span already produced by a
/// rule is blanked out with spaces so later scans cannot match inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatState {
    pub result: String,
    pub remainder: String,
}

impl FormatState {
    pub fn new(input: &str) -> Self {
        let trimmed = input.trim();
        Self {
            result: trimmed.to_string(),
            remainder: trimmed.to_string(),
        }
    }
}

/// Applies an ordered set of formatting rules to an input string
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Rule>,
}

impl RuleEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule. `None` adds a whole-string rule, which must come last.
    pub fn add_rule<F>(&mut self, pattern: Option<&str>, handler: F) -> Result<(), RuleError>
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        let rule = match pattern {
            Some(pattern) => Rule::new(pattern, handler)?,
            None => Rule::whole_string(handler),
        };
        self.push(rule)
    }

    pub fn push(&mut self, rule: Rule) -> Result<(), RuleError> {
        if self.rules.last().is_some_and(Rule::is_whole_string) {
            return Err(RuleError::RuleAfterWholeString);
        }
        self.rules.push(rule);
        Ok(())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Format an input string according to all rules, in insertion order
    pub fn format(&self, input: &str) -> String {
        self.rules
            .iter()
            .fold(FormatState::new(input), |state, rule| rule.apply(state))
            .result
    }

    /// The initial state followed by the state after each rule
    pub fn trace(&self, input: &str) -> Vec<FormatState> {
        let mut states = Vec::with_capacity(self.rules.len() + 1);
        let mut state = FormatState::new(input);
        for rule in &self.rules {
            let next = rule.apply(state.clone());
            states.push(state);
            state = next;
        }
        states.push(state);
        states
    }
}
