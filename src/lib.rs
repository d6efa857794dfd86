//! Rule-based syntax highlighting for Lavendeux help samples.
//!
//! A [`RuleEngine`] applies an ordered list of regex rules to a code sample, turning it into
//! HTML. Each rule scans a shadow copy of the text in which everything already replaced is
//! blanked out, so no rule ever matches inside markup produced by an earlier one.
//!
//! Language pipelines live in [`languages`], the tag lookup in [`registry`], and the JSON
//! sample documents rendered by the help view in [`sample`].

pub mod config;
pub mod engine;
pub mod exit_codes;
pub mod languages;
pub mod registry;
pub mod rule;
pub mod sample;
pub mod style;

pub use engine::{FormatState, RuleEngine};
pub use languages::Language;
pub use registry::FormatterRegistry;
pub use rule::{Rule, RuleError};
pub use sample::{Sample, SampleCatalog, SampleError};
pub use style::{Category, Palette, StyleMode, Styler};
