//! Ordered extraction rules
//!
//! An extractor is a table of rules. Each rule pairs a compiled pattern with
//! a builder that folds one match into the extraction state. Rules run in
//! table order and each rule visits its matches in document order, so the
//! resulting description is a pure function of the input text.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::trace;

/// A compiled pattern shared by every extraction pass
pub type Pattern = LazyLock<Regex>;

/// One (pattern, builder) pair
pub struct Rule<S> {
    /// Rule name, used in traces and tests
    pub name: &'static str,
    /// Pattern scanned over the whole input
    pub pattern: &'static Pattern,
    /// Folds a single match into the state
    pub build: fn(&mut S, &Captures<'_>),
}

impl<S> Rule<S> {
    /// Apply this rule to every non-overlapping match in `input`
    ///
    /// Returns the number of matches folded into `state`.
    pub fn apply(&self, input: &str, state: &mut S) -> usize {
        let mut matches = 0;
        for captures in self.pattern.captures_iter(input) {
            (self.build)(state, &captures);
            matches += 1;
        }
        matches
    }
}

/// Run a rule table over `input`, in table order
pub fn apply_rules<S>(rules: &[Rule<S>], input: &str, state: &mut S) {
    for rule in rules {
        let matches = rule.apply(input, state);
        trace!(rule = rule.name, matches, "Applied extraction rule");
    }
}

/// Text of capture group `index`, if it participated in the match
pub fn group<'h>(captures: &Captures<'h>, index: usize) -> Option<&'h str> {
    captures.get(index).map(|m| m.as_str())
}
