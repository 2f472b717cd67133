//! State machine extractor
//!
//! Transitions without an explicit source state are dropped rather than
//! guessed.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::{debug, span, trace, Level};

use super::database::{State, StateDatabase, Transition};
use crate::core::{apply_rules, group, Database, Extractor, Pattern, Rule};

// The name is matched lazily so an optional "contains" clause can split off
// the substates before the sentence ends.
static STATE_PATTERN: Pattern = LazyLock::new(|| {
    Regex::new(r"(?i)(?:state|status):\s*([^\n.]+?)(?:\s+contains\s+([^\n.]+))?\s*(?:[\n.]|$)")
        .expect("valid state pattern")
});

static TRANSITION_PATTERN: Pattern = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:when|if)\s+([^\n,]+)\s*,?\s*(?:then)?\s+(?:transition|move|go)\s+(?:from\s+([^\n]+)\s+)?to\s+([^\n.]+)",
    )
    .expect("valid transition pattern")
});

static RULES: [Rule<StateDatabase>; 2] = [
    Rule {
        name: "state",
        pattern: &STATE_PATTERN,
        build: build_state,
    },
    Rule {
        name: "transition",
        pattern: &TRANSITION_PATTERN,
        build: build_transition,
    },
];

fn build_state(database: &mut StateDatabase, captures: &Captures<'_>) {
    let Some(name) = group(captures, 1) else {
        return;
    };
    let state = match group(captures, 2) {
        Some(substates) => State::composite(name.trim(), substates.split(',').map(str::trim)),
        None => State::new(name.trim()),
    };
    database.add_state(state);
}

fn build_transition(database: &mut StateDatabase, captures: &Captures<'_>) {
    let (Some(trigger), Some(to)) = (group(captures, 1), group(captures, 3)) else {
        return;
    };
    let Some(from) = group(captures, 2) else {
        trace!(to = to.trim(), "Dropping transition without a source state");
        return;
    };
    database.add_transition(Transition::with_label(from.trim(), to.trim(), trigger.trim()));
}

/// State machine extractor
pub struct StateExtractor;

impl StateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor<StateDatabase> for StateExtractor {
    fn extract(&self, input: &str) -> Option<StateDatabase> {
        let extract_span = span!(Level::DEBUG, "extract_state_machine", input_len = input.len());
        let _enter = extract_span.enter();

        let mut database = StateDatabase::new();
        apply_rules(&RULES, input, &mut database);

        if database.is_empty() {
            debug!("No states found");
            return None;
        }

        debug!(
            states = database.node_count(),
            transitions = database.edge_count(),
            "Extracted state machine"
        );
        Some(database)
    }

    fn name(&self) -> &'static str {
        "state_machine"
    }

    fn rule_names(&self) -> Vec<&'static str> {
        RULES.iter().map(|rule| rule.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(input: &str) -> Option<StateDatabase> {
        StateExtractor::new().extract(input)
    }

    #[test]
    fn test_simple_states() {
        let db = extract("State: Idle\nstatus:   Running  \nSTATE: Done").unwrap();
        let names: Vec<_> = db.states().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Idle", "Running", "Done"]);
        assert!(db.states().iter().all(|s| !s.composite));
    }

    #[test]
    fn test_composite_state() {
        let db = extract("Status: Processing contains Validating ,Authenticating, Executing.").unwrap();
        let state = &db.states()[0];
        assert_eq!(state.name, "Processing");
        assert!(state.composite);
        assert_eq!(
            state.substates,
            vec!["Validating", "Authenticating", "Executing"]
        );
    }

    #[test]
    fn test_transition_with_source() {
        let input = "State: Pending\nWhen the payment clears, move from Pending to Paid.";
        let db = extract(input).unwrap();
        assert_eq!(db.transitions().len(), 1);
        let transition = &db.transitions()[0];
        assert_eq!(transition.from, "Pending");
        assert_eq!(transition.to, "Paid");
        assert_eq!(transition.label.as_deref(), Some("the payment clears"));
    }

    #[test]
    fn test_transition_without_source_is_dropped() {
        let db = extract("State: Failed\nwhen error occurs, transition to Failed").unwrap();
        assert_eq!(db.states().len(), 1);
        assert!(db.transitions().is_empty());
    }

    #[test]
    fn test_transitions_alone_do_not_make_a_category() {
        assert!(extract("If it rains, go from Outside to Inside").is_none());
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(StateExtractor::new().rule_names(), vec!["state", "transition"]);
    }
}
