//! State diagram renderer
//!
//! Composite states render as nested blocks listing substate names verbatim.

use super::database::{State, StateDatabase, Transition};
use crate::core::{fenced_block, DiagramKind, Renderer};

/// Mermaid `stateDiagram-v2` renderer
pub struct StateRenderer;

impl StateRenderer {
    pub fn new() -> Self {
        Self
    }

    fn state_lines(state: &State) -> String {
        if !state.composite {
            return format!("    {}\n", state.name);
        }
        let mut lines = format!("    state {} {{\n", state.name);
        for substate in &state.substates {
            lines.push_str(&format!("        {}\n", substate));
        }
        lines.push_str("    }\n");
        lines
    }

    fn transition_line(transition: &Transition) -> String {
        match transition.label.as_deref().filter(|label| !label.is_empty()) {
            Some(label) => format!("    {} --> {}: {}\n", transition.from, transition.to, label),
            None => format!("    {} --> {}\n", transition.from, transition.to),
        }
    }
}

impl Default for StateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer<StateDatabase> for StateRenderer {
    fn render(&self, database: &StateDatabase) -> String {
        let mut body = String::new();
        for state in database.states() {
            body.push_str(&Self::state_lines(state));
        }
        for transition in database.transitions() {
            body.push_str(&Self::transition_line(transition));
        }
        fenced_block(DiagramKind::State, &body)
    }

    fn name(&self) -> &'static str {
        "mermaid-state"
    }

    fn kind(&self) -> DiagramKind {
        DiagramKind::State
    }
}
