//! State diagram database
//!
//! Stores states and transitions in discovery order. Transitions are not
//! checked against the declared states.

use serde::Serialize;

use crate::core::Database;

/// A state, optionally composite with named substates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct State {
    pub name: String,
    pub composite: bool,
    pub substates: Vec<String>,
}

impl State {
    /// A plain state
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            composite: false,
            substates: Vec::new(),
        }
    }

    /// A composite state listing its substates
    pub fn composite<I, S>(name: impl Into<String>, substates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            composite: true,
            substates: substates.into_iter().map(Into::into).collect(),
        }
    }
}

/// A transition between two states
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub from: String,
    pub to: String,
    pub label: Option<String>,
}

impl Transition {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
        }
    }

    pub fn with_label(
        from: impl Into<String>,
        to: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: Some(label.into()),
        }
    }
}

/// State diagram database
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StateDatabase {
    states: Vec<State>,
    transitions: Vec<Transition>,
}

impl StateDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state
    pub fn add_state(&mut self, state: State) {
        self.states.push(state);
    }

    /// Add a transition
    pub fn add_transition(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }

    /// Get all states
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Get all transitions
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Get state index by name
    pub fn state_index(&self, name: &str) -> Option<usize> {
        self.states.iter().position(|s| s.name == name)
    }
}

impl Database for StateDatabase {
    type Node = State;
    type Edge = Transition;

    fn add_node(&mut self, node: Self::Node) {
        self.add_state(node)
    }

    fn add_edge(&mut self, edge: Self::Edge) {
        self.add_transition(edge)
    }

    fn nodes(&self) -> impl Iterator<Item = &Self::Node> {
        self.states.iter()
    }

    fn edges(&self) -> impl Iterator<Item = &Self::Edge> {
        self.transitions.iter()
    }

    fn node_count(&self) -> usize {
        self.states.len()
    }

    fn edge_count(&self) -> usize {
        self.transitions.len()
    }
}
