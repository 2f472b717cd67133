//! Component diagram database
//!
//! Stores containers, components and the relationships between them.

use serde::Serialize;

use crate::core::Database;

/// A container or component box
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub id: String,
    pub name: String,
    pub tech: String,
    pub description: String,
}

impl Element {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        tech: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tech: tech.into(),
            description: description.into(),
        }
    }
}

/// A labelled dependency between two elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relationship {
    pub from: String,
    pub to: String,
    pub label: String,
    pub tech: String,
}

impl Relationship {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        label: impl Into<String>,
        tech: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: label.into(),
            tech: tech.into(),
        }
    }
}

/// Component diagram database
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComponentDatabase {
    containers: Vec<Element>,
    components: Vec<Element>,
    relationships: Vec<Relationship>,
}

impl ComponentDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_container(&mut self, container: Element) {
        self.containers.push(container);
    }

    pub fn add_component(&mut self, component: Element) {
        self.components.push(component);
    }

    pub fn add_relationship(&mut self, relationship: Relationship) {
        self.relationships.push(relationship);
    }

    pub fn containers(&self) -> &[Element] {
        &self.containers
    }

    pub fn components(&self) -> &[Element] {
        &self.components
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }
}

impl Database for ComponentDatabase {
    type Node = Element;
    type Edge = Relationship;

    fn add_node(&mut self, node: Self::Node) {
        self.add_container(node)
    }

    fn add_edge(&mut self, edge: Self::Edge) {
        self.add_relationship(edge)
    }

    fn nodes(&self) -> impl Iterator<Item = &Self::Node> {
        self.containers.iter().chain(self.components.iter())
    }

    fn edges(&self) -> impl Iterator<Item = &Self::Edge> {
        self.relationships.iter()
    }

    fn node_count(&self) -> usize {
        self.containers.len() + self.components.len()
    }

    fn edge_count(&self) -> usize {
        self.relationships.len()
    }
}
