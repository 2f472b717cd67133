//! Flowchart database implementation
//!
//! Nodes are keyed by id and keep the position of their first insertion.

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::{Database, EdgeType, NodeShape};

/// A flowchart node with its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeData {
    /// Unique identifier for the node
    pub id: String,
    /// Display label
    pub label: String,
    /// Visual shape of the node
    pub shape: NodeShape,
}

impl NodeData {
    /// Create a new node with default rectangle shape
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_shape(id, label, NodeShape::Rectangle)
    }

    /// Create a new node with a specific shape
    pub fn with_shape(id: impl Into<String>, label: impl Into<String>, shape: NodeShape) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            shape,
        }
    }
}

/// A connection between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeData {
    /// Source node ID
    pub from: String,
    /// Target node ID
    pub to: String,
    /// Arrow style of the connection
    pub edge_type: EdgeType,
    /// Optional label on the connection
    pub label: Option<String>,
}

impl EdgeData {
    /// Create a new connection with the default arrow
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            edge_type: EdgeType::Arrow,
            label: None,
        }
    }

    /// Create a new connection with a label
    pub fn with_label(
        from: impl Into<String>,
        to: impl Into<String>,
        edge_type: EdgeType,
        label: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            edge_type,
            label: Some(label.into()),
        }
    }
}

/// Flowchart database
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlowchartDatabase {
    nodes: IndexMap<String, NodeData>,
    connections: Vec<EdgeData>,
}

impl FlowchartDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a node by id
    pub fn get_node(&self, id: &str) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// All connections in insertion order
    pub fn connections(&self) -> &[EdgeData] {
        &self.connections
    }
}

impl Database for FlowchartDatabase {
    type Node = NodeData;
    type Edge = EdgeData;

    fn add_node(&mut self, node: Self::Node) {
        self.nodes.insert(node.id.clone(), node);
    }

    fn add_edge(&mut self, edge: Self::Edge) {
        self.connections.push(edge);
    }

    fn nodes(&self) -> impl Iterator<Item = &Self::Node> {
        self.nodes.values()
    }

    fn edges(&self) -> impl Iterator<Item = &Self::Edge> {
        self.connections.iter()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.connections.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_ids_are_unique() {
        let mut db = FlowchartDatabase::new();
        db.add_node(NodeData::new("a", "First"));
        db.add_node(NodeData::new("b", "Second"));
        db.add_node(NodeData::with_shape("a", "Replaced", NodeShape::Circle));

        assert_eq!(db.node_count(), 2);
        let first = db.nodes().next().unwrap();
        assert_eq!(first.label, "Replaced");
        assert_eq!(first.shape, NodeShape::Circle);
    }

    #[test]
    fn test_edges_may_reference_unknown_nodes() {
        let mut db = FlowchartDatabase::new();
        db.add_edge(EdgeData::new("ghost", "phantom"));
        assert_eq!(db.edge_count(), 1);
        assert!(db.get_node("ghost").is_none());
    }

    #[test]
    fn test_edge_constructors() {
        let edge = EdgeData::new("a", "b");
        assert_eq!(edge.edge_type, EdgeType::Arrow);
        assert!(edge.label.is_none());

        let labeled = EdgeData::with_label("a", "b", EdgeType::DottedArrow, "No");
        assert_eq!(labeled.label.as_deref(), Some("No"));
        assert_eq!(labeled.edge_type, EdgeType::DottedArrow);
    }
}
