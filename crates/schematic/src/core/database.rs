//! Core database trait for diagram descriptions
//!
//! Each diagram kind stores what extraction found in its own database type.
//! Databases are filled during one extraction pass and only read afterwards.

/// Core trait for diagram databases
///
/// The associated types let each kind define its own node and edge
/// structures. Edges may reference ids that are not present as nodes;
/// databases never check referential integrity.
pub trait Database: Send + Sync {
    /// The node data type for this database
    type Node: Clone + Send + Sync;

    /// The edge data type for this database
    type Edge: Clone + Send + Sync;

    /// Add a node to the database
    fn add_node(&mut self, node: Self::Node);

    /// Add an edge to the database
    fn add_edge(&mut self, edge: Self::Edge);

    /// Iterate over all nodes in discovery order
    fn nodes(&self) -> impl Iterator<Item = &Self::Node>;

    /// Iterate over all edges in discovery order
    fn edges(&self) -> impl Iterator<Item = &Self::Edge>;

    /// Get the number of nodes
    fn node_count(&self) -> usize;

    /// Get the number of edges
    fn edge_count(&self) -> usize;

    /// True when no nodes were recorded
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}
