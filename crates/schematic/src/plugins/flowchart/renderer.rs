//! Flowchart renderer
//!
//! Nodes first, then connections, each in insertion order.

use super::database::{EdgeData, FlowchartDatabase, NodeData};
use crate::core::{fenced_block, Database, DiagramKind, NodeShape, Renderer};

/// Mermaid flowchart renderer
pub struct FlowchartRenderer;

impl FlowchartRenderer {
    pub fn new() -> Self {
        Self
    }

    fn node_line(node: &NodeData) -> String {
        match node.shape {
            NodeShape::Circle => format!("    {}((\"{}\"))\n", node.id, node.label),
            NodeShape::Diamond => format!("    {}{{{}}}\n", node.id, node.label),
            NodeShape::Rectangle => format!("    {}[\"{}\"]\n", node.id, node.label),
        }
    }

    fn edge_line(edge: &EdgeData) -> String {
        match edge.label.as_deref().filter(|label| !label.is_empty()) {
            Some(label) => format!(
                "    {} {}|{}| {}\n",
                edge.from, edge.edge_type, label, edge.to
            ),
            None => format!("    {} {} {}\n", edge.from, edge.edge_type, edge.to),
        }
    }
}

impl Default for FlowchartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer<FlowchartDatabase> for FlowchartRenderer {
    fn render(&self, database: &FlowchartDatabase) -> String {
        let mut body = String::new();
        for node in database.nodes() {
            body.push_str(&Self::node_line(node));
        }
        for edge in database.edges() {
            body.push_str(&Self::edge_line(edge));
        }
        fenced_block(DiagramKind::Flowchart, &body)
    }

    fn name(&self) -> &'static str {
        "mermaid-flowchart"
    }

    fn kind(&self) -> DiagramKind {
        DiagramKind::Flowchart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EdgeType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_node_shapes() {
        let mut db = FlowchartDatabase::new();
        db.add_node(NodeData::with_shape("start", "Start", NodeShape::Circle));
        db.add_node(NodeData::with_shape("ok", "Valid?", NodeShape::Diamond));
        db.add_node(NodeData::new("work", "Do work"));

        let expected = "```mermaid\nflowchart TD\n    start((\"Start\"))\n    ok{Valid?}\n    work[\"Do work\"]\n```";
        assert_eq!(FlowchartRenderer::new().render(&db), expected);
    }

    #[test]
    fn test_edge_styles_and_labels() {
        let mut db = FlowchartDatabase::new();
        db.add_edge(EdgeData::new("a", "b"));
        db.add_edge(EdgeData::with_label("b", "a", EdgeType::DottedArrow, "Retry"));
        db.add_edge(EdgeData::with_label("b", "c", EdgeType::Arrow, ""));

        let output = FlowchartRenderer::new().render(&db);
        assert!(output.contains("    a --> b\n"));
        assert!(output.contains("    b -.->|Retry| a\n"));
        assert!(output.contains("    b --> c\n"));
    }

    #[test]
    fn test_render_empty() {
        let output = FlowchartRenderer::new().render(&FlowchartDatabase::new());
        assert_eq!(output, "```mermaid\nflowchart TD\n```");
    }
}
