//! Schematic - Extract diagrams from technical prose
//!
//! A library that recognizes architecture, workflow, state-machine and class
//! descriptions in free-form text and renders them as Mermaid diagrams.
//!
//! # Quick Start
//!
//! ```rust
//! use schematic::{extract, render, Category};
//!
//! let text = r#"The service "Billing" is built using Go. Step 1: Charge the card."#;
//! let bundle = extract(text);
//!
//! assert_eq!(bundle.categories(), vec![Category::Architecture, Category::Workflow]);
//!
//! let workflow = bundle.get(Category::Workflow).unwrap();
//! let markup = render("flowchart", workflow).unwrap();
//! assert!(markup.starts_with("```mermaid\nflowchart TD\n"));
//! ```
//!
//! # Advanced Usage
//!
//! Each diagram kind can be driven on its own:
//!
//! ```rust
//! use schematic::prelude::*;
//!
//! let db = StateExtractor::new()
//!     .extract("status: Draft\nstatus: Published\n")
//!     .unwrap();
//! assert_eq!(db.node_count(), 2);
//!
//! let markup = StateRenderer::new().render(&db);
//! assert!(markup.contains("    Draft\n"));
//! ```

pub mod core;
pub mod plugins;

pub use core::*;
pub use plugins::{
    ContentAnalyzer, DiagramBundle, DiagramDescription, DiagramRenderer, DocumentComposer,
    DocumentOptions,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Category, Database, Diagram, DiagramError, DiagramKind, EdgeType, Extractor, NodeShape,
        Renderer, Visibility,
    };
    pub use crate::plugins::class::{ClassDatabase, ClassDiagram, ClassExtractor, ClassRenderer};
    pub use crate::plugins::component::{
        ComponentDatabase, ComponentDiagram, ComponentExtractor, ComponentRenderer,
    };
    pub use crate::plugins::flowchart::{
        FlowchartDatabase, FlowchartDiagram, FlowchartExtractor, FlowchartRenderer,
    };
    pub use crate::plugins::state::{StateDatabase, StateDiagram, StateExtractor, StateRenderer};
    pub use crate::plugins::{
        ContentAnalyzer, DiagramBundle, DiagramDescription, DiagramRenderer, DocumentComposer,
        DocumentOptions,
    };
}

/// Extract every recognizable diagram from `content`
///
/// Never fails. When nothing is recognized the built-in example bundle is
/// returned, see [`DiagramBundle::is_fallback`].
///
/// # Example
/// ```rust
/// use schematic::extract;
///
/// let bundle = extract("");
/// assert!(bundle.is_fallback());
/// assert_eq!(bundle.len(), 4);
/// ```
pub fn extract(content: &str) -> DiagramBundle {
    ContentAnalyzer::new().extract(content)
}

/// Render a description as the diagram kind named by `kind`
///
/// # Arguments
/// * `kind` - One of `component`, `flowchart`, `state` or `class`
/// * `description` - The payload to draw
///
/// # Returns
/// * `Ok(String)` - A fenced Mermaid block
/// * `Err(DiagramError::UnsupportedKind)` - If `kind` is not recognized
///
/// # Example
/// ```rust
/// use schematic::{extract, render, Category, DiagramError};
///
/// let bundle = extract("");
/// let classes = bundle.get(Category::Class).unwrap();
///
/// assert!(render("class", classes).unwrap().contains("classDiagram"));
/// assert!(matches!(
///     render("gantt", classes),
///     Err(DiagramError::UnsupportedKind { .. })
/// ));
/// ```
pub fn render(kind: &str, description: &DiagramDescription) -> Result<String, DiagramError> {
    DiagramRenderer::new().render(kind, description)
}

/// Render a description as `kind`
///
/// A description of another kind renders as an empty block of `kind`.
pub fn render_kind(kind: DiagramKind, description: &DiagramDescription) -> String {
    DiagramRenderer::new().render_kind(kind, description)
}

/// Extract diagrams from `content` and append them to it as markdown sections
///
/// # Example
/// ```rust
/// use schematic::embed;
///
/// let document = embed("status: Open\nstatus: Closed\n");
/// assert!(document.contains("## State Machine\n\n```mermaid\nstateDiagram-v2\n"));
/// ```
pub fn embed(content: &str) -> String {
    let bundle = extract(content);
    DocumentComposer::default().compose(content, &bundle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_and_render_workflow() {
        let bundle = extract("Phase 1: Plan\nPhase 2: Build\n");
        let workflow = bundle.get(Category::Workflow).unwrap();
        let output = render("flowchart", workflow).unwrap();
        assert!(output.contains("    step_0 --> step_1\n"));
    }

    #[test]
    fn test_render_kind_matches_render() {
        let bundle = extract("");
        for (category, description) in bundle.iter() {
            assert_eq!(
                render(category.kind().as_str(), description).unwrap(),
                render_kind(category.kind(), description)
            );
        }
    }

    #[test]
    fn test_embed_without_structure_uses_examples() {
        let document = embed("Plain words.");
        assert!(document.starts_with("Plain words.\n\n## System Architecture\n"));
        assert!(document.ends_with("```\n"));
    }
}
