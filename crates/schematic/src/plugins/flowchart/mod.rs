//! Flowchart diagram plugin
//!
//! Turns numbered steps and "if ..., then ..." decisions found in prose into
//! a top-down Mermaid flowchart.
//!
//! Recognized sentence shapes:
//! ```text
//! Step 1: Receive the upload.
//! Stage 2: Scan for viruses.
//! If the file is infected, then quarantine it.
//! ```

mod database;
mod extractor;
mod renderer;

pub use database::{EdgeData, FlowchartDatabase, NodeData};
pub use extractor::FlowchartExtractor;
pub use renderer::FlowchartRenderer;

use crate::core::{Category, Diagram, DiagramKind};

/// Flowchart diagram implementation
pub struct FlowchartDiagram;

impl Diagram for FlowchartDiagram {
    type Database = FlowchartDatabase;
    type Extractor = FlowchartExtractor;
    type Renderer = FlowchartRenderer;

    fn create_extractor() -> Self::Extractor {
        FlowchartExtractor::new()
    }

    fn create_renderer() -> Self::Renderer {
        FlowchartRenderer::new()
    }

    fn kind() -> DiagramKind {
        DiagramKind::Flowchart
    }

    fn category() -> Category {
        Category::Workflow
    }
}
