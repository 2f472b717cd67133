//! Class diagram plugin
//!
//! Reads class-like snippets embedded in prose and draws their attributes
//! and methods as a Mermaid `classDiagram`.

mod database;
mod extractor;
mod renderer;

pub use database::{Attribute, ClassDatabase, ClassRelationship, ClassShape, Method, RelationshipKind};
pub use extractor::ClassExtractor;
pub use renderer::ClassRenderer;

use crate::core::{Category, Diagram, DiagramKind};

/// Class diagram implementation
pub struct ClassDiagram;

impl Diagram for ClassDiagram {
    type Database = ClassDatabase;
    type Extractor = ClassExtractor;
    type Renderer = ClassRenderer;

    fn create_extractor() -> Self::Extractor {
        ClassExtractor::new()
    }

    fn create_renderer() -> Self::Renderer {
        ClassRenderer::new()
    }

    fn kind() -> DiagramKind {
        DiagramKind::Class
    }

    fn category() -> Category {
        Category::Class
    }
}
