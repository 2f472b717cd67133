//! State diagram plugin
//!
//! Turns "state: X" declarations and "when ..., move from A to B" sentences
//! into a Mermaid `stateDiagram-v2`.
//!
//! Recognized sentence shapes:
//! ```text
//! State: Idle.
//! Status: Processing contains Validating, Executing.
//! When a job arrives, transition from Idle to Processing.
//! ```

mod database;
mod extractor;
mod renderer;

pub use database::{State, StateDatabase, Transition};
pub use extractor::StateExtractor;
pub use renderer::StateRenderer;

use crate::core::{Category, Diagram, DiagramKind};

/// State diagram implementation
pub struct StateDiagram;

impl Diagram for StateDiagram {
    type Database = StateDatabase;
    type Extractor = StateExtractor;
    type Renderer = StateRenderer;

    fn create_extractor() -> Self::Extractor {
        StateExtractor::new()
    }

    fn create_renderer() -> Self::Renderer {
        StateRenderer::new()
    }

    fn kind() -> DiagramKind {
        DiagramKind::State
    }

    fn category() -> Category {
        Category::StateMachine
    }
}
