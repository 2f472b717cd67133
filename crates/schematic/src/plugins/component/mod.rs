//! Component diagram plugin
//!
//! Recognizes architecture descriptions in prose and draws them as C4
//! component diagrams.
//!
//! Recognized sentence shapes:
//! ```text
//! The service "Payment Gateway" is built using Stripe.
//! Checkout calls Payment via REST.
//! ```

mod database;
mod extractor;
mod renderer;

pub use database::{ComponentDatabase, Element, Relationship};
pub use extractor::ComponentExtractor;
pub use renderer::ComponentRenderer;

use crate::core::{Category, Diagram, DiagramKind};

/// Component diagram implementation
pub struct ComponentDiagram;

impl Diagram for ComponentDiagram {
    type Database = ComponentDatabase;
    type Extractor = ComponentExtractor;
    type Renderer = ComponentRenderer;

    fn create_extractor() -> Self::Extractor {
        ComponentExtractor::new()
    }

    fn create_renderer() -> Self::Renderer {
        ComponentRenderer::new()
    }

    fn kind() -> DiagramKind {
        DiagramKind::Component
    }

    fn category() -> Category {
        Category::Architecture
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::core::{Extractor, Renderer};

    #[test]
    fn test_full_pipeline() {
        let extractor = ComponentDiagram::create_extractor();
        let renderer = ComponentDiagram::create_renderer();

        let db = extractor
            .extract(r#"The service "Order API" runs using Rust. Web calls Order_api via HTTPS."#)
            .unwrap();
        let output = renderer.render(&db);

        assert!(output.starts_with("```mermaid\nC4Component\n"));
        assert!(output.contains(r#"Container(order_api, "Order API", "Rust", "Order API using Rust")"#));
        assert!(output.contains(r#"Rel(web, order_api, "uses", "HTTPS")"#));
        assert_eq!(renderer.kind(), ComponentDiagram::kind());
    }
}
