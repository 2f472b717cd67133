//! Core renderer trait for diagram markup
//!
//! Renderers turn a description into a fenced Mermaid block. Interpolation is
//! direct: names and labels are not escaped.

use super::{Database, DiagramKind};

/// Language tag on every fenced block
pub const FENCE_LANGUAGE: &str = "mermaid";

/// Core trait for diagram renderers
///
/// Rendering a recognized kind never fails, even for an empty description.
///
/// # Example
/// ```
/// use schematic::core::Renderer;
/// use schematic::plugins::state::{StateDatabase, StateRenderer};
///
/// let output = StateRenderer::new().render(&StateDatabase::new());
/// assert_eq!(output, "```mermaid\nstateDiagram-v2\n```");
/// ```
pub trait Renderer<D: Database>: Send + Sync {
    /// Render the database into a fenced markup block
    fn render(&self, database: &D) -> String;

    /// Get the name of this renderer
    fn name(&self) -> &'static str;

    /// The diagram kind this renderer emits
    fn kind(&self) -> DiagramKind;
}

/// Wrap a rendered body in a fenced block opened by the kind's declaration
///
/// `body` is expected to be empty or a sequence of newline-terminated lines.
pub fn fenced_block(kind: DiagramKind, body: &str) -> String {
    format!(
        "```{}\n{}\n{}```",
        FENCE_LANGUAGE,
        kind.declaration(),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_block_empty_body() {
        assert_eq!(
            fenced_block(DiagramKind::Class, ""),
            "```mermaid\nclassDiagram\n```"
        );
    }

    #[test]
    fn test_fenced_block_with_body() {
        let block = fenced_block(DiagramKind::Flowchart, "    a --> b\n");
        assert!(block.starts_with("```mermaid\nflowchart TD\n"));
        assert!(block.ends_with("    a --> b\n```"));
    }
}
