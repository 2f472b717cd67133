//! Core diagram trait tying a kind to its components

use super::{Category, Database, DiagramKind, Extractor, Renderer};

/// Core trait for diagram kinds
///
/// Each kind (component, flowchart, state, class) supplies a database, an
/// extractor that fills it from prose and a renderer that draws it.
///
/// # Example
/// ```
/// use schematic::core::{Category, Diagram, DiagramKind};
/// use schematic::plugins::flowchart::FlowchartDiagram;
///
/// assert_eq!(FlowchartDiagram::kind(), DiagramKind::Flowchart);
/// assert_eq!(FlowchartDiagram::category(), Category::Workflow);
/// ```
pub trait Diagram: Send + Sync {
    /// The description type for this diagram
    type Database: Database;

    /// The extractor type for this diagram
    type Extractor: Extractor<Self::Database>;

    /// The renderer type for this diagram
    type Renderer: Renderer<Self::Database>;

    /// Create a new extractor instance
    fn create_extractor() -> Self::Extractor;

    /// Create a new renderer instance
    fn create_renderer() -> Self::Renderer;

    /// The diagram kind drawn for this diagram
    fn kind() -> DiagramKind;

    /// The bundle category extraction files this diagram under
    fn category() -> Category;
}
