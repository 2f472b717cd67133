//! Analysis pipeline tying every diagram plugin together
//!
//! [`ContentAnalyzer`] runs each plugin's extractor over the same text and
//! collects what they found into a [`DiagramBundle`]. [`DiagramRenderer`]
//! dispatches a description to the renderer for a requested kind.
//!
//! Both are stateless: every call builds fresh extractors and renderers, so
//! they can be shared freely across threads.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, span, warn, Level};

use crate::core::{
    fenced_block, Category, Database, Diagram, DiagramError, DiagramKind, Extractor, Renderer,
};
use crate::plugins::class::{ClassDatabase, ClassDiagram};
use crate::plugins::component::{ComponentDatabase, ComponentDiagram};
use crate::plugins::fallback;
use crate::plugins::flowchart::{FlowchartDatabase, FlowchartDiagram};
use crate::plugins::state::{StateDatabase, StateDiagram};

/// A kind-specific diagram payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "description", rename_all = "snake_case")]
pub enum DiagramDescription {
    Component(ComponentDatabase),
    Flowchart(FlowchartDatabase),
    State(StateDatabase),
    Class(ClassDatabase),
}

impl DiagramDescription {
    /// The kind this payload is drawn as
    pub fn kind(&self) -> DiagramKind {
        match self {
            DiagramDescription::Component(_) => DiagramKind::Component,
            DiagramDescription::Flowchart(_) => DiagramKind::Flowchart,
            DiagramDescription::State(_) => DiagramKind::State,
            DiagramDescription::Class(_) => DiagramKind::Class,
        }
    }
}

impl From<ComponentDatabase> for DiagramDescription {
    fn from(database: ComponentDatabase) -> Self {
        DiagramDescription::Component(database)
    }
}

impl From<FlowchartDatabase> for DiagramDescription {
    fn from(database: FlowchartDatabase) -> Self {
        DiagramDescription::Flowchart(database)
    }
}

impl From<StateDatabase> for DiagramDescription {
    fn from(database: StateDatabase) -> Self {
        DiagramDescription::State(database)
    }
}

impl From<ClassDatabase> for DiagramDescription {
    fn from(database: ClassDatabase) -> Self {
        DiagramDescription::Class(database)
    }
}

/// Descriptions found by one analysis pass, keyed by category
///
/// Iteration always follows the presentation order of [`Category`],
/// regardless of the order entries were inserted in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiagramBundle {
    fallback: bool,
    diagrams: BTreeMap<Category, DiagramDescription>,
}

impl DiagramBundle {
    /// Create an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in example bundle, one diagram per category
    pub fn fallback() -> Self {
        let mut bundle = Self::new();
        bundle.insert(Category::Architecture, fallback::architecture());
        bundle.insert(Category::Workflow, fallback::workflow());
        bundle.insert(Category::StateMachine, fallback::state_machine());
        bundle.insert(Category::Class, fallback::class_structure());
        bundle.fallback = true;
        bundle
    }

    /// File a description under a category, replacing any previous entry
    pub fn insert(&mut self, category: Category, description: impl Into<DiagramDescription>) {
        self.diagrams.insert(category, description.into());
    }

    pub fn get(&self, category: Category) -> Option<&DiagramDescription> {
        self.diagrams.get(&category)
    }

    /// Present entries in presentation order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &DiagramDescription)> {
        self.diagrams
            .iter()
            .map(|(category, description)| (*category, description))
    }

    pub fn categories(&self) -> Vec<Category> {
        self.diagrams.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.diagrams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagrams.is_empty()
    }

    /// Whether this bundle is the built-in example rather than extracted content
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Render every present category with its category's kind
    pub fn render_all(&self) -> Vec<(Category, String)> {
        let renderer = DiagramRenderer::new();
        self.iter()
            .map(|(category, description)| {
                (category, renderer.render_kind(category.kind(), description))
            })
            .collect()
    }
}

/// Extracts every recognized diagram from free-form text
///
/// # Example
/// ```
/// use schematic::core::Category;
/// use schematic::plugins::ContentAnalyzer;
///
/// let bundle = ContentAnalyzer::new().extract("Step 1: Load. Step 2: Save.");
/// assert_eq!(bundle.categories(), vec![Category::Workflow]);
/// assert!(!bundle.is_fallback());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentAnalyzer;

impl ContentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Run every extractor over `content`
    ///
    /// Categories with no matches are left out. When nothing at all is found
    /// the built-in example bundle is returned instead.
    pub fn extract(&self, content: &str) -> DiagramBundle {
        let extract_span = span!(Level::INFO, "extract", input_len = content.len());
        let _enter = extract_span.enter();

        let mut bundle = DiagramBundle::new();
        Self::extract_into::<ComponentDiagram>(content, &mut bundle);
        Self::extract_into::<FlowchartDiagram>(content, &mut bundle);
        Self::extract_into::<StateDiagram>(content, &mut bundle);
        Self::extract_into::<ClassDiagram>(content, &mut bundle);

        if bundle.is_empty() {
            info!("No structure found, using example diagrams");
            return DiagramBundle::fallback();
        }

        info!(categories = bundle.len(), "Extraction completed");
        bundle
    }

    fn extract_into<D>(content: &str, bundle: &mut DiagramBundle)
    where
        D: Diagram,
        D::Database: Into<DiagramDescription>,
    {
        let category = D::category();
        let category_span = span!(Level::DEBUG, "extract_category", %category);
        let _enter = category_span.enter();

        match D::create_extractor().extract(content) {
            Some(database) => {
                debug!(
                    nodes = database.node_count(),
                    edges = database.edge_count(),
                    "Category found"
                );
                bundle.insert(category, database);
            }
            None => debug!("Category absent"),
        }
    }
}

/// Renders descriptions as fenced Mermaid blocks
///
/// # Example
/// ```
/// use schematic::plugins::{DiagramBundle, DiagramRenderer};
/// use schematic::core::Category;
///
/// let bundle = DiagramBundle::fallback();
/// let description = bundle.get(Category::StateMachine).unwrap();
///
/// let output = DiagramRenderer::new().render("state", description).unwrap();
/// assert!(output.starts_with("```mermaid\nstateDiagram-v2\n"));
///
/// assert!(DiagramRenderer::new().render("sequence", description).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagramRenderer;

impl DiagramRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render `description` as the kind named by `kind`
    ///
    /// Fails with [`DiagramError::UnsupportedKind`] when `kind` is not one of
    /// `component`, `flowchart`, `state` or `class`.
    pub fn render(&self, kind: &str, description: &DiagramDescription) -> Result<String, DiagramError> {
        let kind = kind.parse::<DiagramKind>().inspect_err(|_| {
            warn!(kind, "Unsupported diagram kind requested");
        })?;
        Ok(self.render_kind(kind, description))
    }

    /// Render `description` as `kind`
    ///
    /// A payload of another kind renders as an empty `kind` block.
    pub fn render_kind(&self, kind: DiagramKind, description: &DiagramDescription) -> String {
        let render_span = span!(Level::DEBUG, "render", %kind);
        let _enter = render_span.enter();

        let output = match (kind, description) {
            (DiagramKind::Component, DiagramDescription::Component(database)) => {
                ComponentDiagram::create_renderer().render(database)
            }
            (DiagramKind::Flowchart, DiagramDescription::Flowchart(database)) => {
                FlowchartDiagram::create_renderer().render(database)
            }
            (DiagramKind::State, DiagramDescription::State(database)) => {
                StateDiagram::create_renderer().render(database)
            }
            (DiagramKind::Class, DiagramDescription::Class(database)) => {
                ClassDiagram::create_renderer().render(database)
            }
            (kind, other) => {
                warn!(requested = %kind, found = %other.kind(), "Description does not match requested kind");
                fenced_block(kind, "")
            }
        };

        debug!(output_len = output.len(), "Rendering completed");
        output
    }
}
