//! Splicing rendered diagrams into a markdown document
//!
//! Each present category becomes one section after the prose: a heading, a
//! blank line and the fenced block.

use std::collections::BTreeMap;
use tracing::{debug, span, Level};

use super::analyzer::{DiagramBundle, DiagramRenderer};
use crate::core::Category;

/// Options for [`DocumentComposer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Categories to emit, in this order. Absent categories are skipped.
    pub order: Vec<Category>,
    /// Markdown heading level for section titles, clamped to 1..=6
    pub heading_level: u8,
    /// Whether the built-in example bundle is embedded
    pub include_fallback: bool,
    /// Section title overrides
    pub titles: BTreeMap<Category, String>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            order: Category::ALL.to_vec(),
            heading_level: 2,
            include_fallback: true,
            titles: BTreeMap::new(),
        }
    }
}

impl DocumentOptions {
    pub fn with_heading_level(mut self, level: u8) -> Self {
        self.heading_level = level;
        self
    }

    pub fn with_fallback(mut self, include: bool) -> Self {
        self.include_fallback = include;
        self
    }

    pub fn with_order(mut self, order: impl IntoIterator<Item = Category>) -> Self {
        self.order = order.into_iter().collect();
        self
    }

    pub fn with_title(mut self, category: Category, title: impl Into<String>) -> Self {
        self.titles.insert(category, title.into());
        self
    }

    /// Section title for `category`
    pub fn title(&self, category: Category) -> &str {
        self.titles
            .get(&category)
            .map(String::as_str)
            .unwrap_or_else(|| category.title())
    }

    fn heading_marker(&self) -> String {
        "#".repeat(usize::from(self.heading_level.clamp(1, 6)))
    }
}

/// Appends diagram sections to a document
///
/// # Example
/// ```
/// use schematic::plugins::{ContentAnalyzer, DocumentComposer};
///
/// let content = "Step 1: Write. Step 2: Review.";
/// let bundle = ContentAnalyzer::new().extract(content);
/// let document = DocumentComposer::default().compose(content, &bundle);
///
/// assert!(document.starts_with(content));
/// assert!(document.contains("## Workflow\n\n```mermaid\nflowchart TD\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentComposer {
    options: DocumentOptions,
}

impl DocumentComposer {
    pub fn new(options: DocumentOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }

    /// Append one section per present category to `content`
    ///
    /// Returns `content` unchanged when there is nothing to append.
    pub fn compose(&self, content: &str, bundle: &DiagramBundle) -> String {
        let compose_span = span!(Level::DEBUG, "compose", categories = bundle.len());
        let _enter = compose_span.enter();

        if bundle.is_fallback() && !self.options.include_fallback {
            debug!("Skipping example diagrams");
            return content.to_string();
        }

        let renderer = DiagramRenderer::new();
        let marker = self.options.heading_marker();
        let mut sections = Vec::new();
        for &category in &self.options.order {
            let Some(description) = bundle.get(category) else {
                continue;
            };
            let block = renderer.render_kind(category.kind(), description);
            sections.push(format!(
                "{} {}\n\n{}",
                marker,
                self.options.title(category),
                block
            ));
        }

        if sections.is_empty() {
            return content.to_string();
        }

        debug!(sections = sections.len(), "Appending diagram sections");
        let mut document = content.trim_end().to_string();
        for section in sections {
            if !document.is_empty() {
                document.push_str("\n\n");
            }
            document.push_str(&section);
        }
        document.push('\n');
        document
    }
}
