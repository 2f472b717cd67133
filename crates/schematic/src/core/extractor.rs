//! Core extractor trait for pattern-based structure recognition
//!
//! Extractors replace a real grammar with an ordered table of shallow text
//! patterns. They are best-effort: a pattern that does not match contributes
//! nothing, and a category with no matches yields `None`.

use super::Database;

/// Core trait for diagram extractors
///
/// # Example
/// ```
/// use schematic::core::{Database, Extractor};
/// use schematic::plugins::flowchart::FlowchartExtractor;
///
/// let extractor = FlowchartExtractor::new();
/// let db = extractor.extract("Step 1: Fetch data. Step 2: Store it.").unwrap();
/// assert_eq!(db.node_count(), 2);
/// ```
pub trait Extractor<D: Database>: Send + Sync {
    /// Extract a description from free-form text
    ///
    /// Returns `None` when the text holds nothing this extractor recognizes.
    fn extract(&self, input: &str) -> Option<D>;

    /// Get the name of this extractor
    fn name(&self) -> &'static str;

    /// Names of the rules this extractor runs, in evaluation order
    fn rule_names(&self) -> Vec<&'static str>;
}
