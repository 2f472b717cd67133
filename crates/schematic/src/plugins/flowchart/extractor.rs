//! Workflow extractor
//!
//! Steps become a chain of rectangles; conditions become diamonds with an
//! optional "Yes" branch to their action.
//!
//! Condition and action ids are numbered from the count of nodes collected
//! so far, so they depend on how many steps precede them. The scan runs
//! strictly in rule order against a single counter.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::{debug, span, Level};

use super::database::{EdgeData, FlowchartDatabase, NodeData};
use crate::core::{apply_rules, group, Database, EdgeType, Extractor, NodeShape, Pattern, Rule};

static STEP_PATTERN: Pattern = LazyLock::new(|| {
    Regex::new(r"(?i)(?:step|stage|phase)\s*\d*:?\s*([^\n.]+)").expect("valid step pattern")
});

static CONDITION_PATTERN: Pattern = LazyLock::new(|| {
    Regex::new(r"(?i)if\s+([^\n,]+)(?:\s*,\s*then\s+([^\n.]+))?")
        .expect("valid condition pattern")
});

/// Label on the edge from a condition to its action
const BRANCH_LABEL: &str = "Yes";

#[derive(Default)]
struct WorkflowScan {
    database: FlowchartDatabase,
    steps: usize,
    last_step: Option<String>,
}

static RULES: [Rule<WorkflowScan>; 2] = [
    Rule {
        name: "step",
        pattern: &STEP_PATTERN,
        build: build_step,
    },
    Rule {
        name: "condition",
        pattern: &CONDITION_PATTERN,
        build: build_condition,
    },
];

fn build_step(scan: &mut WorkflowScan, captures: &Captures<'_>) {
    let Some(description) = group(captures, 1) else {
        return;
    };
    let id = format!("step_{}", scan.steps);
    scan.steps += 1;
    scan.database
        .add_node(NodeData::new(id.clone(), description.trim()));

    if let Some(previous) = scan.last_step.replace(id.clone()) {
        scan.database.add_edge(EdgeData::new(previous, id));
    }
}

fn build_condition(scan: &mut WorkflowScan, captures: &Captures<'_>) {
    let Some(condition) = group(captures, 1) else {
        return;
    };
    let condition_id = format!("cond_{}", scan.database.node_count());
    scan.database.add_node(NodeData::with_shape(
        condition_id.clone(),
        condition.trim(),
        NodeShape::Diamond,
    ));

    if let Some(action) = group(captures, 2) {
        let action_id = format!("action_{}", scan.database.node_count());
        scan.database
            .add_node(NodeData::new(action_id.clone(), action.trim()));
        scan.database.add_edge(EdgeData::with_label(
            condition_id,
            action_id,
            EdgeType::Arrow,
            BRANCH_LABEL,
        ));
    }
}

/// Workflow extractor
pub struct FlowchartExtractor;

impl FlowchartExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FlowchartExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor<FlowchartDatabase> for FlowchartExtractor {
    fn extract(&self, input: &str) -> Option<FlowchartDatabase> {
        let extract_span = span!(Level::DEBUG, "extract_workflow", input_len = input.len());
        let _enter = extract_span.enter();

        let mut scan = WorkflowScan::default();
        apply_rules(&RULES, input, &mut scan);

        let database = scan.database;
        if database.is_empty() {
            debug!("No workflow nodes found");
            return None;
        }

        debug!(
            node_count = database.node_count(),
            edge_count = database.edge_count(),
            "Extracted workflow"
        );
        Some(database)
    }

    fn name(&self) -> &'static str {
        "workflow"
    }

    fn rule_names(&self) -> Vec<&'static str> {
        RULES.iter().map(|rule| rule.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(input: &str) -> Option<FlowchartDatabase> {
        FlowchartExtractor::new().extract(input)
    }

    #[test]
    fn test_steps_are_chained() {
        let db = extract("Step 1: Plan. Step 2: Build. Phase 3: Ship.").unwrap();
        let labels: Vec<_> = db.nodes().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["Plan", "Build", "Ship"]);

        let edges: Vec<_> = db
            .edges()
            .map(|e| (e.from.as_str(), e.to.as_str()))
            .collect();
        assert_eq!(edges, vec![("step_0", "step_1"), ("step_1", "step_2")]);
        assert!(db.edges().all(|e| e.label.is_none()));
    }

    #[test]
    fn test_step_number_and_colon_are_optional() {
        let db = extract("stage collect metrics\n").unwrap();
        assert_eq!(db.get_node("step_0").unwrap().label, "collect metrics");
        assert_eq!(db.get_node("step_0").unwrap().shape, NodeShape::Rectangle);
    }

    #[test]
    fn test_condition_with_action() {
        let db = extract("if disk is full, then alert admin").unwrap();
        assert_eq!(db.node_count(), 2);

        let condition = db.get_node("cond_0").unwrap();
        assert_eq!(condition.label, "disk is full");
        assert_eq!(condition.shape, NodeShape::Diamond);

        let action = db.get_node("action_1").unwrap();
        assert_eq!(action.label, "alert admin");
        assert_eq!(action.shape, NodeShape::Rectangle);

        let edge = &db.connections()[0];
        assert_eq!(edge.from, "cond_0");
        assert_eq!(edge.to, "action_1");
        assert_eq!(edge.label.as_deref(), Some("Yes"));
    }

    #[test]
    fn test_condition_without_action() {
        let db = extract("If the cache misses, we recompute").unwrap();
        assert_eq!(db.node_count(), 1);
        assert_eq!(db.edge_count(), 0);
        assert_eq!(db.get_node("cond_0").unwrap().label, "the cache misses");
    }

    #[test]
    fn test_condition_ids_follow_step_count() {
        let input = "Step 1: Read input\nStep 2: Validate\nIf invalid, then reject\nIf slow, then page on-call";
        let db = extract(input).unwrap();
        let ids: Vec<_> = db.nodes().map(|n| n.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["step_0", "step_1", "cond_2", "action_3", "cond_4", "action_5"]
        );
    }

    #[test]
    fn test_no_workflow() {
        assert!(extract("A quiet paragraph with nothing to chart.").is_none());
        assert!(extract("").is_none());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let input = "Step 1: a\nif b, then c\nStep 2: d";
        assert_eq!(extract(input), extract(input));
    }
}
