//! Architecture extractor
//!
//! Finds "service "X" ... using Y" declarations and "A calls B via T"
//! interactions.

use indexmap::IndexMap;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::{debug, span, Level};

use super::database::{ComponentDatabase, Element, Relationship};
use crate::core::{apply_rules, group, Extractor, Pattern, Rule};

static ELEMENT_PATTERN: Pattern = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(?:component|service|module|system)\s+["']([^"']+)["'].*?(?:using|with)\s+([^\n.]+)"#,
    )
    .expect("valid element pattern")
});

static RELATION_PATTERN: Pattern = LazyLock::new(|| {
    Regex::new(
        r"(?i)([A-Za-z_]+)\s+(?:calls|connects to|uses|interacts with)\s+([A-Za-z_]+)(?:\s+via\s+([^\n.]+))?",
    )
    .expect("valid relation pattern")
});

/// Label given to every extracted relationship
const RELATION_LABEL: &str = "uses";

/// Technology assumed when a relation names none
const DEFAULT_RELATION_TECH: &str = "API";

/// Containers stay keyed by id until the scan finishes, so a later
/// declaration of the same id replaces the earlier one in place.
#[derive(Default)]
struct ComponentScan {
    containers: IndexMap<String, Element>,
    relationships: Vec<Relationship>,
}

static RULES: [Rule<ComponentScan>; 2] = [
    Rule {
        name: "element",
        pattern: &ELEMENT_PATTERN,
        build: build_element,
    },
    Rule {
        name: "relation",
        pattern: &RELATION_PATTERN,
        build: build_relation,
    },
];

/// Derive a container id from its display name
pub(crate) fn element_id(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

fn build_element(scan: &mut ComponentScan, captures: &Captures<'_>) {
    let (Some(name), Some(tech)) = (group(captures, 1), group(captures, 2)) else {
        return;
    };
    let id = element_id(name);
    let tech = tech.trim();
    let description = format!("{} using {}", name, tech);
    scan.containers
        .insert(id.clone(), Element::new(id, name, tech, description));
}

fn build_relation(scan: &mut ComponentScan, captures: &Captures<'_>) {
    let (Some(from), Some(to)) = (group(captures, 1), group(captures, 2)) else {
        return;
    };
    let tech = group(captures, 3).unwrap_or(DEFAULT_RELATION_TECH);
    scan.relationships.push(Relationship::new(
        from.to_lowercase(),
        to.to_lowercase(),
        RELATION_LABEL,
        tech,
    ));
}

/// Architecture extractor
pub struct ComponentExtractor;

impl ComponentExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ComponentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor<ComponentDatabase> for ComponentExtractor {
    fn extract(&self, input: &str) -> Option<ComponentDatabase> {
        let extract_span = span!(Level::DEBUG, "extract_architecture", input_len = input.len());
        let _enter = extract_span.enter();

        let mut scan = ComponentScan::default();
        apply_rules(&RULES, input, &mut scan);

        if scan.containers.is_empty() {
            debug!("No containers found");
            return None;
        }

        let mut database = ComponentDatabase::new();
        for container in scan.containers.into_values() {
            database.add_container(container);
        }
        for relationship in scan.relationships {
            database.add_relationship(relationship);
        }

        debug!(
            containers = database.containers().len(),
            relationships = database.relationships().len(),
            "Extracted architecture"
        );
        Some(database)
    }

    fn name(&self) -> &'static str {
        "architecture"
    }

    fn rule_names(&self) -> Vec<&'static str> {
        RULES.iter().map(|rule| rule.name).collect()
    }
}
