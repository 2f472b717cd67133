//! Class structure extractor
//!
//! A class body runs from the declaration's colon to the next `}` in the
//! text (or the end of input). This is a heuristic, not a parser: nested or
//! brace-less bodies are not bounded reliably. Parent classes are matched
//! but not recorded.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::{debug, span, trace, Level};

use super::database::{
    Attribute, ClassDatabase, ClassShape, Method, DEFAULT_ATTRIBUTE_TYPE, DEFAULT_RETURN_TYPE,
};
use crate::core::{apply_rules, group, Database, Extractor, Pattern, Rule};

static CLASS_PATTERN: Pattern = LazyLock::new(|| {
    Regex::new(r"class\s+([A-Za-z_][A-Za-z0-9_]*)\s*(?:\(([^)]+)\))?\s*:([^}]+)")
        .expect("valid class pattern")
});

static ATTRIBUTE_PATTERN: Pattern = LazyLock::new(|| {
    Regex::new(r"(?:self\.)?([A-Za-z_][A-Za-z0-9_]*)\s*(?::\s*([A-Za-z_][A-Za-z0-9_]*))?\s*=")
        .expect("valid attribute pattern")
});

static METHOD_PATTERN: Pattern = LazyLock::new(|| {
    Regex::new(
        r"def\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(([^)]*)\)\s*(?:->\s*([A-Za-z_][A-Za-z0-9_]*))?\s*:",
    )
    .expect("valid method pattern")
});

static RULES: [Rule<ClassDatabase>; 1] = [Rule {
    name: "class",
    pattern: &CLASS_PATTERN,
    build: build_class,
}];

/// Rules run over each class body
static MEMBER_RULES: [Rule<ClassShape>; 2] = [
    Rule {
        name: "attribute",
        pattern: &ATTRIBUTE_PATTERN,
        build: build_attribute,
    },
    Rule {
        name: "method",
        pattern: &METHOD_PATTERN,
        build: build_method,
    },
];

fn build_class(database: &mut ClassDatabase, captures: &Captures<'_>) {
    let (Some(name), Some(body)) = (group(captures, 1), group(captures, 3)) else {
        return;
    };
    if let Some(parent) = group(captures, 2) {
        trace!(class = name, parent, "Ignoring parent class");
    }

    let mut class = ClassShape::new(name);
    apply_rules(&MEMBER_RULES, body, &mut class);
    database.add_class(class);
}

fn build_attribute(class: &mut ClassShape, captures: &Captures<'_>) {
    let Some(name) = group(captures, 1) else {
        return;
    };
    let declared_type = group(captures, 2).unwrap_or(DEFAULT_ATTRIBUTE_TYPE);
    class.add_attribute(Attribute::new(name, declared_type));
}

fn build_method(class: &mut ClassShape, captures: &Captures<'_>) {
    let Some(name) = group(captures, 1) else {
        return;
    };
    let params = group(captures, 2)
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|param| !param.is_empty());
    let return_type = group(captures, 3).unwrap_or(DEFAULT_RETURN_TYPE);
    class.add_method(Method::new(name, params, return_type));
}

/// Class structure extractor
pub struct ClassExtractor;

impl ClassExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClassExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor<ClassDatabase> for ClassExtractor {
    fn extract(&self, input: &str) -> Option<ClassDatabase> {
        let extract_span = span!(Level::DEBUG, "extract_classes", input_len = input.len());
        let _enter = extract_span.enter();

        let mut database = ClassDatabase::new();
        apply_rules(&RULES, input, &mut database);

        if database.is_empty() {
            debug!("No classes found");
            return None;
        }

        debug!(classes = database.node_count(), "Extracted classes");
        Some(database)
    }

    fn name(&self) -> &'static str {
        "class"
    }

    fn rule_names(&self) -> Vec<&'static str> {
        RULES
            .iter()
            .map(|rule| rule.name)
            .chain(MEMBER_RULES.iter().map(|rule| rule.name))
            .collect()
    }
}
