//! Behavioral properties of extraction and rendering

use proptest::prelude::*;
use schematic::prelude::*;
use schematic::{extract, render, DiagramError};

const KINDS: [&str; 4] = ["component", "flowchart", "state", "class"];

/// Sentences that each trigger one extraction rule
fn sentence() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z ]{0,20}",
        "[A-Z][a-z]{2,8}".prop_map(|name| format!("The service \"{name}\" runs using Java.")),
        "[a-z ]{1,15}".prop_map(|desc| format!("Step: {desc}.")),
        "[a-z]{1,10}".prop_map(|cond| format!("If {cond}, then stop.")),
        "[A-Z][a-z]{2,8}".prop_map(|name| format!("state: {name}\n")),
        "[A-Z][a-z]{2,8}".prop_map(|name| format!("class {name}:\n    x = 1\n}}")),
    ]
}

proptest! {
    #[test]
    fn prop_extract_is_deterministic(text in "\\PC{0,200}") {
        prop_assert_eq!(extract(&text), extract(&text));
    }

    #[test]
    fn prop_structured_text_is_deterministic(sentences in prop::collection::vec(sentence(), 0..8)) {
        let text = sentences.join(" ");
        let first = extract(&text);
        let second = extract(&text);
        prop_assert_eq!(first.render_all(), second.render_all());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_unknown_kinds_are_rejected(kind in "[A-Za-z_]{0,12}") {
        prop_assume!(!KINDS.contains(&kind.as_str()));
        let bundle = extract("");
        let description = bundle.get(Category::Workflow).unwrap();
        match render(&kind, description) {
            Err(DiagramError::UnsupportedKind { kind: rejected }) => prop_assert_eq!(rejected, kind),
            other => prop_assert!(false, "expected UnsupportedKind, got {:?}", other),
        }
    }

    #[test]
    fn prop_rendered_blocks_are_fenced(sentences in prop::collection::vec(sentence(), 0..8)) {
        let bundle = extract(&sentences.join(" "));
        for (category, output) in bundle.render_all() {
            let header = format!("```mermaid\n{}\n", category.kind().declaration());
            prop_assert!(output.starts_with(&header));
            prop_assert!(output.ends_with("\n```"));
        }
    }
}

#[test]
fn test_plain_text_gives_exact_fallback() {
    for text in ["", "   \n\t", "Nothing structural is said here.", "1234 !? --"] {
        let bundle = extract(text);
        assert!(bundle.is_fallback(), "{text:?}");
        assert_eq!(bundle, DiagramBundle::fallback());
        assert_eq!(bundle.render_all(), DiagramBundle::fallback().render_all());
    }
}

#[test]
fn test_render_accepts_exactly_four_kinds() {
    let bundle = extract("");
    for kind in KINDS {
        let category = Category::ALL
            .into_iter()
            .find(|category| category.kind().as_str() == kind)
            .unwrap();
        let output = render(kind, bundle.get(category).unwrap()).unwrap();
        assert!(!output.is_empty());
    }
    for kind in ["", "Component", "FLOWCHART", "sequence", "gantt", "state_machine"] {
        let err = render(kind, bundle.get(Category::Class).unwrap()).unwrap_err();
        assert_eq!(err.kind(), Some(kind));
    }
}

#[test]
fn test_containers_keep_document_order() {
    let text = r#"The component "Auth" using OAuth. Then component "DB" using Postgres."#;
    let bundle = extract(text);
    let output = render("component", bundle.get(Category::Architecture).unwrap()).unwrap();

    let auth = output.find(r#""Auth""#).unwrap();
    let db = output.find(r#""DB""#).unwrap();
    assert!(auth < db);
}

#[test]
fn test_redeclared_container_keeps_position() {
    let text = r#"service "Api" using Go. service "Db" using SQL. service "Api" using Rust."#;
    let db = ComponentExtractor::new().extract(text).unwrap();

    let names: Vec<_> = db
        .containers()
        .iter()
        .map(|c| (c.id.as_str(), c.tech.as_str()))
        .collect();
    assert_eq!(names, vec![("api", "Rust"), ("db", "SQL")]);
}

#[test]
fn test_conditional_branch() {
    let db = FlowchartExtractor::new()
        .extract("if disk is full, then alert admin")
        .unwrap();

    let nodes: Vec<_> = db.nodes().collect();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].label, "disk is full");
    assert_eq!(nodes[0].shape, NodeShape::Diamond);
    assert_eq!(nodes[1].label, "alert admin");
    assert_eq!(nodes[1].shape, NodeShape::Rectangle);

    let edges = db.connections();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].from, nodes[0].id);
    assert_eq!(edges[0].to, nodes[1].id);
    assert_eq!(edges[0].label.as_deref(), Some("Yes"));
}

#[test]
fn test_transition_without_source_is_dropped() {
    let db = StateExtractor::new()
        .extract("status: Running\nwhen error occurs, transition to Failed\n")
        .unwrap();
    assert_eq!(db.states().len(), 1);
    assert_eq!(db.transitions().len(), 0);
}

#[test]
fn test_fallback_renders_every_kind() {
    let bundle = extract("");
    assert_eq!(bundle.len(), 4);
    for (category, description) in bundle.iter() {
        let output = render(category.kind().as_str(), description).unwrap();
        assert!(output.len() > "```mermaid\n\n```".len() + category.kind().declaration().len());
    }
}

#[test]
fn test_names_are_not_escaped() {
    let db = FlowchartExtractor::new()
        .extract("Step 1: say \"hi\" | wave {twice}")
        .unwrap();
    let output = FlowchartRenderer::new().render(&db);
    assert!(output.contains("    step_0[\"say \"hi\" | wave {twice}\"]\n"));
}
