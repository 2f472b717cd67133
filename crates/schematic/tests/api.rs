//! Integration tests for the public API

use pretty_assertions::assert_eq;
use schematic::prelude::*;
use schematic::{embed, extract, render, render_kind};

const ARTICLE: &str = r#"Our platform is split into a few parts. The service "Order API" is implemented using Rust.
The module "Ledger" is written with PostgreSQL.
Order_api calls Ledger via gRPC.

Step 1: Receive the order
Step 2: Reserve stock
If payment fails, then cancel the order

status: Pending
status: Active contains Picking, Packing
when payment clears, then move from Pending to Active

class OrderService:
    self.repository = repository
    def place(self, order: Order) -> Receipt:
        pass
}
"#;

#[test]
fn test_extract_all_categories() {
    let bundle = extract(ARTICLE);
    assert!(!bundle.is_fallback());
    assert_eq!(bundle.categories(), Category::ALL.to_vec());
}

#[test]
fn test_architecture_from_article() {
    let bundle = extract(ARTICLE);
    let output = render("component", bundle.get(Category::Architecture).unwrap()).unwrap();

    let expected = r#"```mermaid
C4Component
    Container(order_api, "Order API", "Rust", "Order API using Rust")
    Container(ledger, "Ledger", "PostgreSQL", "Ledger using PostgreSQL")
    Rel(order_api, ledger, "uses", "gRPC")
```"#;
    assert_eq!(output, expected);
}

#[test]
fn test_workflow_from_article() {
    let bundle = extract(ARTICLE);
    let output = render("flowchart", bundle.get(Category::Workflow).unwrap()).unwrap();

    let expected = r#"```mermaid
flowchart TD
    step_0["Receive the order"]
    step_1["Reserve stock"]
    cond_2{payment fails}
    action_3["cancel the order"]
    step_0 --> step_1
    cond_2 -->|Yes| action_3
```"#;
    assert_eq!(output, expected);
}

#[test]
fn test_state_machine_from_article() {
    let bundle = extract(ARTICLE);
    let output = render("state", bundle.get(Category::StateMachine).unwrap()).unwrap();

    let expected = "```mermaid
stateDiagram-v2
    Pending
    state Active {
        Picking
        Packing
    }
    Pending --> Active: payment clears
```";
    assert_eq!(output, expected);
}

#[test]
fn test_class_from_article() {
    let bundle = extract(ARTICLE);
    let output = render("class", bundle.get(Category::Class).unwrap()).unwrap();

    let expected = "```mermaid
classDiagram
    class OrderService {
        +repository: Any
        +place(self, order: Order) Receipt
    }
```";
    assert_eq!(output, expected);
}

#[test]
fn test_relations_without_containers_are_absent() {
    let bundle = extract("Frontend calls Backend via REST.\nstatus: Ready\n");
    assert!(!bundle.is_fallback());
    assert!(bundle.get(Category::Architecture).is_none());
    assert!(bundle.get(Category::StateMachine).is_some());
}

#[test]
fn test_render_kind_with_mismatched_payload() {
    let bundle = extract("");
    let workflow = bundle.get(Category::Workflow).unwrap();
    assert_eq!(
        render_kind(DiagramKind::Component, workflow),
        "```mermaid\nC4Component\n```"
    );
}

#[test]
fn test_embed_appends_sections_in_order() {
    let document = embed(ARTICLE);
    assert!(document.starts_with(ARTICLE.trim_end()));

    let positions: Vec<usize> = [
        "## System Architecture",
        "## Workflow",
        "## State Machine",
        "## Class Structure",
    ]
    .iter()
    .map(|heading| document.find(heading).unwrap())
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_compose_with_custom_options() {
    let bundle = extract("Stage: Draft. Stage: Publish.");
    let options = DocumentOptions::default()
        .with_heading_level(3)
        .with_title(Category::Workflow, "Publishing Flow");
    let document = DocumentComposer::new(options).compose("Intro.", &bundle);

    let expected = "Intro.

### Publishing Flow

```mermaid
flowchart TD
    step_0[\"Draft\"]
    step_1[\"Publish\"]
    step_0 --> step_1
```
";
    assert_eq!(document, expected);
}

#[test]
fn test_bundle_serializes_to_json() {
    let bundle = extract("status: Open\nstatus: Closed\n");
    let value = serde_json::to_value(&bundle).unwrap();

    assert_eq!(value["fallback"], serde_json::json!(false));
    let entry = &value["diagrams"]["state_machine"];
    assert_eq!(entry["kind"], "state");
    assert_eq!(entry["description"]["states"][0]["name"], "Open");
    assert_eq!(entry["description"]["states"][1]["name"], "Closed");
}

#[test]
fn test_plugins_drive_individually() {
    let db = ComponentExtractor::new()
        .extract(r#"system 'Search' built with Elasticsearch"#)
        .unwrap();
    assert_eq!(db.node_count(), 1);
    assert_eq!(db.containers()[0].id, "search");

    let output = ComponentRenderer::new().render(&db);
    assert!(output.contains(r#"Container(search, "Search", "Elasticsearch", "Search using Elasticsearch")"#));
}
