//! Built-in demonstration bundle
//!
//! Used when a document yields no structure at all, so the rendering stage
//! always has one complete example of every diagram kind. The four
//! examples describe the same request pipeline from different angles.

use crate::core::{Database, EdgeType, NodeShape};
use crate::plugins::class::{
    Attribute, ClassDatabase, ClassRelationship, ClassShape, Method, RelationshipKind,
};
use crate::plugins::component::{ComponentDatabase, Element, Relationship};
use crate::plugins::flowchart::{EdgeData, FlowchartDatabase, NodeData};
use crate::plugins::state::{State, StateDatabase, Transition};

/// Example system architecture: five containers, two components, six relationships
pub fn architecture() -> ComponentDatabase {
    let mut db = ComponentDatabase::new();

    for (id, name, tech, description) in [
        ("client", "Client Application", "Web/Mobile", "User-facing application"),
        ("api", "API Gateway", "REST/GraphQL", "Request routing and authentication"),
        ("service", "Core Service", "Backend", "Business logic and data processing"),
        ("database", "Database", "SQL/NoSQL", "Data persistence layer"),
        ("cache", "Cache Layer", "Redis/Memcached", "Performance optimization"),
    ] {
        db.add_container(Element::new(id, name, tech, description));
    }

    for (id, name, tech, description) in [
        ("auth", "Authentication Service", "JWT/OAuth", "User authentication and authorization"),
        ("monitoring", "Monitoring Service", "Logging/Metrics", "System observability"),
    ] {
        db.add_component(Element::new(id, name, tech, description));
    }

    for (from, to, label, tech) in [
        ("client", "api", "HTTP requests", "REST/HTTPS"),
        ("api", "auth", "Validate tokens", "JWT"),
        ("api", "service", "Process requests", "Internal API"),
        ("service", "database", "CRUD operations", "SQL"),
        ("service", "cache", "Cache data", "Redis"),
        ("service", "monitoring", "Log events", "Metrics"),
    ] {
        db.add_relationship(Relationship::new(from, to, label, tech));
    }

    db
}

/// Example request workflow: twelve nodes with validation and auth branches
pub fn workflow() -> FlowchartDatabase {
    let mut db = FlowchartDatabase::new();

    for (id, label, shape) in [
        ("start", "Start", NodeShape::Circle),
        ("input", "User Input", NodeShape::Rectangle),
        ("validate", "Validate Input", NodeShape::Diamond),
        ("process", "Process Request", NodeShape::Rectangle),
        ("auth", "Authentication Check", NodeShape::Diamond),
        ("authorize", "Authorization Check", NodeShape::Diamond),
        ("execute", "Execute Business Logic", NodeShape::Rectangle),
        ("persist", "Persist Data", NodeShape::Rectangle),
        ("cache", "Update Cache", NodeShape::Rectangle),
        ("response", "Generate Response", NodeShape::Rectangle),
        ("log", "Log Activity", NodeShape::Rectangle),
        ("end", "End", NodeShape::Circle),
    ] {
        db.add_node(NodeData::with_shape(id, label, shape));
    }

    let edges = [
        EdgeData::new("start", "input"),
        EdgeData::new("input", "validate"),
        EdgeData::with_label("validate", "process", EdgeType::Arrow, "Valid"),
        EdgeData::with_label("validate", "input", EdgeType::DottedArrow, "Invalid"),
        EdgeData::new("process", "auth"),
        EdgeData::with_label("auth", "authorize", EdgeType::Arrow, "Authenticated"),
        EdgeData::with_label("auth", "response", EdgeType::DottedArrow, "Unauthorized"),
        EdgeData::with_label("authorize", "execute", EdgeType::Arrow, "Authorized"),
        EdgeData::with_label("authorize", "response", EdgeType::DottedArrow, "Forbidden"),
        EdgeData::new("execute", "persist"),
        EdgeData::new("persist", "cache"),
        EdgeData::new("cache", "response"),
        EdgeData::new("response", "log"),
        EdgeData::new("log", "end"),
    ];
    for edge in edges {
        db.add_edge(edge);
    }

    db
}

/// Example request lifecycle: five states, one composite, seven transitions
pub fn state_machine() -> StateDatabase {
    let mut db = StateDatabase::new();

    db.add_state(State::new("Initialized"));
    db.add_state(State::composite(
        "Processing",
        ["Validating", "Authenticating", "Executing", "Persisting"],
    ));
    db.add_state(State::new("Completed"));
    db.add_state(State::new("Failed"));
    db.add_state(State::new("Retrying"));

    for (from, to, label) in [
        ("Initialized", "Processing", "start"),
        ("Processing", "Completed", "success"),
        ("Processing", "Failed", "error"),
        ("Failed", "Retrying", "retry"),
        ("Retrying", "Processing", "restart"),
        ("Retrying", "Failed", "max_retries"),
        ("Completed", "Initialized", "reset"),
    ] {
        db.add_transition(Transition::with_label(from, to, label));
    }

    db
}

/// Example class structure: gateway, service and repository layers
pub fn class_structure() -> ClassDatabase {
    let mut db = ClassDatabase::new();

    db.add_class(
        ClassShape::new("ApiGateway")
            .with_attribute(Attribute::new("routes", "dict"))
            .with_attribute(Attribute::new("auth_provider", "AuthProvider"))
            .with_method(Method::new("handle_request", ["self", "request: Request"], "Response"))
            .with_method(Method::new("authenticate", ["self", "token: str"], "bool")),
    );
    db.add_class(
        ClassShape::new("CoreService")
            .with_attribute(Attribute::new("repository", "Repository"))
            .with_attribute(Attribute::new("cache", "Cache"))
            .with_method(Method::new("process", ["self", "request: Request"], "Result"))
            .with_method(Method::new("validate", ["self", "payload: dict"], "bool")),
    );
    db.add_class(
        ClassShape::new("Repository")
            .with_attribute(Attribute::new("connection", "Connection"))
            .with_method(Method::new("save", ["self", "entity: Entity"], "None"))
            .with_method(Method::new("find", ["self", "entity_id: str"], "Entity")),
    );

    db.add_relationship(
        ClassRelationship::new("ApiGateway", "CoreService", RelationshipKind::Association)
            .with_label("routes to"),
    );
    db.add_relationship(
        ClassRelationship::new("CoreService", "Repository", RelationshipKind::Composition)
            .with_label("persists through"),
    );

    db
}
