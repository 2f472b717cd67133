//! Component diagram renderer
//!
//! Emits C4 `Container`, `Component` and `Rel` directives.

use super::database::{ComponentDatabase, Element, Relationship};
use crate::core::{fenced_block, DiagramKind, Renderer};

/// C4 component diagram renderer
pub struct ComponentRenderer;

impl ComponentRenderer {
    pub fn new() -> Self {
        Self
    }

    fn element_line(directive: &str, element: &Element) -> String {
        format!(
            "    {}({}, \"{}\", \"{}\", \"{}\")\n",
            directive, element.id, element.name, element.tech, element.description
        )
    }

    fn relationship_line(relationship: &Relationship) -> String {
        format!(
            "    Rel({}, {}, \"{}\", \"{}\")\n",
            relationship.from, relationship.to, relationship.label, relationship.tech
        )
    }
}

impl Default for ComponentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer<ComponentDatabase> for ComponentRenderer {
    fn render(&self, database: &ComponentDatabase) -> String {
        let mut body = String::new();
        for container in database.containers() {
            body.push_str(&Self::element_line("Container", container));
        }
        for component in database.components() {
            body.push_str(&Self::element_line("Component", component));
        }
        for relationship in database.relationships() {
            body.push_str(&Self::relationship_line(relationship));
        }
        fenced_block(DiagramKind::Component, &body)
    }

    fn name(&self) -> &'static str {
        "c4-component"
    }

    fn kind(&self) -> DiagramKind {
        DiagramKind::Component
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_sections_in_order() {
        let mut db = ComponentDatabase::new();
        db.add_relationship(Relationship::new("web", "api", "calls", "HTTPS"));
        db.add_component(Element::new("auth", "Auth", "JWT", "Tokens"));
        db.add_container(Element::new("api", "API", "REST", "Gateway"));

        let expected = "```mermaid\nC4Component\n    Container(api, \"API\", \"REST\", \"Gateway\")\n    Component(auth, \"Auth\", \"JWT\", \"Tokens\")\n    Rel(web, api, \"calls\", \"HTTPS\")\n```";
        assert_eq!(ComponentRenderer::new().render(&db), expected);
    }

    #[test]
    fn test_render_empty() {
        let output = ComponentRenderer::new().render(&ComponentDatabase::new());
        assert_eq!(output, "```mermaid\nC4Component\n```");
    }

    #[test]
    fn test_quotes_are_not_escaped() {
        let mut db = ComponentDatabase::new();
        db.add_container(Element::new("x", "Say \"hi\"", "T", "D"));
        let output = ComponentRenderer::new().render(&db);
        assert!(output.contains("\"Say \"hi\"\""));
    }
}
