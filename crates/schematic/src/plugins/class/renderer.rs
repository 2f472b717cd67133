//! Class diagram renderer
//!
//! One block per class, then one line per relationship.

use super::database::{Attribute, ClassDatabase, ClassRelationship, ClassShape, Method};
use crate::core::{fenced_block, DiagramKind, Renderer};

/// Mermaid `classDiagram` renderer
pub struct ClassRenderer;

impl ClassRenderer {
    pub fn new() -> Self {
        Self
    }

    fn attribute_line(attribute: &Attribute) -> String {
        format!(
            "        {}{}: {}\n",
            attribute.visibility.to_char(),
            attribute.name,
            attribute.declared_type
        )
    }

    fn method_line(method: &Method) -> String {
        let params = method.params.join(", ");
        if method.return_type.is_empty() {
            format!("        {}{}({})\n", method.visibility.to_char(), method.name, params)
        } else {
            format!(
                "        {}{}({}) {}\n",
                method.visibility.to_char(),
                method.name,
                params,
                method.return_type
            )
        }
    }

    fn class_block(class: &ClassShape) -> String {
        let mut block = format!("    class {} {{\n", class.name);
        for attribute in &class.attributes {
            block.push_str(&Self::attribute_line(attribute));
        }
        for method in &class.methods {
            block.push_str(&Self::method_line(method));
        }
        block.push_str("    }\n");
        block
    }

    fn relationship_line(relationship: &ClassRelationship) -> String {
        match relationship.label.as_deref().filter(|label| !label.is_empty()) {
            Some(label) => format!(
                "    {} {} {} : {}\n",
                relationship.from, relationship.kind, relationship.to, label
            ),
            None => format!(
                "    {} {} {}\n",
                relationship.from, relationship.kind, relationship.to
            ),
        }
    }
}

impl Default for ClassRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer<ClassDatabase> for ClassRenderer {
    fn render(&self, database: &ClassDatabase) -> String {
        let mut body = String::new();
        for class in database.classes() {
            body.push_str(&Self::class_block(class));
        }
        for relationship in database.relationships() {
            body.push_str(&Self::relationship_line(relationship));
        }
        fenced_block(DiagramKind::Class, &body)
    }

    fn name(&self) -> &'static str {
        "mermaid-class"
    }

    fn kind(&self) -> DiagramKind {
        DiagramKind::Class
    }
}
