//! Class diagram database
//!
//! Stores classes keyed by name and the relationships between them.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use crate::core::{Database, Visibility};

/// Type recorded for attributes declared without one
pub const DEFAULT_ATTRIBUTE_TYPE: &str = "Any";

/// Return type recorded for methods declared without one
pub const DEFAULT_RETURN_TYPE: &str = "None";

/// A class attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: String,
    pub declared_type: String,
    pub visibility: Visibility,
}

impl Attribute {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            visibility: Visibility::default(),
        }
    }
}

/// A class method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    pub name: String,
    pub params: Vec<String>,
    pub return_type: String,
    pub visibility: Visibility,
}

impl Method {
    pub fn new<I, S>(name: impl Into<String>, params: I, return_type: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
            return_type: return_type.into(),
            visibility: Visibility::default(),
        }
    }
}

/// A class with its members in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassShape {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub methods: Vec<Method>,
}

impl ClassShape {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn add_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    pub fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.add_attribute(attribute);
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.add_method(method);
        self
    }
}

/// Relationship type between classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    Inheritance, // <|--
    Composition, // *--
    Aggregation, // o--
    Association, // -->
    Dependency,  // ..>
    Realization, // ..|>
    Link,        // --
    DashedLink,  // ..
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self {
            RelationshipKind::Inheritance => "<|--",
            RelationshipKind::Composition => "*--",
            RelationshipKind::Aggregation => "o--",
            RelationshipKind::Association => "-->",
            RelationshipKind::Dependency => "..>",
            RelationshipKind::Realization => "..|>",
            RelationshipKind::Link => "--",
            RelationshipKind::DashedLink => "..",
        };
        f.write_str(arrow)
    }
}

/// A relationship between classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassRelationship {
    pub from: String,
    pub to: String,
    pub kind: RelationshipKind,
    pub label: Option<String>,
}

impl ClassRelationship {
    pub fn new(from: impl Into<String>, to: impl Into<String>, kind: RelationshipKind) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Class diagram database
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassDatabase {
    classes: IndexMap<String, ClassShape>,
    relationships: Vec<ClassRelationship>,
}

impl ClassDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class, replacing an earlier class of the same name in place
    pub fn add_class(&mut self, class: ClassShape) {
        self.classes.insert(class.name.clone(), class);
    }

    pub fn add_relationship(&mut self, relationship: ClassRelationship) {
        self.relationships.push(relationship);
    }

    pub fn get_class(&self, name: &str) -> Option<&ClassShape> {
        self.classes.get(name)
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassShape> {
        self.classes.values()
    }

    pub fn relationships(&self) -> &[ClassRelationship] {
        &self.relationships
    }
}

impl Database for ClassDatabase {
    type Node = ClassShape;
    type Edge = ClassRelationship;

    fn add_node(&mut self, node: Self::Node) {
        self.add_class(node)
    }

    fn add_edge(&mut self, edge: Self::Edge) {
        self.add_relationship(edge)
    }

    fn nodes(&self) -> impl Iterator<Item = &Self::Node> {
        self.classes.values()
    }

    fn edges(&self) -> impl Iterator<Item = &Self::Edge> {
        self.relationships.iter()
    }

    fn node_count(&self) -> usize {
        self.classes.len()
    }

    fn edge_count(&self) -> usize {
        self.relationships.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_kind_display() {
        assert_eq!(RelationshipKind::Inheritance.to_string(), "<|--");
        assert_eq!(RelationshipKind::Composition.to_string(), "*--");
        assert_eq!(RelationshipKind::Realization.to_string(), "..|>");
        assert_eq!(RelationshipKind::DashedLink.to_string(), "..");
    }

    #[test]
    fn test_same_name_replaces_in_place() {
        let mut db = ClassDatabase::new();
        db.add_class(ClassShape::new("A"));
        db.add_class(ClassShape::new("B"));
        db.add_class(ClassShape::new("A").with_attribute(Attribute::new("x", "int")));

        let names: Vec<_> = db.classes().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(db.get_class("A").unwrap().attributes.len(), 1);
    }

    #[test]
    fn test_members_default_public() {
        let method = Method::new("run", ["self"], DEFAULT_RETURN_TYPE);
        assert_eq!(method.visibility, Visibility::Public);
        assert_eq!(method.return_type, "None");
    }
}
