//! Core type definitions for diagram extraction and rendering
//!
//! This module contains the closed vocabularies shared by every plugin:
//! diagram kinds, bundle categories, node shapes, edge styles and member
//! visibility.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::DiagramError;

/// The four diagram notations the renderer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagramKind {
    /// C4 component/container diagram
    Component,
    /// Flowchart with nodes and connections
    Flowchart,
    /// State machine diagram
    State,
    /// Class structure diagram
    Class,
}

impl DiagramKind {
    /// All supported kinds, in declaration order
    pub const ALL: [DiagramKind; 4] = [
        DiagramKind::Component,
        DiagramKind::Flowchart,
        DiagramKind::State,
        DiagramKind::Class,
    ];

    /// Name used when parsing and displaying the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagramKind::Component => "component",
            DiagramKind::Flowchart => "flowchart",
            DiagramKind::State => "state",
            DiagramKind::Class => "class",
        }
    }

    /// The diagram-type declaration that opens the fenced block
    pub fn declaration(&self) -> &'static str {
        match self {
            DiagramKind::Component => "C4Component",
            DiagramKind::Flowchart => "flowchart TD",
            DiagramKind::State => "stateDiagram-v2",
            DiagramKind::Class => "classDiagram",
        }
    }

    /// Short human description, used by `schematic kinds`
    pub fn description(&self) -> &'static str {
        match self {
            DiagramKind::Component => "Component/container architecture diagrams",
            DiagramKind::Flowchart => "Workflow diagrams with steps and decisions",
            DiagramKind::State => "State machines with composite states and transitions",
            DiagramKind::Class => "Class structures with attributes and methods",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagramKind {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "component" => Ok(DiagramKind::Component),
            "flowchart" => Ok(DiagramKind::Flowchart),
            "state" => Ok(DiagramKind::State),
            "class" => Ok(DiagramKind::Class),
            _ => Err(DiagramError::unsupported_kind(s)),
        }
    }
}

/// Semantic category a bundle entry is filed under
///
/// The declaration order is the canonical presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Architecture,
    Workflow,
    StateMachine,
    Class,
}

impl Category {
    /// Every category in presentation order
    pub const ALL: [Category; 4] = [
        Category::Architecture,
        Category::Workflow,
        Category::StateMachine,
        Category::Class,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Architecture => "architecture",
            Category::Workflow => "workflow",
            Category::StateMachine => "state_machine",
            Category::Class => "class",
        }
    }

    /// The diagram kind used to draw this category
    pub fn kind(&self) -> DiagramKind {
        match self {
            Category::Architecture => DiagramKind::Component,
            Category::Workflow => DiagramKind::Flowchart,
            Category::StateMachine => DiagramKind::State,
            Category::Class => DiagramKind::Class,
        }
    }

    /// Default section heading for composed documents
    pub fn title(&self) -> &'static str {
        match self {
            Category::Architecture => "System Architecture",
            Category::Workflow => "Workflow",
            Category::StateMachine => "State Machine",
            Category::Class => "Class Structure",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "architecture" => Ok(Category::Architecture),
            "workflow" => Ok(Category::Workflow),
            "state_machine" => Ok(Category::StateMachine),
            "class" => Ok(Category::Class),
            _ => Err(DiagramError::UnknownCategory {
                category: s.to_string(),
            }),
        }
    }
}

/// Flowchart node shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeShape {
    /// Rectangle: `A["label"]`
    #[default]
    Rectangle,
    /// Circle: `A(("label"))`
    Circle,
    /// Diamond (decision): `A{label}`
    Diamond,
}

impl fmt::Display for NodeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeShape::Rectangle => write!(f, "rectangle"),
            NodeShape::Circle => write!(f, "circle"),
            NodeShape::Diamond => write!(f, "diamond"),
        }
    }
}

/// Flowchart connection styles, displayed as their Mermaid arrow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    /// Solid arrow: `-->`
    #[default]
    Arrow,
    /// Solid line: `---`
    Line,
    /// Dotted arrow: `-.->`
    DottedArrow,
    /// Thick arrow: `==>`
    ThickArrow,
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeType::Arrow => write!(f, "-->"),
            EdgeType::Line => write!(f, "---"),
            EdgeType::DottedArrow => write!(f, "-.->"),
            EdgeType::ThickArrow => write!(f, "==>"),
        }
    }
}

/// Visibility marker for class members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public, // +
    Private,   // -
    Protected, // #
    Package,   // ~
}

impl Visibility {
    pub fn to_char(self) -> char {
        match self {
            Visibility::Public => '+',
            Visibility::Private => '-',
            Visibility::Protected => '#',
            Visibility::Package => '~',
        }
    }
}
