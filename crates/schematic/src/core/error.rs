//! Core error types for diagram processing
//!
//! Extraction absorbs every failure, so the only errors the pipeline raises
//! come from rendering requests and category lookups.

use thiserror::Error;

/// Core error types for diagram processing
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Unsupported diagram type: {kind}")]
    UnsupportedKind { kind: String },

    #[error("Unknown diagram category: {category}")]
    UnknownCategory { category: String },
}

impl DiagramError {
    /// Create a new unsupported-kind error
    pub fn unsupported_kind(kind: impl Into<String>) -> Self {
        Self::UnsupportedKind { kind: kind.into() }
    }

    /// The offending kind, if this is an `UnsupportedKind` error
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::UnsupportedKind { kind } => Some(kind.as_str()),
            _ => None,
        }
    }
}
