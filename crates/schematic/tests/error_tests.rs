//! Tests for core error types

use schematic::core::{Category, DiagramError, DiagramKind};
use std::str::FromStr;

#[test]
fn test_unsupported_kind_display() {
    let error = DiagramError::unsupported_kind("mindmap");
    assert_eq!(error.to_string(), "Unsupported diagram type: mindmap");
}

#[test]
fn test_kind_parse_error_carries_value() {
    let error = DiagramKind::from_str("Sequence").unwrap_err();
    assert!(matches!(
        &error,
        DiagramError::UnsupportedKind { kind } if kind == "Sequence"
    ));
}

#[test]
fn test_category_parse_error() {
    let error = Category::from_str("timeline").unwrap_err();
    assert_eq!(error.to_string(), "Unknown diagram category: timeline");
    assert_eq!(error.kind(), None);
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&DiagramError::unsupported_kind("x"));
}

#[test]
fn test_round_trip_names() {
    for kind in DiagramKind::ALL {
        assert_eq!(DiagramKind::from_str(kind.as_str()).unwrap(), kind);
    }
    for category in Category::ALL {
        assert_eq!(Category::from_str(category.as_str()).unwrap(), category);
    }
}
