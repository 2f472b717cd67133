//! Core abstractions for diagram extraction and rendering
//!
//! This module defines the traits every diagram kind implements and the
//! shared vocabulary types. Each kind pairs a pattern-based extractor with a
//! deterministic markup renderer over an immutable description.

mod database;
mod diagram;
mod error;
mod extractor;
pub mod logging;
mod renderer;
mod rules;
mod types;

pub use database::*;
pub use diagram::*;
pub use error::*;
pub use extractor::*;
pub use logging::*;
pub use renderer::*;
pub use rules::*;
pub use types::*;
