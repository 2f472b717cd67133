//! Plugin implementations for the supported diagram kinds
//!
//! Each kind plugin implements the core traits for one notation. The
//! analyzer runs all of them over a document and the composer splices their
//! output back into it.

pub mod analyzer;
pub mod class;
pub mod component;
pub mod document;
pub mod fallback;
pub mod flowchart;
pub mod state;

pub use analyzer::*;
pub use class::*;
pub use component::*;
pub use document::*;
pub use flowchart::*;
pub use state::*;
