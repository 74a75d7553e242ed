//! propdoc — documentation for component props declared as
//! `interface PropTypes { ... }` in TypeScript/TSX sources.
//!
//! Pipeline: [`matcher`] expands glob patterns, [`source`] parses each file
//! with tree-sitter, [`parser`] locates the `PropTypes` members and parses
//! their doc blocks, and [`render`] prints the resulting mapping.

pub mod config;
pub mod matcher;
pub mod model;
pub mod parser;
pub mod render;
pub mod source;

pub use model::{AnalysisItem, AnalysisResults, Tag};
pub use parser::{analyze, Analysis};
