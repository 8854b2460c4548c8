//! Static validation for node-graph workflow documents.
//!
//! Pipeline: `parse` decodes a workflow JSON into typed structures and a
//! directed graph; `validate` runs the structural, referential, reachability
//! and production-pattern checkers and aggregates their findings into a
//! [`report::ValidationReport`].

pub mod error;
pub mod parse;
pub mod report;
pub mod validate;
