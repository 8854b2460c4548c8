//! Parse phase: JSON → Rust types + graph construction.

pub mod graph;
pub mod types;

pub use graph::WorkflowGraph;
pub use types::*;

use std::path::Path;

use crate::error::ParseError;

/// Deserialize a workflow JSON string into a `WorkflowDocument`.
/// Purely syntactic; semantic checks belong to the validate phase.
pub fn parse(json: &str) -> Result<WorkflowDocument, ParseError> {
    Ok(serde_json::from_str::<WorkflowDocument>(json)?)
}

/// Read and parse a workflow file.
pub fn parse_file(path: &Path) -> Result<WorkflowDocument, ParseError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&raw)
}

/// Parse JSON and build the graph in one step.
pub fn parse_and_build(json: &str) -> Result<(WorkflowDocument, WorkflowGraph), ParseError> {
    let doc = parse(json)?;
    let graph = WorkflowGraph::build(&doc);
    Ok((doc, graph))
}
