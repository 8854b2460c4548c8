//! Validation phase: independent checkers over the parsed document, merged
//! into one report.
//!
//! Each checker is a pure `(&WorkflowDocument) -> Vec<Finding>` function;
//! none suppresses another, so a structural failure still yields the full
//! referential/reachability/production picture for the document.

pub mod production;
pub mod reachability;
pub mod referential;
pub mod structural;

use crate::parse::graph::WorkflowGraph;
use crate::parse::types::WorkflowDocument;
use crate::report::ValidationReport;

/// Validate a parsed document: build the graph, run every checker, and
/// aggregate findings in fixed category order (structural, referential,
/// reachability, production-pattern).
pub fn validate(doc: &WorkflowDocument) -> ValidationReport {
    let graph = WorkflowGraph::build(doc);
    validate_with_graph(doc, &graph)
}

/// Same as [`validate`] for callers that already built the graph.
pub fn validate_with_graph(doc: &WorkflowDocument, graph: &WorkflowGraph) -> ValidationReport {
    let mut findings = structural::check(doc);
    findings.extend(referential::check(doc));
    findings.extend(reachability::check(doc, graph));
    findings.extend(production::check(doc));
    ValidationReport::from_findings(findings)
}
