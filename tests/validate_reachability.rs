//! Integration tests for the reachability analyzer.

use flowlint::parse;
use flowlint::report::{Category, Severity};
use flowlint::validate;

fn reachability_findings(json: &str) -> Vec<flowlint::report::Finding> {
    let (doc, graph) = parse::parse_and_build(json).unwrap();
    validate::reachability::check(&doc, &graph)
}

#[test]
fn linear_workflow_has_no_reachability_findings() {
    let findings = reachability_findings(include_str!("fixtures/linear_workflow.json"));
    assert!(findings.is_empty(), "expected none, got: {findings:?}");
}

#[test]
fn unconnected_node_is_an_orphan_warning() {
    let doc = parse::parse(include_str!("fixtures/orphan_node.json")).unwrap();
    let report = validate::validate(&doc);
    assert!(report.passed, "orphans are warnings, not fatal: {report:?}");

    let orphans: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.category == Category::Reachability)
        .collect();
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0].severity, Severity::Warning);
    assert_eq!(orphans[0].node_id.as_deref(), Some("action-2"));
}

#[test]
fn reachable_nodes_are_never_flagged() {
    let findings = reachability_findings(include_str!("fixtures/orphan_node.json"));
    assert!(findings.iter().all(|f| f.node_id.as_deref() != Some("action-1")));
    assert!(findings.iter().all(|f| f.node_id.as_deref() != Some("trigger-1")));
}

#[test]
fn no_entry_point_is_fatal_and_stops_analysis() {
    let findings = reachability_findings(include_str!("fixtures/no_entry.json"));
    assert_eq!(findings.len(), 1, "analysis stops after the entry-point fatal");
    assert_eq!(findings[0].severity, Severity::Fatal);
    assert!(findings[0].message.contains("entry point"));
}

#[test]
fn cycle_without_conditional_is_flagged() {
    let findings = reachability_findings(include_str!("fixtures/cycle.json"));
    let loops: Vec<_> = findings
        .iter()
        .filter(|f| f.message.contains("infinite loop"))
        .collect();
    assert_eq!(loops.len(), 1, "one warning per distinct cycle: {findings:?}");
    assert_eq!(loops[0].severity, Severity::Warning);
    assert_eq!(loops[0].node_id.as_deref(), Some("a"));
}

#[test]
fn cycle_through_conditional_is_not_flagged() {
    let findings = reachability_findings(include_str!("fixtures/cycle_with_condition.json"));
    assert!(
        findings.iter().all(|f| !f.message.contains("infinite loop")),
        "loops through a conditional are intentional: {findings:?}"
    );
}

#[test]
fn trigger_less_workflow_gets_advisory_warning() {
    let json = r#"{
        "nodes": [
            { "id": "a", "name": "A", "type": "n8n-nodes-base.httpRequest", "versionTag": 1 },
            { "id": "b", "name": "B", "type": "n8n-nodes-base.httpRequest", "versionTag": 1 }
        ],
        "connections": {
            "a": { "main": [ { "node": "b", "type": "main", "index": 0 } ] }
        }
    }"#;
    let findings = reachability_findings(json);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity, Severity::Warning);
    assert!(findings[0].message.contains("no trigger"));
}
