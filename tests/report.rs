//! Integration tests for report aggregation: ordering, determinism, and the
//! serialized wire shape consumed by CI tooling.

use flowlint::parse;
use flowlint::report::Category;
use flowlint::validate;

/// A document exercising every checker at once.
const MIXED: &str = r#"{
    "name": "Everything Wrong At Once",
    "nodes": [
        { "id": "trigger-1", "name": "Start", "type": "n8n-nodes-base.webhook", "versionTag": 2 },
        { "id": "X", "name": "Step", "type": "n8n-nodes-base.httpRequest" },
        { "id": "X", "name": "Step Copy", "type": "n8n-nodes-base.httpRequest" }
    ],
    "connections": {
        "trigger-1": { "main": [ { "node": "missing", "type": "main", "index": 0 } ] }
    }
}"#;

#[test]
fn findings_follow_fixed_category_order() {
    let doc = parse::parse(MIXED).unwrap();
    let report = validate::validate(&doc);
    assert!(!report.passed);

    let rank = |c: &Category| match c {
        Category::Structural => 0,
        Category::Referential => 1,
        Category::Reachability => 2,
        Category::ProductionPattern => 3,
    };
    let ranks: Vec<u8> = report.findings.iter().map(|f| rank(&f.category)).collect();
    let mut sorted = ranks.clone();
    sorted.sort();
    assert_eq!(ranks, sorted, "category order must be fixed: {report:?}");
    assert!(report.findings.iter().any(|f| f.category == Category::Structural));
    assert!(report.findings.iter().any(|f| f.category == Category::Referential));
    assert!(report.findings.iter().any(|f| f.category == Category::ProductionPattern));
}

#[test]
fn validation_is_idempotent() {
    for json in [
        MIXED,
        include_str!("fixtures/linear_workflow.json"),
        include_str!("fixtures/orphan_node.json"),
        include_str!("fixtures/cycle.json"),
    ] {
        let doc = parse::parse(json).unwrap();
        let first = validate::validate(&doc);
        let second = validate::validate(&doc);
        assert_eq!(first, second, "same document must yield the same report");
    }
}

#[test]
fn no_checker_suppresses_another() {
    let doc = parse::parse(MIXED).unwrap();
    let report = validate::validate(&doc);
    // Structural fatal (duplicate id) and referential fatal (dangling target)
    // must both be present.
    assert!(report.fatal_count() >= 2, "{report:?}");
}

#[test]
fn report_serializes_to_the_documented_shape() {
    let doc = parse::parse(include_str!("fixtures/missing_credentials.json")).unwrap();
    let report = validate::validate(&doc);
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["passed"], serde_json::json!(true));
    let findings = value["findings"].as_array().unwrap();
    assert!(!findings.is_empty());

    let with_node = findings
        .iter()
        .find(|f| f.get("nodeId").is_some())
        .expect("a node-scoped finding");
    assert_eq!(with_node["severity"], "warning");
    assert_eq!(with_node["category"], "production-pattern");
    assert_eq!(with_node["nodeId"], "trigger-1");

    // Graph-level findings omit nodeId entirely instead of serializing null.
    let graph_level = findings
        .iter()
        .find(|f| f.get("nodeId").is_none())
        .expect("a graph-level finding");
    assert!(graph_level["message"].as_str().unwrap().contains("error handling"));
}

#[test]
fn clean_document_report_snapshot() {
    let doc = parse::parse(include_str!("fixtures/error_path.json")).unwrap();
    let report = validate::validate(&doc);
    insta::assert_json_snapshot!("clean_report", report);
}
