//! Production-readiness rules. All advisory: nothing here is fatal.

use serde_json::Value;

use crate::parse::types::WorkflowDocument;
use crate::report::{Category, Finding};

pub fn check(doc: &WorkflowDocument) -> Vec<Finding> {
    let mut findings = Vec::new();

    for node in &doc.nodes {
        let node_id = (!node.id.is_empty()).then(|| node.id.clone());

        if node.is_trigger() && !node.has_credentials() {
            findings.push(Finding::warning(
                Category::ProductionPattern,
                format!("trigger node '{}' has no credential configuration", node.name),
                node_id.clone(),
            ));
        }

        if let Some(auth) = node.parameters.get("authentication") {
            if is_disabling(auth) {
                findings.push(Finding::warning(
                    Category::ProductionPattern,
                    format!("node '{}' has authentication disabled", node.name),
                    node_id.clone(),
                ));
            }
        }

        if node.version_tag.is_none() {
            findings.push(Finding::warning(
                Category::ProductionPattern,
                format!("node '{}' is missing a version tag", node.name),
                node_id.clone(),
            ));
        }

        if let Some(credentials) = &node.credentials {
            for (kind, cred) in credentials {
                if cred.id.is_none() || cred.name.is_none() {
                    findings.push(Finding::warning(
                        Category::ProductionPattern,
                        format!("incomplete credential reference '{kind}' on node '{}'", node.name),
                        node_id.clone(),
                    ));
                }
            }
        }
    }

    if !has_error_path(doc) {
        findings.push(Finding::warning(
            Category::ProductionPattern,
            "no error handling path detected",
            None,
        ));
    }

    findings
}

/// A workflow has an error path when some node receives a connection over
/// an error-typed port.
fn has_error_path(doc: &WorkflowDocument) -> bool {
    doc.connection_targets()
        .any(|(_, port, target)| port == "error" || target.port_type == "error")
}

fn is_disabling(value: &Value) -> bool {
    match value {
        Value::String(s) => matches!(s.to_ascii_lowercase().as_str(), "none" | "disabled"),
        Value::Bool(enabled) => !enabled,
        _ => false,
    }
}
