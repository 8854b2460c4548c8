//! Referential integrity of the connections map.

use std::collections::HashSet;

use crate::parse::types::WorkflowDocument;
use crate::report::{Category, Finding};

/// Every connections key and every target must name an existing node.
/// A node with zero outgoing connections is fine here; the output side is
/// covered by the reachability analyzer.
pub fn check(doc: &WorkflowDocument) -> Vec<Finding> {
    let known: HashSet<&str> = doc.nodes.iter().map(|n| n.id.as_str()).collect();
    let mut findings = Vec::new();

    for (source, ports) in &doc.connections {
        if !known.contains(source.as_str()) {
            findings.push(Finding::fatal(
                Category::Referential,
                format!("connections originate from unknown node '{source}'"),
                None,
            ));
        }
        for (port, targets) in ports {
            for target in targets {
                if !known.contains(target.node.as_str()) {
                    findings.push(Finding::fatal(
                        Category::Referential,
                        format!(
                            "connection '{source}' -> '{}' (port '{port}') references an unknown target node",
                            target.node
                        ),
                        known.contains(source.as_str()).then(|| source.clone()),
                    ));
                } else if target.node == *source {
                    // No universal platform rule forbids self-loops.
                    findings.push(Finding::warning(
                        Category::Referential,
                        format!("node '{source}' connects to itself (port '{port}')"),
                        Some(source.clone()),
                    ));
                }
            }
        }
    }

    findings
}
