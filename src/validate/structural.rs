//! Required-field and well-formedness checks over the raw document.

use std::collections::{HashMap, HashSet};

use crate::parse::types::WorkflowDocument;
use crate::report::{Category, Finding};

/// Single linear pass over the nodes. All findings here are fatal.
pub fn check(doc: &WorkflowDocument) -> Vec<Finding> {
    let mut findings = Vec::new();

    if doc.nodes.is_empty() {
        findings.push(Finding::fatal(
            Category::Structural,
            "workflow has no nodes",
            None,
        ));
        return findings;
    }

    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut reported_duplicates: HashSet<&str> = HashSet::new();

    for (index, node) in doc.nodes.iter().enumerate() {
        let node_id = (!node.id.is_empty()).then(|| node.id.clone());

        for (field, value) in [("id", &node.id), ("name", &node.name), ("type", &node.kind)] {
            if value.trim().is_empty() {
                findings.push(Finding::fatal(
                    Category::Structural,
                    format!("node at index {index} is missing required field '{field}'"),
                    node_id.clone(),
                ));
            }
        }

        if let Some(position) = &node.position {
            let well_formed = position
                .as_array()
                .is_some_and(|coords| coords.len() == 2 && coords.iter().all(|c| c.is_number()));
            if !well_formed {
                findings.push(Finding::fatal(
                    Category::Structural,
                    format!("node at index {index} has a non-numeric position"),
                    node_id.clone(),
                ));
            }
        }

        if node.id.is_empty() {
            continue;
        }
        match first_seen.get(node.id.as_str()) {
            Some(&first) => {
                // One finding per duplicated id value, naming both occurrences.
                if reported_duplicates.insert(node.id.as_str()) {
                    findings.push(Finding::fatal(
                        Category::Structural,
                        format!(
                            "duplicate node id '{}' (first used at index {first}, reused at index {index})",
                            node.id
                        ),
                        node_id,
                    ));
                }
            }
            None => {
                first_seen.insert(node.id.as_str(), index);
            }
        }
    }

    findings
}
