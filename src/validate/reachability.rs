//! Reachability analysis: entry points, orphaned nodes, loop heuristics.

use std::collections::HashSet;

use petgraph::graph::NodeIndex;
use petgraph::visit::Bfs;

use crate::parse::graph::WorkflowGraph;
use crate::parse::types::WorkflowDocument;
use crate::report::{Category, Finding};

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

pub fn check(doc: &WorkflowDocument, graph: &WorkflowGraph) -> Vec<Finding> {
    let mut findings = Vec::new();
    if doc.nodes.is_empty() {
        return findings;
    }

    // Entry points, in document order: trigger-like nodes, or, when the
    // document has none, nodes with no incoming edges. The fallback keeps
    // the analysis meaningful for trigger-less documents without hiding
    // disconnected nodes behind their own zero in-degree.
    let has_trigger = doc.nodes.iter().any(|n| n.is_trigger());
    let mut entries: Vec<&str> = Vec::new();
    let mut entry_ids: HashSet<&str> = HashSet::new();
    for node in &doc.nodes {
        if node.id.is_empty() {
            continue;
        }
        let is_entry = if has_trigger {
            node.is_trigger()
        } else {
            graph.incoming_count(&node.id) == 0
        };
        if is_entry && entry_ids.insert(node.id.as_str()) {
            entries.push(node.id.as_str());
        }
    }

    if entries.is_empty() {
        findings.push(Finding::fatal(
            Category::Reachability,
            "no reachable entry point: every node has incoming connections and none is a trigger",
            None,
        ));
        return findings;
    }

    // A workflow without a trigger still validates but cannot start on its
    // own; advisory only.
    if !has_trigger {
        findings.push(Finding::warning(
            Category::Reachability,
            "workflow has no trigger node",
            None,
        ));
    }

    let mut visited: HashSet<NodeIndex> = HashSet::new();
    for entry in &entries {
        let Some(&start) = graph.node_indices.get(*entry) else {
            continue;
        };
        let mut bfs = Bfs::new(&graph.graph, start);
        while let Some(nx) = bfs.next(&graph.graph) {
            visited.insert(nx);
        }
    }

    let mut reported_orphans: HashSet<NodeIndex> = HashSet::new();
    for node in &doc.nodes {
        let Some(&idx) = graph.node_indices.get(&node.id) else {
            continue;
        };
        if !visited.contains(&idx) && reported_orphans.insert(idx) {
            findings.push(Finding::warning(
                Category::Reachability,
                format!("node '{}' is not reachable from any entry point", node.id),
                Some(node.id.clone()),
            ));
        }
    }

    detect_loops(doc, graph, &mut findings);

    findings
}

/// Depth-first search recording the recursion stack; every back edge closes
/// a cycle. Cycles are a legitimate pattern when a conditional node on the
/// cycle can break out of it, so only cycles with no conditional node are
/// flagged, and never as fatal. Heuristic, not a guarantee.
fn detect_loops(doc: &WorkflowDocument, graph: &WorkflowGraph, findings: &mut Vec<Finding>) {
    let conditional: HashSet<NodeIndex> = doc
        .nodes
        .iter()
        .filter(|n| n.is_conditional())
        .filter_map(|n| graph.node_indices.get(&n.id).copied())
        .collect();

    let mut marks = vec![Mark::Unvisited; graph.graph.node_count()];
    let mut path: Vec<NodeIndex> = Vec::new();
    let mut flagged: HashSet<NodeIndex> = HashSet::new();

    for node in &doc.nodes {
        let Some(&idx) = graph.node_indices.get(&node.id) else {
            continue;
        };
        if marks[idx.index()] == Mark::Unvisited {
            dfs(graph, idx, &conditional, &mut marks, &mut path, &mut flagged, findings);
        }
    }
}

fn dfs(
    graph: &WorkflowGraph,
    current: NodeIndex,
    conditional: &HashSet<NodeIndex>,
    marks: &mut Vec<Mark>,
    path: &mut Vec<NodeIndex>,
    flagged: &mut HashSet<NodeIndex>,
    findings: &mut Vec<Finding>,
) {
    marks[current.index()] = Mark::OnStack;
    path.push(current);

    for succ in graph.successor_indices(current) {
        match marks[succ.index()] {
            Mark::OnStack => {
                let Some(start) = path.iter().position(|&p| p == succ) else {
                    continue;
                };
                let cycle = &path[start..];
                if !cycle.iter().any(|ix| conditional.contains(ix)) && flagged.insert(succ) {
                    findings.push(Finding::warning(
                        Category::Reachability,
                        format!(
                            "potential infinite loop: cycle through node '{}' has no conditional node",
                            graph.graph[succ]
                        ),
                        Some(graph.graph[succ].clone()),
                    ));
                }
            }
            Mark::Unvisited => {
                dfs(graph, succ, conditional, marks, path, flagged, findings);
            }
            Mark::Done => {}
        }
    }

    path.pop();
    marks[current.index()] = Mark::Done;
}
