//! petgraph-based directed graph wrapper for the workflow document.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::types::WorkflowDocument;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeLabel {
    pub port: String,
    pub target_index: u32,
}

pub struct WorkflowGraph {
    pub graph: DiGraph<String, EdgeLabel>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl WorkflowGraph {
    /// Build the graph from a parsed document. Never fails: edges whose
    /// endpoints are unknown are skipped here and reported by the
    /// referential checker; duplicate node ids resolve to the first
    /// occurrence and are reported by the structural checker.
    pub fn build(doc: &WorkflowDocument) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices: HashMap<String, NodeIndex> = HashMap::new();

        for node in &doc.nodes {
            if node.id.is_empty() || node_indices.contains_key(&node.id) {
                continue;
            }
            let idx = graph.add_node(node.id.clone());
            node_indices.insert(node.id.clone(), idx);
        }

        for (source, port, target) in doc.connection_targets() {
            let (Some(&s), Some(&t)) = (node_indices.get(source), node_indices.get(&target.node))
            else {
                continue;
            };
            graph.add_edge(
                s,
                t,
                EdgeLabel {
                    port: port.to_string(),
                    target_index: target.index,
                },
            );
        }

        WorkflowGraph { graph, node_indices }
    }

    /// Successor indices in document order. petgraph yields outgoing edges
    /// most-recent-first, so the iteration is reversed.
    pub fn successor_indices(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut out: Vec<NodeIndex> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| e.target())
            .collect();
        out.reverse();
        out
    }

    pub fn successors(&self, node_id: &str) -> Vec<(&str, &EdgeLabel)> {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return vec![];
        };
        let mut out: Vec<(&str, &EdgeLabel)> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (self.graph[e.target()].as_str(), e.weight()))
            .collect();
        out.reverse();
        out
    }

    pub fn incoming_count(&self, node_id: &str) -> usize {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return 0;
        };
        self.graph
            .edges_directed(idx, Direction::Incoming)
            .count()
    }

    pub fn outgoing_count(&self, node_id: &str) -> usize {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return 0;
        };
        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .count()
    }
}
