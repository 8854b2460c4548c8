//! Serde targets for the workflow JSON wire format.
//!
//! The wire shape is fixed by the existing document corpus: a top-level
//! `nodes` array plus a `connections` object mapping source node id to a
//! map of output-port name → array of `{node, type, index}` descriptors.
//! Fields required for validation (`id`, `name`, `type`) default to empty
//! strings so their absence surfaces as a structural finding rather than a
//! parse failure; `position` stays loosely typed for the same reason.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Output-port name → ordered connection targets for one source node.
pub type PortMap = IndexMap<String, Vec<ConnectionTarget>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub connections: IndexMap<String, PortMap>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Value>,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub parameters: serde_json::Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<IndexMap<String, CredentialRef>>,
    #[serde(default, alias = "typeVersion", skip_serializing_if = "Option::is_none")]
    pub version_tag: Option<Value>,
}

/// Reference to a stored credential. Both fields are needed for the
/// reference to resolve; either may be absent in hand-edited documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Directed edge from a source node's output port to a target node's input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionTarget {
    pub node: String,
    #[serde(rename = "type")]
    pub port_type: String,
    pub index: u32,
}

impl Node {
    /// Last `.`-separated segment of the type identifier, lowercased.
    /// Platform node types are namespaced (`vendor-nodes-base.webhook`).
    fn kind_segment(&self) -> String {
        self.kind
            .rsplit('.')
            .next()
            .unwrap_or(self.kind.as_str())
            .to_ascii_lowercase()
    }

    /// Trigger-like: no required inbound connection, conventionally the
    /// entry point of the graph.
    pub fn is_trigger(&self) -> bool {
        let segment = self.kind_segment();
        segment.ends_with("trigger") || segment.contains("webhook")
    }

    /// Conditional nodes can short-circuit a cycle, so the reachability
    /// analyzer treats loops through them as intentional.
    pub fn is_conditional(&self) -> bool {
        let segment = self.kind_segment();
        matches!(segment.as_str(), "if" | "switch" | "filter") || segment.contains("condition")
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.as_ref().is_some_and(|c| !c.is_empty())
    }
}

impl WorkflowDocument {
    /// All `(source id, port name, target)` triples, in document order.
    pub fn connection_targets(&self) -> impl Iterator<Item = (&str, &str, &ConnectionTarget)> {
        self.connections.iter().flat_map(|(source, ports)| {
            ports.iter().flat_map(move |(port, targets)| {
                targets
                    .iter()
                    .map(move |target| (source.as_str(), port.as_str(), target))
            })
        })
    }
}
