use crate::error::LoadError;
use crate::graph::{Connection, Node, NodeData, NodeId, Point, Size};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a saved flow is started by the campaign backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerType {
    #[default]
    Inbound,
    Outbound,
    Message,
    Webhook,
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            TriggerType::Inbound => "inbound",
            TriggerType::Outbound => "outbound",
            TriggerType::Message => "message",
            TriggerType::Webhook => "webhook",
        };
        write!(f, "{}", tag)
    }
}

/// The persisted form of a flow, as handed to and read back from a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowDocument {
    pub name: String,
    #[serde(rename = "triggerType", alias = "trigger_type", default)]
    pub trigger_type: TriggerType,
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

/// A node as stored in a document. The type stays a plain tag until the
/// document is loaded, so unknown tags can be reported with their node id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, alias = "name")]
    pub title: String,
    pub position: Point,
    #[serde(default)]
    pub size: Size,
    #[serde(default)]
    pub data: NodeData,
}

impl From<&Node> for NodeRecord {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id,
            kind: node.kind.tag().to_string(),
            title: node.title.clone(),
            position: node.position,
            size: node.size,
            data: node.data.clone(),
        }
    }
}

impl FlowDocument {
    /// Parses a document from JSON without validating the graph.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(|e| LoadError::JsonParseError(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
