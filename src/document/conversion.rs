use super::definition::{FlowDocument, NodeRecord, TriggerType};
use crate::error::LoadError;
use crate::graph::{GraphModel, Node, NodeId, Size};
use crate::registry::NodeKind;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tracing::info;

impl FlowDocument {
    /// Flattens a graph into a document. Nodes are written in id order and
    /// connections in insertion order.
    pub fn capture(name: impl Into<String>, trigger_type: TriggerType, graph: &GraphModel) -> Self {
        Self {
            name: name.into(),
            trigger_type,
            nodes: graph.nodes().map(NodeRecord::from).collect(),
            connections: graph.connections().to_vec(),
        }
    }

    /// Rebuilds live graph state from a document.
    ///
    /// Node ids are kept and the id counter resumes after the largest one,
    /// which must leave room for at least one more node.
    /// Stored sizes are ignored since every node has the same fixed size.
    /// The graph itself is accepted as-is: self-loops, duplicate
    /// connections, cycles and orphans all load.
    pub fn into_graph(self) -> Result<GraphModel, LoadError> {
        let mut nodes = BTreeMap::new();
        for record in self.nodes {
            let kind = NodeKind::from_tag(&record.kind).ok_or_else(|| LoadError::UnknownNodeType {
                node_id: record.id,
                tag: record.kind.clone(),
            })?;
            match nodes.entry(record.id) {
                Entry::Occupied(_) => return Err(LoadError::DuplicateNodeId(record.id)),
                Entry::Vacant(slot) => {
                    slot.insert(Node {
                        id: record.id,
                        kind,
                        title: record.title,
                        position: record.position,
                        size: Size::NODE,
                        data: record.data,
                    });
                }
            }
        }

        for (index, connection) in self.connections.iter().enumerate() {
            if let Some(missing) = [connection.source, connection.target]
                .into_iter()
                .find(|id| !nodes.contains_key(id))
            {
                return Err(LoadError::DanglingConnection { index, missing });
            }
        }

        let counter = nodes.keys().next_back().map_or(0, |id: &NodeId| id.0);
        if counter == u32::MAX {
            return Err(LoadError::IdSpaceExhausted(NodeId(counter)));
        }
        info!(
            name = %self.name,
            nodes = nodes.len(),
            connections = self.connections.len(),
            "flow document loaded"
        );
        Ok(GraphModel::from_parts(nodes, self.connections, counter))
    }
}
