//! The flow graph: an id-keyed node arena plus an ordered connection list.

use crate::registry::NodeKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

mod geometry;

pub use geometry::{NODE_HEIGHT, NODE_WIDTH, Point, Rect, Size};

/// Flat property payload of a node, kept in schema order.
pub type NodeData = IndexMap<String, String>;

/// Stable node identifier. Assigned from a counter that only ever increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl From<u32> for NodeId {
    fn from(raw: u32) -> Self {
        NodeId(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub title: String,
    pub position: Point,
    pub size: Size,
    pub data: NodeData,
}

impl Node {
    pub fn new(id: NodeId, kind: NodeKind, title: impl Into<String>, position: Point) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
            position,
            size: Size::NODE,
            data: NodeData::new(),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            origin: self.position,
            size: self.size,
        }
    }

    /// Connection anchor. Curves start and end at node centres, not borders.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    #[serde(alias = "sourceId")]
    pub source: NodeId,
    #[serde(alias = "targetId")]
    pub target: NodeId,
    #[serde(default)]
    pub label: String,
}

impl Connection {
    pub fn touches(&self, id: NodeId) -> bool {
        self.source == id || self.target == id
    }
}

/// Owns every node and connection of one editing session.
///
/// Mutators never fail loudly: rejected operations return `None` or `false`
/// and leave the graph untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphModel {
    nodes: BTreeMap<NodeId, Node>,
    connections: Vec<Connection>,
    counter: u32,
}

impl GraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a graph from already validated parts. `counter` must be at
    /// least the largest id in `nodes`.
    pub(crate) fn from_parts(
        nodes: BTreeMap<NodeId, Node>,
        connections: Vec<Connection>,
        counter: u32,
    ) -> Self {
        Self {
            nodes,
            connections,
            counter,
        }
    }

    /// Appends a node under the next id. Returns `None`, leaving the graph
    /// untouched, once every id has been handed out.
    pub fn add_node(
        &mut self,
        kind: NodeKind,
        title: impl Into<String>,
        x: f64,
        y: f64,
    ) -> Option<&Node> {
        let Some(next) = self.counter.checked_add(1) else {
            warn!(%kind, "node id space exhausted");
            return None;
        };
        self.counter = next;
        let id = NodeId(next);
        debug_assert!(!self.nodes.contains_key(&id), "node id {} issued twice", id);
        self.nodes.insert(id, Node::new(id, kind, title, Point::new(x, y)));
        debug!(%id, %kind, x, y, "node added");
        self.nodes.get(&id)
    }

    /// Appends a connection. Self-loops and endpoints that are not in the
    /// graph are rejected; duplicates of an existing connection are not.
    pub fn add_connection(
        &mut self,
        source: NodeId,
        target: NodeId,
        label: impl Into<String>,
    ) -> Option<&Connection> {
        if source == target {
            debug!(%source, "self-loop connection rejected");
            return None;
        }
        if !self.nodes.contains_key(&source) || !self.nodes.contains_key(&target) {
            debug!(%source, %target, "connection to a missing node rejected");
            return None;
        }
        self.connections.push(Connection {
            source,
            target,
            label: label.into(),
        });
        debug!(%source, %target, total = self.connections.len(), "connection added");
        self.connections.last()
    }

    /// Removes a node and every connection touching it.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        let node = self.nodes.remove(&id)?;
        let before = self.connections.len();
        self.connections.retain(|c| !c.touches(id));
        debug!(%id, pruned = before - self.connections.len(), "node removed");
        Some(node)
    }

    pub fn find_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn find_node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn move_node(&mut self, id: NodeId, position: Point) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.position = position;
                true
            }
            None => false,
        }
    }

    /// Overwrites a node's data wholesale.
    pub fn replace_data(&mut self, id: NodeId, data: NodeData) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.data = data;
                true
            }
            None => false,
        }
    }

    /// Nodes in id order, which is also creation order.
    pub fn nodes(&self) -> impl DoubleEndedIterator<Item = &Node> + ExactSizeIterator {
        self.nodes.values()
    }

    /// Connections in insertion order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn connections_touching(&self, id: NodeId) -> impl Iterator<Item = &Connection> {
        self.connections.iter().filter(move |c| c.touches(id))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// The last id handed out. The next node gets `last_id() + 1`.
    pub fn last_id(&self) -> u32 {
        self.counter
    }

    /// Moves the id counter forward to at least `floor`. Never moves it back.
    pub(crate) fn raise_counter(&mut self, floor: u32) {
        self.counter = self.counter.max(floor);
    }
}
