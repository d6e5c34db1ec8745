//! Pointer-driven interaction state machine.
//!
//! The controller consumes pointer events in canvas coordinates, mutates the
//! graph, and reports an [`Effect`] telling the caller what to repaint. It
//! never touches a drawing surface itself, so it runs the same headless.

use crate::graph::{GraphModel, NodeId, Point};
use tracing::trace;

pub mod hit;

pub use hit::{HitTarget, hit_test};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionState {
    Idle,
    DraggingNode {
        node: NodeId,
        /// Pointer position relative to the node's top-left corner at grab time.
        offset: Point,
    },
    DraggingConnection {
        source: NodeId,
        pointer: Point,
    },
}

/// What the caller has to repaint after an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// Repaint permanent connections only.
    Redraw,
    /// Repaint permanent connections, then an ephemeral curve between the points.
    Preview { from: Point, to: Point },
}

#[derive(Debug, Clone)]
pub struct InteractionController {
    state: InteractionState,
    selection: Option<NodeId>,
    connector_size: f64,
}

impl InteractionController {
    pub fn new(connector_size: f64) -> Self {
        Self {
            state: InteractionState::Idle,
            selection: None,
            connector_size,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn selection(&self) -> Option<NodeId> {
        self.selection
    }

    /// Drops the selection and any gesture in flight.
    pub fn reset(&mut self) {
        self.state = InteractionState::Idle;
        self.selection = None;
    }

    /// Forgets references to nodes that are no longer in `graph`.
    pub fn sync(&mut self, graph: &GraphModel) {
        if self.selection.is_some_and(|id| !graph.contains(id)) {
            self.selection = None;
        }
        let stale = match self.state {
            InteractionState::Idle => false,
            InteractionState::DraggingNode { node, .. } => !graph.contains(node),
            InteractionState::DraggingConnection { source, .. } => !graph.contains(source),
        };
        if stale {
            self.state = InteractionState::Idle;
        }
    }

    pub fn handle(&mut self, graph: &mut GraphModel, event: PointerEvent) -> Effect {
        match event {
            PointerEvent::Down(at) => self.pointer_down(graph, at),
            PointerEvent::Move(at) => self.pointer_move(graph, at),
            PointerEvent::Up(at) => self.pointer_up(graph, at),
        }
    }

    pub fn pointer_down(&mut self, graph: &mut GraphModel, at: Point) -> Effect {
        let target = hit_test(graph, at, self.connector_size);
        trace!(?target, state = ?self.state, "pointer down");
        match (target, self.state) {
            // Output connectors start a connection from any state.
            (HitTarget::OutputConnector(source), _) => {
                self.state = InteractionState::DraggingConnection { source, pointer: at };
                Effect::None
            }
            (HitTarget::NodeBody(id), InteractionState::Idle) => {
                let Some(node) = graph.find_node(id) else {
                    return Effect::None;
                };
                self.selection = Some(id);
                self.state = InteractionState::DraggingNode {
                    node: id,
                    offset: at - node.position,
                };
                Effect::None
            }
            (HitTarget::Canvas, InteractionState::Idle) => {
                self.selection = None;
                Effect::None
            }
            _ => Effect::None,
        }
    }

    pub fn pointer_move(&mut self, graph: &mut GraphModel, at: Point) -> Effect {
        match self.state {
            InteractionState::Idle => Effect::None,
            InteractionState::DraggingNode { node, offset } => {
                if graph.move_node(node, at - offset) {
                    Effect::Redraw
                } else {
                    Effect::None
                }
            }
            InteractionState::DraggingConnection { source, .. } => {
                let Some(from) = graph.find_node(source).map(|n| n.center()) else {
                    return Effect::None;
                };
                self.state = InteractionState::DraggingConnection { source, pointer: at };
                Effect::Preview { from, to: at }
            }
        }
    }

    pub fn pointer_up(&mut self, graph: &mut GraphModel, at: Point) -> Effect {
        let state = std::mem::replace(&mut self.state, InteractionState::Idle);
        match state {
            InteractionState::Idle => Effect::None,
            InteractionState::DraggingNode { node, .. } => {
                trace!(%node, "node drag finished");
                Effect::None
            }
            InteractionState::DraggingConnection { source, .. } => {
                match hit_test(graph, at, self.connector_size) {
                    HitTarget::InputConnector(target) if target != source => {
                        graph.add_connection(source, target, "");
                    }
                    target => trace!(%source, ?target, "connection drag discarded"),
                }
                Effect::Redraw
            }
        }
    }
}
