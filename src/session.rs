//! One editing session: a graph, the surface it is painted on, and the
//! controllers that route gestures between them.

use crate::config::EditorConfig;
use crate::document::{FlowDocument, FlowStore, GraphSnapshot, TriggerType};
use crate::error::{LoadError, PropertyError, SaveError, SnapshotError};
use crate::graph::{GraphModel, NodeId, Point};
use crate::history::UndoHistory;
use crate::interaction::{Effect, InteractionController, InteractionState, PointerEvent};
use crate::properties::PropertyEditor;
use crate::render::{DrawSurface, PendingConnection, RenderEngine};
use crate::toolbox::DragPayload;
use tracing::{info, warn};

/// Asks the operator to confirm a destructive action.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

pub struct EditorSession<S: DrawSurface> {
    graph: GraphModel,
    surface: S,
    renderer: RenderEngine,
    controller: InteractionController,
    history: UndoHistory,
    config: EditorConfig,
    name: String,
    trigger_type: TriggerType,
    /// Graph state at the start of the current pointer gesture.
    gesture_start: Option<GraphSnapshot>,
}

impl<S: DrawSurface> EditorSession<S> {
    /// Starts a session, placing the configured seed node if any.
    pub fn new(config: EditorConfig, surface: S) -> Self {
        let mut graph = GraphModel::new();
        if let Some(seed) = &config.seed {
            graph.add_node(seed.kind, seed.title.clone(), seed.x, seed.y);
        }
        let mut session = Self {
            graph,
            surface,
            renderer: RenderEngine::new(config.clone()),
            controller: InteractionController::new(config.connector_size),
            history: UndoHistory::new(config.history_limit),
            config,
            name: String::new(),
            trigger_type: TriggerType::default(),
            gesture_start: None,
        };
        session.redraw();
        session
    }

    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn renderer(&self) -> &RenderEngine {
        &self.renderer
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn selection(&self) -> Option<NodeId> {
        self.controller.selection()
    }

    pub fn interaction_state(&self) -> InteractionState {
        self.controller.state()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn trigger_type(&self) -> TriggerType {
        self.trigger_type
    }

    pub fn set_trigger_type(&mut self, trigger_type: TriggerType) {
        self.trigger_type = trigger_type;
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Repaints permanent connections.
    pub fn redraw(&mut self) {
        self.renderer.redraw(&self.graph, &mut self.surface, None);
    }

    /// Feeds one pointer event through the interaction controller and
    /// repaints as it asks. A gesture that changed the graph becomes one
    /// undo step when the pointer is released.
    pub fn pointer(&mut self, event: PointerEvent) -> Effect {
        if matches!(event, PointerEvent::Down(_)) && self.gesture_start.is_none() {
            self.gesture_start = self.snapshot();
        }

        let effect = self.controller.handle(&mut self.graph, event);
        match effect {
            Effect::None => {}
            Effect::Redraw => self.redraw(),
            Effect::Preview { from, to } => {
                let pending = PendingConnection { from, to };
                self.renderer
                    .redraw(&self.graph, &mut self.surface, Some(pending));
            }
        }

        if matches!(event, PointerEvent::Up(_)) {
            if let Some(before) = self.gesture_start.take() {
                if self.snapshot().is_some_and(|after| after != before) {
                    self.history.checkpoint(before);
                }
            }
        }
        effect
    }

    /// Handles a toolbox drop at a client-space point. Returns `None` for an
    /// unknown tag or when the graph has no ids left.
    pub fn drop_payload(&mut self, payload: &DragPayload, client: Point) -> Option<NodeId> {
        let Some(kind) = payload.kind() else {
            warn!(tag = %payload.0, "ignoring drop of unknown node type");
            return None;
        };
        let before = self.snapshot();
        let at = client - self.config.canvas_origin;
        let id = self.graph.add_node(kind, kind.title(), at.x, at.y)?.id;
        if let Some(before) = before {
            self.history.checkpoint(before);
        }
        if self.config.seed_defaults {
            self.graph.replace_data(id, kind.default_data());
        }
        self.redraw();
        Some(id)
    }

    /// Deletes a node and its connections once the operator confirms.
    /// Returns whether anything was deleted.
    pub fn delete_node(&mut self, id: NodeId, confirm: &mut impl Confirm) -> bool {
        let Some(node) = self.graph.find_node(id) else {
            return false;
        };
        let touching = self.graph.connections_touching(id).count();
        let prompt = format!(
            "Delete \"{}\" (#{})? {} connection(s) will also be removed.",
            node.title, id, touching
        );
        if !confirm.confirm(&prompt) {
            return false;
        }
        self.checkpoint();
        self.graph.remove_node(id);
        self.controller.sync(&self.graph);
        self.redraw();
        true
    }

    pub fn open_properties(&self, id: NodeId) -> Option<PropertyEditor> {
        self.graph.find_node(id).map(PropertyEditor::open)
    }

    pub fn commit_properties(&mut self, editor: &PropertyEditor) -> Result<(), PropertyError> {
        editor.collect()?;
        if !self.graph.contains(editor.node()) {
            return Err(PropertyError::NodeNotFound(editor.node()));
        }
        self.checkpoint();
        editor.commit(&mut self.graph)
    }

    /// Hands the current flow to `store`. An empty name blocks the save.
    pub fn save_flow(&self, store: &mut impl FlowStore) -> Result<FlowDocument, SaveError> {
        if self.name.trim().is_empty() {
            return Err(SaveError::MissingName);
        }
        let document = FlowDocument::capture(self.name.trim(), self.trigger_type, &self.graph);
        store.save(&document)?;
        info!(
            name = %document.name,
            nodes = document.nodes.len(),
            connections = document.connections.len(),
            "flow saved"
        );
        Ok(document)
    }

    /// Replaces the graph with a previously saved flow. The replaced graph
    /// stays reachable through undo.
    pub fn load_document(&mut self, document: FlowDocument) -> Result<(), LoadError> {
        let name = document.name.clone();
        let trigger_type = document.trigger_type;
        let graph = document.into_graph()?;
        self.checkpoint();
        self.graph = graph;
        self.name = name;
        self.trigger_type = trigger_type;
        self.controller.reset();
        self.redraw();
        Ok(())
    }

    pub fn undo(&mut self) -> Result<bool, SnapshotError> {
        let restored = self.history.undo(&self.graph)?;
        Ok(self.restore(restored))
    }

    pub fn redo(&mut self) -> Result<bool, SnapshotError> {
        let restored = self.history.redo(&self.graph)?;
        Ok(self.restore(restored))
    }

    fn restore(&mut self, restored: Option<GraphModel>) -> bool {
        let Some(mut graph) = restored else {
            return false;
        };
        // Ids issued before the undo stay retired.
        graph.raise_counter(self.graph.last_id());
        self.graph = graph;
        self.gesture_start = None;
        self.controller.sync(&self.graph);
        self.redraw();
        true
    }

    fn snapshot(&self) -> Option<GraphSnapshot> {
        match GraphSnapshot::capture(&self.graph) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!(error = %e, "could not snapshot graph");
                None
            }
        }
    }

    fn checkpoint(&mut self) {
        if let Some(before) = self.snapshot() {
            self.history.checkpoint(before);
        }
    }
}
