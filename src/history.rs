use crate::document::GraphSnapshot;
use crate::error::SnapshotError;
use crate::graph::GraphModel;
use tracing::debug;

/// Undo/redo stacks of whole-graph snapshots.
#[derive(Debug, Clone)]
pub struct UndoHistory {
    undo: Vec<GraphSnapshot>,
    redo: Vec<GraphSnapshot>,
    limit: usize,
}

impl UndoHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            limit,
        }
    }

    /// Records the state a change is about to leave. A snapshot identical to
    /// the newest one is not pushed again. Any new checkpoint clears redo.
    pub fn checkpoint(&mut self, before: GraphSnapshot) {
        self.redo.clear();
        if self.undo.last() == Some(&before) {
            return;
        }
        self.undo.push(before);
        if self.undo.len() > self.limit {
            self.undo.remove(0);
        }
        debug!(depth = self.undo.len(), "undo checkpoint");
    }

    /// Steps back one change. Returns `None` when there is nothing to undo.
    pub fn undo(&mut self, current: &GraphModel) -> Result<Option<GraphModel>, SnapshotError> {
        Self::step(&mut self.undo, &mut self.redo, current)
    }

    pub fn redo(&mut self, current: &GraphModel) -> Result<Option<GraphModel>, SnapshotError> {
        Self::step(&mut self.redo, &mut self.undo, current)
    }

    fn step(
        from: &mut Vec<GraphSnapshot>,
        to: &mut Vec<GraphSnapshot>,
        current: &GraphModel,
    ) -> Result<Option<GraphModel>, SnapshotError> {
        let Some(snapshot) = from.last() else {
            return Ok(None);
        };
        let restored = snapshot.restore()?;
        to.push(GraphSnapshot::capture(current)?);
        from.pop();
        Ok(Some(restored))
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
