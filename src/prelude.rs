//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the flowboard
//! crate. Import it to get the editor session, the graph model, and the document types
//! without importing each one individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowboard::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/flow.json")?;
//! let document = FlowDocument::from_json(&json)?;
//!
//! let mut session = EditorSession::new(EditorConfig::default(), RecordingSurface::new());
//! session.load_document(document)?;
//! println!("{} nodes loaded", session.graph().node_count());
//! # Ok(())
//! # }
//! ```

// Session and configuration
pub use crate::config::{EditorConfig, SeedNode};
pub use crate::session::{Confirm, EditorSession};

// Graph model
pub use crate::graph::{Connection, GraphModel, Node, NodeData, NodeId, Point, Rect, Size};
pub use crate::registry::{FieldKind, FieldSpec, NodeKind, NodeTypeSpec};

// Interaction, rendering and editing
pub use crate::interaction::{Effect, HitTarget, InteractionState, PointerEvent};
pub use crate::properties::PropertyEditor;
pub use crate::render::{DrawSurface, RecordingSurface, RenderEngine, SvgSurface};
pub use crate::toolbox::{DragPayload, Toolbox, ToolboxItem};

// Documents
pub use crate::document::{FlowDocument, FlowStore, GraphSnapshot, JsonFileStore, TriggerType};

// Error types
pub use crate::error::{LoadError, PropertyError, SaveError, SnapshotError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
