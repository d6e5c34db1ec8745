//! # Flowboard - Flow Graph Editor Core
//!
//! **Flowboard** is the authoring core of a campaign-automation flow editor. Operators
//! compose automation logic as a directed graph of typed nodes (trigger, message,
//! question, condition, delay, API call, AI step, phone call, end) joined by labeled
//! connections. The crate owns the graph model, the pointer-driven interaction state
//! machine, the connection renderer, the per-type property schemas, and the flow
//! document format. It has no UI toolkit dependency: pointer events are plain values
//! in canvas coordinates and painting goes through the [`render::DrawSurface`] trait.
//!
//! ## Core Workflow
//!
//! 1.  **Start a session**: [`EditorSession::new`](session::EditorSession::new) seeds a
//!     trigger node and paints onto a surface of your choosing.
//! 2.  **Add nodes**: drop a [`DragPayload`](toolbox::DragPayload) from the toolbox onto
//!     the canvas.
//! 3.  **Interact**: feed pointer events through
//!     [`EditorSession::pointer`](session::EditorSession::pointer) to select, drag, and
//!     connect nodes.
//! 4.  **Edit properties**: open a [`PropertyEditor`](properties::PropertyEditor), change
//!     fields, and commit.
//! 5.  **Save / load**: hand a [`FlowDocument`](document::FlowDocument) to a
//!     [`FlowStore`](document::FlowStore), or load one back into a live graph.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowboard::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut session = EditorSession::new(EditorConfig::default(), RecordingSurface::new());
//!
//!     // Drop a message node next to the seeded trigger.
//!     let payload = Toolbox::item(NodeKind::Message).drag_payload();
//!     let message = session.drop_payload(&payload, Point::new(400.0, 100.0)).unwrap();
//!
//!     // Drag a connection from the trigger's output to the message's input.
//!     session.pointer(PointerEvent::Down(Point::new(280.0, 140.0)));
//!     session.pointer(PointerEvent::Move(Point::new(350.0, 140.0)));
//!     session.pointer(PointerEvent::Up(Point::new(400.0, 140.0)));
//!
//!     // Edit the message text.
//!     let mut editor = session.open_properties(message).unwrap();
//!     editor.set("message", "Hello! Thanks for calling.")?;
//!     session.commit_properties(&editor)?;
//!
//!     // Save the flow.
//!     session.set_name("Inbound greeting");
//!     let mut store: Vec<FlowDocument> = Vec::new();
//!     let document = session.save_flow(&mut store)?;
//!     println!("{}", document.to_json_pretty()?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod graph;
pub mod history;
pub mod interaction;
pub mod prelude;
pub mod properties;
pub mod registry;
pub mod render;
pub mod session;
pub mod toolbox;
