//! Connection rendering.
//!
//! The engine repaints from scratch on every call: it clears the surface, draws
//! each permanent connection in insertion order, and finally the in-progress
//! connection (if any) so it ends up on top. Repeated calls are harmless.

use crate::config::EditorConfig;
use crate::graph::{GraphModel, NodeId, Point, Rect};
use crate::registry::summarize;
use tracing::trace;

mod path;
mod surface;

pub use path::{ConnectionPath, LabelBox};
pub use surface::{DrawCommand, DrawSurface, RecordingSurface, Style, SvgSurface};

/// A connection being dragged out of an output connector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingConnection {
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, Default)]
pub struct RenderEngine {
    config: EditorConfig,
}

impl RenderEngine {
    pub fn new(config: EditorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Clears `surface` and draws every connection, pending one last.
    pub fn redraw(
        &self,
        graph: &GraphModel,
        surface: &mut dyn DrawSurface,
        pending: Option<PendingConnection>,
    ) {
        surface.clear();
        for connection in graph.connections() {
            let (Some(source), Some(target)) = (
                graph.find_node(connection.source),
                graph.find_node(connection.target),
            ) else {
                continue;
            };
            let path = ConnectionPath::between(
                source.center(),
                target.center(),
                &connection.label,
                &self.config,
            );
            self.draw_path(surface, &path, Style::Connection);
        }
        if let Some(pending) = pending {
            let path = ConnectionPath::between(pending.from, pending.to, "", &self.config);
            self.draw_path(surface, &path, Style::Pending);
        }
        trace!(
            connections = graph.connection_count(),
            pending = pending.is_some(),
            "redraw"
        );
    }

    pub fn draw_path(&self, surface: &mut dyn DrawSurface, path: &ConnectionPath, style: Style) {
        surface.stroke_bezier(path.from, path.control1, path.control2, path.to, style);
        surface.fill_polygon(&path.arrow, style);
        if let Some(label) = &path.label {
            surface.fill_rect(label.rect, Style::LabelBackground);
            surface.fill_text(&label.text, label.anchor, Style::LabelText);
        }
    }

    /// Paints node chrome on top of whatever is already on `surface`.
    ///
    /// Interactive front-ends keep nodes as their own elements and only need
    /// `redraw`; static exports call this after it.
    pub fn paint_nodes(
        &self,
        graph: &GraphModel,
        surface: &mut dyn DrawSurface,
        selection: Option<NodeId>,
    ) {
        let side = self.config.connector_size;
        for node in graph.nodes() {
            let body = if selection == Some(node.id) {
                Style::SelectedNodeBody
            } else {
                Style::NodeBody
            };
            let bounds = node.bounds();
            surface.fill_rect(bounds, body);

            let center_x = bounds.center().x;
            let title_at = Point::new(center_x, bounds.origin.y + bounds.size.height * 0.3);
            let summary_at = Point::new(center_x, bounds.origin.y + bounds.size.height * 0.7);
            surface.fill_text(&node.title, title_at, Style::NodeTitle);
            surface.fill_text(summarize(node), summary_at, Style::NodeText);

            surface.fill_rect(input_connector(bounds, side), Style::Connector);
            surface.fill_rect(output_connector(bounds, side), Style::Connector);
        }
    }
}

/// Input connector square, centred on the left edge midpoint.
pub fn input_connector(bounds: Rect, side: f64) -> Rect {
    let anchor = Point::new(bounds.origin.x, bounds.center().y);
    Rect::centered_square(anchor, side)
}

/// Output connector square, centred on the right edge midpoint.
pub fn output_connector(bounds: Rect, side: f64) -> Rect {
    let anchor = Point::new(bounds.origin.x + bounds.size.width, bounds.center().y);
    Rect::centered_square(anchor, side)
}
