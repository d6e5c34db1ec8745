use crate::graph::{GraphModel, NodeId, Point};
use crate::render::{input_connector, output_connector};

/// What a pointer position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    OutputConnector(NodeId),
    InputConnector(NodeId),
    NodeBody(NodeId),
    Canvas,
}

/// Hit-tests `at` against node and connector rectangles in canvas space.
///
/// Later nodes are painted over earlier ones, so they are tested first.
/// Connectors overlap the body edge and take priority over it.
pub fn hit_test(graph: &GraphModel, at: Point, connector_size: f64) -> HitTarget {
    for node in graph.nodes().rev() {
        let bounds = node.bounds();
        if output_connector(bounds, connector_size).contains(at) {
            return HitTarget::OutputConnector(node.id);
        }
        if input_connector(bounds, connector_size).contains(at) {
            return HitTarget::InputConnector(node.id);
        }
        if bounds.contains(at) {
            return HitTarget::NodeBody(node.id);
        }
    }
    HitTarget::Canvas
}
