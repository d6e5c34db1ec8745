use crate::config::EditorConfig;
use crate::graph::{Point, Rect};
use std::f64::consts::FRAC_PI_6;

/// The fully computed shape of one connection: curve, arrowhead and label box.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionPath {
    pub from: Point,
    pub control1: Point,
    pub control2: Point,
    pub to: Point,
    /// Tip first, then the two back corners.
    pub arrow: [Point; 3],
    pub label: Option<LabelBox>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelBox {
    pub rect: Rect,
    pub text: String,
    pub anchor: Point,
}

impl ConnectionPath {
    /// Computes an S-curve between two anchor points.
    ///
    /// Both control points sit halfway along the horizontal span, so the
    /// inflection lands at the midpoint whatever the vertical offset.
    pub fn between(from: Point, to: Point, label: &str, config: &EditorConfig) -> Self {
        let dx = to.x - from.x;
        let control1 = Point::new(from.x + dx / 2.0, from.y);
        let control2 = Point::new(from.x + dx / 2.0, to.y);

        let angle = (to.y - control2.y).atan2(to.x - control2.x);
        let size = config.arrow_size;
        let corner = |theta: f64| Point::new(to.x - size * theta.cos(), to.y - size * theta.sin());
        let arrow = [to, corner(angle - FRAC_PI_6), corner(angle + FRAC_PI_6)];

        let label = (!label.is_empty()).then(|| {
            let mid = from.midpoint(to);
            LabelBox {
                rect: Rect::new(
                    mid.x - config.label_width / 2.0,
                    mid.y - config.label_offset,
                    config.label_width,
                    config.label_height,
                ),
                text: label.to_string(),
                anchor: mid,
            }
        });

        Self {
            from,
            control1,
            control2,
            to,
            arrow,
            label,
        }
    }
}
