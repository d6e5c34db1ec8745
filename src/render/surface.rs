use crate::graph::{Point, Rect};
use itertools::Itertools;
use std::fmt::Write;

/// Paint role of a primitive. Surfaces map these to their own colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Connection,
    /// The in-progress curve that follows the pointer.
    Pending,
    LabelBackground,
    LabelText,
    NodeBody,
    SelectedNodeBody,
    NodeTitle,
    NodeText,
    Connector,
}

/// A 2D drawing target. Everything the renderer paints goes through these calls.
pub trait DrawSurface {
    fn clear(&mut self);
    fn stroke_bezier(&mut self, from: Point, c1: Point, c2: Point, to: Point, style: Style);
    fn fill_polygon(&mut self, points: &[Point], style: Style);
    fn fill_rect(&mut self, rect: Rect, style: Style);
    fn fill_text(&mut self, text: &str, center: Point, style: Style);
}

/// A recorded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Bezier {
        from: Point,
        c1: Point,
        c2: Point,
        to: Point,
        style: Style,
    },
    Polygon {
        points: Vec<Point>,
        style: Style,
    },
    Rect {
        rect: Rect,
        style: Style,
    },
    Text {
        text: String,
        center: Point,
        style: Style,
    },
}

/// Keeps every command issued since the last `clear`, plus a count of clears.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    pub clears: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn beziers(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Bezier { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn stroke_bezier(&mut self, from: Point, c1: Point, c2: Point, to: Point, style: Style) {
        self.commands.push(DrawCommand::Bezier {
            from,
            c1,
            c2,
            to,
            style,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], style: Style) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            style,
        });
    }

    fn fill_rect(&mut self, rect: Rect, style: Style) {
        self.commands.push(DrawCommand::Rect { rect, style });
    }

    fn fill_text(&mut self, text: &str, center: Point, style: Style) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            center,
            style,
        });
    }
}

/// Accumulates SVG elements; `finish` wraps them in a document.
#[derive(Debug)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    pub fn finish(&self) -> String {
        format!(
            concat!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" ",
                "width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            ),
            w = self.width,
            h = self.height,
            body = self.body
        )
    }

    fn fill(style: Style) -> &'static str {
        match style {
            Style::Connection => "#6c757d",
            Style::Pending => "#0d6efd",
            Style::LabelBackground => "#ffffff",
            Style::LabelText | Style::NodeTitle => "#212529",
            Style::NodeBody => "#f8f9fa",
            Style::SelectedNodeBody => "#e7f1ff",
            Style::NodeText => "#495057",
            Style::Connector => "#adb5bd",
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// Writes into a String are infallible.
impl DrawSurface for SvgSurface {
    fn clear(&mut self) {
        self.body.clear();
    }

    fn stroke_bezier(&mut self, from: Point, c1: Point, c2: Point, to: Point, style: Style) {
        let dash = if style == Style::Pending {
            " stroke-dasharray=\"5,5\""
        } else {
            ""
        };
        let _ = writeln!(
            self.body,
            concat!(
                "  <path d=\"M {} {} C {} {}, {} {}, {} {}\" ",
                "fill=\"none\" stroke=\"{}\" stroke-width=\"2\"{}/>",
            ),
            from.x,
            from.y,
            c1.x,
            c1.y,
            c2.x,
            c2.y,
            to.x,
            to.y,
            Self::fill(style),
            dash
        );
    }

    fn fill_polygon(&mut self, points: &[Point], style: Style) {
        let pts = points.iter().map(|p| format!("{},{}", p.x, p.y)).join(" ");
        let _ = writeln!(
            self.body,
            "  <polygon points=\"{}\" fill=\"{}\"/>",
            pts,
            Self::fill(style)
        );
    }

    fn fill_rect(&mut self, rect: Rect, style: Style) {
        let _ = writeln!(
            self.body,
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            rect.origin.x,
            rect.origin.y,
            rect.size.width,
            rect.size.height,
            Self::fill(style)
        );
    }

    fn fill_text(&mut self, text: &str, center: Point, style: Style) {
        let _ = writeln!(
            self.body,
            concat!(
                "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" ",
                "dominant-baseline=\"middle\" font-size=\"12\" fill=\"{}\">{}</text>",
            ),
            center.x,
            center.y,
            Self::fill(style),
            escape(text)
        );
    }
}
