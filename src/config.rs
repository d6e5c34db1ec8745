use crate::error::ConfigError;
use crate::graph::Point;
use crate::registry::NodeKind;
use serde::{Deserialize, Serialize};
use std::fs;

/// The node placed on the canvas when a session starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedNode {
    pub kind: NodeKind,
    pub title: String,
    pub x: f64,
    pub y: f64,
}

impl Default for SeedNode {
    fn default() -> Self {
        Self {
            kind: NodeKind::Trigger,
            title: "Start".to_string(),
            x: 100.0,
            y: 100.0,
        }
    }
}

/// Editor tunables. Every field has a default, so a config file only needs
/// the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Side of the square input/output connector hit boxes.
    pub connector_size: f64,
    pub arrow_size: f64,
    pub label_width: f64,
    pub label_height: f64,
    /// Distance from the label box top to the connection midpoint.
    pub label_offset: f64,
    pub seed: Option<SeedNode>,
    /// Fill a dropped node's data with its schema defaults.
    pub seed_defaults: bool,
    pub history_limit: usize,
    /// Client-space position of the canvas' top-left corner.
    pub canvas_origin: Point,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            connector_size: 12.0,
            arrow_size: 10.0,
            label_width: 40.0,
            label_height: 20.0,
            label_offset: 10.0,
            seed: Some(SeedNode::default()),
            seed_defaults: true,
            history_limit: 100,
            canvas_origin: Point::default(),
        }
    }
}

impl EditorConfig {
    /// Load a config from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
