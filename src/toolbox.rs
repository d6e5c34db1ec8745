use crate::registry::NodeKind;
use serde::{Deserialize, Serialize};

/// The drag-and-drop contract between toolbox and canvas: one string, the
/// node-type tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DragPayload(pub String);

impl DragPayload {
    pub fn kind(&self) -> Option<NodeKind> {
        NodeKind::from_tag(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolboxItem {
    pub kind: NodeKind,
    pub label: &'static str,
    pub icon: &'static str,
}

impl ToolboxItem {
    pub fn drag_payload(&self) -> DragPayload {
        DragPayload(self.kind.tag().to_string())
    }
}

/// Palette of creatable node types, one item per kind.
pub struct Toolbox;

impl Toolbox {
    pub fn items() -> impl Iterator<Item = ToolboxItem> {
        NodeKind::ALL.iter().map(|&kind| Self::item(kind))
    }

    pub fn item(kind: NodeKind) -> ToolboxItem {
        let spec = kind.spec();
        ToolboxItem {
            kind,
            label: spec.title,
            icon: spec.icon,
        }
    }
}
