use itertools::Itertools;
use std::fmt;

/// The kind of form control a property field is edited with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Multi-line text area.
    Multiline,
    /// Numeric input. Values are kept as strings in `node.data`.
    Number,
    /// Single-select drop-down over a fixed set of options.
    Enum(&'static [&'static str]),
}

impl FieldKind {
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            FieldKind::Enum(options) => options,
            _ => &[],
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => write!(f, "text"),
            FieldKind::Multiline => write!(f, "multiline"),
            FieldKind::Number => write!(f, "number"),
            FieldKind::Enum(options) => write!(f, "enum({})", options.iter().join(", ")),
        }
    }
}

/// One entry of a node type's property schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Value seeded into `node.data` when a node is dropped from the toolbox.
    pub default: &'static str,
}

/// Static description of a node type: chrome text plus property schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeTypeSpec {
    pub tag: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub icon: &'static str,
    pub fields: &'static [FieldSpec],
}

impl NodeTypeSpec {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}
