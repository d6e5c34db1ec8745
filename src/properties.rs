//! The property editor: a form generated from a node type's schema.

use crate::error::PropertyError;
use crate::graph::{GraphModel, Node, NodeData, NodeId};
use crate::registry::{FieldKind, FieldSpec, NodeKind};
use ahash::AHashMap;
use itertools::Itertools;
use tracing::debug;

/// An open edit form for one node.
///
/// The form holds the node title plus exactly the fields of the node type's
/// schema. Committing writes all of them back as a fresh map, so keys outside
/// the schema do not survive an edit.
#[derive(Debug, Clone)]
pub struct PropertyEditor {
    node: NodeId,
    kind: NodeKind,
    title: String,
    values: AHashMap<&'static str, String>,
}

impl PropertyEditor {
    /// Builds the form and pre-fills it from `node.data` by field name.
    pub fn open(node: &Node) -> Self {
        let values = node
            .kind
            .fields()
            .iter()
            .map(|field| (field.name, prefill(field, node.data.get(field.name))))
            .collect();
        Self {
            node: node.id,
            kind: node.kind,
            title: node.title.clone(),
            values,
        }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// A blank title leaves the node's current title in place on commit.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// The rendered fields, in schema order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.kind.fields()
    }

    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Changes the value of one rendered field.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), PropertyError> {
        let slot = self
            .values
            .get_mut(field)
            .ok_or_else(|| PropertyError::UnknownField {
                kind: self.kind.tag(),
                field: field.to_string(),
            })?;
        *slot = value.into();
        Ok(())
    }

    /// Reads every rendered field into a fresh map, in schema order.
    pub fn collect(&self) -> Result<NodeData, PropertyError> {
        self.fields()
            .iter()
            .map(|field| {
                let value = self.values.get(field.name).cloned().unwrap_or_default();
                validate(field, &value)?;
                Ok((field.name.to_string(), value))
            })
            .collect()
    }

    /// Overwrites the node's title and data with the form contents. Nothing
    /// is written if any field fails validation.
    pub fn commit(&self, graph: &mut GraphModel) -> Result<(), PropertyError> {
        let data = self.collect()?;
        let node = graph
            .find_node_mut(self.node)
            .ok_or(PropertyError::NodeNotFound(self.node))?;
        if !self.title.trim().is_empty() {
            node.title = self.title.clone();
        }
        node.data = data;
        debug!(node = %self.node, kind = %self.kind, title = %node.title, "properties saved");
        Ok(())
    }
}

fn prefill(field: &FieldSpec, current: Option<&String>) -> String {
    match (field.kind, current) {
        // A select control falls back to its first option when the stored
        // value is missing or not one of its options.
        (FieldKind::Enum(options), current) => current
            .filter(|v| options.contains(&v.as_str()))
            .cloned()
            .or_else(|| options.first().map(|o| o.to_string()))
            .unwrap_or_default(),
        (_, current) => current.cloned().unwrap_or_default(),
    }
}

fn validate(field: &FieldSpec, value: &str) -> Result<(), PropertyError> {
    match field.kind {
        FieldKind::Number if !value.trim().is_empty() && value.trim().parse::<f64>().is_err() => {
            Err(PropertyError::NotANumber {
                field: field.name.to_string(),
                value: value.to_string(),
            })
        }
        FieldKind::Enum(options) if !options.contains(&value) => Err(PropertyError::InvalidOption {
            field: field.name.to_string(),
            value: value.to_string(),
            options: options.iter().join(", "),
        }),
        _ => Ok(()),
    }
}
