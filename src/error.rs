use crate::graph::NodeId;
use thiserror::Error;

/// Errors that can occur when turning a flow document back into a live graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("Could not read flow document '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse flow document JSON: {0}")]
    JsonParseError(String),

    #[error("Node '{node_id}' has an unknown node type: '{tag}'")]
    UnknownNodeType { node_id: NodeId, tag: String },

    #[error("Node id '{0}' appears more than once in the document")]
    DuplicateNodeId(NodeId),

    #[error("Connection #{index} references node '{missing}', which is not in the document")]
    DanglingConnection { index: usize, missing: NodeId },

    #[error("Node id '{0}' leaves no room for new nodes")]
    IdSpaceExhausted(NodeId),
}

/// Errors raised by a `FlowStore` persistence collaborator.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Could not write flow '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not serialize flow '{name}': {message}")]
    Serialization { name: String, message: String },
}

/// Errors that can occur when saving the current flow.
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("A flow name is required before saving")]
    MissingName,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors reported by the property editor when an edit cannot be applied.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertyError {
    #[error("Node '{0}' no longer exists")]
    NodeNotFound(NodeId),

    #[error("Field '{field}' is not part of the '{kind}' schema")]
    UnknownField { kind: &'static str, field: String },

    #[error("Field '{field}' expects a number, but found '{value}'")]
    NotANumber { field: String, value: String },

    #[error("Field '{field}' does not accept '{value}' (expected one of: {options})")]
    InvalidOption {
        field: String,
        value: String,
        options: String,
    },
}

/// Errors that can occur when encoding or decoding graph snapshots.
#[derive(Error, Debug, Clone)]
pub enum SnapshotError {
    #[error("{0}")]
    Generic(String),
}

/// Errors that can occur when loading an `EditorConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),
}
