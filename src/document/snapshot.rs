use crate::error::SnapshotError;
use crate::graph::GraphModel;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use std::fs;

/// A compact binary image of a whole graph, including its id counter.
///
/// Two snapshots of equal graphs encode to equal bytes, which the undo
/// history relies on to skip no-op checkpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSnapshot {
    bytes: Vec<u8>,
}

impl GraphSnapshot {
    pub fn capture(graph: &GraphModel) -> Result<Self, SnapshotError> {
        let bytes = encode_to_vec(graph, standard()).map_err(|e| {
            SnapshotError::Generic(format!("Could not encode graph snapshot: {}", e))
        })?;
        Ok(Self { bytes })
    }

    pub fn restore(&self) -> Result<GraphModel, SnapshotError> {
        decode_from_slice(&self.bytes, standard())
            .map(|(graph, _)| graph)
            .map_err(|e| {
                SnapshotError::Generic(format!("Could not decode graph snapshot: {}", e))
            })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Wraps bytes produced by `as_bytes`, checking that they decode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot = Self {
            bytes: bytes.to_vec(),
        };
        snapshot.restore()?;
        Ok(snapshot)
    }

    /// Writes the snapshot bytes to `path`.
    pub fn save(&self, path: &str) -> Result<(), SnapshotError> {
        fs::write(path, &self.bytes).map_err(|e| {
            SnapshotError::Generic(format!("Could not write graph snapshot to '{}': {}", path, e))
        })
    }

    /// Reads a snapshot written by `save`, rejecting bytes that do not decode
    /// to a graph.
    pub fn from_file(path: &str) -> Result<Self, SnapshotError> {
        let bytes = fs::read(path).map_err(|e| {
            SnapshotError::Generic(format!("Could not read graph snapshot '{}': {}", path, e))
        })?;
        Self::from_bytes(&bytes)
    }
}
