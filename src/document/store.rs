use super::definition::FlowDocument;
use crate::error::{LoadError, StoreError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// The persistence collaborator a saved flow is handed to.
pub trait FlowStore {
    fn save(&mut self, document: &FlowDocument) -> Result<(), StoreError>;
}

/// Collects documents in memory.
impl FlowStore for Vec<FlowDocument> {
    fn save(&mut self, document: &FlowDocument) -> Result<(), StoreError> {
        self.push(document.clone());
        Ok(())
    }
}

/// Writes each flow as pretty JSON to `<dir>/<name>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_filename(name)))
    }
}

impl FlowStore for JsonFileStore {
    fn save(&mut self, document: &FlowDocument) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            name: document.name.clone(),
            source,
        };
        let json = document
            .to_json_pretty()
            .map_err(|e| StoreError::Serialization {
                name: document.name.clone(),
                message: e.to_string(),
            })?;
        fs::create_dir_all(&self.dir).map_err(io_err)?;
        let path = self.path_for(&document.name);
        fs::write(&path, json).map_err(io_err)?;
        info!(path = %path.display(), "flow written");
        Ok(())
    }
}

fn sanitize_filename(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}

/// Reads a flow document from a JSON file, without validating the graph.
pub fn read_document(path: &Path) -> Result<FlowDocument, LoadError> {
    let json = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    FlowDocument::from_json(&json)
}
