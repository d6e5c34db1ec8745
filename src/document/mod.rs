//! Flow documents: the persisted form of a graph, plus binary snapshots.

mod conversion;
pub mod definition;
pub mod snapshot;
pub mod store;

pub use definition::{FlowDocument, NodeRecord, TriggerType};
pub use snapshot::GraphSnapshot;
pub use store::{FlowStore, JsonFileStore, read_document};
