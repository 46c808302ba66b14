//! Word-adjacency graph storage and its read-only snapshot.

pub mod snapshot;
pub mod word_graph;

pub use snapshot::{GraphSnapshot, PathEdge, SnapshotEdge};
pub use word_graph::{VertexEntry, WordGraph};
