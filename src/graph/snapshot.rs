//! Serializable view of a graph for external renderers
//!
//! Drawing is not done here. A [`GraphSnapshot`] enumerates vertices and
//! weighted edges, optionally marking the edges of a shortest path, and is
//! handed to whatever tool does the layout.

use crate::errors::Result;
use crate::graph::word_graph::WordGraph;
use crate::query::shortest_path::ShortestPath;
use serde::{Deserialize, Serialize};

/// A weighted edge in a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEdge {
    pub from: String,
    pub to: String,
    pub weight: u32,
}

/// An edge to draw highlighted, in path order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEdge {
    pub from: String,
    pub to: String,
}

/// Owned enumeration of a graph
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Words in vertex order
    pub vertices: Vec<String>,
    /// Edges grouped by source in vertex order
    pub edges: Vec<SnapshotEdge>,
    /// Path edges to highlight (empty unless a path was attached)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlighted: Vec<PathEdge>,
    /// Sum of the highlighted edge weights
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlighted_weight: Option<u64>,
}

impl GraphSnapshot {
    /// Capture every vertex and edge of `graph`
    pub fn from_graph(graph: &WordGraph) -> Self {
        Self {
            vertices: graph.vertices().map(str::to_string).collect(),
            edges: graph
                .edges()
                .map(|e| SnapshotEdge {
                    from: e.from.to_string(),
                    to: e.to.to_string(),
                    weight: e.weight,
                })
                .collect(),
            highlighted: Vec::new(),
            highlighted_weight: None,
        }
    }

    /// Mark the edges of `path` for highlighting
    pub fn with_path(mut self, path: &ShortestPath) -> Self {
        self.highlighted = path
            .edges()
            .map(|(from, to)| PathEdge {
                from: from.to_string(),
                to: to.to_string(),
            })
            .collect();
        self.highlighted_weight = Some(path.total_weight);
        self
    }

    /// Check whether `from -> to` is one of the highlighted edges
    pub fn is_highlighted(&self, from: &str, to: &str) -> bool {
        self.highlighted
            .iter()
            .any(|e| e.from == from && e.to == to)
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
