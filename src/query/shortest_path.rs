//! Shortest paths between two words
//!
//! Label-correcting best-first search over a min-heap keyed by accumulated
//! cost. With the default [`PathMetric::Hops`] every edge costs 1, so the
//! result minimizes hop count and edge multiplicities are only summed for
//! reporting.
//!
//! Ties are broken deterministically: heap entries with equal cost pop in
//! push order, and successors are relaxed in first-observed order. A vertex's
//! predecessor only changes on a strictly cheaper route.

use crate::graph::word_graph::WordGraph;
use crate::nlp::tokenizer::normalize_word;
use crate::types::{PathMetric, VertexId, WordGraphConfig};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;
use thiserror::Error;

/// A path found between two words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Words from source to target, inclusive
    pub vertices: Vec<String>,
    /// Sum of edge multiplicities along the path
    pub total_weight: u64,
    /// Accumulated cost under the metric that selected the path
    pub cost: u64,
}

impl ShortestPath {
    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Consecutive `(from, to)` pairs in path order
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vertices
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vertices.join(" -> "))
    }
}

/// Why no path was returned
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoPath {
    /// A query word is not a vertex
    #[error("No \"{word}\" in the graph!")]
    UnknownWord { word: String },

    /// Both words exist but the target cannot be reached
    #[error("No path from \"{from}\" to \"{to}\"")]
    Unreachable { from: String, to: String },
}

/// Computes shortest paths over a borrowed graph
#[derive(Debug, Clone, Copy)]
pub struct ShortestPathFinder<'g> {
    graph: &'g WordGraph,
    normalize: bool,
    metric: PathMetric,
}

impl<'g> ShortestPathFinder<'g> {
    /// Create a hop-count finder that normalizes query words
    pub fn new(graph: &'g WordGraph) -> Self {
        Self {
            graph,
            normalize: true,
            metric: PathMetric::Hops,
        }
    }

    /// Create a finder following `config`
    pub fn with_config(graph: &'g WordGraph, config: &WordGraphConfig) -> Self {
        Self {
            graph,
            normalize: config.normalize_queries,
            metric: config.path_metric,
        }
    }

    /// Override the edge cost metric
    pub fn with_metric(mut self, metric: PathMetric) -> Self {
        self.metric = metric;
        self
    }

    fn resolve(&self, word: &str) -> Result<VertexId, NoPath> {
        let key = if self.normalize {
            normalize_word(word)
        } else {
            word.to_string()
        };
        self.graph
            .vertex_id(&key)
            .ok_or(NoPath::UnknownWord { word: key })
    }

    /// Find one shortest path from `word1` to `word2`
    pub fn shortest_path(&self, word1: &str, word2: &str) -> Result<ShortestPath, NoPath> {
        let source = self.resolve(word1)?;
        let target = self.resolve(word2)?;

        let ids = self.search(source, target).ok_or_else(|| NoPath::Unreachable {
            from: self.word(source).to_string(),
            to: self.word(target).to_string(),
        })?;

        let mut total_weight = 0u64;
        let mut cost = 0u64;
        for pair in ids.windows(2) {
            let weight = self.graph.weight_by_id(pair[0], pair[1]);
            total_weight += u64::from(weight);
            cost += self.metric.cost(weight);
        }

        let path = ShortestPath {
            vertices: ids.iter().map(|&id| self.word(id).to_string()).collect(),
            total_weight,
            cost,
        };
        tracing::debug!(
            metric = self.metric.as_str(),
            hops = path.hops(),
            total_weight,
            "shortest path found"
        );
        Ok(path)
    }

    fn word(&self, id: VertexId) -> &'g str {
        self.graph.word(id).unwrap_or_default()
    }

    /// Vertex IDs from `source` to `target`, or None if unreachable
    fn search(&self, source: VertexId, target: VertexId) -> Option<Vec<VertexId>> {
        let n = self.graph.vertex_count();
        let mut dist = vec![u64::MAX; n];
        let mut prev: Vec<Option<VertexId>> = vec![None; n];
        let mut heap = BinaryHeap::new();
        let mut seq = 0u64;

        dist[source as usize] = 0;
        heap.push(Reverse((0u64, seq, source)));

        while let Some(Reverse((cost, _, node))) = heap.pop() {
            if cost > dist[node as usize] {
                continue; // stale entry
            }

            if node == target {
                let mut path = vec![target];
                let mut current = target;
                while let Some(p) = prev[current as usize] {
                    path.push(p);
                    current = p;
                }
                path.reverse();
                return Some(path);
            }

            for &next in self.graph.successors(node) {
                let weight = self.graph.weight_by_id(node, next);
                let alt = cost + self.metric.cost(weight);
                if alt < dist[next as usize] {
                    dist[next as usize] = alt;
                    prev[next as usize] = Some(node);
                    seq += 1;
                    heap.push(Reverse((alt, seq, next)));
                }
            }
        }

        None
    }
}

/// Convenience function to find a hop-count shortest path with default settings
pub fn calc_shortest_path(
    graph: &WordGraph,
    word1: &str,
    word2: &str,
) -> Result<ShortestPath, NoPath> {
    ShortestPathFinder::new(graph).shortest_path(word1, word2)
}
