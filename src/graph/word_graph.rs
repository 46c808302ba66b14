//! Directed word-adjacency graph
//!
//! Vertices are interned into a dense `Vec` in first-insertion order and
//! looked up through an FxHashMap. Each vertex keeps an FxHashMap of
//! successor weights for O(1) edge lookups, plus the successors in the order
//! their edge was first observed so that enumeration is deterministic.

use crate::errors::{Result, WordGraphError};
use crate::types::{Edge, VertexId};
use rustc_hash::FxHashMap;
use std::fmt;

/// A vertex and its outgoing edges
#[derive(Debug, Clone)]
pub struct VertexEntry {
    /// The normalized word for this vertex
    pub word: String,
    /// Successor ID -> edge multiplicity
    weights: FxHashMap<VertexId, u32>,
    /// Successor IDs in first-observed order
    successors: Vec<VertexId>,
}

impl VertexEntry {
    fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            weights: FxHashMap::default(),
            successors: Vec::new(),
        }
    }

    /// Number of distinct successors
    pub fn out_degree(&self) -> usize {
        self.successors.len()
    }
}

/// Directed weighted graph of word adjacency.
///
/// Every successor recorded on a vertex is itself a vertex of the graph;
/// [`WordGraph::add_edge`] refuses to break that rule.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    /// Maps word -> vertex ID
    word_to_id: FxHashMap<String, VertexId>,
    /// Vertex storage, indexed by ID
    vertices: Vec<VertexEntry>,
    /// Number of distinct directed edges
    edge_count: usize,
}

impl WordGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with pre-allocated vertex capacity
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            word_to_id: FxHashMap::with_capacity_and_hasher(vertex_capacity, Default::default()),
            vertices: Vec::with_capacity(vertex_capacity),
            edge_count: 0,
        }
    }

    /// Build a graph from an ordered sequence of normalized words.
    ///
    /// Each adjacent pair `(w[i], w[i+1])` adds one to the weight of the edge
    /// `w[i] -> w[i+1]`. Pairs where either side is empty are skipped, so an
    /// empty token never becomes a vertex.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut graph = Self::with_capacity(tokens.len() / 2);

        for pair in tokens.windows(2) {
            let (from, to) = (pair[0].as_ref(), pair[1].as_ref());
            if from.is_empty() || to.is_empty() {
                continue;
            }
            graph.record_adjacency(from, to);
        }

        tracing::debug!(
            tokens = tokens.len(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built word graph"
        );

        graph
    }

    /// Insert a vertex if absent, returning its ID. Idempotent.
    pub fn add_vertex(&mut self, word: &str) -> VertexId {
        if let Some(&id) = self.word_to_id.get(word) {
            return id;
        }

        let id = next_vertex_id(self.vertices.len());
        self.word_to_id.insert(word.to_string(), id);
        self.vertices.push(VertexEntry::new(word));
        id
    }

    /// Increment the weight of `from -> to`, returning the new weight.
    ///
    /// Both endpoints must already be vertices; a missing endpoint means the
    /// ingestion pipeline skipped [`WordGraph::add_vertex`] and is reported as
    /// [`WordGraphError::InvalidEdgeInsertion`].
    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<u32> {
        let from_id = self
            .vertex_id(from)
            .ok_or_else(|| WordGraphError::invalid_edge(from, to, from))?;
        let to_id = self
            .vertex_id(to)
            .ok_or_else(|| WordGraphError::invalid_edge(from, to, to))?;

        Ok(self.increment_edge(from_id, to_id))
    }

    /// Register both endpoints, then record one occurrence of `from -> to`.
    pub fn record_adjacency(&mut self, from: &str, to: &str) -> u32 {
        let from_id = self.add_vertex(from);
        let to_id = self.add_vertex(to);
        self.increment_edge(from_id, to_id)
    }

    fn increment_edge(&mut self, from: VertexId, to: VertexId) -> u32 {
        let entry = &mut self.vertices[from as usize];
        let weight = entry.weights.entry(to).or_insert(0);
        if *weight == 0 {
            entry.successors.push(to);
            self.edge_count += 1;
        }
        *weight += 1;
        *weight
    }

    /// Check whether `word` is a vertex
    pub fn has_vertex(&self, word: &str) -> bool {
        self.word_to_id.contains_key(word)
    }

    /// Get a vertex ID by word
    pub fn vertex_id(&self, word: &str) -> Option<VertexId> {
        self.word_to_id.get(word).copied()
    }

    /// Get the word for a vertex ID
    pub fn word(&self, id: VertexId) -> Option<&str> {
        self.vertices.get(id as usize).map(|v| v.word.as_str())
    }

    /// Get a vertex entry by ID
    pub fn vertex(&self, id: VertexId) -> Option<&VertexEntry> {
        self.vertices.get(id as usize)
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct directed edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Sum of all edge weights, i.e. the number of recorded adjacencies
    pub fn total_weight(&self) -> u64 {
        self.vertices
            .iter()
            .flat_map(|v| v.weights.values())
            .map(|&w| u64::from(w))
            .sum()
    }

    /// Check if the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Weight of `from -> to`, or 0 when the edge or either word is absent
    pub fn edge_weight(&self, from: &str, to: &str) -> u32 {
        match (self.vertex_id(from), self.vertex_id(to)) {
            (Some(f), Some(t)) => self.weight_by_id(f, t),
            _ => 0,
        }
    }

    /// Weight of `from -> to` by vertex ID, 0 if absent
    pub fn weight_by_id(&self, from: VertexId, to: VertexId) -> u32 {
        self.vertices
            .get(from as usize)
            .and_then(|v| v.weights.get(&to))
            .copied()
            .unwrap_or(0)
    }

    /// Successor IDs of a vertex in first-observed order (empty if unknown)
    pub fn successors(&self, id: VertexId) -> &[VertexId] {
        self.vertices
            .get(id as usize)
            .map(|v| v.successors.as_slice())
            .unwrap_or(&[])
    }

    /// Successors of `word` with their edge weights.
    ///
    /// Yields nothing when `word` is not a vertex.
    pub fn neighbors<'a>(&'a self, word: &str) -> impl Iterator<Item = (&'a str, u32)> + 'a {
        let id = self.vertex_id(word);
        id.into_iter().flat_map(move |id| {
            self.successors(id)
                .iter()
                .map(move |&to| (self.vertices[to as usize].word.as_str(), self.weight_by_id(id, to)))
        })
    }

    /// Iterate over all words in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(|v| v.word.as_str())
    }

    /// Iterate over all edges, grouped by source in vertex order
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
        self.vertices.iter().flat_map(move |v| {
            v.successors.iter().map(move |&to| Edge {
                from: v.word.as_str(),
                to: self.vertices[to as usize].word.as_str(),
                weight: v.weights[&to],
            })
        })
    }
}

impl fmt::Display for WordGraph {
    /// One line per vertex: `word -> next(weight) next(weight) `
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            write!(f, "{} -> ", vertex.word)?;
            for &to in &vertex.successors {
                write!(f, "{}({}) ", self.vertices[to as usize].word, vertex.weights[&to])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// ID for the vertex appended after `len` existing ones. IDs are `u32`, so a
/// graph holds at most `u32::MAX + 1` vertices.
fn next_vertex_id(len: usize) -> VertexId {
    debug_assert!(
        VertexId::try_from(len).is_ok(),
        "vertex id space exhausted at {len} vertices"
    );
    len as VertexId
}
