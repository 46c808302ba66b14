//! Edge-disjoint random walks
//!
//! A walk starts at a uniformly chosen vertex and repeatedly moves to a
//! uniformly chosen successor (multiplicity does not bias the choice). It ends
//! at a vertex without successors, when the chosen edge was already
//! traversed, or when the caller stops it. Since every directed edge is used
//! at most once, a walk takes at most `edge_count` steps.
//!
//! [`RandomWalk`] is a resumable state object: the caller drives it one step
//! at a time and decides between steps whether to continue.

use crate::errors::{Result, WordGraphError};
use crate::graph::word_graph::WordGraph;
use crate::types::VertexId;
use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;

/// Why a walk ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEnd {
    /// The current vertex has no outgoing edges
    DeadEnd { vertex: String },
    /// The chosen edge had already been traversed
    RepeatedEdge { from: String, to: String },
    /// The caller asked to stop
    Stopped,
}

impl fmt::Display for WalkEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkEnd::DeadEnd { vertex } => write!(f, "No neighbors found for: {vertex}"),
            WalkEnd::RepeatedEdge { from, to } => write!(f, "Repeated edge found: {from}->{to}"),
            WalkEnd::Stopped => write!(f, "Stopped by user"),
        }
    }
}

/// Result of one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkStep<'g> {
    /// Traversed a new edge
    Advanced { from: &'g str, to: &'g str },
    /// The walk is over; further steps return the same end
    Finished(WalkEnd),
}

/// A completed walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOutcome {
    /// Visited words, starting vertex first
    pub path: Vec<String>,
    pub end: WalkEnd,
}

impl WalkOutcome {
    /// Number of edges traversed
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl fmt::Display for WalkOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Random walk path: {}", self.path.join(" -> "))
    }
}

/// An in-progress random walk
#[derive(Debug, Clone)]
pub struct RandomWalk<'g, R> {
    graph: &'g WordGraph,
    rng: R,
    path: Vec<VertexId>,
    visited: FxHashSet<(VertexId, VertexId)>,
    end: Option<WalkEnd>,
}

impl<'g, R: Rng> RandomWalk<'g, R> {
    /// Begin a walk at a uniformly random vertex.
    ///
    /// Returns [`WordGraphError::EmptyGraph`] when there is nowhere to start.
    pub fn start(graph: &'g WordGraph, mut rng: R) -> Result<Self> {
        if graph.is_empty() {
            return Err(WordGraphError::EmptyGraph);
        }

        let start = rng.gen_range(0..graph.vertex_count()) as VertexId;
        tracing::trace!(start = graph.word(start).unwrap_or_default(), "random walk started");

        Ok(Self {
            graph,
            rng,
            path: vec![start],
            visited: FxHashSet::default(),
            end: None,
        })
    }

    /// Word at the head of the walk
    pub fn current(&self) -> &'g str {
        let id = self.path[self.path.len() - 1];
        self.graph.word(id).unwrap_or_default()
    }

    /// Words visited so far, starting vertex first
    pub fn path(&self) -> Vec<&'g str> {
        let graph = self.graph;
        self.path
            .iter()
            .map(|&id| graph.word(id).unwrap_or_default())
            .collect()
    }

    /// Number of edges traversed so far
    pub fn steps(&self) -> usize {
        self.path.len() - 1
    }

    pub fn is_finished(&self) -> bool {
        self.end.is_some()
    }

    /// Why the walk ended, if it has
    pub fn end(&self) -> Option<&WalkEnd> {
        self.end.as_ref()
    }

    /// End the walk at the caller's request. No effect once finished.
    pub fn stop(&mut self) {
        if self.end.is_none() {
            self.end = Some(WalkEnd::Stopped);
        }
    }

    /// Advance one edge if `proceed`, otherwise stop.
    pub fn step(&mut self, proceed: bool) -> WalkStep<'g> {
        if !proceed {
            self.stop();
        }
        if let Some(end) = &self.end {
            return WalkStep::Finished(end.clone());
        }

        let current = self.path[self.path.len() - 1];
        let graph = self.graph;
        let word = move |id: VertexId| -> &'g str { graph.word(id).unwrap_or_default() };

        let Some(&next) = graph.successors(current).choose(&mut self.rng) else {
            return self.finish_with(WalkEnd::DeadEnd {
                vertex: word(current).to_string(),
            });
        };

        if !self.visited.insert((current, next)) {
            return self.finish_with(WalkEnd::RepeatedEdge {
                from: word(current).to_string(),
                to: word(next).to_string(),
            });
        }

        self.path.push(next);
        WalkStep::Advanced {
            from: word(current),
            to: word(next),
        }
    }

    fn finish_with(&mut self, end: WalkEnd) -> WalkStep<'g> {
        tracing::debug!(steps = self.steps(), end = %end, "random walk finished");
        self.end = Some(end.clone());
        WalkStep::Finished(end)
    }

    /// Consume the walk. An unfinished walk counts as stopped.
    pub fn finish(mut self) -> WalkOutcome {
        self.stop();
        let path = self.path().into_iter().map(str::to_string).collect();
        WalkOutcome {
            path,
            end: self.end.unwrap_or(WalkEnd::Stopped),
        }
    }

    /// Step until the walk ends on its own
    pub fn run_to_end(mut self) -> WalkOutcome {
        while let WalkStep::Advanced { .. } = self.step(true) {}
        self.finish()
    }
}

/// Yields each newly visited word, continuing until the walk ends
impl<'g, R: Rng> Iterator for RandomWalk<'g, R> {
    type Item = &'g str;

    fn next(&mut self) -> Option<Self::Item> {
        match self.step(true) {
            WalkStep::Advanced { to, .. } => Some(to),
            WalkStep::Finished(_) => None,
        }
    }
}

/// Starts random walks over a borrowed graph
#[derive(Debug, Clone, Copy)]
pub struct RandomWalker<'g> {
    graph: &'g WordGraph,
}

impl<'g> RandomWalker<'g> {
    pub fn new(graph: &'g WordGraph) -> Self {
        Self { graph }
    }

    /// Begin a new walk drawing from `rng`
    pub fn start<R: Rng>(&self, rng: R) -> Result<RandomWalk<'g, R>> {
        RandomWalk::start(self.graph, rng)
    }
}

/// Convenience function to run an uninterrupted walk
pub fn random_walk<R: Rng>(graph: &WordGraph, rng: R) -> Result<WalkOutcome> {
    Ok(RandomWalk::start(graph, rng)?.run_to_end())
}
