//! Core types for rapid_wordgraph
//!
//! This module defines the configuration shared by ingestion and the query
//! modules, plus the small value types used to enumerate the graph.

use crate::errors::{Result, WordGraphError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Dense vertex identifier, assigned in first-insertion order.
pub type VertexId = u32;

/// A weighted directed edge, borrowed from a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<'g> {
    pub from: &'g str,
    pub to: &'g str,
    /// Number of times `from` was immediately followed by `to`
    pub weight: u32,
}

// ============================================================================
// Path metric
// ============================================================================

/// Cost assigned to each edge by the shortest-path finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathMetric {
    /// Every edge costs 1; multiplicity is only reported
    #[default]
    Hops,
    /// Every edge costs its multiplicity
    Weight,
}

impl PathMetric {
    /// Cost of traversing an edge of the given multiplicity
    #[inline]
    pub fn cost(&self, weight: u32) -> u64 {
        match self {
            PathMetric::Hops => 1,
            PathMetric::Weight => u64::from(weight),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PathMetric::Hops => "hops",
            PathMetric::Weight => "weight",
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for ingestion and querying
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordGraphConfig {
    /// Normalize query words with the ingestion rule (lowercase, letters only)
    /// before looking them up. Emitted text keeps the caller's spelling.
    pub normalize_queries: bool,
    /// Seed for the random source (None = seeded from OS entropy)
    pub seed: Option<u64>,
    /// Edge cost used by the shortest-path finder
    pub path_metric: PathMetric,
    /// Minimum word length kept by the tokenizer
    pub min_word_length: usize,
}

impl Default for WordGraphConfig {
    fn default() -> Self {
        Self {
            normalize_queries: true,
            seed: None,
            path_metric: PathMetric::Hops,
            min_word_length: 1,
        }
    }
}

impl WordGraphConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.min_word_length == 0 {
            return Err(WordGraphError::invalid_config(
                "min_word_length must be >= 1",
            ));
        }

        Ok(())
    }

    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Build the random source described by this config.
    ///
    /// A fixed seed yields the same sequence of choices on every run.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn with_normalize_queries(mut self, normalize: bool) -> Self {
        self.normalize_queries = normalize;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_path_metric(mut self, metric: PathMetric) -> Self {
        self.path_metric = metric;
        self
    }

    pub fn with_min_word_length(mut self, min_length: usize) -> Self {
        self.min_word_length = min_length;
        self
    }
}
