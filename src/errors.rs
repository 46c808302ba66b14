//! Error types for rapid_wordgraph
//!
//! Only contract violations and environment failures are errors here.
//! Query misses (unknown words, unreachable targets, no bridge words) are
//! ordinary values returned by the query modules.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WordGraphError>;

/// Main error type for rapid_wordgraph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordGraphError {
    /// An edge was recorded before its endpoints were registered as vertices
    #[error("Invalid edge insertion {from:?} -> {to:?}: {missing:?} is not a vertex")]
    InvalidEdgeInsertion {
        from: String,
        to: String,
        missing: String,
    },

    /// A random walk was requested on a graph with no vertices
    #[error("Empty graph: no vertices available")]
    EmptyGraph,

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Reading source text or writing walk output failed
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl WordGraphError {
    /// Create an invalid edge insertion error
    pub fn invalid_edge(
        from: impl Into<String>,
        to: impl Into<String>,
        missing: impl Into<String>,
    ) -> Self {
        Self::InvalidEdgeInsertion {
            from: from.into(),
            to: to.into(),
            missing: missing.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Check if this error is the recoverable empty-graph condition
    pub fn is_empty_graph(&self) -> bool {
        matches!(self, Self::EmptyGraph)
    }
}

impl From<serde_json::Error> for WordGraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<std::io::Error> for WordGraphError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}
