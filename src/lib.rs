//! # rapid_wordgraph
//!
//! Directed word-adjacency graphs built from text, and the queries they
//! answer.
//!
//! Every adjacent pair of words in the source becomes a weighted edge whose
//! weight counts how often the pair occurred. Over the finished graph the
//! crate answers:
//!
//! - **Bridge words**: words `b` with edges `w1 -> b` and `b -> w2`
//! - **Text augmentation**: insert a random bridge word between word pairs
//! - **Shortest paths**: minimum-hop routes, with their summed edge weight
//! - **Random walks**: resumable, never reusing a directed edge
//!
//! ```
//! use rapid_wordgraph::*;
//!
//! let words = Tokenizer::new().tokenize("To seek out new life and new civilizations");
//! let graph = WordGraph::from_tokens(&words);
//!
//! let bridges = query_bridge_words(&graph, "seek", "new");
//! assert_eq!(bridges.bridges(), ["out"]);
//!
//! let path = calc_shortest_path(&graph, "to", "life").unwrap();
//! assert_eq!(path.to_string(), "to -> seek -> out -> new -> life");
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod query;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, WordGraphError};
pub use types::{Edge, PathMetric, VertexId, WordGraphConfig};

// Re-export main functionality
pub use graph::{GraphSnapshot, WordGraph};
pub use nlp::tokenizer::{normalize_word, Tokenizer};
pub use query::{
    bridge::{query_bridge_words, BridgeWordResolver, BridgeWords, NoBridgeReason},
    augment::{generate_new_text, TextAugmenter},
    random_walk::{random_walk, RandomWalk, RandomWalker, WalkEnd, WalkOutcome, WalkStep},
    shortest_path::{calc_shortest_path, NoPath, ShortestPath, ShortestPathFinder},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
