//! Read-only queries over a finished [`WordGraph`](crate::graph::WordGraph).
//!
//! - [`bridge`]: one-hop bridge words between two words
//! - [`augment`]: text rewriting with random bridge words
//! - [`shortest_path`]: minimum-hop paths with weight reporting
//! - [`random_walk`]: resumable edge-disjoint random walks
//!
//! None of these mutate the graph; random choices draw from a caller-supplied
//! [`rand::Rng`], so a seeded generator makes every query reproducible.

pub mod augment;
pub mod bridge;
pub mod random_walk;
pub mod shortest_path;

pub use augment::{generate_new_text, TextAugmenter};
pub use bridge::{query_bridge_words, BridgeWordResolver, BridgeWords, NoBridgeReason};
pub use random_walk::{random_walk, RandomWalk, RandomWalker, WalkEnd, WalkOutcome, WalkStep};
pub use shortest_path::{calc_shortest_path, NoPath, ShortestPath, ShortestPathFinder};
