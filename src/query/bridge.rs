//! Bridge-word discovery
//!
//! A word `b` bridges `word1` to `word2` when the graph contains both
//! `word1 -> b` and `b -> word2`. The resolver scans every successor of
//! `word1` and keeps those with an edge into `word2`; a successor without
//! outgoing edges is simply not a bridge.

use crate::graph::word_graph::WordGraph;
use crate::nlp::tokenizer::normalize_word;
use crate::types::{VertexId, WordGraphConfig};
use std::borrow::Cow;
use std::fmt;

/// Why a bridge query produced no words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoBridgeReason {
    /// At least one of the two words is not a vertex
    UnknownWord,
    /// Both words exist but nothing connects them in one hop
    NoneFound,
}

/// Outcome of a bridge-word query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeWords {
    /// One or more bridge words, in `word1`'s successor order. Only built
    /// with a non-empty list.
    Found {
        word1: String,
        word2: String,
        bridges: Vec<String>,
    },
    /// No bridge words
    NoBridge {
        word1: String,
        word2: String,
        reason: NoBridgeReason,
    },
}

impl BridgeWords {
    /// True for both flavors of the no-bridge outcome
    pub fn is_no_bridge(&self) -> bool {
        matches!(self, BridgeWords::NoBridge { .. })
    }

    /// The bridge words (empty on no-bridge)
    pub fn bridges(&self) -> &[String] {
        match self {
            BridgeWords::Found { bridges, .. } => bridges,
            BridgeWords::NoBridge { .. } => &[],
        }
    }

    /// Take the bridge words, or None on no-bridge
    pub fn into_bridges(self) -> Option<Vec<String>> {
        match self {
            BridgeWords::Found { bridges, .. } => Some(bridges),
            BridgeWords::NoBridge { .. } => None,
        }
    }

    /// The no-bridge reason, if any
    pub fn reason(&self) -> Option<NoBridgeReason> {
        match self {
            BridgeWords::Found { .. } => None,
            BridgeWords::NoBridge { reason, .. } => Some(*reason),
        }
    }
}

impl fmt::Display for BridgeWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeWords::NoBridge {
                word1,
                word2,
                reason: NoBridgeReason::UnknownWord,
            } => write!(f, "No \"{word1}\" or \"{word2}\" in the graph!"),
            BridgeWords::NoBridge {
                word1,
                word2,
                reason: NoBridgeReason::NoneFound,
            } => write!(f, "No bridge words from \"{word1}\" to \"{word2}\"!"),
            BridgeWords::Found {
                word1,
                word2,
                bridges,
            } => match bridges.as_slice() {
                [single] => write!(
                    f,
                    "The bridge word from \"{word1}\" to \"{word2}\" is: {single}."
                ),
                [init @ .., last] => write!(
                    f,
                    "The bridge words from \"{word1}\" to \"{word2}\" are: {} and {last}.",
                    init.join(", ")
                ),
                [] => unreachable!("Found always carries at least one bridge"),
            },
        }
    }
}

/// Finds one-hop bridge words over a borrowed graph
#[derive(Debug, Clone, Copy)]
pub struct BridgeWordResolver<'g> {
    graph: &'g WordGraph,
    normalize: bool,
}

impl<'g> BridgeWordResolver<'g> {
    /// Create a resolver that normalizes query words
    pub fn new(graph: &'g WordGraph) -> Self {
        Self {
            graph,
            normalize: true,
        }
    }

    /// Create a resolver following `config.normalize_queries`
    pub fn with_config(graph: &'g WordGraph, config: &WordGraphConfig) -> Self {
        Self {
            graph,
            normalize: config.normalize_queries,
        }
    }

    /// The graph this resolver reads
    pub fn graph(&self) -> &'g WordGraph {
        self.graph
    }

    /// Turn a raw query word into a lookup key
    pub(crate) fn lookup_key<'w>(&self, word: &'w str) -> Cow<'w, str> {
        if self.normalize {
            Cow::Owned(normalize_word(word))
        } else {
            Cow::Borrowed(word)
        }
    }

    /// Bridge vertex IDs between two vertex IDs, in `from`'s successor order
    pub(crate) fn bridge_ids(&self, from: VertexId, to: VertexId) -> Vec<VertexId> {
        self.graph
            .successors(from)
            .iter()
            .copied()
            .filter(|&candidate| self.graph.weight_by_id(candidate, to) > 0)
            .collect()
    }

    /// Find every bridge word from `word1` to `word2`
    pub fn bridge_words(&self, word1: &str, word2: &str) -> BridgeWords {
        let key1 = self.lookup_key(word1).into_owned();
        let key2 = self.lookup_key(word2).into_owned();

        let (from, to) = match (self.graph.vertex_id(&key1), self.graph.vertex_id(&key2)) {
            (Some(from), Some(to)) => (from, to),
            _ => {
                tracing::trace!(word1 = %key1, word2 = %key2, "bridge query on unknown word");
                // A rejected token has an empty key; report what the caller typed
                let shown = |key: String, raw: &str| {
                    if key.is_empty() {
                        raw.to_string()
                    } else {
                        key
                    }
                };
                return BridgeWords::NoBridge {
                    word1: shown(key1, word1),
                    word2: shown(key2, word2),
                    reason: NoBridgeReason::UnknownWord,
                };
            }
        };

        let bridges: Vec<String> = self
            .bridge_ids(from, to)
            .into_iter()
            .filter_map(|id| self.graph.word(id))
            .map(str::to_string)
            .collect();

        if bridges.is_empty() {
            BridgeWords::NoBridge {
                word1: key1,
                word2: key2,
                reason: NoBridgeReason::NoneFound,
            }
        } else {
            BridgeWords::Found {
                word1: key1,
                word2: key2,
                bridges,
            }
        }
    }
}

/// Convenience function to query bridge words with default settings
pub fn query_bridge_words(graph: &WordGraph, word1: &str, word2: &str) -> BridgeWords {
    BridgeWordResolver::new(graph).bridge_words(word1, word2)
}
