//! Bridge-word text augmentation
//!
//! Rewrites a text by inserting, between every adjacent pair of words that
//! has at least one bridge word in the graph, one bridge chosen uniformly at
//! random. Input words are emitted with their original spelling; bridge words
//! are emitted as stored in the graph.

use crate::graph::word_graph::WordGraph;
use crate::query::bridge::BridgeWordResolver;
use crate::types::{VertexId, WordGraphConfig};
use rand::seq::SliceRandom;
use rand::Rng;

/// Inserts random bridge words into text
#[derive(Debug, Clone, Copy)]
pub struct TextAugmenter<'g> {
    resolver: BridgeWordResolver<'g>,
}

impl<'g> TextAugmenter<'g> {
    /// Create an augmenter that normalizes lookups
    pub fn new(graph: &'g WordGraph) -> Self {
        Self {
            resolver: BridgeWordResolver::new(graph),
        }
    }

    /// Create an augmenter following `config.normalize_queries`
    pub fn with_config(graph: &'g WordGraph, config: &WordGraphConfig) -> Self {
        Self {
            resolver: BridgeWordResolver::with_config(graph, config),
        }
    }

    /// Generate the augmented text.
    ///
    /// Whitespace runs in the input collapse to single spaces. Empty input
    /// yields an empty string and a single word comes back unchanged.
    pub fn generate<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> String {
        let words: Vec<&str> = input.split_whitespace().collect();
        if words.len() < 2 {
            return words.concat();
        }

        let graph = self.resolver.graph();
        let ids: Vec<Option<VertexId>> = words
            .iter()
            .map(|w| graph.vertex_id(&self.resolver.lookup_key(w)))
            .collect();

        let mut output: Vec<&str> = Vec::with_capacity(words.len() * 2);
        let mut inserted = 0usize;

        for (i, pair) in ids.windows(2).enumerate() {
            output.push(words[i]);

            let (Some(from), Some(to)) = (pair[0], pair[1]) else {
                continue;
            };
            let bridges = self.resolver.bridge_ids(from, to);
            if let Some(word) = bridges.choose(&mut *rng).and_then(|&id| graph.word(id)) {
                output.push(word);
                inserted += 1;
            }
        }
        output.push(words[words.len() - 1]);

        tracing::debug!(words = words.len(), inserted, "augmented text");
        output.join(" ")
    }
}

/// Convenience function to augment text with default settings
pub fn generate_new_text<R: Rng + ?Sized>(graph: &WordGraph, input: &str, rng: &mut R) -> String {
    TextAugmenter::new(graph).generate(input, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn sample_graph() -> WordGraph {
        WordGraph::from_tokens(&[
            "to", "explore", "strange", "new", "worlds", "to", "seek", "out", "new", "life",
            "and", "new", "civilizations",
        ])
    }

    #[test]
    fn test_inserts_single_bridge() {
        let graph = sample_graph();
        let text = generate_new_text(&graph, "seek new life", &mut rng());
        assert_eq!(text, "seek out new life");
    }

    #[test]
    fn test_preserves_input_case() {
        let graph = sample_graph();
        let text = generate_new_text(&graph, "Seek NEW", &mut rng());
        assert_eq!(text, "Seek out NEW");
    }

    #[test]
    fn test_raw_lookup_is_case_sensitive() {
        let graph = sample_graph();
        let config = WordGraphConfig::default().with_normalize_queries(false);
        let augmenter = TextAugmenter::with_config(&graph, &config);
        assert_eq!(augmenter.generate("Seek new", &mut rng()), "Seek new");
        assert_eq!(augmenter.generate("seek new", &mut rng()), "seek out new");
    }

    #[test]
    fn test_random_choice_among_bridges() {
        let graph = WordGraph::from_tokens(&["a", "x", "b", "a", "y", "b"]);
        let mut rng = rng();
        for _ in 0..20 {
            let text = generate_new_text(&graph, "a b", &mut rng);
            assert!(text == "a x b" || text == "a y b", "unexpected {text}");
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let graph = WordGraph::from_tokens(&["a", "x", "b", "a", "y", "b", "a", "z", "b"]);
        let input = "a b a b a b";
        let first = generate_new_text(&graph, input, &mut rng());
        let second = generate_new_text(&graph, input, &mut rng());
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_bridges_collapses_whitespace() {
        let graph = sample_graph();
        let text = generate_new_text(&graph, "  hello   brave\tnew  world ", &mut rng());
        assert_eq!(text, "hello brave new world");
    }

    #[test]
    fn test_single_word_and_empty() {
        let graph = sample_graph();
        assert_eq!(generate_new_text(&graph, "worlds", &mut rng()), "worlds");
        assert_eq!(generate_new_text(&graph, "", &mut rng()), "");
        assert_eq!(generate_new_text(&graph, "   ", &mut rng()), "");
    }

    #[test]
    fn test_empty_graph() {
        let graph = WordGraph::new();
        assert_eq!(generate_new_text(&graph, "to new", &mut rng()), "to new");
    }
}
