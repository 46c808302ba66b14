//! Integration tests for rapid_wordgraph

use rand::rngs::StdRng;
use rand::SeedableRng;
use rapid_wordgraph::*;
use std::io::Write;

/// Sample text for testing
const SAMPLE_TEXT: &str = r#"
To explore strange new worlds,
To seek out new life and new civilizations?
"#;

const LONGER_TEXT: &str = r#"
The scientist carefully analyzed the data, wrote a detailed report,
and shared the report with the team, but the team requested more data,
so the scientist analyzed it again.
"#;

fn build(text: &str) -> WordGraph {
    let words = Tokenizer::new().tokenize(text);
    WordGraph::from_tokens(&words)
}

#[test]
fn test_full_pipeline() {
    let graph = build(SAMPLE_TEXT);

    assert!(!graph.is_empty());
    assert_eq!(graph.vertex_count(), 10);
    assert_eq!(graph.edge_weight("to", "explore"), 1);
    assert_eq!(graph.edge_weight("worlds", "to"), 1);
    assert_eq!(graph.edge_weight("new", "life"), 1);

    let bridges = query_bridge_words(&graph, "seek", "new");
    assert_eq!(bridges.bridges(), ["out"]);

    let mut rng = StdRng::seed_from_u64(1);
    let text = generate_new_text(&graph, "Seek new life", &mut rng);
    assert_eq!(text, "Seek out new life");

    let path = calc_shortest_path(&graph, "to", "civilizations").unwrap();
    assert_eq!(path.vertices.first().map(String::as_str), Some("to"));
    assert_eq!(path.vertices.last().map(String::as_str), Some("civilizations"));

    let outcome = random_walk(&graph, StdRng::seed_from_u64(1)).unwrap();
    assert!(outcome.steps() <= graph.edge_count());
}

#[test]
fn test_bridge_fixture_by_hand() {
    let tokens = [
        "to", "explore", "strange", "new", "worlds", "to", "seek", "out", "new", "life",
    ];
    let graph = WordGraph::from_tokens(&tokens);

    // Successors of "to" are "explore" and "seek"; neither precedes "new".
    let expected: Vec<&str> = graph
        .neighbors("to")
        .map(|(b, _)| b)
        .filter(|b| graph.edge_weight(b, "new") > 0)
        .collect();
    assert!(expected.is_empty());
    let result = query_bridge_words(&graph, "to", "new");
    assert_eq!(result.reason(), Some(NoBridgeReason::NoneFound));

    assert_eq!(query_bridge_words(&graph, "explore", "new").bridges(), ["strange"]);
    assert_eq!(query_bridge_words(&graph, "worlds", "seek").bridges(), ["to"]);
}

#[test]
fn test_bridge_words_multiple() {
    let graph = build(LONGER_TEXT);
    // "analyzed" is followed by "the" and "it"; only "the" precedes "data"
    let result = query_bridge_words(&graph, "analyzed", "data");
    assert_eq!(result.bridges(), ["the"]);

    let result = query_bridge_words(&graph, "the", "report");
    assert!(result.is_no_bridge());
}

#[test]
fn test_shortest_path_hop_count_beats_weight() {
    let mut graph = WordGraph::new();
    for v in ["a", "b", "c"] {
        graph.add_vertex(v);
    }
    graph.add_edge("a", "b").unwrap();
    graph.add_edge("b", "c").unwrap();
    graph.add_edge("a", "c").unwrap();

    let path = calc_shortest_path(&graph, "a", "c").unwrap();
    assert_eq!(path.vertices, vec!["a", "c"]);
    assert_eq!(path.hops(), 1);
    assert_eq!(path.total_weight, 1);
}

#[test]
fn test_empty_graph() {
    let graph = build("");
    assert!(graph.is_empty());

    assert!(matches!(
        calc_shortest_path(&graph, "x", "y"),
        Err(NoPath::UnknownWord { .. })
    ));
    assert!(query_bridge_words(&graph, "x", "y").is_no_bridge());

    let err = RandomWalk::start(&graph, StdRng::seed_from_u64(0)).unwrap_err();
    assert_eq!(err, WordGraphError::EmptyGraph);
}

#[test]
fn test_queries_recover_after_misses() {
    let graph = build(SAMPLE_TEXT);

    assert!(calc_shortest_path(&graph, "warp", "drive").is_err());
    assert!(query_bridge_words(&graph, "warp", "drive").is_no_bridge());

    // The same graph keeps answering
    assert!(calc_shortest_path(&graph, "seek", "life").is_ok());
}

#[test]
fn test_interactive_walk_protocol() {
    let graph = build(LONGER_TEXT);
    let mut walk = RandomWalker::new(&graph)
        .start(StdRng::seed_from_u64(9))
        .unwrap();

    let mut advanced = 0;
    loop {
        // Caller decides to stop after three steps
        match walk.step(advanced < 3) {
            WalkStep::Advanced { from, to } => {
                assert!(graph.edge_weight(from, to) >= 1);
                advanced += 1;
            }
            WalkStep::Finished(_) => break,
        }
    }

    let outcome = walk.finish();
    assert_eq!(outcome.steps(), advanced);
    assert!(outcome.to_string().starts_with("Random walk path: "));
}

#[test]
fn test_snapshot_for_renderer() {
    let graph = build(SAMPLE_TEXT);
    let path = calc_shortest_path(&graph, "explore", "life").unwrap();
    let snapshot = GraphSnapshot::from_graph(&graph).with_path(&path);

    assert_eq!(snapshot.vertices.len(), graph.vertex_count());
    assert_eq!(snapshot.edges.len(), graph.edge_count());
    assert_eq!(snapshot.highlighted.len(), path.hops());
    for (from, to) in path.edges() {
        assert!(snapshot.is_highlighted(from, to));
    }

    let json = snapshot.to_json().unwrap();
    assert_eq!(GraphSnapshot::from_json(&json).unwrap(), snapshot);
}

#[test]
fn test_read_file_to_graph() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", SAMPLE_TEXT).unwrap();

    let config = WordGraphConfig::default();
    let words = Tokenizer::from_config(&config).read_file(file.path()).unwrap();
    let graph = WordGraph::from_tokens(&words);

    assert_eq!(graph.vertex_count(), build(SAMPLE_TEXT).vertex_count());
}

#[test]
fn test_config_drives_queries() {
    let graph = build(SAMPLE_TEXT);
    let config = WordGraphConfig::from_json(r#"{"normalize_queries": false, "seed": 3}"#).unwrap();

    let resolver = BridgeWordResolver::with_config(&graph, &config);
    assert_eq!(
        resolver.bridge_words("Seek", "new").reason(),
        Some(NoBridgeReason::UnknownWord)
    );

    let augmenter = TextAugmenter::with_config(&graph, &config);
    let first = augmenter.generate("seek new", &mut config.rng());
    let second = augmenter.generate("seek new", &mut config.rng());
    assert_eq!(first, "seek out new");
    assert_eq!(first, second);
}
