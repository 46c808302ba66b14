//! wordgraph CLI binary.
//!
//! Builds a word graph from a text file and runs one query against it.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rapid_wordgraph::{
    BridgeWordResolver, GraphSnapshot, PathMetric, RandomWalk, Result, ShortestPathFinder,
    TextAugmenter, Tokenizer, WalkStep, WordGraph, WordGraphConfig, WordGraphError,
};

#[derive(Parser, Debug)]
#[command(name = "wordgraph", version, about = "Query the word-adjacency graph of a text file")]
struct Cli {
    /// Source text file
    file: PathBuf,

    /// JSON configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for reproducible random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Look up query words exactly as typed (case-sensitive)
    #[arg(long)]
    raw: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every vertex with its weighted successors
    Show,
    /// Find bridge words from WORD1 to WORD2
    Bridge { word1: String, word2: String },
    /// Insert random bridge words into TEXT
    Generate {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Find a shortest path from WORD1 to WORD2
    Path {
        word1: String,
        word2: String,
        /// Minimize summed edge weight instead of hop count
        #[arg(long)]
        by_weight: bool,
    },
    /// Run an interactive random walk
    Walk {
        /// File that receives the final path
        #[arg(long, default_value = "random_walk.txt")]
        output: PathBuf,
        /// Keep walking without prompting
        #[arg(long)]
        auto: bool,
    },
    /// Print a JSON snapshot of the graph for an external renderer
    Export {
        /// Highlight the shortest path between two words
        #[arg(long, num_args = 2, value_names = ["WORD1", "WORD2"])]
        highlight: Option<Vec<String>>,
        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<WordGraphConfig> {
    let mut config = match &cli.config {
        Some(path) => WordGraphConfig::from_json(&fs::read_to_string(path)?)?,
        None => WordGraphConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if cli.raw {
        config = config.with_normalize_queries(false);
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let words = Tokenizer::from_config(&config).read_file(&cli.file)?;
    let graph = WordGraph::from_tokens(&words);
    tracing::info!(
        file = %cli.file.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph ready"
    );

    match cli.command {
        Command::Show => print!("{graph}"),
        Command::Bridge { word1, word2 } => {
            let resolver = BridgeWordResolver::with_config(&graph, &config);
            println!("{}", resolver.bridge_words(&word1, &word2));
        }
        Command::Generate { text } => {
            let augmenter = TextAugmenter::with_config(&graph, &config);
            let mut rng = config.rng();
            println!("{}", augmenter.generate(&text.join(" "), &mut rng));
        }
        Command::Path {
            word1,
            word2,
            by_weight,
        } => {
            let mut finder = ShortestPathFinder::with_config(&graph, &config);
            if by_weight {
                finder = finder.with_metric(PathMetric::Weight);
            }
            match finder.shortest_path(&word1, &word2) {
                Ok(path) => {
                    println!("{path}");
                    println!("Shortest path length: {}", path.total_weight);
                }
                Err(no_path) => println!("{no_path}"),
            }
        }
        Command::Walk { output, auto } => walk(&graph, &config, &output, auto)?,
        Command::Export { highlight, pretty } => {
            let mut snapshot = GraphSnapshot::from_graph(&graph);
            if let Some([word1, word2]) = highlight.as_deref() {
                let finder = ShortestPathFinder::with_config(&graph, &config);
                match finder.shortest_path(word1, word2) {
                    Ok(path) => snapshot = snapshot.with_path(&path),
                    Err(no_path) => tracing::warn!("{no_path}"),
                }
            }
            let json = if pretty {
                snapshot.to_json_pretty()?
            } else {
                snapshot.to_json()?
            };
            println!("{json}");
        }
    }

    Ok(())
}

fn walk(graph: &WordGraph, config: &WordGraphConfig, output: &Path, auto: bool) -> Result<()> {
    let mut walk = match RandomWalk::start(graph, config.rng()) {
        Ok(walk) => walk,
        Err(WordGraphError::EmptyGraph) => {
            println!("The graph is empty.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if !auto {
        println!("Enter 'stop' to stop the random walk.");
    }
    println!("Start: {}", walk.current());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        match walk.step(true) {
            WalkStep::Advanced { .. } => {
                println!("Current path: {}", walk.path().join(" -> "));
                if auto {
                    continue;
                }
                print!("Enter 'stop' to stop the random walk, or press Enter to continue: ");
                io::stdout().flush()?;
                // End of input counts as a stop request
                let Some(line) = lines.next() else {
                    walk.stop();
                    break;
                };
                if line?.trim().eq_ignore_ascii_case("stop") {
                    walk.stop();
                    break;
                }
            }
            WalkStep::Finished(end) => {
                println!("{end}");
                break;
            }
        }
    }

    let outcome = walk.finish();
    println!("{outcome}");
    fs::write(output, outcome.to_string())?;
    tracing::info!(path = %output.display(), steps = outcome.steps(), "walk written");
    Ok(())
}
