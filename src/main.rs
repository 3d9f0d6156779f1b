//! Word Ladder - CLI
//!
//! Finds paths between words in the one-substitution adjacency graph, using
//! a trie-backed adjacency oracle and four search strategies.

use anyhow::Result;
use clap::{Parser, Subcommand};
use word_ladder::{
    commands::{FindConfig, run_benchmark, run_compare, run_find, run_longest, run_neighbors},
    core::Word,
    output::{
        print_benchmark_result, print_compare_result, print_find_result, print_longest_result,
        print_neighbors_result,
    },
    scoring::Weights,
    search::Algorithm,
    wordlists::{Vocabulary, WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Word ladder path finder with trie-based adjacency and heuristic search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Algorithm: informed (default), shortest, bidirectional, longest
    #[arg(short, long, global = true, default_value = "informed")]
    algorithm: String,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Heuristic weights as 'distance,match,change,substitution'
    #[arg(long, global = true, default_value = "1,1,1,1")]
    weights: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a ladder between two words
    Find {
        /// Start word
        source: String,

        /// End word (same length as the start word)
        destination: String,

        /// Show exploration statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the vocabulary words adjacent to a word
    Neighbors {
        /// Word to query
        word: String,
    },

    /// Find the longest simple ladder starting from a word (exhaustive)
    Longest {
        /// Start word
        source: String,
    },

    /// Run all directed algorithms on one pair and compare them
    Compare {
        /// Start word
        source: String,

        /// End word
        destination: String,
    },

    /// Benchmark an algorithm over random word pairs
    Benchmark {
        /// Number of random pairs to test
        #[arg(short = 'n', long, default_value = "50")]
        pairs: usize,

        /// Word length to benchmark
        #[arg(short = 'l', long, default_value = "4")]
        length: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let candidates = load_words(&cli.wordlist)?;
    let algorithm = Algorithm::from_name(&cli.algorithm);
    let weights = parse_weights(&cli.weights)?;

    match cli.command {
        Commands::Find {
            source,
            destination,
            verbose,
        } => {
            let vocabulary = build_vocabulary(candidates, source.len())?;
            let mut config = FindConfig::new(source, destination);
            config.algorithm = algorithm;
            config.weights = weights;

            let result = run_find(&config, &vocabulary).map_err(|e| anyhow::anyhow!(e))?;
            print_find_result(&result, verbose);
            Ok(())
        }
        Commands::Neighbors { word } => {
            let vocabulary = build_vocabulary(candidates, word.len())?;
            let result = run_neighbors(&word, &vocabulary).map_err(|e| anyhow::anyhow!(e))?;
            print_neighbors_result(&result);
            Ok(())
        }
        Commands::Longest { source } => {
            let vocabulary = build_vocabulary(candidates, source.len())?;
            let result =
                run_longest(&source, weights, &vocabulary).map_err(|e| anyhow::anyhow!(e))?;
            print_longest_result(&result);
            Ok(())
        }
        Commands::Compare {
            source,
            destination,
        } => {
            let vocabulary = build_vocabulary(candidates, source.len())?;
            let result = run_compare(&source, &destination, weights, &vocabulary)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_compare_result(&result);
            Ok(())
        }
        Commands::Benchmark { pairs, length } => {
            let vocabulary = build_vocabulary(candidates, length)?;
            println!(
                "Benchmarking '{algorithm}' on {pairs} random pairs ({} words of length {length})...",
                vocabulary.len()
            );
            let result = run_benchmark(&vocabulary, algorithm, pairs, weights);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

/// Load word candidates based on the -w flag
fn load_words(wordlist_mode: &str) -> Result<Vec<Word>> {
    use word_ladder::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => Ok(load_from_file(path)?),
    }
}

/// Build a vocabulary of one fixed word length
fn build_vocabulary(candidates: Vec<Word>, length: usize) -> Result<Vocabulary> {
    if length == 0 {
        anyhow::bail!("Word length must be at least 1");
    }
    let vocabulary = Vocabulary::build(candidates, |w| w.len() == length)?;
    if vocabulary.is_empty() {
        anyhow::bail!("No words of length {length} in the word list");
    }
    Ok(vocabulary)
}

/// Parse 'a,b,c,d' into a weight configuration
fn parse_weights(text: &str) -> Result<Weights> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    let [distance, destination_match, change, substitution] = parts[..] else {
        anyhow::bail!("Weights must be four comma-separated integers, got '{text}'");
    };

    let parse = |s: &str| -> Result<u32> {
        s.parse()
            .map_err(|_| anyhow::anyhow!("Invalid weight '{s}'"))
    };
    let weights = Weights::new(
        parse(distance)?,
        parse(destination_match)?,
        parse(change)?,
        parse(substitution)?,
    );
    if weights.sum() == 0 {
        anyhow::bail!("At least one weight must be positive");
    }
    Ok(weights)
}
