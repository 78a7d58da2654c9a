//! Codeword Solver - CLI
//!
//! Solves number-substitution puzzles by constraint propagation, with a TUI
//! for stepping through each pass.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codeword_solver::{
    commands::{
        BenchmarkConfig, assemble_corpus, encode_command, run_benchmark, solve_puzzle,
    },
    corpus::{Corpus, loader::load_from_file},
    output::{
        print_assemble_result, print_benchmark_result, print_encoded, print_solve_result,
        print_trace,
    },
    puzzle::{load_puzzle, to_json},
    solver::{DEFAULT_MAX_ITERATIONS, History, Solver, SolverConfig},
};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "codeword",
    about = "Codeword puzzle solver using constraint propagation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a .json length map or .txt list
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Upper bound on propagation passes
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle file
    Solve {
        /// Puzzle definition (JSON)
        puzzle: PathBuf,

        /// Print every intermediate snapshot
        #[arg(short, long)]
        trace: bool,

        /// Show what is known about every code
        #[arg(long)]
        codes: bool,
    },

    /// Step through a puzzle's propagation in the TUI
    Play {
        /// Puzzle definition (JSON)
        puzzle: PathBuf,
    },

    /// Benchmark propagation on random encoded phrases
    Benchmark {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Words per phrase
        #[arg(long, default_value = "8")]
        words: usize,

        /// Codes revealed in each puzzle
        #[arg(short, long, default_value = "2")]
        reveal: usize,

        /// Random seed
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },

    /// Merge a directory of word sources into one JSON corpus
    Assemble {
        /// Directory of .json word arrays and .txt word lists
        dir: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "words.json")]
        output: PathBuf,
    },

    /// Encode a phrase as a puzzle with a random cipher
    Encode {
        /// Plaintext phrase
        phrase: String,

        /// Codes to reveal as givens
        #[arg(short, long, default_value = "2")]
        reveal: usize,

        /// Random seed for a reproducible cipher
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Load the corpus named by the -w flag
fn load_corpus(wordlist: &str) -> Result<Corpus> {
    let corpus = match wordlist {
        "embedded" => Corpus::embedded(),
        path => load_from_file(path).with_context(|| format!("Failed to load wordlist {path}"))?,
    };
    info!(
        "Corpus: {} words over {} lengths",
        corpus.len(),
        corpus.lengths().len()
    );
    Ok(corpus)
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SolverConfig::new().with_max_iterations(cli.max_iterations);

    match cli.command {
        Commands::Solve {
            puzzle,
            trace,
            codes,
        } => run_solve_command(&cli.wordlist, config, &puzzle, trace, codes),
        Commands::Play { puzzle } => run_play_command(&cli.wordlist, config, &puzzle),
        Commands::Benchmark {
            count,
            words,
            reveal,
            seed,
        } => {
            let corpus = load_corpus(&cli.wordlist)?;
            println!("Running benchmark on {count} random puzzles...");
            let benchmark = BenchmarkConfig {
                count,
                words,
                reveal,
                seed,
                ..BenchmarkConfig::default()
            };
            let result = run_benchmark(&corpus, config, &benchmark);
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Assemble { dir, output } => {
            let result = assemble_corpus(&dir, &output)?;
            print_assemble_result(&result);
            Ok(())
        }
        Commands::Encode {
            phrase,
            reveal,
            seed,
        } => {
            let encoded = encode_command(&phrase, reveal, seed)?;
            let json = to_json(&encoded.puzzle)?;
            print_encoded(&encoded, &json);
            Ok(())
        }
    }
}

fn run_solve_command(
    wordlist: &str,
    config: SolverConfig,
    puzzle_path: &Path,
    trace: bool,
    codes: bool,
) -> Result<()> {
    let corpus = load_corpus(wordlist)?;
    let puzzle = load_puzzle(puzzle_path)?;
    let solver = Solver::new(&corpus, config);

    let result = solve_puzzle(&solver, &puzzle, trace)
        .with_context(|| format!("Invalid puzzle {}", puzzle_path.display()))?;

    if let Some(history) = &result.history {
        print_trace(history);
    }
    print_solve_result(&result, codes);
    Ok(())
}

fn run_play_command(wordlist: &str, config: SolverConfig, puzzle_path: &Path) -> Result<()> {
    use codeword_solver::interactive::{App, run_tui};

    let corpus = load_corpus(wordlist)?;
    let puzzle = load_puzzle(puzzle_path)?;
    let solver = Solver::new(&corpus, config);

    let mut history = History::new();
    let propagation = solver
        .solve_with(&puzzle, &mut history)
        .with_context(|| format!("Invalid puzzle {}", puzzle_path.display()))?;

    let app = App::new(history, &propagation)?;
    run_tui(app)
}
