//! Benchmark command
//!
//! Encodes random corpus phrases with random ciphers and measures how far
//! propagation alone gets. The plaintext is known, so every solved puzzle is
//! also checked against it.

use crate::corpus::Corpus;
use crate::puzzle::{Cipher, EncodedPuzzle, encode_words, random_phrase};
use crate::solver::{Outcome, Solver, SolverConfig};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

/// Benchmark settings
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Number of puzzles to generate
    pub count: usize,
    /// Words per generated phrase
    pub words: usize,
    /// Codes revealed as givens in each puzzle
    pub reveal: usize,
    /// Word lengths drawn from the corpus
    pub lengths: RangeInclusive<usize>,
    pub seed: u64,
    /// Show a progress bar while solving
    pub progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 100,
            words: 8,
            reveal: 2,
            lengths: 3..=9,
            seed: 0,
            progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_puzzles: usize,
    pub solved: usize,
    pub stuck: usize,
    pub contradictions: usize,
    pub limit_hits: usize,
    /// Solved puzzles whose words differ from the encoded phrase
    pub unsound: usize,
    pub total_iterations: usize,
    pub max_iterations: usize,
    /// Pass counts for solved puzzles
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

impl BenchmarkResult {
    /// Fraction of puzzles solved, 0 for an empty run
    #[must_use]
    pub fn solve_rate(&self) -> f64 {
        per_puzzle(self.solved, self.total_puzzles)
    }

    /// Mean passes per puzzle, 0 for an empty run
    #[must_use]
    pub fn average_iterations(&self) -> f64 {
        per_puzzle(self.total_iterations, self.total_puzzles)
    }
}

/// `amount / puzzles`, where an empty run also has a zero amount
fn per_puzzle(amount: usize, puzzles: usize) -> f64 {
    amount as f64 / puzzles.max(1) as f64
}

struct PuzzleRun {
    outcome: Outcome,
    iterations: usize,
    sound: bool,
}

/// Generate puzzles from the corpus, sequentially so a seed reproduces them
fn generate_puzzles(corpus: &Corpus, config: &BenchmarkConfig) -> Vec<EncodedPuzzle> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    (0..config.count)
        .filter_map(|_| {
            let phrase = random_phrase(corpus, config.words, config.lengths.clone(), &mut rng);
            let cipher = Cipher::random(&mut rng);
            encode_words(&phrase, &cipher, config.reveal, &mut rng).ok()
        })
        .collect()
}

/// Run the benchmark over randomly generated puzzles
///
/// Puzzles are generated from `config.seed` and solved in parallel.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_benchmark(
    corpus: &Corpus,
    solver_config: SolverConfig,
    config: &BenchmarkConfig,
) -> BenchmarkResult {
    let puzzles = generate_puzzles(corpus, config);
    if puzzles.len() < config.count {
        warn!(
            "Generated {} of {} puzzles; no corpus words with lengths {:?}",
            puzzles.len(),
            config.count,
            config.lengths
        );
    }

    let pb = if config.progress {
        ProgressBar::new(puzzles.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let solver = Solver::new(corpus, solver_config);

    let runs: Vec<PuzzleRun> = puzzles
        .par_iter()
        .filter_map(|encoded| {
            let result = solver.solve(&encoded.puzzle);
            pb.inc(1);
            let propagation = result.ok()?;
            let sound = propagation
                .solution()
                .is_none_or(|solution| encoded.matches(&solution));
            if !sound {
                debug!(
                    "Solved puzzle does not match its phrase: {:?}",
                    encoded.plaintext
                );
            }
            Some(PuzzleRun {
                outcome: propagation.outcome,
                iterations: propagation.iterations,
                sound,
            })
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut result = BenchmarkResult {
        total_puzzles: runs.len(),
        solved: 0,
        stuck: 0,
        contradictions: 0,
        limit_hits: 0,
        unsound: 0,
        total_iterations: 0,
        max_iterations: 0,
        distribution: BTreeMap::new(),
        duration,
        puzzles_per_second: runs.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    };

    for run in &runs {
        match run.outcome {
            Outcome::Solved => {
                result.solved += 1;
                *result.distribution.entry(run.iterations).or_insert(0) += 1;
            }
            Outcome::Stuck => result.stuck += 1,
            Outcome::Contradiction(_) => result.contradictions += 1,
            Outcome::IterationLimitExceeded { .. } => result.limit_hits += 1,
        }
        if !run.sound {
            result.unsound += 1;
        }
        result.total_iterations += run.iterations;
        result.max_iterations = result.max_iterations.max(run.iterations);
    }

    result
}
