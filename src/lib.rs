//! Codeword Solver
//!
//! Solves codeword puzzles, where every letter of a hidden phrase is replaced
//! by a number, using constraint propagation over a word corpus.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use codeword_solver::corpus::Corpus;
//! use codeword_solver::puzzle::load_puzzle;
//! use codeword_solver::solver::{Solver, SolverConfig};
//!
//! let corpus = Corpus::embedded();
//! let solver = Solver::new(&corpus, SolverConfig::default());
//!
//! let puzzle = load_puzzle("data/puzzles/sample.json").unwrap();
//! let result = solver.solve(&puzzle).unwrap();
//! println!("{} after {} passes", result.outcome, result.iterations);
//! ```

// Core domain types
pub mod core;

// Propagation loop
pub mod solver;

// Word corpus
pub mod corpus;

// Puzzle definitions and encoding
pub mod puzzle;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
