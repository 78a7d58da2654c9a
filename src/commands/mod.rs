//! Command implementations

pub mod assemble;
pub mod benchmark;
pub mod encode;
pub mod solve;

pub use assemble::{AssembleResult, assemble_corpus};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use encode::encode_command;
pub use solve::{SolveResult, solve_puzzle};
