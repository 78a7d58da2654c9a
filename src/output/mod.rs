//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_assemble_result, print_benchmark_result, print_encoded, print_solve_result, print_trace,
};
