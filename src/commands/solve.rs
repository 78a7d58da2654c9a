//! Puzzle solving command
//!
//! Solves one starting puzzle and optionally keeps every intermediate snapshot.

use crate::core::{ConfigError, StartingPuzzle};
use crate::corpus::WordSource;
use crate::solver::{History, Propagation, Solver};

/// Result of solving a puzzle
pub struct SolveResult {
    pub propagation: Propagation,
    /// Every snapshot, when tracing was requested
    pub history: Option<History>,
}

impl SolveResult {
    /// Number of slots in the puzzle
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.propagation.snapshot.slots().len()
    }
}

/// Solve a puzzle with the given solver
///
/// # Errors
///
/// Returns an error if the puzzle definition is invalid (codes out of range,
/// non-letter givens, empty slots or two givens on one letter).
pub fn solve_puzzle<W: WordSource + ?Sized>(
    solver: &Solver<'_, W>,
    puzzle: &StartingPuzzle,
    trace: bool,
) -> Result<SolveResult, ConfigError> {
    if !trace {
        return Ok(SolveResult {
            propagation: solver.solve(puzzle)?,
            history: None,
        });
    }

    let mut history = History::new();
    let propagation = solver.solve_with(puzzle, &mut history)?;

    Ok(SolveResult {
        propagation,
        history: Some(history),
    })
}
