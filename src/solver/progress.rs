//! Progress sinks for observing the propagation loop
//!
//! A sink sees every snapshot the loop produces. Sinks only read; nothing they
//! do can alter the loop's outcome.

use super::outcome::{Outcome, Propagation};
use crate::core::PuzzleState;
use std::fmt;

/// Which step produced a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// State assembled from the corpus and givens
    Initial,
    /// After filtering slot candidates against the alphabet
    Words,
    /// After recomputing code letters and uniqueness
    Letters,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => write!(f, "initial"),
            Self::Words => write!(f, "word narrowing"),
            Self::Letters => write!(f, "letter narrowing"),
        }
    }
}

/// Receiver of propagation snapshots
pub trait ProgressSink {
    /// Called for the initial state and after every narrowing step
    fn record(&mut self, iteration: usize, phase: Phase, state: &PuzzleState);

    /// Called once with the terminal result
    fn finish(&mut self, _result: &Propagation) {}
}

/// Sink that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn record(&mut self, _iteration: usize, _phase: Phase, _state: &PuzzleState) {}
}

/// One recorded snapshot
#[derive(Debug, Clone)]
pub struct Step {
    pub iteration: usize,
    pub phase: Phase,
    pub state: PuzzleState,
}

/// Sink that keeps every snapshot
///
/// Snapshots are immutable and share unchanged slots, so keeping all of them
/// is cheap for puzzles of realistic size.
#[derive(Debug, Clone, Default)]
pub struct History {
    steps: Vec<Step>,
    outcome: Option<Outcome>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Terminal state, once the loop has finished
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}

impl ProgressSink for History {
    fn record(&mut self, iteration: usize, phase: Phase, state: &PuzzleState) {
        self.steps.push(Step {
            iteration,
            phase,
            state: state.clone(),
        });
    }

    fn finish(&mut self, result: &Propagation) {
        self.outcome = Some(result.outcome);
    }
}

impl<S: ProgressSink + ?Sized> ProgressSink for &mut S {
    fn record(&mut self, iteration: usize, phase: Phase, state: &PuzzleState) {
        (**self).record(iteration, phase, state);
    }

    fn finish(&mut self, result: &Propagation) {
        (**self).finish(result);
    }
}
