//! Loop states and propagation results

use crate::core::{Code, Letter, PuzzleState, Word};
use std::fmt;

/// Why propagation found the puzzle unsolvable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contradiction {
    /// No candidate word fits this slot (0-based index)
    EmptySlot { slot: usize },
    /// No letter fits every slot containing this code
    EmptyCode { code: Code },
    /// Two codes were both proven to be the same letter
    LetterClash {
        letter: Letter,
        first: Code,
        second: Code,
    },
}

impl fmt::Display for Contradiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySlot { slot } => {
                write!(f, "no candidate word fits slot {}", slot + 1)
            }
            Self::EmptyCode { code } => write!(f, "no letter fits code {code}"),
            Self::LetterClash {
                letter,
                first,
                second,
            } => write!(f, "codes {first} and {second} both resolve to '{letter}'"),
        }
    }
}

/// How the propagation loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every slot holds exactly one word
    Solved,
    /// A fixpoint was reached without solving; search would be needed
    Stuck,
    /// The puzzle admits no solution with this corpus
    Contradiction(Contradiction),
    /// The pass bound was hit before a fixpoint
    IterationLimitExceeded { limit: usize },
}

impl Outcome {
    /// Contradictions and the iteration limit are failures; `Stuck` is not
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(
            self,
            Self::Contradiction(_) | Self::IterationLimitExceeded { .. }
        )
    }

    /// Short lowercase label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Solved => "solved",
            Self::Stuck => "stuck",
            Self::Contradiction(_) => "contradiction",
            Self::IterationLimitExceeded { .. } => "iteration limit",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contradiction(reason) => write!(f, "contradiction: {reason}"),
            Self::IterationLimitExceeded { limit } => {
                write!(f, "iteration limit of {limit} exceeded")
            }
            other => write!(f, "{}", other.label()),
        }
    }
}

/// State of the propagation loop after a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Finished(Outcome),
}

impl LoopState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

impl From<Outcome> for LoopState {
    fn from(outcome: Outcome) -> Self {
        Self::Finished(outcome)
    }
}

impl fmt::Display for LoopState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => write!(f, "running"),
            Self::Finished(outcome) => write!(f, "{outcome}"),
        }
    }
}

/// Terminal result of running the propagation loop
#[derive(Debug, Clone)]
pub struct Propagation {
    pub outcome: Outcome,
    /// Final snapshot, including on failure
    pub snapshot: PuzzleState,
    /// Narrowing passes performed
    pub iterations: usize,
}

impl Propagation {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved)
    }

    /// Solved words in slot order
    #[must_use]
    pub fn solution(&self) -> Option<Vec<Word>> {
        if self.is_solved() {
            self.snapshot.solution()
        } else {
            None
        }
    }
}
