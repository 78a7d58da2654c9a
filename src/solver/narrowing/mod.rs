//! The two narrowing steps of the propagation loop
//!
//! Each step is a pure function from one snapshot to the next. Word narrowing
//! prunes slot candidates using code knowledge; letter narrowing prunes code
//! knowledge using slot candidates. Alternating them to a fixpoint is
//! arc-consistency over the code/slot constraint graph.

mod letters;
mod words;

pub use letters::narrow_letters;
pub use words::narrow_words;

use super::outcome::Contradiction;
use crate::core::PuzzleState;

/// Result of a narrowing step that left the puzzle satisfiable
#[derive(Debug, Clone)]
pub struct Narrowed {
    pub state: PuzzleState,
    /// Whether any candidate list or code knowledge shrank
    pub changed: bool,
}

/// Result of a narrowing step that emptied a slot or a code
#[derive(Debug, Clone)]
pub struct Contradicted {
    pub reason: Contradiction,
    /// Snapshot at the moment the contradiction was found
    pub state: Box<PuzzleState>,
}

pub type NarrowResult = Result<Narrowed, Contradicted>;
