//! Core domain types for codeword puzzles
//!
//! This module holds the immutable data model the solver threads through its
//! propagation loop: letters and codes, per-code knowledge, slots and puzzle
//! snapshots.

mod alphabet;
mod letter;
mod puzzle;
mod slot;
mod word;

pub use alphabet::{AlphabetState, CodeKnowledge, ConfigError};
pub use letter::{ALPHABET_SIZE, Code, CodeError, Letter, LetterSet};
pub use puzzle::{PuzzleState, StartingPuzzle};
pub use slot::SlotState;
pub use word::{Word, WordError};
