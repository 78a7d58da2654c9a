//! Puzzle definitions: loading from JSON and encoding plaintext phrases

pub mod generate;
mod loader;

pub use generate::{Cipher, EncodedPuzzle, encode_phrase, encode_words, phrase_words, random_phrase};
pub use loader::{PuzzleError, load_puzzle, parse_puzzle, to_json};
