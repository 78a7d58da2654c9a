//! Phrase encoding command
//!
//! Turns a plaintext phrase into a puzzle definition with a random cipher.

use crate::puzzle::{EncodedPuzzle, PuzzleError, encode_phrase};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Encode `phrase`, revealing `reveal` codes
///
/// A fixed `seed` reproduces the same cipher and givens.
///
/// # Errors
///
/// Returns an error if the phrase contains no usable words or non-ASCII
/// letters.
pub fn encode_command(
    phrase: &str,
    reveal: usize,
    seed: Option<u64>,
) -> Result<EncodedPuzzle, PuzzleError> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    encode_phrase(phrase, reveal, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn seeded_encoding_is_reproducible() {
        let first = encode_command("the quick brown fox", 3, Some(5)).unwrap();
        let second = encode_command("the quick brown fox", 3, Some(5)).unwrap();

        assert_eq!(first.puzzle, second.puzzle);
        assert_eq!(first.puzzle.givens.len(), 3);
    }

    #[test]
    fn plaintext_is_kept_lowercase() {
        let encoded = encode_command("Good Morning", 0, Some(1)).unwrap();
        let texts: Vec<&str> = encoded.plaintext.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["good", "morning"]);
        assert!(encoded.puzzle.givens.is_empty());
    }

    #[test]
    fn empty_phrase_fails() {
        assert!(matches!(
            encode_command("  !? ", 1, None),
            Err(PuzzleError::EmptyPhrase)
        ));
    }
}
