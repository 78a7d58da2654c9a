//! Puzzle encoding
//!
//! Turns plaintext phrases into codeword puzzles by assigning every letter a
//! random code. Used to build test puzzles and to benchmark the solver on
//! phrases whose answer is known.

use super::PuzzleError;
use crate::core::{ALPHABET_SIZE, Letter, StartingPuzzle, Word};
use crate::corpus::{Corpus, WordSource};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// A letter to code substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cipher {
    codes: [u8; ALPHABET_SIZE],
}

impl Cipher {
    /// Random permutation of codes over the alphabet
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut codes: [u8; ALPHABET_SIZE] = std::array::from_fn(|i| i as u8 + 1);
        codes.shuffle(rng);
        Self { codes }
    }

    /// `a` = 1, `b` = 2, ...
    #[must_use]
    pub fn identity() -> Self {
        Self {
            codes: std::array::from_fn(|i| i as u8 + 1),
        }
    }

    /// Code for `letter`, widened to the puzzle file's integer type
    #[must_use]
    pub fn code_of(&self, letter: Letter) -> i64 {
        i64::from(self.codes[letter.index()])
    }

    /// Code sequence spelling `word`
    #[must_use]
    pub fn encode(&self, word: &Word) -> Vec<i64> {
        word.letters().map(|letter| self.code_of(letter)).collect()
    }
}

/// An encoded puzzle together with its answer
#[derive(Debug, Clone)]
pub struct EncodedPuzzle {
    pub puzzle: StartingPuzzle,
    pub plaintext: Vec<Word>,
}

impl EncodedPuzzle {
    /// Whether `solution` spells the original phrase
    #[must_use]
    pub fn matches(&self, solution: &[Word]) -> bool {
        solution == self.plaintext.as_slice()
    }
}

/// Split a phrase into words, dropping punctuation
///
/// # Errors
/// Returns `PuzzleError::EmptyPhrase` if nothing is left, or
/// `PuzzleError::InvalidWord` for non-ASCII letters.
pub fn phrase_words(phrase: &str) -> Result<Vec<Word>, PuzzleError> {
    let words = phrase
        .split_whitespace()
        .map(|raw| raw.chars().filter(char::is_ascii_alphanumeric).collect::<String>())
        .filter(|cleaned| !cleaned.is_empty())
        .map(|cleaned| {
            Word::new(&cleaned).map_err(|source| PuzzleError::InvalidWord {
                word: cleaned,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if words.is_empty() {
        return Err(PuzzleError::EmptyPhrase);
    }
    Ok(words)
}

/// Encode `words` with `cipher`, revealing up to `reveal` used codes
///
/// # Errors
/// Returns `PuzzleError::EmptyPhrase` if `words` is empty.
pub fn encode_words<R: Rng + ?Sized>(
    words: &[Word],
    cipher: &Cipher,
    reveal: usize,
    rng: &mut R,
) -> Result<EncodedPuzzle, PuzzleError> {
    if words.is_empty() {
        return Err(PuzzleError::EmptyPhrase);
    }

    let mut used: Vec<Letter> = Vec::new();
    for letter in words.iter().flat_map(Word::letters) {
        if !used.contains(&letter) {
            used.push(letter);
        }
    }

    let givens: BTreeMap<i64, char> = used
        .choose_multiple(rng, reveal.min(used.len()))
        .map(|&letter| (cipher.code_of(letter), letter.to_char()))
        .collect();

    Ok(EncodedPuzzle {
        puzzle: StartingPuzzle {
            words: words.iter().map(|word| cipher.encode(word)).collect(),
            givens,
        },
        plaintext: words.to_vec(),
    })
}

/// Encode a phrase with a random cipher
///
/// # Errors
/// Returns `PuzzleError` if the phrase has no usable words.
///
/// # Examples
/// ```
/// use codeword_solver::puzzle::encode_phrase;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let encoded = encode_phrase("Hello, world!", 2, &mut rng).unwrap();
///
/// assert_eq!(encoded.puzzle.words.len(), 2);
/// assert_eq!(encoded.puzzle.words[0].len(), 5);
/// // The repeated 'l' gets one code
/// assert_eq!(encoded.puzzle.words[0][2], encoded.puzzle.words[0][3]);
/// assert_eq!(encoded.puzzle.givens.len(), 2);
/// ```
pub fn encode_phrase<R: Rng + ?Sized>(
    phrase: &str,
    reveal: usize,
    rng: &mut R,
) -> Result<EncodedPuzzle, PuzzleError> {
    let words = phrase_words(phrase)?;
    let cipher = Cipher::random(rng);
    encode_words(&words, &cipher, reveal, rng)
}

/// Pick `count` random corpus words with lengths in `lengths`
///
/// Returns an empty phrase if the corpus has no words in range.
pub fn random_phrase<R: Rng + ?Sized>(
    corpus: &Corpus,
    count: usize,
    lengths: RangeInclusive<usize>,
    rng: &mut R,
) -> Vec<Word> {
    let available: Vec<usize> = corpus
        .lengths()
        .into_iter()
        .filter(|length| lengths.contains(length))
        .collect();

    (0..count)
        .filter_map(|_| {
            let length = *available.choose(rng)?;
            corpus.lookup(length).choose(rng).cloned()
        })
        .collect()
}
