//! Corpus word representation
//!
//! A Word is an immutable lowercase ASCII string of any non-zero length. The
//! text lives behind an `Arc`, so cloning a word into a new puzzle snapshot
//! never copies its letters.

use super::Letter;
use std::fmt;
use std::sync::Arc;

/// A lowercase candidate word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(Arc<str>);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use codeword_solver::core::Word;
    ///
    /// let word = Word::new("Castle").unwrap();
    /// assert_eq!(word.text(), "castle");
    /// assert_eq!(word.len(), 6);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self(Arc::from(text)))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; empty words are rejected on construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Letter at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.len()`.
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Letter {
        let byte = self.0.as_bytes()[position];
        // Construction guarantees lowercase ASCII
        Letter::from_byte(byte).unwrap_or_else(|| unreachable!("validated word byte {byte}"))
    }

    /// Iterate over the word's letters in order
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.0.bytes().filter_map(Letter::from_byte)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
