//! Word corpus for codeword solving
//!
//! Words are grouped by length; the solver only ever asks for all words of a
//! given length. An embedded corpus is compiled into the binary, and larger
//! ones can be loaded or assembled from files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rustc_hash::{FxHashMap, FxHashSet};

/// Anything that can supply candidate words by length
pub trait WordSource {
    /// All words of exactly `length` letters, in corpus order
    fn lookup(&self, length: usize) -> &[Word];
}

/// Length-indexed word collection
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    by_length: FxHashMap<usize, Vec<Word>>,
    seen: FxHashSet<Word>,
}

impl Corpus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from words, dropping duplicates
    ///
    /// # Examples
    /// ```
    /// use codeword_solver::core::Word;
    /// use codeword_solver::corpus::{Corpus, WordSource};
    ///
    /// let corpus = Corpus::from_words(
    ///     ["cat", "dog", "cat", "bird"].iter().filter_map(|w| Word::new(w).ok()),
    /// );
    /// assert_eq!(corpus.len(), 3);
    /// assert_eq!(corpus.lookup(3).len(), 2);
    /// assert!(corpus.lookup(7).is_empty());
    /// ```
    #[must_use]
    pub fn from_words<I: IntoIterator<Item = Word>>(words: I) -> Self {
        let mut corpus = Self::new();
        corpus.extend(words);
        corpus
    }

    /// The corpus compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(loader::words_from_slice(WORDS))
    }

    /// Add a word unless it is already present
    ///
    /// Returns `true` if the word was new.
    pub fn insert(&mut self, word: Word) -> bool {
        if !self.seen.insert(word.clone()) {
            return false;
        }
        self.by_length.entry(word.len()).or_default().push(word);
        true
    }

    /// Total number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Word lengths present, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// `(length, words)` pairs in ascending length order
    pub fn groups(&self) -> impl Iterator<Item = (usize, &[Word])> + '_ {
        self.lengths()
            .into_iter()
            .map(move |length| (length, self.lookup(length)))
    }
}

impl Extend<Word> for Corpus {
    fn extend<I: IntoIterator<Item = Word>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl WordSource for Corpus {
    fn lookup(&self, length: usize) -> &[Word] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }
}
