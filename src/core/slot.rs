//! Slot state: one encoded word of the puzzle
//!
//! Both the code sequence and the candidate list sit behind `Arc`s. Narrowing
//! a slot that loses no candidates hands back the same allocation, so a new
//! puzzle snapshot only pays for the slots that actually changed.

use super::{AlphabetState, Code, LetterSet, Word};
use std::sync::Arc;

/// Code sequence plus the candidate words still consistent with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotState {
    codes: Arc<[Code]>,
    candidates: Arc<[Word]>,
}

impl SlotState {
    /// Create a slot from its codes and initial candidates
    ///
    /// Candidates whose length differs from the code sequence are dropped.
    #[must_use]
    pub fn new(codes: Vec<Code>, candidates: impl IntoIterator<Item = Word>) -> Self {
        let length = codes.len();
        Self {
            codes: codes.into(),
            candidates: candidates
                .into_iter()
                .filter(|word| word.len() == length)
                .collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Number of letters in the slot
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Exactly one candidate remains
    #[inline]
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.candidates.len() == 1
    }

    /// No candidate remains
    #[inline]
    #[must_use]
    pub fn is_contradictory(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The single remaining word, once resolved
    #[must_use]
    pub fn solution(&self) -> Option<&Word> {
        match &*self.candidates {
            [word] => Some(word),
            _ => None,
        }
    }

    /// Whether `code` appears anywhere in this slot
    #[must_use]
    pub fn contains(&self, code: Code) -> bool {
        self.codes.contains(&code)
    }

    /// Positions at which `code` appears
    pub fn positions_of(&self, code: Code) -> impl Iterator<Item = usize> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == code)
            .map(|(position, _)| position)
    }

    /// Letters found at `position` across all candidates
    #[must_use]
    pub fn letters_at(&self, position: usize) -> LetterSet {
        self.candidates
            .iter()
            .map(|word| word.letter_at(position))
            .collect()
    }

    /// Whether `word` agrees with the current knowledge of every code
    ///
    /// A code repeated within the slot is checked at each position, which is
    /// enough to keep repeated letters aligned.
    #[must_use]
    pub fn accepts(&self, word: &Word, alphabet: &AlphabetState) -> bool {
        word.len() == self.codes.len()
            && self
                .codes
                .iter()
                .zip(word.letters())
                .all(|(&code, letter)| alphabet.get(code).allows(letter))
    }

    /// Slot with every candidate inconsistent with `alphabet` removed
    ///
    /// Returns a clone sharing the same candidate list when nothing is removed.
    #[must_use]
    pub fn narrowed(&self, alphabet: &AlphabetState) -> Self {
        if self.candidates.iter().all(|word| self.accepts(word, alphabet)) {
            return self.clone();
        }

        Self {
            codes: Arc::clone(&self.codes),
            candidates: self
                .candidates
                .iter()
                .filter(|word| self.accepts(word, alphabet))
                .cloned()
                .collect(),
        }
    }

    /// Whether this slot still shares its candidate list with `other`
    #[must_use]
    pub fn shares_candidates(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.candidates, &other.candidates)
    }
}
