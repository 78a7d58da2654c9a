//! Per-code letter knowledge
//!
//! The alphabet state maps every code 1-26 to either a proven letter or the set
//! of letters it may still stand for. It is a plain 26-entry array indexed by
//! `code - 1`, so a snapshot is a cheap `Copy`.

use super::{ALPHABET_SIZE, Code, CodeError, Letter, LetterSet};
use std::fmt;

/// What is known about one code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKnowledge {
    /// The code is proven to stand for this letter
    Resolved(Letter),
    /// The code may stand for any of these letters (never empty in a valid state)
    Candidates(LetterSet),
}

impl CodeKnowledge {
    /// Whether `letter` is still possible for this code
    #[inline]
    #[must_use]
    pub const fn allows(self, letter: Letter) -> bool {
        match self {
            Self::Resolved(known) => known.index() == letter.index(),
            Self::Candidates(set) => set.contains(letter),
        }
    }

    /// All letters still possible, as a set
    #[must_use]
    pub const fn options(self) -> LetterSet {
        match self {
            Self::Resolved(letter) => LetterSet::single(letter),
            Self::Candidates(set) => set,
        }
    }

    #[must_use]
    pub const fn resolved(self) -> Option<Letter> {
        match self {
            Self::Resolved(letter) => Some(letter),
            Self::Candidates(_) => None,
        }
    }

    #[must_use]
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// Error raised while turning givens into an initial alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A given or slot references a code outside 1-26
    CodeOutOfRange(i64),
    /// A given letter is not in `a..=z`
    InvalidLetter { code: i64, letter: char },
    /// Two distinct codes were given the same letter
    DuplicateLetter {
        letter: Letter,
        first: Code,
        second: Code,
    },
    /// One code was given two different letters
    ConflictingGiven {
        code: Code,
        first: Letter,
        second: Letter,
    },
    /// A slot has no codes
    EmptySlot(usize),
    /// The puzzle has no slots at all
    EmptyPuzzle,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CodeOutOfRange(value) => write!(f, "{}", CodeError(*value)),
            Self::InvalidLetter { code, letter } => {
                write!(f, "Code {code} is given the non-letter {letter:?}")
            }
            Self::DuplicateLetter {
                letter,
                first,
                second,
            } => write!(
                f,
                "Letter '{letter}' is given to both code {first} and code {second}"
            ),
            Self::ConflictingGiven {
                code,
                first,
                second,
            } => write!(f, "Code {code} is given both '{first}' and '{second}'"),
            Self::EmptySlot(slot) => write!(f, "Slot {} has no codes", slot + 1),
            Self::EmptyPuzzle => write!(f, "Puzzle has no slots"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<CodeError> for ConfigError {
    fn from(err: CodeError) -> Self {
        Self::CodeOutOfRange(err.0)
    }
}

/// Knowledge for all 26 codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphabetState {
    codes: [CodeKnowledge; ALPHABET_SIZE],
}

impl AlphabetState {
    /// Every code may be any letter
    #[must_use]
    pub const fn unconstrained() -> Self {
        Self {
            codes: [CodeKnowledge::Candidates(LetterSet::ALL); ALPHABET_SIZE],
        }
    }

    /// Build the starting alphabet from given assignments
    ///
    /// Given codes become `Resolved`; every other code may be any letter that
    /// was not given.
    ///
    /// # Errors
    /// Returns `ConfigError` if two codes share a letter or one code is given
    /// two different letters.
    ///
    /// # Examples
    /// ```
    /// use codeword_solver::core::{AlphabetState, Code, Letter};
    ///
    /// let c = Letter::from_char('c').unwrap();
    /// let alphabet = AlphabetState::from_givens(&[(Code::new(1)?, c)])?;
    ///
    /// assert_eq!(alphabet.get(Code::new(1)?).resolved(), Some(c));
    /// assert!(!alphabet.get(Code::new(2)?).allows(c));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_givens(givens: &[(Code, Letter)]) -> Result<Self, ConfigError> {
        let mut owners: [Option<Code>; ALPHABET_SIZE] = [None; ALPHABET_SIZE];
        let mut state = Self::unconstrained();

        for &(code, letter) in givens {
            if let CodeKnowledge::Resolved(existing) = state.get(code) {
                if existing == letter {
                    continue;
                }
                return Err(ConfigError::ConflictingGiven {
                    code,
                    first: existing,
                    second: letter,
                });
            }

            if let Some(first) = owners[letter.index()] {
                return Err(ConfigError::DuplicateLetter {
                    letter,
                    first,
                    second: code,
                });
            }

            owners[letter.index()] = Some(code);
            state.set(code, CodeKnowledge::Resolved(letter));
        }

        let given: LetterSet = givens.iter().map(|&(_, letter)| letter).collect();
        for knowledge in &mut state.codes {
            if let CodeKnowledge::Candidates(set) = knowledge {
                *set = set.difference(given);
            }
        }

        Ok(state)
    }

    /// Knowledge for one code
    #[inline]
    #[must_use]
    pub const fn get(&self, code: Code) -> CodeKnowledge {
        self.codes[code.index()]
    }

    /// Copy of this state with one code replaced
    #[must_use]
    pub const fn with(mut self, code: Code, knowledge: CodeKnowledge) -> Self {
        self.codes[code.index()] = knowledge;
        self
    }

    pub(crate) const fn set(&mut self, code: Code, knowledge: CodeKnowledge) {
        self.codes[code.index()] = knowledge;
    }

    /// Iterate over `(code, knowledge)` for codes 1-26
    pub fn iter(&self) -> impl Iterator<Item = (Code, CodeKnowledge)> + '_ {
        Code::all().zip(self.codes.iter().copied())
    }

    /// Number of codes with a proven letter
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.codes.iter().filter(|k| k.is_resolved()).count()
    }

    /// Total `(code, letter)` pairs still possible across all codes
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.codes.iter().map(|k| k.options().len()).sum()
    }

    /// Check the bijection invariant
    ///
    /// Resolved letters must be pairwise distinct and absent from every other
    /// code's candidate set.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut used = LetterSet::EMPTY;
        for letter in self.codes.iter().filter_map(|k| k.resolved()) {
            if used.contains(letter) {
                return false;
            }
            used = used.with(letter);
        }

        self.codes.iter().all(|k| match k {
            CodeKnowledge::Resolved(_) => true,
            CodeKnowledge::Candidates(set) => set.intersection(used).is_empty(),
        })
    }

    /// Code proven to stand for `letter`, if any
    #[must_use]
    pub fn code_for(&self, letter: Letter) -> Option<Code> {
        self.iter()
            .find(|&(_, k)| k.resolved() == Some(letter))
            .map(|(code, _)| code)
    }
}

impl Default for AlphabetState {
    fn default() -> Self {
        Self::unconstrained()
    }
}
