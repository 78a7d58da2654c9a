//! Letters, letter sets and cipher codes
//!
//! A `Letter` is one of `a..=z`, stored as its alphabet index. A `LetterSet`
//! packs any subset of the alphabet into a single `u32` bitmask, so
//! intersections and removals during narrowing are single instructions.
//! A `Code` is a cipher symbol in `1..=26`.

use std::fmt;

/// Number of letters in the alphabet (and of codes in a puzzle)
pub const ALPHABET_SIZE: usize = 26;

/// One lowercase ASCII letter, stored as its index (`a` = 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character, ignoring case
    ///
    /// Returns `None` for anything outside `a..=z` / `A..=Z`.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_lowercase() as u8 - b'a'))
        } else {
            None
        }
    }

    /// Create a letter from a lowercase ASCII byte
    #[inline]
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte.is_ascii_lowercase() {
            Some(Self(byte - b'a'))
        } else {
            None
        }
    }

    /// Create a letter from its alphabet index (0-25)
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_SIZE {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Alphabet index (0-25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Lowercase character for this letter
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Iterate over `a..=z` in order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ALPHABET_SIZE as u8).map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A subset of the alphabet
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// No letters
    pub const EMPTY: Self = Self(0);

    /// All 26 letters
    pub const ALL: Self = Self((1 << ALPHABET_SIZE) - 1);

    /// A set holding exactly one letter
    #[inline]
    #[must_use]
    pub const fn single(letter: Letter) -> Self {
        Self(1 << letter.0)
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & (1 << letter.0) != 0
    }

    #[inline]
    #[must_use]
    pub const fn with(self, letter: Letter) -> Self {
        Self(self.0 | (1 << letter.0))
    }

    #[inline]
    #[must_use]
    pub const fn without(self, letter: Letter) -> Self {
        Self(self.0 & !(1 << letter.0))
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The sole member, if the set holds exactly one letter
    #[must_use]
    pub const fn only(self) -> Option<Letter> {
        if self.0.count_ones() == 1 {
            Some(Letter(self.0.trailing_zeros() as u8))
        } else {
            None
        }
    }

    /// Iterate over members in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        Letter::all().filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        write!(f, "}}")
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LetterSet{self}")
    }
}

/// A cipher symbol in `1..=26`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(u8);

/// Error for codes outside `1..=26`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeError(pub i64);

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code must be between 1 and 26, got {}", self.0)
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from its puzzle number
    ///
    /// # Errors
    /// Returns `CodeError` if `value` is not in `1..=26`.
    pub const fn new(value: u8) -> Result<Self, CodeError> {
        if value >= 1 && value as usize <= ALPHABET_SIZE {
            Ok(Self(value))
        } else {
            Err(CodeError(value as i64))
        }
    }

    /// The puzzle number (1-26)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Array index (`value - 1`)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Iterate over codes 1..=26 in order
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=ALPHABET_SIZE as u8).map(Self)
    }
}

impl TryFrom<i64> for Code {
    type Error = CodeError;

    /// Narrow a raw puzzle number, which may be negative or past `u8::MAX`
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(|narrow| Self::new(narrow).ok())
            .ok_or(CodeError(value))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
