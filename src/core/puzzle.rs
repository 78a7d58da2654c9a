//! Puzzle definitions and propagation snapshots

use super::{AlphabetState, Code, CodeKnowledge, ConfigError, Letter, SlotState, Word};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A puzzle as supplied by the outside world
///
/// Codes and letters are kept raw here; they are validated when the puzzle is
/// turned into a `PuzzleState`. Codes are read as `i64` so that a number like
/// 300 or -1 reaches validation instead of failing inside the JSON reader.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StartingPuzzle {
    /// Code sequence of every slot, in phrase order
    pub words: Vec<Vec<i64>>,
    /// Pre-revealed code to letter assignments
    #[serde(default)]
    pub givens: BTreeMap<i64, char>,
}

impl StartingPuzzle {
    /// Validated code sequences of every slot
    ///
    /// # Errors
    /// Returns `ConfigError` for an out-of-range code, an empty slot or a
    /// puzzle without slots.
    pub fn slot_codes(&self) -> Result<Vec<Vec<Code>>, ConfigError> {
        if self.words.is_empty() {
            return Err(ConfigError::EmptyPuzzle);
        }
        self.words
            .iter()
            .enumerate()
            .map(|(slot, codes)| {
                if codes.is_empty() {
                    return Err(ConfigError::EmptySlot(slot));
                }
                codes
                    .iter()
                    .map(|&value| Code::try_from(value).map_err(ConfigError::from))
                    .collect()
            })
            .collect()
    }

    /// Validated givens
    ///
    /// # Errors
    /// Returns `ConfigError` for an out-of-range code or a non-letter.
    pub fn given_letters(&self) -> Result<Vec<(Code, Letter)>, ConfigError> {
        self.givens
            .iter()
            .map(|(&code, &letter)| -> Result<(Code, Letter), ConfigError> {
                let code_value = Code::try_from(code)?;
                let letter_value =
                    Letter::from_char(letter).ok_or(ConfigError::InvalidLetter { code, letter })?;
                Ok((code_value, letter_value))
            })
            .collect()
    }
}

/// One immutable snapshot of the solver's knowledge
///
/// Every narrowing step produces a new snapshot; earlier ones stay valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    alphabet: AlphabetState,
    slots: Arc<[SlotState]>,
}

impl PuzzleState {
    #[must_use]
    pub fn new(alphabet: AlphabetState, slots: Vec<SlotState>) -> Self {
        Self {
            alphabet,
            slots: slots.into(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &AlphabetState {
        &self.alphabet
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[SlotState] {
        &self.slots
    }

    /// Snapshot with the slots replaced and the alphabet kept
    #[must_use]
    pub fn with_slots(&self, slots: Vec<SlotState>) -> Self {
        Self::new(self.alphabet, slots)
    }

    /// Snapshot with the alphabet replaced and the slots shared
    #[must_use]
    pub fn with_alphabet(&self, alphabet: AlphabetState) -> Self {
        Self {
            alphabet,
            slots: Arc::clone(&self.slots),
        }
    }

    /// Codes that appear in at least one slot, ascending
    #[must_use]
    pub fn codes_in_use(&self) -> Vec<Code> {
        Code::all()
            .filter(|&code| self.slots.iter().any(|slot| slot.contains(code)))
            .collect()
    }

    /// Every slot holds one word and every code in use is resolved
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.slots.iter().all(SlotState::is_resolved)
            && self
                .codes_in_use()
                .into_iter()
                .all(|code| self.alphabet.get(code).is_resolved())
    }

    /// Index of the first slot with no candidates left
    #[must_use]
    pub fn contradictory_slot(&self) -> Option<usize> {
        self.slots.iter().position(SlotState::is_contradictory)
    }

    /// Candidate words summed over all slots
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.slots.iter().map(SlotState::candidate_count).sum()
    }

    /// The solved words in slot order
    #[must_use]
    pub fn solution(&self) -> Option<Vec<Word>> {
        if !self.is_solved() {
            return None;
        }
        self.slots
            .iter()
            .map(|slot| slot.solution().cloned())
            .collect()
    }

    /// Spell each slot through the alphabet, `None` marking unresolved codes
    #[must_use]
    pub fn decode(&self) -> Vec<Vec<Option<Letter>>> {
        self.slots
            .iter()
            .map(|slot| {
                slot.codes()
                    .iter()
                    .map(|&code| match self.alphabet.get(code) {
                        CodeKnowledge::Resolved(letter) => Some(letter),
                        CodeKnowledge::Candidates(_) => None,
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(n: u8) -> Code {
        Code::new(n).unwrap()
    }

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn starting_puzzle_from_json() {
        let puzzle: StartingPuzzle =
            serde_json::from_str(r#"{"words": [[1, 2, 3], [3, 4]], "givens": {"1": "c"}}"#)
                .unwrap();

        assert_eq!(puzzle.words, vec![vec![1, 2, 3], vec![3, 4]]);
        assert_eq!(puzzle.givens.get(&1), Some(&'c'));
        assert_eq!(puzzle.slot_codes().unwrap()[1], vec![code(3), code(4)]);
        assert_eq!(
            puzzle.given_letters().unwrap(),
            vec![(code(1), letter('c'))]
        );
    }

    #[test]
    fn starting_puzzle_givens_default_empty() {
        let puzzle: StartingPuzzle = serde_json::from_str(r#"{"words": [[1, 2]]}"#).unwrap();
        assert!(puzzle.givens.is_empty());
    }

    #[test]
    fn starting_puzzle_rejects_bad_codes() {
        let puzzle = StartingPuzzle {
            words: vec![vec![1, 27]],
            givens: BTreeMap::new(),
        };
        assert_eq!(puzzle.slot_codes(), Err(ConfigError::CodeOutOfRange(27)));

        let puzzle = StartingPuzzle {
            words: vec![vec![1]],
            givens: BTreeMap::from([(0, 'a')]),
        };
        assert_eq!(puzzle.given_letters(), Err(ConfigError::CodeOutOfRange(0)));
    }

    #[test]
    fn codes_past_a_byte_reach_validation() {
        let puzzle: StartingPuzzle = serde_json::from_str(r#"{"words": [[1, 300]]}"#).unwrap();
        assert_eq!(puzzle.slot_codes(), Err(ConfigError::CodeOutOfRange(300)));

        let puzzle: StartingPuzzle =
            serde_json::from_str(r#"{"words": [[1]], "givens": {"300": "a"}}"#).unwrap();
        assert_eq!(
            puzzle.given_letters(),
            Err(ConfigError::CodeOutOfRange(300))
        );

        let puzzle: StartingPuzzle =
            serde_json::from_str(r#"{"words": [[-1, 2]], "givens": {"-4": "a"}}"#).unwrap();
        assert_eq!(puzzle.slot_codes(), Err(ConfigError::CodeOutOfRange(-1)));
        assert_eq!(puzzle.given_letters(), Err(ConfigError::CodeOutOfRange(-4)));
    }

    #[test]
    fn puzzle_without_slots_is_rejected() {
        let puzzle: StartingPuzzle = serde_json::from_str(r#"{"words": []}"#).unwrap();
        assert_eq!(puzzle.slot_codes(), Err(ConfigError::EmptyPuzzle));
        assert_eq!(ConfigError::EmptyPuzzle.to_string(), "Puzzle has no slots");
    }

    #[test]
    fn starting_puzzle_rejects_bad_letters_and_empty_slots() {
        let puzzle = StartingPuzzle {
            words: vec![vec![1], vec![]],
            givens: BTreeMap::from([(1, '?')]),
        };
        assert_eq!(puzzle.slot_codes(), Err(ConfigError::EmptySlot(1)));
        assert_eq!(
            puzzle.given_letters(),
            Err(ConfigError::InvalidLetter {
                code: 1,
                letter: '?'
            })
        );
    }

    #[test]
    fn solved_requires_resolved_codes() {
        let slots = vec![SlotState::new(vec![code(1), code(2)], words(&["be"]))];
        let unresolved = PuzzleState::new(AlphabetState::unconstrained(), slots.clone());
        assert!(!unresolved.is_solved());

        let givens = [(code(1), letter('b')), (code(2), letter('e'))];
        let alphabet = AlphabetState::from_givens(&givens).unwrap();
        let resolved = PuzzleState::new(alphabet, slots);
        assert!(resolved.is_solved());

        let solution = resolved.solution().unwrap();
        assert_eq!(solution[0].text(), "be");
        assert_eq!(solution.len(), 1);
    }

    #[test]
    fn with_alphabet_shares_slots() {
        let state = PuzzleState::new(
            AlphabetState::unconstrained(),
            vec![SlotState::new(vec![code(1)], words(&["a", "i"]))],
        );
        let next = state.with_alphabet(
            AlphabetState::unconstrained().with(code(1), CodeKnowledge::Resolved(letter('a'))),
        );

        assert!(next.slots()[0].shares_candidates(&state.slots()[0]));
        assert_ne!(next.alphabet(), state.alphabet());
    }

    #[test]
    fn decode_marks_unknown_codes() {
        let alphabet = AlphabetState::from_givens(&[(code(1), letter('c'))]).unwrap();
        let state = PuzzleState::new(
            alphabet,
            vec![SlotState::new(vec![code(1), code(2)], Vec::new())],
        );
        assert_eq!(state.decode(), vec![vec![Some(letter('c')), None]]);
        assert_eq!(state.contradictory_slot(), Some(0));
        assert_eq!(state.codes_in_use(), vec![code(1), code(2)]);
    }
}
