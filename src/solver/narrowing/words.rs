//! Word-option narrowing

use super::{Contradicted, NarrowResult, Narrowed};
use crate::core::{PuzzleState, SlotState};
use crate::solver::outcome::Contradiction;

/// Drop every slot candidate that disagrees with the alphabet
///
/// All slots are narrowed in the same pass. A slot left with no candidates is
/// a contradiction.
///
/// # Errors
/// Returns `Contradicted` with the narrowed snapshot if any slot is emptied.
pub fn narrow_words(state: &PuzzleState) -> NarrowResult {
    let alphabet = state.alphabet();
    let mut changed = false;

    let slots: Vec<SlotState> = state
        .slots()
        .iter()
        .map(|slot| {
            let narrowed = slot.narrowed(alphabet);
            changed |= narrowed.candidate_count() != slot.candidate_count();
            narrowed
        })
        .collect();

    let next = state.with_slots(slots);

    if let Some(slot) = next.contradictory_slot() {
        return Err(Contradicted {
            reason: Contradiction::EmptySlot { slot },
            state: Box::new(next),
        });
    }

    Ok(Narrowed {
        state: next,
        changed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AlphabetState, Code, Letter, Word};

    fn slot(codes: &[u8], words: &[&str]) -> SlotState {
        SlotState::new(
            codes.iter().map(|&c| Code::new(c).unwrap()).collect(),
            words.iter().map(|w| Word::new(w).unwrap()),
        )
    }

    fn given(pairs: &[(u8, char)]) -> AlphabetState {
        let givens: Vec<(Code, Letter)> = pairs
            .iter()
            .map(|&(c, l)| (Code::new(c).unwrap(), Letter::from_char(l).unwrap()))
            .collect();
        AlphabetState::from_givens(&givens).unwrap()
    }

    fn texts(state: &PuzzleState, index: usize) -> Vec<&str> {
        state.slots()[index]
            .candidates()
            .iter()
            .map(Word::text)
            .collect()
    }

    #[test]
    fn narrows_every_slot_in_one_pass() {
        let state = PuzzleState::new(
            given(&[(1, 'c'), (4, 'd')]),
            vec![
                slot(&[1, 2, 3], &["cat", "bat", "cot"]),
                slot(&[4, 5, 6], &["dog", "log", "dig"]),
            ],
        );

        let narrowed = narrow_words(&state).unwrap();
        assert!(narrowed.changed);
        assert_eq!(texts(&narrowed.state, 0), vec!["cat", "cot"]);
        assert_eq!(texts(&narrowed.state, 1), vec!["dog", "dig"]);
    }

    #[test]
    fn unchanged_pass_reports_no_change() {
        let state = PuzzleState::new(
            given(&[(1, 'c')]),
            vec![slot(&[1, 2, 3], &["cat", "car", "can"])],
        );

        let narrowed = narrow_words(&state).unwrap();
        assert!(!narrowed.changed);
        assert_eq!(narrowed.state, state);
        assert!(narrowed.state.slots()[0].shares_candidates(&state.slots()[0]));
    }

    #[test]
    fn emptied_slot_is_contradiction() {
        let state = PuzzleState::new(
            given(&[(1, 'z')]),
            vec![
                slot(&[2, 3], &["at", "it"]),
                slot(&[1, 2, 3], &["cat", "car"]),
            ],
        );

        let err = narrow_words(&state).unwrap_err();
        assert_eq!(err.reason, Contradiction::EmptySlot { slot: 1 });
        assert!(err.state.slots()[1].is_contradictory());
        assert_eq!(err.state.slots()[0].candidate_count(), 2);
    }

    #[test]
    fn given_letters_are_excluded_from_other_codes() {
        // Code 1 is 'a', so code 2 may not be 'a'
        let state = PuzzleState::new(given(&[(1, 'a')]), vec![slot(&[2, 3], &["at", "it"])]);

        let narrowed = narrow_words(&state).unwrap();
        assert_eq!(texts(&narrowed.state, 0), vec!["it"]);
    }

    #[test]
    fn input_snapshot_is_untouched() {
        let state = PuzzleState::new(given(&[(1, 'c')]), vec![slot(&[1, 2, 3], &["cat", "bat"])]);
        let before = state.clone();

        let _ = narrow_words(&state).unwrap();
        assert_eq!(state, before);
    }
}
