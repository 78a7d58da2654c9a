//! Letter-option narrowing with uniqueness enforcement

use super::{Contradicted, NarrowResult, Narrowed};
use crate::core::{AlphabetState, Code, CodeKnowledge, Letter, LetterSet, PuzzleState};
use crate::solver::outcome::Contradiction;
use log::trace;

/// Letters `code` may take given every slot it appears in
///
/// Intersects, over each occurrence of the code, the letters found at that
/// position among the slot's surviving candidates. A code that appears in no
/// slot keeps `current`.
fn supported_letters(state: &PuzzleState, code: Code, current: LetterSet) -> LetterSet {
    state
        .slots()
        .iter()
        .flat_map(|slot| slot.positions_of(code).map(move |pos| slot.letters_at(pos)))
        .fold(current, LetterSet::intersection)
}

/// Remove each newly resolved letter from every other code, transitively
///
/// A removal that leaves another code with one letter resolves that code
/// too, and its letter is removed in turn until nothing else collapses.
fn enforce_uniqueness(
    alphabet: &mut AlphabetState,
    mut pending: Vec<(Code, Letter)>,
) -> Result<(), Contradiction> {
    while let Some((code, letter)) = pending.pop() {
        for other in Code::all().filter(|&other| other != code) {
            match alphabet.get(other) {
                CodeKnowledge::Resolved(existing) if existing == letter => {
                    return Err(Contradiction::LetterClash {
                        letter,
                        first: code,
                        second: other,
                    });
                }
                CodeKnowledge::Candidates(set) if set.contains(letter) => {
                    let remaining = set.without(letter);
                    if remaining.is_empty() {
                        return Err(Contradiction::EmptyCode { code: other });
                    }
                    if let Some(only) = remaining.only() {
                        trace!("code {other} resolved to '{only}' by elimination");
                        alphabet.set(other, CodeKnowledge::Resolved(only));
                        pending.push((other, only));
                    } else {
                        alphabet.set(other, CodeKnowledge::Candidates(remaining));
                    }
                }
                _ => {}
            }
        }
    }
    Ok(())
}

/// Recompute every unresolved code's letters from the slot candidates
///
/// Codes narrowed to one letter become resolved, and that letter is then
/// withheld from all other codes.
///
/// # Errors
/// Returns `Contradicted` if a code has no letter left or two codes resolve to
/// the same letter.
pub fn narrow_letters(state: &PuzzleState) -> NarrowResult {
    let mut alphabet = *state.alphabet();
    let mut resolved = Vec::new();

    for (code, knowledge) in state.alphabet().iter() {
        let CodeKnowledge::Candidates(current) = knowledge else {
            continue;
        };

        let supported = supported_letters(state, code, current);
        if supported.is_empty() {
            return Err(Contradicted {
                reason: Contradiction::EmptyCode { code },
                state: Box::new(state.with_alphabet(alphabet)),
            });
        }

        if let Some(letter) = supported.only() {
            trace!("code {code} resolved to '{letter}'");
            alphabet.set(code, CodeKnowledge::Resolved(letter));
            resolved.push((code, letter));
        } else {
            alphabet.set(code, CodeKnowledge::Candidates(supported));
        }
    }

    if let Err(reason) = enforce_uniqueness(&mut alphabet, resolved) {
        return Err(Contradicted {
            reason,
            state: Box::new(state.with_alphabet(alphabet)),
        });
    }

    let changed = alphabet != *state.alphabet();
    Ok(Narrowed {
        state: state.with_alphabet(alphabet),
        changed,
    })
}
