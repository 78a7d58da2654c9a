//! Formatting utilities for terminal output

use crate::core::{CodeKnowledge, PuzzleState};
use crate::solver::Outcome;

/// Candidate sets larger than this are shown as a count
const MAX_LISTED_OPTIONS: usize = 6;

/// Spell a slot through the alphabet, `?` marking unresolved codes
///
/// # Examples
/// ```
/// use codeword_solver::core::{AlphabetState, Code, Letter, PuzzleState, SlotState, Word};
/// use codeword_solver::output::formatters::decode_slot;
///
/// let alphabet = AlphabetState::from_givens(&[
///     (Code::new(1).unwrap(), Letter::from_char('c').unwrap()),
/// ])
/// .unwrap();
/// let codes = [1, 2, 1].iter().map(|&c| Code::new(c).unwrap()).collect();
/// let state = PuzzleState::new(alphabet, vec![SlotState::new(codes, Vec::<Word>::new())]);
///
/// assert_eq!(decode_slot(&state, 0), "C?C");
/// ```
#[must_use]
pub fn decode_slot(state: &PuzzleState, index: usize) -> String {
    state
        .decode()
        .get(index)
        .map(|letters| {
            letters
                .iter()
                .map(|letter| letter.map_or('?', |l| l.to_char().to_ascii_uppercase()))
                .collect()
        })
        .unwrap_or_default()
}

/// Short description of what is known about a code
#[must_use]
pub fn knowledge_label(knowledge: CodeKnowledge) -> String {
    match knowledge {
        CodeKnowledge::Resolved(letter) => letter.to_char().to_ascii_uppercase().to_string(),
        CodeKnowledge::Candidates(set) if set.len() <= MAX_LISTED_OPTIONS => set.to_string(),
        CodeKnowledge::Candidates(set) => format!("{} options", set.len()),
    }
}

/// Marker shown next to a terminal state
#[must_use]
pub const fn outcome_symbol(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Solved => "✅",
        Outcome::Stuck => "⏸️",
        Outcome::Contradiction(_) => "❌",
        Outcome::IterationLimitExceeded { .. } => "⚠️",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar of resolved codes out of the codes in use
#[must_use]
pub fn resolution_bar(state: &PuzzleState, width: usize) -> String {
    let (resolved, total) = resolution_counts(state);
    create_progress_bar(resolved as f64, total as f64, width)
}

/// `(resolved, in use)` code counts
#[must_use]
pub fn resolution_counts(state: &PuzzleState) -> (usize, usize) {
    let in_use = state.codes_in_use();
    let resolved = in_use
        .iter()
        .filter(|&&code| state.alphabet().get(code).is_resolved())
        .count();
    (resolved, in_use.len())
}
