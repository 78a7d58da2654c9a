//! Main codeword solver interface

use super::config::SolverConfig;
use super::narrowing::{narrow_letters, narrow_words};
use super::outcome::{LoopState, Outcome, Propagation};
use super::progress::{NoProgress, Phase, ProgressSink};
use crate::core::{AlphabetState, ConfigError, PuzzleState, SlotState, StartingPuzzle};
use crate::corpus::WordSource;
use log::{debug, info, warn};

/// Main codeword solver
///
/// Pairs a word source with loop settings and turns starting puzzles into
/// propagation results.
pub struct Solver<'a, W: WordSource + ?Sized> {
    corpus: &'a W,
    config: SolverConfig,
}

impl<'a, W: WordSource + ?Sized> Solver<'a, W> {
    /// Create a new solver over the given corpus
    pub const fn new(corpus: &'a W, config: SolverConfig) -> Self {
        Self { corpus, config }
    }

    #[must_use]
    pub const fn config(&self) -> SolverConfig {
        self.config
    }

    /// Build the initial snapshot for a puzzle
    ///
    /// Each slot starts with every corpus word of its length.
    ///
    /// # Errors
    /// Returns `ConfigError` for out-of-range codes, non-letter givens, empty
    /// slots or givens that share a letter.
    pub fn prepare(&self, puzzle: &StartingPuzzle) -> Result<PuzzleState, ConfigError> {
        let slot_codes = puzzle.slot_codes()?;
        let alphabet = AlphabetState::from_givens(&puzzle.given_letters()?)?;

        let slots = slot_codes
            .into_iter()
            .map(|codes| {
                let candidates = self.corpus.lookup(codes.len()).to_vec();
                SlotState::new(codes, candidates)
            })
            .collect();

        Ok(PuzzleState::new(alphabet, slots))
    }

    /// Solve a puzzle, discarding intermediate snapshots
    ///
    /// # Errors
    /// Returns `ConfigError` if the puzzle definition is invalid; every
    /// propagation outcome, including contradictions, is an `Ok`.
    ///
    /// # Examples
    /// ```
    /// use codeword_solver::core::StartingPuzzle;
    /// use codeword_solver::corpus::{Corpus, loader::words_from_slice};
    /// use codeword_solver::solver::{Outcome, Solver, SolverConfig};
    ///
    /// let corpus = Corpus::from_words(words_from_slice(&["cat", "car", "can"]));
    /// let solver = Solver::new(&corpus, SolverConfig::default());
    ///
    /// let puzzle: StartingPuzzle =
    ///     serde_json::from_str(r#"{"words": [[1, 2, 3]], "givens": {"1": "c"}}"#)?;
    /// let result = solver.solve(&puzzle)?;
    ///
    /// assert_eq!(result.outcome, Outcome::Stuck);
    /// assert_eq!(result.snapshot.slots()[0].candidate_count(), 3);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn solve(&self, puzzle: &StartingPuzzle) -> Result<Propagation, ConfigError> {
        self.solve_with(puzzle, NoProgress)
    }

    /// Solve a puzzle, reporting every snapshot to `sink`
    ///
    /// # Errors
    /// Returns `ConfigError` if the puzzle definition is invalid.
    pub fn solve_with<P: ProgressSink>(
        &self,
        puzzle: &StartingPuzzle,
        sink: P,
    ) -> Result<Propagation, ConfigError> {
        let initial = self.prepare(puzzle)?;
        Ok(propagate(initial, self.config, sink))
    }
}

/// Run the propagation loop from `initial` to a terminal state
///
/// Each pass narrows the words of every slot, then the letters of every code.
/// The loop ends as soon as the puzzle is solved, a step empties a slot or a
/// code, a full pass changes nothing, or `config.max_iterations` passes have
/// run.
pub fn propagate<P: ProgressSink>(
    initial: PuzzleState,
    config: SolverConfig,
    mut sink: P,
) -> Propagation {
    let mut state = initial;
    let mut iterations = 0;
    sink.record(iterations, Phase::Initial, &state);

    let outcome = loop {
        if state.is_solved() {
            break Outcome::Solved;
        }

        if iterations >= config.max_iterations {
            warn!(
                "Propagation did not settle within {} passes; \
                 every productive pass should remove a candidate",
                config.max_iterations
            );
            break Outcome::IterationLimitExceeded {
                limit: config.max_iterations,
            };
        }

        iterations += 1;
        if let LoopState::Finished(outcome) = run_pass(&mut state, iterations, &mut sink) {
            break outcome;
        }
    };

    info!("Propagation finished after {iterations} passes: {outcome}");

    let result = Propagation {
        outcome,
        snapshot: state,
        iterations,
    };
    sink.finish(&result);
    result
}

/// One words-then-letters pass over `state`
///
/// `state` always ends up holding the latest snapshot, including the partial
/// one a contradiction leaves behind.
fn run_pass<P: ProgressSink>(
    state: &mut PuzzleState,
    iteration: usize,
    sink: &mut P,
) -> LoopState {
    let words = match narrow_words(state) {
        Ok(narrowed) => narrowed,
        Err(contradicted) => {
            *state = *contradicted.state;
            sink.record(iteration, Phase::Words, state);
            return Outcome::Contradiction(contradicted.reason).into();
        }
    };
    sink.record(iteration, Phase::Words, &words.state);

    let letters = match narrow_letters(&words.state) {
        Ok(narrowed) => narrowed,
        Err(contradicted) => {
            *state = *contradicted.state;
            sink.record(iteration, Phase::Letters, state);
            return Outcome::Contradiction(contradicted.reason).into();
        }
    };
    sink.record(iteration, Phase::Letters, &letters.state);

    *state = letters.state;
    debug!(
        "pass {iteration}: {} candidate words, {} codes resolved",
        state.candidate_count(),
        state.alphabet().resolved_count()
    );

    if words.changed || letters.changed {
        LoopState::Running
    } else {
        Outcome::Stuck.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, CodeKnowledge, Letter, Word};
    use crate::corpus::Corpus;
    use crate::corpus::loader::words_from_slice;
    use crate::solver::outcome::Contradiction;
    use crate::solver::progress::History;
    use std::collections::BTreeMap;

    fn corpus(words: &[&str]) -> Corpus {
        Corpus::from_words(words_from_slice(words))
    }

    fn puzzle(words: &[&[i64]], givens: &[(i64, char)]) -> StartingPuzzle {
        StartingPuzzle {
            words: words.iter().map(|w| w.to_vec()).collect(),
            givens: givens.iter().copied().collect::<BTreeMap<_, _>>(),
        }
    }

    fn code(n: u8) -> Code {
        Code::new(n).unwrap()
    }

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    fn texts(state: &PuzzleState, index: usize) -> Vec<&str> {
        state.slots()[index]
            .candidates()
            .iter()
            .map(Word::text)
            .collect()
    }

    fn solve_recorded(corpus: &Corpus, puzzle: &StartingPuzzle) -> (Propagation, History) {
        let solver = Solver::new(corpus, SolverConfig::default());
        let mut history = History::new();
        let result = solver.solve_with(puzzle, &mut history).unwrap();
        (result, history)
    }

    #[test]
    fn prepare_pulls_candidates_by_length() {
        let corpus = corpus(&["cat", "dog", "tree", "a"]);
        let solver = Solver::new(&corpus, SolverConfig::default());

        let state = solver
            .prepare(&puzzle(&[&[1, 2, 3], &[4, 5, 6, 6], &[7, 8]], &[(1, 'c')]))
            .unwrap();

        assert_eq!(texts(&state, 0), vec!["cat", "dog"]);
        assert_eq!(texts(&state, 1), vec!["tree"]);
        assert!(texts(&state, 2).is_empty());
        assert_eq!(
            state.alphabet().get(code(1)),
            CodeKnowledge::Resolved(letter('c'))
        );
    }

    #[test]
    fn prepare_rejects_inconsistent_givens() {
        let corpus = corpus(&["cat"]);
        let solver = Solver::new(&corpus, SolverConfig::default());

        let err = solver
            .solve(&puzzle(&[&[1, 2, 3]], &[(1, 'c'), (2, 'c')]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateLetter { .. }));

        let err = solver.solve(&puzzle(&[&[1, 2, 30]], &[])).unwrap_err();
        assert_eq!(err, ConfigError::CodeOutOfRange(30));

        let err = solver
            .solve(&puzzle(&[&[1, 2, 3]], &[(300, 'a')]))
            .unwrap_err();
        assert_eq!(err, ConfigError::CodeOutOfRange(300));
    }

    #[test]
    fn puzzle_without_slots_is_not_solved() {
        let corpus = corpus(&["cat"]);
        let solver = Solver::new(&corpus, SolverConfig::default());

        let mut history = History::new();
        let err = solver
            .solve_with(&puzzle(&[], &[]), &mut history)
            .unwrap_err();
        assert_eq!(err, ConfigError::EmptyPuzzle);
        assert!(history.is_empty());
    }

    #[test]
    fn single_slot_gets_stuck_after_resolving_shared_column() {
        let corpus = corpus(&["cat", "car", "can"]);
        let (result, history) = solve_recorded(&corpus, &puzzle(&[&[1, 2, 3]], &[(1, 'c')]));

        assert_eq!(result.outcome, Outcome::Stuck);
        assert_eq!(result.iterations, 2);

        let alphabet = result.snapshot.alphabet();
        assert_eq!(alphabet.get(code(2)), CodeKnowledge::Resolved(letter('a')));
        let CodeKnowledge::Candidates(third) = alphabet.get(code(3)) else {
            panic!("code 3 should stay open");
        };
        assert_eq!(third.to_string(), "{nrt}");
        assert_eq!(texts(&result.snapshot, 0), vec!["cat", "car", "can"]);

        // Code 2 is already resolved after the first letter pass
        let first_letters = &history.steps()[2];
        assert_eq!(first_letters.iteration, 1);
        assert_eq!(first_letters.phase, Phase::Letters);
        assert!(first_letters.state.alphabet().get(code(2)).is_resolved());
        assert_eq!(history.outcome(), Some(Outcome::Stuck));
    }

    #[test]
    fn resolved_code_prunes_other_slot_next_pass() {
        // Slot 1 forces code 2 to 'a'; slot 2 must then drop words without 'a'
        let corpus = corpus(&["cat", "car", "bat", "tab", "tub"]);
        let (result, history) = solve_recorded(
            &corpus,
            &puzzle(&[&[1, 2, 3], &[4, 2, 5]], &[(1, 'c'), (4, 't')]),
        );

        let first_words = &history.steps()[1];
        assert_eq!(texts(&first_words.state, 1), vec!["tab", "tub"]);

        let first_letters = &history.steps()[2];
        assert_eq!(
            first_letters.state.alphabet().get(code(2)),
            CodeKnowledge::Resolved(letter('a'))
        );

        let second_words = &history.steps()[3];
        assert_eq!(second_words.iteration, 2);
        assert_eq!(texts(&second_words.state, 1), vec!["tab"]);

        assert_eq!(result.outcome, Outcome::Solved);
        let solution: Vec<String> = result
            .solution()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(solution, vec!["car", "tab"]);
    }

    const INTERLOCKING: &[&str] = &["sun", "sit", "son", "nut", "tip", "tan", "ant", "its"];

    #[test]
    fn interlocking_slots_solve_without_givens() {
        // sun / nut / ant: every slot shares codes with another
        let corpus = corpus(INTERLOCKING);
        let result = Solver::new(&corpus, SolverConfig::default())
            .solve(&puzzle(&[&[1, 2, 3], &[3, 2, 4], &[5, 3, 4]], &[]))
            .unwrap();

        assert_eq!(result.outcome, Outcome::Solved);
        assert_eq!(result.iterations, 3);
        let solution: Vec<String> = result
            .solution()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(solution, vec!["sun", "nut", "ant"]);
    }

    #[test]
    fn given_ruled_out_by_corpus_is_contradiction() {
        let corpus = corpus(&["cat", "car", "can"]);
        let result = Solver::new(&corpus, SolverConfig::default())
            .solve(&puzzle(&[&[1, 2, 3]], &[(1, 'x')]))
            .unwrap();

        assert_eq!(
            result.outcome,
            Outcome::Contradiction(Contradiction::EmptySlot { slot: 0 })
        );
        assert!(result.snapshot.slots()[0].is_contradictory());
        assert!(result.solution().is_none());
    }

    #[test]
    fn slot_without_words_of_its_length_is_contradiction() {
        let corpus = corpus(&["cat"]);
        let result = Solver::new(&corpus, SolverConfig::default())
            .solve(&puzzle(&[&[1, 2, 3], &[4, 5, 6, 7]], &[]))
            .unwrap();

        assert_eq!(
            result.outcome,
            Outcome::Contradiction(Contradiction::EmptySlot { slot: 1 })
        );
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn iteration_limit_is_reported() {
        let corpus = corpus(&["cat", "car", "can"]);
        let solver = Solver::new(&corpus, SolverConfig::new().with_max_iterations(1));

        let result = solver.solve(&puzzle(&[&[1, 2, 3]], &[(1, 'c')])).unwrap();
        assert_eq!(result.outcome, Outcome::IterationLimitExceeded { limit: 1 });
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn zero_limit_still_reports_solved_state() {
        let corpus = corpus(&["be"]);
        let solver = Solver::new(&corpus, SolverConfig::new().with_max_iterations(0));

        let result = solver
            .solve(&puzzle(&[&[1, 2]], &[(1, 'b'), (2, 'e')]))
            .unwrap();
        assert_eq!(result.outcome, Outcome::Solved);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn single_candidate_slots_are_checked_before_solving() {
        // "ee" in a slot of two distinct codes breaks the bijection
        let corpus = corpus(&["ee"]);
        let result = Solver::new(&corpus, SolverConfig::default())
            .solve(&puzzle(&[&[1, 2]], &[]))
            .unwrap();

        assert!(matches!(
            result.outcome,
            Outcome::Contradiction(Contradiction::LetterClash { .. })
        ));
    }

    #[test]
    fn snapshots_shrink_monotonically_and_stay_consistent() {
        let corpus = corpus(&[
            "sun", "sit", "son", "nut", "ton", "tin", "not", "its", "set", "sat", "ant", "tan",
        ]);
        let (result, history) =
            solve_recorded(&corpus, &puzzle(&[&[1, 2, 3], &[3, 2, 4], &[4, 5, 3]], &[]));
        assert!(!matches!(
            result.outcome,
            Outcome::IterationLimitExceeded { .. }
        ));

        for pair in history.steps().windows(2) {
            let (before, after) = (&pair[0].state, &pair[1].state);
            assert!(after.alphabet().is_consistent());
            for (slot_before, slot_after) in before.slots().iter().zip(after.slots()) {
                assert!(slot_after.candidate_count() <= slot_before.candidate_count());
            }
            let knowledge = before.alphabet().iter().zip(after.alphabet().iter());
            for ((_, k_before), (_, k_after)) in knowledge {
                assert!(k_after.options().len() <= k_before.options().len());
                assert_eq!(k_after.options().difference(k_before.options()).len(), 0);
            }
        }
    }

    #[test]
    fn solved_words_match_decoded_codes_and_corpus() {
        let corpus = corpus(INTERLOCKING);
        let puzzle = puzzle(&[&[1, 2, 3], &[3, 2, 4], &[5, 3, 4]], &[]);
        let result = Solver::new(&corpus, SolverConfig::default())
            .solve(&puzzle)
            .unwrap();
        assert!(result.is_solved());

        for (slot, decoded) in result.snapshot.slots().iter().zip(result.snapshot.decode()) {
            let spelled: String = decoded.into_iter().map(|l| l.unwrap().to_char()).collect();
            let word = slot.solution().unwrap();
            assert_eq!(spelled, word.text());
            assert!(corpus.lookup(word.len()).contains(word));
        }
    }

    #[test]
    fn iterations_bounded_by_initial_options() {
        let corpus = corpus(&["sun", "sit", "son", "nut", "ton", "tin", "not", "its"]);
        let solver = Solver::new(&corpus, SolverConfig::new().with_max_iterations(usize::MAX));
        let puzzle = puzzle(&[&[1, 2, 3], &[3, 2, 4], &[2, 3, 5]], &[]);

        let initial = solver.prepare(&puzzle).unwrap();
        let bound = initial.alphabet().option_count();
        let result = propagate(initial, solver.config(), NoProgress);

        assert!(!matches!(
            result.outcome,
            Outcome::IterationLimitExceeded { .. }
        ));
        assert!(result.iterations <= bound);
    }

    #[test]
    fn recording_does_not_change_outcome() {
        let corpus = corpus(INTERLOCKING);
        let puzzle = puzzle(&[&[1, 2, 3], &[3, 2, 4], &[5, 3, 4]], &[]);
        let solver = Solver::new(&corpus, SolverConfig::default());

        let quiet = solver.solve(&puzzle).unwrap();
        let (recorded, history) = solve_recorded(&corpus, &puzzle);

        assert_eq!(quiet.outcome, recorded.outcome);
        assert_eq!(quiet.iterations, recorded.iterations);
        assert_eq!(quiet.snapshot, recorded.snapshot);
        assert_eq!(
            history.steps().last().map(|s| &s.state),
            Some(&recorded.snapshot)
        );
    }
}
