//! TUI application state and logic

use crate::core::PuzzleState;
use crate::solver::{History, Outcome, Propagation, Step};
use anyhow::{Result, bail};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state: a cursor over the recorded propagation snapshots
pub struct App {
    steps: Vec<Step>,
    outcome: Outcome,
    iterations: usize,
    pub cursor: usize,
    pub selected_slot: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl App {
    /// Build the browser from a recorded run
    ///
    /// # Errors
    ///
    /// Returns an error if the history holds no snapshots.
    pub fn new(history: History, propagation: &Propagation) -> Result<Self> {
        if history.is_empty() {
            bail!("Propagation recorded no snapshots");
        }

        let mut app = Self {
            steps: history.steps().to_vec(),
            outcome: propagation.outcome,
            iterations: propagation.iterations,
            cursor: 0,
            selected_slot: 0,
            messages: vec![Message {
                text: "←/→ step through passes, ↑/↓ pick a slot".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        };
        app.add_message(
            &format!(
                "Recorded {} snapshots over {} passes",
                app.steps.len(),
                app.iterations
            ),
            MessageStyle::Info,
        );
        Ok(app)
    }

    #[must_use]
    pub fn current(&self) -> &Step {
        &self.steps[self.cursor]
    }

    #[must_use]
    pub fn state(&self) -> &PuzzleState {
        &self.current().state
    }

    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn at_end(&self) -> bool {
        self.cursor + 1 == self.steps.len()
    }

    /// Snapshot before the current one, if any
    #[must_use]
    pub fn previous(&self) -> Option<&Step> {
        self.cursor.checked_sub(1).map(|index| &self.steps[index])
    }

    pub fn next_step(&mut self) {
        if self.at_end() {
            return;
        }
        self.cursor += 1;
        if self.at_end() {
            self.announce_outcome();
        }
    }

    pub fn previous_step(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn first_step(&mut self) {
        self.cursor = 0;
    }

    pub fn last_step(&mut self) {
        if !self.at_end() {
            self.cursor = self.steps.len() - 1;
            self.announce_outcome();
        }
    }

    pub fn select_next_slot(&mut self) {
        let slots = self.state().slots().len();
        if self.selected_slot + 1 < slots {
            self.selected_slot += 1;
        }
    }

    pub fn select_previous_slot(&mut self) {
        self.selected_slot = self.selected_slot.saturating_sub(1);
    }

    fn announce_outcome(&mut self) {
        let style = match self.outcome {
            Outcome::Solved => MessageStyle::Success,
            Outcome::Stuck => MessageStyle::Info,
            Outcome::Contradiction(_) | Outcome::IterationLimitExceeded { .. } => {
                MessageStyle::Error
            }
        };
        let text = format!("Finished: {}", self.outcome);
        self.add_message(&text, style);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Right | KeyCode::Char('l' | ' ') => self.next_step(),
            KeyCode::Left | KeyCode::Char('h') => self.previous_step(),
            KeyCode::Home | KeyCode::Char('g') => self.first_step(),
            KeyCode::End | KeyCode::Char('G') => self.last_step(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next_slot(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous_slot(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StartingPuzzle;
    use crate::corpus::Corpus;
    use crate::corpus::loader::words_from_slice;
    use crate::solver::{Phase, Solver, SolverConfig};

    fn app() -> App {
        let corpus = Corpus::from_words(words_from_slice(&["cat", "car", "bat", "tab", "tub"]));
        let solver = Solver::new(&corpus, SolverConfig::default());
        let puzzle = StartingPuzzle {
            words: vec![vec![1, 2, 3], vec![4, 2, 5]],
            givens: [(1, 'c'), (4, 't')].into_iter().collect(),
        };

        let mut history = History::new();
        let propagation = solver.solve_with(&puzzle, &mut history).unwrap();
        App::new(history, &propagation).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(code, KeyModifiers::NONE);
    }

    #[test]
    fn starts_at_initial_snapshot() {
        let app = app();
        assert_eq!(app.cursor, 0);
        assert_eq!(app.current().phase, Phase::Initial);
        assert!(app.previous().is_none());
        assert_eq!(app.outcome(), Outcome::Solved);
    }

    #[test]
    fn stepping_is_clamped_at_both_ends() {
        let mut app = app();
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, 0);

        press(&mut app, KeyCode::End);
        assert!(app.at_end());
        let last = app.cursor;

        press(&mut app, KeyCode::Right);
        assert_eq!(app.cursor, last);

        press(&mut app, KeyCode::Home);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn reaching_the_end_announces_outcome() {
        let mut app = app();
        while !app.at_end() {
            press(&mut app, KeyCode::Char('l'));
        }
        let last = app.messages.last().unwrap();
        assert!(last.text.contains("solved"));
        assert!(matches!(last.style, MessageStyle::Success));
    }

    #[test]
    fn slot_selection_stays_in_range() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_slot, 0);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_slot, 1);
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }

    #[test]
    fn empty_history_is_rejected() {
        let corpus = Corpus::from_words(words_from_slice(&["cat"]));
        let solver = Solver::new(&corpus, SolverConfig::default());
        let puzzle = StartingPuzzle {
            words: vec![vec![1, 2, 3]],
            givens: Default::default(),
        };
        let propagation = solver.solve(&puzzle).unwrap();
        assert!(App::new(History::new(), &propagation).is_err());
    }
}
