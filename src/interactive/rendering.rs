//! TUI rendering with ratatui
//!
//! Snapshot browser for a recorded propagation run.

use super::app::{App, MessageStyle};
use crate::core::{CodeKnowledge, SlotState};
use crate::output::formatters::{decode_slot, knowledge_label, resolution_counts};
use crate::solver::{Outcome, Phase};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Candidates listed for the selected slot
const LISTED_CANDIDATES: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Slots
            Constraint::Percentage(40), // Codes and messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let step = app.current();
    let title = match step.phase {
        Phase::Initial => "🔐 CODEWORD SOLVER - Initial state".to_string(),
        phase => format!("🔐 CODEWORD SOLVER - Pass {} ({phase})", step.iteration),
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(55), // Slot list
            Constraint::Percentage(45), // Selected slot candidates
        ])
        .split(area);

    render_slots(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
}

fn render_slots(f: &mut Frame, app: &App, area: Rect) {
    let state = app.state();
    let previous = app.previous().map(|step| &step.state);

    let items: Vec<ListItem> = state
        .slots()
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let before = previous
                .and_then(|prev| prev.slots().get(index))
                .map(SlotState::candidate_count);
            let count = slot.candidate_count();

            let count_style = if slot.is_contradictory() {
                Style::default().fg(Color::Red)
            } else if slot.is_resolved() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Yellow)
            };

            let mut spans = vec![
                Span::raw(format!("{:>3}. ", index + 1)),
                Span::styled(
                    format!("{:<12}", decode_slot(state, index)),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{count:>6}"), count_style),
            ];
            if let Some(before) = before.filter(|&before| before != count) {
                spans.push(Span::styled(
                    format!("  (was {before})"),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            let item = ListItem::new(Line::from(spans));
            if index == app.selected_slot {
                item.style(Style::default().bg(Color::DarkGray))
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Slots ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let state = app.state();
    let title = format!(" Slot {} candidates ", app.selected_slot + 1);

    let content = match state.slots().get(app.selected_slot) {
        Some(slot) if slot.is_contradictory() => vec![Line::from(Span::styled(
            "No candidate word fits this slot",
            Style::default().fg(Color::Red),
        ))],
        Some(slot) => {
            let codes: Vec<String> = slot.codes().iter().map(ToString::to_string).collect();
            let mut lines = vec![Line::from(Span::styled(
                format!("Codes: {}", codes.join(" ")),
                Style::default().fg(Color::Cyan),
            ))];
            let words: Vec<String> = slot
                .candidates()
                .iter()
                .take(LISTED_CANDIDATES)
                .map(|word| word.text().to_uppercase())
                .collect();
            lines.push(Line::from(words.join("  ")));
            if slot.candidate_count() > LISTED_CANDIDATES {
                lines.push(Line::from(Span::styled(
                    format!(
                        "... and {} more",
                        slot.candidate_count() - LISTED_CANDIDATES
                    ),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines
        }
        None => vec![Line::from("Puzzle has no slots")],
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Resolution gauge
            Constraint::Percentage(60), // Codes
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_resolution(f, app, chunks[0]);
    render_codes(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_resolution(f: &mut Frame, app: &App, area: Rect) {
    let (resolved, total) = resolution_counts(app.state());
    let percent = if total == 0 {
        100
    } else {
        (resolved * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Codes Resolved ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!(
            "{resolved}/{total} codes | {} candidates",
            app.state().candidate_count()
        ));
    f.render_widget(gauge, area);
}

fn render_codes(f: &mut Frame, app: &App, area: Rect) {
    let state = app.state();
    let items: Vec<ListItem> = state
        .codes_in_use()
        .into_iter()
        .map(|code| {
            let knowledge = state.alphabet().get(code);
            let style = match knowledge {
                CodeKnowledge::Resolved(_) => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                CodeKnowledge::Candidates(_) => Style::default().fg(Color::White),
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{code:>3} → ")),
                Span::styled(knowledge_label(knowledge), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().title(" Codes ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let position = Paragraph::new(format!("Step {}/{}", app.cursor + 1, app.step_count()))
        .alignment(Alignment::Center);
    f.render_widget(position, chunks[0]);

    let outcome_color = match app.outcome() {
        Outcome::Solved => Color::Green,
        Outcome::Stuck => Color::Yellow,
        Outcome::Contradiction(_) | Outcome::IterationLimitExceeded { .. } => Color::Red,
    };
    let outcome = Paragraph::new(format!("Outcome: {}", app.outcome().label()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(outcome_color));
    f.render_widget(outcome, chunks[1]);

    let help = Paragraph::new("q: Quit | ←/→: Step | ↑/↓: Slot | Home/End")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
