//! Display functions for command results

use super::formatters::{
    create_progress_bar, decode_slot, knowledge_label, outcome_symbol, resolution_bar,
    resolution_counts,
};
use crate::commands::{AssembleResult, BenchmarkResult, SolveResult};
use crate::core::{CodeKnowledge, PuzzleState, Word};
use crate::puzzle::EncodedPuzzle;
use crate::solver::{History, Outcome, Phase};
use colored::Colorize;

/// Print one line per slot: decoded pattern and candidate count
fn print_slots(state: &PuzzleState) {
    for (index, slot) in state.slots().iter().enumerate() {
        let pattern = decode_slot(state, index);
        let detail = match slot.solution() {
            Some(word) => word.text().to_uppercase().green().to_string(),
            None if slot.is_contradictory() => "no candidates".red().to_string(),
            None => format!("{} candidates", slot.candidate_count()),
        };
        println!(
            "  {:>3}. {:<12} {detail}",
            index + 1,
            pattern.bright_white().bold()
        );
    }
}

/// Print what is known about every code in use
fn print_alphabet(state: &PuzzleState) {
    for code in state.codes_in_use() {
        let knowledge = state.alphabet().get(code);
        let label = knowledge_label(knowledge);
        let label = match knowledge {
            CodeKnowledge::Resolved(_) => label.green().bold(),
            CodeKnowledge::Candidates(_) => label.yellow(),
        };
        println!("  {code:>3} → {label}");
    }
}

/// Print the result of solving a puzzle
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let propagation = &result.propagation;
    let snapshot = &propagation.snapshot;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving {} slots using {} codes",
        result.slot_count().to_string().bright_yellow().bold(),
        snapshot.codes_in_use().len().to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n📝 {}", "Slots:".bright_cyan().bold());
    print_slots(snapshot);

    if verbose {
        println!("\n🔤 {}", "Codes:".bright_cyan().bold());
        print_alphabet(snapshot);
    }

    let (resolved, total) = resolution_counts(snapshot);
    println!(
        "\n   Resolved: [{}] {resolved}/{total} codes",
        resolution_bar(snapshot, 30).green()
    );

    println!();
    let summary = format!(
        "{} {} after {} passes",
        outcome_symbol(propagation.outcome),
        capitalize(&propagation.outcome.to_string()),
        propagation.iterations
    );
    let summary = match propagation.outcome {
        Outcome::Solved => summary.green().bold(),
        Outcome::Stuck => summary.yellow().bold(),
        Outcome::Contradiction(_) | Outcome::IterationLimitExceeded { .. } => summary.red().bold(),
    };
    println!("{summary}");
}

/// Print every recorded snapshot in order
pub fn print_trace(history: &History) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PROPAGATION TRACE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for step in history.steps() {
        let heading = match step.phase {
            Phase::Initial => "Initial state".to_string(),
            phase => format!("Pass {}: {phase}", step.iteration),
        };
        let (resolved, total) = resolution_counts(&step.state);
        println!(
            "\n{} {}",
            heading.bright_yellow().bold(),
            format!(
                "({} candidates, {resolved}/{total} codes)",
                step.state.candidate_count()
            )
            .bright_black()
        );
        print_slots(&step.state);
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    println!("   Puzzles tested:   {}", result.total_puzzles);
    println!(
        "   Solved:           {}",
        format!("{} ({:.1}%)", result.solved, result.solve_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Stuck:            {}", result.stuck.to_string().yellow());
    println!(
        "   Contradictions:   {}",
        result.contradictions.to_string().red()
    );
    println!(
        "   Limit reached:    {}",
        result.limit_hits.to_string().red()
    );
    if result.unsound > 0 {
        println!(
            "   {}",
            format!("Wrong solutions:  {}", result.unsound).red().bold()
        );
    }

    println!("\n⏱️  {}", "Performance:".bright_cyan().bold());
    println!("   Average passes:   {:.2}", result.average_iterations());
    println!("   Most passes:      {}", result.max_iterations);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    if result.solved > 0 {
        println!("\n📈 {}", "Passes to solve:".bright_cyan().bold());
        for (&passes, &count) in &result.distribution {
            let pct = (count as f64 / result.solved as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {passes:>3}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}

/// Print a summary of an assembled corpus
pub fn print_assemble_result(result: &AssembleResult) {
    println!(
        "\n✅ Wrote {} words to {}",
        result.total_words.to_string().bright_yellow().bold(),
        result.output.display()
    );
    for &(length, count) in &result.lengths {
        println!("   {length:>3} letters: {count}");
    }
}

/// Print an encoded puzzle as JSON, with the plaintext on stderr
pub fn print_encoded(encoded: &EncodedPuzzle, json: &str) {
    println!("{json}");
    let phrase: Vec<&str> = encoded.plaintext.iter().map(Word::text).collect();
    eprintln!(
        "{} {}",
        "Answer:".bright_black(),
        phrase.join(" ").bright_black()
    );
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("stuck"), "Stuck");
        assert_eq!(capitalize(""), "");
    }
}
