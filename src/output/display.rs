//! Display functions for command results

use super::formatters::pluralize;
use crate::commands::{AnalysisResult, BenchmarkResult, ReplayResult, StepOutcome};
use crate::manager::GameState;
use colored::Colorize;

/// Print the result of replaying a letter sequence
pub fn print_replay_result(result: &ReplayResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Replaying {} guesses against {}-letter words",
        result.steps.len(),
        result.length.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let outcome = match &step.outcome {
            StepOutcome::Hit(count) => format!("hit ×{count}").green(),
            StepOutcome::Miss => "miss".red(),
            StepOutcome::Rejected(err) => format!("rejected: {err}").yellow(),
        };

        println!(
            "\nTurn {}: {}  {}  {}",
            i + 1,
            step.letter.to_string().bright_white().bold(),
            step.pattern,
            outcome
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Guesses left: {}", step.remaining_guesses);
        }
    }

    println!();
    match result.state {
        GameState::Stuck => println!("{}", "❌ No candidate words of that length".red().bold()),
        _ if result.solved => println!("{}", "✅ Word fully revealed!".green().bold()),
        GameState::Exhausted => println!(
            "{} (the word was {})",
            "💀 Out of guesses".red().bold(),
            result.sample.as_deref().unwrap_or("?").bright_yellow()
        ),
        GameState::Active => println!(
            "{} {} still possible",
            result.remaining_words,
            pluralize(result.remaining_words, "word", "words")
        ),
    }
}

/// Print how a letter would partition the candidates
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.letter.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Current pattern:  {}", result.current_pattern);
    println!("   Candidates:       {}", result.total_candidates);
    println!("   Partitions:       {}", result.partitions.len());
    println!("   Reveal limit:     fewer than {}", result.threshold);
    println!();

    for partition in &result.partitions {
        let marker = if partition.selected {
            "▶".bright_green().bold()
        } else if partition.admitted {
            " ".normal()
        } else {
            "✗".red()
        };

        let sample = partition.sample.join(", ");
        let more = partition.size.saturating_sub(partition.sample.len());

        println!(
            " {marker} {}  {:>5} {}  {}{}",
            partition.pattern,
            partition.size,
            pluralize(partition.size, "word ", "words"),
            sample.bright_black(),
            if more > 0 {
                format!(" (+{more} more)").bright_black()
            } else {
                "".normal()
            }
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Setup:".bright_cyan().bold());
    println!("   Word length:      {}", result.length);
    println!("   Candidates:       {}", result.candidates);
    println!("   Games played:     {}", result.total_games);

    println!("\n🏆 {}", "Outcome:".bright_cyan().bold());
    let keeper_pct = percent(result.keeper_wins, result.total_games);
    println!(
        "   Keeper wins:      {} ({keeper_pct:.1}%)",
        result.keeper_wins.to_string().red().bold()
    );
    println!(
        "   Guesser wins:     {} ({:.1}%)",
        result.guesser_wins.to_string().green().bold(),
        percent(result.guesser_wins, result.total_games)
    );
    println!(
        "   Average misses:   {}",
        format!("{:.2}", result.average_misses).bright_yellow()
    );
    println!("   Average letters:  {:.2}", result.average_letters);
    println!("   Largest final set: {}", result.largest_final_set);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_handles_zero_total() {
        assert!(percent(0, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn percent_of_total() {
        assert!((percent(1, 4) - 25.0).abs() < f64::EPSILON);
        assert!((percent(4, 4) - 100.0).abs() < f64::EPSILON);
    }
}
