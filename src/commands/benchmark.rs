//! Benchmark command
//!
//! Plays many games with random letter orders to measure how the keeper holds up.

use super::GameConfig;
use crate::core::HangmanError;
use crate::manager::{GameState, WordSetManager};
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::SliceRandom;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub length: usize,
    pub candidates: usize,
    pub total_games: usize,
    pub keeper_wins: usize,
    pub guesser_wins: usize,
    pub average_misses: f64,
    pub average_letters: f64,
    pub largest_final_set: usize,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Outcome of a single random game
#[derive(Debug, Clone, Copy)]
struct GameOutcome {
    solved: bool,
    misses: usize,
    letters: usize,
    final_candidates: usize,
}

/// Run `games` games of `length`-letter words in parallel
///
/// Each game guesses the dictionary's letters in a freshly shuffled order
/// until the word is revealed or the budget runs out.
///
/// # Errors
///
/// Returns an error if `length` is 0.
pub fn run_benchmark(
    dictionary: &[String],
    length: usize,
    config: &GameConfig,
    games: usize,
) -> Result<BenchmarkResult, HangmanError> {
    let candidates: Vec<&str> = dictionary
        .iter()
        .map(String::as_str)
        .filter(|word| word.chars().count() == length)
        .collect();
    let alphabet: Vec<char> = candidates
        .iter()
        .flat_map(|word| word.chars())
        .collect::<BTreeSet<char>>()
        .into_iter()
        .collect();

    let pb = ProgressBar::new(games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("{length}-letter words"));

    let start = Instant::now();

    let outcomes = (0..games)
        .into_par_iter()
        .map(|_| {
            let outcome = play_random_game(&candidates, &alphabet, length, config);
            pb.inc(1);
            outcome
        })
        .collect::<Result<Vec<GameOutcome>, HangmanError>>()?;

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_games = outcomes.len();
    let guesser_wins = outcomes.iter().filter(|o| o.solved).count();
    let total_misses: usize = outcomes.iter().map(|o| o.misses).sum();
    let total_letters: usize = outcomes.iter().map(|o| o.letters).sum();
    let per_game = |total: usize| {
        if total_games == 0 {
            0.0
        } else {
            total as f64 / total_games as f64
        }
    };

    Ok(BenchmarkResult {
        length,
        candidates: candidates.len(),
        total_games,
        keeper_wins: total_games - guesser_wins,
        guesser_wins,
        average_misses: per_game(total_misses),
        average_letters: per_game(total_letters),
        largest_final_set: outcomes
            .iter()
            .map(|o| o.final_candidates)
            .max()
            .unwrap_or(0),
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

fn play_random_game(
    candidates: &[&str],
    alphabet: &[char],
    length: usize,
    config: &GameConfig,
) -> Result<GameOutcome, HangmanError> {
    let mut manager =
        WordSetManager::with_rule(candidates.iter(), length, config.max_guesses, config.rule)?;

    let mut order = alphabet.to_vec();
    order.shuffle(&mut rand::rng());

    let mut letters = 0;
    for letter in order {
        if manager.state() != GameState::Active || manager.is_solved() {
            break;
        }
        manager.record(letter)?;
        letters += 1;
    }

    Ok(GameOutcome {
        solved: manager.is_solved(),
        misses: config.max_guesses - manager.remaining_guesses(),
        letters,
        final_candidates: manager.words().len(),
    })
}
