//! Scripted replay command
//!
//! Feeds a fixed sequence of letters to a manager and records what each one did.

use crate::core::{ErrorKind, HangmanError};
use crate::manager::{GameState, WordSetManager};

/// What a single recorded letter did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The letter was revealed this many times
    Hit(usize),
    /// The letter was not revealed and cost a guess
    Miss,
    /// The manager refused the letter
    Rejected(HangmanError),
}

/// A single letter in the replay
#[derive(Debug, Clone)]
pub struct ReplayStep {
    pub letter: char,
    pub outcome: StepOutcome,
    pub pattern: String,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub remaining_guesses: usize,
}

/// Result of replaying a letter sequence
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub length: usize,
    pub steps: Vec<ReplayStep>,
    pub state: GameState,
    pub solved: bool,
    pub remaining_words: usize,
    /// One surviving word, for revealing at the end
    pub sample: Option<String>,
}

/// Record every letter of `letters` in order
///
/// Whitespace is skipped and letters are lowercased. A repeated letter is
/// reported and skipped; once the manager can no longer accept guesses the
/// replay stops.
#[must_use]
pub fn replay_letters(mut manager: WordSetManager, letters: &str) -> ReplayResult {
    let mut steps = Vec::new();

    for letter in letters
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
    {
        let candidates_before = manager.words().len();
        let outcome = match manager.record(letter) {
            Ok(0) => StepOutcome::Miss,
            Ok(count) => StepOutcome::Hit(count),
            Err(err) => StepOutcome::Rejected(err),
        };

        let stop = matches!(
            &outcome,
            StepOutcome::Rejected(err) if err.kind() == ErrorKind::InvalidState
        );

        steps.push(ReplayStep {
            letter,
            outcome,
            pattern: manager.reveal().to_string(),
            candidates_before,
            candidates_after: manager.words().len(),
            remaining_guesses: manager.remaining_guesses(),
        });

        if stop {
            break;
        }
    }

    ReplayResult {
        length: manager.word_length(),
        steps,
        state: manager.state(),
        solved: manager.is_solved(),
        remaining_words: manager.words().len(),
        sample: manager.words().iter().next().cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: [&str; 9] = [
        "ally", "beta", "cool", "deal", "else", "flew", "good", "hope", "ibex",
    ];

    #[test]
    fn replay_classic_sequence() {
        let manager = WordSetManager::new(CLASSIC, 4, 7).unwrap();
        let result = replay_letters(manager, "boae");

        let outcomes: Vec<&StepOutcome> = result.steps.iter().map(|s| &s.outcome).collect();
        assert_eq!(
            outcomes,
            vec![
                &StepOutcome::Miss,
                &StepOutcome::Miss,
                &StepOutcome::Miss,
                &StepOutcome::Hit(1)
            ]
        );

        let last = result.steps.last().unwrap();
        assert_eq!(last.pattern, "- - e -");
        assert_eq!(last.candidates_before, 2);
        assert_eq!(last.candidates_after, 1);
        assert_eq!(last.remaining_guesses, 4);
        assert_eq!(result.sample.as_deref(), Some("flew"));
        assert_eq!(result.state, GameState::Active);
    }

    #[test]
    fn replay_skips_whitespace_and_lowercases() {
        let manager = WordSetManager::new(CLASSIC, 4, 7).unwrap();
        let result = replay_letters(manager, " B o ");

        let letters: String = result.steps.iter().map(|s| s.letter).collect();
        assert_eq!(letters, "bo");
    }

    #[test]
    fn replay_reports_repeats_and_continues() {
        let manager = WordSetManager::new(["000000"], 6, 2).unwrap();
        let result = replay_letters(manager, "qqw");

        assert_eq!(result.steps.len(), 3);
        assert_eq!(
            result.steps[1].outcome,
            StepOutcome::Rejected(HangmanError::RepeatedGuess('q'))
        );
        assert_eq!(result.steps[2].outcome, StepOutcome::Miss);
        assert_eq!(result.state, GameState::Exhausted);
    }

    #[test]
    fn replay_stops_when_out_of_guesses() {
        let manager = WordSetManager::new(["000000"], 6, 1).unwrap();
        let result = replay_letters(manager, "abc");

        assert_eq!(result.steps.len(), 2);
        assert_eq!(
            result.steps[1].outcome,
            StepOutcome::Rejected(HangmanError::OutOfGuesses)
        );
        assert_eq!(result.sample.as_deref(), Some("000000"));
    }

    #[test]
    fn replay_to_solution() {
        let manager = WordSetManager::new(["ally"], 4, 3).unwrap();
        let result = replay_letters(manager, "aly");

        assert!(result.solved);
        assert_eq!(result.steps.last().unwrap().pattern, "a l l y");
    }

    #[test]
    fn replay_on_empty_dictionary_stops_immediately() {
        let empty: [&str; 0] = [];
        let manager = WordSetManager::new(empty, 4, 3).unwrap();
        let result = replay_letters(manager, "abc");

        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.state, GameState::Stuck);
        assert_eq!(result.sample, None);
    }
}
