//! Adversarial word set manager

use super::partition::{Partition, group_by_pattern, select_partition};
use super::rule::AdmissionRule;
use crate::core::{GuessedLetters, HangmanError, RevealPattern};
use std::collections::BTreeSet;

/// Where a manager sits in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Candidates remain and at least one guess is left
    Active,
    /// The guess budget is spent
    Exhausted,
    /// No candidate words remain
    Stuck,
}

/// Keeper of the hidden word for a game of hangman
///
/// Never commits to a secret. Holds every word consistent with what has been
/// revealed so far, and on each guess moves to the largest group of words
/// that share a reveal pattern.
///
/// # Examples
/// ```
/// use evil_hangman::manager::WordSetManager;
///
/// let dictionary = ["ally", "beta", "cool", "deal", "else", "flew", "good", "hope", "ibex"];
/// let mut manager = WordSetManager::new(dictionary, 4, 7).unwrap();
///
/// assert_eq!(manager.record('b').unwrap(), 0);
/// assert_eq!(manager.pattern().unwrap(), "- - - -");
/// assert_eq!(manager.remaining_guesses(), 6);
/// assert_eq!(manager.words().len(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct WordSetManager {
    words: BTreeSet<String>,
    guessed: GuessedLetters,
    pattern: RevealPattern,
    remaining: usize,
    length: usize,
    rule: AdmissionRule,
    adopted: bool,
}

impl WordSetManager {
    /// Create a manager using the default admission rule
    ///
    /// Words whose character count differs from `length` are dropped.
    ///
    /// # Errors
    /// Returns `HangmanError::ZeroLength` if `length` is 0.
    pub fn new<I, S>(
        dictionary: I,
        length: usize,
        max_guesses: usize,
    ) -> Result<Self, HangmanError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_rule(dictionary, length, max_guesses, AdmissionRule::default())
    }

    /// Create a manager with an explicit admission rule
    ///
    /// # Errors
    /// Returns `HangmanError::ZeroLength` if `length` is 0.
    pub fn with_rule<I, S>(
        dictionary: I,
        length: usize,
        max_guesses: usize,
        rule: AdmissionRule,
    ) -> Result<Self, HangmanError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if length < 1 {
            return Err(HangmanError::ZeroLength);
        }

        let words = dictionary
            .into_iter()
            .filter(|word| word.as_ref().chars().count() == length)
            .map(|word| word.as_ref().to_string())
            .collect();

        Ok(Self {
            words,
            guessed: GuessedLetters::new(),
            pattern: RevealPattern::hidden(length),
            remaining: max_guesses,
            length,
            rule,
            adopted: false,
        })
    }

    /// Words still consistent with everything revealed
    #[inline]
    #[must_use]
    pub const fn words(&self) -> &BTreeSet<String> {
        &self.words
    }

    #[inline]
    #[must_use]
    pub const fn remaining_guesses(&self) -> usize {
        self.remaining
    }

    /// Snapshot of the guessed letters in sorted order
    #[must_use]
    pub fn guesses(&self) -> BTreeSet<char> {
        self.guessed.iter().collect()
    }

    /// Current pattern as space-separated tokens, `-` for hidden slots
    ///
    /// # Errors
    /// Returns `HangmanError::NoCandidates` if the candidate set is empty.
    pub fn pattern(&self) -> Result<String, HangmanError> {
        if self.words.is_empty() {
            return Err(HangmanError::NoCandidates);
        }
        Ok(self.pattern.to_string())
    }

    /// Current pattern in structured form
    #[inline]
    #[must_use]
    pub const fn reveal(&self) -> &RevealPattern {
        &self.pattern
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub const fn rule(&self) -> AdmissionRule {
        self.rule
    }

    /// Check whether every slot has been revealed
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.words.is_empty() && self.pattern.is_complete()
    }

    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        if self.words.is_empty() {
            GameState::Stuck
        } else if self.remaining == 0 {
            GameState::Exhausted
        } else {
            GameState::Active
        }
    }

    /// Exclusive bound on occurrences a partition may reveal on the next guess
    #[must_use]
    pub fn admission_threshold(&self) -> usize {
        self.rule.threshold(&self.pattern, self.adopted)
    }

    /// Partitions the candidates would split into if `letter` were guessed
    ///
    /// Does not record the guess.
    ///
    /// # Errors
    /// Same as [`record`](Self::record).
    pub fn partitions(&self, letter: char) -> Result<Vec<Partition>, HangmanError> {
        self.check_guess(letter)?;
        Ok(group_by_pattern(&self.words, &self.guessed.with(letter)))
    }

    /// Index of the partition `record(letter)` would keep
    #[must_use]
    pub fn selected_index(&self, letter: char, partitions: &[Partition]) -> Option<usize> {
        select_partition(partitions, letter, self.admission_threshold())
    }

    /// Guess a letter
    ///
    /// Narrows the candidates to the largest admissible partition and returns
    /// how many times `letter` appears in the resulting pattern. A result of 0
    /// costs one guess.
    ///
    /// # Errors
    /// - `HangmanError::NoCandidates` if the candidate set is empty
    /// - `HangmanError::OutOfGuesses` if no guesses remain
    /// - `HangmanError::RepeatedGuess` if `letter` was already guessed
    ///
    /// Nothing changes when an error is returned.
    pub fn record(&mut self, letter: char) -> Result<usize, HangmanError> {
        let mut partitions = self.partitions(letter)?;
        let selected = self.selected_index(letter, &partitions);

        self.guessed.insert(letter);

        // With nothing admitted the candidates and pattern stay as they are
        if let Some(index) = selected {
            let chosen = partitions.swap_remove(index);
            self.words = chosen.words;
            self.pattern = chosen.pattern;
            self.adopted = true;
        }

        let occurrences = self.pattern.count(letter);
        if occurrences == 0 {
            self.remaining -= 1;
        }

        Ok(occurrences)
    }

    fn check_guess(&self, letter: char) -> Result<(), HangmanError> {
        if self.words.is_empty() {
            return Err(HangmanError::NoCandidates);
        }
        if self.remaining < 1 {
            return Err(HangmanError::OutOfGuesses);
        }
        if self.guessed.contains(letter) {
            return Err(HangmanError::RepeatedGuess(letter));
        }
        Ok(())
    }
}
