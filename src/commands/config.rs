//! Game configuration shared by every command

use crate::manager::{AdmissionRule, WordSetManager};
use crate::wordlists::loader::length_histogram;
use anyhow::{Context, Result, bail};
use rand::prelude::IndexedRandom;

/// Options parsed from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Word length, or `None` to pick one at random
    pub length: Option<usize>,
    pub max_guesses: usize,
    pub rule: AdmissionRule,
}

impl GameConfig {
    /// Guess budget when none is given
    pub const DEFAULT_GUESSES: usize = 10;

    #[must_use]
    pub const fn new(length: Option<usize>, max_guesses: usize, rule: AdmissionRule) -> Self {
        Self {
            length,
            max_guesses,
            rule,
        }
    }

    /// The configured length, failing if none was given
    ///
    /// # Errors
    ///
    /// Returns an error if no length was configured.
    pub fn require_length(&self) -> Result<usize> {
        self.length
            .context("a word length is required for this command (use --length)")
    }

    /// The configured length, or a random length present in `dictionary`
    ///
    /// # Errors
    ///
    /// Returns an error if no length is configured and the dictionary is empty.
    pub fn resolve_length(&self, dictionary: &[String]) -> Result<usize> {
        if let Some(length) = self.length {
            return Ok(length);
        }

        let lengths: Vec<usize> = length_histogram(dictionary).into_keys().collect();
        match lengths.choose(&mut rand::rng()) {
            Some(&length) => Ok(length),
            None => bail!("dictionary has no words to pick a length from"),
        }
    }

    /// Build a fresh manager for one game
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is 0.
    pub fn manager(&self, dictionary: &[String], length: usize) -> Result<WordSetManager> {
        let manager = WordSetManager::with_rule(dictionary, length, self.max_guesses, self.rule)
            .with_context(|| format!("creating game for {length}-letter words"))?;
        Ok(manager)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(None, Self::DEFAULT_GUESSES, AdmissionRule::default())
    }
}
