//! Partitioning of candidate words by reveal pattern
//!
//! Given the guessed letters, every candidate produces exactly one pattern.
//! Candidates are grouped by that pattern and the largest admissible group
//! becomes the new candidate set.

use crate::core::{GuessedLetters, RevealPattern};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Candidate words sharing one reveal pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub pattern: RevealPattern,
    pub words: BTreeSet<String>,
}

impl Partition {
    /// Number of words in the group
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Occurrences of `letter` this group's pattern reveals
    #[inline]
    #[must_use]
    pub fn occurrences(&self, letter: char) -> usize {
        self.pattern.count(letter)
    }
}

/// Group words by the pattern they show under `guessed`
///
/// Partitions are returned sorted by pattern, so the result is the same
/// regardless of the iteration order of `words`.
///
/// # Examples
/// ```
/// use evil_hangman::core::GuessedLetters;
/// use evil_hangman::manager::group_by_pattern;
///
/// let words = ["cool", "good", "hope", "deal"].map(String::from);
/// let mut guessed = GuessedLetters::new();
/// guessed.insert('o');
///
/// let partitions = group_by_pattern(&words, &guessed);
/// assert_eq!(partitions.len(), 3);
/// assert_eq!(partitions[0].pattern.to_string(), "- - - -");
/// ```
pub fn group_by_pattern<'a, I>(words: I, guessed: &GuessedLetters) -> Vec<Partition>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut groups: FxHashMap<RevealPattern, BTreeSet<String>> = FxHashMap::default();

    for word in words {
        groups
            .entry(RevealPattern::from_word(word, guessed))
            .or_default()
            .insert(word.clone());
    }

    let mut partitions: Vec<Partition> = groups
        .into_iter()
        .map(|(pattern, words)| Partition { pattern, words })
        .collect();
    partitions.sort_unstable_by(|a, b| a.pattern.cmp(&b.pattern));

    partitions
}

/// Pick the partition to keep after guessing `letter`
///
/// Partitions revealing `threshold` or more copies of `letter` are skipped.
/// Of the rest, the first one with the strictly largest size wins, so ties go
/// to the lowest pattern in `partitions` order. Returns `None` when nothing is
/// admitted.
#[must_use]
pub fn select_partition(partitions: &[Partition], letter: char, threshold: usize) -> Option<usize> {
    let mut selected = None;
    let mut best_size = 0;

    for (index, partition) in partitions.iter().enumerate() {
        if partition.occurrences(letter) < threshold && partition.len() > best_size {
            best_size = partition.len();
            selected = Some(index);
        }
    }

    selected
}
