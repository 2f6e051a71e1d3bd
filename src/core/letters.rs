//! Guessed letter tracking

use std::collections::BTreeSet;

/// Append-only set of guessed letters, kept in sorted order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    letters: BTreeSet<char>,
}

impl GuessedLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a letter
    ///
    /// Returns `false` if the letter was already present.
    pub fn insert(&mut self, letter: char) -> bool {
        self.letters.insert(letter)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Iterate letters in ascending order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    /// A copy of this set with `letter` added
    ///
    /// Used to look at what a guess would reveal without recording it.
    #[must_use]
    pub fn with(&self, letter: char) -> Self {
        let mut next = self.clone();
        next.insert(letter);
        next
    }

}

impl FromIterator<char> for GuessedLetters {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            letters: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_rejects_duplicates() {
        let mut letters = GuessedLetters::new();
        assert!(letters.insert('q'));
        assert!(!letters.insert('q'));
        assert_eq!(letters.len(), 1);
    }

    #[test]
    fn iterates_sorted() {
        let mut letters = GuessedLetters::new();
        for letter in ['w', 'q', 'e'] {
            letters.insert(letter);
        }
        assert_eq!(letters.iter().collect::<String>(), "eqw");
    }

    #[test]
    fn with_leaves_original_untouched() {
        let mut letters = GuessedLetters::new();
        letters.insert('a');

        let next = letters.with('b');
        assert!(next.contains('b'));
        assert!(!letters.contains('b'));
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn collects_from_chars() {
        let letters: GuessedLetters = "banana".chars().collect();
        assert_eq!(letters.len(), 3);
        assert_eq!(letters.iter().collect::<String>(), "abn");
    }
}
