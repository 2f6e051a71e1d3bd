//! Reveal pattern representation
//!
//! A pattern is the per-position disclosure state of the word being kept:
//! each slot is either a revealed letter or still hidden. Patterns are stored
//! as structured slots and only turned into text for display.

use super::GuessedLetters;
use std::cmp::Ordering;
use std::fmt;

/// A single position of a reveal pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Letter not revealed yet
    Hidden,
    /// Letter revealed at this position
    Known(char),
}

impl Slot {
    /// Symbol used to render a hidden slot
    pub const HIDDEN_SYMBOL: char = '-';

    /// The character this slot renders as
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hidden => Self::HIDDEN_SYMBOL,
            Self::Known(letter) => letter,
        }
    }

    /// Check if this slot shows `letter`
    #[inline]
    #[must_use]
    pub fn is(self, letter: char) -> bool {
        self == Self::Known(letter)
    }
}

// Slots order by their rendered symbol so that sorting patterns matches
// sorting their display strings. Hidden wins a tie against a known '-'.
impl Ord for Slot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.symbol()
            .cmp(&other.symbol())
            .then_with(|| match (self, other) {
                (Self::Hidden, Self::Known(_)) => Ordering::Less,
                (Self::Known(_), Self::Hidden) => Ordering::Greater,
                _ => Ordering::Equal,
            })
    }
}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Fixed-length sequence of slots
///
/// Ordering is lexicographic over the slots, which is the order partitions
/// are scanned in when choosing the next candidate set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealPattern(Vec<Slot>);

impl RevealPattern {
    /// A pattern of `length` hidden slots
    #[must_use]
    pub fn hidden(length: usize) -> Self {
        Self(vec![Slot::Hidden; length])
    }

    /// The pattern `word` shows once every letter in `guessed` is applied
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::{GuessedLetters, RevealPattern};
    ///
    /// let mut guessed = GuessedLetters::new();
    /// guessed.insert('e');
    ///
    /// let pattern = RevealPattern::from_word("else", &guessed);
    /// assert_eq!(pattern.to_string(), "e - - e");
    /// ```
    #[must_use]
    pub fn from_word(word: &str, guessed: &GuessedLetters) -> Self {
        Self(
            word.chars()
                .map(|ch| {
                    if guessed.contains(ch) {
                        Slot::Known(ch)
                    } else {
                        Slot::Hidden
                    }
                })
                .collect(),
        )
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.0
    }

    /// Count the slots revealing `letter`
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.0.iter().filter(|slot| slot.is(letter)).count()
    }

    /// Number of slots still hidden
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.0.iter().filter(|&&slot| slot == Slot::Hidden).count()
    }

    /// Check whether every slot has been revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.hidden_count() == 0
    }

    /// Width of the rendered pattern in characters, separators included
    #[must_use]
    pub fn rendered_width(&self) -> usize {
        (2 * self.len()).saturating_sub(1)
    }

    /// Check whether `word` produces exactly this pattern under `guessed`
    #[must_use]
    pub fn matches(&self, word: &str, guessed: &GuessedLetters) -> bool {
        Self::from_word(word, guessed) == *self
    }
}

impl fmt::Display for RevealPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", slot.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guessed(letters: &str) -> GuessedLetters {
        letters.chars().collect()
    }

    #[test]
    fn hidden_pattern_renders_dashes() {
        assert_eq!(RevealPattern::hidden(4).to_string(), "- - - -");
        assert_eq!(RevealPattern::hidden(1).to_string(), "-");
    }

    #[test]
    fn from_word_reveals_only_guessed_letters() {
        let pattern = RevealPattern::from_word("good", &guessed("o"));
        assert_eq!(
            pattern.slots(),
            &[
                Slot::Hidden,
                Slot::Known('o'),
                Slot::Known('o'),
                Slot::Hidden
            ]
        );
        assert_eq!(pattern.to_string(), "- o o -");
    }

    #[test]
    fn count_is_positional() {
        let pattern = RevealPattern::from_word("else", &guessed("ex"));
        assert_eq!(pattern.count('e'), 2);
        assert_eq!(pattern.count('x'), 0);
        assert_eq!(pattern.count('l'), 0); // present in word, not guessed
    }

    #[test]
    fn complete_when_nothing_hidden() {
        assert!(RevealPattern::from_word("ally", &guessed("aly")).is_complete());
        assert!(!RevealPattern::from_word("ally", &guessed("al")).is_complete());
        assert_eq!(RevealPattern::from_word("ally", &guessed("al")).hidden_count(), 1);
    }

    #[test]
    fn rendered_width_includes_separators() {
        assert_eq!(RevealPattern::hidden(4).rendered_width(), 7);
        assert_eq!(RevealPattern::hidden(1).rendered_width(), 1);
        assert_eq!(RevealPattern::hidden(0).rendered_width(), 0);
    }

    #[test]
    fn ordering_matches_rendered_text() {
        let letters = guessed("e");
        let mut patterns = vec![
            RevealPattern::from_word("else", &letters),
            RevealPattern::from_word("flew", &letters),
            RevealPattern::from_word("ally", &letters),
        ];
        patterns.sort();

        let rendered: Vec<String> = patterns.iter().map(ToString::to_string).collect();
        let mut sorted_text = rendered.clone();
        sorted_text.sort();

        assert_eq!(rendered, sorted_text);
        assert_eq!(rendered[0], "- - - -");
    }

    #[test]
    fn hidden_sorts_before_letters_and_digits() {
        assert!(Slot::Hidden < Slot::Known('a'));
        assert!(Slot::Hidden < Slot::Known('0'));
        assert!(Slot::Hidden < Slot::Known('-'));
        assert!(Slot::Known('a') < Slot::Known('b'));
    }

    #[test]
    fn matches_checks_full_sequence() {
        let letters = guessed("o");
        let pattern = RevealPattern::from_word("cool", &letters);
        assert!(pattern.matches("good", &letters));
        assert!(!pattern.matches("hope", &letters));
    }
}
