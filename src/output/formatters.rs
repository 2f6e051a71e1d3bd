//! Formatting utilities for terminal output

use std::collections::BTreeSet;

/// Format guessed letters as a space-separated list
#[must_use]
pub fn format_guesses(guesses: &BTreeSet<char>) -> String {
    if guesses.is_empty() {
        return "(none)".to_string();
    }

    guesses
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pick the singular or plural form for `count`
#[must_use]
pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "█".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of the guess budget has been spent, one cell per guess
#[must_use]
pub fn gallows_bar(remaining: usize, max_guesses: usize) -> String {
    let used = max_guesses.saturating_sub(remaining);
    create_progress_bar(used as f64, max_guesses as f64, max_guesses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_joined_in_order() {
        let guesses: BTreeSet<char> = ['q', 'e', 'w'].into_iter().collect();
        assert_eq!(format_guesses(&guesses), "e q w");
    }

    #[test]
    fn no_guesses() {
        assert_eq!(format_guesses(&BTreeSet::new()), "(none)");
    }

    #[test]
    fn pluralize_forms() {
        assert_eq!(pluralize(1, "word", "words"), "word");
        assert_eq!(pluralize(0, "word", "words"), "words");
        assert_eq!(pluralize(7, "is", "are"), "are");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn gallows_counts_spent_guesses() {
        assert_eq!(gallows_bar(6, 8), "██░░░░░░");
        assert_eq!(gallows_bar(0, 3), "███");
        assert_eq!(gallows_bar(0, 0), "");
    }
}
