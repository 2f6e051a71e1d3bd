//! Partition analysis command
//!
//! Shows how a letter would split the current candidates, without guessing it.

use crate::core::HangmanError;
use crate::manager::WordSetManager;

/// How many words of each partition to show
const SAMPLE_SIZE: usize = 5;

/// One group of candidates sharing a pattern
pub struct PartitionSummary {
    pub pattern: String,
    pub size: usize,
    pub occurrences: usize,
    pub admitted: bool,
    pub selected: bool,
    pub sample: Vec<String>,
}

/// Result of analyzing a letter
pub struct AnalysisResult {
    pub letter: char,
    pub current_pattern: String,
    pub total_candidates: usize,
    pub threshold: usize,
    pub partitions: Vec<PartitionSummary>,
}

/// Analyze how `letter` would partition the manager's candidates
///
/// # Errors
///
/// Returns the error `record(letter)` would return.
pub fn analyze_letter(
    manager: &WordSetManager,
    letter: char,
) -> Result<AnalysisResult, HangmanError> {
    let partitions = manager.partitions(letter)?;
    let selected = manager.selected_index(letter, &partitions);
    let threshold = manager.admission_threshold();

    let summaries = partitions
        .iter()
        .enumerate()
        .map(|(index, partition)| {
            let occurrences = partition.occurrences(letter);
            PartitionSummary {
                pattern: partition.pattern.to_string(),
                size: partition.len(),
                occurrences,
                admitted: occurrences < threshold,
                selected: selected == Some(index),
                sample: partition.words.iter().take(SAMPLE_SIZE).cloned().collect(),
            }
        })
        .collect();

    Ok(AnalysisResult {
        letter,
        current_pattern: manager.reveal().to_string(),
        total_candidates: manager.words().len(),
        threshold,
        partitions: summaries,
    })
}

/// Record each letter of `letters` before analyzing
///
/// # Errors
///
/// Returns the first error any letter produces.
pub fn apply_prefix(manager: &mut WordSetManager, letters: &str) -> Result<(), HangmanError> {
    for letter in letters
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
    {
        manager.record(letter)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::AdmissionRule;

    const CLASSIC: [&str; 9] = [
        "ally", "beta", "cool", "deal", "else", "flew", "good", "hope", "ibex",
    ];

    #[test]
    fn analyze_first_letter() {
        let manager = WordSetManager::new(CLASSIC, 4, 7).unwrap();
        let result = analyze_letter(&manager, 'b').unwrap();

        assert_eq!(result.total_candidates, 9);
        assert_eq!(result.current_pattern, "- - - -");
        assert_eq!(result.threshold, 7);

        let patterns: Vec<&str> = result.partitions.iter().map(|p| p.pattern.as_str()).collect();
        assert_eq!(patterns, vec!["- - - -", "- b - -", "b - - -"]);

        let selected: Vec<&PartitionSummary> =
            result.partitions.iter().filter(|p| p.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].size, 7);
        assert_eq!(selected[0].sample.len(), SAMPLE_SIZE);
    }

    #[test]
    fn analyze_does_not_mutate() {
        let manager = WordSetManager::new(CLASSIC, 4, 7).unwrap();
        analyze_letter(&manager, 'e').unwrap();

        assert!(manager.guesses().is_empty());
        assert_eq!(manager.words().len(), 9);
    }

    #[test]
    fn analyze_after_prefix() {
        let mut manager = WordSetManager::new(CLASSIC, 4, 7).unwrap();
        apply_prefix(&mut manager, "boa").unwrap();

        let result = analyze_letter(&manager, 'e').unwrap();
        assert_eq!(result.total_candidates, 2);
        assert_eq!(result.partitions.len(), 2);
        assert!(result.partitions[0].selected);
        assert_eq!(result.partitions[0].sample, vec!["flew"]);
    }

    #[test]
    fn analyze_marks_rejected_partitions() {
        let manager = WordSetManager::with_rule(["aa"], 2, 3, AdmissionRule::SlotCount).unwrap();
        let result = analyze_letter(&manager, 'a').unwrap();

        assert_eq!(result.partitions.len(), 1);
        assert!(!result.partitions[0].admitted);
        assert!(!result.partitions[0].selected);
    }

    #[test]
    fn prefix_stops_on_repeat() {
        let mut manager = WordSetManager::new(CLASSIC, 4, 7).unwrap();
        assert_eq!(
            apply_prefix(&mut manager, "bb").unwrap_err(),
            HangmanError::RepeatedGuess('b')
        );
    }

    #[test]
    fn analyze_repeated_letter_errors() {
        let mut manager = WordSetManager::new(CLASSIC, 4, 7).unwrap();
        manager.record('o').unwrap();
        assert!(analyze_letter(&manager, 'o').is_err());
    }
}
