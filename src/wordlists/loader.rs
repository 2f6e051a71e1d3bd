//! Dictionary loading utilities
//!
//! Provides functions to load dictionaries from files or use the embedded constant.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Words are separated by any whitespace and lowercased.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use evil_hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(normalize(content.split_whitespace()))
}

/// Convert an embedded string slice to owned, normalized words
///
/// # Examples
/// ```
/// use evil_hangman::wordlists::loader::words_from_slice;
/// use evil_hangman::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    normalize(slice.iter().copied())
}

/// Count words by character length
///
/// Keys are ascending, so the first entry is the shortest length present.
#[must_use]
pub fn length_histogram<S: AsRef<str>>(words: &[S]) -> BTreeMap<usize, usize> {
    let mut histogram = BTreeMap::new();
    for word in words {
        *histogram.entry(word.as_ref().chars().count()).or_insert(0) += 1;
    }
    histogram
}

fn normalize<'a, I>(words: I) -> Vec<String>
where
    I: Iterator<Item = &'a str>,
{
    words
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_lowercases() {
        let words = words_from_slice(&["Ally", "COOL", "deal"]);
        assert_eq!(words, vec!["ally", "cool", "deal"]);
    }

    #[test]
    fn words_from_slice_skips_blank() {
        let words = words_from_slice(&["ally", "", "   ", "ibex"]);
        assert_eq!(words, vec!["ally", "ibex"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_splits_on_whitespace() {
        let path = std::env::temp_dir().join(format!(
            "evil_hangman_loader_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "ally beta\ncool\n\n  Deal\t else\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["ally", "beta", "cool", "deal", "else"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/nonexistent/evil_hangman/words.txt").is_err());
    }

    #[test]
    fn histogram_counts_lengths() {
        let histogram = length_histogram(&["a", "to", "be", "ally", "café"]);
        assert_eq!(histogram.get(&1), Some(&1));
        assert_eq!(histogram.get(&2), Some(&2));
        assert_eq!(histogram.get(&4), Some(&2));
        assert_eq!(histogram.get(&3), None);
    }

    #[test]
    fn histogram_of_embedded_dictionary() {
        use crate::wordlists::DICTIONARY;

        let histogram = length_histogram(DICTIONARY);
        assert_eq!(histogram.values().sum::<usize>(), DICTIONARY.len());
        assert!(histogram.contains_key(&4));
    }
}
