//! Error type for word set operations

use std::fmt;

/// Broad classification of a [`HangmanError`]
///
/// Callers that only care whether they passed a bad value or called at the
/// wrong time can match on this instead of the individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A parameter was malformed (zero length, repeated letter)
    InvalidArgument,
    /// The manager cannot perform the operation in its current state
    InvalidState,
}

/// Error type for manager construction, queries and guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HangmanError {
    /// Word length must be at least 1
    ZeroLength,
    /// The letter has already been recorded
    RepeatedGuess(char),
    /// No candidate words remain
    NoCandidates,
    /// The guess budget is spent
    OutOfGuesses,
}

impl HangmanError {
    /// Classify this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroLength | Self::RepeatedGuess(_) => ErrorKind::InvalidArgument,
            Self::NoCandidates | Self::OutOfGuesses => ErrorKind::InvalidState,
        }
    }
}

impl fmt::Display for HangmanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "Word length must be at least 1"),
            Self::RepeatedGuess(letter) => write!(f, "Letter '{letter}' was already guessed"),
            Self::NoCandidates => write!(f, "No candidate words remain"),
            Self::OutOfGuesses => write!(f, "No guesses remain"),
        }
    }
}

impl std::error::Error for HangmanError {}
