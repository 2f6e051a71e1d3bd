//! Core domain types for hangman
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure and testable.

mod error;
mod letters;
mod pattern;

pub use error::{ErrorKind, HangmanError};
pub use letters::GuessedLetters;
pub use pattern::{RevealPattern, Slot};
