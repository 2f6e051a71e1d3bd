//! Dictionaries for hangman games
//!
//! Provides an embedded dictionary compiled into the binary, plus loading from files.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
