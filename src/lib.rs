//! Evil Hangman
//!
//! A hangman keeper that never commits to a secret word. It holds every word
//! consistent with the revealed letters and, after each guess, keeps the
//! largest group of words that share a reveal pattern.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::manager::WordSetManager;
//!
//! let dictionary = ["ally", "beta", "cool", "deal", "else", "flew", "good", "hope", "ibex"];
//! let mut manager = WordSetManager::new(dictionary, 4, 7).unwrap();
//!
//! let occurrences = manager.record('e').unwrap();
//! println!("{} ({occurrences} found)", manager.pattern().unwrap());
//! ```

// Core domain types
pub mod core;

// Word set manager and partitioning
pub mod manager;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
