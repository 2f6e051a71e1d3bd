//! Admission rule for candidate partitions
//!
//! Before the largest partition is chosen, groups that reveal too many copies
//! of the guessed letter are filtered out. The rule decides the cut-off.

use crate::core::RevealPattern;
use clap::ValueEnum;

/// How many occurrences of the guessed letter a partition may reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AdmissionRule {
    /// Occurrences must be below the rendered width of the previous pattern
    ///
    /// A pattern adopted from a partition is measured with one trailing
    /// separator, a freshly constructed one without. For words of two or more
    /// letters this admits every partition; for single-letter words the first
    /// guess cannot reveal its letter.
    #[default]
    #[value(name = "textual")]
    TextualLength,
    /// Occurrences must be below the number of slots
    ///
    /// Rejects only the partition in which the letter fills every position.
    #[value(name = "slots", alias = "slot-count")]
    SlotCount,
}

impl AdmissionRule {
    /// Name accepted on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TextualLength => "textual",
            Self::SlotCount => "slots",
        }
    }

    /// Exclusive upper bound on revealed occurrences
    ///
    /// `adopted` is true once `previous` came from a selected partition.
    #[must_use]
    pub fn threshold(self, previous: &RevealPattern, adopted: bool) -> usize {
        match self {
            Self::TextualLength => previous.rendered_width() + usize::from(adopted),
            Self::SlotCount => previous.len(),
        }
    }
}
