//! Adversarial word set management
//!
//! The manager keeps every candidate word alive until a guess forces a
//! split, then keeps the largest group.

mod engine;
mod partition;
pub mod rule;

pub use engine::{GameState, WordSetManager};
pub use partition::{Partition, group_by_pattern, select_partition};
pub use rule::AdmissionRule;
