//! Command implementations

pub mod analyze;
pub mod benchmark;
mod config;
pub mod play;
pub mod replay;

pub use analyze::{AnalysisResult, PartitionSummary, analyze_letter, apply_prefix};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use config::GameConfig;
pub use play::{SessionStats, play_session, run_play};
pub use replay::{ReplayResult, ReplayStep, StepOutcome, replay_letters};
