//! Size sweep comparing exhaustive search against greedy heuristics.
//!
//! For every instance size in the sweep, one instance is generated and
//! solved by [`ExhaustiveSolver`](crate::exhaustive::ExhaustiveSolver)
//! (only up to [`ExperimentConfig::exhaustive_limit`] items) and by
//! [`GreedySolver`](crate::greedy::GreedySolver) once per configured rule.
//! Each solver call is timed with a monotonic clock. The resulting
//! [`SizeRecord`] is handed to a [`Reporter`](crate::report::Reporter) as
//! soon as it is complete.

mod config;
mod runner;
mod types;

pub use config::ExperimentConfig;
pub use runner::ExperimentRunner;
pub use types::{ExperimentError, ExperimentResult, SizeRecord, StrategyRun};
