//! Greedy knapsack heuristics.
//!
//! Sorts the items once by a priority key and takes each item that still
//! fits, in a single pass with no backtracking. Runs in `O(N log N)` and
//! always returns a feasible selection, but gives no optimality guarantee.
//!
//! Three orderings are available through [`GreedyRule`]:
//!
//! - [`GreedyRule::Density`]: highest value-per-weight first
//! - [`GreedyRule::LightestFirst`]: lowest weight first
//! - [`GreedyRule::MostValuable`]: highest value first

mod runner;
mod types;

pub use runner::GreedySolver;
pub use types::GreedyRule;
