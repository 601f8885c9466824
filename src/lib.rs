//! Exhaustive search versus greedy heuristics for the 0/1 knapsack problem.
//!
//! Generates random instances of increasing size, solves each one with an
//! exact subset enumeration and with several greedy orderings, and records
//! solution value and wall-clock time per strategy:
//!
//! - **Instances**: [`instance::InstanceGenerator`] draws items and capacity
//!   uniformly from an explicitly passed random source.
//! - **Exhaustive search**: [`exhaustive::ExhaustiveSolver`] examines all
//!   `2^N - 1` non-empty subsets and returns the first optimum it meets.
//! - **Greedy heuristics**: [`greedy::GreedySolver`] makes one pass in
//!   density, weight, or value order.
//! - **Experiments**: [`experiment::ExperimentRunner`] sweeps instance sizes,
//!   times both strategies, and streams records to a [`report::Reporter`].
//!
//! # Example
//!
//! ```
//! use u_knapsack::exhaustive::ExhaustiveSolver;
//! use u_knapsack::greedy::{GreedyRule, GreedySolver};
//! use u_knapsack::instance::{Instance, Item};
//!
//! let items = vec![Item::new(5, 10), Item::new(4, 40), Item::new(6, 30), Item::new(3, 50)];
//! let instance = Instance::new(items, 10).unwrap();
//!
//! let optimal = ExhaustiveSolver::solve(&instance);
//! let greedy = GreedySolver::solve(&instance, GreedyRule::Density);
//! assert_eq!(optimal.value(), 90);
//! assert!(greedy.value() <= optimal.value());
//! ```
//!
//! The exhaustive solver is exponential on purpose: the point of the sweep is
//! to observe that growth next to the `O(N log N)` heuristics.

pub mod exhaustive;
pub mod experiment;
pub mod greedy;
pub mod instance;
pub mod report;
