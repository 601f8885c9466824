//! Exhaustive subset enumeration.
//!
//! Finds a provably optimal 0/1 knapsack selection by examining every
//! non-empty subset of the items, smallest subsets first. The running time
//! is `O(2^N · N)`; callers are expected to cap `N`.
//!
//! Ties are resolved by enumeration order: a later subset replaces the
//! current best only if its value is strictly greater.

mod runner;

pub use runner::ExhaustiveSolver;
