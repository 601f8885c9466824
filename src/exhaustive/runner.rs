//! Exhaustive search execution.
//!
//! # Algorithm
//!
//! 1. For each subset size `k = 1..=N`:
//!    a. Enumerate all `k`-combinations of item indices in lexicographic order
//!    b. Sum weight and value of the combination
//!    c. If it fits and its value is strictly greater than the best so far,
//!       it becomes the new best
//! 2. Return the best subset, or the empty selection if nothing fits

use itertools::Itertools;
use log::debug;

use crate::instance::{Instance, Solution};

/// Exhaustive knapsack solver.
pub struct ExhaustiveSolver;

impl ExhaustiveSolver {
    /// Returns the maximum-value feasible subset of `instance`.
    ///
    /// When several subsets reach the maximum, the first one enumerated wins
    /// (smaller subsets first, then lexicographic index order).
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::exhaustive::ExhaustiveSolver;
    /// use u_knapsack::instance::{Instance, Item};
    ///
    /// let items = vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5), Item::new(5, 6)];
    /// let instance = Instance::new(items, 5).unwrap();
    ///
    /// let solution = ExhaustiveSolver::solve(&instance);
    /// assert_eq!(solution.value(), 7);
    /// assert_eq!(solution.indices(), &[0, 1]);
    /// ```
    pub fn solve(instance: &Instance) -> Solution {
        let items = instance.items();
        let capacity = instance.capacity() as u64;

        let mut best_value = 0u64;
        let mut best_indices: Vec<usize> = Vec::new();

        for size in 1..=items.len() {
            for combination in (0..items.len()).combinations(size) {
                let mut total_weight = 0u64;
                let mut total_value = 0u64;
                for &i in &combination {
                    total_weight += items[i].weight() as u64;
                    total_value += items[i].value() as u64;
                }

                if total_weight <= capacity && total_value > best_value {
                    best_value = total_value;
                    best_indices = combination;
                }
            }
        }

        debug!(
            "exhaustive search over {} items: best value {} with {} items",
            items.len(),
            best_value,
            best_indices.len()
        );

        Solution::from_indices(instance, best_indices)
    }

    /// Number of non-empty subsets examined for `n` items (`2^n - 1`),
    /// saturating at `u128::MAX`.
    pub fn subset_count(n: usize) -> u128 {
        if n >= 128 {
            u128::MAX
        } else {
            (1u128 << n) - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Item;

    fn instance(pairs: &[(u32, u32)], capacity: u32) -> Instance {
        Instance::new(pairs.iter().map(|&p| Item::from(p)).collect(), capacity).unwrap()
    }

    #[test]
    fn test_exhaustive_small_example() {
        let inst = instance(&[(2, 3), (3, 4), (4, 5), (5, 6)], 5);
        let sol = ExhaustiveSolver::solve(&inst);

        assert_eq!(sol.value(), 7);
        assert_eq!(sol.items(), &[Item::new(2, 3), Item::new(3, 4)]);
        assert!(sol.is_feasible(&inst));
    }

    #[test]
    fn test_exhaustive_finds_90() {
        let inst = instance(&[(5, 10), (4, 40), (6, 30), (3, 50)], 10);
        let sol = ExhaustiveSolver::solve(&inst);

        assert_eq!(sol.value(), 90);
        assert_eq!(sol.indices(), &[1, 3]);
        assert_eq!(sol.weight(), 7);
    }

    #[test]
    fn test_exhaustive_empty_items() {
        let inst = instance(&[], 10);
        let sol = ExhaustiveSolver::solve(&inst);
        assert_eq!(sol.value(), 0);
        assert!(sol.is_empty());
    }

    #[test]
    fn test_exhaustive_zero_capacity() {
        let inst = instance(&[(1, 5), (2, 7)], 0);
        let sol = ExhaustiveSolver::solve(&inst);
        assert_eq!(sol.value(), 0);
        assert!(sol.is_empty());
    }

    #[test]
    fn test_exhaustive_nothing_fits() {
        let inst = instance(&[(8, 5), (9, 7), (12, 1)], 7);
        let sol = ExhaustiveSolver::solve(&inst);
        assert_eq!(sol.value(), 0);
        assert!(sol.is_empty());
    }

    #[test]
    fn test_exhaustive_tie_prefers_first_found() {
        // {0} and {1, 2} both reach value 4 within capacity 3;
        // the singleton is enumerated first and must be kept.
        let inst = instance(&[(3, 4), (1, 2), (2, 2)], 3);
        let sol = ExhaustiveSolver::solve(&inst);
        assert_eq!(sol.value(), 4);
        assert_eq!(sol.indices(), &[0]);
    }

    #[test]
    fn test_exhaustive_tie_between_equal_items() {
        let inst = instance(&[(1, 5), (1, 5)], 1);
        let sol = ExhaustiveSolver::solve(&inst);
        assert_eq!(sol.indices(), &[0]);
    }

    #[test]
    fn test_exhaustive_lexicographic_tie_within_size() {
        // Every pair reaches value 10 at weight 4; the first pair wins.
        let inst = instance(&[(2, 5), (2, 5), (2, 5), (2, 5)], 4);
        let sol = ExhaustiveSolver::solve(&inst);
        assert_eq!(sol.indices(), &[0, 1]);
    }

    #[test]
    fn test_exhaustive_takes_everything_when_it_fits() {
        let inst = instance(&[(1, 1), (2, 2), (3, 3)], 100);
        let sol = ExhaustiveSolver::solve(&inst);
        assert_eq!(sol.value(), 6);
        assert_eq!(sol.indices(), &[0, 1, 2]);
    }

    #[test]
    fn test_exhaustive_is_idempotent() {
        let inst = instance(&[(4, 9), (3, 7), (5, 11), (2, 3), (6, 13)], 10);
        assert_eq!(ExhaustiveSolver::solve(&inst), ExhaustiveSolver::solve(&inst));
    }

    #[test]
    fn test_subset_count() {
        assert_eq!(ExhaustiveSolver::subset_count(0), 0);
        assert_eq!(ExhaustiveSolver::subset_count(1), 1);
        assert_eq!(ExhaustiveSolver::subset_count(10), 1023);
        assert_eq!(ExhaustiveSolver::subset_count(200), u128::MAX);
    }
}
