//! Greedy pass execution.
//!
//! # Algorithm
//!
//! 1. Sort item indices by the rule's priority (stable, so equal keys keep
//!    instance order)
//! 2. Walk the sorted list once, taking every item whose weight still fits
//!    in the remaining capacity
//! 3. Skipped items are never revisited

use log::{debug, trace};

use super::types::GreedyRule;
use crate::instance::{Instance, Solution};

/// Greedy knapsack solver.
pub struct GreedySolver;

impl GreedySolver {
    /// Runs a single greedy pass over `instance` ordered by `rule`.
    ///
    /// The returned solution lists items in the order they were taken.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::greedy::{GreedyRule, GreedySolver};
    /// use u_knapsack::instance::{Instance, Item};
    ///
    /// let items = vec![Item::new(5, 10), Item::new(4, 40), Item::new(6, 30), Item::new(3, 50)];
    /// let instance = Instance::new(items, 10).unwrap();
    ///
    /// let solution = GreedySolver::solve(&instance, GreedyRule::Density);
    /// assert_eq!(solution.value(), 90);
    /// assert_eq!(solution.indices(), &[3, 1]);
    /// ```
    pub fn solve(instance: &Instance, rule: GreedyRule) -> Solution {
        let items = instance.items();
        let capacity = instance.capacity() as u64;

        let mut order: Vec<usize> = (0..items.len()).collect();
        order.sort_by(|&a, &b| rule.compare(&items[a], &items[b]));

        let mut total_weight = 0u64;
        let mut selected = Vec::new();
        for i in order {
            let weight = items[i].weight() as u64;
            if total_weight + weight <= capacity {
                total_weight += weight;
                trace!(
                    "greedy[{}] take item {} {} (score {:.3})",
                    rule,
                    i,
                    items[i],
                    rule.score(&items[i])
                );
                selected.push(i);
            }
        }

        let solution = Solution::from_indices(instance, selected);
        debug!(
            "greedy[{}] over {} items: value {} with {} items",
            rule,
            items.len(),
            solution.value(),
            solution.len()
        );
        solution
    }

    /// Runs one greedy pass per rule in [`GreedyRule::ALL`].
    pub fn solve_all(instance: &Instance) -> Vec<(GreedyRule, Solution)> {
        GreedyRule::ALL
            .iter()
            .map(|&rule| (rule, Self::solve(instance, rule)))
            .collect()
    }
}
