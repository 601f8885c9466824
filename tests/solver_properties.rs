use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_knapsack::exhaustive::ExhaustiveSolver;
use u_knapsack::greedy::{GreedyRule, GreedySolver};
use u_knapsack::instance::{GeneratorConfig, Instance, InstanceGenerator, Item};

fn arb_instance() -> impl Strategy<Value = Instance> {
    (
        prop::collection::vec((1u32..=20, 1u32..=100), 0..=12),
        0u32..=60,
    )
        .prop_map(|(pairs, capacity)| {
            let items = pairs.into_iter().map(Item::from).collect();
            Instance::new(items, capacity).unwrap()
        })
}

/// Best value over all subsets, computed from bitmasks.
fn bitmask_optimum(instance: &Instance) -> u64 {
    let items = instance.items();
    let mut best = 0;
    for mask in 0u32..(1 << items.len()) {
        let (mut w, mut v) = (0u64, 0u64);
        for (i, item) in items.iter().enumerate() {
            if mask & (1 << i) != 0 {
                w += item.weight() as u64;
                v += item.value() as u64;
            }
        }
        if w <= instance.capacity() as u64 {
            best = best.max(v);
        }
    }
    best
}

proptest! {
    #[test]
    fn exhaustive_is_optimal(instance in arb_instance()) {
        let sol = ExhaustiveSolver::solve(&instance);
        prop_assert_eq!(sol.value(), bitmask_optimum(&instance));
    }

    #[test]
    fn exhaustive_dominates_greedy(instance in arb_instance()) {
        let optimal = ExhaustiveSolver::solve(&instance);
        for rule in GreedyRule::ALL {
            let greedy = GreedySolver::solve(&instance, rule);
            prop_assert!(
                optimal.value() >= greedy.value(),
                "{} beat the optimum: {} > {}", rule, greedy.value(), optimal.value()
            );
        }
    }

    #[test]
    fn solutions_are_feasible_and_consistent(instance in arb_instance()) {
        let mut solutions = vec![ExhaustiveSolver::solve(&instance)];
        solutions.extend(GreedySolver::solve_all(&instance).into_iter().map(|(_, s)| s));

        for sol in &solutions {
            prop_assert!(sol.is_feasible(&instance));
            prop_assert!(sol.weight() <= instance.capacity() as u64);
            let value: u64 = sol.items().iter().map(|it| it.value() as u64).sum();
            prop_assert_eq!(value, sol.value());
        }
    }

    #[test]
    fn solvers_are_idempotent(instance in arb_instance()) {
        prop_assert_eq!(ExhaustiveSolver::solve(&instance), ExhaustiveSolver::solve(&instance));
        for rule in GreedyRule::ALL {
            prop_assert_eq!(
                GreedySolver::solve(&instance, rule),
                GreedySolver::solve(&instance, rule)
            );
        }
    }

    #[test]
    fn exhaustive_indices_are_sorted(instance in arb_instance()) {
        let sol = ExhaustiveSolver::solve(&instance);
        prop_assert!(sol.indices().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn generated_instances_respect_bounds(
        seed in any::<u64>(),
        n in 0usize..40,
        max_weight in 2u32..50,
        max_value in 1u32..200,
    ) {
        let config = GeneratorConfig::default()
            .with_num_items(n)
            .with_max_weight(max_weight)
            .with_max_value(max_value);
        let instance = InstanceGenerator::generate(&config, &mut StdRng::seed_from_u64(seed)).unwrap();

        prop_assert_eq!(instance.len(), n);
        prop_assert!(instance.capacity() >= max_weight / 2 && instance.capacity() <= max_weight);
        for item in instance.items() {
            prop_assert!(item.weight() >= 1 && item.weight() <= max_weight);
            prop_assert!(item.value() >= 1 && item.value() <= max_value);
        }
    }
}

#[test]
fn zero_capacity_selects_nothing() {
    let instance = Instance::new(vec![Item::new(1, 10), Item::new(2, 20)], 0).unwrap();
    assert!(ExhaustiveSolver::solve(&instance).is_empty());
    for (_, sol) in GreedySolver::solve_all(&instance) {
        assert_eq!(sol.value(), 0);
        assert!(sol.is_empty());
    }
}

#[test]
fn empty_instance_selects_nothing() {
    let instance = Instance::new(Vec::new(), 15).unwrap();
    assert_eq!(ExhaustiveSolver::solve(&instance).value(), 0);
    for (_, sol) in GreedySolver::solve_all(&instance) {
        assert!(sol.is_empty());
    }
}
