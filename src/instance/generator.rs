//! Random instance generation.
//!
//! Each item's weight is drawn uniformly from `[1, max_weight]`, then its
//! value from `[1, max_value]`, item by item. The capacity is drawn last,
//! uniformly from `[max_weight / 2, max_weight]`.

use log::debug;
use rand::Rng;

use super::config::GeneratorConfig;
use super::types::{Instance, Item};

/// Random knapsack instance generator.
pub struct InstanceGenerator;

impl InstanceGenerator {
    /// Generates an instance from `config`, consuming entropy from `rng`.
    ///
    /// Returns an error if the configuration is invalid (see
    /// [`GeneratorConfig::validate`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use u_knapsack::instance::{GeneratorConfig, InstanceGenerator};
    ///
    /// let config = GeneratorConfig::default().with_num_items(8);
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let instance = InstanceGenerator::generate(&config, &mut rng).unwrap();
    /// assert_eq!(instance.len(), 8);
    /// assert!(instance.capacity() >= 10 && instance.capacity() <= 20);
    /// ```
    pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<Instance, String> {
        config.validate()?;

        let items: Vec<Item> = (0..config.num_items)
            .map(|_| {
                let weight = rng.random_range(1..=config.max_weight);
                let value = rng.random_range(1..=config.max_value);
                Item::new(weight, value)
            })
            .collect();

        let capacity = rng.random_range(config.max_weight / 2..=config.max_weight);

        debug!(
            "generated instance: {} items, capacity {}",
            items.len(),
            capacity
        );

        Ok(Instance::from_parts(items, capacity))
    }
}
