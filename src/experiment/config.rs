//! Experiment configuration.

use crate::greedy::GreedyRule;
use crate::instance::GeneratorConfig;

/// Parameters of a size sweep.
///
/// The default sweep runs sizes `5, 10, ..., 45` with weights up to 20 and
/// values up to 100, and stops running the exhaustive solver above 25 items.
///
/// # Examples
///
/// ```
/// use u_knapsack::experiment::ExperimentConfig;
/// use u_knapsack::greedy::GreedyRule;
///
/// let config = ExperimentConfig::default()
///     .with_sizes(4, 12, 4)
///     .with_exhaustive_limit(10)
///     .with_rules(vec![GreedyRule::Density])
///     .with_seed(1);
/// assert_eq!(config.sizes().collect::<Vec<_>>(), vec![4, 8, 12]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ExperimentConfig {
    /// Smallest instance size.
    pub min_size: usize,
    /// Largest instance size (inclusive).
    pub max_size: usize,
    /// Increment between consecutive sizes.
    pub size_step: usize,
    /// Upper bound for item weights. Must be at least 2.
    pub max_weight: u32,
    /// Upper bound for item values.
    pub max_value: u32,
    /// Largest size the exhaustive solver is run on.
    ///
    /// Exhaustive search examines `2^N - 1` subsets, so this bound is what
    /// keeps a sweep tractable.
    pub exhaustive_limit: usize,
    /// Greedy rules to run on every instance, in reporting order.
    pub rules: Vec<GreedyRule>,
    /// Random seed (None for OS entropy).
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            min_size: 5,
            max_size: 45,
            size_step: 5,
            max_weight: 20,
            max_value: 100,
            exhaustive_limit: 25,
            rules: GreedyRule::ALL.to_vec(),
            seed: None,
        }
    }
}

impl ExperimentConfig {
    /// Sets the sweep range and step.
    pub fn with_sizes(mut self, min: usize, max: usize, step: usize) -> Self {
        self.min_size = min;
        self.max_size = max;
        self.size_step = step;
        self
    }

    /// Sets the maximum item weight.
    pub fn with_max_weight(mut self, w: u32) -> Self {
        self.max_weight = w;
        self
    }

    /// Sets the maximum item value.
    pub fn with_max_value(mut self, v: u32) -> Self {
        self.max_value = v;
        self
    }

    /// Sets the largest size the exhaustive solver runs on.
    pub fn with_exhaustive_limit(mut self, n: usize) -> Self {
        self.exhaustive_limit = n;
        self
    }

    /// Sets the greedy rules to run.
    pub fn with_rules(mut self, rules: Vec<GreedyRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Instance sizes of the sweep, in increasing order.
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        (self.min_size..=self.max_size).step_by(self.size_step.max(1))
    }

    /// Generator parameters for an instance of `size` items.
    pub fn generator_config(&self, size: usize) -> GeneratorConfig {
        GeneratorConfig::default()
            .with_num_items(size)
            .with_max_weight(self.max_weight)
            .with_max_value(self.max_value)
    }

    /// Whether the exhaustive solver runs for `size` items.
    pub fn runs_exhaustive(&self, size: usize) -> bool {
        size <= self.exhaustive_limit
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.size_step == 0 {
            return Err("size_step must be at least 1".into());
        }
        if self.min_size > self.max_size {
            return Err(format!(
                "min_size ({}) must not exceed max_size ({})",
                self.min_size, self.max_size
            ));
        }
        if self.rules.is_empty() {
            return Err("at least one greedy rule is required".into());
        }
        self.generator_config(self.min_size).validate()
    }
}
