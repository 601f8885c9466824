//! Instance generator configuration.

/// Parameters for random instance generation.
///
/// # Examples
///
/// ```
/// use u_knapsack::instance::GeneratorConfig;
///
/// let config = GeneratorConfig::default()
///     .with_num_items(15)
///     .with_max_weight(20)
///     .with_max_value(100);
/// assert_eq!(config.num_items, 15);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Number of items to generate.
    pub num_items: usize,
    /// Upper bound (inclusive) for item weights. Must be at least 2 so the
    /// capacity range `[max_weight / 2, max_weight]` starts above zero.
    pub max_weight: u32,
    /// Upper bound (inclusive) for item values.
    pub max_value: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_items: 10,
            max_weight: 20,
            max_value: 100,
        }
    }
}

impl GeneratorConfig {
    /// Sets the number of items.
    pub fn with_num_items(mut self, n: usize) -> Self {
        self.num_items = n;
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

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_weight < 2 {
            return Err(format!(
                "max_weight must be at least 2, got {}",
                self.max_weight
            ));
        }
        if self.max_value < 1 {
            return Err("max_value must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_config_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.num_items, 10);
        assert_eq!(config.max_weight, 20);
        assert_eq!(config.max_value, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_generator_config_rejects_small_max_weight() {
        assert!(GeneratorConfig::default().with_max_weight(1).validate().is_err());
        assert!(GeneratorConfig::default().with_max_weight(0).validate().is_err());
        assert!(GeneratorConfig::default().with_max_weight(2).validate().is_ok());
    }

    #[test]
    fn test_generator_config_rejects_zero_max_value() {
        assert!(GeneratorConfig::default().with_max_value(0).validate().is_err());
    }

    #[test]
    fn test_generator_config_zero_items_is_valid() {
        assert!(GeneratorConfig::default().with_num_items(0).validate().is_ok());
    }
}
