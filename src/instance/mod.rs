//! Knapsack problem instances.
//!
//! Holds the data model shared by every solver in this crate:
//!
//! - [`Item`]: an immutable `(weight, value)` pair
//! - [`Instance`]: an ordered item list plus a weight capacity
//! - [`Solution`]: a selection of items together with its total value
//!
//! Instances are normally produced by [`InstanceGenerator`], which draws
//! weights, values, and capacity uniformly from a caller-supplied random
//! source. Passing the same seeded RNG yields the same instance.

mod config;
mod generator;
mod types;

pub use config::GeneratorConfig;
pub use generator::InstanceGenerator;
pub use types::{Instance, Item, Solution};
