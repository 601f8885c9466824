//! Core data types: items, instances, and solutions.

use std::fmt;

/// A knapsack item: a weight and a value.
///
/// Items carry no identity beyond their two numbers. Two equal items in the
/// same instance are still distinct entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    weight: u32,
    value: u32,
}

impl Item {
    /// Creates a new item.
    ///
    /// Positivity is not checked here; [`Instance::new`] rejects items with
    /// a zero weight or value.
    pub const fn new(weight: u32, value: u32) -> Self {
        Self { weight, value }
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Value per unit of weight.
    ///
    /// Requires `weight > 0`, which every validated [`Instance`] guarantees.
    pub fn density(&self) -> f64 {
        self.value as f64 / self.weight as f64
    }
}

impl From<(u32, u32)> for Item {
    fn from((weight, value): (u32, u32)) -> Self {
        Self::new(weight, value)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.weight, self.value)
    }
}

/// A 0/1 knapsack problem: an ordered list of items and a weight capacity.
///
/// Instances are immutable once built. Both solvers take them by shared
/// reference.
///
/// # Examples
///
/// ```
/// use u_knapsack::instance::{Instance, Item};
///
/// let instance = Instance::new(vec![Item::new(2, 3), Item::new(3, 4)], 5).unwrap();
/// assert_eq!(instance.len(), 2);
/// assert_eq!(instance.capacity(), 5);
///
/// assert!(Instance::new(vec![Item::new(0, 3)], 5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Instance {
    items: Vec<Item>,
    capacity: u32,
}

impl Instance {
    /// Builds an instance, rejecting items with zero weight or zero value.
    ///
    /// A zero weight would make the density key undefined, so it is refused
    /// at construction instead of being handled by the solvers.
    pub fn new(items: Vec<Item>, capacity: u32) -> Result<Self, String> {
        for (i, item) in items.iter().enumerate() {
            if item.weight == 0 {
                return Err(format!("item {i} has zero weight"));
            }
            if item.value == 0 {
                return Err(format!("item {i} has zero value"));
            }
        }
        Ok(Self { items, capacity })
    }

    /// Builds an instance whose items are already known to be positive.
    pub(crate) fn from_parts(items: Vec<Item>, capacity: u32) -> Self {
        debug_assert!(items.iter().all(|it| it.weight > 0 && it.value > 0));
        Self { items, capacity }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total weight of all items.
    pub fn total_weight(&self) -> u64 {
        self.items.iter().map(|it| it.weight as u64).sum()
    }
}

/// A selection of items and the value it achieves.
///
/// `items` lists the selected items in the order the solver considered
/// them; `indices` gives their positions in the originating [`Instance`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    value: u64,
    weight: u64,
    indices: Vec<usize>,
    items: Vec<Item>,
}

impl Solution {
    /// The empty selection: value 0, no items.
    pub fn empty() -> Self {
        Self {
            value: 0,
            weight: 0,
            indices: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Builds a solution from item positions, summing weight and value.
    pub(crate) fn from_indices(instance: &Instance, indices: Vec<usize>) -> Self {
        let items: Vec<Item> = indices.iter().map(|&i| instance.items[i]).collect();
        let weight = items.iter().map(|it| it.weight as u64).sum();
        let value = items.iter().map(|it| it.value as u64).sum();
        Self {
            value,
            weight,
            indices,
            items,
        }
    }

    /// Total value of the selected items.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Total weight of the selected items.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Positions of the selected items in the instance.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The selected items, in the order they were considered.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checks that this solution is a valid selection for `instance`.
    ///
    /// The selection must respect the capacity, refer to distinct items of
    /// the instance, and report totals equal to the sums over its items.
    pub fn is_feasible(&self, instance: &Instance) -> bool {
        if self.weight > instance.capacity as u64 || self.indices.len() != self.items.len() {
            return false;
        }

        let mut seen = vec![false; instance.len()];
        for (&i, item) in self.indices.iter().zip(&self.items) {
            match instance.items.get(i) {
                Some(it) if it == item && !seen[i] => seen[i] = true,
                _ => return false,
            }
        }

        let weight: u64 = self.items.iter().map(|it| it.weight as u64).sum();
        let value: u64 = self.items.iter().map(|it| it.value as u64).sum();
        weight == self.weight && value == self.value
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self::empty()
    }
}
