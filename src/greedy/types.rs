//! Greedy ordering rules.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::instance::Item;

/// The key a greedy pass sorts items by.
///
/// Scores follow the minimization convention: a **lower** score means a
/// **higher** priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum GreedyRule {
    /// Value per unit weight, descending.
    Density,
    /// Weight, ascending.
    LightestFirst,
    /// Value, descending.
    MostValuable,
}

impl GreedyRule {
    /// All rules, in reporting order.
    pub const ALL: [GreedyRule; 3] = [
        GreedyRule::Density,
        GreedyRule::LightestFirst,
        GreedyRule::MostValuable,
    ];

    /// Short name used in logs and exports.
    pub fn name(&self) -> &'static str {
        match self {
            GreedyRule::Density => "density",
            GreedyRule::LightestFirst => "lightest",
            GreedyRule::MostValuable => "valuable",
        }
    }

    /// Priority score of `item` under this rule. Lower is taken first.
    ///
    /// This is the value [`compare`](Self::compare) orders by; `compare`
    /// evaluates it exactly on integers, while `score` is the readable form
    /// logged for each item a greedy pass takes.
    pub fn score(&self, item: &Item) -> f64 {
        match self {
            GreedyRule::Density => -item.density(),
            GreedyRule::LightestFirst => item.weight() as f64,
            GreedyRule::MostValuable => -(item.value() as f64),
        }
    }

    /// Orders two items by priority, `Less` meaning `a` is taken before `b`.
    ///
    /// Density is compared by cross-multiplication so that equal ratios
    /// such as `3/2` and `6/4` tie exactly.
    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        match self {
            GreedyRule::Density => {
                let lhs = a.value() as u64 * b.weight() as u64;
                let rhs = b.value() as u64 * a.weight() as u64;
                rhs.cmp(&lhs)
            }
            GreedyRule::LightestFirst => a.weight().cmp(&b.weight()),
            GreedyRule::MostValuable => b.value().cmp(&a.value()),
        }
    }
}

impl fmt::Display for GreedyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GreedyRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "density" | "ratio" => Ok(GreedyRule::Density),
            "lightest" | "weight" | "lightest_first" => Ok(GreedyRule::LightestFirst),
            "valuable" | "value" | "most_valuable" => Ok(GreedyRule::MostValuable),
            other => Err(format!(
                "unknown greedy rule '{other}' (expected density, lightest or valuable)"
            )),
        }
    }
}
