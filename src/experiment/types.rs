//! Records produced by a sweep.

use std::fmt;
use std::time::Duration;

use crate::greedy::GreedyRule;
use crate::instance::{Instance, Item, Solution};
use crate::report::ReportError;

/// Outcome of one timed solver call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StrategyRun {
    /// Total value of the selection.
    pub value: u64,
    /// Total weight of the selection.
    pub weight: u64,
    /// The selected items, in the order the solver took them.
    pub items: Vec<Item>,
    /// Wall-clock time spent in the solver, in nanoseconds.
    pub elapsed_ns: u64,
}

impl StrategyRun {
    /// Captures a solver result together with its elapsed time.
    pub fn new(solution: &Solution, elapsed: Duration) -> Self {
        Self {
            value: solution.value(),
            weight: solution.weight(),
            items: solution.items().to_vec(),
            elapsed_ns: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
        }
    }

    /// Number of selected items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_ns)
    }
}

/// Everything measured for one instance size.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SizeRecord {
    /// Number of items in the instance.
    pub size: usize,
    /// Capacity of the instance.
    pub capacity: u32,
    /// The generated instance.
    pub instance: Instance,
    /// Exhaustive result; `None` when the size exceeded the exhaustive limit.
    pub exhaustive: Option<StrategyRun>,
    /// Greedy results, one per configured rule.
    pub heuristics: Vec<(GreedyRule, StrategyRun)>,
}

impl SizeRecord {
    /// Result of the given greedy rule, if it was run.
    pub fn heuristic(&self, rule: GreedyRule) -> Option<&StrategyRun> {
        self.heuristics
            .iter()
            .find(|(r, _)| *r == rule)
            .map(|(_, run)| run)
    }

    /// Whether `rule` missed the optimum.
    ///
    /// `None` if either the exhaustive solver or the rule was not run.
    pub fn differs(&self, rule: GreedyRule) -> Option<bool> {
        let exhaustive = self.exhaustive.as_ref()?;
        let heuristic = self.heuristic(rule)?;
        Some(heuristic.value != exhaustive.value)
    }
}

/// All records of a completed sweep, in size order.
#[derive(Debug, Clone, Default)]
pub struct ExperimentResult {
    pub records: Vec<SizeRecord>,
}

impl ExperimentResult {
    /// Number of sizes where `rule` was compared against the optimum and
    /// fell short of it.
    pub fn mismatches(&self, rule: GreedyRule) -> usize {
        self.records
            .iter()
            .filter(|r| r.differs(rule) == Some(true))
            .count()
    }

    /// Number of sizes the exhaustive solver ran on.
    pub fn exhaustive_runs(&self) -> usize {
        self.records.iter().filter(|r| r.exhaustive.is_some()).count()
    }
}

/// Errors that abort a sweep.
#[derive(Debug)]
pub enum ExperimentError {
    /// The experiment configuration failed validation.
    InvalidConfig(String),
    /// The reporter could not accept a record.
    Report(ReportError),
}

impl fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperimentError::InvalidConfig(msg) => write!(f, "invalid experiment config: {msg}"),
            ExperimentError::Report(err) => write!(f, "reporting failed: {err}"),
        }
    }
}

impl std::error::Error for ExperimentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExperimentError::InvalidConfig(_) => None,
            ExperimentError::Report(err) => Some(err),
        }
    }
}

impl From<ReportError> for ExperimentError {
    fn from(err: ReportError) -> Self {
        ExperimentError::Report(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(value: u64) -> StrategyRun {
        StrategyRun {
            value,
            weight: 1,
            items: vec![Item::new(1, value as u32)],
            elapsed_ns: 10,
        }
    }

    fn record(exhaustive: Option<u64>) -> SizeRecord {
        SizeRecord {
            size: 1,
            capacity: 5,
            instance: Instance::new(vec![Item::new(1, 9)], 5).unwrap(),
            exhaustive: exhaustive.map(run),
            heuristics: vec![
                (GreedyRule::Density, run(9)),
                (GreedyRule::MostValuable, run(4)),
            ],
        }
    }

    #[test]
    fn test_strategy_run_from_solution() {
        let instance = Instance::new(vec![Item::new(2, 3), Item::new(3, 4)], 5).unwrap();
        let sol = crate::exhaustive::ExhaustiveSolver::solve(&instance);
        let run = StrategyRun::new(&sol, Duration::from_micros(3));
        assert_eq!(run.value, 7);
        assert_eq!(run.weight, 5);
        assert_eq!(run.item_count(), 2);
        assert_eq!(run.elapsed_ns, 3_000);
        assert_eq!(run.elapsed(), Duration::from_micros(3));
    }

    #[test]
    fn test_differs() {
        let rec = record(Some(9));
        assert_eq!(rec.differs(GreedyRule::Density), Some(false));
        assert_eq!(rec.differs(GreedyRule::MostValuable), Some(true));
        assert_eq!(rec.differs(GreedyRule::LightestFirst), None);
        assert_eq!(record(None).differs(GreedyRule::Density), None);
    }

    #[test]
    fn test_result_counters() {
        let result = ExperimentResult {
            records: vec![record(Some(9)), record(None), record(Some(9))],
        };
        assert_eq!(result.exhaustive_runs(), 2);
        assert_eq!(result.mismatches(GreedyRule::MostValuable), 2);
        assert_eq!(result.mismatches(GreedyRule::Density), 0);
    }

    #[test]
    fn test_experiment_error_display() {
        let err = ExperimentError::InvalidConfig("size_step must be at least 1".into());
        assert!(err.to_string().contains("size_step"));
    }
}
