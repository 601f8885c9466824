//! Sweep execution.
//!
//! # Algorithm
//!
//! For each size in the sweep:
//! 1. Generate one instance from the shared RNG
//! 2. If the size is within the exhaustive limit, time the exhaustive solver
//! 3. Time the greedy solver once per configured rule
//! 4. Hand the record to the reporter
//!
//! A reporter error aborts the sweep. The reporter is still finished so that
//! records already reported are flushed and stay valid.

use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::ExperimentConfig;
use super::types::{ExperimentError, ExperimentResult, SizeRecord, StrategyRun};
use crate::exhaustive::ExhaustiveSolver;
use crate::greedy::GreedySolver;
use crate::instance::InstanceGenerator;
use crate::report::Reporter;

/// Experiment sweep runner.
pub struct ExperimentRunner;

impl ExperimentRunner {
    /// Runs the sweep described by `config`, drawing instances from `rng`.
    ///
    /// `config.seed` is ignored here; the caller owns the random source.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use u_knapsack::experiment::{ExperimentConfig, ExperimentRunner, SizeRecord};
    ///
    /// let config = ExperimentConfig::default().with_sizes(2, 6, 2);
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let mut collected: Vec<SizeRecord> = Vec::new();
    ///
    /// let result = ExperimentRunner::run(&config, &mut rng, &mut collected).unwrap();
    /// assert_eq!(result.records.len(), 3);
    /// assert_eq!(collected, result.records);
    /// ```
    pub fn run<R, P>(
        config: &ExperimentConfig,
        rng: &mut R,
        reporter: &mut P,
    ) -> Result<ExperimentResult, ExperimentError>
    where
        R: Rng,
        P: Reporter + ?Sized,
    {
        config.validate().map_err(ExperimentError::InvalidConfig)?;

        let mut records = Vec::new();

        for size in config.sizes() {
            let instance = InstanceGenerator::generate(&config.generator_config(size), rng)
                .map_err(ExperimentError::InvalidConfig)?;

            let exhaustive = if config.runs_exhaustive(size) {
                debug!(
                    "size {size}: exhaustive search over {} subsets",
                    ExhaustiveSolver::subset_count(size)
                );
                let (solution, elapsed) = timed(|| ExhaustiveSolver::solve(&instance));
                Some(StrategyRun::new(&solution, elapsed))
            } else {
                debug!(
                    "size {size}: exhaustive search skipped (limit {})",
                    config.exhaustive_limit
                );
                None
            };

            let heuristics = config
                .rules
                .iter()
                .map(|&rule| {
                    let (solution, elapsed) = timed(|| GreedySolver::solve(&instance, rule));
                    (rule, StrategyRun::new(&solution, elapsed))
                })
                .collect();

            let record = SizeRecord {
                size,
                capacity: instance.capacity(),
                instance,
                exhaustive,
                heuristics,
            };

            if let Err(err) = reporter.report(&record) {
                if let Err(finish_err) = reporter.finish() {
                    warn!("could not finish reporter after aborted sweep: {finish_err}");
                }
                return Err(err.into());
            }
            records.push(record);
        }

        reporter.finish()?;

        Ok(ExperimentResult { records })
    }

    /// Runs the sweep with a fresh RNG seeded from `config.seed`, or from OS
    /// entropy when no seed is set.
    pub fn run_seeded<P>(
        config: &ExperimentConfig,
        reporter: &mut P,
    ) -> Result<ExperimentResult, ExperimentError>
    where
        P: Reporter + ?Sized,
    {
        let mut rng = match config.seed {
            Some(seed) => {
                info!("seeding instance generator with {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };
        Self::run(config, &mut rng, reporter)
    }
}

/// Runs `f`, returning its output and the time it took.
fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}
