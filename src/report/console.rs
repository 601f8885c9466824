//! Console reporter.

use itertools::Itertools;
use log::info;

use super::{ReportError, Reporter};
use crate::experiment::{SizeRecord, StrategyRun};
use crate::instance::Item;

/// Writes a readable block per instance size through the `log` facade.
///
/// With `show_items` enabled the generated items and every selection are
/// listed as well, which gets long for large sizes.
#[derive(Debug, Clone, Default)]
pub struct LogReporter {
    pub show_items: bool,
}

impl LogReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(mut self, show: bool) -> Self {
        self.show_items = show;
        self
    }

    fn log_run(&self, label: &str, run: &StrategyRun) {
        info!(
            "[{label:>10}] value {:>5} | weight {:>4} | {:>2} items | {:>12} ns",
            run.value,
            run.weight,
            run.item_count(),
            run.elapsed_ns
        );
        if self.show_items {
            info!("             selected {}", format_items(&run.items));
        }
    }
}

impl Reporter for LogReporter {
    fn report(&mut self, record: &SizeRecord) -> Result<(), ReportError> {
        info!("==== size {} | capacity {} ====", record.size, record.capacity);
        if self.show_items {
            info!("items {}", format_items(record.instance.items()));
        }

        match &record.exhaustive {
            Some(run) => self.log_run("exhaustive", run),
            None => info!("[exhaustive] skipped"),
        }

        for (rule, run) in &record.heuristics {
            self.log_run(rule.name(), run);
            if let Some(differs) = record.differs(*rule) {
                info!("             {rule} differs from optimum: {differs}");
            }
        }
        Ok(())
    }
}

fn format_items(items: &[Item]) -> String {
    format!("[{}]", items.iter().join(", "))
}
