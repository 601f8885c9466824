//! CSV export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{ReportError, Reporter};
use crate::experiment::{SizeRecord, StrategyRun};

const HEADER: &str = "size,capacity,strategy,value,weight,items,elapsed_ns";

/// Writes one comma-separated row per solver run.
///
/// A skipped exhaustive run still gets a row, with the value columns left
/// empty, so every size has the same set of strategies.
///
/// # Examples
///
/// ```
/// use u_knapsack::experiment::{ExperimentConfig, ExperimentRunner};
/// use u_knapsack::report::CsvReporter;
///
/// let config = ExperimentConfig::default().with_sizes(4, 4, 1).with_seed(1);
/// let mut reporter = CsvReporter::new(Vec::new());
/// ExperimentRunner::run_seeded(&config, &mut reporter).unwrap();
///
/// let csv = String::from_utf8(reporter.into_inner()).unwrap();
/// assert_eq!(csv.lines().count(), 1 + 4);
/// ```
pub struct CsvReporter<W: Write> {
    writer: W,
    header_written: bool,
}

impl<W: Write> CsvReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header_written: false,
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_row(
        &mut self,
        record: &SizeRecord,
        strategy: &str,
        run: Option<&StrategyRun>,
    ) -> Result<(), ReportError> {
        match run {
            Some(run) => writeln!(
                self.writer,
                "{},{},{},{},{},{},{}",
                record.size,
                record.capacity,
                strategy,
                run.value,
                run.weight,
                run.item_count(),
                run.elapsed_ns
            )?,
            None => writeln!(
                self.writer,
                "{},{},{},,,,",
                record.size, record.capacity, strategy
            )?,
        }
        Ok(())
    }
}

impl CsvReporter<BufWriter<File>> {
    /// Creates (or truncates) `path` and writes rows to it.
    pub fn create(path: &Path) -> Result<Self, ReportError> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Reporter for CsvReporter<W> {
    fn report(&mut self, record: &SizeRecord) -> Result<(), ReportError> {
        if !self.header_written {
            writeln!(self.writer, "{HEADER}")?;
            self.header_written = true;
        }

        self.write_row(record, "exhaustive", record.exhaustive.as_ref())?;
        for (rule, run) in &record.heuristics {
            self.write_row(record, rule.name(), Some(run))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greedy::GreedyRule;
    use crate::instance::{Instance, Item};

    fn record(exhaustive: bool) -> SizeRecord {
        let run = StrategyRun {
            value: 7,
            weight: 5,
            items: vec![Item::new(2, 3), Item::new(3, 4)],
            elapsed_ns: 1200,
        };
        SizeRecord {
            size: 4,
            capacity: 5,
            instance: Instance::new(
                vec![
                    Item::new(2, 3),
                    Item::new(3, 4),
                    Item::new(4, 5),
                    Item::new(5, 6),
                ],
                5,
            )
            .unwrap(),
            exhaustive: exhaustive.then(|| run.clone()),
            heuristics: vec![(GreedyRule::Density, run)],
        }
    }

    #[test]
    fn test_csv_rows() {
        let mut reporter = CsvReporter::new(Vec::new());
        reporter.report(&record(true)).unwrap();
        reporter.report(&record(false)).unwrap();
        reporter.finish().unwrap();

        let csv = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                HEADER,
                "4,5,exhaustive,7,5,2,1200",
                "4,5,density,7,5,2,1200",
                "4,5,exhaustive,,,,",
                "4,5,density,7,5,2,1200",
            ]
        );
    }

    #[test]
    fn test_csv_no_records_no_header() {
        let mut reporter = CsvReporter::new(Vec::new());
        reporter.finish().unwrap();
        assert!(reporter.into_inner().is_empty());
    }
}
