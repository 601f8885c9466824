//! Consumers of sweep records.
//!
//! A [`Reporter`] receives each [`SizeRecord`] as soon as the sweep has
//! finished measuring that size, and is told once when the sweep is over.
//!
//! - `Vec<SizeRecord>`: collects records in memory
//! - [`LogReporter`]: human-readable console output through `log`
//! - [`CsvReporter`]: one delimited row per solver run
//! - [`JsonReporter`]: a JSON array of all records (feature `json`)
//!
//! A pair `(A, B)` of reporters forwards every call to both.

mod console;
mod csv;
#[cfg(feature = "json")]
mod json;

use std::fmt;

use crate::experiment::SizeRecord;

pub use console::LogReporter;
pub use csv::CsvReporter;
#[cfg(feature = "json")]
pub use json::JsonReporter;

/// Errors raised while emitting records.
#[derive(Debug)]
pub enum ReportError {
    /// Writing to the underlying sink failed.
    Io(std::io::Error),
    /// Serializing records failed.
    Serialize(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Io(err) => write!(f, "i/o error: {err}"),
            ReportError::Serialize(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Io(err) => Some(err),
            ReportError::Serialize(_) => None,
        }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Io(err)
    }
}

/// Receives sweep records as they are produced.
pub trait Reporter {
    /// Accepts the record for one instance size.
    fn report(&mut self, record: &SizeRecord) -> Result<(), ReportError>;

    /// Called once after the last record. Flushes buffered output.
    fn finish(&mut self) -> Result<(), ReportError> {
        Ok(())
    }
}

impl Reporter for Vec<SizeRecord> {
    fn report(&mut self, record: &SizeRecord) -> Result<(), ReportError> {
        self.push(record.clone());
        Ok(())
    }
}

impl<A: Reporter, B: Reporter> Reporter for (A, B) {
    fn report(&mut self, record: &SizeRecord) -> Result<(), ReportError> {
        self.0.report(record)?;
        self.1.report(record)
    }

    /// Finishes both halves, even if the first fails, and returns the
    /// first error.
    fn finish(&mut self) -> Result<(), ReportError> {
        let first = self.0.finish();
        let second = self.1.finish();
        first.and(second)
    }
}

impl<P: Reporter + ?Sized> Reporter for Box<P> {
    fn report(&mut self, record: &SizeRecord) -> Result<(), ReportError> {
        (**self).report(record)
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        (**self).finish()
    }
}

impl<P: Reporter> Reporter for Option<P> {
    fn report(&mut self, record: &SizeRecord) -> Result<(), ReportError> {
        match self {
            Some(p) => p.report(record),
            None => Ok(()),
        }
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        match self {
            Some(p) => p.finish(),
            None => Ok(()),
        }
    }
}
