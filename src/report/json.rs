//! JSON export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{ReportError, Reporter};
use crate::experiment::SizeRecord;

/// Buffers every record and writes them as one pretty-printed JSON array
/// when the sweep finishes.
pub struct JsonReporter<W: Write> {
    writer: W,
    records: Vec<SizeRecord>,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonReporter<BufWriter<File>> {
    /// Creates (or truncates) `path` and writes the records to it.
    pub fn create(path: &Path) -> Result<Self, ReportError> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, record: &SizeRecord) -> Result<(), ReportError> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)
            .map_err(|e| ReportError::Serialize(e.to_string()))?;
        self.writer.flush()?;
        Ok(())
    }
}
