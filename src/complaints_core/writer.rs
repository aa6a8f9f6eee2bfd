//! Unified writer interface for aggregation results
//!
//! Routes writes to the CSV, JSONL or SQLite backend based on configuration.

use super::aggregate::GroupCount;
use super::csv_writer::CsvCountWriter;
use super::error::ComplaintError;
use super::filter::DateRange;
use super::jsonl_writer::JsonlCountWriter;
use super::sqlite_writer::SqliteCountWriter;
use super::writer_backend::{create_output_file, CountWriterBackend};
use crate::config::{ConfigError, OutputFormat, OutputTarget};
use std::io::Write;

type Sink = Box<dyn Write>;

/// Unified writer that routes to the configured backend
pub enum ResultWriter {
    Csv(CsvCountWriter<Sink>),
    Jsonl(JsonlCountWriter<Sink>),
    Sqlite(SqliteCountWriter),
}

impl ResultWriter {
    pub fn new(
        format: OutputFormat,
        target: &OutputTarget,
        range: DateRange,
    ) -> Result<Self, ComplaintError> {
        if format == OutputFormat::Sqlite {
            let path = target
                .path()
                .ok_or(ConfigError::MissingOutput(format.as_str()))?;
            return Ok(ResultWriter::Sqlite(SqliteCountWriter::new(path, range)?));
        }

        let sink: Sink = match target {
            OutputTarget::Stdout => Box::new(std::io::stdout()),
            OutputTarget::File(path) => {
                log::info!("📝 Writing {} results to: {}", format.as_str(), path.display());
                Box::new(create_output_file(path)?)
            }
        };

        Ok(match format {
            OutputFormat::Jsonl => ResultWriter::Jsonl(JsonlCountWriter::from_writer(sink)),
            _ => ResultWriter::Csv(CsvCountWriter::from_writer(sink)),
        })
    }

    fn backend(&mut self) -> &mut dyn CountWriterBackend {
        match self {
            ResultWriter::Csv(w) => w,
            ResultWriter::Jsonl(w) => w,
            ResultWriter::Sqlite(w) => w,
        }
    }

    /// Write the full result and flush it
    pub fn write_counts(&mut self, counts: &[GroupCount]) -> Result<(), ComplaintError> {
        let backend = self.backend();
        backend.write_counts(counts)?;
        backend.flush()
    }

    pub fn flush(&mut self) -> Result<(), ComplaintError> {
        self.backend().flush()
    }

    /// Get backend type for logging
    pub fn backend_type(&self) -> &'static str {
        match self {
            ResultWriter::Csv(w) => w.backend_type(),
            ResultWriter::Jsonl(w) => w.backend_type(),
            ResultWriter::Sqlite(w) => w.backend_type(),
        }
    }
}
