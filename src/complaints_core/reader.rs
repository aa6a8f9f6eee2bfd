//! Headerless complaints CSV loader

use super::error::ComplaintError;
use super::record::ComplaintRecord;
use super::schema::{header_record, SCHEMA_WIDTH};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// What happened while loading a complaints file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub total_rows: usize,
    pub unparseable_dates: usize,
}

pub struct ComplaintReader<R: Read> {
    inner: csv::Reader<R>,
    headers: csv::StringRecord,
}

impl ComplaintReader<File> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ComplaintError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        log::info!("📖 Loading complaints from: {}", path.display());
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> ComplaintReader<R> {
    pub fn from_reader(rdr: R) -> Self {
        // flexible: short rows are padded below instead of rejected
        let inner = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(rdr);

        Self {
            inner,
            headers: header_record(),
        }
    }

    /// Materialize every row.
    ///
    /// Rows shorter than the schema get missing trailing fields. Rows wider
    /// than the schema abort the load. A bad `CreatedDate` is not an error;
    /// it is only counted in the report.
    pub fn read_all(&mut self) -> Result<(Vec<ComplaintRecord>, LoadReport), ComplaintError> {
        let mut records = Vec::new();
        let mut report = LoadReport::default();
        let mut raw = csv::StringRecord::new();

        while self.inner.read_record(&mut raw)? {
            let line = raw.position().map(|p| p.line()).unwrap_or(0);

            if raw.len() > SCHEMA_WIDTH {
                return Err(ComplaintError::ColumnCount {
                    line,
                    found: raw.len(),
                    expected: SCHEMA_WIDTH,
                });
            }
            while raw.len() < SCHEMA_WIDTH {
                raw.push_field("");
            }

            let record = ComplaintRecord::from_string_record(&raw, &self.headers)?;
            if record.created_at().is_none() {
                log::debug!(
                    "Unparseable CreatedDate at line {}: {:?}",
                    line,
                    record.created_date
                );
                report.unparseable_dates += 1;
            }

            records.push(record);
            report.total_rows += 1;
        }

        log::info!("✅ Loaded {} complaint rows", report.total_rows);
        if report.unparseable_dates > 0 {
            log::warn!(
                "⚠️  {} rows have an unparseable CreatedDate and will be excluded",
                report.unparseable_dates
            );
        }

        Ok((records, report))
    }
}
