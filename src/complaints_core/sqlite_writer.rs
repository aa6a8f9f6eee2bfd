//! SQLite writer for aggregation results
//!
//! Each run appends its groups to `complaint_counts`, tagged with the date
//! range it was computed over.

use super::aggregate::GroupCount;
use super::error::ComplaintError;
use super::filter::DateRange;
use super::writer_backend::CountWriterBackend;
use chrono::Utc;
use rusqlite::{params, Connection};
use std::path::Path;

const RANGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct SqliteCountWriter {
    conn: Connection,
    range: DateRange,
}

impl SqliteCountWriter {
    pub fn new(db_path: impl AsRef<Path>, range: DateRange) -> Result<Self, ComplaintError> {
        let db_path = db_path.as_ref();
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ComplaintError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create database directory {}: {}", parent.display(), e),
                ))
            })?;
        }

        let conn = Connection::open(db_path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS complaint_counts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                complaint_type TEXT,
                borough TEXT,
                count INTEGER NOT NULL,
                range_start TEXT NOT NULL,
                range_end TEXT NOT NULL,
                written_at TEXT NOT NULL
            )",
            [],
        )?;
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_range ON complaint_counts(range_start, range_end)",
            [],
        )?;

        log::info!("✅ SQLite results database initialized: {}", db_path.display());

        Ok(Self { conn, range })
    }
}

impl CountWriterBackend for SqliteCountWriter {
    fn write_counts(&mut self, counts: &[GroupCount]) -> Result<(), ComplaintError> {
        let range_start = self.range.start.format(RANGE_FORMAT).to_string();
        let range_end = self.range.end.format(RANGE_FORMAT).to_string();
        let written_at = Utc::now().to_rfc3339();

        let tx = self.conn.transaction()?;
        for count in counts {
            tx.execute(
                "INSERT INTO complaint_counts
                 (complaint_type, borough, count, range_start, range_end, written_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    count.complaint_type,
                    count.borough,
                    count.count as i64,
                    range_start,
                    range_end,
                    written_at,
                ],
            )?;
        }
        tx.commit()?;

        log::debug!("✅ Inserted {} groups into SQLite", counts.len());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ComplaintError> {
        // Rows are committed per write_counts call
        Ok(())
    }

    fn backend_type(&self) -> &'static str {
        "SQLite"
    }
}
