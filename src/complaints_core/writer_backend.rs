//! Writer backend trait for aggregation results
//!
//! Defines the interface for emitting per-group counts to different backends.

use super::aggregate::GroupCount;
use super::error::ComplaintError;
use std::fs::File;
use std::path::Path;

/// Header of the CSV result, also the field names of the JSONL rows
pub const RESULT_COLUMNS: [&str; 3] = ["ComplaintType", "Borough", "count"];

pub trait CountWriterBackend {
    /// Write a complete aggregation result
    fn write_counts(&mut self, counts: &[GroupCount]) -> Result<(), ComplaintError>;

    /// Flush pending writes to storage
    fn flush(&mut self) -> Result<(), ComplaintError>;

    /// Get backend type for logging
    fn backend_type(&self) -> &'static str;
}

/// Create (truncate) an output file, making parent directories as needed
pub fn create_output_file(path: &Path) -> Result<File, ComplaintError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(File::create(path)?)
}
