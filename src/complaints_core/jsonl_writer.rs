//! JSONL writer for aggregation results - one object per (type, borough) group

use super::aggregate::GroupCount;
use super::error::ComplaintError;
use super::writer_backend::{create_output_file, CountWriterBackend};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct JsonlCountWriter<W: Write> {
    out: BufWriter<W>,
}

impl JsonlCountWriter<File> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, ComplaintError> {
        let path = path.as_ref();
        let file = create_output_file(path)?;
        log::info!("📝 Writing JSONL results to: {}", path.display());
        Ok(Self::from_writer(file))
    }
}

impl<W: Write> JsonlCountWriter<W> {
    pub fn from_writer(out: W) -> Self {
        Self {
            out: BufWriter::new(out),
        }
    }

    pub fn into_inner(self) -> Result<W, ComplaintError> {
        self.out
            .into_inner()
            .map_err(|e| ComplaintError::Io(e.into_error()))
    }
}

impl<W: Write> CountWriterBackend for JsonlCountWriter<W> {
    fn write_counts(&mut self, counts: &[GroupCount]) -> Result<(), ComplaintError> {
        for count in counts {
            let json = serde_json::to_string(count)?;
            writeln!(self.out, "{}", json)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ComplaintError> {
        self.out.flush()?;
        Ok(())
    }

    fn backend_type(&self) -> &'static str {
        "JSONL"
    }
}
