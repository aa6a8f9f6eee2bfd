//! CSV writer for aggregation results: `ComplaintType,Borough,count`

use super::aggregate::GroupCount;
use super::error::ComplaintError;
use super::writer_backend::{create_output_file, CountWriterBackend, RESULT_COLUMNS};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub struct CsvCountWriter<W: Write> {
    inner: csv::Writer<W>,
    header_written: bool,
}

impl CsvCountWriter<File> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, ComplaintError> {
        let path = path.as_ref();
        let file = create_output_file(path)?;
        log::info!("📝 Writing CSV results to: {}", path.display());
        Ok(Self::from_writer(file))
    }
}

impl<W: Write> CsvCountWriter<W> {
    pub fn from_writer(out: W) -> Self {
        // Header is written by hand so an empty result still gets one
        let inner = csv::WriterBuilder::new().has_headers(false).from_writer(out);
        Self {
            inner,
            header_written: false,
        }
    }

    fn ensure_header(&mut self) -> Result<(), ComplaintError> {
        if !self.header_written {
            self.inner.write_record(RESULT_COLUMNS)?;
            self.header_written = true;
        }
        Ok(())
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(mut self) -> Result<W, ComplaintError> {
        self.ensure_header()?;
        self.inner
            .into_inner()
            .map_err(|e| ComplaintError::Io(e.into_error()))
    }
}

impl<W: Write> CountWriterBackend for CsvCountWriter<W> {
    fn write_counts(&mut self, counts: &[GroupCount]) -> Result<(), ComplaintError> {
        self.ensure_header()?;
        for count in counts {
            self.inner.serialize(count)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ComplaintError> {
        self.ensure_header()?;
        self.inner.flush()?;
        Ok(())
    }

    fn backend_type(&self) -> &'static str {
        "CSV"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(counts: &[GroupCount]) -> String {
        let mut writer = CsvCountWriter::from_writer(Vec::new());
        writer.write_counts(counts).unwrap();
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_header_and_rows() {
        let out = render(&[
            GroupCount::new(Some("A"), Some("BRONX"), 2),
            GroupCount::new(Some("Noise, Street"), Some("QUEENS"), 1),
        ]);
        assert_eq!(
            out,
            "ComplaintType,Borough,count\nA,BRONX,2\n\"Noise, Street\",QUEENS,1\n"
        );
    }

    #[test]
    fn test_empty_result_is_header_only() {
        assert_eq!(render(&[]), "ComplaintType,Borough,count\n");
    }

    #[test]
    fn test_missing_keys_are_empty_fields() {
        let out = render(&[GroupCount::new(None, Some("BRONX"), 3), GroupCount::new(Some("A"), None, 1)]);
        assert_eq!(out, "ComplaintType,Borough,count\n,BRONX,3\nA,,1\n");
    }

    #[test]
    fn test_create_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.csv");

        let mut writer = CsvCountWriter::create(&path).unwrap();
        writer.write_counts(&[GroupCount::new(Some("A"), Some("BRONX"), 2)]).unwrap();
        writer.flush().unwrap();
        drop(writer);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "ComplaintType,Borough,count\nA,BRONX,2\n");
    }
}
