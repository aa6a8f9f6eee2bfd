//! Complaints Core - date-range filter and group-by-count over complaint exports
//!
//! # Architecture
//!
//! ```text
//! headerless CSV → ComplaintReader (positional schema, short rows padded)
//!     ↓
//! Vec<ComplaintRecord>
//!     ↓
//! filter_by_created (CreatedDate within inclusive DateRange)
//!     ↓
//! ComplaintCounter (BTreeMap keyed by complaint type + borough)
//!     ↓
//! ResultWriter → CSV, JSONL or SQLite backend
//! ```

pub mod aggregate;
pub mod csv_writer;
pub mod error;
pub mod filter;
pub mod jsonl_writer;
pub mod reader;
pub mod record;
pub mod schema;
pub mod sqlite_writer;
pub mod timestamp;
pub mod writer;
pub mod writer_backend;

pub use aggregate::{aggregate, aggregate_range, aggregate_records, ComplaintCounter, GroupCount};
pub use csv_writer::CsvCountWriter;
pub use error::ComplaintError;
pub use filter::{filter_by_created, DateRange};
pub use jsonl_writer::JsonlCountWriter;
pub use reader::{ComplaintReader, LoadReport};
pub use record::{ComplaintRecord, GroupKey};
pub use schema::{COLUMN_NAMES, SCHEMA_WIDTH};
pub use sqlite_writer::SqliteCountWriter;
pub use timestamp::{parse_bound, parse_timestamp};
pub use writer::ResultWriter;
pub use writer_backend::CountWriterBackend;
