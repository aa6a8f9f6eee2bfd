//! Error type shared by the loader, the aggregator and the writer backends

use crate::config::ConfigError;

#[derive(Debug)]
pub enum ComplaintError {
    Io(std::io::Error),
    Csv(csv::Error),
    ColumnCount {
        line: u64,
        found: usize,
        expected: usize,
    },
    InvalidDate(String),
    Serialization(serde_json::Error),
    Database(String),
    Config(ConfigError),
}

impl From<std::io::Error> for ComplaintError {
    fn from(err: std::io::Error) -> Self {
        ComplaintError::Io(err)
    }
}

impl From<csv::Error> for ComplaintError {
    fn from(err: csv::Error) -> Self {
        ComplaintError::Csv(err)
    }
}

impl From<serde_json::Error> for ComplaintError {
    fn from(err: serde_json::Error) -> Self {
        ComplaintError::Serialization(err)
    }
}

impl From<rusqlite::Error> for ComplaintError {
    fn from(err: rusqlite::Error) -> Self {
        ComplaintError::Database(err.to_string())
    }
}

impl From<ConfigError> for ComplaintError {
    fn from(err: ConfigError) -> Self {
        ComplaintError::Config(err)
    }
}

impl std::fmt::Display for ComplaintError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplaintError::Io(e) => write!(f, "IO error: {}", e),
            ComplaintError::Csv(e) => write!(f, "CSV error: {}", e),
            ComplaintError::ColumnCount {
                line,
                found,
                expected,
            } => write!(
                f,
                "Row at line {} has {} fields, expected at most {}",
                line, found, expected
            ),
            ComplaintError::InvalidDate(raw) => write!(f, "Invalid date: '{}'", raw),
            ComplaintError::Serialization(e) => write!(f, "Serialization error: {}", e),
            ComplaintError::Database(e) => write!(f, "Database error: {}", e),
            ComplaintError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for ComplaintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ComplaintError::Io(e) => Some(e),
            ComplaintError::Csv(e) => Some(e),
            ComplaintError::Serialization(e) => Some(e),
            ComplaintError::Config(e) => Some(e),
            _ => None,
        }
    }
}
