//! Inclusive creation-date range filter

use super::record::ComplaintRecord;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Both ends are inclusive
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        self.start <= ts && ts <= self.end
    }

    /// `start > end`. Such a range matches nothing.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} .. {}]", self.start, self.end)
    }
}

/// Keep the records whose creation timestamp parses and lies within `range`
pub fn filter_by_created<'a>(
    records: &'a [ComplaintRecord],
    range: &DateRange,
) -> Vec<&'a ComplaintRecord> {
    records
        .iter()
        .filter(|record| record.created_at().is_some_and(|ts| range.contains(ts)))
        .collect()
}
