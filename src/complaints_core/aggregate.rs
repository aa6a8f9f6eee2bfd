//! Group-by-count over (complaint type, borough)

use super::error::ComplaintError;
use super::filter::{filter_by_created, DateRange};
use super::reader::ComplaintReader;
use super::record::{ComplaintRecord, GroupKey};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// One output row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    #[serde(rename = "ComplaintType")]
    pub complaint_type: Option<String>,
    #[serde(rename = "Borough")]
    pub borough: Option<String>,
    pub count: u64,
}

impl GroupCount {
    pub fn new(complaint_type: Option<&str>, borough: Option<&str>, count: u64) -> Self {
        Self {
            complaint_type: complaint_type.map(str::to_string),
            borough: borough.map(str::to_string),
            count,
        }
    }
}

/// Ordered fold of records into per-key counts. Keys iterate in ascending
/// (complaint type, borough) order, missing values first.
#[derive(Debug, Default)]
pub struct ComplaintCounter {
    groups: BTreeMap<GroupKey, u64>,
}

impl ComplaintCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: &ComplaintRecord) {
        *self.groups.entry(record.group_key()).or_insert(0) += 1;
    }

    /// Number of distinct keys seen
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.groups.values().sum()
    }

    pub fn into_counts(self) -> Vec<GroupCount> {
        self.groups
            .into_iter()
            .map(|((complaint_type, borough), count)| GroupCount {
                complaint_type,
                borough,
                count,
            })
            .collect()
    }
}

/// Filter `records` by creation date and count the survivors per key
pub fn aggregate_records(records: &[ComplaintRecord], range: &DateRange) -> Vec<GroupCount> {
    if range.is_inverted() {
        log::warn!("⚠️  Start date is after end date {}, result will be empty", range);
    }

    let kept = filter_by_created(records, range);
    log::info!(
        "🔎 {} of {} rows fall within {}",
        kept.len(),
        records.len(),
        range
    );

    let mut counter = ComplaintCounter::new();
    for record in kept {
        counter.add(record);
    }

    log::debug!(
        "Counted {} rows across {} (type, borough) groups",
        counter.total(),
        counter.len()
    );

    counter.into_counts()
}

/// Load `source` and count complaints per (type, borough) within `range`
pub fn aggregate_range(
    source: impl AsRef<Path>,
    range: &DateRange,
) -> Result<Vec<GroupCount>, ComplaintError> {
    let (records, _report) = ComplaintReader::from_path(source)?.read_all()?;
    Ok(aggregate_records(&records, range))
}

/// Load `source` and count complaints per (type, borough) created within
/// `[start, end]`
pub fn aggregate(
    source: impl AsRef<Path>,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<Vec<GroupCount>, ComplaintError> {
    aggregate_range(source, &DateRange::new(start, end))
}
