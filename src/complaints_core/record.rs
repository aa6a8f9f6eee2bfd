//! Typed complaint row, deserialized from a positional CSV record

use super::timestamp::parse_timestamp;
use chrono::NaiveDateTime;
use serde::Deserialize;

/// (complaint type, borough). A missing value is a key of its own.
pub type GroupKey = (Option<String>, Option<String>);

/// Placeholder strings the exports use for "no value"
const MISSING_MARKERS: [&str; 9] = ["N/A", "NA", "n/a", "NULL", "null", "NaN", "nan", "None", "<NA>"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComplaintRecord {
    pub unique_key: Option<String>,
    pub created_date: Option<String>,
    pub closed_date: Option<String>,
    pub agency: Option<String>,
    pub agency_name: Option<String>,
    pub complaint_type: Option<String>,
    pub descriptor: Option<String>,
    pub location_type: Option<String>,
    pub incident_zip: Option<String>,
    pub incident_address: Option<String>,
    pub street_name: Option<String>,
    pub cross_street1: Option<String>,
    pub cross_street2: Option<String>,
    pub intersection_street1: Option<String>,
    pub intersection_street2: Option<String>,
    pub address_type: Option<String>,
    pub city: Option<String>,
    pub landmark: Option<String>,
    pub facility_type: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<String>,
    pub resolution_description: Option<String>,
    pub resolution_action_updated_date: Option<String>,
    pub community_board: Option<String>,
    pub borough: Option<String>,
    pub x_coordinate_state_plane: Option<String>,
    pub y_coordinate_state_plane: Option<String>,
    pub park_facility_name: Option<String>,
    pub park_borough: Option<String>,
    pub school_name: Option<String>,
    pub school_number: Option<String>,
    pub school_region: Option<String>,
    pub school_code: Option<String>,
    pub school_phone_number: Option<String>,
    pub school_address: Option<String>,
    pub school_city: Option<String>,
    pub school_state: Option<String>,
    pub school_zip: Option<String>,
    pub school_not_found: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub location: Option<String>,
}

impl ComplaintRecord {
    /// Deserialize a full-width positional record using the schema labels
    pub fn from_string_record(
        record: &csv::StringRecord,
        headers: &csv::StringRecord,
    ) -> Result<Self, csv::Error> {
        record.deserialize(Some(headers))
    }

    /// Parsed creation timestamp, or `None` when the field is absent or
    /// unparseable
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        self.created_date.as_deref().and_then(parse_timestamp)
    }

    pub fn group_key(&self) -> GroupKey {
        (present(&self.complaint_type), present(&self.borough))
    }
}

fn present(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .filter(|v| !v.is_empty() && !MISSING_MARKERS.contains(&v.as_str()))
        .cloned()
}

#[cfg(test)]
impl ComplaintRecord {
    pub(crate) fn sample(created: &str, complaint_type: &str, borough: &str) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            created_date: non_empty(created),
            complaint_type: non_empty(complaint_type),
            borough: non_empty(borough),
            ..Self::default()
        }
    }
}
