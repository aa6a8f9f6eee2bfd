//! Positional column layout of the headerless complaints export

/// Number of positional columns in a complaint row
pub const SCHEMA_WIDTH: usize = 42;

/// Column labels, in file order. The export has no header row, so these
/// names are the only thing tying a position to a field.
pub const COLUMN_NAMES: [&str; SCHEMA_WIDTH] = [
    "UniqueKey",
    "CreatedDate",
    "ClosedDate",
    "Agency",
    "AgencyName",
    "ComplaintType",
    "Descriptor",
    "LocationType",
    "IncidentZip",
    "IncidentAddress",
    "StreetName",
    "CrossStreet1",
    "CrossStreet2",
    "IntersectionStreet1",
    "IntersectionStreet2",
    "AddressType",
    "City",
    "Landmark",
    "FacilityType",
    "Status",
    "DueDate",
    "ResolutionDescription",
    "ResolutionActionUpdatedDate",
    "CommunityBoard",
    "Borough",
    "XCoordinateStatePlane",
    "YCoordinateStatePlane",
    "ParkFacilityName",
    "ParkBorough",
    "SchoolName",
    "SchoolNumber",
    "SchoolRegion",
    "SchoolCode",
    "SchoolPhoneNumber",
    "SchoolAddress",
    "SchoolCity",
    "SchoolState",
    "SchoolZip",
    "SchoolNotFound",
    "Latitude",
    "Longitude",
    "Location",
];

pub const CREATED_DATE: usize = 1;
pub const COMPLAINT_TYPE: usize = 5;
pub const BOROUGH: usize = 24;

/// Header record used to label positional fields during deserialization
pub fn header_record() -> csv::StringRecord {
    csv::StringRecord::from(COLUMN_NAMES.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_core_column_positions() {
        assert_eq!(COLUMN_NAMES[CREATED_DATE], "CreatedDate");
        assert_eq!(COLUMN_NAMES[COMPLAINT_TYPE], "ComplaintType");
        assert_eq!(COLUMN_NAMES[BOROUGH], "Borough");
    }

    #[test]
    fn test_column_names_unique() {
        let unique: HashSet<&str> = COLUMN_NAMES.iter().copied().collect();
        assert_eq!(unique.len(), SCHEMA_WIDTH);
        assert_eq!(header_record().len(), SCHEMA_WIDTH);
    }
}
