use serde::Deserialize;
use thiserror::Error;

use crate::time::{TimeOfDay, TimeParseError, Week};

/// Clock value as it arrives from the catalog: some feeds carry "1400",
/// others 1400.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ClockValue {
    Text(String),
    Numeric(u16),
}

impl TryFrom<&ClockValue> for TimeOfDay {
    type Error = TimeParseError;

    fn try_from(value: &ClockValue) -> Result<Self, Self::Error> {
        match value {
            ClockValue::Text(s) => TimeOfDay::parse(s),
            ClockValue::Numeric(n) => TimeOfDay::from_clock(*n),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecordError {
    #[error(transparent)]
    Time(#[from] TimeParseError),
    #[error("meeting ends at {end} but starts at {start}")]
    EndNotAfterStart { start: TimeOfDay, end: TimeOfDay },
}

/// One meeting row as the external catalog loader hands it in. The crate
/// never parses catalog files itself; it only validates these records at
/// `Meeting` construction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRecord {
    pub day: String,
    pub start_time: ClockValue,
    pub end_time: ClockValue,
    #[serde(default)]
    pub weeks: Vec<Week>,
    pub group_label: String,
    // Opaque pass-through metadata, unused by overlap logic.
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub activity_type: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub zone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_row_with_string_clocks() {
        let record: MeetingRecord = serde_json::from_str(
            r#"{
                "day": "Monday",
                "startTime": "1400",
                "endTime": "1600",
                "weeks": [1, 2, 3],
                "groupLabel": "01",
                "venue": "LT19",
                "activityType": "LEC",
                "capacity": 120,
                "zone": "A"
            }"#,
        )
        .unwrap();
        assert_eq!(record.start_time, ClockValue::Text("1400".to_string()));
        assert_eq!(record.weeks, vec![1, 2, 3]);
        assert_eq!(record.venue.as_deref(), Some("LT19"));
    }

    #[test]
    fn deserializes_numeric_clocks_and_defaults_metadata() {
        let record: MeetingRecord = serde_json::from_str(
            r#"{"day": "Tuesday", "startTime": 900, "endTime": 1100, "groupLabel": "02"}"#,
        )
        .unwrap();
        assert_eq!(record.start_time, ClockValue::Numeric(900));
        assert!(record.weeks.is_empty());
        assert_eq!(record.capacity, None);
    }

    #[test]
    fn both_clock_forms_convert_to_the_same_time() {
        let text = TimeOfDay::try_from(&ClockValue::Text("0930".to_string())).unwrap();
        let numeric = TimeOfDay::try_from(&ClockValue::Numeric(930)).unwrap();
        assert_eq!(text, numeric);
        assert_eq!(text.minutes(), 570);
    }

    #[test]
    fn clock_conversion_propagates_parse_errors() {
        assert_eq!(
            TimeOfDay::try_from(&ClockValue::Text("9:30".to_string())),
            Err(TimeParseError::MalformedClock("9:30".to_string()))
        );
        assert_eq!(
            TimeOfDay::try_from(&ClockValue::Numeric(2460)),
            Err(TimeParseError::ClockOutOfRange(2460))
        );
    }
}
