//! Attendance model and related types.
//!
//! This module defines the AttendanceStatus enum and the AttendanceMap
//! snapshot type that the salary calculation consumes.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The recorded attendance status for a single calendar day.
///
/// This is a closed set: deserialization of any other string literal fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// An ordinary working day, paid at one daily wage.
    Present,
    /// An absent day, counted as a working day but unpaid.
    Absent,
    /// A double-shift day, paid at twice the daily wage.
    Double,
    /// A holiday, excluded from the working-day count entirely.
    Holiday,
}

impl AttendanceStatus {
    /// Returns true for every status except [`AttendanceStatus::Holiday`].
    ///
    /// Holiday days are neither paid nor counted as present or absent;
    /// all other statuses count toward the total of working days.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::AttendanceStatus;
    ///
    /// assert!(AttendanceStatus::Absent.is_working_day());
    /// assert!(!AttendanceStatus::Holiday.is_working_day());
    /// ```
    pub fn is_working_day(&self) -> bool {
        !matches!(self, AttendanceStatus::Holiday)
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Double => "double",
            AttendanceStatus::Holiday => "holiday",
        };
        f.write_str(s)
    }
}

/// An immutable attendance snapshot: one status per calendar day.
///
/// Date keys serialize as ISO `YYYY-MM-DD` strings. Each recomputation
/// receives the snapshot as a whole; the engine never mutates it.
pub type AttendanceMap = BTreeMap<NaiveDate, AttendanceStatus>;

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_status_serialization_literals() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Present).unwrap(),
            "\"present\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Absent).unwrap(),
            "\"absent\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Double).unwrap(),
            "\"double\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Holiday).unwrap(),
            "\"holiday\""
        );
    }

    #[test]
    fn test_unknown_status_literal_fails_deserialization() {
        let result: Result<AttendanceStatus, _> = serde_json::from_str("\"overtime\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_is_working_day() {
        assert!(AttendanceStatus::Present.is_working_day());
        assert!(AttendanceStatus::Absent.is_working_day());
        assert!(AttendanceStatus::Double.is_working_day());
        assert!(!AttendanceStatus::Holiday.is_working_day());
    }

    #[test]
    fn test_display_matches_wire_literals() {
        assert_eq!(AttendanceStatus::Present.to_string(), "present");
        assert_eq!(AttendanceStatus::Absent.to_string(), "absent");
        assert_eq!(AttendanceStatus::Double.to_string(), "double");
        assert_eq!(AttendanceStatus::Holiday.to_string(), "holiday");
    }

    #[test]
    fn test_attendance_map_deserialization() {
        let json = r#"{
            "2026-08-03": "present",
            "2026-08-04": "double",
            "2026-08-05": "absent",
            "2026-08-09": "holiday"
        }"#;

        let map: AttendanceMap = serde_json::from_str(json).unwrap();
        assert_eq!(map.len(), 4);
        assert_eq!(
            map.get(&make_date("2026-08-04")),
            Some(&AttendanceStatus::Double)
        );
        assert_eq!(
            map.get(&make_date("2026-08-09")),
            Some(&AttendanceStatus::Holiday)
        );
    }

    #[test]
    fn test_attendance_map_invalid_date_key_fails() {
        let json = r#"{ "not-a-date": "present" }"#;
        let result: Result<AttendanceMap, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_attendance_map_round_trip() {
        let mut map = AttendanceMap::new();
        map.insert(make_date("2026-08-03"), AttendanceStatus::Present);
        map.insert(make_date("2026-08-04"), AttendanceStatus::Holiday);

        let json = serde_json::to_string(&map).unwrap();
        let deserialized: AttendanceMap = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
