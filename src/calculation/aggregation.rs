//! Attendance aggregation functionality.
//!
//! This module reduces an attendance snapshot to the three day counts the
//! salary calculation consumes.

use crate::models::{AttendanceMap, AttendanceStatus};

/// The three day counts derived from one attendance snapshot.
///
/// The counts are not mutually exclusive: absent and double-shift days are
/// working days too, so they are also included in `total_days`. By
/// construction `absent_days + double_days <= total_days` holds for any
/// summary produced by [`aggregate_attendance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceSummary {
    /// Count of days with status other than holiday.
    pub total_days: u32,
    /// Count of days with status absent.
    pub absent_days: u32,
    /// Count of days with status double.
    pub double_days: u32,
}

/// Aggregates an attendance snapshot into its three day counts.
///
/// The counts are three independent scans over the same snapshot. Present
/// days are never counted here; the salary calculation recovers them by
/// subtraction.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::aggregate_attendance;
/// use attendance_engine::models::{AttendanceMap, AttendanceStatus};
/// use chrono::NaiveDate;
///
/// let mut attendance = AttendanceMap::new();
/// attendance.insert(
///     NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
///     AttendanceStatus::Present,
/// );
/// attendance.insert(
///     NaiveDate::from_ymd_opt(2026, 8, 4).unwrap(),
///     AttendanceStatus::Holiday,
/// );
///
/// let summary = aggregate_attendance(&attendance);
/// assert_eq!(summary.total_days, 1);
/// ```
pub fn aggregate_attendance(attendance: &AttendanceMap) -> AttendanceSummary {
    let total_days = attendance
        .values()
        .filter(|status| status.is_working_day())
        .count() as u32;

    let absent_days = attendance
        .values()
        .filter(|&&status| status == AttendanceStatus::Absent)
        .count() as u32;

    let double_days = attendance
        .values()
        .filter(|&&status| status == AttendanceStatus::Double)
        .count() as u32;

    AttendanceSummary {
        total_days,
        absent_days,
        double_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_map(entries: &[(&str, AttendanceStatus)]) -> AttendanceMap {
        entries
            .iter()
            .map(|(date, status)| (make_date(date), *status))
            .collect()
    }

    /// AG-001: empty snapshot produces all-zero counts
    #[test]
    fn test_empty_snapshot() {
        let summary = aggregate_attendance(&AttendanceMap::new());
        assert_eq!(
            summary,
            AttendanceSummary {
                total_days: 0,
                absent_days: 0,
                double_days: 0,
            }
        );
    }

    /// AG-002: holidays are excluded from every count
    #[test]
    fn test_all_holiday_snapshot() {
        let attendance = make_map(&[
            ("2026-08-03", AttendanceStatus::Holiday),
            ("2026-08-04", AttendanceStatus::Holiday),
            ("2026-08-05", AttendanceStatus::Holiday),
        ]);

        let summary = aggregate_attendance(&attendance);
        assert_eq!(summary.total_days, 0);
        assert_eq!(summary.absent_days, 0);
        assert_eq!(summary.double_days, 0);
    }

    /// AG-003: mixed snapshot matches three independent filters
    #[test]
    fn test_mixed_snapshot() {
        let attendance = make_map(&[
            ("2026-08-03", AttendanceStatus::Present),
            ("2026-08-04", AttendanceStatus::Present),
            ("2026-08-05", AttendanceStatus::Double),
            ("2026-08-06", AttendanceStatus::Absent),
            ("2026-08-07", AttendanceStatus::Present),
            ("2026-08-08", AttendanceStatus::Holiday),
            ("2026-08-09", AttendanceStatus::Double),
        ]);

        let summary = aggregate_attendance(&attendance);
        assert_eq!(summary.total_days, 6);
        assert_eq!(summary.absent_days, 1);
        assert_eq!(summary.double_days, 2);
    }

    /// AG-004: absent and double days are counted as working days too
    #[test]
    fn test_counts_are_not_mutually_exclusive() {
        let attendance = make_map(&[
            ("2026-08-03", AttendanceStatus::Absent),
            ("2026-08-04", AttendanceStatus::Double),
        ]);

        let summary = aggregate_attendance(&attendance);
        assert_eq!(summary.total_days, 2);
        assert_eq!(summary.absent_days, 1);
        assert_eq!(summary.double_days, 1);
    }

    #[test]
    fn test_summary_upholds_count_consistency() {
        let attendance = make_map(&[
            ("2026-08-03", AttendanceStatus::Absent),
            ("2026-08-04", AttendanceStatus::Double),
            ("2026-08-05", AttendanceStatus::Present),
            ("2026-08-06", AttendanceStatus::Holiday),
        ]);

        let summary = aggregate_attendance(&attendance);
        assert!(summary.absent_days + summary.double_days <= summary.total_days);
    }
}
