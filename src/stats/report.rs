//! Per-weekday report builders over one user's attendance history.
//!
//! Pure transformations of the per-request [`UserLog`] snapshot; the api
//! layer adapts the returned rows to JSON.

use derive_more::Display;
use strum::IntoEnumIterator;

use crate::model::attendance::UserLog;
use crate::model::weekday::Weekday;
use crate::stats::aggregate::{mean, sum};
use crate::stats::grouping::{GroupBy, group_by_weekday};
use crate::stats::time::format_clock;

/// The single error kind of the reporting core. All arithmetic is total.
#[derive(Debug, Display, PartialEq, Eq)]
pub enum ReportError {
    #[display(fmt = "user {} not found", _0)]
    UserNotFound(u64),
}

impl std::error::Error for ReportError {}

/// Mean presence duration in seconds per weekday, all 7 days.
/// A weekday without records reports 0.
pub fn mean_time_by_weekday(log: &UserLog, user_id: u64) -> Result<Vec<(Weekday, f64)>, ReportError> {
    let days = log.get(&user_id).ok_or(ReportError::UserNotFound(user_id))?;
    let buckets = group_by_weekday(days, GroupBy::Duration);
    Ok(Weekday::iter().map(|d| (d, mean(&buckets[d.index()]))).collect())
}

/// Total presence duration in seconds per weekday, all 7 days.
pub fn total_time_by_weekday(log: &UserLog, user_id: u64) -> Result<Vec<(Weekday, i64)>, ReportError> {
    let days = log.get(&user_id).ok_or(ReportError::UserNotFound(user_id))?;
    let buckets = group_by_weekday(days, GroupBy::Duration);
    Ok(Weekday::iter().map(|d| (d, sum(&buckets[d.index()]))).collect())
}

/// Rounded mean start and end clock times per work-week day (Mon-Fri),
/// rendered as `HH:MM:SS`.
pub fn start_end_by_weekday(
    log: &UserLog,
    user_id: u64,
) -> Result<Vec<(Weekday, String, String)>, ReportError> {
    let days = log.get(&user_id).ok_or(ReportError::UserNotFound(user_id))?;
    let starts = group_by_weekday(days, GroupBy::Start);
    let ends = group_by_weekday(days, GroupBy::End);
    Ok(Weekday::WORK_WEEK
        .iter()
        .map(|&d| {
            let i = d.index();
            (
                d,
                format_clock(mean(&starts[i]).round() as i64),
                format_clock(mean(&ends[i]).round() as i64),
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attendance::{AttendanceRecord, DayRecords};
    use chrono::{NaiveDate, NaiveTime};

    fn sample_log() -> UserLog {
        // User 1: two Mondays, 08:00-16:00 and 09:00-15:00.
        let days: DayRecords = [
            (
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                AttendanceRecord {
                    start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                    end: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
                },
            ),
            (
                NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
                AttendanceRecord {
                    start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                    end: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
                },
            ),
        ]
        .into_iter()
        .collect();

        UserLog::from([(1, days)])
    }

    #[test]
    fn mean_time_example() {
        let rows = mean_time_by_weekday(&sample_log(), 1).unwrap();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], (Weekday::Monday, 25_200.0));
        for (_, seconds) in &rows[1..] {
            assert_eq!(*seconds, 0.0);
        }
    }

    #[test]
    fn total_time_example() {
        let rows = total_time_by_weekday(&sample_log(), 1).unwrap();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], (Weekday::Monday, 50_400));
        for (_, seconds) in &rows[1..] {
            assert_eq!(*seconds, 0);
        }
    }

    #[test]
    fn start_end_covers_the_work_week() {
        let rows = start_end_by_weekday(&sample_log(), 1).unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(
            rows[0],
            (Weekday::Monday, "08:30:00".to_string(), "15:30:00".to_string())
        );
        // Weekdays without records average to midnight.
        assert_eq!(
            rows[1],
            (Weekday::Tuesday, "00:00:00".to_string(), "00:00:00".to_string())
        );
    }

    #[test]
    fn unknown_user_is_reported() {
        let log = sample_log();
        assert_eq!(
            mean_time_by_weekday(&log, 999).unwrap_err(),
            ReportError::UserNotFound(999)
        );
        assert_eq!(
            total_time_by_weekday(&log, 999).unwrap_err(),
            ReportError::UserNotFound(999)
        );
        assert_eq!(
            start_end_by_weekday(&log, 999).unwrap_err(),
            ReportError::UserNotFound(999)
        );
    }
}
