use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One day's presence interval for a user. The owning map key carries the
/// date. `start <= end` is not enforced; a reversed interval flows through
/// the reports as a negative duration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// One user's attendance history, keyed by calendar date.
pub type DayRecords = BTreeMap<NaiveDate, AttendanceRecord>;

/// Read-only snapshot of the attendance log, keyed by user id.
/// Re-loaded from disk on every request.
pub type UserLog = BTreeMap<u64, DayRecords>;
