use anyhow::Context;
use chrono::{NaiveDate, NaiveTime};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::model::attendance::{AttendanceRecord, UserLog};

/// Loads the attendance log, one record per line:
///
/// ```text
/// user_id,YYYY-MM-DD,HH:MM:SS,HH:MM:SS
/// ```
///
/// Lines that do not parse are skipped with a debug note; an unreadable
/// file is an error. Called once per request, no caching.
pub fn get_data(path: &Path) -> anyhow::Result<UserLog> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read attendance log {}", path.display()))?;

    let mut log = UserLog::new();
    for (i, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Some((user_id, date, record)) => {
                log.entry(user_id).or_default().insert(date, record);
            }
            None => debug!(line = i + 1, "problem with attendance log line"),
        }
    }
    Ok(log)
}

fn parse_line(line: &str) -> Option<(u64, NaiveDate, AttendanceRecord)> {
    let fields: Vec<&str> = line.split(',').collect();
    let [user_id, date, start, end] = fields.as_slice() else {
        return None;
    };
    Some((
        user_id.trim().parse().ok()?,
        NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?,
        AttendanceRecord {
            start: NaiveTime::parse_from_str(start.trim(), "%H:%M:%S").ok()?,
            end: NaiveTime::parse_from_str(end.trim(), "%H:%M:%S").ok()?,
        },
    ))
}
