//! Bucketing of attendance intervals by day of the week.

use crate::model::attendance::DayRecords;
use crate::model::weekday::Weekday;
use crate::stats::time::seconds_since_midnight;

/// Which numeric sample to take from each attendance interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupBy {
    /// `end - start`, the presence duration in seconds.
    #[default]
    Duration,
    /// Start time as seconds since midnight.
    Start,
    /// End time as seconds since midnight.
    End,
}

/// Seven slots, Monday = 0 through Sunday = 6, each holding the samples
/// accumulated for that weekday. Weekdays absent from the input stay empty.
pub type WeekdayBucket = [Vec<i64>; 7];

/// Buckets every record by its date's weekday. No record is dropped, and
/// insertion order is irrelevant to the mean/sum consumers.
pub fn group_by_weekday(days: &DayRecords, group_by: GroupBy) -> WeekdayBucket {
    let mut buckets = WeekdayBucket::default();
    for (date, record) in days {
        let start = seconds_since_midnight(record.start);
        let end = seconds_since_midnight(record.end);
        let sample = match group_by {
            GroupBy::Duration => end - start,
            GroupBy::Start => start,
            GroupBy::End => end,
        };
        buckets[Weekday::from_date(*date).index()].push(sample);
    }
    buckets
}
