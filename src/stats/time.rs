//! Time-of-day conversion between wall-clock values and seconds since midnight.

use chrono::{NaiveTime, Timelike};

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Integer encoding of a time-of-day; total ordering matches clock order.
pub fn seconds_since_midnight(t: NaiveTime) -> i64 {
    i64::from(t.hour()) * 3600 + i64::from(t.minute()) * 60 + i64::from(t.second())
}

/// Formats `seconds mod 86400` as zero-padded 24h `HH:MM:SS`.
///
/// Negative inputs wrap around midnight (Euclidean remainder), so averaged
/// values stay displayable even when the underlying data was malformed.
pub fn format_clock(seconds: i64) -> String {
    let s = seconds.rem_euclid(SECONDS_PER_DAY);
    format!("{:02}:{:02}:{:02}", s / 3600, s % 3600 / 60, s % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn midnight_is_zero() {
        assert_eq!(seconds_since_midnight(hms(0, 0, 0)), 0);
    }

    #[test]
    fn last_second_of_day() {
        assert_eq!(seconds_since_midnight(hms(23, 59, 59)), 86_399);
    }

    #[test]
    fn strictly_increasing_in_clock_order() {
        let samples = [
            hms(0, 0, 0),
            hms(0, 0, 1),
            hms(0, 1, 0),
            hms(1, 0, 0),
            hms(9, 39, 5),
            hms(17, 59, 52),
            hms(23, 59, 59),
        ];
        for pair in samples.windows(2) {
            assert!(seconds_since_midnight(pair[0]) < seconds_since_midnight(pair[1]));
        }
    }

    #[test]
    fn format_round_trips() {
        for t in [hms(0, 0, 0), hms(8, 30, 0), hms(17, 59, 52), hms(23, 59, 59)] {
            assert_eq!(
                format_clock(seconds_since_midnight(t)),
                t.format("%H:%M:%S").to_string()
            );
        }
    }

    #[test]
    fn format_wraps_out_of_range_values() {
        assert_eq!(format_clock(86_400), "00:00:00");
        assert_eq!(format_clock(-1), "23:59:59");
    }
}
