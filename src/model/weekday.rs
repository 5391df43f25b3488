use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Day of the week, Monday = 0 through Sunday = 6.
///
/// Rendered on the wire as the calendar abbreviation ("Mon".."Sun").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum Weekday {
    #[strum(serialize = "Mon")]
    #[serde(rename = "Mon")]
    Monday,
    #[strum(serialize = "Tue")]
    #[serde(rename = "Tue")]
    Tuesday,
    #[strum(serialize = "Wed")]
    #[serde(rename = "Wed")]
    Wednesday,
    #[strum(serialize = "Thu")]
    #[serde(rename = "Thu")]
    Thursday,
    #[strum(serialize = "Fri")]
    #[serde(rename = "Fri")]
    Friday,
    #[strum(serialize = "Sat")]
    #[serde(rename = "Sat")]
    Saturday,
    #[strum(serialize = "Sun")]
    #[serde(rename = "Sun")]
    Sunday,
}

impl Weekday {
    /// Monday through Friday, for reports restricted to the work week.
    pub const WORK_WEEK: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn from_date(date: NaiveDate) -> Self {
        match date.weekday() {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }

    /// Bucket index, 0 for Monday through 6 for Sunday.
    pub fn index(self) -> usize {
        self as usize
    }
}
