use time::{Date, Duration, PrimitiveDateTime, Weekday};

/// First day of every calendar week
pub const WEEK_START: Weekday = Weekday::Sunday;

/// Calendar week identified by its first day, see [`WEEK_START`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeekKey(Date);

impl WeekKey {
    pub const fn first_day(self) -> Date {
        self.0
    }
}

/// Calendar week of local timestamp. Only place where week start convention is defined.
pub fn week_bucket_of(timestamp: PrimitiveDateTime) -> WeekKey {
    week_of_date(timestamp.date())
}

pub fn week_of_date(date: Date) -> WeekKey {
    WeekKey(date.saturating_sub(Duration::days(i64::from(days_from_week_start(date)))))
}

/// Position of the day inside its week, `0` for [`WEEK_START`]
pub fn days_from_week_start(date: Date) -> u8 {
    (date.weekday().number_days_from_monday() + 7 - WEEK_START.number_days_from_monday()) % 7
}
