use time::{Duration, PrimitiveDateTime};

/// Period of whole weeks that ends at reference time, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookback {
    pub start: PrimitiveDateTime,
    pub end: PrimitiveDateTime,
}

impl Lookback {
    pub fn weeks_before(reference: PrimitiveDateTime, weeks: u32) -> Self {
        Self {
            start: reference.saturating_sub(Duration::weeks(i64::from(weeks))),
            end: reference,
        }
    }

    pub fn contains(&self, timestamp: PrimitiveDateTime) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }

    pub fn whole_weeks(&self) -> i64 {
        (self.end - self.start).whole_weeks()
    }
}
