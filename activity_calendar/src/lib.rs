//! # Activity calendar
//!
//! Year selection and day-by-day layout of a yearly activity heatmap.
//!
//! The grid has one column per calendar week and one row per weekday,
//! weeks start on [`WEEK_START`](activity::WEEK_START), same as run score buckets.

use std::collections::{BTreeMap, BTreeSet};

use activity::{ActivityRecord, ActivityType, days_from_week_start, week_of_date};
use time::{Date, Duration, Month, error::ComponentRange};

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Years with at least one activity plus current year, newest first
pub fn available_years<'a>(
    activities: impl IntoIterator<Item = &'a ActivityRecord>,
    current_year: i32,
) -> Vec<i32> {
    activities
        .into_iter()
        .map(|this| this.start_time.year())
        .chain([current_year])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .collect()
}

/// Activities which started in given year by local time
pub fn in_year<'a>(
    activities: impl IntoIterator<Item = &'a ActivityRecord>,
    year: i32,
) -> Vec<&'a ActivityRecord> {
    activities
        .into_iter()
        .filter(|this| this.start_time.year() == year)
        .collect()
}

/// Activities grouped by local start date, input order kept inside a day
pub fn daily_activities<'a>(
    activities: impl IntoIterator<Item = &'a ActivityRecord>,
) -> BTreeMap<Date, Vec<&'a ActivityRecord>> {
    activities
        .into_iter()
        .fold(BTreeMap::new(), |mut days, this| {
            days.entry(this.start_time.date())
                .or_insert_with(Vec::new)
                .push(this);
            days
        })
}

/// Distinct activity types of every day, used to color a cell
pub fn daily_kinds<'a>(
    activities: impl IntoIterator<Item = &'a ActivityRecord>,
) -> BTreeMap<Date, BTreeSet<&'a ActivityType>> {
    daily_activities(activities)
        .into_iter()
        .map(|(date, day)| (date, day.into_iter().map(|this| &this.kind).collect()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonthLabel {
    pub month: Month,
    /// Column of the week which contains first day of month
    pub week_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct YearGrid {
    pub year: i32,
    /// First day of every week column. First and last week may start or end in neighbour years
    pub week_starts: Vec<Date>,
    /// Empty cells before January 1st in the first column
    pub leading_blank_days: u8,
    pub month_labels: Vec<MonthLabel>,
}

impl YearGrid {
    pub fn new(year: i32) -> Result<Self, ComponentRange> {
        let first_day = Date::from_calendar_date(year, Month::January, 1)?;
        let last_day = Date::from_calendar_date(year, Month::December, 31)?;

        let first_week = week_of_date(first_day).first_day();
        let last_week = week_of_date(last_day).first_day();

        let week_starts = std::iter::successors(Some(first_week), |this| {
            this.checked_add(Duration::WEEK)
        })
        .take_while(|this| *this <= last_week)
        .collect();

        let month_labels = MONTHS
            .into_iter()
            .map(|month| {
                let first_of_month = Date::from_calendar_date(year, month, 1)?;
                let offset = week_of_date(first_of_month).first_day() - first_week;

                Ok(MonthLabel {
                    month,
                    week_index: offset.whole_weeks() as usize,
                })
            })
            .collect::<Result<Vec<_>, ComponentRange>>()?;

        Ok(Self {
            year,
            week_starts,
            leading_blank_days: days_from_week_start(first_day),
            month_labels,
        })
    }

    /// Every day of the year in order
    pub fn days(&self) -> impl Iterator<Item = Date> + '_ {
        let first_day = self
            .week_starts
            .first()
            .map(|this| *this + Duration::days(i64::from(self.leading_blank_days)));

        std::iter::successors(first_day, |this| this.next_day())
            .take_while(|this| this.year() == self.year)
    }

    /// Column and row of a day, `None` for day of another year
    pub fn cell_of(&self, date: Date) -> Option<(usize, u8)> {
        let first_week = *self.week_starts.first()?;

        if date.year() != self.year {
            return None;
        }

        let column = (week_of_date(date).first_day() - first_week).whole_weeks() as usize;

        Some((column, days_from_week_start(date)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use time::{
        PrimitiveDateTime,
        macros::{date, datetime},
    };

    fn activity(id: u64, kind: ActivityType, start: PrimitiveDateTime) -> ActivityRecord {
        ActivityRecord::new(id, kind, start)
    }

    #[test]
    fn test_available_years() {
        let activities = vec![
            activity(1, ActivityType::Run, datetime!(2022-03-01 07:00:00)),
            activity(2, ActivityType::Ride, datetime!(2024-03-01 07:00:00)),
            activity(3, ActivityType::Run, datetime!(2022-12-31 23:30:00)),
        ];

        assert_eq!(available_years(&activities, 2025), vec![2025, 2024, 2022]);
        assert_eq!(available_years(&activities, 2024), vec![2024, 2022]);
        assert_eq!(available_years(&Vec::new(), 2025), vec![2025]);
    }

    #[test]
    fn test_in_year_uses_local_time() {
        let activities = vec![
            activity(1, ActivityType::Run, datetime!(2023-12-31 23:30:00)),
            activity(2, ActivityType::Run, datetime!(2024-01-01 00:15:00)),
        ];

        let ids = in_year(&activities, 2024)
            .into_iter()
            .map(|this| this.id)
            .collect::<Vec<_>>();

        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_daily_activities() {
        let activities = vec![
            activity(1, ActivityType::Run, datetime!(2024-03-01 07:00:00)),
            activity(2, ActivityType::Ride, datetime!(2024-03-02 07:00:00)),
            activity(3, ActivityType::Walk, datetime!(2024-03-01 19:00:00)),
        ];

        let days = daily_activities(&activities);

        assert_eq!(days.len(), 2);
        assert_eq!(
            days[&date!(2024-03-01)]
                .iter()
                .map(|this| this.id)
                .collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn test_daily_kinds_unique() {
        let activities = vec![
            activity(1, ActivityType::Run, datetime!(2024-03-01 07:00:00)),
            activity(2, ActivityType::Run, datetime!(2024-03-01 18:00:00)),
            activity(3, ActivityType::Swim, datetime!(2024-03-01 19:00:00)),
        ];

        let kinds = daily_kinds(&activities);

        assert_eq!(
            kinds[&date!(2024-03-01)].iter().copied().cloned().collect::<Vec<_>>(),
            vec![ActivityType::Run, ActivityType::Swim]
        );
    }

    #[rstest]
    // starts on Monday
    #[case(2024, date!(2023-12-31), 1, 53)]
    // starts on Sunday
    #[case(2023, date!(2023-01-01), 0, 53)]
    // starts on Wednesday, ends on Thursday
    #[case(2025, date!(2024-12-29), 3, 53)]
    fn test_year_grid_shape(
        #[case] year: i32,
        #[case] first_week: Date,
        #[case] leading_blank_days: u8,
        #[case] columns: usize,
    ) {
        let grid = YearGrid::new(year).unwrap();

        assert_eq!(grid.week_starts[0], first_week);
        assert_eq!(grid.leading_blank_days, leading_blank_days);
        assert_eq!(grid.week_starts.len(), columns);
    }

    #[test]
    fn test_month_labels() {
        let grid = YearGrid::new(2024).unwrap();

        assert_eq!(grid.month_labels.len(), 12);
        assert_eq!(
            grid.month_labels[0],
            MonthLabel {
                month: Month::January,
                week_index: 0
            }
        );
        assert_eq!(grid.month_labels[1].week_index, 4);
        assert_eq!(grid.month_labels[2].week_index, 8);
        assert_eq!(grid.month_labels[11].week_index, 48);
    }

    #[test]
    fn test_days() {
        let grid = YearGrid::new(2024).unwrap();
        let days = grid.days().collect::<Vec<_>>();

        assert_eq!(days.len(), 366);
        assert_eq!(days.first(), Some(&date!(2024-01-01)));
        assert_eq!(days.last(), Some(&date!(2024-12-31)));
    }

    #[test]
    fn test_cell_of() {
        let grid = YearGrid::new(2024).unwrap();

        assert_eq!(grid.cell_of(date!(2024-01-01)), Some((0, 1)));
        // Saturday
        assert_eq!(grid.cell_of(date!(2024-06-15)), Some((23, 6)));
        assert_eq!(grid.cell_of(date!(2024-12-31)), Some((52, 2)));
        assert_eq!(grid.cell_of(date!(2023-12-31)), None);
    }
}
