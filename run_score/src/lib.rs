//! # Run score
//!
//! Six sub-scores and one composite score for a runner's activity history.
//! Only activities of type [`ActivityType::Run`](activity::ActivityType::Run) take part.
//!
//! | Sub-score     | Input                                     | Full score at          |
//! |---------------|-------------------------------------------|------------------------|
//! | `pace`        | mean average speed                        | `4.5` m/s              |
//! | `endurance`   | longest run                               | `42195` m (marathon)   |
//! | `consistency` | runs per active week over last 8 weeks    | `4` runs per week      |
//! | `progress`    | last 4 weeks speed vs all-time speed      | `+13.3%` improvement   |
//! | `social`      | mean kudos                                | `15` kudos             |
//! | `elevation`   | total gain per total distance             | `15` m/km              |
//!
//! Every sub-score is rounded and clamped to `1..=100`, see [`clamp_score`].
//! The composite is computed from the rounded sub-scores:
//!
//! ```notrust
//! overall = round((pace + endurance + consistency + progress + social + elevation) / 6)
//! ```
//!
//! Rounding is half away from zero everywhere.
//!
//! Empty input (or input without runs) produces [`ScoreBreakdown::EMPTY`] where all values are `0`.

mod clamp;
mod options;
pub mod sub_scores;
mod window;

pub use self::clamp::*;
pub use self::options::*;
pub use self::window::*;
pub use activity::{WEEK_START, WeekKey, week_bucket_of};

use activity::{ActivityRecord, filter_runs};
use time::PrimitiveDateTime;
use tracing::debug;

/// Number of sub-scores that make up [`ScoreBreakdown::overall`]
pub const SUB_SCORES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    pub pace: u8,
    pub endurance: u8,
    pub consistency: u8,
    pub progress: u8,
    pub social: u8,
    pub elevation: u8,
    pub overall: u8,
}

impl ScoreBreakdown {
    /// Result for input without runs
    pub const EMPTY: Self = Self {
        pace: 0,
        endurance: 0,
        consistency: 0,
        progress: 0,
        social: 0,
        elevation: 0,
        overall: 0,
    };

    /// Build breakdown from sub-scores in order: pace, endurance, consistency, progress, social, elevation
    pub fn from_sub_scores(sub_scores: [u8; SUB_SCORES]) -> Self {
        let [pace, endurance, consistency, progress, social, elevation] = sub_scores;

        Self {
            pace,
            endurance,
            consistency,
            progress,
            social,
            elevation,
            overall: aggregate(sub_scores),
        }
    }

    pub const fn sub_scores(&self) -> [u8; SUB_SCORES] {
        [
            self.pace,
            self.endurance,
            self.consistency,
            self.progress,
            self.social,
            self.elevation,
        ]
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

/// Score activities with default curves.
///
/// Params:
/// - `activities` - activities of selected period, any type
/// - `reference` - local "now", end of consistency and progress windows
pub fn score_runs<'a>(
    activities: impl IntoIterator<Item = &'a ActivityRecord>,
    reference: PrimitiveDateTime,
) -> ScoreBreakdown {
    score_runs_with(activities, reference, &ScoringOptions::new())
}

/// Same as [`score_runs`] with custom curves.
pub fn score_runs_with<'a>(
    activities: impl IntoIterator<Item = &'a ActivityRecord>,
    reference: PrimitiveDateTime,
    options: &ScoringOptions,
) -> ScoreBreakdown {
    let runs = filter_runs(activities);

    if runs.is_empty() {
        debug!("no runs to score");
        return ScoreBreakdown::EMPTY;
    }

    // Shared by pace and progress
    let avg_speed = mean_speed(&runs);

    let breakdown = ScoreBreakdown::from_sub_scores([
        sub_scores::pace(avg_speed, options),
        sub_scores::endurance(&runs, options),
        sub_scores::consistency(&runs, reference, options),
        sub_scores::progress(&runs, reference, avg_speed, options),
        sub_scores::social(&runs, options),
        sub_scores::elevation(&runs, options),
    ]);

    debug!(
        runs = runs.len(),
        avg_speed,
        overall = breakdown.overall,
        "scored runs"
    );

    breakdown
}

/// Mean of average speed, m/s. `0.0` for empty input
pub fn mean_speed(runs: &[&ActivityRecord]) -> f64 {
    sub_scores::mean(runs, |this| this.average_speed_mps)
}

#[cfg(test)]
mod tests {
    use super::*;

    use activity::ActivityType;
    use time::{Duration, macros::datetime};

    const REFERENCE: PrimitiveDateTime = datetime!(2024-06-15 12:00:00);

    fn run(id: u64, days_ago: i64) -> ActivityRecord {
        ActivityRecord::run(id, REFERENCE - Duration::days(days_ago))
    }

    #[test]
    fn test_empty_input() {
        let breakdown = score_runs(&Vec::new(), REFERENCE);

        assert_eq!(breakdown, ScoreBreakdown::EMPTY);
        assert!(breakdown.is_empty());
    }

    #[test]
    fn test_no_runs_is_empty() {
        let activities = vec![
            ActivityRecord::new(1, ActivityType::Ride, REFERENCE).set_distance(40_000.0),
            ActivityRecord::new(2, ActivityType::Swim, REFERENCE).set_kudos(30),
        ];

        assert_eq!(score_runs(&activities, REFERENCE), ScoreBreakdown::EMPTY);
    }

    #[test]
    fn test_other_types_are_ignored() {
        let runs = vec![
            run(1, 1)
                .set_distance(10_000.0)
                .set_average_speed(3.0)
                .set_kudos(3),
        ];
        let mut mixed = runs.clone();
        mixed.push(
            ActivityRecord::new(2, ActivityType::Ride, REFERENCE)
                .set_distance(100_000.0)
                .set_average_speed(9.0)
                .set_kudos(50),
        );

        assert_eq!(score_runs(&runs, REFERENCE), score_runs(&mixed, REFERENCE));
    }

    #[test]
    fn test_single_recent_run() {
        // 3 m/s, 10 km, 50 m gain, 3 kudos, yesterday
        let activities = vec![
            run(1, 1)
                .set_distance(10_000.0)
                .set_moving_time(3333.0)
                .set_average_speed(3.0)
                .set_elevation_gain(50.0)
                .set_kudos(3),
        ];

        let breakdown = score_runs(&activities, REFERENCE);

        assert_eq!(breakdown.pace, 40);
        // 10000 / 42195 * 100 = 23.7
        assert_eq!(breakdown.endurance, 24);
        // 1 run in 1 week: 25, halved because less than 4 active weeks
        assert_eq!(breakdown.consistency, 13);
        // recent average equals all-time average
        assert_eq!(breakdown.progress, 60);
        assert_eq!(breakdown.social, 20);
        // 5 m/km
        assert_eq!(breakdown.elevation, 33);
        // (40 + 24 + 13 + 60 + 20 + 33) / 6 = 31.67
        assert_eq!(breakdown.overall, 32);
    }

    #[test]
    fn test_avg_speed_shared_by_pace_and_progress() {
        // all-time mean 3.0, last 4 weeks mean 3.3: +10%
        let activities = vec![
            run(1, 200).set_average_speed(2.7),
            run(2, 2).set_average_speed(3.3),
        ];

        let breakdown = score_runs(&activities, REFERENCE);

        assert_eq!(breakdown.pace, 40);
        assert_eq!(breakdown.progress, 90);
    }

    #[test]
    fn test_custom_options() {
        let activities = vec![run(1, 1).set_distance(21_097.5).set_average_speed(3.0)];
        let options = ScoringOptions::new().set_endurance_target(21_097.5);

        let breakdown = score_runs_with(&activities, REFERENCE, &options);

        assert_eq!(breakdown.endurance, 100);
        assert_eq!(score_runs(&activities, REFERENCE).endurance, 50);
    }

    #[test]
    fn test_accepts_borrowed_selection() {
        let activities = vec![run(1, 1).set_average_speed(3.0), run(2, 3)];
        let selection = activities.iter().filter(|this| this.id == 1).collect::<Vec<_>>();

        let breakdown = score_runs(selection, REFERENCE);

        assert_eq!(breakdown.pace, 40);
    }

    #[test]
    fn test_from_sub_scores_rounds_mean() {
        let breakdown = ScoreBreakdown::from_sub_scores([10, 20, 30, 40, 45, 50]);

        assert_eq!(breakdown.overall, 33);
        assert_eq!(breakdown.sub_scores(), [10, 20, 30, 40, 45, 50]);
    }

    #[test]
    fn test_mean_speed() {
        let activities = [
            run(1, 1).set_average_speed(2.0),
            run(2, 1).set_average_speed(4.0),
        ];
        let runs = activities.iter().collect::<Vec<_>>();

        assert_eq!(mean_speed(&runs), 3.0);
        assert_eq!(mean_speed(&[]), 0.0);
    }
}
