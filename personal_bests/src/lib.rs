//! # Personal bests
//!
//! Longest run and fastest efforts over milestone distances.
//!
//! Activities don't carry split times, so a milestone effort is a whole run
//! whose distance is close to the milestone:
//!
//! ```notrust
//! 0.98 * distance <= run distance <= max distance
//! ```
//!
//! Where max distance is `1.25 * distance` unless milestone sets its own limit.

use activity::{ActivityRecord, filter_runs, first_max_by, first_min_by};

/// Lower tolerance for GPS distance error
const MIN_DISTANCE_RATIO: f64 = 0.98;
const MAX_DISTANCE_RATIO: f64 = 1.25;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Milestone {
    pub label: &'static str,
    pub distance_meters: f64,
    /// Upper bound for matching runs. Defaults to `1.25 * distance_meters`
    pub max_distance_meters: Option<f64>,
}

impl Milestone {
    pub const FIVE_K: Self = Self::new("5K", 5000.0);
    pub const TEN_K: Self = Self::new("10K", 10_000.0);
    pub const HALF_MARATHON: Self =
        Self::new("Half Marathon", 21_097.5).set_max_distance(24_000.0);

    pub const DEFAULT: [Self; 3] = [Self::FIVE_K, Self::TEN_K, Self::HALF_MARATHON];

    pub const fn new(label: &'static str, distance_meters: f64) -> Self {
        Self {
            label,
            distance_meters,
            max_distance_meters: None,
        }
    }

    pub const fn set_max_distance(mut self, max_distance_meters: f64) -> Self {
        self.max_distance_meters = Some(max_distance_meters);
        self
    }

    pub fn matches(&self, distance_meters: f64) -> bool {
        let min = self.distance_meters * MIN_DISTANCE_RATIO;
        let max = self
            .max_distance_meters
            .unwrap_or(self.distance_meters * MAX_DISTANCE_RATIO);

        min <= distance_meters && distance_meters <= max
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BestKind {
    LongestRun,
    Fastest(Milestone),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PersonalBest<'a> {
    pub kind: BestKind,
    pub activity: &'a ActivityRecord,
}

impl PersonalBest<'_> {
    pub fn label(&self) -> String {
        match self.kind {
            BestKind::LongestRun => "Longest Run".to_string(),
            BestKind::Fastest(milestone) => format!("Fastest {}", milestone.label),
        }
    }
}

/// Run with greatest distance. First one wins on equal distance.
pub fn longest_run<'a>(
    activities: impl IntoIterator<Item = &'a ActivityRecord>,
) -> Option<&'a ActivityRecord> {
    first_max_by(filter_runs(activities), |this| this.distance_meters)
}

/// Run with shortest moving time among runs matching milestone. First one wins on equal time.
pub fn fastest_effort<'a>(
    activities: impl IntoIterator<Item = &'a ActivityRecord>,
    milestone: &Milestone,
) -> Option<&'a ActivityRecord> {
    first_min_by(
        filter_runs(activities)
            .into_iter()
            .filter(|this| milestone.matches(this.distance_meters)),
        |this| this.moving_time_seconds,
    )
}

/// Longest run followed by fastest effort for every milestone that has a matching run.
pub fn personal_bests<'a>(
    activities: &'a [ActivityRecord],
    milestones: &[Milestone],
) -> Vec<PersonalBest<'a>> {
    let longest = longest_run(activities).map(|activity| PersonalBest {
        kind: BestKind::LongestRun,
        activity,
    });

    let fastest = milestones.iter().filter_map(|milestone| {
        fastest_effort(activities, milestone).map(|activity| PersonalBest {
            kind: BestKind::Fastest(*milestone),
            activity,
        })
    });

    longest.into_iter().chain(fastest).collect()
}
