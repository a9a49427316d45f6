//! # Activity
//!
//! Exercise activity records as reported by a tracking provider,
//! plus small helpers shared by the scoring and statistics crates.
//!
//! Start times are kept as [`PrimitiveDateTime`], i.e. local wall-clock time
//! without an offset. Providers report `start_date_local` with a trailing `Z`
//! even though the value is not UTC, so the suffix is dropped, not applied.

mod error;
mod format;
mod kind;
mod parse;
mod reduce;
mod week;

pub use self::error::ActivityError;
pub use self::format::*;
pub use self::kind::ActivityType;
pub use self::parse::parse_local_start;
pub use self::reduce::{first_max_by, first_min_by};
pub use self::week::*;

use time::PrimitiveDateTime;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityRecord {
    pub id: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ActivityType,
    /// Local wall-clock start of the activity
    #[cfg_attr(
        feature = "serde",
        serde(rename = "start_date_local", with = "crate::parse::local_start")
    )]
    pub start_time: PrimitiveDateTime,
    #[cfg_attr(feature = "serde", serde(rename = "distance"))]
    pub distance_meters: f64,
    #[cfg_attr(feature = "serde", serde(rename = "moving_time"))]
    pub moving_time_seconds: f64,
    /// `0.0` when activity has no distance e.g. static workout
    #[cfg_attr(feature = "serde", serde(rename = "average_speed"))]
    pub average_speed_mps: f64,
    #[cfg_attr(feature = "serde", serde(rename = "total_elevation_gain"))]
    pub total_elevation_gain_meters: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kudos_count: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gear_id: Option<String>,
}

impl ActivityRecord {
    /// Record with all metrics set to zero
    pub fn new(id: u64, kind: ActivityType, start_time: PrimitiveDateTime) -> Self {
        Self {
            id,
            name: String::new(),
            kind,
            start_time,
            distance_meters: 0.0,
            moving_time_seconds: 0.0,
            average_speed_mps: 0.0,
            total_elevation_gain_meters: 0.0,
            kudos_count: 0,
            gear_id: None,
        }
    }

    pub fn run(id: u64, start_time: PrimitiveDateTime) -> Self {
        Self::new(id, ActivityType::Run, start_time)
    }

    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn set_distance(mut self, distance_meters: f64) -> Self {
        self.distance_meters = distance_meters;
        self
    }

    pub fn set_moving_time(mut self, moving_time_seconds: f64) -> Self {
        self.moving_time_seconds = moving_time_seconds;
        self
    }

    pub fn set_average_speed(mut self, average_speed_mps: f64) -> Self {
        self.average_speed_mps = average_speed_mps;
        self
    }

    pub fn set_elevation_gain(mut self, total_elevation_gain_meters: f64) -> Self {
        self.total_elevation_gain_meters = total_elevation_gain_meters;
        self
    }

    pub fn set_kudos(mut self, kudos_count: u32) -> Self {
        self.kudos_count = kudos_count;
        self
    }

    pub fn set_gear(mut self, gear_id: impl Into<String>) -> Self {
        self.gear_id = Some(gear_id.into());
        self
    }

    pub fn is_run(&self) -> bool {
        self.kind == ActivityType::Run
    }
}

/// Keeps only running activities in input order.
pub fn filter_runs<'a>(
    activities: impl IntoIterator<Item = &'a ActivityRecord>,
) -> Vec<&'a ActivityRecord> {
    activities
        .into_iter()
        .filter(|this| this.is_run())
        .collect()
}
