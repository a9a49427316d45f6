use activity::ActivityRecord;
use tracing::trace;

use crate::{ScoringOptions, clamp_score};

const METERS_IN_KILOMETER: f64 = 1000.0;

/// Total elevation gain per kilometer of total distance, `15` m/km is hilly terrain
pub fn elevation(runs: &[&ActivityRecord], options: &ScoringOptions) -> u8 {
    let total_elevation = runs
        .iter()
        .map(|this| this.total_elevation_gain_meters)
        .sum::<f64>();
    let total_distance_km = runs.iter().map(|this| this.distance_meters).sum::<f64>()
        / METERS_IN_KILOMETER;

    let meters_per_km = match total_distance_km > 0.0 {
        true => total_elevation / total_distance_km,
        false => 0.0,
    };

    let raw = (meters_per_km / options.elevation_target_meters_per_km) * 100.0;

    trace!(total_elevation, total_distance_km, raw, "elevation");

    clamp_score(raw)
}
