use activity::{ActivityRecord, first_max_by};
use tracing::trace;

use crate::{ScoringOptions, clamp_score};

/// Longest run relative to marathon distance.
///
/// A `NaN` distance makes the whole score `NaN`, which clamps to minimum, same as [`elevation`](super::elevation).
pub fn endurance(runs: &[&ActivityRecord], options: &ScoringOptions) -> u8 {
    let max_distance = match runs.iter().any(|this| this.distance_meters.is_nan()) {
        true => f64::NAN,
        false => first_max_by(runs.iter(), |this| this.distance_meters)
            .map(|this| this.distance_meters)
            .unwrap_or_default(),
    };

    let raw = (max_distance / options.endurance_target_meters) * 100.0;

    trace!(max_distance, raw, "endurance");

    clamp_score(raw)
}
