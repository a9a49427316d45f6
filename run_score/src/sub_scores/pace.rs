use tracing::trace;

use crate::{ScoringOptions, clamp_score};

/// Linear map of mean speed: `2.0` m/s and slower gives minimum, `4.5` m/s and faster gives `100`.
///
/// `avg_speed` is all-time mean speed shared with [`progress`](super::progress).
pub fn pace(avg_speed: f64, options: &ScoringOptions) -> u8 {
    let raw = ((avg_speed - options.pace_floor_mps) / options.pace_span_mps) * 100.0;

    trace!(avg_speed, raw, "pace");

    clamp_score(raw)
}
