use activity::ActivityRecord;
use time::PrimitiveDateTime;
use tracing::trace;

use crate::{Lookback, ScoringOptions, clamp_score, mean_speed};

/// Mean speed of last 4 weeks compared to all-time mean speed.
///
/// Same speed gives `60`, `+10%` gives `90`, `-20%` and worse gives minimum.
/// Without runs in last 4 weeks score is `40`.
pub fn progress(
    runs: &[&ActivityRecord],
    reference: PrimitiveDateTime,
    avg_speed: f64,
    options: &ScoringOptions,
) -> u8 {
    let window = Lookback::weeks_before(reference, options.progress_window_weeks);

    let recent = runs
        .iter()
        .copied()
        .filter(|this| window.contains(this.start_time))
        .collect::<Vec<_>>();

    if recent.is_empty() {
        trace!("progress: no recent runs");
        return options.progress_inactive_score;
    }

    let recent_avg_speed = mean_speed(&recent);

    let improvement = match avg_speed == 0.0 {
        true => 0.0,
        false => (recent_avg_speed - avg_speed) / avg_speed,
    };

    let raw = options.progress_base + improvement * options.progress_gain;

    trace!(recent_avg_speed, avg_speed, improvement, raw, "progress");

    clamp_score(raw)
}
