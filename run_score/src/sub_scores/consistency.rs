use std::collections::BTreeSet;

use activity::ActivityRecord;
use time::PrimitiveDateTime;
use tracing::trace;

use crate::{Lookback, ScoringOptions, clamp_score, week_bucket_of};

/// Runs per active calendar week over last 8 weeks, `4` runs per week gives `100`.
///
/// Score is halved when less than 4 weeks of the window had a run. Penalty only applies
/// when the window itself is at least 4 whole weeks long.
pub fn consistency(
    runs: &[&ActivityRecord],
    reference: PrimitiveDateTime,
    options: &ScoringOptions,
) -> u8 {
    let window = Lookback::weeks_before(reference, options.consistency_window_weeks);

    let recent = runs
        .iter()
        .filter(|this| window.contains(this.start_time))
        .collect::<Vec<_>>();

    let weeks_active = recent
        .iter()
        .map(|this| week_bucket_of(this.start_time))
        .collect::<BTreeSet<_>>()
        .len();

    let runs_per_active_week = recent.len() as f64 / weeks_active.max(1) as f64;
    let raw = (runs_per_active_week / options.consistency_target_runs_per_week) * 100.0;
    let score = clamp_score(raw);

    let min_active_weeks = options.consistency_min_active_weeks;
    let penalized = weeks_active < min_active_weeks as usize
        && window.whole_weeks() >= i64::from(min_active_weeks);

    trace!(
        recent = recent.len(),
        weeks_active,
        raw,
        penalized,
        "consistency"
    );

    match penalized {
        true => clamp_score(f64::from(score) * options.consistency_penalty),
        false => score,
    }
}
