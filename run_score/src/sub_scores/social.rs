use activity::ActivityRecord;
use tracing::trace;

use crate::{ScoringOptions, clamp_score};

pub fn social(runs: &[&ActivityRecord], options: &ScoringOptions) -> u8 {
    let avg_kudos = super::mean(runs, |this| f64::from(this.kudos_count));
    let raw = (avg_kudos / options.social_target_kudos) * 100.0;

    trace!(avg_kudos, raw, "social");

    clamp_score(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use time::macros::datetime;

    #[rstest]
    #[case(&[15], 100)]
    #[case(&[0], 1)]
    #[case(&[0, 0, 0], 1)]
    #[case(&[10, 20], 100)]
    #[case(&[3, 6], 30)]
    #[case(&[1, 2], 10)]
    #[case(&[150], 100)]
    fn test_social(#[case] kudos: &[u32], #[case] expected: u8) {
        let activities = kudos
            .iter()
            .enumerate()
            .map(|(id, kudos)| {
                ActivityRecord::run(id as u64, datetime!(2024-06-01 07:00:00)).set_kudos(*kudos)
            })
            .collect::<Vec<_>>();
        let runs = activities.iter().collect::<Vec<_>>();

        assert_eq!(social(&runs, &ScoringOptions::new()), expected);
    }
}
