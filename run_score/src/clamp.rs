use crate::SUB_SCORES;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 100;

/// Round half away from zero and clamp to `MIN_SCORE..=MAX_SCORE`.
///
/// `NaN` becomes [`MIN_SCORE`], infinities go to the nearest bound.
pub fn clamp_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return MIN_SCORE;
    }

    // in range after clamp so cast is exact
    raw.round()
        .clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE)) as u8
}

/// Composite score: rounded mean of already rounded sub-scores.
///
/// Sub-scores must be rounded before averaging, averaging raw values
/// gives different results on `.5` boundaries.
pub fn aggregate(sub_scores: [u8; SUB_SCORES]) -> u8 {
    let sum = sub_scores.iter().copied().map(u32::from).sum::<u32>();

    (f64::from(sum) / SUB_SCORES as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(-250.0, 1)]
    #[case(0.0, 1)]
    #[case(0.49, 1)]
    #[case(1.5, 2)]
    #[case(12.5, 13)]
    #[case(33.4, 33)]
    #[case(99.5, 100)]
    #[case(100.0, 100)]
    #[case(350.0, 100)]
    #[case(f64::NAN, 1)]
    #[case(f64::INFINITY, 100)]
    #[case(f64::NEG_INFINITY, 1)]
    fn test_clamp_score(#[case] raw: f64, #[case] expected: u8) {
        assert_eq!(clamp_score(raw), expected);
    }

    #[rstest]
    // 32.5 rounds away from zero, half to even would give 32
    #[case([10, 20, 30, 40, 45, 50], 33)]
    #[case([10, 20, 30, 40, 50, 51], 34)]
    #[case([1, 1, 1, 1, 1, 1], 1)]
    #[case([100, 100, 100, 100, 100, 100], 100)]
    // 33.33
    #[case([100, 100, 0, 0, 0, 0], 33)]
    fn test_aggregate(#[case] sub_scores: [u8; SUB_SCORES], #[case] expected: u8) {
        assert_eq!(aggregate(sub_scores), expected);
    }

    #[test]
    fn test_aggregate_uses_rounded_sub_scores() {
        // raw mean is 2.45 (2), mean of rounded values is 2.5 (3)
        let raw = [2.5, 2.5, 2.5, 2.4, 2.4, 2.4];
        let rounded = raw.map(clamp_score);

        assert_eq!(rounded, [3, 3, 3, 2, 2, 2]);
        assert_eq!(aggregate(rounded), 3);
    }
}
