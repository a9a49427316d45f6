use thiserror::Error;

/// Curve constants of every sub-score.
///
/// [`ScoringOptions::new`] returns the fixed curves used by [`score_runs`](crate::score_runs).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct ScoringOptions {
    /// Average speed which maps to zero pace score, m/s
    pub pace_floor_mps: f64,
    /// Speed above `pace_floor_mps` which maps to full pace score, m/s
    pub pace_span_mps: f64,
    /// Longest run distance for full endurance score, meters
    pub endurance_target_meters: f64,
    /// Lookback window of consistency score
    pub consistency_window_weeks: u32,
    /// Runs per active week for full consistency score
    pub consistency_target_runs_per_week: f64,
    /// Below this number of active weeks consistency score is penalized
    pub consistency_min_active_weeks: u32,
    /// Multiplier applied to penalized consistency score
    pub consistency_penalty: f64,
    /// Lookback window of progress score
    pub progress_window_weeks: u32,
    /// Progress score when there are no runs in progress window
    pub progress_inactive_score: u8,
    /// Progress score when recent speed equals all-time speed
    pub progress_base: f64,
    /// Points per relative speed improvement, e.g. `300` gives `+30` for `+10%`
    pub progress_gain: f64,
    /// Mean kudos for full social score
    pub social_target_kudos: f64,
    /// Elevation gain per kilometer for full elevation score
    pub elevation_target_meters_per_km: f64,
}

impl ScoringOptions {
    pub const fn new() -> Self {
        Self {
            pace_floor_mps: 2.0,
            pace_span_mps: 2.5,
            endurance_target_meters: 42195.0,
            consistency_window_weeks: 8,
            consistency_target_runs_per_week: 4.0,
            consistency_min_active_weeks: 4,
            consistency_penalty: 0.5,
            progress_window_weeks: 4,
            progress_inactive_score: 40,
            progress_base: 60.0,
            progress_gain: 300.0,
            social_target_kudos: 15.0,
            elevation_target_meters_per_km: 15.0,
        }
    }

    pub const fn set_pace_curve(mut self, floor_mps: f64, span_mps: f64) -> Self {
        self.pace_floor_mps = floor_mps;
        self.pace_span_mps = span_mps;
        self
    }

    pub const fn set_endurance_target(mut self, meters: f64) -> Self {
        self.endurance_target_meters = meters;
        self
    }

    pub const fn set_consistency_window(mut self, weeks: u32) -> Self {
        self.consistency_window_weeks = weeks;
        self
    }

    pub const fn set_consistency_target(mut self, runs_per_week: f64) -> Self {
        self.consistency_target_runs_per_week = runs_per_week;
        self
    }

    pub const fn set_consistency_penalty(mut self, min_active_weeks: u32, penalty: f64) -> Self {
        self.consistency_min_active_weeks = min_active_weeks;
        self.consistency_penalty = penalty;
        self
    }

    pub const fn set_progress_window(mut self, weeks: u32) -> Self {
        self.progress_window_weeks = weeks;
        self
    }

    pub const fn set_progress_curve(mut self, base: f64, gain: f64, inactive_score: u8) -> Self {
        self.progress_base = base;
        self.progress_gain = gain;
        self.progress_inactive_score = inactive_score;
        self
    }

    pub const fn set_social_target(mut self, kudos: f64) -> Self {
        self.social_target_kudos = kudos;
        self
    }

    pub const fn set_elevation_target(mut self, meters_per_km: f64) -> Self {
        self.elevation_target_meters_per_km = meters_per_km;
        self
    }

    /// Check that every curve is usable. Stops at first invalid value.
    pub fn validate(&self) -> Result<(), OptionsError> {
        for (name, value) in [
            ("pace_floor_mps", self.pace_floor_mps),
            ("progress_base", self.progress_base),
            ("progress_gain", self.progress_gain),
        ] {
            if !value.is_finite() {
                return Err(OptionsError::NotFinite { name, value });
            }
        }

        for (name, value) in [
            ("pace_span_mps", self.pace_span_mps),
            ("endurance_target_meters", self.endurance_target_meters),
            (
                "consistency_target_runs_per_week",
                self.consistency_target_runs_per_week,
            ),
            ("social_target_kudos", self.social_target_kudos),
            (
                "elevation_target_meters_per_km",
                self.elevation_target_meters_per_km,
            ),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(OptionsError::NotPositive { name, value });
            }
        }

        for (name, weeks) in [
            ("consistency_window_weeks", self.consistency_window_weeks),
            ("progress_window_weeks", self.progress_window_weeks),
        ] {
            if weeks == 0 {
                return Err(OptionsError::EmptyWindow { name });
            }
        }

        if !(0.0..=1.0).contains(&self.consistency_penalty) {
            return Err(OptionsError::PenaltyOutOfRange(self.consistency_penalty));
        }

        if !(crate::MIN_SCORE..=crate::MAX_SCORE).contains(&self.progress_inactive_score) {
            return Err(OptionsError::ScoreOutOfRange {
                name: "progress_inactive_score",
                value: self.progress_inactive_score,
            });
        }

        Ok(())
    }
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionsError {
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("{name} must be a positive number, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("{name} must span at least one week")]
    EmptyWindow { name: &'static str },

    #[error("consistency_penalty must be within 0..=1, got {0}")]
    PenaltyOutOfRange(f64),

    #[error("{name} must be within 1..=100, got {value}")]
    ScoreOutOfRange { name: &'static str, value: u8 },
}
