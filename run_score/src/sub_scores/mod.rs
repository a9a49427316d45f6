//! Independent calculators, each reduces runs to one score in `1..=100`.
//!
//! All calculators expect non-empty input of runs only.

mod consistency;
mod elevation;
mod endurance;
mod pace;
mod progress;
mod social;

pub use self::consistency::consistency;
pub use self::elevation::elevation;
pub use self::endurance::endurance;
pub use self::pace::pace;
pub use self::progress::progress;
pub use self::social::social;

use activity::ActivityRecord;

pub(crate) fn mean(runs: &[&ActivityRecord], value: impl Fn(&ActivityRecord) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }

    runs.iter().map(|this| value(this)).sum::<f64>() / runs.len() as f64
}
