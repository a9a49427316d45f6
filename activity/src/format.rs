//! Human readable values for reports.

const METERS_IN_KILOMETER: f64 = 1000.0;

/// Seconds needed to cover one kilometer at given speed. `0.0` for a static activity
#[inline]
pub fn pace_seconds_per_km(speed_mps: f64) -> f64 {
    match speed_mps > 0.0 {
        true => METERS_IN_KILOMETER / speed_mps,
        false => 0.0,
    }
}

/// `H:MM:SS` when duration is at least one hour, `M:SS` otherwise
pub fn format_duration(seconds: f64) -> String {
    let total = whole_seconds(seconds);
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

    match hours > 0 {
        true => format!("{hours}:{minutes:02}:{seconds:02}"),
        false => format!("{minutes}:{seconds:02}"),
    }
}

pub fn format_distance(meters: f64) -> String {
    format!("{:.2} km", meters / METERS_IN_KILOMETER)
}

/// `M:SS/km`, or `-` when pace is unknown
pub fn format_pace(seconds_per_km: f64) -> String {
    if seconds_per_km == 0.0 || !seconds_per_km.is_finite() {
        return "-".to_string();
    }

    let total = whole_seconds(seconds_per_km);

    format!("{}:{:02}/km", total / 60, total % 60)
}

fn whole_seconds(seconds: f64) -> u64 {
    match seconds.is_finite() && seconds > 0.0 {
        // saturating float to int cast
        true => seconds.round() as u64,
        false => 0,
    }
}
