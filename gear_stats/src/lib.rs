//! # Gear stats
//!
//! Usage of every pair of shoes: number of runs, total distance and average pace.

use std::collections::HashMap;

use activity::{ActivityRecord, pace_seconds_per_km};

pub const UNKNOWN_GEAR: &str = "Unknown Gear";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gear {
    pub id: String,
    pub name: String,
}

/// Serialized with derived `average_speed_mps` and `average_pace_seconds_per_km` instead of running sums
#[derive(Debug, Clone, PartialEq)]
pub struct GearUsage {
    pub id: String,
    pub name: String,
    pub runs: usize,
    pub total_distance_meters: f64,
    /// Sum of average speed of every run, m/s
    total_speed_mps: f64,
}

impl GearUsage {
    fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            runs: 0,
            total_distance_meters: 0.0,
            total_speed_mps: 0.0,
        }
    }

    pub fn distance_km(&self) -> f64 {
        self.total_distance_meters / 1000.0
    }

    /// Mean of average speed of runs, `0.0` when gear wasn't used
    pub fn average_speed_mps(&self) -> f64 {
        match self.runs {
            0 => 0.0,
            runs => self.total_speed_mps / runs as f64,
        }
    }

    /// `0.0` when gear wasn't used
    pub fn average_pace_seconds_per_km(&self) -> f64 {
        pace_seconds_per_km(self.average_speed_mps())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GearUsage {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("GearUsage", 6)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("runs", &self.runs)?;
        state.serialize_field("total_distance_meters", &self.total_distance_meters)?;
        state.serialize_field("average_speed_mps", &self.average_speed_mps())?;
        state.serialize_field(
            "average_pace_seconds_per_km",
            &self.average_pace_seconds_per_km(),
        )?;
        state.end()
    }
}

/// Aggregate runs by gear.
///
/// Gear from `inventory` keeps its name, gear used by runs but missing in inventory
/// is named [`UNKNOWN_GEAR`]. Result contains only gear with at least one run,
/// sorted by total distance in descending order.
pub fn gear_stats<'a>(
    activities: impl IntoIterator<Item = &'a ActivityRecord>,
    inventory: &[Gear],
) -> Vec<GearUsage> {
    let mut usage = inventory
        .iter()
        .map(|Gear { id, name }| (id.as_str(), GearUsage::new(id.clone(), name.clone())))
        .collect::<HashMap<_, _>>();

    for activity in activities.into_iter().filter(|this| this.is_run()) {
        let Some(gear_id) = activity.gear_id.as_deref() else {
            continue;
        };

        let entry = usage.entry(gear_id).or_insert_with(|| {
            GearUsage::new(gear_id.to_string(), UNKNOWN_GEAR.to_string())
        });

        entry.runs += 1;
        entry.total_distance_meters += activity.distance_meters;
        entry.total_speed_mps += activity.average_speed_mps;
    }

    let mut result = usage
        .into_values()
        .filter(|this| this.runs > 0)
        .collect::<Vec<_>>();

    // id as tie breaker, HashMap order is random
    result.sort_by(|a, b| {
        b.total_distance_meters
            .total_cmp(&a.total_distance_meters)
            .then_with(|| a.id.cmp(&b.id))
    });

    result
}
