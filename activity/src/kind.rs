/// Activity category as named by the provider.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum ActivityType {
    Run,
    Ride,
    Swim,
    Walk,
    WeightTraining,
    Workout,
    /// Any category without a dedicated variant
    Other(String),
}

impl ActivityType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Run => "Run",
            Self::Ride => "Ride",
            Self::Swim => "Swim",
            Self::Walk => "Walk",
            Self::WeightTraining => "WeightTraining",
            Self::Workout => "Workout",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for ActivityType {
    fn from(value: &str) -> Self {
        match value {
            "Run" => Self::Run,
            "Ride" => Self::Ride,
            "Swim" => Self::Swim,
            "Walk" => Self::Walk,
            "WeightTraining" => Self::WeightTraining,
            "Workout" => Self::Workout,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ActivityType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<ActivityType> for String {
    fn from(value: ActivityType) -> Self {
        match value {
            ActivityType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
