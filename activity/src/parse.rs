use time::{
    PrimitiveDateTime,
    format_description::BorrowedFormatItem,
    macros::format_description,
};

use crate::ActivityError;

const LOCAL_START_INPUT: &[BorrowedFormatItem<'_>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
);

#[cfg_attr(not(feature = "serde"), allow(dead_code))]
const LOCAL_START_OUTPUT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Parse provider's `start_date_local` value e.g. `2024-05-04T07:00:00Z`.
///
/// The trailing `Z` is discarded: the value is local wall-clock time.
pub fn parse_local_start(input: &str) -> Result<PrimitiveDateTime, ActivityError> {
    let trimmed = input.trim();
    let local = trimmed.strip_suffix('Z').unwrap_or(trimmed);

    PrimitiveDateTime::parse(local, LOCAL_START_INPUT).map_err(|source| {
        ActivityError::InvalidTimestamp {
            input: input.to_string(),
            source,
        }
    })
}

#[cfg(feature = "serde")]
pub(crate) mod local_start {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::PrimitiveDateTime;

    pub fn serialize<S: Serializer>(
        value: &PrimitiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let text = value
            .format(super::LOCAL_START_OUTPUT)
            .map_err(serde::ser::Error::custom)?;

        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<PrimitiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;

        super::parse_local_start(&text).map_err(serde::de::Error::custom)
    }
}
