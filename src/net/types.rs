//! Wire DTOs for the activities REST backend.
//!
//! DESIGN
//! ======
//! The activity listing is a JSON object keyed by activity name. Display order
//! is the order the server wrote the keys in, so [`ActivityCollection`]
//! deserializes the object as an ordered list of pairs instead of a hash map.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A signup-able activity as returned by `GET /activities`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-text description shown on the card.
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub description: String,
    /// Human-readable schedule line (e.g. `"Mondays, 3:30 PM"`).
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub schedule: String,
    /// Declared capacity, if the server provides a usable one. Integral floats
    /// (`12.0`) are accepted; anything else reads as undeclared.
    #[serde(default, deserialize_with = "deserialize_capacity")]
    pub max_participants: Option<u32>,
    /// Registered participant emails in server order.
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub participants: Vec<String>,
}

/// Every activity known to the server, in server iteration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityCollection {
    entries: Vec<(String, Activity)>,
}

impl ActivityCollection {
    /// Build a collection from `(name, activity)` pairs, keeping their order.
    #[must_use]
    pub fn from_entries(entries: Vec<(String, Activity)>) -> Self {
        Self { entries }
    }

    /// Iterate activities in server order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(name, activity)| (name.as_str(), activity))
    }

    /// Look up one activity by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, activity)| activity)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for ActivityCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = ActivityCollection;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping activity names to activities")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut entries: Vec<(String, Activity)> = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    // Duplicate keys: last one wins, first position is kept.
                    if let Some(slot) = entries.iter_mut().find(|(existing, _)| *existing == name) {
                        slot.1 = activity;
                    } else {
                        entries.push((name, activity));
                    }
                }
                Ok(ActivityCollection { entries })
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}

/// Success payload of the signup and unregister endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error payload on non-success responses (`{"detail": "..."}`).
///
/// `detail` is only honoured when it is a plain string; validation errors that
/// carry structured detail fall back to the transport status text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "deserialize_string_or_none")]
    pub detail: Option<String>,
}

/// JSON body of `DELETE /activities/{name}/unregister`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UnregisterBody<'a> {
    pub email: &'a str,
}

fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_capacity<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Number(number) = value else {
        return Ok(None);
    };
    if let Some(int) = number.as_u64() {
        return Ok(u32::try_from(int).ok());
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let capacity = number
        .as_f64()
        .filter(|float| float.is_finite() && float.fract() == 0.0 && *float >= 0.0 && *float <= f64::from(u32::MAX))
        .map(|float| float as u32);
    Ok(capacity)
}

fn deserialize_string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(text) if !text.is_empty() => Some(text),
        _ => None,
    })
}
