//! Strongly-typed identifier value objects.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier of a dialogue.
///
/// Seed corpora carry either numeric or string ids; both are normalized to
/// their string form on read and always written back as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DialogueId(String);

impl DialogueId {
    /// Creates a DialogueId from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derives the id of a generated dialogue from its batch position.
    ///
    /// Ids are `position * stride`, unique only within one batch. The product
    /// is taken in `u128`, so it never wraps for any position and stride.
    pub fn from_batch_position(position: usize, stride: u64) -> Self {
        Self((position as u128 * u128::from(stride)).to_string())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DialogueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for DialogueId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Integer(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Integer(n) => Self(n.to_string()),
            RawId::Unsigned(n) => Self(n.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_are_read_as_strings() {
        let id: DialogueId = serde_json::from_str("17").unwrap();
        assert_eq!(id.as_str(), "17");
    }

    #[test]
    fn string_ids_are_kept_verbatim() {
        let id: DialogueId = serde_json::from_str("\"dlg-0003\"").unwrap();
        assert_eq!(id.as_str(), "dlg-0003");
    }

    #[test]
    fn ids_serialize_as_strings() {
        let id = DialogueId::new("12");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"12\"");
    }

    #[test]
    fn batch_position_is_scaled_by_stride() {
        assert_eq!(DialogueId::from_batch_position(0, 1000).as_str(), "0");
        assert_eq!(DialogueId::from_batch_position(7, 1000).as_str(), "7000");
        assert_eq!(DialogueId::from_batch_position(3, 1).as_str(), "3");
    }

    #[test]
    fn huge_stride_does_not_wrap_into_earlier_ids() {
        let first = DialogueId::from_batch_position(1, u64::MAX);
        let second = DialogueId::from_batch_position(2, u64::MAX);
        assert_eq!(first.as_str(), u64::MAX.to_string());
        assert_eq!(second.as_str(), (u128::from(u64::MAX) * 2).to_string());
        assert_ne!(second, DialogueId::from_batch_position(0, u64::MAX));
    }
}
