//! Tri-state field for JSON partial updates
//!
//! A partial update payload must preserve the wire-level difference between a
//! field that was omitted, a field explicitly set to `null`, and a field set
//! to a value. `Option<T>` alone cannot express all three.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Presence-tracked field of a partial update payload.
///
/// Use with `#[serde(default, skip_serializing_if = "Patch::is_absent")]` so
/// that `Absent` fields never appear in the serialized JSON, `Null` serializes
/// as `null`, and `Value` serializes as the value itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// Field was not part of the payload; leave the target untouched.
    #[default]
    Absent,
    /// Field was explicitly set to `null`; clear the target.
    Null,
    /// Field carries a replacement value.
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Absent fields are skipped via skip_serializing_if; if one is
            // serialized anyway it degrades to null rather than inventing a value.
            Patch::Absent | Patch::Null => serializer.serialize_none(),
            Patch::Value(v) => v.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // A missing field never reaches this point; serde's `default` yields
        // Absent. Anything that does arrive is either null or a value.
        Option::<T>::deserialize(deserializer).map(|opt| match opt {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        })
    }
}
