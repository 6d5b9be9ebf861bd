use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::constants::locales::INHERITANCE_MARKER;

/// A proposable value for one data point.
///
/// `Inherited` is a vote for "whatever the row inherits" and is kept apart from
/// any explicit string, including one that happens to equal the inherited value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CandidateValue {
    /// A concrete value typed or voted for.
    Explicit(String),
    /// Follow the inheritance chain.
    Inherited,
}

impl CandidateValue {
    /// Build an explicit value.
    pub fn explicit(value: impl Into<String>) -> Self {
        Self::Explicit(value.into())
    }

    /// Parse a boundary string, recognising the legacy inheritance marker.
    pub fn parse(raw: &str) -> Self {
        if raw == INHERITANCE_MARKER {
            Self::Inherited
        } else {
            Self::Explicit(raw.to_string())
        }
    }

    /// Returns `true` for the inheritance marker.
    pub fn is_inherited(&self) -> bool {
        matches!(self, Self::Inherited)
    }

    /// Explicit string, if any.
    pub fn as_explicit(&self) -> Option<&str> {
        match self {
            Self::Explicit(value) => Some(value),
            Self::Inherited => None,
        }
    }

    /// Boundary string form (the marker for `Inherited`).
    pub fn as_raw(&self) -> &str {
        match self {
            Self::Explicit(value) => value,
            Self::Inherited => INHERITANCE_MARKER,
        }
    }
}

impl fmt::Display for CandidateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_raw())
    }
}

impl From<&str> for CandidateValue {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl Serialize for CandidateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_raw())
    }
}

impl<'de> Deserialize<'de> for CandidateValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
