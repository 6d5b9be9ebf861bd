use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::VettingError;

/// Ordinal importance tier of a data point.
///
/// Ordering follows the numeric value, so `Basic < Modern` holds and a page
/// requested at level `L` keeps only rows with `level <= L`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum CoverageLevel {
    /// Level not known yet.
    Undetermined,
    /// Minimal data every locale needs.
    Core,
    /// Basic level.
    Basic,
    /// Moderate level.
    Moderate,
    /// Modern level.
    Modern,
    /// Everything normally shown.
    #[default]
    Comprehensive,
    /// Shown only on request.
    Optional,
}

impl CoverageLevel {
    /// All levels in ascending order.
    pub const ALL: [CoverageLevel; 7] = [
        CoverageLevel::Undetermined,
        CoverageLevel::Core,
        CoverageLevel::Basic,
        CoverageLevel::Moderate,
        CoverageLevel::Modern,
        CoverageLevel::Comprehensive,
        CoverageLevel::Optional,
    ];

    /// Numeric coverage value reported to clients.
    pub const fn value(self) -> u8 {
        match self {
            CoverageLevel::Undetermined => 0,
            CoverageLevel::Core => 10,
            CoverageLevel::Basic => 40,
            CoverageLevel::Moderate => 60,
            CoverageLevel::Modern => 80,
            CoverageLevel::Comprehensive => 100,
            CoverageLevel::Optional => 101,
        }
    }

    /// Smallest level whose value is at least `value`.
    pub fn from_value(value: u8) -> Self {
        Self::ALL
            .into_iter()
            .find(|level| level.value() >= value)
            .unwrap_or(CoverageLevel::Optional)
    }

    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            CoverageLevel::Undetermined => "undetermined",
            CoverageLevel::Core => "core",
            CoverageLevel::Basic => "basic",
            CoverageLevel::Moderate => "moderate",
            CoverageLevel::Modern => "modern",
            CoverageLevel::Comprehensive => "comprehensive",
            CoverageLevel::Optional => "optional",
        }
    }
}

impl fmt::Display for CoverageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoverageLevel {
    type Err = VettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == lowered)
            .ok_or_else(|| VettingError::Configuration(format!("unknown coverage level '{s}'")))
    }
}
