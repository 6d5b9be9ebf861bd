use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::constants::{DEFAULT_EXCLUDED_PATH_PATTERNS, DEFAULT_PAGE_CACHE_TTL_SECS};
use crate::coverage::CoverageLevel;
use crate::errors::VettingError;

/// Page assembly configuration.
///
/// Built once at startup and shared read-only through `VettingContext`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    /// Record a provenance trail (`inherited+votes+winning`) on every item.
    pub candidate_history: bool,
    /// Detect and log data inconsistencies after each row is populated.
    pub consistency_checks: bool,
    /// Maximum coverage level used when a request does not name one.
    pub default_max_coverage: CoverageLevel,
    /// Regex patterns of paths that are never shown.
    pub excluded_path_patterns: Vec<String>,
    /// Finding subtypes dropped before findings are attached to items.
    pub excluded_check_subtypes: Vec<String>,
    /// Zone ids used when completing zone pages.
    pub zone_ids: Vec<String>,
    /// Metazone ids per continent used when completing metazone pages.
    pub metazones_by_continent: BTreeMap<String, Vec<String>>,
    /// Lifetime of cached pages in seconds (0 disables caching).
    pub page_cache_ttl_secs: u64,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            candidate_history: false,
            consistency_checks: false,
            default_max_coverage: CoverageLevel::Comprehensive,
            excluded_path_patterns: DEFAULT_EXCLUDED_PATH_PATTERNS
                .iter()
                .map(|pattern| pattern.to_string())
                .collect(),
            excluded_check_subtypes: Vec::new(),
            zone_ids: Vec::new(),
            metazones_by_continent: BTreeMap::new(),
            page_cache_ttl_secs: DEFAULT_PAGE_CACHE_TTL_SECS,
        }
    }
}

impl AssemblyConfig {
    /// Parse a JSON document; absent fields keep their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, VettingError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read and parse a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, VettingError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Compile the excluded-path patterns.
    pub fn path_filter(&self) -> Result<PathFilter, VettingError> {
        PathFilter::new(&self.excluded_path_patterns)
    }
}

/// Compiled always-excluded path patterns.
#[derive(Clone, Debug, Default)]
pub struct PathFilter {
    patterns: Vec<Regex>,
}

impl PathFilter {
    /// Compile `patterns`; an invalid pattern is a configuration error.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, VettingError> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                // Anchor at both ends so a pattern must match the whole path.
                Regex::new(&format!("^(?:{})$", pattern.as_ref())).map_err(|err| {
                    VettingError::Configuration(format!(
                        "invalid excluded path pattern '{}': {err}",
                        pattern.as_ref()
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Returns `true` when `xpath` must never be shown.
    pub fn is_excluded(&self, xpath: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(xpath))
    }
}
