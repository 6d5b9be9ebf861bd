//! Collaborator interfaces consumed by row and page assembly.
//!
//! Ownership model:
//! - `LocaleStore` hands out the per-locale collaborators (data source,
//!   ballot box, validation engine) for one page request.
//! - `PathClassifier` and `CoverageProvider` are locale-independent lookups
//!   shared by every request.
//! - Everything here is read-only from the assembler's point of view.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::coverage::CoverageLevel;
use crate::errors::VettingError;
use crate::types::{LocaleId, PageId, PathCode, UserId, Xpath};
use crate::value::CandidateValue;

/// In-memory collaborator implementations.
pub mod memory;
/// JSON fixtures that build the in-memory collaborators.
pub mod fixture;

pub use fixture::Fixture;
pub use memory::{
    CatalogEntry, InMemoryBallotBox, InMemoryLocaleTree, InMemoryStore, LocaleData, LocaleView,
    PathBallot, PathCatalog, RuleValidation, ValidationRule,
};

/// Result of walking the inheritance chain for one path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaileyValue {
    /// Inherited value.
    pub value: String,
    /// Path that supplied the value.
    pub path_where_found: Option<Xpath>,
    /// Locale that supplied the value (may be root or the code-fallback pseudo-locale).
    pub locale_where_found: Option<LocaleId>,
}

/// Where the resolved value of a path physically lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    /// Locale holding the value.
    pub locale: LocaleId,
    /// Path holding the value when it differs from the requested one.
    pub path_where_found: Option<Xpath>,
}

/// Resolving view of one locale's data.
pub trait LocaleDataSource: Send + Sync {
    /// Locale this source resolves for.
    fn locale(&self) -> &str;
    /// Resolved value of `xpath`, or `None` when nothing is stored.
    fn value(&self, xpath: &str) -> Option<String>;
    /// Full path (with draft and other non-distinguishing attributes).
    fn full_path(&self, xpath: &str) -> Option<Xpath>;
    /// Walk the fallback chain for `xpath`.
    fn bailey_value(&self, xpath: &str) -> Option<BaileyValue>;
    /// Paths logically present under `prefix` but not materialised.
    fn extra_paths(&self, prefix: &str) -> BTreeSet<Xpath>;
    /// Paths physically present under `prefix` (empty prefix means all).
    fn paths_under(&self, prefix: &str) -> BTreeSet<Xpath>;
    /// Locale (and path) where the resolved value of `xpath` lives.
    fn source_locale(&self, xpath: &str) -> SourceLocation;
    /// Closed list of allowed values for `xpath`, if the locale declares one.
    fn fixed_candidates(&self, _xpath: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Approval status of a winning or baseline value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VoteStatus {
    /// Enough votes to be final.
    Approved,
    /// Accepted, short of approval.
    Contributed,
    /// Some support, not yet contributed.
    Provisional,
    /// Entered without enough votes.
    Unconfirmed,
    /// No value.
    #[default]
    Missing,
}

/// Ballot box for one locale.
pub trait VoteRegistry: Send + Sync {
    /// Value the vote resolver currently considers authoritative.
    fn winning_value(&self, xpath: &str) -> Option<CandidateValue>;
    /// Status of the winning value.
    fn winning_status(&self, xpath: &str) -> VoteStatus;
    /// Value from the previous release.
    fn baseline_value(&self, xpath: &str) -> Option<CandidateValue>;
    /// Status of the baseline value.
    fn baseline_status(&self, xpath: &str) -> VoteStatus;
    /// Every value with at least one recorded vote.
    fn values_with_votes(&self, xpath: &str) -> Vec<CandidateValue>;
    /// Users who voted for `value` on `xpath`.
    fn voters_for_value(&self, xpath: &str, value: &CandidateValue) -> BTreeSet<UserId>;
    /// Whether `user` has a current vote on `xpath`.
    fn did_user_vote(&self, user: &str, xpath: &str) -> bool;
    /// The value `user` voted for, if any.
    fn vote_of(&self, _user: &str, _xpath: &str) -> Option<CandidateValue> {
        None
    }
}

/// Severity of a validation finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks the value.
    Error,
    /// Worth a second look.
    Warning,
    /// Example rendering, not a check.
    Example,
}

/// One validation result for a candidate value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Error, warning, or example.
    pub severity: Severity,
    /// Machine-readable subtype, used by exclusion rules.
    #[serde(default)]
    pub subtype: String,
    /// Human-readable message or example rendering.
    pub message: String,
}

impl Finding {
    /// Build a finding.
    pub fn new(severity: Severity, subtype: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            subtype: subtype.into(),
            message: message.into(),
        }
    }

    /// Errors and warnings count; examples do not.
    pub fn is_problem(&self) -> bool {
        self.severity != Severity::Example
    }
}

/// Check runner for one locale.
pub trait ValidationEngine: Send + Sync {
    /// Findings for `value` on `xpath`; `None` checks the path itself (shim rows).
    fn check(&self, xpath: &str, value: Option<&str>) -> Result<Vec<Finding>, VettingError>;
    /// Example renderings for `value` on `xpath`.
    fn examples(&self, xpath: &str, value: Option<&str>) -> Result<Vec<Finding>, VettingError>;
}

/// Display classification of a path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathInfo {
    /// Never show this path.
    #[serde(default)]
    pub should_hide: bool,
    /// Short code shown in the code column.
    pub code: PathCode,
    /// Header grouping label.
    #[serde(default)]
    pub header: String,
    /// Logical page containing the path.
    #[serde(default)]
    pub page: Option<PageId>,
    /// Pretty path used by name heuristics.
    #[serde(default)]
    pub pretty_path: Option<String>,
}

/// Path display classifier.
pub trait PathClassifier: Send + Sync {
    /// Classification of `xpath`; `None` means the path is unknown and not shown.
    fn classify(&self, xpath: &str) -> Option<PathInfo>;
    /// Paths that make up logical page `page`.
    fn paths_for_page(&self, page: &str) -> BTreeSet<Xpath>;
}

/// Coverage-level lookup.
pub trait CoverageProvider: Send + Sync {
    /// Coverage level of `xpath` in `locale`.
    fn coverage_level(&self, xpath: &str, locale: &str) -> CoverageLevel;
}

/// Hands out the per-locale collaborators.
pub trait LocaleStore: Send + Sync {
    /// Resolving data source for `locale`.
    fn source(&self, locale: &str) -> Option<Arc<dyn LocaleDataSource>>;
    /// Ballot box for `locale`.
    fn ballot_box(&self, locale: &str) -> Option<Arc<dyn VoteRegistry>>;
    /// Validation engine for `locale`.
    fn validation(&self, locale: &str) -> Option<Arc<dyn ValidationEngine>>;
}
