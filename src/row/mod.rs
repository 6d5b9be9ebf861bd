//! Rows and their candidate items.
//!
//! A `DataRow` aggregates everything known about one (locale, xpath) data
//! point. Items are keyed by `CandidateValue` and inserted through
//! `add_item`, which returns the existing item when the value is already
//! present, so population order only affects the provenance trail.

use indexmap::IndexMap;
use indexmap::map::Entry;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::coverage::CoverageLevel;
use crate::errors::VettingError;
use crate::hash::{field_hash, value_hash};
use crate::source::{Finding, PathInfo, Severity, VoteRegistry, VoteStatus};
use crate::types::{FieldHash, LocaleId, PathCode, ProvenanceTag, UserId, ValueHash, Xpath};
use crate::value::CandidateValue;

mod inheritance;
mod item;

pub use inheritance::{InheritanceInfo, ItemClass, resolve, same_locale};
pub use item::CandidateItem;

/// Collaborator-derived facts a row is created with.
pub(crate) struct RowSeed {
    pub locale: LocaleId,
    pub xpath: Xpath,
    pub info: PathInfo,
    pub coverage: CoverageLevel,
    pub display_name: String,
    pub raw_english: Option<String>,
    pub candidate_history: bool,
}

/// All candidates and metadata of one data point.
pub struct DataRow {
    xpath: Arc<str>,
    field_hash: FieldHash,
    locale: LocaleId,
    winning_value: Option<CandidateValue>,
    winning_status: VoteStatus,
    baseline_value: Option<CandidateValue>,
    baseline_status: VoteStatus,
    pub(crate) inherited: Option<InheritanceInfo>,
    pub(crate) path_where_found: Option<Xpath>,
    coverage: CoverageLevel,
    display_name: String,
    raw_english: Option<String>,
    code: PathCode,
    header: String,
    pretty_path: Option<String>,
    pub(crate) has_errors: bool,
    pub(crate) has_warnings: bool,
    pub(crate) has_multiple_proposals: bool,
    pub(crate) fixed_candidates: bool,
    items: IndexMap<CandidateValue, CandidateItem>,
    pub(crate) shim_item: Option<CandidateItem>,
    pub(crate) unvotable_root_value: Option<String>,
    ballot: Arc<dyn VoteRegistry>,
    candidate_history: bool,
}

impl DataRow {
    pub(crate) fn new(seed: RowSeed, ballot: Arc<dyn VoteRegistry>) -> Self {
        let winning_value = ballot.winning_value(&seed.xpath);
        let winning_status = ballot.winning_status(&seed.xpath);
        let baseline_value = ballot.baseline_value(&seed.xpath);
        let baseline_status = ballot.baseline_status(&seed.xpath);
        Self {
            field_hash: field_hash(&seed.xpath),
            xpath: Arc::from(seed.xpath),
            locale: seed.locale,
            winning_value,
            winning_status,
            baseline_value,
            baseline_status,
            inherited: None,
            path_where_found: None,
            coverage: seed.coverage,
            display_name: seed.display_name,
            raw_english: seed.raw_english,
            code: seed.info.code,
            header: seed.info.header,
            pretty_path: seed.info.pretty_path,
            has_errors: false,
            has_warnings: false,
            has_multiple_proposals: false,
            fixed_candidates: false,
            items: IndexMap::new(),
            shim_item: None,
            unvotable_root_value: None,
            ballot,
            candidate_history: seed.candidate_history,
        }
    }

    /// Fold an explicit value equal to the inherited value into the marker.
    ///
    /// Returns `None` for the marker when nothing is inherited.
    fn canonical(&self, value: &CandidateValue) -> Option<CandidateValue> {
        match (value, &self.inherited) {
            (CandidateValue::Inherited, None) => None,
            (CandidateValue::Explicit(raw), Some(info)) if *raw == info.value => {
                Some(CandidateValue::Inherited)
            }
            _ => Some(value.clone()),
        }
    }

    /// Add `value`, or return the item that already holds it.
    ///
    /// The marker is skipped (and `None` returned) when the row inherits nothing.
    pub fn add_item(
        &mut self,
        value: CandidateValue,
        tag: ProvenanceTag,
    ) -> Option<&mut CandidateItem> {
        let Some(value) = self.canonical(&value) else {
            tracing::debug!(xpath = %self.xpath, tag, "skipping inheritance marker without inherited value");
            return None;
        };
        let is_baseline = self
            .baseline_value
            .as_ref()
            .and_then(|baseline| self.canonical(baseline))
            .is_some_and(|baseline| baseline == value);
        match self.items.entry(value) {
            Entry::Occupied(entry) => {
                let item = entry.into_mut();
                item.push_history(tag);
                Some(item)
            }
            Entry::Vacant(entry) => {
                let mut item = CandidateItem::new(
                    entry.key().clone(),
                    Arc::clone(&self.xpath),
                    tag,
                    self.candidate_history,
                );
                item.is_baseline = is_baseline;
                Some(entry.insert(item))
            }
        }
    }

    /// Attach findings to the item holding `value` unless it already has some.
    pub(crate) fn attach_tests(
        &mut self,
        value: &CandidateValue,
        findings: Vec<Finding>,
        examples: Vec<Finding>,
    ) {
        let Some(key) = self.canonical(value) else {
            return;
        };
        let Some(item) = self.items.get_mut(&key) else {
            return;
        };
        if item.has_tests() {
            return;
        }
        item.set_tests(findings);
        item.set_examples(examples);
        let errors = item.count_severity(Severity::Error);
        let warnings = item.count_severity(Severity::Warning);
        self.has_errors |= errors > 0;
        self.has_warnings |= warnings > 0;
    }

    /// Values of items that still lack validation results.
    pub(crate) fn unvalidated_values(&self) -> Vec<CandidateValue> {
        self.items
            .iter()
            .filter(|(_, item)| !item.has_tests())
            .map(|(value, _)| value.clone())
            .collect()
    }

    /// Path of the row.
    pub fn xpath(&self) -> &str {
        &self.xpath
    }

    /// Wire-safe, round-trippable row key.
    pub fn field_hash(&self) -> &str {
        &self.field_hash
    }

    /// Locale of the row.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Value the vote resolver currently picks.
    pub fn winning_value(&self) -> Option<&CandidateValue> {
        self.winning_value.as_ref()
    }

    /// Status of the winning value.
    pub fn winning_status(&self) -> VoteStatus {
        self.winning_status
    }

    /// Value from the previous release.
    pub fn baseline_value(&self) -> Option<&CandidateValue> {
        self.baseline_value.as_ref()
    }

    /// Status of the baseline value.
    pub fn baseline_status(&self) -> VoteStatus {
        self.baseline_status
    }

    /// Inherited value and its source, when the fallback chain supplied one.
    pub fn inherited(&self) -> Option<&InheritanceInfo> {
        self.inherited.as_ref()
    }

    /// Just the inherited value.
    pub fn inherited_value(&self) -> Option<&str> {
        self.inherited.as_ref().map(|info| info.value.as_str())
    }

    /// Path the value was found at, when it differs from the row's own path.
    pub fn inherited_xpath(&self) -> Option<&str> {
        self.inherited
            .as_ref()
            .and_then(|info| info.from_path.as_deref())
            .or(self.path_where_found.as_deref())
    }

    /// Coverage level of the path.
    pub fn coverage(&self) -> CoverageLevel {
        self.coverage
    }

    /// Comparison-locale rendering; empty when that value is inherited sideways.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// English value before any display processing.
    pub fn raw_english(&self) -> Option<&str> {
        self.raw_english.as_deref()
    }

    /// Short path code used for sorting.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Path header; empty when the classifier has none.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Human-readable path, when classified.
    pub fn pretty_path(&self) -> Option<&str> {
        self.pretty_path.as_deref()
    }

    /// Some item carries an error finding.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// Some item carries a warning finding.
    pub fn has_warnings(&self) -> bool {
        self.has_warnings
    }

    /// Other proposed alternates exist for this path.
    pub fn has_multiple_proposals(&self) -> bool {
        self.has_multiple_proposals
    }

    /// Only the fixed candidate values may be chosen.
    pub fn fixed_candidates(&self) -> bool {
        self.fixed_candidates
    }

    /// Items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &CandidateItem> {
        self.items.values()
    }

    /// Number of items, shim excluded.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Item for `value`; an explicit value equal to the inherited one finds the marker.
    pub fn item(&self, value: &CandidateValue) -> Option<&CandidateItem> {
        self.items.get(&self.canonical(value)?)
    }

    /// The inheritance-marker item, if present.
    pub fn inherited_item(&self) -> Option<&CandidateItem> {
        self.items.get(&CandidateValue::Inherited)
    }

    /// Placeholder carrying findings for a path without data.
    pub fn shim_item(&self) -> Option<&CandidateItem> {
        self.shim_item.as_ref()
    }

    /// Item holding the winning value.
    pub fn winning_item(&self) -> Option<&CandidateItem> {
        self.item(self.winning_value.as_ref()?)
    }

    /// Whether `item` holds the winning value.
    pub fn is_winning(&self, item: &CandidateItem) -> bool {
        match (item.value(), self.winning_value.as_ref()) {
            (Some(value), Some(winning)) => self.canonical(winning).as_ref() == Some(value),
            _ => false,
        }
    }

    /// Display classification of `item`.
    pub fn item_class(&self, item: &CandidateItem) -> ItemClass {
        let winning = self
            .winning_value
            .as_ref()
            .and_then(|winning| self.canonical(winning));
        ItemClass::classify(item.value(), self.inherited.as_ref(), winning.as_ref())
    }

    /// Value actually displayed for `item` (the inherited value for the marker).
    pub fn resolved_value<'a>(&'a self, item: &'a CandidateItem) -> Option<&'a str> {
        match item.value()? {
            CandidateValue::Explicit(raw) => Some(raw),
            CandidateValue::Inherited => self.inherited_value(),
        }
    }

    /// Users voting for `item`; computed on first use and cached.
    ///
    /// Marker voters include votes for the explicit inherited value.
    pub fn voters<'a>(&self, item: &'a CandidateItem) -> &'a BTreeSet<UserId> {
        item.votes.get_or_init(|| {
            let Some(value) = item.value() else {
                return BTreeSet::new();
            };
            let mut voters = self.ballot.voters_for_value(&self.xpath, value);
            if value.is_inherited()
                && let Some(info) = &self.inherited
            {
                voters.extend(
                    self.ballot
                        .voters_for_value(&self.xpath, &CandidateValue::explicit(info.value.as_str())),
                );
            }
            voters
        })
    }

    /// Whether `user` has a vote on this path.
    pub fn user_has_voted(&self, user: &str) -> bool {
        self.ballot.did_user_vote(user, &self.xpath)
    }

    /// Hash of the item `user` voted for; `None` when the user abstains.
    pub fn vote_value_hash(&self, user: &str) -> Option<ValueHash> {
        let vote = self.ballot.vote_of(user, &self.xpath)?;
        match self.item(&vote) {
            Some(item) => Some(item.value_hash()),
            None => {
                tracing::warn!(xpath = %self.xpath, user, vote = %vote, "vote has no matching item");
                None
            }
        }
    }

    /// Hash of the winning value.
    pub fn winning_value_hash(&self) -> ValueHash {
        value_hash(self.winning_value.as_ref())
    }

    /// `value` is the reference-only root annotation value.
    pub fn is_unvotable_root(&self, value: &str) -> bool {
        self.unvotable_root_value.as_deref() == Some(value)
    }

    /// Whether the row names something (languages, territories, zones, ...).
    pub fn is_name(&self) -> bool {
        let path = self.pretty_path.as_deref().unwrap_or(&self.xpath);
        path.contains("displayName")
            || path.contains("localeDisplayNames")
            || path.contains("exemplarCity")
            || path.contains("timeZoneNames/metazone")
    }

    /// Data inconsistencies in this row; reported, never corrected.
    pub fn consistency_issues(&self) -> Vec<VettingError> {
        let mut details = Vec::new();
        if let Some(winning) = &self.winning_value
            && self.winning_item().is_none()
        {
            details.push(format!("winning value '{winning}' has no item"));
        }
        if self.inherited_item().is_some() {
            match &self.inherited {
                None => details.push("inheritance marker without inherited value".to_string()),
                Some(info) if info.from_locale.is_none() && info.from_path.is_none() => {
                    details.push("inheritance marker without source locale or path".to_string())
                }
                Some(_) => {}
            }
        }
        if let Some(baseline) = &self.baseline_value
            && self.item(baseline).is_some_and(|item| !item.is_baseline())
        {
            details.push(format!("baseline value '{baseline}' item is not flagged"));
        }
        details
            .into_iter()
            .map(|details| VettingError::Inconsistent {
                xpath: self.xpath.to_string(),
                details,
            })
            .collect()
    }
}

impl fmt::Debug for DataRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataRow")
            .field("xpath", &self.xpath)
            .field("display_name", &self.display_name)
            .field("items", &self.items.len())
            .finish()
    }
}
