//! Candidate aggregation for one data point.
//!
//! `CandidateAggregator::populate` resolves inheritance first, then adds
//! items in a fixed order (fixed candidates, inheritance marker, root
//! annotation, voted values, winning, baseline, local value). Only the
//! provenance trail depends on that order.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::AssemblyConfig;
use crate::constants::paths::PROPOSED_DRAFT;
use crate::constants::provenance;
use crate::coverage::CoverageLevel;
use crate::errors::VettingError;
use crate::row::{CandidateItem, DataRow, RowSeed, resolve, same_locale};
use crate::source::{Finding, LocaleDataSource, PathInfo, Severity, ValidationEngine, VoteRegistry};
use crate::value::CandidateValue;
use crate::xpath::{is_annotation, proposed_suffix};

/// Collaborators used to build the rows of one page.
pub(crate) struct CandidateAggregator<'a> {
    pub config: &'a AssemblyConfig,
    pub source: &'a dyn LocaleDataSource,
    pub ballot: &'a Arc<dyn VoteRegistry>,
    pub validation: &'a dyn ValidationEngine,
    pub root: Option<&'a dyn LocaleDataSource>,
    pub comparison: Option<&'a dyn LocaleDataSource>,
}

impl CandidateAggregator<'_> {
    /// Create the empty row for `xpath` with winning, baseline, and display data.
    pub fn new_row(&self, xpath: &str, info: PathInfo, coverage: CoverageLevel) -> DataRow {
        let raw_english = self.comparison.and_then(|source| source.value(xpath));
        let sideways = self
            .comparison
            .is_some_and(|source| source.source_locale(xpath).path_where_found.is_some());
        let display_name = if sideways {
            String::new()
        } else {
            raw_english.clone().unwrap_or_default()
        };
        let seed = RowSeed {
            locale: self.source.locale().to_string(),
            xpath: xpath.to_string(),
            info,
            coverage,
            display_name,
            raw_english,
            candidate_history: self.config.candidate_history,
        };
        DataRow::new(seed, Arc::clone(self.ballot))
    }

    fn add_fixed_candidates(&self, row: &mut DataRow) {
        let candidates = self.source.fixed_candidates(row.xpath());
        if candidates.is_empty() {
            return;
        }
        row.fixed_candidates = true;
        for candidate in candidates {
            row.add_item(CandidateValue::Explicit(candidate), provenance::FIXED);
        }
    }

    /// Run every population step for `row`.
    ///
    /// `is_extra` marks paths without a physical value; they get no
    /// inheritance marker and carry shim findings instead.
    pub fn populate(&self, row: &mut DataRow, is_extra: bool) {
        let xpath = row.xpath().to_string();
        let our_value = if is_extra {
            None
        } else {
            self.source.value(&xpath)
        };
        let is_extra = is_extra || our_value.is_none();
        let with_marker =
            row.inherited_item().is_none() && row.shim_item().is_none() && !is_extra;

        // Every item added below folds against the inherited value.
        if with_marker {
            row.inherited = resolve(&xpath, self.source);
        }
        self.add_fixed_candidates(row);
        if with_marker {
            self.add_inherited(row);
        }
        self.add_annotation_root_value(row);
        self.add_voted_values(row);
        if let Some(winning) = row.winning_value().cloned() {
            row.add_item(winning, provenance::WINNING);
        }
        if let Some(baseline) = row.baseline_value().cloned() {
            row.add_item(baseline, provenance::BASELINE);
        }
        if is_extra && row.inherited_item().is_none() {
            self.attach_shim(row);
        }

        let full_path = self
            .source
            .full_path(&xpath)
            .unwrap_or_else(|| xpath.clone());
        let proposed = proposed_suffix(&xpath, &full_path);
        let location = self.source.source_locale(&xpath);
        let our_value_is_inherited = !same_locale(&location.locale, self.source.locale());

        if !(our_value_is_inherited && !is_extra) {
            if proposed
                .as_deref()
                .is_some_and(|suffix| suffix != PROPOSED_DRAFT)
                && !our_value_is_inherited
            {
                row.has_multiple_proposals = true;
            }
            if let Some(ours) = our_value.filter(|value| !value.is_empty()) {
                self.add_our_value(row, ours);
            }
            if let Some(path) = location.path_where_found.filter(|path| *path != xpath) {
                row.path_where_found = Some(path);
            }
        }

        for value in row.unvalidated_values() {
            self.validate_item(row, &value);
        }
        if self.config.consistency_checks {
            for issue in row.consistency_issues() {
                warn!(locale = %row.locale(), xpath = %row.xpath(), issue = %issue, "row inconsistency");
            }
        }
    }

    fn add_inherited(&self, row: &mut DataRow) {
        if row.inherited.is_none() {
            return;
        }
        row.add_item(CandidateValue::Inherited, provenance::INHERITED);
        self.validate_item(row, &CandidateValue::Inherited);
    }

    fn add_annotation_root_value(&self, row: &mut DataRow) {
        if !is_annotation(row.xpath()) {
            return;
        }
        let Some(root_value) = self.root.and_then(|root| root.value(row.xpath())) else {
            return;
        };
        let normalized = normalize_annotation_input(&root_value);
        let inherited = row.inherited_value();
        if inherited == Some(root_value.as_str()) || inherited == Some(normalized.as_str()) {
            return;
        }
        row.unvotable_root_value = Some(normalized.clone());
        // The marker stays votable even if the value folds into it.
        if let Some(item) = row.add_item(
            CandidateValue::Explicit(normalized),
            provenance::ROOT_ANNOTATION,
        ) && item.value().is_some_and(|value| !value.is_inherited())
        {
            item.unvotable = true;
        }
    }

    fn add_voted_values(&self, row: &mut DataRow) {
        for value in self.ballot.values_with_votes(row.xpath()) {
            if self.ballot.voters_for_value(row.xpath(), &value).is_empty() {
                continue;
            }
            if row.add_item(value.clone(), provenance::VOTES).is_some() {
                self.validate_item(row, &value);
            }
        }
    }

    fn add_our_value(&self, row: &mut DataRow, ours: String) {
        let value = CandidateValue::Explicit(ours);
        if row.add_item(value.clone(), provenance::OUR).is_some() {
            self.validate_item(row, &value);
        }
    }

    /// Attach findings and examples to the item holding `value`, once.
    fn validate_item(&self, row: &mut DataRow, value: &CandidateValue) {
        if row.item(value).is_none_or(|item| item.has_tests()) {
            return;
        }
        let checked = match value {
            CandidateValue::Explicit(raw) => Some(raw.clone()),
            CandidateValue::Inherited => row.inherited_value().map(str::to_string),
        };
        let findings = self.findings(row.xpath(), checked.as_deref());
        let examples = self
            .validation
            .examples(row.xpath(), checked.as_deref())
            .unwrap_or_else(|err| {
                warn!(xpath = %row.xpath(), error = %err, "example rendering failed");
                Vec::new()
            });
        row.attach_tests(value, findings, examples);
    }

    /// Findings for `value` with excluded subtypes removed; failures yield none.
    fn findings(&self, xpath: &str, value: Option<&str>) -> Vec<Finding> {
        match self.validation.check(xpath, value) {
            Ok(findings) => self.without_excluded(findings),
            Err(err) => {
                log_validation_failure(xpath, value, &err);
                Vec::new()
            }
        }
    }

    fn without_excluded(&self, findings: Vec<Finding>) -> Vec<Finding> {
        findings
            .into_iter()
            .filter(|finding| {
                !self
                    .config
                    .excluded_check_subtypes
                    .iter()
                    .any(|subtype| *subtype == finding.subtype)
            })
            .collect()
    }

    /// Keep a valueless placeholder when the path itself has errors or warnings.
    pub fn attach_shim(&self, row: &mut DataRow) {
        if row.inherited_item().is_some() || row.shim_item().is_some() {
            return;
        }
        let findings = self.findings(row.xpath(), None);
        if findings.is_empty() {
            return;
        }
        let mut shim = CandidateItem::shim(Arc::from(row.xpath()));
        if shim.set_tests(findings) {
            row.has_errors |= shim.count_severity(Severity::Error) > 0;
            row.has_warnings |= shim.count_severity(Severity::Warning) > 0;
            debug!(xpath = %row.xpath(), "keeping shim item");
            row.shim_item = Some(shim);
        }
    }
}

fn log_validation_failure(xpath: &str, value: Option<&str>, err: &VettingError) {
    warn!(
        xpath = %xpath,
        value = value.unwrap_or("<none>"),
        error = %err,
        "validation failed; item kept without findings"
    );
}

/// Input form of a root annotation value: a hyphen between digits becomes an en dash.
pub(crate) fn normalize_annotation_input(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(idx, &ch)| {
            let between_digits = idx > 0
                && chars[idx - 1].is_ascii_digit()
                && chars.get(idx + 1).is_some_and(char::is_ascii_digit);
            if ch == '-' && between_digits {
                '\u{2013}'
            } else {
                ch
            }
        })
        .collect()
}
