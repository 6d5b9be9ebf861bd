use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};

use crate::hash::value_hash;
use crate::source::{Finding, Severity};
use crate::types::{ProvenanceTag, UserId, ValueHash};
use crate::value::CandidateValue;

/// One distinct proposable value of a row.
///
/// The value never changes after creation. Items belong to exactly one row
/// and refer back to it by xpath only.
#[derive(Debug)]
pub struct CandidateItem {
    value: Option<CandidateValue>,
    xpath: Arc<str>,
    history: Option<String>,
    pub(crate) is_baseline: bool,
    pub(crate) unvotable: bool,
    tests: Option<Vec<Finding>>,
    examples: Vec<Finding>,
    pub(crate) votes: OnceLock<BTreeSet<UserId>>,
}

impl CandidateItem {
    pub(crate) fn new(
        value: CandidateValue,
        xpath: Arc<str>,
        tag: ProvenanceTag,
        record_history: bool,
    ) -> Self {
        Self {
            value: Some(value),
            xpath,
            history: record_history.then(|| tag.to_string()),
            is_baseline: false,
            unvotable: false,
            tests: None,
            examples: Vec::new(),
            votes: OnceLock::new(),
        }
    }

    /// Placeholder without a value, used only to carry findings.
    pub(crate) fn shim(xpath: Arc<str>) -> Self {
        Self {
            value: None,
            xpath,
            history: None,
            is_baseline: false,
            unvotable: true,
            tests: None,
            examples: Vec::new(),
            votes: OnceLock::new(),
        }
    }

    /// Value of the item; `None` only for shim placeholders.
    pub fn value(&self) -> Option<&CandidateValue> {
        self.value.as_ref()
    }

    /// Xpath of the owning row.
    pub fn xpath(&self) -> &str {
        &self.xpath
    }

    /// Provenance trail such as `inherited+votes+winning`, when recorded.
    pub fn history(&self) -> Option<&str> {
        self.history.as_deref()
    }

    /// Holds the last-release value.
    pub fn is_baseline(&self) -> bool {
        self.is_baseline
    }

    /// Shown for reference only; votes for it are not accepted.
    pub fn is_unvotable(&self) -> bool {
        self.unvotable
    }

    /// Placeholder without a value.
    pub fn is_shim(&self) -> bool {
        self.value.is_none()
    }

    /// Validation findings, once attached.
    pub fn tests(&self) -> Option<&[Finding]> {
        self.tests.as_deref()
    }

    /// Example findings, possibly empty.
    pub fn examples(&self) -> &[Finding] {
        &self.examples
    }

    /// First example rendering, if any.
    pub fn example(&self) -> Option<&str> {
        self.examples.first().map(|finding| finding.message.as_str())
    }

    /// Hash clients vote with.
    pub fn value_hash(&self) -> ValueHash {
        value_hash(self.value.as_ref())
    }

    pub(crate) fn has_tests(&self) -> bool {
        self.tests.is_some()
    }

    pub(crate) fn push_history(&mut self, tag: ProvenanceTag) {
        if let Some(history) = self.history.as_mut() {
            history.push('+');
            history.push_str(tag);
        }
    }

    /// Attach findings; returns `true` when any error or warning is present.
    pub(crate) fn set_tests(&mut self, findings: Vec<Finding>) -> bool {
        let has_problem = findings.iter().any(Finding::is_problem);
        self.tests = Some(findings);
        has_problem
    }

    pub(crate) fn set_examples(&mut self, examples: Vec<Finding>) {
        self.examples = examples;
    }

    pub(crate) fn count_severity(&self, severity: Severity) -> usize {
        self.tests
            .iter()
            .flatten()
            .filter(|finding| finding.severity == severity)
            .count()
    }
}
