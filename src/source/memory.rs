use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use super::{
    BaileyValue, CoverageProvider, Finding, LocaleDataSource, LocaleStore, PathClassifier,
    PathInfo, Severity, SourceLocation, ValidationEngine, VoteRegistry, VoteStatus,
};
use crate::constants::locales::{CODE_FALLBACK_LOCALE, ROOT_LOCALE};
use crate::constants::paths::{ATTR_TYPE, ZONE_BASE};
use crate::coverage::CoverageLevel;
use crate::errors::VettingError;
use crate::types::{LocaleId, PageId, UserId, Xpath};
use crate::value::CandidateValue;
use crate::xpath::{XpathParts, default_code};

/// Stored data of one locale in an `InMemoryLocaleTree`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleData {
    /// Explicit parent; defaults to truncating the last `_` segment, then root.
    pub parent: Option<LocaleId>,
    /// Explicitly stored values.
    pub values: BTreeMap<Xpath, String>,
    /// Full paths for stored values (draft and similar attributes).
    pub full_paths: BTreeMap<Xpath, Xpath>,
    /// Paths logically present but not materialised.
    pub extra_paths: BTreeSet<Xpath>,
    /// Closed candidate lists per path.
    pub fixed_candidates: BTreeMap<Xpath, Vec<String>>,
}

/// In-memory tree of inheritable locale data plus the per-locale ballot boxes.
///
/// Lookups walk: sideways alias in the same locale, then parent locales up to
/// root (trying the path and its alias in each), then a code fallback for
/// display-name and exemplar-city paths.
#[derive(Clone, Default)]
pub struct InMemoryLocaleTree {
    locales: BTreeMap<LocaleId, LocaleData>,
    aliases: BTreeMap<Xpath, Xpath>,
    ballots: BTreeMap<LocaleId, Arc<InMemoryBallotBox>>,
    validation: Option<Arc<dyn ValidationEngine>>,
}

impl InMemoryLocaleTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the data of `locale`.
    pub fn with_locale(mut self, locale: impl Into<LocaleId>, data: LocaleData) -> Self {
        self.locales.insert(locale.into(), data);
        self
    }

    /// Declare that `xpath` inherits sideways from `alias` within a locale.
    pub fn with_alias(mut self, xpath: impl Into<Xpath>, alias: impl Into<Xpath>) -> Self {
        self.aliases.insert(xpath.into(), alias.into());
        self
    }

    /// Attach the ballot box of `locale`.
    pub fn with_ballot_box(mut self, locale: impl Into<LocaleId>, ballot: InMemoryBallotBox) -> Self {
        self.ballots.insert(locale.into(), Arc::new(ballot));
        self
    }

    /// Attach the validation engine shared by every locale.
    pub fn with_validation(mut self, engine: Arc<dyn ValidationEngine>) -> Self {
        self.validation = Some(engine);
        self
    }

    /// Parent of `locale` in the inheritance chain.
    pub fn parent_of(&self, locale: &str) -> Option<LocaleId> {
        if locale == ROOT_LOCALE {
            return None;
        }
        if let Some(parent) = self.locales.get(locale).and_then(|data| data.parent.clone()) {
            return Some(parent);
        }
        match locale.rfind('_') {
            Some(idx) => Some(locale[..idx].to_string()),
            None => Some(ROOT_LOCALE.to_string()),
        }
    }

    /// `locale` followed by its ancestors up to root.
    fn chain(&self, locale: &str) -> Vec<LocaleId> {
        let mut chain = vec![locale.to_string()];
        let mut current = locale.to_string();
        while let Some(parent) = self.parent_of(&current) {
            if chain.contains(&parent) {
                break;
            }
            chain.push(parent.clone());
            current = parent;
        }
        chain
    }

    fn stored(&self, locale: &str, xpath: &str) -> Option<&String> {
        self.locales
            .get(locale)
            .and_then(|data| data.values.get(xpath))
    }

    fn bailey(&self, locale: &str, xpath: &str) -> Option<BaileyValue> {
        let alias = self.aliases.get(xpath);
        if let Some(alias) = alias
            && let Some(value) = self.stored(locale, alias)
        {
            return Some(found(value, alias, locale));
        }
        for ancestor in self.chain(locale).iter().skip(1) {
            if let Some(value) = self.stored(ancestor, xpath) {
                return Some(found(value, xpath, ancestor));
            }
            if let Some(alias) = alias
                && let Some(value) = self.stored(ancestor, alias)
            {
                return Some(found(value, alias, ancestor));
            }
        }
        code_fallback(xpath).map(|value| found(&value, xpath, CODE_FALLBACK_LOCALE))
    }

    /// Resolving view of `locale`.
    pub fn view(self: &Arc<Self>, locale: impl Into<LocaleId>) -> LocaleView {
        LocaleView {
            tree: Arc::clone(self),
            locale: locale.into(),
        }
    }
}

fn found(value: &str, xpath: &str, locale: &str) -> BaileyValue {
    BaileyValue {
        value: value.to_string(),
        path_where_found: Some(xpath.to_string()),
        locale_where_found: Some(locale.to_string()),
    }
}

/// Code used when nothing in the chain supplies a display name or city.
fn code_fallback(xpath: &str) -> Option<String> {
    if xpath.starts_with(ZONE_BASE) && xpath.ends_with("/exemplarCity") {
        let zone = XpathParts::parse(xpath)
            .find_attribute("zone", ATTR_TYPE)?
            .to_string();
        let city = zone.rsplit('/').next().unwrap_or(&zone).replace('_', " ");
        return Some(city);
    }
    if xpath.starts_with("//ldml/localeDisplayNames/") {
        let parts = XpathParts::parse(xpath);
        return parts
            .last()
            .and_then(|step| step.attribute(ATTR_TYPE))
            .map(|_| default_code(xpath));
    }
    None
}

/// Resolving `LocaleDataSource` over one locale of an `InMemoryLocaleTree`.
#[derive(Clone)]
pub struct LocaleView {
    tree: Arc<InMemoryLocaleTree>,
    locale: LocaleId,
}

impl LocaleDataSource for LocaleView {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn value(&self, xpath: &str) -> Option<String> {
        self.tree
            .stored(&self.locale, xpath)
            .cloned()
            .or_else(|| self.tree.bailey(&self.locale, xpath).map(|b| b.value))
    }

    fn full_path(&self, xpath: &str) -> Option<Xpath> {
        for locale in self.tree.chain(&self.locale) {
            let Some(data) = self.tree.locales.get(&locale) else {
                continue;
            };
            if let Some(full) = data.full_paths.get(xpath) {
                return Some(full.clone());
            }
            if data.values.contains_key(xpath) {
                return Some(xpath.to_string());
            }
        }
        None
    }

    fn bailey_value(&self, xpath: &str) -> Option<BaileyValue> {
        self.tree.bailey(&self.locale, xpath)
    }

    fn extra_paths(&self, prefix: &str) -> BTreeSet<Xpath> {
        self.tree
            .chain(&self.locale)
            .iter()
            .filter_map(|locale| self.tree.locales.get(locale))
            .flat_map(|data| data.extra_paths.iter())
            .filter(|xpath| xpath.starts_with(prefix))
            .cloned()
            .collect()
    }

    fn paths_under(&self, prefix: &str) -> BTreeSet<Xpath> {
        self.tree
            .chain(&self.locale)
            .iter()
            .filter_map(|locale| self.tree.locales.get(locale))
            .flat_map(|data| data.values.keys())
            .filter(|xpath| xpath.starts_with(prefix))
            .cloned()
            .collect()
    }

    fn source_locale(&self, xpath: &str) -> SourceLocation {
        if self.tree.stored(&self.locale, xpath).is_some() {
            return SourceLocation {
                locale: self.locale.clone(),
                path_where_found: None,
            };
        }
        match self.tree.bailey(&self.locale, xpath) {
            Some(bailey) => SourceLocation {
                locale: bailey
                    .locale_where_found
                    .unwrap_or_else(|| ROOT_LOCALE.to_string()),
                path_where_found: bailey.path_where_found.filter(|path| path != xpath),
            },
            None => SourceLocation {
                locale: ROOT_LOCALE.to_string(),
                path_where_found: None,
            },
        }
    }

    fn fixed_candidates(&self, xpath: &str) -> Vec<String> {
        self.tree
            .chain(&self.locale)
            .iter()
            .filter_map(|locale| self.tree.locales.get(locale))
            .find_map(|data| data.fixed_candidates.get(xpath).cloned())
            .unwrap_or_default()
    }
}

/// Shared-ownership wrapper so the tree can hand out `Arc` views.
#[derive(Clone)]
pub struct InMemoryStore {
    tree: Arc<InMemoryLocaleTree>,
}

impl InMemoryStore {
    /// Wrap a finished tree.
    pub fn new(tree: InMemoryLocaleTree) -> Self {
        Self {
            tree: Arc::new(tree),
        }
    }

    /// The wrapped tree.
    pub fn tree(&self) -> &Arc<InMemoryLocaleTree> {
        &self.tree
    }
}

impl LocaleStore for InMemoryStore {
    fn source(&self, locale: &str) -> Option<Arc<dyn LocaleDataSource>> {
        let known = locale == ROOT_LOCALE || self.tree.locales.contains_key(locale);
        known.then(|| Arc::new(self.tree.view(locale)) as Arc<dyn LocaleDataSource>)
    }

    fn ballot_box(&self, locale: &str) -> Option<Arc<dyn VoteRegistry>> {
        self.tree
            .ballots
            .get(locale)
            .map(|ballot| Arc::clone(ballot) as Arc<dyn VoteRegistry>)
    }

    fn validation(&self, _locale: &str) -> Option<Arc<dyn ValidationEngine>> {
        self.tree.validation.clone()
    }
}

/// Recorded ballot state of one path.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathBallot {
    /// Resolver's winning value.
    pub winning: Option<CandidateValue>,
    /// Status of the winning value.
    pub winning_status: VoteStatus,
    /// Previous-release value.
    pub baseline: Option<CandidateValue>,
    /// Status of the baseline value.
    pub baseline_status: VoteStatus,
    /// Current vote per user.
    pub votes: BTreeMap<UserId, CandidateValue>,
}

/// In-memory ballot box keyed by path.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryBallotBox {
    paths: BTreeMap<Xpath, PathBallot>,
}

impl InMemoryBallotBox {
    /// Create an empty ballot box.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `user`'s vote on `xpath`, replacing any earlier vote.
    pub fn with_vote(
        mut self,
        xpath: impl Into<Xpath>,
        user: impl Into<UserId>,
        value: CandidateValue,
    ) -> Self {
        self.paths
            .entry(xpath.into())
            .or_default()
            .votes
            .insert(user.into(), value);
        self
    }

    /// Set the resolver outcome of `xpath`.
    pub fn with_winning(
        mut self,
        xpath: impl Into<Xpath>,
        value: CandidateValue,
        status: VoteStatus,
    ) -> Self {
        let ballot = self.paths.entry(xpath.into()).or_default();
        ballot.winning = Some(value);
        ballot.winning_status = status;
        self
    }

    /// Set the previous-release value of `xpath`.
    pub fn with_baseline(
        mut self,
        xpath: impl Into<Xpath>,
        value: CandidateValue,
        status: VoteStatus,
    ) -> Self {
        let ballot = self.paths.entry(xpath.into()).or_default();
        ballot.baseline = Some(value);
        ballot.baseline_status = status;
        self
    }
}

impl VoteRegistry for InMemoryBallotBox {
    fn winning_value(&self, xpath: &str) -> Option<CandidateValue> {
        self.paths.get(xpath).and_then(|b| b.winning.clone())
    }

    fn winning_status(&self, xpath: &str) -> VoteStatus {
        self.paths
            .get(xpath)
            .map(|b| b.winning_status)
            .unwrap_or_default()
    }

    fn baseline_value(&self, xpath: &str) -> Option<CandidateValue> {
        self.paths.get(xpath).and_then(|b| b.baseline.clone())
    }

    fn baseline_status(&self, xpath: &str) -> VoteStatus {
        self.paths
            .get(xpath)
            .map(|b| b.baseline_status)
            .unwrap_or_default()
    }

    fn values_with_votes(&self, xpath: &str) -> Vec<CandidateValue> {
        let Some(ballot) = self.paths.get(xpath) else {
            return Vec::new();
        };
        let distinct: BTreeSet<&CandidateValue> = ballot.votes.values().collect();
        distinct.into_iter().cloned().collect()
    }

    fn voters_for_value(&self, xpath: &str, value: &CandidateValue) -> BTreeSet<UserId> {
        self.paths
            .get(xpath)
            .map(|ballot| {
                ballot
                    .votes
                    .iter()
                    .filter(|(_, voted)| *voted == value)
                    .map(|(user, _)| user.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn did_user_vote(&self, user: &str, xpath: &str) -> bool {
        self.paths
            .get(xpath)
            .is_some_and(|ballot| ballot.votes.contains_key(user))
    }

    fn vote_of(&self, user: &str, xpath: &str) -> Option<CandidateValue> {
        self.paths
            .get(xpath)
            .and_then(|ballot| ballot.votes.get(user).cloned())
    }
}

/// One rule of a `RuleValidation` engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationRule {
    /// Paths starting with this prefix are matched.
    pub xpath_prefix: String,
    /// Only this value is matched; `None` matches any value (and the shim check).
    #[serde(default)]
    pub value: Option<String>,
    /// Finding produced on a match.
    pub finding: Finding,
}

/// Rule-table validation engine.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleValidation {
    /// Findings to report.
    pub rules: Vec<ValidationRule>,
    /// Path prefixes for which every check fails with an error.
    pub failing_prefixes: Vec<String>,
}

impl RuleValidation {
    /// Create an engine without rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `finding` for `value` (or any value) on paths under `xpath_prefix`.
    pub fn with_rule(
        mut self,
        xpath_prefix: impl Into<String>,
        value: Option<&str>,
        finding: Finding,
    ) -> Self {
        self.rules.push(ValidationRule {
            xpath_prefix: xpath_prefix.into(),
            value: value.map(str::to_string),
            finding,
        });
        self
    }

    /// Make every check under `xpath_prefix` fail.
    pub fn with_failure(mut self, xpath_prefix: impl Into<String>) -> Self {
        self.failing_prefixes.push(xpath_prefix.into());
        self
    }

    fn matching(
        &self,
        xpath: &str,
        value: Option<&str>,
        wants_examples: bool,
    ) -> Result<Vec<Finding>, VettingError> {
        if self
            .failing_prefixes
            .iter()
            .any(|prefix| xpath.starts_with(prefix.as_str()))
        {
            return Err(VettingError::Collaborator {
                collaborator: "validation",
                xpath: xpath.to_string(),
                reason: "check runner failed".to_string(),
            });
        }
        Ok(self
            .rules
            .iter()
            .filter(|rule| xpath.starts_with(rule.xpath_prefix.as_str()))
            .filter(|rule| rule.value.is_none() || rule.value.as_deref() == value)
            .filter(|rule| (rule.finding.severity == Severity::Example) == wants_examples)
            .map(|rule| rule.finding.clone())
            .collect())
    }
}

impl ValidationEngine for RuleValidation {
    fn check(&self, xpath: &str, value: Option<&str>) -> Result<Vec<Finding>, VettingError> {
        self.matching(xpath, value, false)
    }

    fn examples(&self, xpath: &str, value: Option<&str>) -> Result<Vec<Finding>, VettingError> {
        self.matching(xpath, value, true)
    }
}

/// Catalog entry: display classification plus optional coverage level.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display classification.
    #[serde(flatten)]
    pub info: PathInfo,
    /// Coverage level; the catalog default applies when absent.
    #[serde(default)]
    pub coverage: Option<CoverageLevel>,
}

/// Path classifier and coverage provider backed by a table.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PathCatalog {
    /// Known paths.
    pub paths: BTreeMap<Xpath, CatalogEntry>,
    /// Classify unlisted paths as visible with a derived code.
    pub show_unlisted: bool,
    /// Coverage of paths without an explicit level.
    pub default_coverage: CoverageLevel,
}

impl Default for PathCatalog {
    fn default() -> Self {
        Self {
            paths: BTreeMap::new(),
            show_unlisted: true,
            default_coverage: CoverageLevel::Modern,
        }
    }
}

impl PathCatalog {
    /// Create a catalog that shows unlisted paths at `Modern` coverage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `xpath` with a page, header, and coverage level.
    pub fn with_path(
        mut self,
        xpath: impl Into<Xpath>,
        page: Option<&str>,
        header: &str,
        coverage: CoverageLevel,
    ) -> Self {
        let xpath = xpath.into();
        let info = PathInfo {
            should_hide: false,
            code: default_code(&xpath),
            header: header.to_string(),
            page: page.map(PageId::from),
            pretty_path: None,
        };
        self.paths.insert(
            xpath,
            CatalogEntry {
                info,
                coverage: Some(coverage),
            },
        );
        self
    }

    /// Register `xpath` as hidden.
    pub fn with_hidden(mut self, xpath: impl Into<Xpath>) -> Self {
        let xpath = xpath.into();
        let info = PathInfo {
            should_hide: true,
            code: default_code(&xpath),
            header: String::new(),
            page: None,
            pretty_path: None,
        };
        self.paths.insert(
            xpath,
            CatalogEntry {
                info,
                coverage: None,
            },
        );
        self
    }
}

impl PathClassifier for PathCatalog {
    fn classify(&self, xpath: &str) -> Option<PathInfo> {
        match self.paths.get(xpath) {
            Some(entry) => Some(entry.info.clone()),
            None if self.show_unlisted => Some(PathInfo {
                should_hide: false,
                code: default_code(xpath),
                header: String::new(),
                page: None,
                pretty_path: None,
            }),
            None => None,
        }
    }

    fn paths_for_page(&self, page: &str) -> BTreeSet<Xpath> {
        self.paths
            .iter()
            .filter(|(_, entry)| entry.info.page.as_deref() == Some(page))
            .map(|(xpath, _)| xpath.clone())
            .collect()
    }
}

impl CoverageProvider for PathCatalog {
    fn coverage_level(&self, xpath: &str, _locale: &str) -> CoverageLevel {
        self.paths
            .get(xpath)
            .and_then(|entry| entry.coverage)
            .unwrap_or(self.default_coverage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LANG_DE: &str = r#"//ldml/localeDisplayNames/languages/language[@type="de"]"#;
    const LANG_FR: &str = r#"//ldml/localeDisplayNames/languages/language[@type="fr"]"#;

    fn tree() -> Arc<InMemoryLocaleTree> {
        let mut root = LocaleData::default();
        root.values.insert(LANG_DE.into(), "German".into());
        let mut de = LocaleData::default();
        de.values.insert(LANG_DE.into(), "Deutsch".into());
        let de_ch = LocaleData::default();
        Arc::new(
            InMemoryLocaleTree::new()
                .with_locale("root", root)
                .with_locale("de", de)
                .with_locale("de_CH", de_ch),
        )
    }

    #[test]
    fn bailey_walks_parents_then_code_fallback() {
        let tree = tree();
        let view = tree.view("de_CH");
        let bailey = view.bailey_value(LANG_DE).unwrap();
        assert_eq!(bailey.value, "Deutsch");
        assert_eq!(bailey.locale_where_found.as_deref(), Some("de"));

        let bailey = tree.view("de").bailey_value(LANG_DE).unwrap();
        assert_eq!(bailey.value, "German");
        assert_eq!(bailey.locale_where_found.as_deref(), Some("root"));

        let bailey = view.bailey_value(LANG_FR).unwrap();
        assert_eq!(bailey.value, "fr");
        assert_eq!(bailey.locale_where_found.as_deref(), Some(CODE_FALLBACK_LOCALE));
    }

    #[test]
    fn bailey_prefers_sideways_alias_in_same_locale() {
        let alias = r#"//ldml/localeDisplayNames/languages/language[@type="de"][@alt="short"]"#;
        let mut de = LocaleData::default();
        de.values.insert(alias.into(), "Dt.".into());
        let tree = Arc::new(
            InMemoryLocaleTree::new()
                .with_locale("de", de)
                .with_alias(LANG_DE, alias),
        );
        let bailey = tree.view("de").bailey_value(LANG_DE).unwrap();
        assert_eq!(bailey.value, "Dt.");
        assert_eq!(bailey.path_where_found.as_deref(), Some(alias));
        assert_eq!(bailey.locale_where_found.as_deref(), Some("de"));
    }

    #[test]
    fn exemplar_city_falls_back_to_zone_code() {
        let tree = Arc::new(InMemoryLocaleTree::new());
        let xpath = r#"//ldml/dates/timeZoneNames/zone[@type="America/Los_Angeles"]/exemplarCity"#;
        let bailey = tree.view("root").bailey_value(xpath).unwrap();
        assert_eq!(bailey.value, "Los Angeles");
        assert!(tree.view("root").bailey_value("//ldml/characters/exemplarCharacters").is_none());
    }

    #[test]
    fn source_locale_reports_inheriting_locale() {
        let tree = tree();
        assert_eq!(tree.view("de").source_locale(LANG_DE).locale, "de");
        assert_eq!(tree.view("de_CH").source_locale(LANG_DE).locale, "de");
        assert!(tree.view("de_CH").paths_under("//ldml/localeDisplayNames").contains(LANG_DE));
    }

    #[test]
    fn ballot_box_reports_distinct_voted_values() {
        let ballot = InMemoryBallotBox::new()
            .with_vote(LANG_DE, "u1", CandidateValue::explicit("Deutsch"))
            .with_vote(LANG_DE, "u2", CandidateValue::explicit("Deutsch"))
            .with_vote(LANG_DE, "u3", CandidateValue::Inherited);
        assert_eq!(ballot.values_with_votes(LANG_DE).len(), 2);
        assert_eq!(
            ballot
                .voters_for_value(LANG_DE, &CandidateValue::explicit("Deutsch"))
                .len(),
            2
        );
        assert!(ballot.did_user_vote("u3", LANG_DE));
        assert!(!ballot.did_user_vote("u4", LANG_DE));
        assert_eq!(ballot.vote_of("u3", LANG_DE), Some(CandidateValue::Inherited));
    }

    #[test]
    fn rule_validation_splits_checks_from_examples() {
        let engine = RuleValidation::new()
            .with_rule(
                "//ldml/localeDisplayNames",
                Some("bad"),
                Finding::new(Severity::Error, "badValue", "bad value"),
            )
            .with_rule(
                "//ldml/localeDisplayNames",
                None,
                Finding::new(Severity::Example, "", "<b>example</b>"),
            )
            .with_failure("//ldml/units");
        assert_eq!(engine.check(LANG_DE, Some("bad")).unwrap().len(), 1);
        assert!(engine.check(LANG_DE, Some("good")).unwrap().is_empty());
        assert_eq!(engine.examples(LANG_DE, Some("good")).unwrap().len(), 1);
        assert!(engine.check("//ldml/units/unit", None).is_err());
    }
}
