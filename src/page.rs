//! Page assembly: selecting the xpaths of a page and building their rows.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::aggregate::CandidateAggregator;
use crate::constants::locales::ROOT_LOCALE;
use crate::constants::paths::{
    ATTR_TYPE, CONTINENT_DIVIDER, METAZONE_BASE, METAZONE_ELEMENT, METAZONE_SUFFIXES,
    TIMEZONE_NAMES_PREFIX, ZONE_BASE, ZONE_SUFFIXES,
};
use crate::context::{Session, VettingContext};
use crate::coverage::CoverageLevel;
use crate::errors::VettingError;
use crate::hash::xpath_from_field_hash;
use crate::row::DataRow;
use crate::sort::{DisplaySet, SortMode, create_display_set};
use crate::source::{LocaleDataSource, PathInfo};
use crate::types::{LocaleId, PageId, UserId, Xpath};
use crate::xpath::XpathParts;

/// What a page shows: a named logical page or every path under a prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSelector {
    /// Named logical page.
    Page(PageId),
    /// Every path under this prefix.
    Prefix(Xpath),
}

impl fmt::Display for PageSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSelector::Page(id) => write!(f, "page:{id}"),
            PageSelector::Prefix(prefix) => write!(f, "prefix:{prefix}"),
        }
    }
}

/// Caller-supplied filter for targeted views.
pub trait XpathMatcher: Send + Sync {
    /// Whether `xpath` may become a row.
    fn matches(&self, xpath: &str) -> bool;
}

impl<F> XpathMatcher for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn matches(&self, xpath: &str) -> bool {
        self(xpath)
    }
}

/// One page request.
#[derive(Clone)]
pub struct PageRequest {
    /// Locale whose rows are assembled.
    pub locale: LocaleId,
    /// Which paths the page covers.
    pub selector: PageSelector,
    /// Only xpaths accepted by the matcher become rows.
    pub matcher: Option<Arc<dyn XpathMatcher>>,
    /// Rows above this level are never created; the config default applies when unset.
    pub max_coverage: Option<CoverageLevel>,
}

impl PageRequest {
    /// Request without matcher or coverage cap.
    pub fn new(locale: impl Into<LocaleId>, selector: PageSelector) -> Self {
        Self {
            locale: locale.into(),
            selector,
            matcher: None,
            max_coverage: None,
        }
    }

    /// Restrict rows to paths accepted by `matcher`.
    pub fn with_matcher(mut self, matcher: Arc<dyn XpathMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    /// Cap the coverage level of created rows.
    pub fn with_max_coverage(mut self, level: CoverageLevel) -> Self {
        self.max_coverage = Some(level);
        self
    }
}

/// Assembled rows of one page.
#[derive(Debug)]
pub struct Page {
    locale: LocaleId,
    selector: PageSelector,
    max_coverage: CoverageLevel,
    created_at: DateTime<Utc>,
    user: Option<UserId>,
    rows: IndexMap<Xpath, DataRow>,
}

impl Page {
    /// Locale of the page.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Selector the page was built from.
    pub fn selector(&self) -> &PageSelector {
        &self.selector
    }

    /// Effective coverage cap.
    pub fn max_coverage(&self) -> CoverageLevel {
        self.max_coverage
    }

    /// Assembly time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// User the page was built for, if any.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Rows in assembly order.
    pub fn rows(&self) -> impl Iterator<Item = &DataRow> {
        self.rows.values()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for `xpath`.
    pub fn get_row(&self, xpath: &str) -> Option<&DataRow> {
        self.rows.get(xpath)
    }

    /// Row addressed by a client-held field hash.
    pub fn row_by_field_hash(&self, hash: &str) -> Result<&DataRow, VettingError> {
        let xpath = xpath_from_field_hash(hash)?;
        self.rows
            .get(&xpath)
            .ok_or_else(|| VettingError::UnknownFieldHash(hash.to_string()))
    }

    /// Ordered and partitioned view of the rows.
    pub fn display_set(&self, mode: SortMode) -> DisplaySet {
        create_display_set(self.rows.values(), mode)
    }
}

/// Candidate xpaths of a prefix request.
struct PrefixScope {
    /// Prefix every candidate must start with.
    work_prefix: String,
    /// Metazones selected through `metazone~Continent`.
    continent_metazones: Option<BTreeSet<String>>,
    /// A `[@type=...]` zoom-in.
    single: bool,
}

impl PrefixScope {
    fn new(prefix: &str, context: &VettingContext) -> Self {
        let mut scope = Self {
            work_prefix: prefix.to_string(),
            continent_metazones: None,
            single: prefix.contains("@type"),
        };
        if !prefix.starts_with(METAZONE_BASE) {
            return scope;
        }
        if let Some((_, continent)) = prefix.split_once(CONTINENT_DIVIDER) {
            let metazones = context
                .config()
                .metazones_by_continent
                .get(continent)
                .cloned()
                .unwrap_or_else(|| {
                    warn!(continent, "no metazones configured for continent");
                    Vec::new()
                });
            scope.continent_metazones = Some(metazones.into_iter().collect());
        }
        if !scope.single {
            scope.work_prefix = METAZONE_BASE.to_string();
        }
        scope
    }

    fn admits(&self, xpath: &str) -> bool {
        if !xpath.starts_with(&self.work_prefix) {
            return false;
        }
        match &self.continent_metazones {
            Some(metazones) => XpathParts::parse(xpath)
                .find_attribute(METAZONE_ELEMENT, ATTR_TYPE)
                .is_some_and(|metazone| metazones.contains(metazone)),
            None => true,
        }
    }
}

/// Builds pages from the collaborators of a `VettingContext`.
#[derive(Clone)]
pub struct PageAssembler {
    context: Arc<VettingContext>,
}

impl PageAssembler {
    /// Assembler over a shared context.
    pub fn new(context: Arc<VettingContext>) -> Self {
        Self { context }
    }

    /// The shared context.
    pub fn context(&self) -> &Arc<VettingContext> {
        &self.context
    }

    /// Assemble the rows of `selector` in `locale` at the default coverage level.
    pub fn assemble_page(
        &self,
        locale: &str,
        selector: PageSelector,
        matcher: Option<Arc<dyn XpathMatcher>>,
    ) -> Result<Page, VettingError> {
        let mut request = PageRequest::new(locale, selector);
        request.matcher = matcher;
        self.assemble(&request)
    }

    /// Assemble a page while holding the session gate.
    pub fn assemble_for_session(
        &self,
        session: &Session,
        request: &PageRequest,
    ) -> Result<Page, VettingError> {
        let _gate = session.enter()?;
        let mut page = self.assemble(request)?;
        page.user = session.user().map(str::to_string);
        Ok(page)
    }

    /// Assemble the page described by `request`.
    pub fn assemble(&self, request: &PageRequest) -> Result<Page, VettingError> {
        let started = Instant::now();
        let locale = request.locale.as_str();
        let store = self.context.store();
        let missing = |collaborator| VettingError::MissingCollaborator {
            collaborator,
            locale: locale.to_string(),
        };
        let source = store
            .source(locale)
            .ok_or_else(|| missing("locale data source"))?;
        let ballot = store
            .ballot_box(locale)
            .ok_or_else(|| missing("ballot box"))?;
        let validation = store
            .validation(locale)
            .ok_or_else(|| missing("validation engine"))?;
        let root = store.source(ROOT_LOCALE);
        let comparison = store.source(self.context.comparison_locale());
        let max_coverage = request
            .max_coverage
            .unwrap_or(self.context.config().default_max_coverage);
        debug!(locale, selector = %request.selector, max_coverage = %max_coverage, "assembling page");

        let aggregator = CandidateAggregator {
            config: self.context.config(),
            source: source.as_ref(),
            ballot: &ballot,
            validation: validation.as_ref(),
            root: root.as_deref(),
            comparison: comparison.as_deref(),
        };
        let mut builder = PageBuilder {
            context: &self.context,
            aggregator,
            matcher: request.matcher.as_deref(),
            max_coverage,
            rows: IndexMap::new(),
        };

        match &request.selector {
            PageSelector::Page(page_id) => {
                let base = source.paths_under("");
                let extras: BTreeSet<Xpath> = source
                    .extra_paths("")
                    .difference(&base)
                    .cloned()
                    .collect();
                for xpath in self.context.classifier().paths_for_page(page_id) {
                    let is_extra = extras.contains(&xpath);
                    if is_extra || base.contains(&xpath) {
                        builder.add_row(&xpath, is_extra);
                    }
                }
            }
            PageSelector::Prefix(prefix) => {
                let scope = PrefixScope::new(prefix, &self.context);
                let lookup = prefix
                    .split_once(CONTINENT_DIVIDER)
                    .map_or(prefix.as_str(), |(base, _)| base);
                let base = source.paths_under(lookup);
                let extras: BTreeSet<Xpath> = source
                    .extra_paths(&scope.work_prefix)
                    .difference(&base)
                    .cloned()
                    .collect();
                for xpath in base.union(&extras) {
                    if scope.admits(xpath) {
                        builder.add_row(xpath, extras.contains(xpath));
                    }
                }
                if prefix.starts_with(TIMEZONE_NAMES_PREFIX) {
                    builder.ensure_complete(prefix, &scope, comparison.as_deref());
                }
            }
        }

        let rows = builder.rows;
        debug!(
            locale,
            selector = %request.selector,
            rows = rows.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "page assembled"
        );
        Ok(Page {
            locale: locale.to_string(),
            selector: request.selector.clone(),
            max_coverage,
            created_at: Utc::now(),
            user: None,
            rows,
        })
    }
}

/// Per-request state while rows are being added.
struct PageBuilder<'a> {
    context: &'a VettingContext,
    aggregator: CandidateAggregator<'a>,
    matcher: Option<&'a dyn XpathMatcher>,
    max_coverage: CoverageLevel,
    rows: IndexMap<Xpath, DataRow>,
}

impl PageBuilder<'_> {
    /// Apply the display filters; returns the classification when `xpath` may be shown.
    fn admit(&self, xpath: &str) -> Option<(PathInfo, CoverageLevel)> {
        if self.context.path_filter().is_excluded(xpath) {
            return None;
        }
        let info = self.context.classifier().classify(xpath)?;
        if info.should_hide {
            return None;
        }
        if self.matcher.is_some_and(|matcher| !matcher.matches(xpath)) {
            return None;
        }
        let coverage = self
            .context
            .coverage()
            .coverage_level(xpath, self.aggregator.source.locale());
        (coverage <= self.max_coverage).then_some((info, coverage))
    }

    fn add_row(&mut self, xpath: &str, is_extra: bool) {
        let Some((info, coverage)) = self.admit(xpath) else {
            return;
        };
        let mut row = self.aggregator.new_row(xpath, info, coverage);
        self.aggregator.populate(&mut row, is_extra);
        self.rows.insert(xpath.to_string(), row);
    }

    /// Synthesise the zone or metazone rows a time-zone page is expected to show.
    fn ensure_complete(
        &mut self,
        prefix: &str,
        scope: &PrefixScope,
        comparison: Option<&dyn LocaleDataSource>,
    ) {
        let is_metazone = prefix.starts_with(METAZONE_BASE);
        let (base, suffixes): (&str, &[&str]) = if is_metazone {
            (METAZONE_BASE, METAZONE_SUFFIXES.as_slice())
        } else {
            (ZONE_BASE, ZONE_SUFFIXES.as_slice())
        };
        let element = if is_metazone { METAZONE_ELEMENT } else { "zone" };
        let zoomed = XpathParts::parse(prefix)
            .find_attribute(element, ATTR_TYPE)
            .map(str::to_string);
        let config = self.context.config();
        let zones: Vec<String> = match (&zoomed, &scope.continent_metazones) {
            (Some(zone), _) => vec![zone.clone()],
            (None, Some(metazones)) => metazones.iter().cloned().collect(),
            (None, None) if is_metazone => config
                .metazones_by_continent
                .values()
                .flatten()
                .cloned()
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect(),
            (None, None) => config.zone_ids.clone(),
        };

        for zone in &zones {
            for suffix in suffixes {
                if scope.single && !prefix.contains(suffix) {
                    continue;
                }
                let xpath = format!("{base}[@{ATTR_TYPE}=\"{zone}\"]{suffix}");
                if let Some(row) = self.rows.get_mut(&xpath) {
                    self.aggregator.attach_shim(row);
                    continue;
                }
                if is_metazone
                    && comparison
                        .and_then(|source| source.value(&xpath))
                        .is_none_or(|value| value.is_empty())
                {
                    continue;
                }
                self.add_row(&xpath, true);
            }
        }
    }
}
