use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::config::AssemblyConfig;
use crate::coverage::CoverageLevel;
use crate::errors::VettingError;
use crate::page::{Page, PageAssembler, PageRequest, PageSelector};
use crate::types::LocaleId;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct PageKey {
    locale: LocaleId,
    selector: PageSelector,
    coverage: CoverageLevel,
}

/// Short-lived cache of assembled pages.
///
/// Requests with a matcher are never cached; a TTL of zero disables caching.
pub struct PageCache {
    ttl: TimeDelta,
    pages: RwLock<HashMap<PageKey, Arc<Page>>>,
}

impl PageCache {
    /// Cache whose pages live for `ttl_secs` seconds.
    pub fn new(ttl_secs: u64) -> Self {
        let ttl = i64::try_from(ttl_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX);
        Self {
            ttl,
            pages: RwLock::new(HashMap::new()),
        }
    }

    /// Cache using `page_cache_ttl_secs` of `config`.
    pub fn from_config(config: &AssemblyConfig) -> Self {
        Self::new(config.page_cache_ttl_secs)
    }

    fn is_fresh(&self, page: &Page, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(page.created_at()) < self.ttl
    }

    /// Cached page for `request`, assembling and caching it on a miss.
    pub fn get_or_assemble(
        &self,
        assembler: &PageAssembler,
        request: &PageRequest,
    ) -> Result<Arc<Page>, VettingError> {
        if request.matcher.is_some() || self.ttl <= TimeDelta::zero() {
            return assembler.assemble(request).map(Arc::new);
        }
        let key = PageKey {
            locale: request.locale.clone(),
            selector: request.selector.clone(),
            coverage: request
                .max_coverage
                .unwrap_or(assembler.context().config().default_max_coverage),
        };
        {
            let pages = self.pages.read().map_err(|_| poisoned())?;
            if let Some(page) = pages.get(&key)
                && self.is_fresh(page, Utc::now())
            {
                debug!(locale = %key.locale, selector = %key.selector, "page cache hit");
                return Ok(Arc::clone(page));
            }
        }
        let page = Arc::new(assembler.assemble(request)?);
        self.pages
            .write()
            .map_err(|_| poisoned())?
            .insert(key, Arc::clone(&page));
        Ok(page)
    }

    /// Drop every cached page of `locale`.
    pub fn invalidate_locale(&self, locale: &str) -> Result<usize, VettingError> {
        let mut pages = self.pages.write().map_err(|_| poisoned())?;
        let before = pages.len();
        pages.retain(|key, _| key.locale != locale);
        Ok(before - pages.len())
    }

    /// Drop expired pages.
    pub fn purge_expired(&self) -> Result<usize, VettingError> {
        let now = Utc::now();
        let mut pages = self.pages.write().map_err(|_| poisoned())?;
        let before = pages.len();
        pages.retain(|_, page| self.is_fresh(page, now));
        Ok(before - pages.len())
    }

    /// Number of cached pages, expired ones included.
    pub fn len(&self) -> usize {
        self.pages.read().map(|pages| pages.len()).unwrap_or(0)
    }

    /// Returns `true` when no page is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> VettingError {
    VettingError::Configuration("page cache lock poisoned".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::VettingContext;
    use crate::source::{
        InMemoryBallotBox, InMemoryLocaleTree, InMemoryStore, LocaleData, PathCatalog,
        RuleValidation,
    };

    const XPATH: &str = r#"//ldml/localeDisplayNames/languages/language[@type="de"]"#;

    fn assembler() -> PageAssembler {
        let mut de = LocaleData::default();
        de.values.insert(XPATH.into(), "Deutsch".into());
        let tree = InMemoryLocaleTree::new()
            .with_locale("de", de)
            .with_locale("fr", LocaleData::default())
            .with_ballot_box("de", InMemoryBallotBox::new())
            .with_ballot_box("fr", InMemoryBallotBox::new())
            .with_validation(Arc::new(RuleValidation::new()));
        let catalog = Arc::new(PathCatalog::new());
        let context = VettingContext::builder()
            .store(Arc::new(InMemoryStore::new(tree)))
            .classifier(catalog.clone())
            .coverage(catalog)
            .build()
            .unwrap();
        PageAssembler::new(Arc::new(context))
    }

    fn request(locale: &str) -> PageRequest {
        PageRequest::new(locale, PageSelector::Prefix("//ldml/localeDisplayNames".into()))
    }

    #[test]
    fn repeated_requests_share_one_page() {
        let assembler = assembler();
        let cache = PageCache::new(30);
        let first = cache.get_or_assemble(&assembler, &request("de")).unwrap();
        let second = cache.get_or_assemble(&assembler, &request("de")).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn invalidation_is_per_locale() {
        let assembler = assembler();
        let cache = PageCache::new(30);
        cache.get_or_assemble(&assembler, &request("de")).unwrap();
        cache.get_or_assemble(&assembler, &request("fr")).unwrap();
        assert_eq!(cache.invalidate_locale("de").unwrap(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn pages_expire_after_ttl() {
        let assembler = assembler();
        let cache = PageCache::new(30);
        let page = cache.get_or_assemble(&assembler, &request("de")).unwrap();
        assert!(cache.is_fresh(&page, page.created_at() + TimeDelta::seconds(29)));
        assert!(!cache.is_fresh(&page, page.created_at() + TimeDelta::seconds(31)));
    }

    #[test]
    fn zero_ttl_and_matchers_bypass_cache() {
        let assembler = assembler();
        let disabled = PageCache::new(0);
        let a = disabled.get_or_assemble(&assembler, &request("de")).unwrap();
        let b = disabled.get_or_assemble(&assembler, &request("de")).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert!(disabled.is_empty());

        let cache = PageCache::new(30);
        let matched = request("de").with_matcher(Arc::new(|xpath: &str| xpath.contains("de")));
        cache.get_or_assemble(&assembler, &matched).unwrap();
        assert!(cache.is_empty());
    }
}
