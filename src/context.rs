use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::{AssemblyConfig, PathFilter};
use crate::errors::VettingError;
use crate::source::{CoverageProvider, LocaleStore, PathClassifier};
use crate::types::{LocaleId, UserId};

/// Locale whose values are shown as display names unless overridden.
pub const DEFAULT_COMPARISON_LOCALE: &str = "en";

/// Process-wide assembly context.
///
/// Built once at startup, then shared through `Arc` by every page request.
/// Nothing in here changes after `build`.
pub struct VettingContext {
    config: AssemblyConfig,
    path_filter: PathFilter,
    store: Arc<dyn LocaleStore>,
    classifier: Arc<dyn PathClassifier>,
    coverage: Arc<dyn CoverageProvider>,
    comparison_locale: LocaleId,
}

impl VettingContext {
    /// Start building a context.
    pub fn builder() -> VettingContextBuilder {
        VettingContextBuilder::default()
    }

    /// Assembly configuration.
    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// Compiled path exclusions.
    pub fn path_filter(&self) -> &PathFilter {
        &self.path_filter
    }

    /// Per-locale collaborator lookup.
    pub fn store(&self) -> &Arc<dyn LocaleStore> {
        &self.store
    }

    /// Path classification (hide flag, code, header).
    pub fn classifier(&self) -> &Arc<dyn PathClassifier> {
        &self.classifier
    }

    /// Coverage levels of paths.
    pub fn coverage(&self) -> &Arc<dyn CoverageProvider> {
        &self.coverage
    }

    /// Locale used for display names and metazone completeness.
    pub fn comparison_locale(&self) -> &str {
        &self.comparison_locale
    }
}

/// Builder for `VettingContext`; every collaborator is required.
#[derive(Default)]
pub struct VettingContextBuilder {
    config: Option<AssemblyConfig>,
    store: Option<Arc<dyn LocaleStore>>,
    classifier: Option<Arc<dyn PathClassifier>>,
    coverage: Option<Arc<dyn CoverageProvider>>,
    comparison_locale: Option<LocaleId>,
}

impl VettingContextBuilder {
    /// Use `config`; defaults apply when never set.
    pub fn config(mut self, config: AssemblyConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the locale store.
    pub fn store(mut self, store: Arc<dyn LocaleStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the path classifier.
    pub fn classifier(mut self, classifier: Arc<dyn PathClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Set the coverage provider.
    pub fn coverage(mut self, coverage: Arc<dyn CoverageProvider>) -> Self {
        self.coverage = Some(coverage);
        self
    }

    /// Override the comparison locale (`en` by default).
    pub fn comparison_locale(mut self, locale: impl Into<LocaleId>) -> Self {
        self.comparison_locale = Some(locale.into());
        self
    }

    /// Validate and freeze the context.
    pub fn build(self) -> Result<VettingContext, VettingError> {
        let missing = |collaborator| VettingError::MissingCollaborator {
            collaborator,
            locale: "*".to_string(),
        };
        let config = self.config.unwrap_or_default();
        let path_filter = config.path_filter()?;
        Ok(VettingContext {
            store: self.store.ok_or_else(|| missing("locale store"))?,
            classifier: self.classifier.ok_or_else(|| missing("path classifier"))?,
            coverage: self.coverage.ok_or_else(|| missing("coverage provider"))?,
            comparison_locale: self
                .comparison_locale
                .unwrap_or_else(|| DEFAULT_COMPARISON_LOCALE.to_string()),
            path_filter,
            config,
        })
    }
}

/// One user's session.
///
/// Page construction for a session is serialised through `gate`, so the same
/// session never builds two pages at once.
#[derive(Debug, Default)]
pub struct Session {
    id: String,
    user: Option<UserId>,
    gate: Mutex<()>,
}

impl Session {
    /// Anonymous session with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            user: None,
            gate: Mutex::new(()),
        }
    }

    /// Attach the requesting user.
    pub fn with_user(mut self, user: impl Into<UserId>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Session id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Requesting user, if any.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Hold the session gate for the duration of one page construction.
    pub fn enter(&self) -> Result<MutexGuard<'_, ()>, VettingError> {
        self.gate.lock().map_err(|_| {
            VettingError::Configuration(format!("session '{}' gate poisoned", self.id))
        })
    }
}
