use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::memory::{InMemoryBallotBox, InMemoryLocaleTree, InMemoryStore, LocaleData};
use super::{PathCatalog, RuleValidation};
use crate::config::AssemblyConfig;
use crate::context::VettingContext;
use crate::errors::VettingError;
use crate::types::{LocaleId, Xpath};

/// Complete in-memory world loaded from one JSON document.
///
/// ```json
/// {
///   "locales": { "root": { "values": { "//ldml/...": "Monday" } }, "de": {} },
///   "ballots": { "de": { "//ldml/...": { "winning": "Montag", "votes": { "u1": "Mo" } } } },
///   "catalog": { "default_coverage": "modern" }
/// }
/// ```
///
/// Votes for `↑↑↑` parse to `CandidateValue::Inherited`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixture {
    /// Assembly configuration.
    pub config: AssemblyConfig,
    /// Locale used for display names; defaults to `en`.
    pub comparison_locale: Option<LocaleId>,
    /// Locale data keyed by locale id.
    pub locales: BTreeMap<LocaleId, LocaleData>,
    /// Sideways aliases (path to the path it inherits from).
    pub aliases: BTreeMap<Xpath, Xpath>,
    /// Ballot boxes keyed by locale id.
    pub ballots: BTreeMap<LocaleId, InMemoryBallotBox>,
    /// Validation rules shared by every locale.
    pub validation: RuleValidation,
    /// Path classification and coverage.
    pub catalog: PathCatalog,
}

impl Fixture {
    /// Parse a fixture document.
    pub fn from_json_str(raw: &str) -> Result<Self, VettingError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read and parse a fixture file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, VettingError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Build the locale store described by this fixture.
    pub fn store(&self) -> InMemoryStore {
        let mut tree = InMemoryLocaleTree::new()
            .with_validation(Arc::new(self.validation.clone()));
        for (locale, data) in &self.locales {
            tree = tree.with_locale(locale.clone(), data.clone());
        }
        for (xpath, alias) in &self.aliases {
            tree = tree.with_alias(xpath.clone(), alias.clone());
        }
        for (locale, ballot) in &self.ballots {
            tree = tree.with_ballot_box(locale.clone(), ballot.clone());
        }
        InMemoryStore::new(tree)
    }

    /// Build a ready-to-use context from this fixture.
    pub fn context(&self) -> Result<VettingContext, VettingError> {
        let catalog = Arc::new(self.catalog.clone());
        let mut builder = VettingContext::builder()
            .config(self.config.clone())
            .store(Arc::new(self.store()))
            .classifier(catalog.clone())
            .coverage(catalog);
        if let Some(locale) = &self.comparison_locale {
            builder = builder.comparison_locale(locale.clone());
        }
        builder.build()
    }
}
