use std::io;

use thiserror::Error;

use crate::types::{LocaleId, Xpath};

/// Error type for context construction, collaborator lookups, and fixture loading.
#[derive(Debug, Error)]
pub enum VettingError {
    /// A collaborator required to assemble a page is not available (fatal).
    #[error("required collaborator '{collaborator}' is unavailable for locale '{locale}'")]
    MissingCollaborator {
        /// Collaborator name.
        collaborator: &'static str,
        /// Locale the lookup was for.
        locale: LocaleId,
    },
    /// A collaborator failed while answering for a single data point.
    #[error("collaborator '{collaborator}' failed on '{xpath}': {reason}")]
    Collaborator {
        /// Collaborator name.
        collaborator: &'static str,
        /// Path being processed.
        xpath: Xpath,
        /// Failure message.
        reason: String,
    },
    /// Data that should agree does not (winning value without an item, etc.).
    #[error("inconsistent data on '{xpath}': {details}")]
    Inconsistent {
        /// Path of the row.
        xpath: Xpath,
        /// What disagrees.
        details: String,
    },
    /// A field hash that does not decode to a row of the page.
    #[error("unknown field hash '{0}'")]
    UnknownFieldHash(String),
    /// Invalid configuration or a poisoned lock.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Fixture IO failure.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Malformed fixture JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
