#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod aggregate;
/// Short-lived cache of assembled pages.
pub mod cache;
/// Assembly configuration and path filters.
pub mod config;
/// Centralized constants for locales, paths, and provenance tags.
pub mod constants;
/// Shared collaborators and per-user sessions.
pub mod context;
/// Coverage levels.
pub mod coverage;
/// Reusable command runners shared by the demos.
pub mod example_apps;
/// Field and value hashes handed to clients.
pub mod hash;
/// Page requests and page assembly.
pub mod page;
/// Data rows and candidate items.
pub mod row;
/// Display ordering and partitioning.
pub mod sort;
/// Collaborator traits and in-memory implementations.
pub mod source;
/// Shared type aliases.
pub mod types;
/// Candidate values.
pub mod value;
/// Serializable snapshots for presentation.
pub mod view;
/// Xpath parsing helpers.
pub mod xpath;

mod errors;

pub use cache::PageCache;
pub use config::{AssemblyConfig, PathFilter};
pub use context::{Session, VettingContext, VettingContextBuilder};
pub use coverage::CoverageLevel;
pub use errors::VettingError;
pub use hash::{field_hash, value_hash, xpath_from_field_hash};
pub use page::{Page, PageAssembler, PageRequest, PageSelector, XpathMatcher};
pub use row::{CandidateItem, DataRow, InheritanceInfo, ItemClass};
pub use sort::{
    DisplaySet, Membership, MembershipTest, Partition, SortMode, create_display_set,
    partition_rows,
};
pub use source::{
    BaileyValue, CoverageProvider, Finding, Fixture, LocaleDataSource, LocaleStore,
    PathClassifier, PathInfo, Severity, SourceLocation, ValidationEngine, VoteRegistry,
    VoteStatus,
};
pub use types::{FieldHash, LocaleId, PageId, PathCode, UserId, ValueHash, Xpath};
pub use value::CandidateValue;
pub use view::{ItemView, PageView, RowView};
