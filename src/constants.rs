/// Constants naming special locales and values of the locale-data store.
pub mod locales {
    /// Locale at the top of every inheritance chain.
    pub const ROOT_LOCALE: &str = "root";
    /// Pseudo-locale reported when a value falls back to its own code.
    pub const CODE_FALLBACK_LOCALE: &str = "code-fallback";
    /// Legacy string form of the inheritance marker accepted at the boundary.
    pub const INHERITANCE_MARKER: &str = "↑↑↑";
}

/// Constants used while interpreting xpaths.
pub mod paths {
    /// Attribute carrying the alternate/proposed suffix.
    pub const ATTR_ALT: &str = "alt";
    /// Attribute carrying the draft status on full paths.
    pub const ATTR_DRAFT: &str = "draft";
    /// Attribute holding the type/code of an element.
    pub const ATTR_TYPE: &str = "type";
    /// Marker inside an `alt` value that starts the proposed suffix.
    pub const PROPOSED_MARKER: &str = "proposed";
    /// Proposed suffix given to draft values without an explicit proposal.
    pub const PROPOSED_DRAFT: &str = "proposed-draft";
    /// Prefix of annotation paths.
    pub const ANNOTATION_PREFIX: &str = "//ldml/annotations/annotation";
    /// Prefix shared by zone and metazone name paths.
    pub const TIMEZONE_NAMES_PREFIX: &str = "//ldml/dates/timeZoneNames";
    /// Base path of zone rows.
    pub const ZONE_BASE: &str = "//ldml/dates/timeZoneNames/zone";
    /// Base path of metazone rows.
    pub const METAZONE_BASE: &str = "//ldml/dates/timeZoneNames/metazone";
    /// Element name of metazone entries.
    pub const METAZONE_ELEMENT: &str = "metazone";
    /// Divider between a metazone prefix and a continent name.
    pub const CONTINENT_DIVIDER: char = '~';
    /// Suffixes synthesised for every zone.
    pub const ZONE_SUFFIXES: [&str; 1] = ["/exemplarCity"];
    /// Suffixes synthesised for every metazone.
    pub const METAZONE_SUFFIXES: [&str; 6] = [
        "/long/generic",
        "/long/daylight",
        "/long/standard",
        "/short/generic",
        "/short/daylight",
        "/short/standard",
    ];
}

/// Provenance tags recorded on candidate items.
pub mod provenance {
    use crate::types::ProvenanceTag;

    /// Declared fixed candidate.
    pub const FIXED: ProvenanceTag = "fixed";
    /// Inheritance marker.
    pub const INHERITED: ProvenanceTag = "inherited";
    /// Unvotable root annotation value.
    pub const ROOT_ANNOTATION: ProvenanceTag = "root-annotation";
    /// Value with recorded votes.
    pub const VOTES: ProvenanceTag = "votes";
    /// Current winning value.
    pub const WINNING: ProvenanceTag = "winning";
    /// Last-release value.
    pub const BASELINE: ProvenanceTag = "baseline";
    /// The locale's own stored value.
    pub const OUR: ProvenanceTag = "our";
}

/// Prefix of every row field hash.
pub const FIELD_HASH_PREFIX: &str = "_x";

/// Hash reported for an absent value.
pub const NULL_VALUE_HASH: &str = "null";

/// Default always-excluded path patterns.
pub const DEFAULT_EXCLUDED_PATH_PATTERNS: [&str; 10] = [
    r"^//ldml/segmentations.*",
    r"^//ldml/measurement.*",
    r".*week/minDays.*",
    r".*week/firstDay.*",
    r".*/usesMetazone.*",
    r".*week/weekendEnd.*",
    r".*week/weekendStart.*",
    r"^//ldml/posix/messages/.*expr$",
    r"^//ldml/dates/timeZoneNames/.*/GMT.*exemplarCity$",
    r"^//ldml/dates/.*default",
];

/// Default lifetime of cached pages.
pub const DEFAULT_PAGE_CACHE_TTL_SECS: u64 = 30;
