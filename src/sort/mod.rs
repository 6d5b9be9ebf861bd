//! Ordering and partitioning of rows for display.
//!
//! Each `SortMode` contributes a membership table and a comparator. Rows
//! sort by (first matching membership, mode comparator, xpath); rows that
//! match nothing sort last into an unnamed partition.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::constants::paths::{ATTR_TYPE, METAZONE_ELEMENT};
use crate::row::DataRow;
use crate::source::VoteStatus;
use crate::types::FieldHash;
use crate::xpath::XpathParts;

mod interest;
pub mod metazone;

pub use interest::interest_memberships;
pub use metazone::{METAZONE_GROUPS, MetazoneGroup};

/// Display ordering strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Alphabetic by path code.
    #[default]
    Code,
    /// Alphabetic by comparison-locale display name.
    Name,
    /// Grouped by metazone.
    Metazone,
    /// Grouped by what needs attention first.
    Interest,
    /// Grouped by path header.
    PathHeader,
}

impl SortMode {
    /// Wire name of the mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            SortMode::Code => "code",
            SortMode::Name => "name",
            SortMode::Metazone => "metazone",
            SortMode::Interest => "interest",
            SortMode::PathHeader => "path_header",
        }
    }

    fn compare(self, a: &DataRow, b: &DataRow) -> Ordering {
        match self {
            SortMode::Name => compare_names(a, b).then_with(|| compare_codes(a, b)),
            SortMode::PathHeader => a.header().cmp(b.header()).then_with(|| compare_codes(a, b)),
            SortMode::Code | SortMode::Metazone | SortMode::Interest => compare_codes(a, b),
        }
    }

    /// Memberships in priority order for this mode over `rows`.
    fn memberships(self, rows: &[&DataRow]) -> Vec<Membership> {
        match self {
            SortMode::Code | SortMode::Name => Vec::new(),
            SortMode::Interest => interest_memberships(),
            SortMode::Metazone => METAZONE_GROUPS
                .iter()
                .map(|group| Membership {
                    name: group.name.to_string(),
                    help: group.help.map(str::to_string),
                    test: MembershipTest::Metazone(group.id),
                })
                .collect(),
            SortMode::PathHeader => {
                let mut headers: Vec<&str> = rows
                    .iter()
                    .map(|row| row.header())
                    .filter(|header| !header.is_empty())
                    .collect();
                headers.sort_unstable();
                headers.dedup();
                headers
                    .into_iter()
                    .map(|header| Membership {
                        name: header.to_string(),
                        help: None,
                        test: MembershipTest::Header(header.to_string()),
                    })
                    .collect()
            }
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn compare_codes(a: &DataRow, b: &DataRow) -> Ordering {
    a.code()
        .to_lowercase()
        .cmp(&b.code().to_lowercase())
        .then_with(|| a.code().cmp(b.code()))
}

fn compare_names(a: &DataRow, b: &DataRow) -> Ordering {
    // Rows without a display name go after named rows.
    match (a.display_name().is_empty(), b.display_name().is_empty()) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        _ => a
            .display_name()
            .to_lowercase()
            .cmp(&b.display_name().to_lowercase()),
    }
}

/// Predicate deciding whether a row belongs to a membership.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MembershipTest {
    /// Some item has an error.
    HasErrors,
    /// More than one candidate has voters and nothing is approved yet.
    Disputed,
    /// Some item has a warning.
    HasWarnings,
    /// A winning value exists but is not approved.
    NotApproved,
    /// The winning value is approved.
    Approved,
    /// Nothing wins and nothing is inherited.
    Missing,
    /// Row belongs to the named metazone.
    Metazone(&'static str),
    /// Row carries this header.
    Header(String),
    /// Matches an explicit list of xpaths.
    Xpaths(Vec<String>),
}

impl MembershipTest {
    /// Whether `row` satisfies the test.
    pub fn matches(&self, row: &DataRow) -> bool {
        match self {
            MembershipTest::HasErrors => row.has_errors(),
            MembershipTest::Disputed => {
                row.winning_status() != VoteStatus::Approved
                    && row.items().filter(|item| !row.voters(item).is_empty()).count() > 1
            }
            MembershipTest::HasWarnings => row.has_warnings(),
            MembershipTest::NotApproved => {
                row.winning_value().is_some() && row.winning_status() != VoteStatus::Approved
            }
            MembershipTest::Approved => row.winning_status() == VoteStatus::Approved,
            MembershipTest::Missing => row.winning_value().is_none() && row.inherited().is_none(),
            MembershipTest::Metazone(id) => metazone_of(row).as_deref() == Some(*id),
            MembershipTest::Header(header) => row.header() == header,
            MembershipTest::Xpaths(xpaths) => xpaths.iter().any(|xpath| xpath == row.xpath()),
        }
    }
}

/// Named predicate used to bucket rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Membership {
    /// Partition name.
    pub name: String,
    /// Help text shown with the partition.
    pub help: Option<String>,
    /// Predicate deciding membership.
    pub test: MembershipTest,
}

impl Membership {
    /// Membership named `name` testing rows with `test`.
    pub fn new(name: impl Into<String>, help: Option<&str>, test: MembershipTest) -> Self {
        Self {
            name: name.into(),
            help: help.map(str::to_string),
            test,
        }
    }
}

/// Contiguous `[start, limit)` range of the sorted rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Partition {
    /// `None` for the catch-all partition.
    pub name: Option<String>,
    /// Help text shown with the partition.
    pub help: Option<String>,
    /// First row index.
    pub start: usize,
    /// One past the last row index.
    pub limit: usize,
}

impl Partition {
    /// Number of rows in the partition.
    pub fn len(&self) -> usize {
        self.limit - self.start
    }

    /// Whether the range is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.limit
    }

    /// Whether `index` falls in the range.
    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.limit).contains(&index)
    }
}

/// Sorted row hashes plus the partitions tiling them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplaySet {
    /// Mode the rows were sorted with.
    pub sort_mode: SortMode,
    /// Field hashes in display order.
    pub rows: Vec<FieldHash>,
    /// Partitions tiling `rows`.
    pub partitions: Vec<Partition>,
}

impl DisplaySet {
    /// Partition holding the row at `index`.
    pub fn partition_of(&self, index: usize) -> Option<&Partition> {
        self.partitions.iter().find(|partition| partition.contains(index))
    }

    /// Position of the row with `field_hash`.
    pub fn position(&self, field_hash: &str) -> Option<usize> {
        self.rows.iter().position(|hash| hash == field_hash)
    }
}

/// Order and partition `rows` with the memberships of `mode`.
pub fn create_display_set<'r>(rows: impl IntoIterator<Item = &'r DataRow>, mode: SortMode) -> DisplaySet {
    let rows: Vec<&DataRow> = rows.into_iter().collect();
    let memberships = mode.memberships(&rows);
    if mode != SortMode::Metazone {
        return partition_rows(rows, &memberships, mode);
    }
    // Metazone memberships follow `METAZONE_GROUPS`, so the group index is the key.
    let keyed = rows
        .into_iter()
        .map(|row| (metazone_of(row).as_deref().and_then(metazone::group_index), row))
        .collect();
    sort_and_partition(keyed, &memberships, mode)
}

/// Order and partition `rows` with an explicit membership table.
pub fn partition_rows(rows: Vec<&DataRow>, memberships: &[Membership], mode: SortMode) -> DisplaySet {
    let keyed = rows
        .into_iter()
        .map(|row| (membership_key(row, memberships), row))
        .collect();
    sort_and_partition(keyed, memberships, mode)
}

/// Metazone id of the row's path, if it names one.
fn metazone_of(row: &DataRow) -> Option<String> {
    XpathParts::parse(row.xpath())
        .find_attribute(METAZONE_ELEMENT, ATTR_TYPE)
        .map(str::to_string)
}

/// Index of the first membership `row` matches; the path is parsed at most once.
fn membership_key(row: &DataRow, memberships: &[Membership]) -> Option<usize> {
    let mut metazone: Option<Option<String>> = None;
    memberships.iter().position(|membership| match &membership.test {
        MembershipTest::Metazone(id) => {
            metazone.get_or_insert_with(|| metazone_of(row)).as_deref() == Some(*id)
        }
        test => test.matches(row),
    })
}

fn sort_and_partition(
    mut keyed: Vec<(Option<usize>, &DataRow)>,
    memberships: &[Membership],
    mode: SortMode,
) -> DisplaySet {
    keyed.sort_by(|(ka, a), (kb, b)| {
        // Unmatched rows (None) sort after every membership.
        let ka = ka.unwrap_or(usize::MAX);
        let kb = kb.unwrap_or(usize::MAX);
        ka.cmp(&kb)
            .then_with(|| mode.compare(a, b))
            .then_with(|| a.xpath().cmp(b.xpath()))
    });

    let mut partitions: Vec<Partition> = Vec::new();
    let mut current: Option<Option<usize>> = None;
    for (index, (key, _)) in keyed.iter().enumerate() {
        if current == Some(*key) {
            if let Some(last) = partitions.last_mut() {
                last.limit = index + 1;
            }
            continue;
        }
        current = Some(*key);
        let membership = key.and_then(|idx| memberships.get(idx));
        partitions.push(Partition {
            name: membership.map(|m| m.name.clone()),
            help: membership.and_then(|m| m.help.clone()),
            start: index,
            limit: index + 1,
        });
    }

    DisplaySet {
        sort_mode: mode,
        rows: keyed
            .iter()
            .map(|(_, row)| row.field_hash().to_string())
            .collect(),
        partitions,
    }
}
