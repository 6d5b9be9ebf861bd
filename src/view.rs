//! Serializable snapshots of pages, rows, and items for the presentation layer.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

use crate::coverage::CoverageLevel;
use crate::page::{Page, PageSelector};
use crate::row::{CandidateItem, DataRow, InheritanceInfo, ItemClass};
use crate::sort::{DisplaySet, SortMode};
use crate::source::{Finding, VoteStatus};
use crate::types::{FieldHash, LocaleId, UserId, ValueHash, Xpath};

/// Snapshot of one candidate item.
#[derive(Clone, Debug, Serialize)]
pub struct ItemView {
    /// Boundary form of the value (`↑↑↑` for the marker, absent for shims).
    pub raw_value: Option<String>,
    /// Value shown to the user; the inherited value for the marker.
    pub value: Option<String>,
    /// Hash clients vote with.
    pub value_hash: ValueHash,
    /// Display class.
    pub class: ItemClass,
    /// Holds the winning value.
    pub is_winning: bool,
    /// Holds the baseline value.
    pub is_baseline: bool,
    /// Shown for reference only.
    pub is_unvotable: bool,
    /// Users voting for this item.
    pub voters: BTreeSet<UserId>,
    /// Validation findings.
    pub tests: Vec<Finding>,
    /// Example rendering.
    pub example: Option<String>,
    /// Provenance trail when candidate history is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,
}

impl ItemView {
    /// Snapshot `item` in the context of `row`.
    pub fn new(row: &DataRow, item: &CandidateItem) -> Self {
        Self {
            raw_value: item.value().map(|value| value.as_raw().to_string()),
            value: row.resolved_value(item).map(str::to_string),
            value_hash: item.value_hash(),
            class: row.item_class(item),
            is_winning: row.is_winning(item),
            is_baseline: item.is_baseline(),
            is_unvotable: item.is_unvotable(),
            voters: row.voters(item).clone(),
            tests: item.tests().map(<[Finding]>::to_vec).unwrap_or_default(),
            example: item.example().map(str::to_string),
            history: item.history().map(str::to_string),
        }
    }
}

/// Snapshot of one row and its items.
#[derive(Clone, Debug, Serialize)]
pub struct RowView {
    /// Path of the row.
    pub xpath: Xpath,
    /// Key clients use to address the row.
    pub field_hash: FieldHash,
    /// Short path code.
    pub code: String,
    /// Path header.
    pub header: String,
    /// Comparison-locale name.
    pub display_name: String,
    /// English value.
    pub raw_english: Option<String>,
    /// Coverage level.
    pub coverage: CoverageLevel,
    /// Numeric form of `coverage`.
    pub coverage_value: u8,
    /// Winning value in boundary form.
    pub winning_value: Option<String>,
    /// Hash of the winning value.
    pub winning_value_hash: ValueHash,
    /// Status of the winning value.
    pub winning_status: VoteStatus,
    /// Baseline value in boundary form.
    pub baseline_value: Option<String>,
    /// Status of the baseline value.
    pub baseline_status: VoteStatus,
    /// Inherited value and where it was found.
    pub inherited: Option<InheritanceInfo>,
    /// Path the inherited value came from, when not this one.
    pub inherited_xpath: Option<Xpath>,
    /// Some item has an error.
    pub has_errors: bool,
    /// Some item has a warning.
    pub has_warnings: bool,
    /// Other proposed alternates exist.
    pub has_multiple_proposals: bool,
    /// Only fixed candidates may be chosen.
    pub fixed_candidates: bool,
    /// Items in insertion order.
    pub items: Vec<ItemView>,
    /// Shim item of a path without data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shim: Option<ItemView>,
    /// Present only when the view was built for a user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote_value_hash: Option<ValueHash>,
    /// Whether the viewing user voted on this row.
    pub user_has_voted: bool,
}

impl RowView {
    /// Snapshot `row`, including the vote of `user` when given.
    pub fn new(row: &DataRow, user: Option<&str>) -> Self {
        Self {
            xpath: row.xpath().to_string(),
            field_hash: row.field_hash().to_string(),
            code: row.code().to_string(),
            header: row.header().to_string(),
            display_name: row.display_name().to_string(),
            raw_english: row.raw_english().map(str::to_string),
            coverage: row.coverage(),
            coverage_value: row.coverage().value(),
            winning_value: row.winning_value().map(|value| value.as_raw().to_string()),
            winning_value_hash: row.winning_value_hash(),
            winning_status: row.winning_status(),
            baseline_value: row.baseline_value().map(|value| value.as_raw().to_string()),
            baseline_status: row.baseline_status(),
            inherited: row.inherited().cloned(),
            inherited_xpath: row.inherited_xpath().map(str::to_string),
            has_errors: row.has_errors(),
            has_warnings: row.has_warnings(),
            has_multiple_proposals: row.has_multiple_proposals(),
            fixed_candidates: row.fixed_candidates(),
            items: row.items().map(|item| ItemView::new(row, item)).collect(),
            shim: row.shim_item().map(|item| ItemView::new(row, item)),
            vote_value_hash: user.and_then(|user| row.vote_value_hash(user)),
            user_has_voted: user.is_some_and(|user| row.user_has_voted(user)),
        }
    }
}

/// Snapshot of a page with its display set.
#[derive(Clone, Debug, Serialize)]
pub struct PageView {
    /// Locale of the page.
    pub locale: LocaleId,
    /// Selector the page was built from.
    pub selector: PageSelector,
    /// Coverage cap the page was built with.
    pub max_coverage: CoverageLevel,
    /// Assembly time.
    pub created_at: DateTime<Utc>,
    /// Rows in assembly order.
    pub rows: Vec<RowView>,
    /// Display order and partitions.
    pub display_set: DisplaySet,
}

impl PageView {
    /// Snapshot `page` sorted with `mode`.
    pub fn new(page: &Page, mode: SortMode) -> Self {
        Self {
            locale: page.locale().to_string(),
            selector: page.selector().clone(),
            max_coverage: page.max_coverage(),
            created_at: page.created_at(),
            rows: page
                .rows()
                .map(|row| RowView::new(row, page.user()))
                .collect(),
            display_set: page.display_set(mode),
        }
    }
}
