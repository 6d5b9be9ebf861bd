use std::collections::BTreeSet;
use std::sync::Arc;

use locale_vetting::constants::paths::{METAZONE_BASE, ZONE_BASE};
use locale_vetting::source::{
    InMemoryBallotBox, InMemoryLocaleTree, InMemoryStore, LocaleData, PathCatalog, RuleValidation,
};
use locale_vetting::{
    AssemblyConfig, CandidateValue, CoverageLevel, Finding, ItemClass, Page, PageAssembler,
    PageRequest, PageSelector, RowView, Session, Severity, VettingContext, VettingError,
    VoteStatus, field_hash, value_hash,
};

const MON: &str = r#"//ldml/dates/calendars/calendar[@type="gregorian"]/days/dayContext[@type="format"]/dayWidth[@type="wide"]/day[@type="mon"]"#;
const TUE: &str = r#"//ldml/dates/calendars/calendar[@type="gregorian"]/days/dayContext[@type="format"]/dayWidth[@type="wide"]/day[@type="tue"]"#;
const MIN_DAYS: &str = r#"//ldml/dates/calendars/calendar[@type="gregorian"]/week/minDays"#;
const DATES: &str = "//ldml/dates";

fn locale(values: &[(&str, &str)]) -> LocaleData {
    let mut data = LocaleData::default();
    for (xpath, value) in values {
        data.values.insert(xpath.to_string(), value.to_string());
    }
    data
}

/// root/en/de tree with Monday, Montag, and a root-only Tuesday.
fn weekday_tree(ballot: InMemoryBallotBox, validation: RuleValidation) -> InMemoryLocaleTree {
    InMemoryLocaleTree::new()
        .with_locale(
            "root",
            locale(&[(MON, "Monday"), (TUE, "Tuesday"), (MIN_DAYS, "1")]),
        )
        .with_locale("en", locale(&[(MON, "Monday"), (TUE, "Tuesday")]))
        .with_locale("de", locale(&[(MON, "Montag")]))
        .with_ballot_box("de", ballot)
        .with_validation(Arc::new(validation))
}

fn build_assembler(tree: InMemoryLocaleTree, catalog: PathCatalog, config: AssemblyConfig) -> PageAssembler {
    let catalog = Arc::new(catalog);
    let context = VettingContext::builder()
        .config(config)
        .store(Arc::new(InMemoryStore::new(tree)))
        .classifier(catalog.clone())
        .coverage(catalog)
        .build()
        .unwrap();
    PageAssembler::new(Arc::new(context))
}

fn monday_ballot() -> InMemoryBallotBox {
    InMemoryBallotBox::new()
        .with_winning(MON, CandidateValue::explicit("Montag"), VoteStatus::Approved)
        .with_vote(MON, "u1", CandidateValue::explicit("Montag"))
        .with_vote(MON, "u2", CandidateValue::explicit("Mon"))
}

fn dates_page(assembler: &PageAssembler) -> Page {
    assembler
        .assemble_page("de", PageSelector::Prefix(DATES.into()), None)
        .unwrap()
}

#[test]
fn row_offers_marker_local_and_voted_values() {
    let assembler = build_assembler(
        weekday_tree(monday_ballot(), RuleValidation::new()),
        PathCatalog::new(),
        AssemblyConfig::default(),
    );
    let page = dates_page(&assembler);
    let row = page.get_row(MON).unwrap();

    assert_eq!(row.item_count(), 3);
    assert_eq!(row.inherited_value(), Some("Monday"));
    assert_eq!(row.display_name(), "Monday");

    let marker = row.inherited_item().unwrap();
    assert_eq!(row.item_class(marker), ItemClass::FallbackRoot);
    assert_eq!(row.resolved_value(marker), Some("Monday"));

    let winner = row.winning_item().unwrap();
    assert_eq!(winner.value(), Some(&CandidateValue::explicit("Montag")));
    assert_eq!(row.item_class(winner), ItemClass::Winner);
    assert_eq!(row.voters(winner), &BTreeSet::from(["u1".to_string()]));

    let loser = row.item(&CandidateValue::explicit("Mon")).unwrap();
    assert_eq!(row.item_class(loser), ItemClass::Loser);
    assert_eq!(row.voters(loser), &BTreeSet::from(["u2".to_string()]));
    assert!(row.items().all(|item| item.tests().is_some()));
}

#[test]
fn root_only_path_has_single_inherited_item() {
    let assembler = build_assembler(
        weekday_tree(InMemoryBallotBox::new(), RuleValidation::new()),
        PathCatalog::new(),
        AssemblyConfig::default(),
    );
    let page = dates_page(&assembler);
    let row = page.get_row(TUE).unwrap();

    assert_eq!(row.item_count(), 1);
    assert!(row.inherited_item().is_some());
    assert!(row.winning_item().is_none());
    assert_eq!(row.winning_value_hash(), "null");
}

#[test]
fn explicit_vote_for_inherited_value_folds_into_marker() {
    let ballot = InMemoryBallotBox::new()
        .with_winning(TUE, CandidateValue::explicit("Tuesday"), VoteStatus::Approved)
        .with_vote(TUE, "u1", CandidateValue::explicit("Tuesday"))
        .with_vote(TUE, "u2", CandidateValue::Inherited);
    let assembler = build_assembler(
        weekday_tree(ballot, RuleValidation::new()),
        PathCatalog::new(),
        AssemblyConfig::default(),
    );
    let page = dates_page(&assembler);
    let row = page.get_row(TUE).unwrap();

    assert_eq!(row.item_count(), 1);
    let marker = row.inherited_item().unwrap();
    assert!(row.is_winning(marker));
    assert_eq!(
        row.voters(marker),
        &BTreeSet::from(["u1".to_string(), "u2".to_string()])
    );
    assert_eq!(
        row.vote_value_hash("u1"),
        Some(value_hash(Some(&CandidateValue::Inherited)))
    );
}

#[test]
fn coverage_hidden_and_excluded_paths_never_become_rows() {
    let catalog = PathCatalog::new()
        .with_path(MON, None, "Days", CoverageLevel::Comprehensive)
        .with_path(TUE, None, "Days", CoverageLevel::Basic);
    let assembler = build_assembler(
        weekday_tree(monday_ballot(), RuleValidation::new()),
        catalog,
        AssemblyConfig::default(),
    );
    let request = PageRequest::new("de", PageSelector::Prefix(DATES.into()))
        .with_max_coverage(CoverageLevel::Modern);
    let page = assembler.assemble(&request).unwrap();
    assert!(page.get_row(MON).is_none());
    assert!(page.get_row(TUE).is_some());
    assert!(page.get_row(MIN_DAYS).is_none());
    assert_eq!(page.max_coverage(), CoverageLevel::Modern);

    let hidden = PathCatalog::new().with_hidden(TUE);
    let assembler = assembler_with(hidden);
    let page = dates_page(&assembler);
    assert!(page.get_row(TUE).is_none());
    assert!(page.get_row(MON).is_some());
}

fn assembler_with(catalog: PathCatalog) -> PageAssembler {
    build_assembler(
        weekday_tree(monday_ballot(), RuleValidation::new()),
        catalog,
        AssemblyConfig::default(),
    )
}

#[test]
fn matcher_restricts_rows() {
    let assembler = assembler_with(PathCatalog::new());
    let page = assembler
        .assemble_page(
            "de",
            PageSelector::Prefix(DATES.into()),
            Some(Arc::new(|xpath: &str| xpath.ends_with(r#"[@type="tue"]"#))),
        )
        .unwrap();
    assert_eq!(page.len(), 1);
    assert!(page.get_row(TUE).is_some());
}

#[test]
fn named_page_uses_catalog_membership() {
    let catalog = PathCatalog::new().with_path(MON, Some("Weekdays"), "Days", CoverageLevel::Modern);
    let assembler = assembler_with(catalog);
    let page = assembler
        .assemble_page("de", PageSelector::Page("Weekdays".into()), None)
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page.get_row(MON).unwrap().header(), "Days");
}

#[test]
fn missing_collaborators_are_fatal() {
    let tree = InMemoryLocaleTree::new()
        .with_locale("de", locale(&[(MON, "Montag")]))
        .with_validation(Arc::new(RuleValidation::new()));
    let assembler = build_assembler(tree, PathCatalog::new(), AssemblyConfig::default());

    let err = dates_page_result(&assembler, "de").unwrap_err();
    assert!(matches!(
        err,
        VettingError::MissingCollaborator { collaborator: "ballot box", .. }
    ));
    let err = dates_page_result(&assembler, "xx").unwrap_err();
    assert!(matches!(
        err,
        VettingError::MissingCollaborator { collaborator: "locale data source", .. }
    ));
}

fn dates_page_result(assembler: &PageAssembler, locale: &str) -> Result<Page, VettingError> {
    assembler.assemble_page(locale, PageSelector::Prefix(DATES.into()), None)
}

#[test]
fn failing_validation_keeps_items_without_findings() {
    let assembler = build_assembler(
        weekday_tree(monday_ballot(), RuleValidation::new().with_failure(DATES)),
        PathCatalog::new(),
        AssemblyConfig::default(),
    );
    let page = dates_page(&assembler);
    let row = page.get_row(MON).unwrap();
    assert_eq!(row.item_count(), 3);
    assert!(row.items().all(|item| item.tests() == Some(&[][..])));
    assert!(!row.has_errors());
}

#[test]
fn findings_set_row_flags_unless_excluded() {
    let warning = Finding::new(Severity::Warning, "abbreviated", "looks abbreviated");
    let validation = RuleValidation::new().with_rule(DATES, Some("Mon"), warning);

    let assembler = build_assembler(
        weekday_tree(monday_ballot(), validation.clone()),
        PathCatalog::new(),
        AssemblyConfig::default(),
    );
    let page = dates_page(&assembler);
    let row = page.get_row(MON).unwrap();
    assert!(row.has_warnings());
    assert!(!row.has_errors());
    let mon = row.item(&CandidateValue::explicit("Mon")).unwrap();
    assert_eq!(mon.tests().map(<[Finding]>::len), Some(1));
    let montag = row.item(&CandidateValue::explicit("Montag")).unwrap();
    assert_eq!(montag.tests().map(<[Finding]>::len), Some(0));

    let config = AssemblyConfig {
        excluded_check_subtypes: vec!["abbreviated".into()],
        ..AssemblyConfig::default()
    };
    let assembler = build_assembler(
        weekday_tree(monday_ballot(), validation),
        PathCatalog::new(),
        config,
    );
    let page = dates_page(&assembler);
    assert!(!page.get_row(MON).unwrap().has_warnings());
}

#[test]
fn rows_are_addressable_by_field_hash() {
    let page = dates_page(&assembler_with(PathCatalog::new()));
    let row = page.row_by_field_hash(&field_hash(MON)).unwrap();
    assert_eq!(row.xpath(), MON);
    assert!(matches!(
        page.row_by_field_hash(&field_hash("//ldml/nowhere")),
        Err(VettingError::UnknownFieldHash(_))
    ));
    assert!(page.row_by_field_hash("not a hash").is_err());
}

#[test]
fn session_pages_report_the_users_vote() {
    let assembler = assembler_with(PathCatalog::new());
    let session = Session::new("s1").with_user("u2");
    let request = PageRequest::new("de", PageSelector::Prefix(DATES.into()));
    let page = assembler.assemble_for_session(&session, &request).unwrap();
    assert_eq!(page.user(), Some("u2"));

    let view = RowView::new(page.get_row(MON).unwrap(), page.user());
    assert!(view.user_has_voted);
    assert_eq!(
        view.vote_value_hash,
        Some(value_hash(Some(&CandidateValue::explicit("Mon"))))
    );
    let tue = RowView::new(page.get_row(TUE).unwrap(), page.user());
    assert!(!tue.user_has_voted);
    assert_eq!(tue.vote_value_hash, None);
}

#[test]
fn fixed_candidates_are_offered() {
    let mut de = locale(&[(MON, "Montag")]);
    de.fixed_candidates
        .insert(MON.to_string(), vec!["Montag".into(), "Mo.".into()]);
    let tree = weekday_tree(monday_ballot(), RuleValidation::new()).with_locale("de", de);
    let assembler = build_assembler(tree, PathCatalog::new(), AssemblyConfig::default());
    let page = dates_page(&assembler);
    let row = page.get_row(MON).unwrap();
    assert!(row.fixed_candidates());
    assert!(row.item(&CandidateValue::explicit("Mo.")).is_some());
    assert_eq!(row.item_count(), 4);
}

#[test]
fn proposed_alt_path_marks_multiple_proposals() {
    let proposed = format!(r#"{MON}[@alt="proposed-u5"]"#);
    let tree = weekday_tree(monday_ballot(), RuleValidation::new())
        .with_locale("de", locale(&[(MON, "Montag"), (proposed.as_str(), "Mo")]));
    let assembler = build_assembler(tree, PathCatalog::new(), AssemblyConfig::default());
    let page = dates_page(&assembler);
    assert!(page.get_row(&proposed).unwrap().has_multiple_proposals());
    assert!(!page.get_row(MON).unwrap().has_multiple_proposals());
}

#[test]
fn root_annotation_value_is_unvotable() {
    let xpath = r#"//ldml/annotations/annotation[@cp="🔟"][@type="tts"]"#;
    let tree = InMemoryLocaleTree::new()
        .with_locale("root", locale(&[(xpath, "10-20")]))
        .with_locale("de", locale(&[(xpath, "zehn")]))
        .with_locale("de_CH", LocaleData::default())
        .with_ballot_box("de_CH", InMemoryBallotBox::new())
        .with_validation(Arc::new(RuleValidation::new()));
    let assembler = build_assembler(tree, PathCatalog::new(), AssemblyConfig::default());
    let page = assembler
        .assemble_page("de_CH", PageSelector::Prefix("//ldml/annotations".into()), None)
        .unwrap();
    let row = page.get_row(xpath).unwrap();
    assert_eq!(row.inherited_value(), Some("zehn"));
    let root_item = row
        .item(&CandidateValue::explicit("10\u{2013}20"))
        .unwrap();
    assert!(root_item.is_unvotable());
    assert!(row.is_unvotable_root("10\u{2013}20"));
}

#[test]
fn root_annotation_equal_to_inherited_keeps_marker_votable() {
    let xpath = r#"//ldml/annotations/annotation[@cp="🔟"][@type="tts"]"#;
    let tree = InMemoryLocaleTree::new()
        .with_locale("root", locale(&[(xpath, "10-20")]))
        .with_locale("de", locale(&[(xpath, "10\u{2013}20")]))
        .with_locale("de_CH", LocaleData::default())
        .with_ballot_box("de_CH", InMemoryBallotBox::new())
        .with_validation(Arc::new(RuleValidation::new()));
    let assembler = build_assembler(tree, PathCatalog::new(), AssemblyConfig::default());
    let page = assembler
        .assemble_page("de_CH", PageSelector::Prefix("//ldml/annotations".into()), None)
        .unwrap();
    let row = page.get_row(xpath).unwrap();
    assert_eq!(row.inherited_value(), Some("10\u{2013}20"));
    assert_eq!(row.item_count(), 1);
    let marker = row.inherited_item().unwrap();
    assert!(!marker.is_unvotable());
    assert!(!row.is_unvotable_root("10\u{2013}20"));
}

#[test]
fn zone_pages_are_completed_with_shims() {
    let config = AssemblyConfig {
        zone_ids: vec!["Europe/Berlin".into(), "Etc/GMT+1".into()],
        ..AssemblyConfig::default()
    };
    let validation = RuleValidation::new().with_rule(
        ZONE_BASE,
        None,
        Finding::new(Severity::Warning, "missing", "city not yet translated"),
    );
    let tree = weekday_tree(InMemoryBallotBox::new(), validation);
    let assembler = build_assembler(tree, PathCatalog::new(), config);
    let page = assembler
        .assemble_page("de", PageSelector::Prefix(ZONE_BASE.into()), None)
        .unwrap();

    let berlin = format!(r#"{ZONE_BASE}[@type="Europe/Berlin"]/exemplarCity"#);
    let row = page.get_row(&berlin).unwrap();
    assert_eq!(row.item_count(), 0);
    assert!(row.shim_item().unwrap().is_shim());
    assert!(row.has_warnings());
    assert_eq!(page.len(), 1);
}

#[test]
fn metazone_continent_pages_need_a_comparison_name() {
    let mut config = AssemblyConfig::default();
    config.metazones_by_continent.insert(
        "Europe".into(),
        vec!["Europe_Central".into(), "Europe_Western".into()],
    );
    let standard = format!(r#"{METAZONE_BASE}[@type="Europe_Central"]/long/standard"#);
    let tree = weekday_tree(InMemoryBallotBox::new(), RuleValidation::new())
        .with_locale("en", locale(&[(standard.as_str(), "Central European Standard Time")]));
    let assembler = build_assembler(tree, PathCatalog::new(), config);

    let page = assembler
        .assemble_page("de", PageSelector::Prefix(format!("{METAZONE_BASE}~Europe")), None)
        .unwrap();
    assert_eq!(page.len(), 1);
    let row = page.get_row(&standard).unwrap();
    assert_eq!(row.display_name(), "Central European Standard Time");

    let zoomed = assembler
        .assemble_page("de", PageSelector::Prefix(standard.clone()), None)
        .unwrap();
    assert_eq!(zoomed.len(), 1);
    assert!(zoomed.get_row(&standard).is_some());
}

#[test]
fn local_value_equal_to_inherited_folds_into_parent_fallback() {
    let ballot = InMemoryBallotBox::new()
        .with_winning(MON, CandidateValue::explicit("Monday"), VoteStatus::Approved)
        .with_baseline(MON, CandidateValue::explicit("Montag"), VoteStatus::Approved)
        .with_vote(MON, "u", CandidateValue::explicit("Mon"));
    let tree = InMemoryLocaleTree::new()
        .with_locale("root", locale(&[(MON, "Lundi")]))
        .with_locale("de", locale(&[(MON, "Monday")]))
        .with_locale("de_CH", locale(&[(MON, "Monday")]))
        .with_ballot_box("de_CH", ballot)
        .with_validation(Arc::new(RuleValidation::new()));
    let assembler = build_assembler(tree, PathCatalog::new(), AssemblyConfig::default());
    let page = assembler
        .assemble_page("de_CH", PageSelector::Prefix(DATES.into()), None)
        .unwrap();
    let row = page.get_row(MON).unwrap();

    assert_eq!(row.item_count(), 3);
    let folded = row.item(&CandidateValue::explicit("Monday")).unwrap();
    assert_eq!(folded.value(), Some(&CandidateValue::Inherited));
    let marker = row.inherited_item().unwrap();
    assert_eq!(row.item_class(marker), ItemClass::Fallback);
    assert!(row.is_winning(marker));
    let baseline = row.item(&CandidateValue::explicit("Montag")).unwrap();
    assert!(baseline.is_baseline());
    let voted = row.item(&CandidateValue::explicit("Mon")).unwrap();
    assert_eq!(row.voters(voted).len(), 1);
}

#[test]
fn extra_path_without_any_data_has_no_items() {
    let xpath = r#"//ldml/dates/fields/field[@type="era"]/displayName"#;
    let mut root = LocaleData::default();
    root.extra_paths.insert(xpath.to_string());
    let tree = InMemoryLocaleTree::new()
        .with_locale("root", root)
        .with_ballot_box("root", InMemoryBallotBox::new())
        .with_validation(Arc::new(RuleValidation::new()));
    let assembler = build_assembler(tree, PathCatalog::new(), AssemblyConfig::default());
    let page = assembler
        .assemble_page("root", PageSelector::Prefix(DATES.into()), None)
        .unwrap();
    let row = page.get_row(xpath).unwrap();
    assert_eq!(row.item_count(), 0);
    assert!(row.inherited().is_none());
    assert!(row.shim_item().is_none());
}
