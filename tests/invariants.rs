use std::collections::BTreeSet;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use locale_vetting::source::{
    InMemoryBallotBox, InMemoryLocaleTree, InMemoryStore, LocaleData, PathCatalog, RuleValidation,
};
use locale_vetting::{
    AssemblyConfig, CandidateValue, DataRow, Finding, Page, PageAssembler, PageSelector, RowView,
    Severity, SortMode, VettingContext, VoteStatus,
};

const PREFIX: &str = "//ldml/localeDisplayNames/languages";
const LANGS: [&str; 6] = ["de", "fr", "it", "ja", "ko", "nl"];
const USERS: [&str; 5] = ["u1", "u2", "u3", "u4", "u5"];
const STATUSES: [VoteStatus; 4] = [
    VoteStatus::Approved,
    VoteStatus::Contributed,
    VoteStatus::Provisional,
    VoteStatus::Unconfirmed,
];

fn xpath(lang: &str) -> String {
    format!(r#"{PREFIX}/language[@type="{lang}"]"#)
}

fn english(lang: &str) -> String {
    format!("Language {lang}")
}

/// Candidate pool for one path: the inherited value, the marker, and a few local spellings.
fn pick_value(rng: &mut StdRng, lang: &str) -> CandidateValue {
    match rng.random_range(0..5) {
        0 => CandidateValue::Inherited,
        1 => CandidateValue::explicit(english(lang)),
        n => CandidateValue::explicit(format!("{lang}-local-{n}")),
    }
}

/// Random world: every path inherits from root, some have local values, votes,
/// winners, and baselines.
fn random_page(seed: u64) -> Page {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut root = LocaleData::default();
    let mut de_ch = LocaleData::default();
    let mut ballot = InMemoryBallotBox::new();

    for lang in LANGS {
        let path = xpath(lang);
        root.values.insert(path.clone(), english(lang));
        if rng.random_bool(0.5) {
            de_ch.values.insert(path.clone(), format!("{lang}-local-2"));
        }
        for user in USERS {
            if rng.random_bool(0.6) {
                ballot = ballot.with_vote(path.as_str(), user, pick_value(&mut rng, lang));
            }
        }
        if rng.random_bool(0.7) {
            let status = STATUSES[rng.random_range(0..STATUSES.len())];
            ballot = ballot.with_winning(path.as_str(), pick_value(&mut rng, lang), status);
        }
        if rng.random_bool(0.4) {
            ballot = ballot.with_baseline(
                path.as_str(),
                pick_value(&mut rng, lang),
                VoteStatus::Approved,
            );
        }
    }

    let validation = RuleValidation::new()
        .with_rule(
            xpath("ja"),
            None,
            Finding::new(Severity::Warning, "length", "value is long"),
        )
        .with_rule(
            PREFIX,
            Some("de-local-3"),
            Finding::new(Severity::Error, "script", "wrong script"),
        );
    let tree = InMemoryLocaleTree::new()
        .with_locale("root", root)
        .with_locale("de_CH", de_ch)
        .with_ballot_box("de_CH", ballot)
        .with_validation(Arc::new(validation));
    let catalog = Arc::new(PathCatalog::new());
    let context = VettingContext::builder()
        .config(AssemblyConfig {
            candidate_history: true,
            ..AssemblyConfig::default()
        })
        .store(Arc::new(InMemoryStore::new(tree)))
        .classifier(catalog.clone())
        .coverage(catalog)
        .build()
        .unwrap();
    PageAssembler::new(Arc::new(context))
        .assemble_page("de_CH", PageSelector::Prefix(PREFIX.into()), None)
        .unwrap()
}

fn for_each_row(mut check: impl FnMut(u64, &DataRow)) {
    for seed in 0..64 {
        let page = random_page(seed);
        assert_eq!(page.len(), LANGS.len(), "seed {seed}");
        for row in page.rows() {
            check(seed, row);
        }
    }
}

#[test]
fn no_explicit_item_duplicates_the_inherited_value() {
    for_each_row(|seed, row| {
        let inherited = row.inherited_value().unwrap();
        for item in row.items() {
            assert_ne!(
                item.value().and_then(CandidateValue::as_explicit),
                Some(inherited),
                "seed {seed} {}",
                row.xpath()
            );
        }
        assert!(row.inherited_item().is_some(), "seed {seed}");
    });
}

#[test]
fn winning_value_always_has_an_item() {
    for_each_row(|seed, row| {
        if row.winning_value().is_some() {
            let winner = row.winning_item();
            assert!(winner.is_some(), "seed {seed} {}", row.xpath());
            assert!(row.is_winning(winner.unwrap()));
        }
        assert!(row.consistency_issues().is_empty(), "seed {seed}");
    });
}

#[test]
fn every_item_is_validated_and_flags_follow_findings() {
    for_each_row(|seed, row| {
        let mut errors = false;
        let mut warnings = false;
        for item in row.items() {
            let tests = item.tests().unwrap_or_else(|| panic!("seed {seed}: unvalidated item"));
            errors |= tests.iter().any(|finding| finding.severity == Severity::Error);
            warnings |= tests.iter().any(|finding| finding.severity == Severity::Warning);
        }
        assert_eq!(row.has_errors(), errors, "seed {seed}");
        assert_eq!(row.has_warnings(), warnings, "seed {seed}");
    });
}

#[test]
fn baseline_flag_marks_exactly_the_baseline_item() {
    for_each_row(|seed, row| {
        let flagged: Vec<_> = row.items().filter(|item| item.is_baseline()).collect();
        match row.baseline_value() {
            Some(baseline) => {
                assert_eq!(flagged.len(), 1, "seed {seed}");
                assert!(std::ptr::eq(flagged[0], row.item(baseline).unwrap()));
            }
            None => assert!(flagged.is_empty(), "seed {seed}"),
        }
    });
}

#[test]
fn every_voter_lands_on_exactly_one_item() {
    for_each_row(|seed, row| {
        let mut seen = BTreeSet::new();
        for item in row.items() {
            for voter in row.voters(item) {
                assert!(seen.insert(voter.clone()), "seed {seed}: {voter} counted twice");
            }
        }
        let expected: BTreeSet<String> = USERS
            .iter()
            .filter(|user| row.user_has_voted(user))
            .map(|user| user.to_string())
            .collect();
        assert_eq!(seen, expected, "seed {seed}");
        for user in &expected {
            assert!(row.vote_value_hash(user).is_some(), "seed {seed}");
        }
    });
}

#[test]
fn assembly_is_deterministic() {
    for seed in [3, 17, 42] {
        let first = random_page(seed);
        let second = random_page(seed);
        let snapshot = |page: &Page| {
            page.rows()
                .map(|row| serde_json::to_value(RowView::new(row, None)).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(snapshot(&first), snapshot(&second));
        assert_eq!(
            first.display_set(SortMode::Interest),
            second.display_set(SortMode::Interest)
        );
    }
}

#[test]
fn display_partitions_tile_the_rows() {
    for seed in 0..16 {
        let page = random_page(seed);
        for mode in [
            SortMode::Code,
            SortMode::Name,
            SortMode::Interest,
            SortMode::PathHeader,
            SortMode::Metazone,
        ] {
            let set = page.display_set(mode);
            assert_eq!(set.rows.len(), page.len());
            let mut next = 0;
            for partition in &set.partitions {
                assert_eq!(partition.start, next, "seed {seed} {mode}");
                assert!(partition.limit > partition.start);
                next = partition.limit;
            }
            assert_eq!(next, page.len());
            let names: Vec<_> = set.partitions.iter().map(|p| p.name.clone()).collect();
            let distinct: BTreeSet<_> = names.iter().collect();
            assert_eq!(names.len(), distinct.len(), "seed {seed} {mode}");
        }
    }
}
