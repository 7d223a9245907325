//! Property-based tests for wizard, roster and catalog invariants
//!
//! Uses proptest to verify the gates the UI leans on: step indices stay
//! in range under arbitrary navigation, rosters never hold junk or
//! duplicates, and catalog filtering is sound.

use proptest::prelude::*;
use procura_core::catalog::{self, ArticleCategory};
use procura_core::draft::{BuyerDraft, COMPANY_KIND_OPTIONS};
use procura_core::roster::{is_plausible_email, EmailRoster};
use procura_core::wizard::{Advance, BackPolicy, Retreat, StepTracker};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate emails the roster should accept
fn valid_email_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,10}@[a-z]{2,10}\\.[a-z]{2,3}").expect("valid regex")
}

/// Generate strings the roster should reject: no '@', no '.', or both
fn invalid_email_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // no '@' at all
        prop::string::string_regex("[a-z .]{0,20}").expect("valid regex"),
        // '@' but no dot
        prop::string::string_regex("[a-z]{1,8}@[a-z]{1,8}").expect("valid regex"),
        // too short even when shaped right
        Just("a@b.".to_string()),
        Just(String::new()),
    ]
}

/// Navigation operations a wizard page can issue
#[derive(Debug, Clone)]
enum NavOp {
    Advance,
    Retreat,
    Reset,
}

fn nav_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<NavOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(NavOp::Advance),
            2 => Just(NavOp::Retreat),
            1 => Just(NavOp::Reset),
        ],
        0..max_ops,
    )
}

/// Operations the invite chip editors perform on a roster
#[derive(Debug, Clone)]
enum RosterOp {
    AddValid(String),
    AddInvalid(String),
    RemoveAt(usize),
}

fn roster_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<RosterOp>> {
    prop::collection::vec(
        prop_oneof![
            4 => valid_email_strategy().prop_map(RosterOp::AddValid),
            2 => invalid_email_strategy().prop_map(RosterOp::AddInvalid),
            1 => (0..30usize).prop_map(RosterOp::RemoveAt),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Step Tracker Properties
// ============================================================================

proptest! {
    /// The current step stays within [1, total] no matter what the page does
    #[test]
    fn step_index_stays_in_bounds(
        total in 1u8..10,
        ops in nav_ops_strategy(40),
        delegate in any::<bool>()
    ) {
        let policy = if delegate { BackPolicy::DelegateToHost } else { BackPolicy::Disabled };
        let mut steps = StepTracker::new(total, policy);

        for op in ops {
            match op {
                NavOp::Advance => { steps.advance(); }
                NavOp::Retreat => { steps.retreat(); }
                NavOp::Reset => steps.reset(),
            }
            prop_assert!(steps.current() >= 1);
            prop_assert!(steps.current() <= steps.total());
        }
    }

    /// Advance either moves exactly one step forward or reports completion
    #[test]
    fn advance_moves_by_one(total in 1u8..10) {
        let mut steps = StepTracker::new(total, BackPolicy::Disabled);
        loop {
            let before = steps.current();
            match steps.advance() {
                Advance::Moved(now) => {
                    prop_assert_eq!(now, before + 1);
                    prop_assert_eq!(steps.current(), now);
                }
                Advance::Completed => {
                    prop_assert_eq!(steps.current(), total);
                    break;
                }
            }
        }
    }

    /// Retreat at step one never moves, whichever policy is in force
    #[test]
    fn retreat_at_first_step_never_moves(delegate in any::<bool>(), total in 1u8..10) {
        let policy = if delegate { BackPolicy::DelegateToHost } else { BackPolicy::Disabled };
        let mut steps = StepTracker::new(total, policy);
        let result = steps.retreat();
        prop_assert_eq!(steps.current(), 1);
        match policy {
            BackPolicy::DelegateToHost => prop_assert_eq!(result, Retreat::Delegated),
            BackPolicy::Disabled => prop_assert_eq!(result, Retreat::Blocked),
        }
    }

    /// Progress is monotone in the step index and capped at 100
    #[test]
    fn progress_is_monotone(total in 1u8..12) {
        let mut steps = StepTracker::new(total, BackPolicy::Disabled);
        let mut last = 0;
        loop {
            let pct = steps.progress_percent();
            prop_assert!(pct > last || (steps.is_first() && pct == last));
            prop_assert!(pct <= 100);
            last = pct;
            if let Advance::Completed = steps.advance() {
                prop_assert_eq!(steps.progress_percent(), 100);
                break;
            }
        }
    }
}

// ============================================================================
// Email Roster Properties
// ============================================================================

proptest! {
    /// Whatever sequence of adds and removes runs, the roster holds only
    /// plausible, unique entries and respects its cap
    #[test]
    fn roster_invariants_hold_under_ops(ops in roster_ops_strategy(40)) {
        let mut roster = EmailRoster::with_limit(10);

        for op in ops {
            match op {
                RosterOp::AddValid(e) => { let _ = roster.add(&e); }
                RosterOp::AddInvalid(e) => {
                    let before = roster.len();
                    prop_assert!(roster.add(&e).is_err());
                    prop_assert_eq!(roster.len(), before);
                }
                RosterOp::RemoveAt(i) => {
                    if let Some(entry) = roster.entries().get(i).cloned() {
                        prop_assert!(roster.remove(&entry));
                    }
                }
            }

            prop_assert!(roster.len() <= 10);
            for entry in roster.entries() {
                prop_assert!(is_plausible_email(entry));
            }
            for (i, a) in roster.entries().iter().enumerate() {
                for b in &roster.entries()[i + 1..] {
                    prop_assert_ne!(a, b);
                }
            }
        }
    }

    /// Adding the same address twice grows the roster exactly once
    #[test]
    fn duplicate_add_never_grows(email in valid_email_strategy()) {
        let mut roster = EmailRoster::new();
        roster.add(&email).unwrap();
        prop_assert!(roster.add(&email).is_err());
        prop_assert_eq!(roster.len(), 1);
    }

    /// Surrounding whitespace never produces a distinct entry
    #[test]
    fn add_is_trim_insensitive(email in valid_email_strategy()) {
        let mut roster = EmailRoster::new();
        roster.add(&format!("  {email} ")).unwrap();
        prop_assert!(roster.contains(&email));
        prop_assert!(roster.add(&email).is_err());
    }
}

// ============================================================================
// Draft Toggle Properties
// ============================================================================

proptest! {
    /// Toggling a company kind twice restores the original selection
    #[test]
    fn company_kind_toggle_is_involution(idx in 0..COMPANY_KIND_OPTIONS.len()) {
        let kind = COMPANY_KIND_OPTIONS[idx];
        let mut draft = BuyerDraft::new();

        let before = draft.has_company_kind(kind);
        draft.toggle_company_kind(kind);
        prop_assert_ne!(draft.has_company_kind(kind), before);
        draft.toggle_company_kind(kind);
        prop_assert_eq!(draft.has_company_kind(kind), before);
        prop_assert!(draft.company_kinds.is_empty());
    }

    /// Selections never contain the same kind twice
    #[test]
    fn company_kinds_stay_unique(picks in prop::collection::vec(0..COMPANY_KIND_OPTIONS.len(), 0..24)) {
        let mut draft = BuyerDraft::new();
        for idx in picks {
            draft.toggle_company_kind(COMPANY_KIND_OPTIONS[idx]);
            for (i, a) in draft.company_kinds.iter().enumerate() {
                for b in &draft.company_kinds[i + 1..] {
                    prop_assert_ne!(a, b);
                }
            }
        }
    }
}

// ============================================================================
// Catalog Filtering Properties
// ============================================================================

proptest! {
    /// Every filtered hit actually matches the query and category
    #[test]
    fn filtered_results_are_sound(query in "[a-zA-Z ]{0,12}", pick_category in any::<bool>()) {
        let category = pick_category.then_some(ArticleCategory::Operations);
        let hits = catalog::filtered(&query, category);

        prop_assert!(hits.len() <= catalog::all().len());
        for article in hits {
            prop_assert!(article.matches(&query));
            if let Some(c) = category {
                prop_assert_eq!(article.category, c);
            }
        }
    }

    /// Query case never changes the result set
    #[test]
    fn filtering_is_case_insensitive(query in "[a-zA-Z]{1,10}") {
        let lower = catalog::filtered(&query.to_lowercase(), None);
        let upper = catalog::filtered(&query.to_uppercase(), None);
        prop_assert_eq!(lower, upper);
    }

    /// Widening the filter never loses results
    #[test]
    fn category_filter_only_narrows(query in "[a-z]{0,8}") {
        let unfiltered = catalog::filtered(&query, None);
        for &category in ArticleCategory::all() {
            let narrowed = catalog::filtered(&query, Some(category));
            prop_assert!(narrowed.len() <= unfiltered.len());
            for hit in narrowed {
                prop_assert!(unfiltered.contains(&hit));
            }
        }
    }
}
