//! End-to-end onboarding walkthroughs
//!
//! These tests drive the buyer and seller drafts through their full
//! step sequences the way the wizard pages do: check the current step
//! gate, fill it, advance, and finish by recording an onboarding lead.

use procura_core::draft::{
    BuyerDraft, SellerDraft, BUYER_STEP_COUNT, INDUSTRY_OPTIONS, SELLER_STEP_COUNT,
    SUPPLY_CATEGORY_OPTIONS,
};
use procura_core::leads::{Lead, LeadLog, OnboardingComplete};
use procura_core::wizard::{Advance, BackPolicy, Retreat, StepTracker};
use procura_core::Role;

// ============================================================================
// Buyer Walkthrough
// ============================================================================

/// Full buyer flow from industry pick to recorded lead
#[test]
fn test_buyer_happy_path_walkthrough() {
    let mut steps = StepTracker::new(BUYER_STEP_COUNT, BackPolicy::DelegateToHost);
    let mut draft = BuyerDraft::new();

    // Step 1: industry. Nothing selected yet, so the gate holds.
    assert_eq!(steps.current(), 1);
    assert!(!draft.step_complete(steps.current()));
    draft.select_preset_industry(INDUSTRY_OPTIONS[0]);
    assert!(draft.step_complete(steps.current()));
    assert!(draft.industry_auto_advances());
    assert_eq!(steps.advance(), Advance::Moved(2));

    // Step 2: company kinds, multi-select
    assert!(!draft.step_complete(2));
    draft.toggle_company_kind("Boutique Hotel");
    draft.toggle_company_kind("Resort");
    assert!(draft.step_complete(2));
    assert_eq!(steps.advance(), Advance::Moved(3));

    // Step 3: company name
    draft.company_name = "Hotel Mar Azul".into();
    assert!(draft.step_complete(3));
    assert_eq!(steps.advance(), Advance::Moved(4));

    // Step 4: location, all three fields required
    draft.country = "Portugal".into();
    draft.state = "Algarve".into();
    assert!(!draft.step_complete(4));
    draft.city = "Lagos".into();
    assert!(draft.step_complete(4));
    assert_eq!(steps.advance(), Advance::Moved(5));

    // Steps 5 and 6: invites, optional but accepted
    draft.team_invites.add("gm@marazul.pt").unwrap();
    draft.team_invites.add("chef@marazul.pt").unwrap();
    assert_eq!(steps.advance(), Advance::Moved(6));
    draft.supplier_invites.add("orders@atlanticfresh.pt").unwrap();
    assert!(steps.is_last());
    assert_eq!(steps.advance(), Advance::Completed);

    // Completion records one onboarding lead
    let log = LeadLog::new();
    let lead = OnboardingComplete::from_buyer(&draft);
    assert_eq!(lead.role, Role::Buyer);
    assert_eq!(lead.team_invites, 2);
    assert_eq!(lead.partner_invites, 1);
    assert!(lead.selections.contains(&"Resort".to_string()));
    log.record(Lead::Onboarding(lead)).unwrap();
    assert_eq!(log.count_of("onboarding_complete"), 1);
}

/// The buyer wizard hands "back on step one" to its host page
#[test]
fn test_buyer_back_at_first_step_delegates() {
    let mut steps = StepTracker::new(BUYER_STEP_COUNT, BackPolicy::DelegateToHost);
    assert!(steps.is_first());
    assert!(steps.back_enabled());
    assert_eq!(steps.retreat(), Retreat::Delegated);
    assert_eq!(steps.current(), 1);

    steps.advance();
    assert_eq!(steps.retreat(), Retreat::Moved(1));
}

/// "Others" requires typed text before the step opens, and never
/// triggers the auto-advance that preset picks do
#[test]
fn test_buyer_others_industry_gates_on_text() {
    let mut draft = BuyerDraft::new();

    draft.select_other_industry();
    assert!(!draft.step_complete(1));
    assert!(!draft.industry_auto_advances());

    draft.set_other_industry_text("Student housing");
    assert!(draft.step_complete(1));
    assert!(!draft.industry_auto_advances());

    draft.set_other_industry_text("   ");
    assert!(!draft.step_complete(1));
}

/// Invite steps pass their gate with empty rosters
#[test]
fn test_invite_steps_are_skippable() {
    let draft = BuyerDraft::new();
    assert!(draft.team_invites.is_empty());
    assert!(draft.step_complete(5));
    assert!(draft.step_complete(6));

    let seller = SellerDraft::new();
    assert!(seller.step_complete(4));
    assert!(seller.step_complete(5));
}

/// A rejected invite leaves the roster exactly as it was
#[test]
fn test_rejected_invites_leave_roster_unchanged() {
    let mut draft = BuyerDraft::new();
    draft.team_invites.add("gm@marazul.pt").unwrap();

    assert!(draft.team_invites.add("gm@marazul.pt").is_err());
    assert!(draft.team_invites.add("not-an-email").is_err());
    assert_eq!(draft.team_invites.len(), 1);
    assert_eq!(draft.team_invites.entries(), &["gm@marazul.pt".to_string()]);
}

// ============================================================================
// Seller Walkthrough
// ============================================================================

/// Full seller flow from category pick to recorded lead
#[test]
fn test_seller_happy_path_walkthrough() {
    let mut steps = StepTracker::new(SELLER_STEP_COUNT, BackPolicy::Disabled);
    let mut draft = SellerDraft::new();

    // Step 1: supply categories
    assert!(!draft.step_complete(1));
    draft.toggle_supply_category(SUPPLY_CATEGORY_OPTIONS[0]);
    draft.toggle_supply_category("Linens & Textiles");
    assert!(draft.step_complete(1));
    assert_eq!(steps.advance(), Advance::Moved(2));

    // Step 2: company details, website stays optional
    draft.company_name = "Norte Linens".into();
    assert!(draft.step_complete(2));
    draft.website = "https://nortelinens.pt".into();
    assert_eq!(steps.advance(), Advance::Moved(3));

    // Step 3: location
    draft.country = "Portugal".into();
    draft.state = "Porto".into();
    draft.city = "Matosinhos".into();
    assert!(draft.step_complete(3));
    assert_eq!(steps.advance(), Advance::Moved(4));

    // Steps 4 and 5: invites
    draft.team_invites.add("sales@nortelinens.pt").unwrap();
    assert_eq!(steps.advance(), Advance::Moved(5));
    draft.customer_invites.add("purchasing@grandvista.pt").unwrap();
    assert_eq!(steps.advance(), Advance::Completed);

    let lead = OnboardingComplete::from_seller(&draft);
    assert_eq!(lead.role, Role::Seller);
    assert_eq!(lead.selections.len(), 2);
    assert_eq!(lead.company_name, "Norte Linens");

    let log = LeadLog::new();
    log.record(Lead::Onboarding(lead)).unwrap();
    assert_eq!(log.len(), 1);
}

/// The seller wizard simply disables back on step one
#[test]
fn test_seller_back_at_first_step_blocks() {
    let mut steps = StepTracker::new(SELLER_STEP_COUNT, BackPolicy::Disabled);
    assert!(!steps.back_enabled());
    assert_eq!(steps.retreat(), Retreat::Blocked);
    assert_eq!(steps.current(), 1);

    steps.advance();
    assert!(steps.back_enabled());
    assert_eq!(steps.retreat(), Retreat::Moved(1));
}

/// Deselecting the only category closes the gate again
#[test]
fn test_seller_category_toggle_reopens_gate() {
    let mut draft = SellerDraft::new();
    draft.toggle_supply_category("Food & Beverage");
    assert!(draft.step_complete(1));
    draft.toggle_supply_category("Food & Beverage");
    assert!(!draft.step_complete(1));
}

/// Completing past the last step is idempotent
#[test]
fn test_completed_wizard_stays_on_last_step() {
    let mut steps = StepTracker::new(SELLER_STEP_COUNT, BackPolicy::Disabled);
    for _ in 1..SELLER_STEP_COUNT {
        steps.advance();
    }
    assert!(steps.is_last());
    assert_eq!(steps.advance(), Advance::Completed);
    assert_eq!(steps.advance(), Advance::Completed);
    assert_eq!(steps.current(), SELLER_STEP_COUNT);
}
