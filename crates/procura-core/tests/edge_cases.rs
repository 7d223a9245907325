//! Edge case and boundary condition tests
//!
//! These tests verify the domain types handle unusual inputs,
//! error conditions, and boundary values correctly.

use procura_core::auth::{code_complete, CredentialCheck, OtpChallenge, OTP_RESEND_COOLDOWN_SECS};
use procura_core::catalog;
use procura_core::draft::BuyerDraft;
use procura_core::leads::{ContactMessage, DemoRequest, NewsletterSignup};
use procura_core::roster::{is_plausible_email, EmailRoster};
use procura_core::wizard::{Advance, BackPolicy, StepTracker};
use procura_core::ProcuraError;

// ============================================================================
// Empty Input Tests
// ============================================================================

/// Test empty and whitespace-only strings against the email check
#[test]
fn test_empty_and_whitespace_emails_rejected() {
    let rejects = ["", " ", "\t", "\n", "      ", "\r\n"];
    for raw in rejects {
        assert!(!is_plausible_email(raw), "accepted {raw:?}");
    }
}

/// Test an empty roster answers queries without panicking
#[test]
fn test_empty_roster_operations() {
    let mut roster = EmailRoster::new();
    assert!(roster.is_empty());
    assert_eq!(roster.len(), 0);
    assert!(!roster.contains("anyone@anywhere.com"));
    assert!(!roster.remove("anyone@anywhere.com"));
    roster.clear();
    assert!(roster.is_empty());
}

/// Test the catalog treats an empty query as "match all"
#[test]
fn test_empty_catalog_query_matches_all() {
    assert_eq!(catalog::filtered("", None).len(), catalog::all().len());
    assert_eq!(catalog::filtered("\t \n", None).len(), catalog::all().len());
}

/// Test a fresh draft fails every required gate
#[test]
fn test_fresh_buyer_draft_gates_closed() {
    let draft = BuyerDraft::new();
    for step in 1..=4u8 {
        assert!(!draft.step_complete(step), "step {step} open on empty draft");
    }
}

// ============================================================================
// Boundary Value Tests
// ============================================================================

/// Test a zero-step tracker clamps to a single step
#[test]
fn test_zero_total_clamps_to_one() {
    let mut steps = StepTracker::new(0, BackPolicy::Disabled);
    assert_eq!(steps.total(), 1);
    assert_eq!(steps.current(), 1);
    assert!(steps.is_first() && steps.is_last());
    assert_eq!(steps.advance(), Advance::Completed);
    assert_eq!(steps.progress_percent(), 100);
}

/// Test the roster cap holds exactly at the limit
#[test]
fn test_roster_cap_boundary() {
    let mut roster = EmailRoster::with_limit(3);
    roster.add("a1@venue.com").unwrap();
    roster.add("a2@venue.com").unwrap();
    roster.add("a3@venue.com").unwrap();

    match roster.add("a4@venue.com") {
        Err(ProcuraError::RosterFull(cap)) => assert_eq!(cap, 3),
        other => panic!("expected RosterFull, got {other:?}"),
    }
    assert_eq!(roster.len(), 3);

    // Freeing a slot makes the cap pass again
    assert!(roster.remove("a2@venue.com"));
    roster.add("a4@venue.com").unwrap();
    assert_eq!(roster.len(), 3);
}

/// Test the shortest address the plausibility check accepts
#[test]
fn test_minimum_plausible_email_length() {
    // six significant characters is the floor
    assert!(!is_plausible_email("a@b.c"));
    assert!(is_plausible_email("a@b.cc"));
    assert!(!is_plausible_email("  a@b.c  "));
}

/// Test the resend cooldown at its exact boundary second
#[test]
fn test_otp_cooldown_exact_boundary() {
    let challenge = OtpChallenge::issue("ops@venue.com");
    let t = challenge.issued_at;
    assert!(!challenge.resend_available(t + OTP_RESEND_COOLDOWN_SECS - 1));
    assert!(challenge.resend_available(t + OTP_RESEND_COOLDOWN_SECS));
    assert_eq!(challenge.seconds_until_resend(t + OTP_RESEND_COOLDOWN_SECS), 0);
}

/// Test a password exactly at the minimum length
#[test]
fn test_password_minimum_length_boundary() {
    let short = CredentialCheck::evaluate("ana@hotel.com", "1234567", "1234567");
    assert!(!short.password_ok);
    let exact = CredentialCheck::evaluate("ana@hotel.com", "12345678", "12345678");
    assert!(exact.password_ok && exact.all_ok());
}

// ============================================================================
// Unicode and Odd Input Tests
// ============================================================================

/// Test unicode addresses pass the plausibility check unharmed
#[test]
fn test_unicode_email_addresses() {
    let mut roster = EmailRoster::new();
    roster.add("café@hôtel.fr").unwrap();
    assert!(roster.contains("café@hôtel.fr"));

    // plausibility is shape-based, not charset-based
    assert!(is_plausible_email("予約@ホテル.jp"));
}

/// Test unicode queries never panic and simply miss
#[test]
fn test_unicode_catalog_query() {
    assert!(catalog::filtered("Procuração", None).is_empty());
    assert!(catalog::filtered("🏨", None).is_empty());
}

/// Test unicode survives lead capture intact
#[test]
fn test_unicode_lead_fields() {
    let lead = ContactMessage::new("José Müller", "jose@hotel.pt", "Dúvida", "Preciso de ajuda já")
        .unwrap();
    assert_eq!(lead.full_name, "José Müller");
    assert_eq!(lead.subject, "Dúvida");
}

/// Test non-ASCII digits do not count as a complete code
#[test]
fn test_non_ascii_digits_incomplete() {
    let arabic: Vec<String> = "٣٣٣٣٣٣".chars().map(String::from).collect();
    assert!(!code_complete(&arabic));
}

/// Test very long input is carried, not truncated
#[test]
fn test_very_long_inputs() {
    let local = "a".repeat(500);
    let long_email = format!("{local}@example.com");
    let mut roster = EmailRoster::new();
    roster.add(&long_email).unwrap();
    assert!(roster.contains(&long_email));

    let long_query = "linen ".repeat(300);
    assert!(catalog::filtered(&long_query, None).is_empty());

    let lead = DemoRequest::new("Ana", "ana@hotel.com", &"c".repeat(2000), "", "").unwrap();
    assert_eq!(lead.company.len(), 2000);
}

// ============================================================================
// Invalid Input Tests
// ============================================================================

/// Test the classic malformed address shapes
#[test]
fn test_malformed_email_shapes() {
    let rejects = ["plainaddress", "missing-at-sign.com", "nodomain@", "nodot@domain", "@.com"];
    for raw in rejects {
        assert!(!is_plausible_email(raw), "accepted {raw:?}");
        let mut roster = EmailRoster::new();
        assert!(matches!(roster.add(raw), Err(ProcuraError::InvalidEmail(_))));
        assert!(roster.is_empty());
    }
}

/// Test duplicate detection reports the offending address
#[test]
fn test_duplicate_reports_address() {
    let mut roster = EmailRoster::new();
    roster.add("gm@venue.com").unwrap();
    match roster.add(" gm@venue.com ") {
        Err(ProcuraError::DuplicateEmail(addr)) => assert_eq!(addr, "gm@venue.com"),
        other => panic!("expected DuplicateEmail, got {other:?}"),
    }
}

/// Test newsletter signup mirrors the roster's email rules
#[test]
fn test_newsletter_email_rules_match_roster() {
    for raw in ["short@a.", "no-at.com", ""] {
        assert_eq!(
            NewsletterSignup::new(raw).is_ok(),
            is_plausible_email(raw),
            "diverged on {raw:?}"
        );
    }
}

/// Test out-of-range steps are simply incomplete, never a panic
#[test]
fn test_out_of_range_step_is_incomplete() {
    let mut draft = BuyerDraft::new();
    draft.select_preset_industry("Hospitality");
    assert!(!draft.step_complete(0));
    assert!(!draft.step_complete(99));
}
