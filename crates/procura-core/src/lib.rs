//! Procura Core Library
//!
//! Domain logic behind the Procura marketing and onboarding app.
//!
//! ## Overview
//!
//! Procura is a B2B marketplace connecting hospitality buyers (hotels,
//! restaurants, caterers) with verified suppliers. This crate holds the
//! UI-independent pieces: onboarding wizard state machines, email
//! invite rosters, the Learn-page article catalog, lead capture, and
//! the stub auth and demo-dashboard helpers the desktop shell renders.
//!
//! ## Core Principles
//!
//! - **No backend required**: leads are validated, logged and kept
//!   in-process; nothing here talks to the network
//! - **UI-framework agnostic**: pages own signals, this crate owns rules
//! - **Everything gated is testable**: step completion, email plausibility
//!   and cooldowns are plain functions over plain data
//!
//! ## Quick Start
//!
//! ```ignore
//! use procura_core::draft::{BuyerDraft, BUYER_STEP_COUNT};
//! use procura_core::wizard::{BackPolicy, StepTracker};
//!
//! let mut steps = StepTracker::new(BUYER_STEP_COUNT, BackPolicy::DelegateToHost);
//! let mut draft = BuyerDraft::new();
//!
//! draft.select_preset_industry("Hospitality");
//! assert!(draft.step_complete(steps.current()));
//! steps.advance();
//!
//! draft.team_invites.add("gm@hotel-mar.com")?;
//! # Ok::<(), procura_core::ProcuraError>(())
//! ```

pub mod auth;
pub mod catalog;
pub mod demo;
pub mod draft;
pub mod error;
pub mod leads;
pub mod roster;
pub mod types;
pub mod wizard;

// Re-exports
pub use auth::{code_complete, CredentialCheck, OtpChallenge, OTP_LEN, OTP_RESEND_COOLDOWN_SECS};
pub use catalog::{Article, ArticleCategory};
pub use draft::{
    BuyerDraft, IndustrySelection, SellerDraft, BUYER_STEP_COUNT, COMPANY_KIND_OPTIONS,
    INDUSTRY_AUTO_ADVANCE_MS, INDUSTRY_OPTIONS, MAX_INVITES, OTHER_INDUSTRY_LABEL,
    SELLER_STEP_COUNT, SUPPLY_CATEGORY_OPTIONS,
};
pub use error::{ProcuraError, ProcuraResult};
pub use leads::{ContactMessage, DemoRequest, Lead, LeadLog, NewsletterSignup, OnboardingComplete};
pub use roster::{is_plausible_email, EmailRoster};
pub use wizard::{Advance, BackPolicy, Retreat, StepTracker};
pub use types::*;
