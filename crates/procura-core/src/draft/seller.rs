//! Seller onboarding draft
//!
//! Five steps: supply categories, company details, location, team
//! invites, customer invites. The seller wizard keeps its back control
//! disabled on step one (no intro screen to delegate to), which is why
//! it pairs with [`crate::wizard::BackPolicy::Disabled`].

use serde::{Deserialize, Serialize};

use super::{location_filled, MAX_INVITES};
use crate::roster::EmailRoster;

/// Number of steps in the seller wizard
pub const SELLER_STEP_COUNT: u8 = 5;

/// Supply categories offered as multi-select toggles on step one
pub const SUPPLY_CATEGORY_OPTIONS: &[&str] = &[
    "Food & Beverage",
    "Kitchen & Equipment",
    "Linens & Textiles",
    "Cleaning & Hygiene",
    "Furniture & Fixtures",
    "Guest Amenities",
    "Tech & Software",
    "Packaging & Disposables",
];

/// The seller wizard's in-memory record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SellerDraft {
    pub supply_categories: Vec<String>,
    pub company_name: String,
    /// Optional; sellers without a site still onboard
    pub website: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub team_invites: EmailRoster,
    pub customer_invites: EmailRoster,
}

impl SellerDraft {
    /// Empty draft, created when the wizard mounts
    pub fn new() -> Self {
        Self {
            team_invites: EmailRoster::with_limit(MAX_INVITES),
            customer_invites: EmailRoster::with_limit(MAX_INVITES),
            ..Self::default()
        }
    }

    /// Idempotent multi-select toggle over [`SUPPLY_CATEGORY_OPTIONS`]
    pub fn toggle_supply_category(&mut self, category: &str) {
        if let Some(pos) = self.supply_categories.iter().position(|c| c == category) {
            self.supply_categories.remove(pos);
        } else {
            self.supply_categories.push(category.to_string());
        }
    }

    pub fn has_supply_category(&self, category: &str) -> bool {
        self.supply_categories.iter().any(|c| c == category)
    }

    /// Required-field gating for a step, re-derived on every call.
    ///
    /// Steps outside `[1, SELLER_STEP_COUNT]` report incomplete.
    pub fn step_complete(&self, step: u8) -> bool {
        match step {
            1 => !self.supply_categories.is_empty(),
            // Website is optional; only the name gates
            2 => !self.company_name.trim().is_empty(),
            3 => location_filled(&self.country, &self.state, &self.city),
            4 | 5 => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_toggle_is_idempotent() {
        let mut draft = SellerDraft::new();
        let before = draft.supply_categories.clone();

        draft.toggle_supply_category("Linens & Textiles");
        assert!(draft.has_supply_category("Linens & Textiles"));

        draft.toggle_supply_category("Linens & Textiles");
        assert_eq!(draft.supply_categories, before);
    }

    #[test]
    fn test_step_one_requires_a_category() {
        let mut draft = SellerDraft::new();
        assert!(!draft.step_complete(1));
        draft.toggle_supply_category("Food & Beverage");
        assert!(draft.step_complete(1));
    }

    #[test]
    fn test_website_is_optional() {
        let mut draft = SellerDraft::new();
        draft.company_name = "Atlas Provisions".to_string();
        assert!(draft.step_complete(2));
        draft.website = "https://atlasprovisions.example".to_string();
        assert!(draft.step_complete(2));
    }

    #[test]
    fn test_location_gating() {
        let mut draft = SellerDraft::new();
        draft.country = "Spain".to_string();
        draft.state = "Catalonia".to_string();
        assert!(!draft.step_complete(3));
        draft.city = "Barcelona".to_string();
        assert!(draft.step_complete(3));
    }

    #[test]
    fn test_invite_steps_never_gate() {
        let draft = SellerDraft::new();
        assert!(draft.step_complete(4));
        assert!(draft.step_complete(5));
    }

    #[test]
    fn test_out_of_range_steps_report_incomplete() {
        let draft = SellerDraft::new();
        assert!(!draft.step_complete(0));
        assert!(!draft.step_complete(SELLER_STEP_COUNT + 1));
    }

    #[test]
    fn test_rosters_are_capped() {
        let draft = SellerDraft::new();
        assert_eq!(draft.team_invites.limit(), Some(MAX_INVITES));
        assert_eq!(draft.customer_invites.limit(), Some(MAX_INVITES));
    }
}
