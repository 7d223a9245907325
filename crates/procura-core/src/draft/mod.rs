//! Onboarding drafts
//!
//! A draft is the in-memory record a wizard accumulates: flat string and
//! string-collection fields, mutated on every keystroke or selection and
//! discarded when the visitor navigates away. Nothing here is ever
//! persisted.
//!
//! Each draft also owns the step-gating rules for its wizard: which
//! fields a given step requires before the "Next" control may enable.
//! Gating is re-derived from the draft on every call, never cached.

mod buyer;
mod seller;

pub use buyer::{
    BuyerDraft, IndustrySelection, BUYER_STEP_COUNT, COMPANY_KIND_OPTIONS,
    INDUSTRY_AUTO_ADVANCE_MS, INDUSTRY_OPTIONS, OTHER_INDUSTRY_LABEL,
};
pub use seller::{SellerDraft, SELLER_STEP_COUNT, SUPPLY_CATEGORY_OPTIONS};

/// Cap on each invite roster. Generous; the wizards are mock flows.
pub const MAX_INVITES: usize = 20;

/// All three location fields must be filled for the location step.
pub(crate) fn location_filled(country: &str, state: &str, city: &str) -> bool {
    !country.trim().is_empty() && !state.trim().is_empty() && !city.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_requires_all_three() {
        assert!(location_filled("Portugal", "Lisbon District", "Lisbon"));
        assert!(!location_filled("", "Lisbon District", "Lisbon"));
        assert!(!location_filled("Portugal", "  ", "Lisbon"));
        assert!(!location_filled("Portugal", "Lisbon District", ""));
    }
}
