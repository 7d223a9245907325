//! Buyer onboarding draft
//!
//! Six steps: industry, company kinds, company name, location, team
//! invites, supplier invites. Step one is special: picking a preset
//! industry schedules an automatic advance after a short fixed delay,
//! while picking "Others" reveals a free-text field and leaves the
//! visitor to advance manually once it is non-empty.

use serde::{Deserialize, Serialize};

use super::{location_filled, MAX_INVITES};
use crate::roster::EmailRoster;

/// Number of steps in the buyer wizard
pub const BUYER_STEP_COUNT: u8 = 6;

/// Delay before the step-1 auto-advance fires after a preset pick
pub const INDUSTRY_AUTO_ADVANCE_MS: u64 = 600;

/// Preset industry choices offered on step one
pub const INDUSTRY_OPTIONS: &[&str] = &[
    "Hospitality",
    "Hotels & Resorts",
    "Restaurants & Cafes",
    "Catering & Events",
    "Facilities Management",
];

/// Label for the free-text escape hatch on step one
pub const OTHER_INDUSTRY_LABEL: &str = "Others";

/// Company kinds offered as multi-select toggles on step two
pub const COMPANY_KIND_OPTIONS: &[&str] = &[
    "Boutique Hotel",
    "Hotel Group",
    "Resort",
    "Restaurant",
    "Cafe",
    "Bar & Lounge",
    "Cloud Kitchen",
    "Catering Company",
];

/// Industry field state on step one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndustrySelection {
    /// One of [`INDUSTRY_OPTIONS`] was clicked
    Preset(String),
    /// "Others" was clicked; carries the free-text value typed so far
    Other(String),
}

impl IndustrySelection {
    /// Label recorded on the draft (the preset name, or the typed text)
    pub fn label(&self) -> &str {
        match self {
            IndustrySelection::Preset(label) => label,
            IndustrySelection::Other(text) => text,
        }
    }

    /// Whether the selection satisfies step one's required field
    pub fn is_complete(&self) -> bool {
        match self {
            IndustrySelection::Preset(_) => true,
            IndustrySelection::Other(text) => !text.trim().is_empty(),
        }
    }

    /// Preset picks auto-advance. "Others" never does; the visitor
    /// advances manually once the text is in.
    pub fn auto_advances(&self) -> bool {
        matches!(self, IndustrySelection::Preset(_))
    }
}

/// The buyer wizard's in-memory record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuyerDraft {
    pub industry: Option<IndustrySelection>,
    pub company_kinds: Vec<String>,
    pub company_name: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub team_invites: EmailRoster,
    pub supplier_invites: EmailRoster,
}

impl BuyerDraft {
    /// Empty draft, created when the wizard mounts
    pub fn new() -> Self {
        Self {
            team_invites: EmailRoster::with_limit(MAX_INVITES),
            supplier_invites: EmailRoster::with_limit(MAX_INVITES),
            ..Self::default()
        }
    }

    /// Record a preset industry pick
    pub fn select_preset_industry(&mut self, label: impl Into<String>) {
        self.industry = Some(IndustrySelection::Preset(label.into()));
    }

    /// Record an "Others" pick. Any text typed on a previous visit to
    /// the free-text field is kept.
    pub fn select_other_industry(&mut self) {
        if !matches!(self.industry, Some(IndustrySelection::Other(_))) {
            self.industry = Some(IndustrySelection::Other(String::new()));
        }
    }

    /// Update the "Others" free-text value
    pub fn set_other_industry_text(&mut self, text: impl Into<String>) {
        self.industry = Some(IndustrySelection::Other(text.into()));
    }

    /// Whether the "Others" free-text field should render
    pub fn industry_is_other(&self) -> bool {
        matches!(self.industry, Some(IndustrySelection::Other(_)))
    }

    /// Label recorded so far, if any
    pub fn industry_label(&self) -> Option<&str> {
        self.industry.as_ref().map(|i| i.label())
    }

    /// Whether a scheduled auto-advance should fire for the current pick
    pub fn industry_auto_advances(&self) -> bool {
        self.industry
            .as_ref()
            .map(|i| i.auto_advances())
            .unwrap_or(false)
    }

    /// Idempotent multi-select toggle: selecting a kind twice returns
    /// the collection to its original contents.
    pub fn toggle_company_kind(&mut self, kind: &str) {
        if let Some(pos) = self.company_kinds.iter().position(|k| k == kind) {
            self.company_kinds.remove(pos);
        } else {
            self.company_kinds.push(kind.to_string());
        }
    }

    pub fn has_company_kind(&self, kind: &str) -> bool {
        self.company_kinds.iter().any(|k| k == kind)
    }

    /// Required-field gating for a step, re-derived on every call.
    ///
    /// Steps outside `[1, BUYER_STEP_COUNT]` report incomplete.
    pub fn step_complete(&self, step: u8) -> bool {
        match step {
            1 => self
                .industry
                .as_ref()
                .map(|i| i.is_complete())
                .unwrap_or(false),
            2 => !self.company_kinds.is_empty(),
            3 => !self.company_name.trim().is_empty(),
            4 => location_filled(&self.country, &self.state, &self.city),
            // Invite steps have no required minimum
            5 | 6 => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_pick_completes_step_one_and_auto_advances() {
        let mut draft = BuyerDraft::new();
        assert!(!draft.step_complete(1));

        draft.select_preset_industry("Hospitality");
        assert!(draft.step_complete(1));
        assert!(draft.industry_auto_advances());
        assert_eq!(draft.industry_label(), Some("Hospitality"));
    }

    #[test]
    fn test_other_blocks_until_text_is_in() {
        let mut draft = BuyerDraft::new();
        draft.select_other_industry();
        assert!(draft.industry_is_other());
        assert!(!draft.step_complete(1));
        assert!(!draft.industry_auto_advances());

        draft.set_other_industry_text("Senior living");
        assert!(draft.step_complete(1));
        // Manual advance only, even with text present
        assert!(!draft.industry_auto_advances());
    }

    #[test]
    fn test_reclicking_others_keeps_typed_text() {
        let mut draft = BuyerDraft::new();
        draft.select_other_industry();
        draft.set_other_industry_text("Stadium concessions");
        draft.select_other_industry();
        assert_eq!(draft.industry_label(), Some("Stadium concessions"));
    }

    #[test]
    fn test_preset_replaces_other() {
        let mut draft = BuyerDraft::new();
        draft.set_other_industry_text("Food trucks");
        draft.select_preset_industry("Restaurants & Cafes");
        assert!(!draft.industry_is_other());
        assert_eq!(draft.industry_label(), Some("Restaurants & Cafes"));
    }

    #[test]
    fn test_toggle_company_kind_is_idempotent() {
        let mut draft = BuyerDraft::new();
        let before = draft.company_kinds.clone();

        draft.toggle_company_kind("Resort");
        assert!(draft.has_company_kind("Resort"));

        draft.toggle_company_kind("Resort");
        assert_eq!(draft.company_kinds, before);
    }

    #[test]
    fn test_toggle_never_duplicates() {
        let mut draft = BuyerDraft::new();
        draft.toggle_company_kind("Restaurant");
        draft.toggle_company_kind("Cafe");
        draft.toggle_company_kind("Restaurant");
        draft.toggle_company_kind("Restaurant");
        let count = draft
            .company_kinds
            .iter()
            .filter(|k| k.as_str() == "Restaurant")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_step_gating_walkthrough() {
        let mut draft = BuyerDraft::new();
        draft.select_preset_industry("Hospitality");
        draft.toggle_company_kind("Boutique Hotel");
        assert!(draft.step_complete(2));

        assert!(!draft.step_complete(3));
        draft.company_name = "Seaside Collective".to_string();
        assert!(draft.step_complete(3));

        assert!(!draft.step_complete(4));
        draft.country = "Portugal".to_string();
        draft.state = "Algarve".to_string();
        assert!(!draft.step_complete(4));
        draft.city = "Lagos".to_string();
        assert!(draft.step_complete(4));

        // Invite steps never gate
        assert!(draft.step_complete(5));
        assert!(draft.step_complete(6));
    }

    #[test]
    fn test_out_of_range_steps_report_incomplete() {
        let draft = BuyerDraft::new();
        assert!(!draft.step_complete(0));
        assert!(!draft.step_complete(BUYER_STEP_COUNT + 1));
    }

    #[test]
    fn test_rosters_are_capped() {
        let draft = BuyerDraft::new();
        assert_eq!(draft.team_invites.limit(), Some(MAX_INVITES));
        assert_eq!(draft.supplier_invites.limit(), Some(MAX_INVITES));
    }
}
