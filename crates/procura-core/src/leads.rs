//! Lead capture
//!
//! Every form on the site terminates here. There is no backend in this
//! build: a submitted lead is validated, serialized, written to the log
//! via `tracing`, and kept in an in-memory list for the lifetime of the
//! process. The UI only ever learns "recorded" or an error to display.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{ProcuraError, ProcuraResult};
use crate::roster::is_plausible_email;
use crate::types::{LeadId, Role};

fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}

/// "Book a demo" submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoRequest {
    pub id: LeadId,
    pub submitted_at: i64,
    pub full_name: String,
    pub work_email: String,
    pub company: String,
    pub phone: String,
    /// Free-text "what would you like to see" field, may be empty
    pub interest: String,
}

impl DemoRequest {
    pub fn new(
        full_name: &str,
        work_email: &str,
        company: &str,
        phone: &str,
        interest: &str,
    ) -> ProcuraResult<Self> {
        if full_name.trim().is_empty() {
            return Err(ProcuraError::EmptyField("full name"));
        }
        if !is_plausible_email(work_email) {
            return Err(ProcuraError::InvalidEmail(work_email.trim().to_string()));
        }
        if company.trim().is_empty() {
            return Err(ProcuraError::EmptyField("company"));
        }
        Ok(Self {
            id: LeadId::new(),
            submitted_at: now_unix(),
            full_name: full_name.trim().to_string(),
            work_email: work_email.trim().to_string(),
            company: company.trim().to_string(),
            phone: phone.trim().to_string(),
            interest: interest.trim().to_string(),
        })
    }
}

/// "Contact us" submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: LeadId,
    pub submitted_at: i64,
    pub full_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(full_name: &str, email: &str, subject: &str, message: &str) -> ProcuraResult<Self> {
        if full_name.trim().is_empty() {
            return Err(ProcuraError::EmptyField("full name"));
        }
        if !is_plausible_email(email) {
            return Err(ProcuraError::InvalidEmail(email.trim().to_string()));
        }
        if message.trim().is_empty() {
            return Err(ProcuraError::EmptyField("message"));
        }
        Ok(Self {
            id: LeadId::new(),
            submitted_at: now_unix(),
            full_name: full_name.trim().to_string(),
            email: email.trim().to_string(),
            subject: subject.trim().to_string(),
            message: message.trim().to_string(),
        })
    }
}

/// Footer newsletter signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSignup {
    pub id: LeadId,
    pub submitted_at: i64,
    pub email: String,
}

impl NewsletterSignup {
    pub fn new(email: &str) -> ProcuraResult<Self> {
        if !is_plausible_email(email) {
            return Err(ProcuraError::InvalidEmail(email.trim().to_string()));
        }
        Ok(Self {
            id: LeadId::new(),
            submitted_at: now_unix(),
            email: email.trim().to_string(),
        })
    }
}

/// Summary of a finished onboarding wizard, buyer or seller.
///
/// The wizard gates its own steps, so construction is infallible; by the
/// time a draft reaches the final step its required fields are filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingComplete {
    pub id: LeadId,
    pub submitted_at: i64,
    pub role: Role,
    pub company_name: String,
    pub country: String,
    pub state: String,
    pub city: String,
    /// Buyer: industry plus company kinds. Seller: supply categories.
    pub selections: Vec<String>,
    pub team_invites: usize,
    /// Supplier invites for buyers, customer invites for sellers
    pub partner_invites: usize,
}

impl OnboardingComplete {
    pub fn from_buyer(draft: &crate::draft::BuyerDraft) -> Self {
        let mut selections = Vec::new();
        if let Some(label) = draft.industry_label() {
            selections.push(label.to_string());
        }
        selections.extend(draft.company_kinds.iter().cloned());
        Self {
            id: LeadId::new(),
            submitted_at: now_unix(),
            role: Role::Buyer,
            company_name: draft.company_name.trim().to_string(),
            country: draft.country.trim().to_string(),
            state: draft.state.trim().to_string(),
            city: draft.city.trim().to_string(),
            selections,
            team_invites: draft.team_invites.len(),
            partner_invites: draft.supplier_invites.len(),
        }
    }

    pub fn from_seller(draft: &crate::draft::SellerDraft) -> Self {
        Self {
            id: LeadId::new(),
            submitted_at: now_unix(),
            role: Role::Seller,
            company_name: draft.company_name.trim().to_string(),
            country: draft.country.trim().to_string(),
            state: draft.state.trim().to_string(),
            city: draft.city.trim().to_string(),
            selections: draft.supply_categories.clone(),
            team_invites: draft.team_invites.len(),
            partner_invites: draft.customer_invites.len(),
        }
    }
}

/// Any captured lead
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Lead {
    Demo(DemoRequest),
    Contact(ContactMessage),
    Newsletter(NewsletterSignup),
    Onboarding(OnboardingComplete),
}

impl Lead {
    pub fn kind(&self) -> &'static str {
        match self {
            Lead::Demo(_) => "demo_request",
            Lead::Contact(_) => "contact_message",
            Lead::Newsletter(_) => "newsletter_signup",
            Lead::Onboarding(_) => "onboarding_complete",
        }
    }

    pub fn id(&self) -> LeadId {
        match self {
            Lead::Demo(l) => l.id,
            Lead::Contact(l) => l.id,
            Lead::Newsletter(l) => l.id,
            Lead::Onboarding(l) => l.id,
        }
    }

    pub fn submitted_at(&self) -> i64 {
        match self {
            Lead::Demo(l) => l.submitted_at,
            Lead::Contact(l) => l.submitted_at,
            Lead::Newsletter(l) => l.submitted_at,
            Lead::Onboarding(l) => l.submitted_at,
        }
    }
}

/// Process-lifetime sink for captured leads.
///
/// `record` is the only write path; it logs the serialized lead at info
/// level so a shipped build still leaves a trace in the console.
#[derive(Debug, Default)]
pub struct LeadLog {
    entries: RwLock<Vec<Lead>>,
}

impl LeadLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, lead: Lead) -> ProcuraResult<LeadId> {
        let payload = serde_json::to_string(&lead)
            .map_err(|e| ProcuraError::LeadSerialization(e.to_string()))?;
        let id = lead.id();
        tracing::info!(kind = lead.kind(), id = %id, %payload, "lead captured");
        self.entries.write().push(lead);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn count_of(&self, kind: &str) -> usize {
        self.entries.read().iter().filter(|l| l.kind() == kind).count()
    }

    /// Clone of the captured leads, oldest first
    pub fn snapshot(&self) -> Vec<Lead> {
        self.entries.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{BuyerDraft, SellerDraft};

    #[test]
    fn test_demo_request_requires_fields() {
        assert!(matches!(
            DemoRequest::new("", "ana@hotel.com", "Hotel Mar", "", ""),
            Err(ProcuraError::EmptyField("full name"))
        ));
        assert!(matches!(
            DemoRequest::new("Ana", "not-an-email", "Hotel Mar", "", ""),
            Err(ProcuraError::InvalidEmail(_))
        ));
        assert!(matches!(
            DemoRequest::new("Ana", "ana@hotel.com", "  ", "", ""),
            Err(ProcuraError::EmptyField("company"))
        ));
    }

    #[test]
    fn test_demo_request_trims_input() {
        let lead = DemoRequest::new("  Ana Melo  ", " ana@hotel.com ", "Hotel Mar", "", "pricing")
            .expect("valid demo request");
        assert_eq!(lead.full_name, "Ana Melo");
        assert_eq!(lead.work_email, "ana@hotel.com");
        assert_eq!(lead.interest, "pricing");
    }

    #[test]
    fn test_contact_message_requires_body() {
        assert!(matches!(
            ContactMessage::new("Ana", "ana@hotel.com", "Hi", "   "),
            Err(ProcuraError::EmptyField("message"))
        ));
        assert!(ContactMessage::new("Ana", "ana@hotel.com", "", "Need help").is_ok());
    }

    #[test]
    fn test_newsletter_rejects_bad_email() {
        assert!(NewsletterSignup::new("nope").is_err());
        assert!(NewsletterSignup::new("news@venue.co").is_ok());
    }

    #[test]
    fn test_onboarding_summary_from_buyer() {
        let mut draft = BuyerDraft::new();
        draft.select_preset_industry("Hospitality");
        draft.toggle_company_kind("Resort");
        draft.company_name = "Mar Azul".into();
        draft.team_invites.add("gm@marazul.com").expect("valid email");
        let lead = OnboardingComplete::from_buyer(&draft);
        assert_eq!(lead.role, Role::Buyer);
        assert_eq!(lead.selections, vec!["Hospitality".to_string(), "Resort".to_string()]);
        assert_eq!(lead.team_invites, 1);
        assert_eq!(lead.partner_invites, 0);
    }

    #[test]
    fn test_onboarding_summary_from_seller() {
        let mut draft = SellerDraft::new();
        draft.toggle_supply_category("Linens & Textiles");
        draft.company_name = "Norte Linens".into();
        draft.customer_invites.add("buyer@hotel.com").expect("valid email");
        let lead = OnboardingComplete::from_seller(&draft);
        assert_eq!(lead.role, Role::Seller);
        assert_eq!(lead.partner_invites, 1);
    }

    #[test]
    fn test_lead_log_records_and_counts() {
        let log = LeadLog::new();
        assert!(log.is_empty());

        let demo = DemoRequest::new("Ana", "ana@hotel.com", "Hotel Mar", "", "").expect("valid");
        let news = NewsletterSignup::new("ana@hotel.com").expect("valid");
        log.record(Lead::Demo(demo)).expect("recorded");
        log.record(Lead::Newsletter(news)).expect("recorded");

        assert_eq!(log.len(), 2);
        assert_eq!(log.count_of("demo_request"), 1);
        assert_eq!(log.count_of("contact_message"), 0);
        assert_eq!(log.snapshot()[0].kind(), "demo_request");
    }

    #[test]
    fn test_lead_serializes_with_kind_tag() {
        let news = NewsletterSignup::new("ana@hotel.com").expect("valid");
        let json = serde_json::to_string(&Lead::Newsletter(news)).expect("serializable");
        assert!(json.contains("\"kind\":\"newsletter_signup\""));
    }
}
