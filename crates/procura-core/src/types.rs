//! Core types shared across Procura modules

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a captured lead
///
/// Uses ULID for time-ordered identifiers that sort lexicographically,
/// which keeps the session lead log in submission order even when
/// inspected out of band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub Ulid);

impl LeadId {
    /// Create a new LeadId with the current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Get the underlying ULID
    pub fn as_ulid(&self) -> &Ulid {
        &self.0
    }

    /// Parse from string representation
    pub fn from_string(s: &str) -> Result<Self, ulid::DecodeError> {
        let ulid = Ulid::from_string(s)?;
        Ok(Self(ulid))
    }
}

impl Default for LeadId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LeadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lead_{}", self.0)
    }
}

/// Marketplace persona a visitor onboards as
///
/// Buyers are hospitality operators (hotels, restaurants, caterers);
/// sellers are the suppliers quoting into their RFQs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Buyer,
    Seller,
}

impl Role {
    /// Human-readable label used in copy and logs
    pub fn label(&self) -> &'static str {
        match self {
            Role::Buyer => "Buyer",
            Role::Seller => "Seller",
        }
    }

    /// All roles, in display order
    pub fn all() -> &'static [Role] {
        &[Role::Buyer, Role::Seller]
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_id_new() {
        let a = LeadId::new();
        let b = LeadId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_lead_id_display() {
        let id = LeadId::new();
        assert!(format!("{}", id).starts_with("lead_"));
    }

    #[test]
    fn test_lead_id_roundtrip() {
        let id = LeadId::new();
        let parsed = LeadId::from_string(&id.as_ulid().to_string()).expect("valid ulid");
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Buyer.label(), "Buyer");
        assert_eq!(Role::Seller.label(), "Seller");
        assert_eq!(Role::all().len(), 2);
    }
}
