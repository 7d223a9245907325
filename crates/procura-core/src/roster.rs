//! Email roster, the shared "tag collector"
//!
//! The invite flows (team members, suppliers, customers) all collect a
//! list of email addresses with the same contract: a shape check on the
//! input, duplicate rejection by membership, append on confirm, remove by
//! value on delete.
//!
//! The shape check is deliberately shallow (`@` and `.` present, more
//! than five characters) because nothing is ever sent to these
//! addresses. It gates the add control, not delivery.

use serde::{Deserialize, Serialize};

use crate::error::{ProcuraError, ProcuraResult};

/// Shape check used to gate the add control.
///
/// Accepts any trimmed input longer than five characters containing both
/// `@` and `.`.
pub fn is_plausible_email(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.len() > 5 && trimmed.contains('@') && trimmed.contains('.')
}

/// Ordered, de-duplicated collection of email addresses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRoster {
    entries: Vec<String>,
    limit: Option<usize>,
}

impl EmailRoster {
    /// Empty roster without a capacity limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty roster capped at `limit` addresses
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Validate, de-duplicate and append an address.
    ///
    /// The stored value is the trimmed input; matching for duplicates is
    /// exact on that trimmed form (case is not folded).
    pub fn add(&mut self, raw: &str) -> ProcuraResult<()> {
        let candidate = raw.trim();
        if !is_plausible_email(candidate) {
            return Err(ProcuraError::InvalidEmail(candidate.to_string()));
        }
        if self.entries.iter().any(|e| e == candidate) {
            return Err(ProcuraError::DuplicateEmail(candidate.to_string()));
        }
        if let Some(limit) = self.limit {
            if self.entries.len() >= limit {
                return Err(ProcuraError::RosterFull(limit));
            }
        }
        self.entries.push(candidate.to_string());
        Ok(())
    }

    /// Remove an address by value. Returns whether anything was removed.
    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e != value);
        self.entries.len() != before
    }

    /// Membership check on the stored (trimmed) form
    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|e| e == value)
    }

    /// Addresses in insertion order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Capacity limit, if one was configured
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Drop every entry, keeping the limit
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plausible_email_shapes() {
        assert!(is_plausible_email("chef@hotel.com"));
        assert!(is_plausible_email("  padded@inn.co  "));
        assert!(!is_plausible_email("not-an-email"));
        assert!(!is_plausible_email("a@b.c")); // five chars, too short
        assert!(!is_plausible_email("missing.dot@nowhere"));
        assert!(!is_plausible_email("missing-at.example.com"));
        assert!(!is_plausible_email(""));
    }

    #[test]
    fn test_add_appends_trimmed() {
        let mut roster = EmailRoster::new();
        roster.add("  gm@seasideinn.com ").unwrap();
        assert_eq!(roster.entries(), ["gm@seasideinn.com"]);
    }

    #[test]
    fn test_invalid_never_appends() {
        let mut roster = EmailRoster::new();
        let err = roster.add("not-an-email").unwrap_err();
        assert!(matches!(err, ProcuraError::InvalidEmail(_)));
        assert!(roster.is_empty());
    }

    #[test]
    fn test_duplicate_never_grows() {
        let mut roster = EmailRoster::new();
        roster.add("buyer@grandhotel.com").unwrap();
        let err = roster.add("buyer@grandhotel.com").unwrap_err();
        assert!(matches!(err, ProcuraError::DuplicateEmail(_)));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_case_is_not_folded() {
        // Matches the source's ad hoc membership check: "A@B.com" and
        // "a@b.com" are distinct entries.
        let mut roster = EmailRoster::new();
        roster.add("Chef@Bistro.fr").unwrap();
        roster.add("chef@bistro.fr").unwrap();
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_remove_by_value() {
        let mut roster = EmailRoster::new();
        roster.add("one@venue.com").unwrap();
        roster.add("two@venue.com").unwrap();
        assert!(roster.remove("one@venue.com"));
        assert!(!roster.remove("one@venue.com"));
        assert_eq!(roster.entries(), ["two@venue.com"]);
    }

    #[test]
    fn test_limit_is_enforced() {
        let mut roster = EmailRoster::with_limit(2);
        roster.add("a@venue.com").unwrap();
        roster.add("b@venue.com").unwrap();
        let err = roster.add("c@venue.com").unwrap_err();
        assert_eq!(err, ProcuraError::RosterFull(2));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_clear_keeps_limit() {
        let mut roster = EmailRoster::with_limit(3);
        roster.add("a@venue.com").unwrap();
        roster.clear();
        assert!(roster.is_empty());
        assert_eq!(roster.limit(), Some(3));
    }
}
