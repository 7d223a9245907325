//! Error types for Procura

use thiserror::Error;

/// Main error type for Procura domain operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcuraError {
    /// Input does not look like an email address
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Email is already present in the roster
    #[error("Duplicate email address: {0}")]
    DuplicateEmail(String),

    /// Roster reached its configured capacity
    #[error("Roster is full ({0} addresses)")]
    RosterFull(usize),

    /// Step index outside the valid range for the wizard
    #[error("Step {step} is out of range (1..={total})")]
    StepOutOfRange { step: u8, total: u8 },

    /// A required field was empty
    #[error("Required field is empty: {0}")]
    EmptyField(&'static str),

    /// Article was not found in the catalog
    #[error("Article not found: {0}")]
    ArticleNotFound(String),

    /// Lead payload could not be serialized for logging
    #[error("Lead serialization error: {0}")]
    LeadSerialization(String),
}

/// Result type alias using ProcuraError
pub type ProcuraResult<T> = Result<T, ProcuraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProcuraError::InvalidEmail("nope".to_string());
        assert_eq!(format!("{}", err), "Invalid email address: nope");
    }

    #[test]
    fn test_step_out_of_range_display() {
        let err = ProcuraError::StepOutOfRange { step: 9, total: 6 };
        assert_eq!(format!("{}", err), "Step 9 is out of range (1..=6)");
    }
}
