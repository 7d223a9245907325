//! Login and signup stubs
//!
//! There is no account system in this build. The login page walks the
//! real UI flow (credentials, one-time code, success) against the pure
//! checks in this module; the "delivered" code is written to the console
//! log and any complete code is accepted.

use serde::{Deserialize, Serialize};

/// One-time code length used by the verification step
pub const OTP_LEN: usize = 6;
/// Seconds the resend button stays disabled after a code is issued
pub const OTP_RESEND_COOLDOWN_SECS: i64 = 30;
/// Minimum accepted password length on the signup path
pub const PASSWORD_MIN_LEN: usize = 8;

/// Field-level verdicts for the credentials form.
///
/// `passwords_match` is only meaningful when `confirm` was shown, i.e.
/// on the signup path; the login path passes the password twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialCheck {
    pub email_ok: bool,
    pub password_ok: bool,
    pub passwords_match: bool,
}

impl CredentialCheck {
    pub fn evaluate(email: &str, password: &str, confirm: &str) -> Self {
        Self {
            email_ok: crate::roster::is_plausible_email(email),
            password_ok: password.len() >= PASSWORD_MIN_LEN,
            passwords_match: !password.is_empty() && password == confirm,
        }
    }

    pub fn all_ok(&self) -> bool {
        self.email_ok && self.password_ok && self.passwords_match
    }

    /// First problem worth surfacing, if any
    pub fn first_issue(&self) -> Option<&'static str> {
        if !self.email_ok {
            Some("Enter a valid work email")
        } else if !self.password_ok {
            Some("Password must be at least 8 characters")
        } else if !self.passwords_match {
            Some("Passwords do not match")
        } else {
            None
        }
    }
}

/// An issued one-time code. The code itself is display/log material
/// only; acceptance is completeness-based in this build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpChallenge {
    pub code: String,
    pub destination: String,
    pub issued_at: i64,
}

impl OtpChallenge {
    /// Generate a fresh code for `destination` and log it in lieu of
    /// sending it anywhere.
    pub fn issue(destination: &str) -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        let code: String = (0..OTP_LEN)
            .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
            .collect();
        tracing::info!(
            to = %destination,
            %code,
            "one-time code issued (demo build delivers to the console)"
        );
        Self {
            code,
            destination: destination.trim().to_string(),
            issued_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Whether the resend button should be live at `now`
    pub fn resend_available(&self, now: i64) -> bool {
        now - self.issued_at >= OTP_RESEND_COOLDOWN_SECS
    }

    /// Seconds left on the resend cooldown at `now`, zero once expired
    pub fn seconds_until_resend(&self, now: i64) -> i64 {
        (self.issued_at + OTP_RESEND_COOLDOWN_SECS - now).max(0)
    }
}

/// True when every code box holds exactly one ASCII digit
pub fn code_complete(digits: &[String]) -> bool {
    digits.len() == OTP_LEN
        && digits
            .iter()
            .all(|d| d.len() == 1 && d.chars().all(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_check_flags_each_field() {
        let bad_email = CredentialCheck::evaluate("nope", "longenough", "longenough");
        assert!(!bad_email.email_ok);
        assert_eq!(bad_email.first_issue(), Some("Enter a valid work email"));

        let short = CredentialCheck::evaluate("ana@hotel.com", "short", "short");
        assert!(!short.password_ok);

        let mismatch = CredentialCheck::evaluate("ana@hotel.com", "longenough", "different");
        assert!(!mismatch.passwords_match);

        let ok = CredentialCheck::evaluate("ana@hotel.com", "longenough", "longenough");
        assert!(ok.all_ok());
        assert_eq!(ok.first_issue(), None);
    }

    #[test]
    fn test_empty_password_never_matches() {
        let check = CredentialCheck::evaluate("ana@hotel.com", "", "");
        assert!(!check.passwords_match);
    }

    #[test]
    fn test_issued_code_shape() {
        let challenge = OtpChallenge::issue("ana@hotel.com");
        assert_eq!(challenge.code.len(), OTP_LEN);
        assert!(challenge.code.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(challenge.destination, "ana@hotel.com");
    }

    #[test]
    fn test_resend_cooldown_window() {
        let challenge = OtpChallenge::issue("ana@hotel.com");
        let t0 = challenge.issued_at;
        assert!(!challenge.resend_available(t0));
        assert!(!challenge.resend_available(t0 + OTP_RESEND_COOLDOWN_SECS - 1));
        assert!(challenge.resend_available(t0 + OTP_RESEND_COOLDOWN_SECS));
        assert_eq!(challenge.seconds_until_resend(t0), OTP_RESEND_COOLDOWN_SECS);
        assert_eq!(challenge.seconds_until_resend(t0 + OTP_RESEND_COOLDOWN_SECS + 5), 0);
    }

    #[test]
    fn test_code_completeness() {
        let full: Vec<String> = "493817".chars().map(String::from).collect();
        assert!(code_complete(&full));

        let gap: Vec<String> =
            vec!["4".into(), "9".into(), "".into(), "8".into(), "1".into(), "7".into()];
        assert!(!code_complete(&gap));

        let alpha: Vec<String> = "49a817".chars().map(String::from).collect();
        assert!(!code_complete(&alpha));

        let short: Vec<String> = "4938".chars().map(String::from).collect();
        assert!(!code_complete(&short));
    }
}
