//! Lead log context for the Procura app.
//!
//! Provides the process-wide LeadLog to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Arc::new(LeadLog::new()));
//!
//! // In child components
//! let leads = use_lead_log();
//! leads.record(Lead::Newsletter(signup))?;
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use procura_core::LeadLog;

/// Shared lead sink type for context.
///
/// Plain Arc rather than a signal: the log is append-only and nothing
/// in the UI re-renders off its contents.
pub type SharedLeadLog = Arc<LeadLog>;

/// Hook to access the lead log from context.
///
/// # Example
///
/// ```ignore
/// let leads = use_lead_log();
/// match DemoRequest::new(&name, &email, &company, &phone, &interest) {
///     Ok(req) => {
///         let _ = leads.record(Lead::Demo(req));
///     }
///     Err(e) => error.set(Some(e.to_string())),
/// }
/// ```
pub fn use_lead_log() -> SharedLeadLog {
    use_context::<SharedLeadLog>()
}
