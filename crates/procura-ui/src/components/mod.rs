//! Reusable UI components following DESIGN_SYSTEM.md
//!
//! All components use the warm hospitality aesthetic with:
//! - Fraunces for display headings
//! - Inter for body text
//! - Paper/ink/teal/amber color semantics

mod button;
mod email_chips;
mod input;
mod modal;
mod pills;
mod progress;
mod stat_card;

pub use button::*;
pub use email_chips::*;
pub use input::*;
pub use modal::*;
pub use pills::*;
pub use progress::*;
pub use stat_card::*;
