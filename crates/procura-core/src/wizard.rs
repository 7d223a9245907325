//! Onboarding step sequencer
//!
//! A wizard walks a visitor through an ordered sequence of form steps.
//! The sequencer owns only the position: a current step index that never
//! leaves `[1, total]`. What renders at each step, and whether the step's
//! required fields are filled, is the draft's business (see [`crate::draft`]).
//!
//! Back-navigation at the first step is policy-driven because the two
//! wizards genuinely differ: the buyer wizard hands control back to its
//! host page (which shows an intro screen), while the seller wizard keeps
//! the back control disabled on step one.

use serde::{Deserialize, Serialize};

/// What the back control does when the wizard is on its first step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackPolicy {
    /// Hand control back to the host (e.g. return to an intro screen)
    DelegateToHost,
    /// The back control is inert on step one
    Disabled,
}

/// Outcome of asking the sequencer to move forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the contained step
    Moved(u8),
    /// Already on the last step; the caller should run its completion action
    Completed,
}

/// Outcome of asking the sequencer to move backward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    /// Moved to the contained step
    Moved(u8),
    /// On step one with [`BackPolicy::DelegateToHost`]; the host takes over
    Delegated,
    /// On step one with [`BackPolicy::Disabled`]; nothing happened
    Blocked,
}

/// Linear step sequencer bounded to `[1, total]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTracker {
    current: u8,
    total: u8,
    back_policy: BackPolicy,
}

impl StepTracker {
    /// Create a tracker positioned on step 1.
    ///
    /// A `total` of zero is treated as a single-step wizard so the
    /// `[1, total]` bound always holds.
    pub fn new(total: u8, back_policy: BackPolicy) -> Self {
        Self {
            current: 1,
            total: total.max(1),
            back_policy,
        }
    }

    /// Current step, always within `[1, total]`
    pub fn current(&self) -> u8 {
        self.current
    }

    /// Total number of steps
    pub fn total(&self) -> u8 {
        self.total
    }

    /// Back-navigation policy for step one
    pub fn back_policy(&self) -> BackPolicy {
        self.back_policy
    }

    /// True when positioned on step one
    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    /// True when positioned on the final step
    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    /// Whether the back control should render as interactive.
    ///
    /// Off the first step it always is; on the first step it depends on
    /// the policy (a delegating wizard keeps the control live so the host
    /// can take over).
    pub fn back_enabled(&self) -> bool {
        !self.is_first() || self.back_policy == BackPolicy::DelegateToHost
    }

    /// Progress through the wizard as a whole percentage, for the
    /// progress indicator. Step 1 of 4 reads as 25, the last step as 100.
    pub fn progress_percent(&self) -> u8 {
        ((self.current as u16 * 100) / self.total as u16) as u8
    }

    /// Move one step forward, or report completion on the last step.
    ///
    /// The index never exceeds `total`; completing does not move it.
    pub fn advance(&mut self) -> Advance {
        if self.current < self.total {
            self.current += 1;
            Advance::Moved(self.current)
        } else {
            Advance::Completed
        }
    }

    /// Move one step back, or apply the step-one policy.
    ///
    /// The index never drops below 1.
    pub fn retreat(&mut self) -> Retreat {
        if self.current > 1 {
            self.current -= 1;
            Retreat::Moved(self.current)
        } else {
            match self.back_policy {
                BackPolicy::DelegateToHost => Retreat::Delegated,
                BackPolicy::Disabled => Retreat::Blocked,
            }
        }
    }

    /// Reset to step one (host re-entering a delegated wizard)
    pub fn reset(&mut self) {
        self.current = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_step_one() {
        let tracker = StepTracker::new(6, BackPolicy::Disabled);
        assert_eq!(tracker.current(), 1);
        assert_eq!(tracker.total(), 6);
        assert!(tracker.is_first());
        assert!(!tracker.is_last());
    }

    #[test]
    fn test_advance_walks_to_completion() {
        let mut tracker = StepTracker::new(3, BackPolicy::Disabled);
        assert_eq!(tracker.advance(), Advance::Moved(2));
        assert_eq!(tracker.advance(), Advance::Moved(3));
        assert!(tracker.is_last());
        assert_eq!(tracker.advance(), Advance::Completed);
        // Completion leaves the index parked on the last step
        assert_eq!(tracker.current(), 3);
    }

    #[test]
    fn test_retreat_stops_at_one() {
        let mut tracker = StepTracker::new(3, BackPolicy::Disabled);
        tracker.advance();
        assert_eq!(tracker.retreat(), Retreat::Moved(1));
        assert_eq!(tracker.retreat(), Retreat::Blocked);
        assert_eq!(tracker.current(), 1);
    }

    #[test]
    fn test_retreat_delegates_per_policy() {
        let mut tracker = StepTracker::new(3, BackPolicy::DelegateToHost);
        assert_eq!(tracker.retreat(), Retreat::Delegated);
        assert_eq!(tracker.current(), 1);
    }

    #[test]
    fn test_back_enabled_follows_policy() {
        let delegating = StepTracker::new(2, BackPolicy::DelegateToHost);
        let blocked = StepTracker::new(2, BackPolicy::Disabled);
        assert!(delegating.back_enabled());
        assert!(!blocked.back_enabled());

        let mut moved = blocked.clone();
        moved.advance();
        assert!(moved.back_enabled());
    }

    #[test]
    fn test_progress_percent() {
        let mut tracker = StepTracker::new(4, BackPolicy::Disabled);
        assert_eq!(tracker.progress_percent(), 25);
        tracker.advance();
        assert_eq!(tracker.progress_percent(), 50);
        tracker.advance();
        tracker.advance();
        assert_eq!(tracker.progress_percent(), 100);
    }

    #[test]
    fn test_zero_total_is_clamped() {
        let mut tracker = StepTracker::new(0, BackPolicy::Disabled);
        assert_eq!(tracker.total(), 1);
        assert_eq!(tracker.advance(), Advance::Completed);
        assert_eq!(tracker.current(), 1);
    }

    #[test]
    fn test_reset_returns_to_step_one() {
        let mut tracker = StepTracker::new(5, BackPolicy::DelegateToHost);
        tracker.advance();
        tracker.advance();
        tracker.reset();
        assert_eq!(tracker.current(), 1);
    }
}
