//! Wizard Progress Components
//!
//! Step counter and fill bar shown at the top of the onboarding
//! wizards. The fill width tracks the step fraction directly so the
//! bar lands on 100% exactly at the last step.

use dioxus::prelude::*;

/// Properties for the StepProgress component
#[derive(Clone, PartialEq, Props)]
pub struct StepProgressProps {
    /// Current step, 1-based
    pub current: u8,
    /// Total number of steps
    pub total: u8,
}

/// "Step N of M" label above a teal fill bar
///
/// # Example
///
/// ```rust,ignore
/// StepProgress { current: steps.read().current(), total: steps.read().total() }
/// ```
#[component]
pub fn StepProgress(props: StepProgressProps) -> Element {
    let total = props.total.max(1);
    let current = props.current.clamp(1, total);
    let percent = (current as u32 * 100) / total as u32;

    rsx! {
        div { class: "step-progress",
            div { class: "step-progress-label",
                span { "Step {current} of {total}" }
                span { class: "step-progress-pct", "{percent}%" }
            }
            div {
                class: "step-progress-track",
                role: "progressbar",
                "aria-valuemin": "1",
                "aria-valuemax": "{total}",
                "aria-valuenow": "{current}",
                div {
                    class: "step-progress-fill",
                    style: "width: {percent}%;",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn percent_clamps_out_of_range_steps() {
        // mirrors the clamping the component applies before rendering
        let percent = |current: u8, total: u8| {
            let total = total.max(1);
            let current = current.clamp(1, total);
            (current as u32 * 100) / total as u32
        };
        assert_eq!(percent(1, 6), 16);
        assert_eq!(percent(6, 6), 100);
        assert_eq!(percent(0, 6), 16);
        assert_eq!(percent(9, 6), 100);
        assert_eq!(percent(1, 0), 100);
    }
}
