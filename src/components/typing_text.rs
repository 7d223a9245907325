//! Typing Text Component
//!
//! Types out a rotating set of phrases character by character, holds,
//! erases, and moves on. Used by the home hero headline.

use std::time::Duration;

use dioxus::prelude::*;

/// Properties for the TypingText component
#[derive(Clone, PartialEq, Props)]
pub struct TypingTextProps {
    /// Phrases to rotate through, in order
    pub phrases: Vec<String>,
    /// Delay per typed character
    #[props(default = 70)]
    pub type_ms: u64,
    /// Pause with the full phrase on screen
    #[props(default = 1700)]
    pub hold_ms: u64,
    /// Delay per erased character
    #[props(default = 32)]
    pub erase_ms: u64,
}

/// Animated typewriter span with a blinking caret
///
/// The animation task is owned by the component scope, so navigating
/// away stops it with the component.
#[component]
pub fn TypingText(props: TypingTextProps) -> Element {
    let phrases = props.phrases.clone();
    let mut display = use_signal(String::new);

    let type_ms = props.type_ms;
    let hold_ms = props.hold_ms;
    let erase_ms = props.erase_ms;

    use_effect(move || {
        let phrases = phrases.clone();
        spawn(async move {
            if phrases.is_empty() {
                return;
            }
            let mut idx = 0usize;
            loop {
                let phrase: Vec<char> = phrases[idx].chars().collect();

                for end in 1..=phrase.len() {
                    display.set(phrase[..end].iter().collect());
                    tokio::time::sleep(Duration::from_millis(type_ms)).await;
                }

                tokio::time::sleep(Duration::from_millis(hold_ms)).await;

                for end in (0..phrase.len()).rev() {
                    display.set(phrase[..end].iter().collect());
                    tokio::time::sleep(Duration::from_millis(erase_ms)).await;
                }

                idx = (idx + 1) % phrases.len();
            }
        });
    });

    rsx! {
        span { class: "typing-text",
            "{display}"
            span { class: "typing-caret" }
        }
    }
}
