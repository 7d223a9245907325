//! Color constants from DESIGN_SYSTEM.md
//!
//! Warm hospitality palette.

#![allow(dead_code)]

// === PAPER (Backgrounds) ===
pub const PAPER: &str = "#fdfbf7";
pub const PAPER_RAISED: &str = "#ffffff";
pub const PAPER_SUNKEN: &str = "#f4efe6";
pub const HAIRLINE: &str = "#e6e0d4";

// === INK (Text) ===
pub const INK: &str = "#1f2a37";
pub const INK_SOFT: &str = "rgba(31, 42, 55, 0.72)";
pub const INK_MUTED: &str = "rgba(31, 42, 55, 0.5)";

// === TEAL (Actions, Links, Selection) ===
pub const TEAL: &str = "#0f6f6c";
pub const TEAL_DEEP: &str = "#0b5654";
pub const TEAL_TINT: &str = "rgba(15, 111, 108, 0.08)";

// === AMBER (Calls to Action, Highlights) ===
pub const AMBER: &str = "#e8a33d";
pub const AMBER_DEEP: &str = "#c9872a";
pub const AMBER_TINT: &str = "rgba(232, 163, 61, 0.14)";

// === SEMANTIC ===
pub const DANGER: &str = "#c0392b";
pub const DANGER_TINT: &str = "rgba(192, 57, 43, 0.1)";
pub const SUCCESS: &str = "#2e7d4f";
pub const SUCCESS_TINT: &str = "rgba(46, 125, 79, 0.12)";
pub const INFO: &str = "#2c6e91";
