//! Procura UI Components
//!
//! This crate provides the Dioxus components shared across the Procura
//! desktop app, following the warm hospitality aesthetic defined in
//! DESIGN_SYSTEM.md.
//!
//! ## Design Philosophy
//!
//! Calm, editorial surfaces that let the product talk:
//! - **Paper (#fdfbf7)**: Warm page background
//! - **Ink (#1f2a37)**: Body text and headings
//! - **Teal (#0f6f6c)**: Primary actions, links, selected states
//! - **Amber (#e8a33d)**: Calls to action and highlights
//!
//! ## Voice
//!
//! Copy speaks to operators, not procurement theorists:
//! - "Invite your team" (not "add user entities")
//! - "Sourcing made simple" (loading and empty states stay human)
//! - Buttons say what happens next ("Book a demo", "Start selling")

pub mod components;

pub use components::*;
