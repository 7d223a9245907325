//! Theme: color constants and the global stylesheet.

mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
