//! UI Components for Procura.
//!
//! Warm hospitality aesthetic components.

mod chat_preview;
mod markdown;
mod nav_header;
mod sections;
mod site_footer;
mod typing_text;
mod wizard_frame;

pub use chat_preview::AnitaChatPreview;
pub use markdown::MarkdownRenderer;
pub use nav_header::NavHeader;
pub use sections::{
    CtaBand, FaqItem, FeatureCard, LogoStrip, QuoteCard, SectionHead, SplitSection, StatBand,
};
pub use site_footer::SiteFooter;
pub use typing_text::TypingText;
pub use wizard_frame::WizardFrame;
