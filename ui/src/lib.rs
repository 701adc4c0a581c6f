//! Shared UI crate for Vitrine. All views, components, content data, and
//! styling assets live here; the platform crates only add a router and a
//! launcher around them.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Page chrome (back link + locale switcher) shared by every template.
    pub mod template_nav;
    pub use template_nav::register_nav;
    pub use template_nav::NavLinks;
    pub use template_nav::TemplateNav;

    // One-shot scroll-reveal wrapper (components/reveal.rs).
    pub mod reveal;
    pub use reveal::Reveal;

    pub mod footer;
    pub use footer::Footer;
}

/// Unified theme stylesheet. Platform crates link this once at the app root;
/// the desktop crate additionally inlines it for packaged builds.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
