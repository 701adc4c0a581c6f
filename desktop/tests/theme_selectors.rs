#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that the CSS selectors the templates rely on (reveal states, the
  gallery grid, rows/panels, per-template accents) remain present in the
  unified shared theme: ui/assets/theme/main.css
- Fail fast if a refactor drops or renames a core class, preventing a
  silent styling regression in packaged (embedded) desktop builds.

How it works:
- The theme is embedded with `include_str!` pointing at the shared `ui/`
  location (mirrors the constant in `desktop/src/main.rs`).
- A curated set of selectors is asserted. If you intentionally rename one:
    1. Update the component markup in the `ui` crate.
    2. Adjust REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Reveal wrapper visual states.
    ".reveal",
    ".reveal--shown",
    // Page scaffold.
    ".template",
    ".hero__kicker",
    ".hero__title",
    ".hero__lede",
    ".section__title",
    ".row__title",
    ".row__meta",
    ".row--menu",
    ".section--split",
    ".panel__title",
    ".panel__points",
    ".panel--pricing",
    ".panel--person",
    // Gallery index.
    ".filters",
    ".chip",
    ".chip--active",
    ".gallery",
    ".card__name",
    ".card__swatch",
    // Shared chrome.
    ".footer__fine",
    ".visually-hidden",
    // Template accents (one per gallery entry).
    ".accent-slate",
    ".accent-coral",
    ".accent-indigo",
    ".accent-olive",
    ".accent-gold",
    ".accent-ink",
    ".accent-oxblood",
    ".accent-clay",
    ".accent-ember",
];

#[test]
fn required_theme_selectors_are_present() {
    let mut missing = Vec::new();
    for selector in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(selector) {
            missing.push(*selector);
        }
    }
    assert!(
        missing.is_empty(),
        "Theme is missing required selectors:\n  {}",
        missing.join("\n  ")
    );
}
