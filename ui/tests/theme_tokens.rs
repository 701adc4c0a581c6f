//! Stylesheet token guard for the shared `ui` assets.
//!
//! Components reference these selectors by string; a rename on one side of
//! the CSS/rsx boundary would only show up as silently unstyled markup at
//! runtime. Keep this list in sync when selectors are intentionally renamed.

const THEME_CSS: &str = include_str!("../assets/theme/main.css");
const NAVBAR_CSS: &str = include_str!("../assets/styling/navbar.css");

#[test]
fn theme_carries_the_reveal_states() {
    // Both visual states of the reveal wrapper, and the transition between
    // them, must exist for the scroll animation to do anything.
    for token in [".reveal", ".reveal--shown", "transition:", "transform"] {
        assert!(
            THEME_CSS.contains(token),
            "Expected token `{token}` missing from theme CSS"
        );
    }
}

#[test]
fn theme_carries_the_shared_layout_selectors() {
    let required = [
        "--color-bg",
        "body {",
        ".hero__title",
        ".section__title",
        ".section--split",
        ".row",
        ".panel",
        ".panel--pricing",
        ".panel--person",
        ".template--index",
        ".grid--three",
        ".chip--active",
        ".gallery",
        ".card__tags",
        ".cta__button",
        ".footer",
        ".visually-hidden",
    ];
    for token in required {
        assert!(
            THEME_CSS.contains(token),
            "Expected selector `{token}` missing from theme CSS"
        );
    }
}

#[test]
fn navbar_stylesheet_matches_the_component_markup() {
    for token in [
        ".navbar",
        ".navbar__inner",
        ".navbar__back",
        ".navbar__brand",
        ".navbar__locale",
    ] {
        assert!(
            NAVBAR_CSS.contains(token),
            "Expected selector `{token}` missing from navbar CSS"
        );
    }
}
