#![cfg(test)]
//! Ensures the embedded desktop CSS (shared unified theme) remains present
//! and non-trivial.
//!
//! The desktop build inlines `ui/assets/theme/main.css` at compile time; an
//! accidental truncation or path break would only degrade styling at
//! runtime. This test fails the build early instead.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty. If this is intentional, remove the test."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    // Quick sanity tokens that should exist in the theme.
    let required = ["--color-bg", ".reveal", "body {", ".cta__button"];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
