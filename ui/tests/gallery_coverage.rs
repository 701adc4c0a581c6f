//! Slug coverage guard.
//!
//! Every gallery entry must be reachable: each platform crate maps slugs to
//! its own `Route` enum by hand, and a new template added to `GALLERY`
//! without a route would silently link back to the index at runtime. This
//! test scans the platform `main.rs` sources for every slug so the mismatch
//! fails in CI instead.

use std::fs;
use std::path::PathBuf;

use ui::core::gallery::GALLERY;

/// Platform sources that must carry the full slug -> route mapping.
const PLATFORM_MAINS: &[&str] = &[
    "../web/src/main.rs",
    "../desktop/src/main.rs",
    "../mobile/src/main.rs",
];

#[test]
fn every_slug_is_routed_on_every_platform() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let mut failures = Vec::new();

    for rel in PLATFORM_MAINS {
        let path = crate_root.join(rel);
        let source = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));

        for entry in &GALLERY {
            let needle = format!("\"{}\"", entry.slug);
            if !source.contains(&needle) {
                failures.push(format!("{rel} has no mapping for slug {}", entry.slug));
            }
        }
    }

    if !failures.is_empty() {
        panic!(
            "Gallery slug coverage failed:\n  {}\n\nHint: add the slug to route_for() in the listed crate.",
            failures.join("\n  ")
        );
    }
}

#[test]
fn every_accent_token_exists_in_the_theme() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let theme = fs::read_to_string(crate_root.join("assets/theme/main.css"))
        .expect("failed to read theme CSS");

    for entry in &GALLERY {
        let selector = format!(".{}", entry.accent);
        assert!(
            theme.contains(&selector),
            "accent `{}` used by `{}` is missing from the theme",
            entry.accent,
            entry.slug
        );
    }
}
