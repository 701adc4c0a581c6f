#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::template_nav::{register_nav, NavLinks};
use ui::i18n::I18nProvider;
use ui::views::{
    Agency, Architecture, Home, Interior, Jewelry, Magazine, Photography, Restaurant, Roastery,
    Saas,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/t/architecture")]
    Architecture {},
    #[route("/t/agency")]
    Agency {},
    #[route("/t/saas")]
    Saas {},
    #[route("/t/restaurant")]
    Restaurant {},
    #[route("/t/jewelry")]
    Jewelry {},
    #[route("/t/photography")]
    Photography {},
    #[route("/t/magazine")]
    Magazine {},
    #[route("/t/interior")]
    Interior {},
    #[route("/t/roastery")]
    Roastery {},
}

// Embedded shared theme (ui/assets/theme/main.css); no separate desktop
// assets directory is needed for styling.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Vitrine – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

/// Same slug mapping as the web crate, against the desktop `Route` enum.
fn route_for(slug: &str) -> Route {
    match slug {
        "atelier-north" => Route::Architecture {},
        "studio-pulse" => Route::Agency {},
        "driftkit" => Route::Saas {},
        "maison-verre" => Route::Restaurant {},
        "aurelia" => Route::Jewelry {},
        "halftone" => Route::Photography {},
        "ledger-review" => Route::Magazine {},
        "form-and-field" => Route::Interior {},
        "ember-roastery" => Route::Roastery {},
        _ => Route::Home {},
    }
}

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__back",
        to: Route::Home {},
        "{label}"
    })
}

fn nav_template(slug: &str, body: Element) -> Element {
    rsx!(Link {
        class: "card__link",
        to: route_for(slug),
        {body}
    })
}

#[component]
fn App() -> Element {
    register_nav(NavLinks {
        home: nav_home,
        template: nav_template,
    });

    // Runtime maximize fallback (in case the initial builder maximize is
    // ignored by the window manager).
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Always inline the embedded theme; packaged desktop builds carry no
        // external stylesheet dependency.
        document::Style { "{MAIN_CSS_INLINE}" }

        I18nProvider {
            Router::<Route> {}
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}
