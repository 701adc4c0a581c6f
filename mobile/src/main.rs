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

/// Same slug mapping as the web crate, against the mobile `Route` enum.
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

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavLinks {
        home: nav_home,
        template: nav_template,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        I18nProvider {
            Router::<Route> {}
        }
    }
}
