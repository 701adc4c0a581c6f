//! Localized page chrome shared by every template: an optional back link to
//! the gallery, the template's brand, and the locale switcher.

use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::i18n::{self, Locale, Tr};

// Navbar stylesheet, linked here so every template gets it without each page
// repeating the include.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

const BACK_LABEL: Tr = Tr::full("Back to gallery", "갤러리로 돌아가기", "返回图库", "ギャラリーに戻る");
const LOCALE_LABEL: Tr = Tr::full("Language", "언어", "语言", "言語");

/// Platform crates register link builders here so `ui` never needs to know
/// each platform's `Route` enum.
///
/// - `home` builds the back link to the gallery index.
/// - `template` builds a card link for a gallery entry, wrapping the card
///   body supplied by the index view.
///
/// Without a registration the back link is omitted and cards fall back to
/// plain anchors, which keeps non-routed contexts (tests, prerendering)
/// rendering instead of panicking.
pub struct NavLinks {
    pub home: fn(label: &str) -> Element,
    pub template: fn(slug: &str, body: Element) -> Element,
}

static NAV_LINKS: OnceCell<NavLinks> = OnceCell::new();

/// First registration wins; later calls are ignored, so hot-reload re-runs
/// of a platform `App` are harmless.
pub fn register_nav(links: NavLinks) {
    let _ = NAV_LINKS.set(links);
}

/// Card link for a gallery entry: the registered router link, or a plain
/// anchor when no platform has registered one.
pub fn template_link(slug: &str, body: Element) -> Element {
    match NAV_LINKS.get() {
        Some(links) => (links.template)(slug, body),
        None => rsx! {
            a { class: "card__link", href: "/t/{slug}", {body} }
        },
    }
}

#[component]
pub fn TemplateNav(
    brand: String,
    #[props(default = true)] show_back: bool,
    #[props(default)] accent: Option<String>,
) -> Element {
    let locale = i18n::use_i18n();
    let active = locale();

    let back_link = if show_back {
        NAV_LINKS
            .get()
            .map(|links| (links.home)(BACK_LABEL.resolve(active)))
    } else {
        None
    };

    let on_change = move |evt: dioxus::events::FormEvent| {
        if let Some(next) = Locale::from_code(&evt.value()) {
            i18n::apply_locale(locale, next);
        }
    };

    let accent = accent.unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { class: "navbar {accent}",
            div { class: "navbar__inner",
                div { class: "navbar__lead",
                    if let Some(link) = back_link {
                        {link}
                    }
                    span { class: "navbar__brand", "{brand}" }
                }

                div { class: "navbar__locale",
                    label {
                        class: "visually-hidden",
                        r#for: "locale-select",
                        {LOCALE_LABEL.resolve(active)}
                    }
                    select {
                        id: "locale-select",
                        value: "{active.code()}",
                        oninput: on_change,
                        { Locale::ALL.iter().map(|l| {
                            let code = l.code();
                            rsx! {
                                option {
                                    key: "{code}",
                                    value: "{code}",
                                    selected: *l == active,
                                    "{l.label()}"
                                }
                            }
                        })}
                    }
                }
            }
        }
    }
}
