//! Scroll-reveal wrapper used around every content section.
//!
//! Children are always mounted; the wrapper only toggles classes. Until the
//! block first enters the viewport it renders in the hidden visual state
//! (`.reveal`: reduced opacity, vertical offset), so nothing flashes before
//! layout. The first intersection flips it to `.reveal--shown` and the
//! observer disconnects; the transition is one-directional for the life of
//! the mounted instance.
//!
//! Visibility comes from a per-instance `IntersectionObserver` created via
//! an evaluated script, keyed by a unique element id and reporting back over
//! the eval channel. Environments without layout (tests, prerendering, a
//! missing `IntersectionObserver`) resolve the channel immediately, which
//! lands in the same shown state: content is never left permanently hidden.

use dioxus::prelude::*;
use uuid::Uuid;

use crate::core::reveal::{root_margin, RevealState};

/// Builds the observer script for one wrapper instance. The observer
/// disconnects itself after the first intersection and deregisters from the
/// window-scoped map the unmount cleanup consults.
fn observe_script(id: &str, margin_px: i32) -> String {
    let margin = root_margin(margin_px);
    format!(
        r#"(function () {{
            const el = document.getElementById("{id}");
            if (!el || typeof IntersectionObserver === "undefined") {{
                dioxus.send(true);
                return;
            }}
            window.__vitrineReveals = window.__vitrineReveals || {{}};
            const observer = new IntersectionObserver((entries) => {{
                for (const entry of entries) {{
                    if (entry.isIntersecting) {{
                        observer.disconnect();
                        delete window.__vitrineReveals["{id}"];
                        dioxus.send(true);
                        return;
                    }}
                }}
            }}, {{ root: null, rootMargin: "{margin}" }});
            window.__vitrineReveals["{id}"] = observer;
            observer.observe(el);
        }})();"#
    )
}

/// Unmount cleanup: drop the observer so no callback outlives the wrapper.
fn disconnect_script(id: &str) -> String {
    format!(
        r#"(function () {{
            const map = window.__vitrineReveals;
            if (map && map["{id}"]) {{
                map["{id}"].disconnect();
                delete map["{id}"];
            }}
        }})();"#
    )
}

/// Defers the visual appearance of `children` until they scroll into view.
///
/// `margin_px` adjusts the effective viewport boundary (negative values
/// trigger later, once the block is that far inside the viewport) and
/// `delay_ms` offsets the start of the transition after visibility is first
/// detected.
#[component]
pub fn Reveal(
    children: Element,
    #[props(default = 0)] delay_ms: u32,
    #[props(default = 0)] margin_px: i32,
    #[props(default)] class: Option<String>,
) -> Element {
    let id = use_hook(|| format!("reveal-{}", Uuid::new_v4().simple()));
    let mut state = use_signal(RevealState::new);

    {
        let id = id.clone();
        use_effect(move || {
            let js = observe_script(&id, margin_px);
            spawn(async move {
                let mut eval = document::eval(&js);
                // A real intersection and the no-layout fallback both land
                // here; either way the block becomes visible exactly once.
                let _ = eval.recv::<bool>().await;
                state.write().mark_visible();
            });
        });
    }

    {
        let id = id.clone();
        use_drop(move || {
            let _ = document::eval(&disconnect_script(&id));
        });
    }

    let shown = state.read().is_shown();
    let extra = class.as_deref().unwrap_or_default();
    let classes = if shown {
        format!("reveal reveal--shown {extra}")
    } else {
        format!("reveal {extra}")
    };

    rsx! {
        div {
            id: "{id}",
            class: "{classes}",
            style: "transition-delay: {delay_ms}ms;",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observer_script_carries_id_and_margin() {
        let js = observe_script("reveal-abc", -60);
        assert!(js.contains(r#"getElementById("reveal-abc")"#));
        assert!(js.contains(r#"rootMargin: "-60px""#));
        // The fallback path must report back instead of leaving the block hidden.
        assert!(js.contains("dioxus.send(true)"));
        // One-shot: the observer tears itself down on first intersection.
        assert!(js.contains("observer.disconnect()"));
    }

    #[test]
    fn disconnect_script_targets_the_same_registry_slot() {
        let js = disconnect_script("reveal-abc");
        assert!(js.contains(r#"map["reveal-abc"].disconnect()"#));
        assert!(js.contains(r#"delete map["reveal-abc"]"#));
    }
}
