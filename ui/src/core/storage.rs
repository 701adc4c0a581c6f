//! Best-effort persistence for the visitor's locale choice.
//!
//! One opaque key-value pair: [`LOCALE_KEY`] maps to a locale code so a
//! reload keeps the selected language. The stored value is advisory only;
//! every failure path is silent and the in-memory locale stays correct for
//! the session regardless.
//!
//! On wasm the browser's `localStorage` is reached through `web-sys`; on
//! native builds the same storage lives inside the webview, reached through
//! an evaluated script.

/// Storage key for the persisted locale code.
pub const LOCALE_KEY: &str = "vitrine.locale";

#[cfg(target_arch = "wasm32")]
mod imp {
    use super::LOCALE_KEY;

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub async fn load_locale_code() -> Option<String> {
        local_storage()?.get_item(LOCALE_KEY).ok().flatten()
    }

    pub fn save_locale_code(code: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(LOCALE_KEY, code);
        }
    }

    pub async fn browser_language() -> Option<String> {
        let language = web_sys::window()?.navigator().language()?;
        if language.is_empty() {
            None
        } else {
            Some(language)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use dioxus::prelude::*;

    use super::LOCALE_KEY;

    pub async fn load_locale_code() -> Option<String> {
        let js = format!(
            r#"(function () {{
                try {{ return localStorage.getItem("{LOCALE_KEY}"); }} catch (e) {{ return null; }}
            }})()"#
        );
        let value = document::eval(&js).await.ok()?;
        value.as_str().map(str::to_string)
    }

    pub fn save_locale_code(code: &str) {
        let js = format!(
            r#"(function () {{
                try {{ localStorage.setItem("{LOCALE_KEY}", "{code}"); }} catch (e) {{}}
                return null;
            }})()"#
        );
        spawn(async move {
            let _ = document::eval(&js).await;
        });
    }

    pub async fn browser_language() -> Option<String> {
        let js = r#"(function () {
            try { return navigator.language || null; } catch (e) { return null; }
        })()"#;
        let value = document::eval(js).await.ok()?;
        value.as_str().map(str::to_string)
    }
}

pub use imp::{browser_language, load_locale_code, save_locale_code};
