//! Locale selection and per-string translation tables.
//!
//! Every user-visible string in the templates is authored as a small [`Tr`]
//! table right at its call site rather than in a central resource bundle.
//! A table always carries the English text (the fallback locale) and may
//! carry the other locales; lookup degrades to English when the active
//! locale has no entry. Because `Tr.en` is a plain field, a table without
//! its fallback entry cannot be written at all.
//!
//! Wiring:
//! - [`I18nProvider`] owns the single active [`Locale`] for the whole app as
//!   a `Signal` in Dioxus context, and restores a persisted choice on mount.
//! - [`use_i18n`] hands components that signal. Calling it outside the
//!   provider is a structural wiring mistake and panics immediately.
//! - [`apply_locale`] switches the locale and persists the choice
//!   best-effort; a failed write never blocks the in-memory switch.

use dioxus::prelude::*;

use crate::core::storage;

/// Fallback locale. Every table carries this entry by construction.
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// Supported locales. Closed set; exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    Ko,
    Zh,
    Ja,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::En, Locale::Ko, Locale::Zh, Locale::Ja];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ko => "ko",
            Locale::Zh => "zh",
            Locale::Ja => "ja",
        }
    }

    /// Native-script name, used by the locale switcher.
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ko => "한국어",
            Locale::Zh => "中文",
            Locale::Ja => "日本語",
        }
    }

    /// Parses a locale code, tolerating region suffixes (`en-US`, `ko_KR`,
    /// `zh-Hant`) and ASCII case.
    pub fn from_code(code: &str) -> Option<Self> {
        let lower = code.trim().to_ascii_lowercase();
        let primary = lower.split(['-', '_']).next().unwrap_or(lower.as_str());
        match primary {
            "en" => Some(Locale::En),
            "ko" => Some(Locale::Ko),
            "zh" => Some(Locale::Zh),
            "ja" => Some(Locale::Ja),
            _ => None,
        }
    }
}

/// A per-string translation table.
///
/// The English entry is mandatory; the rest are optional and fall back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tr {
    pub en: &'static str,
    pub ko: Option<&'static str>,
    pub zh: Option<&'static str>,
    pub ja: Option<&'static str>,
}

impl Tr {
    /// A table with only the fallback entry.
    pub const fn new(en: &'static str) -> Self {
        Self {
            en,
            ko: None,
            zh: None,
            ja: None,
        }
    }

    /// A fully translated table.
    pub const fn full(
        en: &'static str,
        ko: &'static str,
        zh: &'static str,
        ja: &'static str,
    ) -> Self {
        Self {
            en,
            ko: Some(ko),
            zh: Some(zh),
            ja: Some(ja),
        }
    }

    pub const fn ko(mut self, text: &'static str) -> Self {
        self.ko = Some(text);
        self
    }

    pub const fn zh(mut self, text: &'static str) -> Self {
        self.zh = Some(text);
        self
    }

    pub const fn ja(mut self, text: &'static str) -> Self {
        self.ja = Some(text);
        self
    }

    /// The active locale's entry, else the fallback entry. Never panics.
    pub fn resolve(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Ko => self.ko.unwrap_or(self.en),
            Locale::Zh => self.zh.unwrap_or(self.en),
            Locale::Ja => self.ja.unwrap_or(self.en),
        }
    }

    /// Whether every non-fallback locale has its own entry. Used by the
    /// completeness tests over gallery data.
    pub fn is_complete(&self) -> bool {
        self.ko.is_some() && self.zh.is_some() && self.ja.is_some()
    }
}

/// Provides the active-locale signal to the component tree.
///
/// Starts at [`DEFAULT_LOCALE`], then restores a persisted choice (or the
/// browser/webview language on a first visit) after mount. Both reads are
/// best-effort; on any failure the default simply stays active.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let mut locale = use_signal(|| DEFAULT_LOCALE);
    use_context_provider(|| locale);

    use_effect(move || {
        spawn(async move {
            if let Some(code) = storage::load_locale_code().await {
                if let Some(saved) = Locale::from_code(&code) {
                    locale.set(saved);
                    return;
                }
            }
            if let Some(code) = storage::browser_language().await {
                if let Some(detected) = Locale::from_code(&code) {
                    locale.set(detected);
                }
            }
        });
    });

    rsx! {
        {children}
    }
}

/// The active-locale signal.
///
/// Panics when called outside [`I18nProvider`]: that is a wiring mistake in
/// the component tree, not a runtime condition to paper over.
pub fn use_i18n() -> Signal<Locale> {
    try_use_context::<Signal<Locale>>()
        .expect("use_i18n must be called beneath I18nProvider; wrap the router in it")
}

/// Whether a switch to `next` needs a signal write. Re-applying the active
/// locale must not touch the signal, so subscribers are not re-rendered for
/// a change that changed nothing.
fn locale_write(current: Locale, next: Locale) -> Option<Locale> {
    if current != next {
        Some(next)
    } else {
        None
    }
}

/// Switches the active locale and persists the choice.
///
/// Idempotent: re-applying the current locale leaves the signal untouched
/// and rewrites the same single stored value. Persistence is fire-and-forget;
/// storage being unavailable never blocks the in-memory switch.
pub fn apply_locale(mut active: Signal<Locale>, next: Locale) {
    if let Some(changed) = locale_write(active(), next) {
        active.set(changed);
    }
    storage::save_locale_code(next.code());
}

#[cfg(test)]
mod tests {
    use super::*;

    const BACK: Tr = Tr::new("Back").ko("뒤로");

    #[test]
    fn active_locale_entry_wins() {
        let table = Tr::full("Back", "뒤로", "返回", "戻る");
        assert_eq!(table.resolve(Locale::En), "Back");
        assert_eq!(table.resolve(Locale::Ko), "뒤로");
        assert_eq!(table.resolve(Locale::Zh), "返回");
        assert_eq!(table.resolve(Locale::Ja), "戻る");
    }

    #[test]
    fn missing_entry_falls_back_to_default() {
        // zh and ja are absent, so both resolve to the English text.
        assert_eq!(BACK.resolve(Locale::Zh), "Back");
        assert_eq!(BACK.resolve(Locale::Ja), "Back");
        assert_eq!(BACK.resolve(Locale::Ko), "뒤로");
    }

    #[test]
    fn default_only_table_serves_every_locale() {
        let table = Tr::new("Vitrine");
        for locale in Locale::ALL {
            assert_eq!(table.resolve(locale), "Vitrine");
        }
    }

    #[test]
    fn completeness_reflects_optional_entries() {
        assert!(Tr::full("a", "b", "c", "d").is_complete());
        assert!(!BACK.is_complete());
        assert!(!Tr::new("a").is_complete());
    }

    #[test]
    fn from_code_tolerates_regions_and_case() {
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_code("ko_KR"), Some(Locale::Ko));
        assert_eq!(Locale::from_code("zh-Hant"), Some(Locale::Zh));
        assert_eq!(Locale::from_code("JA-jp"), Some(Locale::Ja));
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }

    #[test]
    fn reapplying_the_active_locale_skips_the_signal_write() {
        for locale in Locale::ALL {
            assert_eq!(locale_write(locale, locale), None);
        }
    }

    #[test]
    fn switching_locales_writes_exactly_the_requested_one() {
        assert_eq!(locale_write(Locale::En, Locale::Ko), Some(Locale::Ko));
        assert_eq!(locale_write(Locale::Ko, Locale::En), Some(Locale::En));
        assert_eq!(locale_write(Locale::Zh, Locale::Ja), Some(Locale::Ja));
    }
}
