use dioxus::prelude::*;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Clone, Debug, Deserialize)]
struct Bundle(HashMap<String, String>);

static RU_JSON: &str = include_str!("../assets/i18n/ru.json");
static EN_JSON: &str = include_str!("../assets/i18n/en.json");

static BUNDLES: Lazy<HashMap<&'static str, Bundle>> = Lazy::new(|| {
    let mut m = HashMap::new();
    let parse = |s: &str| serde_json::from_str::<Bundle>(s).unwrap_or(Bundle(HashMap::new()));
    m.insert("ru", parse(RU_JSON));
    m.insert("en", parse(EN_JSON));
    m
});

#[derive(Clone)]
pub struct I18nState {
    pub lang: String, // "ru" | "en" | "system"
}

impl Default for I18nState {
    fn default() -> Self {
        Self { lang: "ru".into() }
    }
}

#[cfg(target_arch = "wasm32")]
fn detect_system_lang() -> String {
    web_sys::window()
        .and_then(|w| w.navigator().language())
        .unwrap_or_else(|| "ru".into())
        .split('-')
        .next()
        .unwrap_or("ru")
        .to_lowercase()
}

#[cfg(not(target_arch = "wasm32"))]
fn detect_system_lang() -> String {
    std::env::var("LANG")
        .unwrap_or_else(|_| "ru".into())
        .split('.')
        .next()
        .unwrap_or("ru")
        .split('_')
        .next()
        .unwrap_or("ru")
        .to_lowercase()
}

pub fn provide_i18n() {
    let sig: Signal<I18nState> = use_signal(I18nState::default);
    provide_context(sig);
}

pub fn use_i18n() -> Signal<I18nState> {
    use_context::<Signal<I18nState>>()
}

pub fn t(key: &str) -> String {
    // Looked up from handlers and spawned tasks too, so tolerate a missing
    // context instead of requiring the render scope.
    let lang = match try_consume_context::<Signal<I18nState>>() {
        Some(sig) => {
            let st = sig.read().clone();
            if st.lang == "system" { detect_system_lang() } else { st.lang }
        }
        None => "ru".into(),
    };
    let bundles = &*BUNDLES;
    bundles
        .get(lang.as_str())
        .and_then(|b| b.0.get(key).cloned())
        .or_else(|| bundles.get("ru").and_then(|b| b.0.get(key).cloned()))
        .unwrap_or_else(|| key.to_string())
}

#[allow(dead_code)]
pub fn set_lang(new_lang: &str) {
    let mut sig = use_i18n();
    let mut guard = sig.write();
    guard.lang = match new_lang {
        "system" | "ru" | "en" => new_lang.to_string(),
        _ => "ru".into(),
    };
}

// ===== Calendar labels =====

/// "Март 2024" for the calendar title bar.
pub fn month_title(year: i32, month: u32) -> String {
    format!("{} {}", t(&format!("months.long.{}", month)), year)
}

/// Sunday-first short weekday names, matching the grid's leading-blank
/// convention.
pub fn weekdays_short() -> Vec<String> {
    vec![
        t("weekdays.sun"),
        t("weekdays.mon"),
        t("weekdays.tue"),
        t("weekdays.wed"),
        t("weekdays.thu"),
        t("weekdays.fri"),
        t("weekdays.sat"),
    ]
}

/// "ДД-ММ" column header used by the distribution matrix.
pub fn format_day_month(d: chrono::NaiveDate) -> String {
    d.format("%d-%m").to_string()
}
