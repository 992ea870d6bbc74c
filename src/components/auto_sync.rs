use dioxus::prelude::*;
use tracing::{error, info};

use crate::api;
use crate::dates::{date_key, today};
use crate::i18n::t;

// Keys mirror what the rest of the tooling expects; this is a UI hint, not a
// source of truth.
const KEY_SYNC_DATE: &str = "lastAutoSyncDate";
const KEY_SYNC_TIME: &str = "lastAutoSyncTime";

#[cfg(target_arch = "wasm32")]
mod store {
    use web_sys::{window, Storage};

    fn storage() -> Option<Storage> {
        window().and_then(|w| w.local_storage().ok().flatten())
    }

    pub fn get(key: &str) -> Option<String> {
        storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    pub fn set(key: &str, value: &str) {
        if let Some(s) = storage() {
            let _ = s.set_item(key, value);
        }
    }

    pub fn remove(key: &str) {
        if let Some(s) = storage() {
            let _ = s.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod store {
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn file_path() -> PathBuf {
        let mut base = dirs_next::cache_dir().unwrap_or_else(std::env::temp_dir);
        base.push("duty-admin");
        base.push("autosync.json");
        base
    }

    fn load() -> HashMap<String, String> {
        std::fs::read_to_string(file_path())
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    fn save(map: &HashMap<String, String>) {
        let path = file_path();
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string(map) {
            let _ = std::fs::write(path, json);
        }
    }

    pub fn get(key: &str) -> Option<String> {
        load().get(key).cloned()
    }

    pub fn set(key: &str, value: &str) {
        let mut map = load();
        map.insert(key.to_string(), value.to_string());
        save(&map);
    }

    pub fn remove(key: &str) {
        let mut map = load();
        map.remove(key);
        save(&map);
    }
}

/// Trigger panel for the backend-wide status sync, with an "already ran
/// today" hint persisted client-side.
#[component]
pub fn AutoSyncPanel(on_sync_complete: EventHandler<()>) -> Element {
    let mut enabled = use_signal(|| false);
    let mut last_sync = use_signal(|| Option::<String>::None);
    let mut syncing = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);

    use_effect(move || {
        if store::get(KEY_SYNC_DATE).as_deref() == Some(date_key(today()).as_str()) {
            enabled.set(true);
            last_sync.set(store::get(KEY_SYNC_TIME));
        }
    });

    let run_sync = move || {
        if syncing() {
            return;
        }
        spawn(async move {
            syncing.set(true);
            error_msg.set(None);
            match api::sync_all_employees().await {
                Ok(report) => {
                    info!(?report, "employee status sync finished");
                    let now = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
                    store::set(KEY_SYNC_DATE, &date_key(today()));
                    store::set(KEY_SYNC_TIME, &now);
                    last_sync.set(Some(now));
                    on_sync_complete.call(());
                }
                Err(e) => {
                    error!(%e, "employee status sync failed");
                    error_msg.set(Some(e.detail_or(&t("sync.error")).to_string()));
                }
            }
            syncing.set(false);
        });
    };

    let toggle = move |_| {
        if enabled() {
            enabled.set(false);
            store::remove(KEY_SYNC_DATE);
            store::remove(KEY_SYNC_TIME);
            last_sync.set(None);
        } else {
            enabled.set(true);
            run_sync();
        }
    };

    rsx! {
        div { class: "bg-white rounded-lg shadow p-4 mb-4",
            div { class: "flex items-center justify-between",
                div {
                    h3 { class: "text-lg font-medium text-gray-900", {t("sync.title")} }
                    p { class: "text-sm text-gray-500 mt-1", {t("sync.subtitle")} }
                    if let Some(ts) = last_sync.read().clone() {
                        p { class: "text-xs text-gray-400 mt-1", {format!("{} {}", t("sync.last"), ts)} }
                    }
                }
                div { class: "flex items-center space-x-3",
                    if let Some(err) = error_msg.read().clone() {
                        div { class: "text-red-600 text-sm bg-red-50 border border-red-200 rounded-md p-2",
                            {err}
                        }
                    }
                    button {
                        class: if enabled() {
                            "px-4 py-2 text-sm font-medium rounded-md bg-green-600 text-white hover:bg-green-700 disabled:opacity-50"
                        } else {
                            "px-4 py-2 text-sm font-medium rounded-md bg-gray-600 text-white hover:bg-gray-700 disabled:opacity-50"
                        },
                        disabled: syncing(),
                        onclick: toggle,
                        {if syncing() {
                            t("sync.running")
                        } else if enabled() {
                            t("sync.disable")
                        } else {
                            t("sync.enable")
                        }}
                    }
                    if enabled() {
                        button {
                            class: "px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700 disabled:opacity-50",
                            disabled: syncing(),
                            onclick: move |_| run_sync(),
                            {if syncing() { t("sync.running") } else { t("sync.now") }}
                        }
                    }
                }
            }
        }
    }
}
