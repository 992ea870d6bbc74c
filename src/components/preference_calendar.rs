use chrono::Datelike;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use futures::future::join_all;

use dioxus_free_icons::icons::hi_outline_icons::HiX;

use crate::api;
use crate::dates;
use crate::i18n::t;
use crate::models::{
    DutyPreference, DutyPreferencePayload, Employee, PREFERENCE_PREFERRED, PREFERENCE_UNAVAILABLE,
};
use crate::selection::{ApplyMode, ApplyPlan, Selection};

/// Per-employee duty-preference calendar. Apply creates ONE record per
/// selected day (the creates run concurrently and are not atomic); Clear-all
/// wipes the whole visible month server-side, ignoring the selection.
#[component]
pub fn PreferenceCalendarModal(employee: Employee, on_close: EventHandler<()>) -> Element {
    let employee_id = employee.id;
    let mut cursor = use_signal(|| dates::today().with_day(1).unwrap());
    let mut preferences = use_signal(Vec::<DutyPreference>::new);
    let mut selection = use_signal(Selection::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut preference_type = use_signal(|| PREFERENCE_PREFERRED.to_string());
    let mut notes = use_signal(String::new);
    let mut applying = use_signal(|| false);

    use_effect(move || {
        let c = cursor();
        spawn(async move {
            loading.set(true);
            error.set(None);
            match api::list_duty_preferences(employee_id, c.year(), c.month()).await {
                Ok(items) => {
                    preferences.set(items);
                    selection.write().clear();
                }
                Err(_) => error.set(Some(t("preference_calendar.error_load"))),
            }
            loading.set(false);
        });
    });

    let refetch = move || {
        let c = cursor();
        spawn(async move {
            if let Ok(items) = api::list_duty_preferences(employee_id, c.year(), c.month()).await {
                preferences.set(items);
                selection.write().clear();
            }
        });
    };

    let apply = move |_| {
        if selection.read().is_empty() || applying() {
            return;
        }
        let plan = selection.read().apply_plan(ApplyMode::PerDay);
        let kind = preference_type.read().clone();
        let note_text = {
            let n = notes.read().trim().to_string();
            if n.is_empty() { None } else { Some(n) }
        };
        spawn(async move {
            applying.set(true);
            error.set(None);
            if let Some(ApplyPlan::Days(days)) = plan {
                let calls = days.into_iter().map(|date| {
                    let payload = DutyPreferencePayload {
                        date,
                        preference_type: kind.clone(),
                        notes: note_text.clone(),
                    };
                    async move { api::create_duty_preference(employee_id, &payload).await }
                });
                // Fired together; earlier successes stay if a later one fails.
                let results = join_all(calls).await;
                if let Some(Err(e)) = results.into_iter().find(|r| r.is_err()) {
                    error.set(Some(e.detail_or(&t("preference_calendar.error_apply")).to_string()));
                } else {
                    notes.set(String::new());
                }
                refetch();
            }
            applying.set(false);
        });
    };

    let remove = move |_| {
        if selection.read().is_empty() || applying() {
            return;
        }
        let ids: Vec<i64> = {
            let recs = preferences.read();
            selection.read().remove_targets(&recs).iter().map(|p| p.id).collect()
        };
        spawn(async move {
            applying.set(true);
            error.set(None);
            for id in ids {
                if let Err(e) = api::delete_duty_preference(id).await {
                    error.set(Some(e.detail_or(&t("preference_calendar.error_remove")).to_string()));
                    break;
                }
            }
            refetch();
            applying.set(false);
        });
    };

    let clear_all = move |_| {
        if applying() {
            return;
        }
        let c = cursor();
        spawn(async move {
            applying.set(true);
            error.set(None);
            match api::clear_duty_preferences(employee_id, c.year(), c.month()).await {
                Ok(()) => refetch(),
                Err(e) => {
                    error.set(Some(e.detail_or(&t("preference_calendar.error_clear")).to_string()))
                }
            }
            applying.set(false);
        });
    };

    let cell_class = move |day: chrono::NaiveDate| -> String {
        if selection.read().contains(day) {
            return "bg-purple-600 text-white hover:bg-purple-700".into();
        }
        let kind = preferences
            .read()
            .iter()
            .find(|p| p.date == day)
            .map(|p| p.preference_type.clone());
        match kind.as_deref() {
            Some(PREFERENCE_PREFERRED) => "bg-green-500 text-white hover:opacity-80".into(),
            Some(PREFERENCE_UNAVAILABLE) => "bg-red-500 text-white hover:opacity-80".into(),
            Some(_) => "bg-gray-500 text-white hover:opacity-80".into(),
            None if day == dates::today() => "bg-blue-100 text-blue-900 hover:bg-blue-200".into(),
            None => "text-gray-900 hover:bg-gray-100".into(),
        }
    };

    rsx! {
        div { class: "fixed inset-0 bg-gray-600 bg-opacity-50 overflow-y-auto h-full w-full z-50",
            div { class: "relative top-10 mx-auto p-6 border w-full max-w-4xl shadow-lg rounded-md bg-white",
                div { class: "flex items-center justify-between mb-6",
                    div {
                        h3 { class: "text-lg font-medium text-gray-900", {t("preference_calendar.title")} }
                        p { class: "text-sm text-gray-500 mt-1", {employee.full_name()} }
                    }
                    button {
                        class: "text-gray-400 hover:text-gray-600",
                        onclick: move |_| on_close.call(()),
                        Icon { width: 24, height: 24, icon: HiX }
                    }
                }

                if let Some(err) = error.read().clone() {
                    div { class: "text-red-600 text-sm bg-red-50 border border-red-200 rounded-md p-3 mb-4",
                        {err}
                    }
                }

                crate::components::MonthCalendar {
                    cursor: cursor(),
                    loading: loading(),
                    on_prev: move |_| { let c = cursor(); cursor.set(dates::prev_month(c)); },
                    on_next: move |_| { let c = cursor(); cursor.set(dates::next_month(c)); },
                    on_day: move |day| selection.write().toggle(day),
                    cell_class,
                }

                div { class: "mt-6 space-y-4",
                    div {
                        h5 { class: "text-sm font-medium text-gray-900 mb-3", {t("preference_calendar.kind")} }
                        div { class: "flex space-x-3",
                            button {
                                class: if *preference_type.read() == PREFERENCE_PREFERRED {
                                    "px-4 py-2 text-sm font-medium rounded-md bg-green-600 text-white"
                                } else {
                                    "px-4 py-2 text-sm font-medium rounded-md bg-green-100 text-green-700 hover:bg-green-200"
                                },
                                onclick: move |_| preference_type.set(PREFERENCE_PREFERRED.to_string()),
                                {t("preference_calendar.preferred")}
                            }
                            button {
                                class: if *preference_type.read() == PREFERENCE_UNAVAILABLE {
                                    "px-4 py-2 text-sm font-medium rounded-md bg-red-600 text-white"
                                } else {
                                    "px-4 py-2 text-sm font-medium rounded-md bg-red-100 text-red-700 hover:bg-red-200"
                                },
                                onclick: move |_| preference_type.set(PREFERENCE_UNAVAILABLE.to_string()),
                                {t("preference_calendar.unavailable")}
                            }
                        }
                    }
                    div {
                        label { class: "text-sm font-medium text-gray-900", {t("preference_calendar.notes")} }
                        input {
                            class: "mt-1 h-10 w-full rounded-md border border-gray-300 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            placeholder: t("preference_calendar.notes_placeholder"),
                            value: notes.read().clone(),
                            oninput: move |e| notes.set(e.value()),
                        }
                    }
                    div { class: "flex space-x-3",
                        button {
                            class: "px-4 py-2 text-sm font-medium text-white bg-indigo-600 rounded-md hover:bg-indigo-700 disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: selection.read().is_empty() || applying(),
                            onclick: apply,
                            {if applying() { t("common.applying") } else { t("preference_calendar.apply") }}
                        }
                        button {
                            class: "px-4 py-2 text-sm font-medium text-white bg-red-600 rounded-md hover:bg-red-700 disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: selection.read().is_empty() || applying(),
                            onclick: remove,
                            {if applying() { t("common.removing") } else { t("preference_calendar.remove") }}
                        }
                        button {
                            class: "px-4 py-2 text-sm font-medium text-gray-700 bg-gray-100 rounded-md hover:bg-gray-200 disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: applying(),
                            onclick: clear_all,
                            {t("preference_calendar.clear_month")}
                        }
                    }
                }

                div { class: "mt-6 flex items-center justify-center space-x-6 text-sm",
                    div { class: "flex items-center space-x-2",
                        div { class: "w-4 h-4 bg-purple-600 rounded" }
                        span { {t("calendar.legend_selected")} }
                    }
                    div { class: "flex items-center space-x-2",
                        div { class: "w-4 h-4 bg-green-500 rounded" }
                        span { {t("preference_calendar.preferred")} }
                    }
                    div { class: "flex items-center space-x-2",
                        div { class: "w-4 h-4 bg-red-500 rounded" }
                        span { {t("preference_calendar.unavailable")} }
                    }
                    div { class: "flex items-center space-x-2",
                        div { class: "w-4 h-4 bg-blue-100 rounded" }
                        span { {t("calendar.legend_today")} }
                    }
                }

                div { class: "flex justify-end pt-6",
                    button {
                        class: "px-4 py-2 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-md hover:bg-gray-50",
                        onclick: move |_| on_close.call(()),
                        {t("common.close")}
                    }
                }
            }
        }
    }
}
