use chrono::Datelike;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;

use dioxus_free_icons::icons::hi_outline_icons::HiX;

use crate::api;
use crate::dates;
use crate::i18n::t;
use crate::models::{
    status_color, status_label, Employee, StatusSchedule, StatusSchedulePayload, STATUS_LEAVE,
    STATUS_SICK, STATUS_TRIP,
};
use crate::selection::{ApplyMode, ApplyPlan, Selection};

/// Per-employee status calendar. Selected days are applied as ONE schedule
/// record spanning min..=max of the selection; Remove deletes every persisted
/// schedule whose range touches a selected day.
#[component]
pub fn StatusCalendarModal(
    employee: Employee,
    on_close: EventHandler<()>,
    on_update: EventHandler<()>,
) -> Element {
    let employee_id = employee.id;
    let mut cursor = use_signal(|| dates::today().with_day(1).unwrap());
    let mut schedules = use_signal(Vec::<StatusSchedule>::new);
    let mut selection = use_signal(Selection::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut chosen = use_signal(String::new);
    let mut applying = use_signal(|| false);

    // Refetch on open and whenever the month cursor moves; the in-progress
    // selection is discarded with each refetch.
    use_effect(move || {
        let c = cursor();
        spawn(async move {
            loading.set(true);
            error.set(None);
            match api::list_status_schedules(employee_id, c.year(), c.month()).await {
                Ok(items) => {
                    schedules.set(items);
                    selection.write().clear();
                }
                Err(_) => error.set(Some(t("status_calendar.error_load"))),
            }
            loading.set(false);
        });
    });

    let refetch = move || {
        let c = cursor();
        spawn(async move {
            if let Ok(items) = api::list_status_schedules(employee_id, c.year(), c.month()).await {
                schedules.set(items);
                selection.write().clear();
            }
        });
    };

    let apply = move |_| {
        if chosen.read().is_empty() || selection.read().is_empty() || applying() {
            return;
        }
        let status = chosen.read().clone();
        let plan = selection.read().apply_plan(ApplyMode::CollapseToRange);
        spawn(async move {
            applying.set(true);
            error.set(None);
            if let Some(ApplyPlan::Range { start, end }) = plan {
                let payload = StatusSchedulePayload {
                    status,
                    start_date: start,
                    end_date: end,
                    notes: None,
                };
                match api::create_status_schedule(employee_id, &payload).await {
                    Ok(_) => {
                        refetch();
                        chosen.set(String::new());
                        on_update.call(());
                    }
                    Err(e) => {
                        error.set(Some(e.detail_or(&t("status_calendar.error_apply")).to_string()))
                    }
                }
            }
            applying.set(false);
        });
    };

    let remove = move |_| {
        if selection.read().is_empty() || applying() {
            return;
        }
        let ids: Vec<i64> = {
            let recs = schedules.read();
            selection.read().remove_targets(&recs).iter().map(|s| s.id).collect()
        };
        spawn(async move {
            applying.set(true);
            error.set(None);
            for id in ids {
                if let Err(e) = api::delete_status_schedule(id).await {
                    error.set(Some(e.detail_or(&t("status_calendar.error_remove")).to_string()));
                    break;
                }
            }
            refetch();
            on_update.call(());
            applying.set(false);
        });
    };

    let cell_class = move |day: chrono::NaiveDate| -> String {
        if selection.read().contains(day) {
            return "bg-purple-600 text-white hover:bg-purple-700".into();
        }
        let status = schedules
            .read()
            .iter()
            .find(|s| dates::in_span(day, s.start_date, s.end_date))
            .map(|s| s.status.clone());
        if let Some(code) = status {
            return format!("{} text-white hover:opacity-80", status_color(&code));
        }
        if day == dates::today() {
            return "bg-blue-100 text-blue-900 hover:bg-blue-200".into();
        }
        "text-gray-900 hover:bg-gray-100".into()
    };

    let status_button = |code: &'static str, active_cls: &'static str, idle_cls: &'static str| {
        let is_chosen = *chosen.read() == code;
        rsx! {
            button {
                class: if is_chosen { active_cls } else { idle_cls },
                onclick: move |_| chosen.set(code.to_string()),
                {status_label(code).to_string()}
            }
        }
    };

    rsx! {
        div { class: "fixed inset-0 bg-gray-600 bg-opacity-50 overflow-y-auto h-full w-full z-50",
            div { class: "relative top-10 mx-auto p-6 border w-full max-w-4xl shadow-lg rounded-md bg-white",
                div { class: "flex items-center justify-between mb-6",
                    div {
                        h3 { class: "text-lg font-medium text-gray-900", {t("status_calendar.title")} }
                        p { class: "text-sm text-gray-500 mt-1", {employee.full_name()} }
                        p { class: "text-sm text-gray-500",
                            {employee.position.clone()}
                            if let Some(rank) = employee.rank.clone() {
                                {format!(" ({rank})")}
                            }
                        }
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

                div { class: "mt-6",
                    h5 { class: "text-sm font-medium text-gray-900 mb-3", {t("status_calendar.set_status")} }
                    div { class: "flex space-x-3 mb-4",
                        {status_button(
                            STATUS_SICK,
                            "px-4 py-2 text-sm font-medium rounded-md bg-red-600 text-white",
                            "px-4 py-2 text-sm font-medium rounded-md bg-red-100 text-red-700 hover:bg-red-200",
                        )}
                        {status_button(
                            STATUS_TRIP,
                            "px-4 py-2 text-sm font-medium rounded-md bg-blue-600 text-white",
                            "px-4 py-2 text-sm font-medium rounded-md bg-blue-100 text-blue-700 hover:bg-blue-200",
                        )}
                        {status_button(
                            STATUS_LEAVE,
                            "px-4 py-2 text-sm font-medium rounded-md bg-green-600 text-white",
                            "px-4 py-2 text-sm font-medium rounded-md bg-green-100 text-green-700 hover:bg-green-200",
                        )}
                    }
                    div { class: "flex space-x-3",
                        button {
                            class: "px-4 py-2 text-sm font-medium text-white bg-indigo-600 rounded-md hover:bg-indigo-700 disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: chosen.read().is_empty() || selection.read().is_empty() || applying(),
                            onclick: apply,
                            {if applying() { t("common.applying") } else { t("status_calendar.apply") }}
                        }
                        button {
                            class: "px-4 py-2 text-sm font-medium text-white bg-red-600 rounded-md hover:bg-red-700 disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: selection.read().is_empty() || applying(),
                            onclick: remove,
                            {if applying() { t("common.removing") } else { t("status_calendar.remove") }}
                        }
                    }
                }

                div { class: "mt-6 flex items-center justify-center space-x-6 text-sm",
                    div { class: "flex items-center space-x-2",
                        div { class: "w-4 h-4 bg-purple-600 rounded" }
                        span { {t("calendar.legend_selected")} }
                    }
                    for code in [STATUS_SICK, STATUS_TRIP, STATUS_LEAVE] {
                        div { class: "flex items-center space-x-2",
                            div { class: format!("w-4 h-4 {} rounded", status_color(code)) }
                            span { {status_label(code).to_string()} }
                        }
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
