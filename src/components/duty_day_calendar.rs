use chrono::Datelike;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;

use dioxus_free_icons::icons::hi_outline_icons::HiX;

use crate::api;
use crate::dates;
use crate::i18n::t;
use crate::models::{DepartmentDutyDay, DutyDayPayload, DutyType};

/// Academic duty-day calendar for one department + duty type. Days are
/// department-scoped, with no per-employee assignee; clicking a day persists
/// the toggle immediately.
#[component]
pub fn DutyDayCalendarModal(
    duty_type: DutyType,
    department_id: i64,
    on_close: EventHandler<()>,
    on_update: EventHandler<()>,
) -> Element {
    let duty_type_id = duty_type.id;
    let mut cursor = use_signal(|| dates::today().with_day(1).unwrap());
    let mut duty_days = use_signal(Vec::<DepartmentDutyDay>::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    use_effect(move || {
        let c = cursor();
        spawn(async move {
            loading.set(true);
            error.set(None);
            match api::list_department_duty_days(c.year(), c.month(), duty_type_id, department_id)
                .await
            {
                Ok(items) => duty_days.set(items),
                Err(_) => error.set(Some(t("duty_calendar.error_load"))),
            }
            loading.set(false);
        });
    });

    let refetch = move || {
        let c = cursor();
        spawn(async move {
            if let Ok(items) =
                api::list_department_duty_days(c.year(), c.month(), duty_type_id, department_id)
                    .await
            {
                duty_days.set(items);
            }
        });
    };

    let on_day = move |day: chrono::NaiveDate| {
        if saving() {
            return;
        }
        let existing = duty_days.read().iter().find(|d| d.duty_date == day).map(|d| d.id);
        spawn(async move {
            saving.set(true);
            error.set(None);
            let result = match existing {
                Some(id) => api::delete_department_duty_day(id).await,
                None => {
                    let payload = DutyDayPayload { department_id, duty_type_id, duty_date: day };
                    api::create_department_duty_day(&payload).await.map(|_| ())
                }
            };
            match result {
                Ok(()) => {
                    refetch();
                    on_update.call(());
                }
                Err(e) => error.set(Some(e.detail_or(&t("duty_calendar.error_save")).to_string())),
            }
            saving.set(false);
        });
    };

    let cell_class = move |day: chrono::NaiveDate| -> String {
        if duty_days.read().iter().any(|d| d.duty_date == day) {
            return "bg-indigo-600 text-white hover:bg-indigo-700".into();
        }
        if day == dates::today() {
            return "bg-blue-100 text-blue-900 hover:bg-blue-200".into();
        }
        "text-gray-900 hover:bg-gray-100".into()
    };

    rsx! {
        div { class: "fixed inset-0 bg-gray-600 bg-opacity-50 overflow-y-auto h-full w-full z-50",
            div { class: "relative top-10 mx-auto p-6 border w-full max-w-4xl shadow-lg rounded-md bg-white",
                div { class: "flex items-center justify-between mb-6",
                    div {
                        h3 { class: "text-lg font-medium text-gray-900", {t("duty_calendar.title")} }
                        p { class: "text-sm text-gray-500 mt-1", {duty_type.name.clone()} }
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
                    on_day,
                    cell_class,
                }

                div { class: "mt-6 flex items-center justify-center space-x-6 text-sm",
                    div { class: "flex items-center space-x-2",
                        div { class: "w-4 h-4 bg-indigo-600 rounded" }
                        span { {t("duty_calendar.legend_duty")} }
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
