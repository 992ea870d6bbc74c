use dioxus::prelude::*;

use crate::api;
use crate::components::{Breadcrumbs, Crumb, PreferenceCalendarModal, StatusCalendarModal};
use crate::i18n::t;
use crate::models::{employee_matches, status_color, Department, Employee, Group};
use crate::Route;

/// Employees of one group. Creation and editing live on the department page;
/// here the roster is browsed, statuses tracked and calendars opened.
#[component]
pub fn GroupEmployees(structure_id: i64, department_id: i64, group_id: i64) -> Element {
    let mut structure = use_signal(|| Option::<Department>::None);
    let mut department = use_signal(|| Option::<Department>::None);
    let mut group = use_signal(|| Option::<Group>::None);
    let mut employees = use_signal(Vec::<Employee>::new);
    let mut query = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut confirm_delete = use_signal(|| Option::<Employee>::None);
    let mut status_calendar_for = use_signal(|| Option::<Employee>::None);
    let mut preference_calendar_for = use_signal(|| Option::<Employee>::None);

    let refetch = move || {
        spawn(async move {
            match api::list_group_employees(group_id).await {
                Ok(items) => employees.set(items),
                Err(_) => error.set(Some(t("employees.error_load"))),
            }
        });
    };

    use_effect(use_reactive!(|structure_id, department_id, group_id| {
        spawn(async move {
            if let Ok(s) = api::get_department(structure_id).await {
                structure.set(Some(s));
            }
            if let Ok(d) = api::get_department(department_id).await {
                department.set(Some(d));
            }
            if let Ok(g) = api::get_group(group_id).await {
                group.set(Some(g));
            }
            match api::list_group_employees(group_id).await {
                Ok(items) => employees.set(items),
                Err(_) => error.set(Some(t("employees.error_load"))),
            }
        });
    }));

    let filtered = move || {
        let q = query.read().clone();
        employees
            .read()
            .iter()
            .filter(|e| employee_matches(e, &q))
            .cloned()
            .collect::<Vec<_>>()
    };

    let structure_name = structure.read().as_ref().map(|s| s.name.clone()).unwrap_or_default();
    let department_name = department.read().as_ref().map(|d| d.name.clone()).unwrap_or_default();
    let group_name = group.read().as_ref().map(|g| g.name.clone()).unwrap_or_default();

    rsx! {
        Breadcrumbs {
            items: vec![
                Crumb::link(t("nav.structures"), Route::Structures {}),
                Crumb::link(structure_name, Route::Subdepartments { structure_id }),
                Crumb::link(
                    department_name,
                    Route::DepartmentGroups { structure_id, department_id },
                ),
                Crumb::here(group_name.clone()),
            ],
        }

        div { class: "bg-white rounded-lg shadow p-6 space-y-4",
            div { class: "flex flex-col sm:flex-row gap-2 sm:items-center sm:justify-between",
                div {
                    h1 { class: "text-xl sm:text-2xl font-semibold", {group_name} }
                    p { class: "text-sm text-gray-500",
                        {format!("{}: {}", t("employees.total"), employees.read().len())}
                    }
                }
                input {
                    class: "h-10 w-full sm:w-64 rounded-md border border-gray-300 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
                    placeholder: t("common.search_placeholder"),
                    value: query.read().clone(),
                    oninput: move |e| query.set(e.value()),
                }
            }

            if let Some(err) = error.read().clone() {
                div { class: "text-red-600 text-sm bg-red-50 border border-red-200 rounded-md p-3", {err} }
            }

            {
                let items = filtered();
                if items.is_empty() {
                    rsx! { div { class: "text-sm text-gray-500 py-6 text-center", {t("employees.empty")} } }
                } else {
                    rsx! {
                        ul { class: "divide-y divide-gray-200",
                            for e in items.into_iter() {
                                li { class: "py-3 flex flex-col sm:flex-row sm:items-center justify-between gap-3",
                                    div { class: "min-w-0",
                                        div { class: "flex items-center gap-2",
                                            span { class: "font-medium text-gray-900", {e.full_name()} }
                                            span { class: format!("inline-flex rounded-full px-2 text-xs font-semibold leading-5 text-white {}", status_color(&e.status)),
                                                {e.status.clone()}
                                            }
                                        }
                                        div { class: "text-sm text-gray-500",
                                            {e.position.clone()}
                                            if let Some(rank) = e.rank.clone() {
                                                {format!(" • {rank}")}
                                            }
                                        }
                                    }
                                    div { class: "flex flex-wrap items-center gap-2",
                                        button {
                                            class: "h-8 px-2 rounded-md border border-gray-300 text-xs hover:bg-gray-50",
                                            onclick: {
                                                let e = e.clone();
                                                move |_| status_calendar_for.set(Some(e.clone()))
                                            },
                                            {t("employees.statuses")}
                                        }
                                        button {
                                            class: "h-8 px-2 rounded-md border border-gray-300 text-xs hover:bg-gray-50",
                                            onclick: {
                                                let e = e.clone();
                                                move |_| preference_calendar_for.set(Some(e.clone()))
                                            },
                                            {t("employees.preferences")}
                                        }
                                        button {
                                            class: "h-8 px-2 rounded-md border border-red-300 text-red-700 text-xs hover:bg-red-50",
                                            onclick: {
                                                let e = e.clone();
                                                move |_| confirm_delete.set(Some(e.clone()))
                                            },
                                            {t("common.delete")}
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(target) = confirm_delete.read().clone() {
            div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
                div { class: "w-full max-w-md rounded-lg bg-white shadow-lg p-5 space-y-4",
                    h2 { class: "text-lg font-semibold", {t("common.confirm_delete_title")} }
                    p { class: "text-sm text-gray-600",
                        {format!("{} {}?", t("employees.confirm_delete"), target.full_name())}
                    }
                    div { class: "flex items-center justify-end gap-2",
                        button {
                            class: "h-9 px-3 rounded-md border border-gray-300 text-sm hover:bg-gray-50",
                            onclick: move |_| confirm_delete.set(None),
                            {t("common.cancel")}
                        }
                        button {
                            class: "h-9 px-3 rounded-md bg-red-600 hover:bg-red-500 text-white text-sm",
                            onclick: {
                                let id = target.id;
                                move |_| {
                                    spawn(async move {
                                        match api::delete_employee(id).await {
                                            Ok(()) => refetch(),
                                            Err(e) => error.set(Some(
                                                e.detail_or(&t("employees.error_delete")).to_string(),
                                            )),
                                        }
                                        confirm_delete.set(None);
                                    });
                                }
                            },
                            {t("common.delete")}
                        }
                    }
                }
            }
        }

        if let Some(emp) = status_calendar_for.read().clone() {
            StatusCalendarModal {
                employee: emp,
                on_close: move |_| status_calendar_for.set(None),
                on_update: move |_| refetch(),
            }
        }
        if let Some(emp) = preference_calendar_for.read().clone() {
            PreferenceCalendarModal {
                employee: emp,
                on_close: move |_| preference_calendar_for.set(None),
            }
        }
    }
}
