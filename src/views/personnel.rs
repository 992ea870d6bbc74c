use std::collections::BTreeMap;

use dioxus::prelude::*;

use crate::api;
use crate::components::{Breadcrumbs, Crumb};
use crate::i18n::t;
use crate::models::{
    employee_matches, status_color, status_label, Department, Employee, STATUS_CODES,
};
use crate::Route;

/// Personnel accounting, level 1: pick a structure.
#[component]
pub fn PersonnelStructures() -> Element {
    let mut list = use_signal(Vec::<Department>::new);
    let mut error = use_signal(|| Option::<String>::None);

    use_effect(move || {
        spawn(async move {
            match api::list_departments().await {
                Ok(items) => {
                    list.set(items.into_iter().filter(|d| d.parent_id.is_none()).collect())
                }
                Err(_) => error.set(Some(t("structures.error_load"))),
            }
        });
    });

    rsx! {
        Breadcrumbs { items: vec![Crumb::here(t("nav.personnel"))] }

        div { class: "bg-white rounded-lg shadow p-6 space-y-4",
            div {
                h1 { class: "text-xl sm:text-2xl font-semibold", {t("personnel.title")} }
                p { class: "text-sm text-gray-500", {t("academic.pick_structure")} }
            }

            if let Some(err) = error.read().clone() {
                div { class: "text-red-600 text-sm bg-red-50 border border-red-200 rounded-md p-3", {err} }
            }

            ul { class: "divide-y divide-gray-200",
                for d in list.read().iter().cloned() {
                    li {
                        Link {
                            to: Route::PersonnelStructure { structure_id: d.id },
                            class: "block py-3 px-3 -mx-3 hover:bg-gray-50 rounded-md",
                            div { class: "font-medium text-gray-900", {d.name.clone()} }
                            if let Some(desc) = d.description.clone() {
                                div { class: "text-sm text-gray-500", {desc} }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn status_counts(employees: &[Employee]) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for code in STATUS_CODES {
        counts.insert((*code).to_string(), 0);
    }
    for e in employees {
        *counts.entry(e.status.clone()).or_insert(0) += 1;
    }
    counts
}

/// Personnel accounting, level 2: status summary of one structure with quick
/// per-employee status changes.
#[component]
pub fn PersonnelStructure(structure_id: i64) -> Element {
    let mut structure = use_signal(|| Option::<Department>::None);
    let mut employees = use_signal(Vec::<Employee>::new);
    let mut query = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let refetch = move || {
        spawn(async move {
            match api::list_structure_employees_with_status(structure_id).await {
                Ok(items) => employees.set(items),
                Err(_) => error.set(Some(t("employees.error_load"))),
            }
        });
    };

    use_effect(use_reactive!(|structure_id| {
        spawn(async move {
            if let Ok(s) = api::get_department(structure_id).await {
                structure.set(Some(s));
            }
            match api::list_structure_employees_with_status(structure_id).await {
                Ok(items) => employees.set(items),
                Err(_) => error.set(Some(t("employees.error_load"))),
            }
        });
    }));

    let structure_name = structure.read().as_ref().map(|s| s.name.clone()).unwrap_or_default();
    let counts = status_counts(&employees.read());

    rsx! {
        Breadcrumbs {
            items: vec![
                Crumb::link(t("nav.personnel"), Route::PersonnelStructures {}),
                Crumb::here(structure_name.clone()),
            ],
        }

        div { class: "space-y-4",
            div { class: "bg-white rounded-lg shadow p-6",
                h1 { class: "text-xl sm:text-2xl font-semibold", {structure_name} }
                p { class: "text-sm text-gray-500 mt-1",
                    {format!("{}: {}", t("employees.total"), employees.read().len())}
                }
                div { class: "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-6 gap-3 mt-4",
                    for code in STATUS_CODES {
                        Link {
                            to: Route::PersonnelByStatus {
                                structure_id,
                                status: (*code).to_string(),
                            },
                            class: "rounded-lg border border-gray-200 p-3 hover:shadow",
                            div { class: "flex items-center gap-2",
                                span { class: format!("w-3 h-3 rounded-full {}", status_color(code)) }
                                span { class: "text-sm font-medium text-gray-700", {*code} }
                            }
                            div { class: "text-2xl font-bold text-gray-900 mt-1",
                                {counts.get(*code).copied().unwrap_or(0).to_string()}
                            }
                            div { class: "text-xs text-gray-500", {status_label(code).to_string()} }
                        }
                    }
                }
            }

            div { class: "bg-white rounded-lg shadow p-6 space-y-4",
                div { class: "flex flex-col sm:flex-row gap-2 sm:items-center sm:justify-between",
                    h2 { class: "text-lg font-semibold", {t("personnel.employees")} }
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

                ul { class: "divide-y divide-gray-200",
                    for e in employees
                        .read()
                        .iter()
                        .filter(|e| employee_matches(e, &query.read()))
                        .cloned()
                    {
                        li { class: "py-3 flex items-center justify-between gap-3",
                            div { class: "min-w-0",
                                div { class: "font-medium text-gray-900", {e.full_name()} }
                                div { class: "text-sm text-gray-500", {e.position.clone()} }
                            }
                            div { class: "flex items-center gap-2",
                                span { class: format!("inline-flex rounded-full px-2 text-xs font-semibold leading-5 text-white {}", status_color(&e.status)),
                                    {e.status.clone()}
                                }
                                select {
                                    class: "h-8 rounded-md border border-gray-300 px-1 text-xs",
                                    value: e.status.clone(),
                                    onchange: {
                                        let id = e.id;
                                        move |ev: Event<FormData>| {
                                            let status = ev.value();
                                            spawn(async move {
                                                match api::set_employee_status(id, &status).await {
                                                    Ok(()) => refetch(),
                                                    Err(err) => error.set(Some(
                                                        err.detail_or(&t("employees.error_status")).to_string(),
                                                    )),
                                                }
                                            });
                                        }
                                    },
                                    for code in STATUS_CODES {
                                        option { value: *code, selected: e.status == *code, {*code} }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Personnel accounting, level 3: employees of a structure in one status.
/// The status code rides in the route path.
#[component]
pub fn PersonnelByStatus(structure_id: i64, status: String) -> Element {
    let mut structure = use_signal(|| Option::<Department>::None);
    let mut employees = use_signal(Vec::<Employee>::new);
    let mut error = use_signal(|| Option::<String>::None);

    use_effect(use_reactive!(|structure_id| {
        spawn(async move {
            if let Ok(s) = api::get_department(structure_id).await {
                structure.set(Some(s));
            }
            match api::list_structure_employees_with_status(structure_id).await {
                Ok(items) => employees.set(items),
                Err(_) => error.set(Some(t("employees.error_load"))),
            }
        });
    }));

    let structure_name = structure.read().as_ref().map(|s| s.name.clone()).unwrap_or_default();
    let matching: Vec<Employee> = employees
        .read()
        .iter()
        .filter(|e| e.status == status)
        .cloned()
        .collect();

    rsx! {
        Breadcrumbs {
            items: vec![
                Crumb::link(t("nav.personnel"), Route::PersonnelStructures {}),
                Crumb::link(structure_name, Route::PersonnelStructure { structure_id }),
                Crumb::here(format!("{} — {}", status.clone(), status_label(&status))),
            ],
        }

        div { class: "bg-white rounded-lg shadow p-6 space-y-4",
            div { class: "flex items-center gap-3",
                span { class: format!("w-4 h-4 rounded-full {}", status_color(&status)) }
                h1 { class: "text-xl sm:text-2xl font-semibold",
                    {format!("{} ({})", status_label(&status), matching.len())}
                }
            }

            if let Some(err) = error.read().clone() {
                div { class: "text-red-600 text-sm bg-red-50 border border-red-200 rounded-md p-3", {err} }
            }

            if matching.is_empty() {
                div { class: "text-sm text-gray-500 py-6 text-center", {t("personnel.none_in_status")} }
            } else {
                ul { class: "divide-y divide-gray-200",
                    for e in matching.into_iter() {
                        li { class: "py-3",
                            div { class: "font-medium text-gray-900", {e.full_name()} }
                            div { class: "text-sm text-gray-500", {e.position.clone()} }
                        }
                    }
                }
            }
        }
    }
}
