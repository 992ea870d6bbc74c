use dioxus::prelude::*;

use crate::api;
use crate::components::{Breadcrumbs, Crumb, DutyDayCalendarModal};
use crate::i18n::t;
use crate::models::{
    name_matches, Department, DepartmentStats, DutyType, DutyTypePayload, CATEGORY_ACADEMIC,
};
use crate::Route;

/// Academic duty, level 1: pick a structure.
#[component]
pub fn AcademicDutyStructures() -> Element {
    let mut list = use_signal(Vec::<Department>::new);
    let mut query = use_signal(String::new);
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
        Breadcrumbs { items: vec![Crumb::here(t("nav.duties"))] }

        div { class: "bg-white rounded-lg shadow p-6 space-y-4",
            div { class: "flex flex-col sm:flex-row gap-2 sm:items-center sm:justify-between",
                div {
                    h1 { class: "text-xl sm:text-2xl font-semibold", {t("academic.title")} }
                    p { class: "text-sm text-gray-500", {t("academic.pick_structure")} }
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

            ul { class: "divide-y divide-gray-200",
                for d in list
                    .read()
                    .iter()
                    .filter(|d| name_matches(&d.name, &query.read()))
                    .cloned()
                {
                    li {
                        Link {
                            to: Route::AcademicDutySubdepartments { structure_id: d.id },
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

/// Academic duty, level 2: pick a subdepartment of the structure.
#[component]
pub fn AcademicDutySubdepartments(structure_id: i64) -> Element {
    let mut structure = use_signal(|| Option::<Department>::None);
    let mut list = use_signal(Vec::<DepartmentStats>::new);
    let mut error = use_signal(|| Option::<String>::None);

    use_effect(use_reactive!(|structure_id| {
        spawn(async move {
            if let Ok(s) = api::get_department(structure_id).await {
                structure.set(Some(s));
            }
            match api::list_subdepartments_with_stats(structure_id).await {
                Ok(items) => list.set(items),
                Err(_) => error.set(Some(t("subdepartments.error_load"))),
            }
        });
    }));

    let structure_name = structure.read().as_ref().map(|s| s.name.clone()).unwrap_or_default();

    rsx! {
        Breadcrumbs {
            items: vec![
                Crumb::link(t("nav.duties"), Route::AcademicDutyStructures {}),
                Crumb::here(structure_name.clone()),
            ],
        }

        div { class: "bg-white rounded-lg shadow p-6 space-y-4",
            div {
                h1 { class: "text-xl sm:text-2xl font-semibold", {structure_name} }
                p { class: "text-sm text-gray-500", {t("academic.pick_subdepartment")} }
            }

            if let Some(err) = error.read().clone() {
                div { class: "text-red-600 text-sm bg-red-50 border border-red-200 rounded-md p-3", {err} }
            }

            ul { class: "divide-y divide-gray-200",
                for d in list.read().iter().cloned() {
                    li {
                        Link {
                            to: Route::AcademicDutyTypes { structure_id, department_id: d.id },
                            class: "block py-3 px-3 -mx-3 hover:bg-gray-50 rounded-md",
                            div { class: "font-medium text-gray-900", {d.name.clone()} }
                            div { class: "text-sm text-gray-500",
                                {format!("{}: {}", t("subdepartments.employees"), d.employee_count)}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(PartialEq, Clone)]
struct AcademicTypeForm {
    name: String,
    people_per_day: String,
    priority: String,
}

impl Default for AcademicTypeForm {
    fn default() -> Self {
        Self { name: String::new(), people_per_day: "1".into(), priority: "1".into() }
    }
}

/// Academic duty, level 3: the department's academic duty types and their
/// duty-day calendars.
#[component]
pub fn AcademicDutyTypes(structure_id: i64, department_id: i64) -> Element {
    let mut structure = use_signal(|| Option::<Department>::None);
    let mut department = use_signal(|| Option::<Department>::None);
    let mut list = use_signal(Vec::<DutyType>::new);
    let mut unique_types = use_signal(Vec::<DutyType>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut modal_open = use_signal(|| false);
    let mut form = use_signal(AcademicTypeForm::default);
    let mut calendar_for = use_signal(|| Option::<DutyType>::None);
    let mut confirm_detach = use_signal(|| Option::<DutyType>::None);

    let refetch = move || {
        spawn(async move {
            match api::list_department_duty_types(department_id).await {
                Ok(items) => list.set(items),
                Err(_) => error.set(Some(t("duty_types.error_load"))),
            }
        });
    };

    use_effect(use_reactive!(|structure_id, department_id| {
        spawn(async move {
            if let Ok(s) = api::get_department(structure_id).await {
                structure.set(Some(s));
            }
            if let Ok(d) = api::get_department(department_id).await {
                department.set(Some(d));
            }
            // Name suggestions only; an empty list is fine.
            if let Ok(u) = api::list_unique_duty_types().await {
                unique_types.set(u);
            }
            match api::list_department_duty_types(department_id).await {
                Ok(items) => list.set(items),
                Err(_) => error.set(Some(t("duty_types.error_load"))),
            }
        });
    }));

    let on_submit = move |_| {
        error.set(None);
        let f = form.read().clone();
        if f.name.trim().is_empty() {
            error.set(Some(t("duty_types.error_required")));
            return;
        }
        let people_per_day = match f.people_per_day.trim().parse::<i64>() {
            Ok(n) if (1..=10).contains(&n) => n,
            _ => {
                error.set(Some(t("duty_types.error_people")));
                return;
            }
        };
        let priority = f.priority.trim().parse::<i64>().unwrap_or(1);
        let payload = DutyTypePayload {
            name: f.name.trim().to_string(),
            description: None,
            priority,
            people_per_day,
            duty_category: CATEGORY_ACADEMIC.into(),
        };
        spawn(async move {
            match api::create_department_duty_type(department_id, &payload).await {
                Ok(_) => {
                    refetch();
                    modal_open.set(false);
                }
                Err(e) => error.set(Some(e.detail_or(&t("duty_types.error_save")).to_string())),
            }
        });
    };

    let structure_name = structure.read().as_ref().map(|s| s.name.clone()).unwrap_or_default();
    let department_name = department.read().as_ref().map(|d| d.name.clone()).unwrap_or_default();

    rsx! {
        Breadcrumbs {
            items: vec![
                Crumb::link(t("nav.duties"), Route::AcademicDutyStructures {}),
                Crumb::link(structure_name, Route::AcademicDutySubdepartments { structure_id }),
                Crumb::here(department_name.clone()),
            ],
        }

        div { class: "bg-white rounded-lg shadow p-6 space-y-4",
            div { class: "flex flex-col sm:flex-row gap-2 sm:items-center sm:justify-between",
                div {
                    h1 { class: "text-xl sm:text-2xl font-semibold",
                        {format!("{} — {}", t("academic.duty_types"), department_name)}
                    }
                    p { class: "text-sm text-gray-500", {t("academic.hint")} }
                }
                button {
                    class: "h-10 px-4 rounded-md bg-indigo-600 hover:bg-indigo-500 text-white text-sm font-medium",
                    onclick: move |_| {
                        error.set(None);
                        form.set(AcademicTypeForm::default());
                        modal_open.set(true);
                    },
                    {t("academic.new_type")}
                }
            }

            if let Some(err) = error.read().clone() {
                div { class: "text-red-600 text-sm bg-red-50 border border-red-200 rounded-md p-3", {err} }
            }

            {
                let items = list.read().clone();
                if items.is_empty() {
                    rsx! { div { class: "text-sm text-gray-500 py-6 text-center", {t("academic.empty")} } }
                } else {
                    rsx! {
                        ul { class: "divide-y divide-gray-200",
                            for d in items.into_iter() {
                                li { class: "py-3 flex items-center justify-between gap-3",
                                    div { class: "min-w-0",
                                        div { class: "font-medium text-gray-900", {d.name.clone()} }
                                        div { class: "text-sm text-gray-500",
                                            {format!(
                                                "{}: {} • {}: {}",
                                                t("duty_types.priority"),
                                                d.priority,
                                                t("duty_types.people_per_day"),
                                                d.people_per_day,
                                            )}
                                        }
                                    }
                                    div { class: "flex items-center gap-2",
                                        button {
                                            class: "h-8 px-3 rounded-md bg-indigo-600 hover:bg-indigo-500 text-white text-sm",
                                            onclick: {
                                                let d = d.clone();
                                                move |_| calendar_for.set(Some(d.clone()))
                                            },
                                            {t("academic.calendar")}
                                        }
                                        button {
                                            class: "h-8 px-3 rounded-md border border-red-300 text-red-700 text-sm hover:bg-red-50",
                                            onclick: {
                                                let d = d.clone();
                                                move |_| confirm_detach.set(Some(d.clone()))
                                            },
                                            {t("academic.detach")}
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if modal_open() {
            div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
                div { class: "w-full max-w-md rounded-lg bg-white shadow-lg p-5 space-y-4",
                    h2 { class: "text-lg font-semibold", {t("academic.new_type_title")} }
                    if let Some(err) = error.read().clone() {
                        p { class: "text-red-600 text-sm", {err} }
                    }
                    div { class: "space-y-3",
                        div {
                            label { class: "text-xs text-gray-600", {t("duty_types.name")} }
                            input {
                                class: "h-10 w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                                list: "unique-duty-types",
                                placeholder: t("duty_types.name"),
                                value: form.read().name.clone(),
                                oninput: move |e| form.write().name = e.value(),
                            }
                            datalist { id: "unique-duty-types",
                                for u in unique_types.read().iter() {
                                    option { value: u.name.clone() }
                                }
                            }
                        }
                        div { class: "grid grid-cols-2 gap-3",
                            div {
                                label { class: "text-xs text-gray-600", {t("duty_types.people_per_day")} }
                                input {
                                    class: "h-10 w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                                    r#type: "number",
                                    min: 1,
                                    max: 10,
                                    value: form.read().people_per_day.clone(),
                                    oninput: move |e| form.write().people_per_day = e.value(),
                                }
                            }
                            div {
                                label { class: "text-xs text-gray-600", {t("duty_types.priority")} }
                                input {
                                    class: "h-10 w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                                    r#type: "number",
                                    value: form.read().priority.clone(),
                                    oninput: move |e| form.write().priority = e.value(),
                                }
                            }
                        }
                    }
                    div { class: "flex items-center justify-end gap-2",
                        button {
                            class: "h-9 px-3 rounded-md border border-gray-300 text-sm hover:bg-gray-50",
                            onclick: move |_| modal_open.set(false),
                            {t("common.cancel")}
                        }
                        button {
                            class: "h-9 px-3 rounded-md bg-indigo-600 hover:bg-indigo-500 text-white text-sm",
                            onclick: on_submit,
                            {t("common.create")}
                        }
                    }
                }
            }
        }

        if let Some(target) = confirm_detach.read().clone() {
            div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
                div { class: "w-full max-w-md rounded-lg bg-white shadow-lg p-5 space-y-4",
                    h2 { class: "text-lg font-semibold", {t("common.confirm_delete_title")} }
                    p { class: "text-sm text-gray-600",
                        {format!("{} «{}»?", t("academic.confirm_detach"), target.name)}
                    }
                    div { class: "flex items-center justify-end gap-2",
                        button {
                            class: "h-9 px-3 rounded-md border border-gray-300 text-sm hover:bg-gray-50",
                            onclick: move |_| confirm_detach.set(None),
                            {t("common.cancel")}
                        }
                        button {
                            class: "h-9 px-3 rounded-md bg-red-600 hover:bg-red-500 text-white text-sm",
                            onclick: {
                                let id = target.id;
                                move |_| {
                                    spawn(async move {
                                        match api::detach_duty_type(id, department_id).await {
                                            Ok(()) => refetch(),
                                            Err(e) => error.set(Some(
                                                e.detail_or(&t("duty_types.error_delete")).to_string(),
                                            )),
                                        }
                                        confirm_detach.set(None);
                                    });
                                }
                            },
                            {t("academic.detach")}
                        }
                    }
                }
            }
        }

        if let Some(dt) = calendar_for.read().clone() {
            DutyDayCalendarModal {
                duty_type: dt,
                department_id,
                on_close: move |_| calendar_for.set(None),
                on_update: move |_| {},
            }
        }
    }
}
