use std::collections::{BTreeMap, BTreeSet};

use chrono::Datelike;
use dioxus::prelude::*;

use crate::api;
use crate::components::{Breadcrumbs, Crumb};
use crate::dates;
use crate::i18n::{format_day_month, t};
use crate::models::{DutyRecord, DutyType};

#[cfg(target_arch = "wasm32")]
fn save_file(bytes: &[u8], filename: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());
    let props = web_sys::BlobPropertyBag::new();
    props.set_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &props)
        .map_err(|_| "blob")?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|_| "object url")?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "create element")?
        .dyn_into()
        .map_err(|_| "anchor cast")?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    let body = document.body().ok_or("no body")?;
    body.append_child(&anchor).map_err(|_| "append")?;
    anchor.click();
    let _ = body.remove_child(&anchor);
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn save_file(bytes: &[u8], filename: &str) -> Result<(), String> {
    let path = dirs_next::download_dir()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
        .join(filename);
    std::fs::write(&path, bytes).map_err(|e| e.to_string())
}

/// Group the month's assignments per department for the overview list.
fn group_by_department(duties: &[DutyRecord]) -> Vec<(i64, String, usize)> {
    let mut map: BTreeMap<i64, (String, usize)> = BTreeMap::new();
    for duty in duties {
        let entry = map
            .entry(duty.department_id)
            .or_insert_with(|| (duty.department_name.clone(), 0));
        entry.1 += 1;
    }
    map.into_iter().map(|(id, (name, count))| (id, name, count)).collect()
}

/// Month-scoped duty distribution: generate, inspect, clear and export.
/// The allocation itself runs in the backend; this page only drives it.
#[component]
pub fn DutyDistribution() -> Element {
    let today = dates::today();
    let mut year = use_signal(|| today.year());
    let mut month = use_signal(|| today.month());
    let mut all_duties = use_signal(Vec::<DutyRecord>::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut active_tab = use_signal(|| "departments".to_string());
    let mut duty_types = use_signal(Vec::<DutyType>::new);
    let mut selected_duty_type = use_signal(|| Option::<DutyType>::None);
    let mut duty_type_records = use_signal(Vec::<DutyRecord>::new);
    let mut selected_department = use_signal(|| Option::<(i64, String)>::None);
    let mut department_duties = use_signal(Vec::<DutyRecord>::new);
    let mut confirm_clear = use_signal(|| false);

    // All assignments for the picked month, refetched when year/month move.
    use_effect(move || {
        let (y, m) = (year(), month());
        spawn(async move {
            loading.set(true);
            error.set(None);
            match api::list_distribution(y, m).await {
                Ok(items) => all_duties.set(items),
                Err(_) => {
                    error.set(Some(t("distribution.error_load")));
                    all_duties.set(Vec::new());
                }
            }
            loading.set(false);
        });
    });

    let refetch = move || {
        let (y, m) = (year(), month());
        spawn(async move {
            if let Ok(items) = api::list_distribution(y, m).await {
                all_duties.set(items);
            }
        });
    };

    // Duty-type list is only needed once the tab is opened.
    use_effect(move || {
        if *active_tab.read() == "duty-types" && duty_types.read().is_empty() {
            spawn(async move {
                if let Ok(types) = api::list_duty_types().await {
                    duty_types.set(types);
                }
            });
        }
    });

    let generate = move |_| {
        if loading() {
            return;
        }
        let (y, m) = (year(), month());
        spawn(async move {
            loading.set(true);
            error.set(None);
            selected_department.set(None);
            match api::generate_distribution(y, m).await {
                Ok(_) => refetch(),
                Err(e) => error.set(Some(e.detail_or(&t("distribution.error_generate")).to_string())),
            }
            loading.set(false);
        });
    };

    let clear = move |_| {
        let (y, m) = (year(), month());
        spawn(async move {
            loading.set(true);
            error.set(None);
            match api::clear_distribution(y, m).await {
                Ok(()) => {
                    all_duties.set(Vec::new());
                    selected_department.set(None);
                }
                Err(e) => error.set(Some(e.detail_or(&t("distribution.error_clear")).to_string())),
            }
            confirm_clear.set(false);
            loading.set(false);
        });
    };

    let export = move |_| {
        let (y, m) = (year(), month());
        let dept = selected_department.read().as_ref().map(|(id, _)| *id);
        spawn(async move {
            error.set(None);
            let result = match dept {
                Some(id) => api::export_department_distribution(id, y, m).await,
                None => api::export_distribution(y, m).await,
            };
            match result {
                Ok(bytes) => {
                    if save_file(&bytes, &api::export_filename(dept, y, m)).is_err() {
                        error.set(Some(t("distribution.error_export")));
                    }
                }
                Err(_) => error.set(Some(t("distribution.error_export"))),
            }
        });
    };

    let mut open_department = move |id: i64, name: String| {
        selected_department.set(Some((id, name)));
        department_duties.set(Vec::new());
        spawn(async move {
            match api::list_department_distribution(id).await {
                Ok(items) => department_duties.set(items),
                Err(_) => error.set(Some(t("distribution.error_department"))),
            }
        });
    };

    let mut open_duty_type = move |dt: DutyType| {
        let id = dt.id;
        selected_duty_type.set(Some(dt));
        duty_type_records.set(Vec::new());
        spawn(async move {
            if let Ok(items) = api::list_duty_type_distribution(id).await {
                duty_type_records.set(items);
            }
        });
    };

    let grouped = group_by_department(&all_duties.read());

    rsx! {
        Breadcrumbs { items: vec![Crumb::here(t("nav.distribution"))] }

        div { class: "bg-white rounded-lg shadow p-6 space-y-4",
            div { class: "flex flex-col lg:flex-row gap-3 lg:items-center lg:justify-between",
                h1 { class: "text-xl sm:text-2xl font-semibold", {t("distribution.title")} }
                div { class: "flex flex-wrap items-center gap-2",
                    select {
                        class: "h-10 rounded-md border border-gray-300 px-2 text-sm",
                        value: year().to_string(),
                        onchange: move |e| {
                            if let Ok(y) = e.value().parse::<i32>() {
                                year.set(y);
                            }
                        },
                        for y in (today.year() - 1)..=(today.year() + 1) {
                            option { value: y.to_string(), {y.to_string()} }
                        }
                    }
                    select {
                        class: "h-10 rounded-md border border-gray-300 px-2 text-sm",
                        value: month().to_string(),
                        onchange: move |e| {
                            if let Ok(m) = e.value().parse::<u32>() {
                                month.set(m);
                            }
                        },
                        for m in 1u32..=12 {
                            option { value: m.to_string(), {t(&format!("months.long.{m}"))} }
                        }
                    }
                    button {
                        class: "h-10 px-4 rounded-md bg-indigo-600 hover:bg-indigo-500 text-white text-sm font-medium disabled:opacity-50",
                        disabled: loading(),
                        onclick: generate,
                        {if loading() { t("distribution.generating") } else { t("distribution.generate") }}
                    }
                    button {
                        class: "h-10 px-4 rounded-md bg-emerald-600 hover:bg-emerald-500 text-white text-sm font-medium",
                        onclick: export,
                        {t("distribution.export")}
                    }
                    button {
                        class: "h-10 px-4 rounded-md bg-red-600 hover:bg-red-500 text-white text-sm font-medium disabled:opacity-50",
                        disabled: loading() || all_duties.read().is_empty(),
                        onclick: move |_| confirm_clear.set(true),
                        {t("distribution.clear")}
                    }
                }
            }

            if let Some(err) = error.read().clone() {
                div { class: "text-red-600 text-sm bg-red-50 border border-red-200 rounded-md p-3", {err} }
            }

            div { class: "border-b border-gray-200",
                nav { class: "-mb-px flex space-x-6",
                    button {
                        class: if *active_tab.read() == "departments" {
                            "py-2 px-1 border-b-2 border-indigo-500 text-sm font-medium text-indigo-600"
                        } else {
                            "py-2 px-1 border-b-2 border-transparent text-sm font-medium text-gray-500 hover:text-gray-700"
                        },
                        onclick: move |_| active_tab.set("departments".into()),
                        {t("distribution.tab_departments")}
                    }
                    button {
                        class: if *active_tab.read() == "duty-types" {
                            "py-2 px-1 border-b-2 border-indigo-500 text-sm font-medium text-indigo-600"
                        } else {
                            "py-2 px-1 border-b-2 border-transparent text-sm font-medium text-gray-500 hover:text-gray-700"
                        },
                        onclick: move |_| active_tab.set("duty-types".into()),
                        {t("distribution.tab_duty_types")}
                    }
                }
            }

            if loading() {
                div { class: "flex justify-center items-center h-40",
                    div { class: "animate-spin rounded-full h-8 w-8 border-b-2 border-indigo-600" }
                }
            } else if *active_tab.read() == "departments" {
                if grouped.is_empty() {
                    div { class: "text-sm text-gray-500 py-6 text-center", {t("distribution.empty")} }
                } else {
                    ul { class: "divide-y divide-gray-200",
                        for (id , name , count) in grouped.into_iter() {
                            li {
                                button {
                                    class: "w-full text-left py-3 px-3 -mx-3 hover:bg-gray-50 rounded-md",
                                    onclick: {
                                        let name = name.clone();
                                        move |_| open_department(id, name.clone())
                                    },
                                    div { class: "font-medium text-gray-900", {name.clone()} }
                                    div { class: "text-sm text-gray-500",
                                        {format!("{}: {}", t("distribution.duty_count"), count)}
                                    }
                                }
                            }
                        }
                    }
                }
            } else {
                div { class: "grid grid-cols-1 lg:grid-cols-3 gap-4",
                    ul { class: "divide-y divide-gray-200 lg:col-span-1",
                        for dt in duty_types.read().iter().cloned() {
                            li {
                                button {
                                    class: if selected_duty_type.read().as_ref().map(|s| s.id) == Some(dt.id) {
                                        "w-full text-left py-2 px-3 rounded-md bg-indigo-50 text-indigo-700"
                                    } else {
                                        "w-full text-left py-2 px-3 rounded-md hover:bg-gray-50"
                                    },
                                    onclick: {
                                        let dt = dt.clone();
                                        move |_| open_duty_type(dt.clone())
                                    },
                                    {dt.name.clone()}
                                }
                            }
                        }
                    }
                    div { class: "lg:col-span-2",
                        if selected_duty_type.read().is_none() {
                            div { class: "text-sm text-gray-500 py-6 text-center", {t("distribution.pick_duty_type")} }
                        } else if duty_type_records.read().is_empty() {
                            div { class: "text-sm text-gray-500 py-6 text-center", {t("distribution.no_records")} }
                        } else {
                            div { class: "overflow-x-auto",
                                table { class: "min-w-full divide-y divide-gray-200",
                                    thead { class: "bg-gray-50",
                                        tr {
                                            th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", {t("distribution.date")} }
                                            th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", {t("distribution.employee")} }
                                            th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", {t("distribution.department")} }
                                        }
                                    }
                                    tbody { class: "bg-white divide-y divide-gray-200",
                                        {
                                            let mut sorted = duty_type_records.read().clone();
                                            sorted.sort_by_key(|r| r.date);
                                            rsx! {
                                                for r in sorted.into_iter() {
                                                    tr {
                                                        td { class: "px-4 py-2 whitespace-nowrap text-sm text-gray-900", {format_day_month(r.date)} }
                                                        td { class: "px-4 py-2 whitespace-nowrap text-sm text-gray-900", {r.employee_name.clone()} }
                                                        td { class: "px-4 py-2 whitespace-nowrap text-sm text-gray-500", {r.department_name.clone()} }
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
            }
        }

        // Per-department duty matrix: employees × dates.
        if let Some((_, dept_name)) = selected_department.read().clone() {
            div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
                div { class: "w-full max-w-5xl rounded-lg bg-white shadow-lg p-5 space-y-4 max-h-[90vh] overflow-hidden flex flex-col",
                    div { class: "flex items-center justify-between",
                        h2 { class: "text-lg font-semibold", {dept_name} }
                        div { class: "flex items-center gap-2",
                            button {
                                class: "h-9 px-3 rounded-md bg-emerald-600 hover:bg-emerald-500 text-white text-sm",
                                onclick: export,
                                {t("distribution.export")}
                            }
                            button {
                                class: "h-9 px-3 rounded-md border border-gray-300 text-sm hover:bg-gray-50",
                                onclick: move |_| selected_department.set(None),
                                {t("common.close")}
                            }
                        }
                    }
                    {
                        let duties = department_duties.read().clone();
                        if duties.is_empty() {
                            rsx! { div { class: "p-6 text-gray-400 text-center", {t("distribution.no_records")} } }
                        } else {
                            let duty_dates: BTreeSet<_> = duties.iter().map(|d| d.date).collect();
                            let employees: BTreeSet<_> =
                                duties.iter().map(|d| d.employee_name.clone()).collect();
                            let mut matrix: BTreeMap<(String, chrono::NaiveDate), String> =
                                BTreeMap::new();
                            for d in &duties {
                                matrix.insert(
                                    (d.employee_name.clone(), d.date),
                                    d.duty_type_name.clone(),
                                );
                            }
                            rsx! {
                                div { class: "overflow-auto",
                                    table { class: "min-w-full divide-y divide-gray-200",
                                        thead { class: "bg-gray-50 sticky top-0",
                                            tr {
                                                th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", {t("distribution.employee")} }
                                                for d in duty_dates.iter() {
                                                    th { class: "px-3 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider",
                                                        {format_day_month(*d)}
                                                    }
                                                }
                                            }
                                        }
                                        tbody { class: "bg-white divide-y divide-gray-200",
                                            for emp in employees.iter() {
                                                tr {
                                                    td { class: "px-4 py-2 whitespace-nowrap text-sm font-medium text-gray-900", {emp.clone()} }
                                                    for d in duty_dates.iter() {
                                                        td { class: "px-3 py-2 whitespace-nowrap text-sm text-gray-900",
                                                            if let Some(name) = matrix.get(&(emp.clone(), *d)) {
                                                                span { class: "inline-flex rounded-full px-2 text-xs font-semibold leading-5 bg-blue-100 text-blue-800",
                                                                    {name.clone()}
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
                        }
                    }
                }
            }
        }

        if confirm_clear() {
            div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
                div { class: "w-full max-w-md rounded-lg bg-white shadow-lg p-5 space-y-4",
                    h2 { class: "text-lg font-semibold", {t("distribution.clear_title")} }
                    p { class: "text-sm text-gray-600", {t("distribution.clear_confirm")} }
                    div { class: "flex items-center justify-end gap-2",
                        button {
                            class: "h-9 px-3 rounded-md border border-gray-300 text-sm hover:bg-gray-50",
                            onclick: move |_| confirm_clear.set(false),
                            {t("common.cancel")}
                        }
                        button {
                            class: "h-9 px-3 rounded-md bg-red-600 hover:bg-red-500 text-white text-sm",
                            onclick: clear,
                            {t("distribution.clear")}
                        }
                    }
                }
            }
        }
    }
}
