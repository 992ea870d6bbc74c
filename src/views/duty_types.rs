use dioxus::prelude::*;

use crate::api;
use crate::components::{Breadcrumbs, Crumb};
use crate::i18n::t;
use crate::models::{
    name_matches, DutyType, DutyTypePayload, CATEGORY_ACADEMIC, CATEGORY_DIVISION,
};

#[derive(PartialEq, Clone)]
struct DutyTypeForm {
    id: Option<i64>,
    name: String,
    description: String,
    priority: String,
    people_per_day: String,
    duty_category: String,
}

impl Default for DutyTypeForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            priority: "1".into(),
            people_per_day: "1".into(),
            duty_category: CATEGORY_ACADEMIC.into(),
        }
    }
}

/// The full duty-type catalogue.
#[component]
pub fn DutyTypes() -> Element {
    let mut list = use_signal(Vec::<DutyType>::new);
    let mut query = use_signal(String::new);
    let mut modal_open = use_signal(|| false);
    let mut form = use_signal(DutyTypeForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut confirm_delete = use_signal(|| Option::<DutyType>::None);

    let refetch = move || {
        spawn(async move {
            match api::list_duty_types().await {
                Ok(items) => list.set(items),
                Err(_) => error.set(Some(t("duty_types.error_load"))),
            }
        });
    };

    use_effect(move || refetch());

    let filtered = move || {
        let q = query.read().clone();
        list.read()
            .iter()
            .filter(|d| name_matches(&d.name, &q))
            .cloned()
            .collect::<Vec<_>>()
    };

    let open_create = move |_| {
        error.set(None);
        form.set(DutyTypeForm::default());
        modal_open.set(true);
    };
    let mut open_edit = move |d: DutyType| {
        error.set(None);
        form.set(DutyTypeForm {
            id: Some(d.id),
            name: d.name,
            description: d.description.unwrap_or_default(),
            priority: d.priority.to_string(),
            people_per_day: d.people_per_day.to_string(),
            duty_category: d.duty_category,
        });
        modal_open.set(true);
    };

    let on_submit = move |_| {
        error.set(None);
        let f = form.read().clone();
        if f.name.trim().is_empty() {
            error.set(Some(t("duty_types.error_required")));
            return;
        }
        let Ok(priority) = f.priority.trim().parse::<i64>() else {
            error.set(Some(t("duty_types.error_priority")));
            return;
        };
        let people_per_day = match f.people_per_day.trim().parse::<i64>() {
            Ok(n) if (1..=10).contains(&n) => n,
            _ => {
                error.set(Some(t("duty_types.error_people")));
                return;
            }
        };
        let payload = DutyTypePayload {
            name: f.name.trim().to_string(),
            description: {
                let d = f.description.trim().to_string();
                if d.is_empty() { None } else { Some(d) }
            },
            priority,
            people_per_day,
            duty_category: f.duty_category.clone(),
        };
        spawn(async move {
            let result = match f.id {
                Some(id) => api::update_duty_type(id, &payload).await,
                None => api::create_duty_type(&payload).await,
            };
            match result {
                Ok(_) => {
                    refetch();
                    modal_open.set(false);
                }
                Err(e) => error.set(Some(e.detail_or(&t("duty_types.error_save")).to_string())),
            }
        });
    };

    rsx! {
        Breadcrumbs { items: vec![Crumb::here(t("nav.duty_types"))] }

        div { class: "bg-white rounded-lg shadow p-6 space-y-4",
            div { class: "flex flex-col sm:flex-row gap-2 sm:items-center sm:justify-between",
                h1 { class: "text-xl sm:text-2xl font-semibold", {t("nav.duty_types")} }
                div { class: "flex items-center gap-2",
                    input {
                        class: "h-10 w-full sm:w-64 rounded-md border border-gray-300 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
                        placeholder: t("common.search_placeholder"),
                        value: query.read().clone(),
                        oninput: move |e| query.set(e.value()),
                    }
                    button {
                        class: "h-10 px-4 rounded-md bg-indigo-600 hover:bg-indigo-500 text-white text-sm font-medium",
                        onclick: open_create,
                        {t("duty_types.new")}
                    }
                }
            }

            if let Some(err) = error.read().clone() {
                div { class: "text-red-600 text-sm bg-red-50 border border-red-200 rounded-md p-3", {err} }
            }

            {
                let items = filtered();
                if items.is_empty() {
                    rsx! { div { class: "text-sm text-gray-500 py-6 text-center", {t("duty_types.empty")} } }
                } else {
                    rsx! {
                        ul { class: "divide-y divide-gray-200",
                            for d in items.into_iter() {
                                li { class: "py-3 flex items-center justify-between gap-3",
                                    div { class: "min-w-0",
                                        div { class: "flex items-center gap-2",
                                            span { class: "font-medium text-gray-900", {d.name.clone()} }
                                            span {
                                                class: if d.duty_category == CATEGORY_ACADEMIC {
                                                    "inline-flex rounded-full px-2 text-xs font-semibold leading-5 bg-blue-100 text-blue-800"
                                                } else {
                                                    "inline-flex rounded-full px-2 text-xs font-semibold leading-5 bg-amber-100 text-amber-800"
                                                },
                                                {t(&format!("duty_types.category_{}", d.duty_category))}
                                            }
                                        }
                                        div { class: "text-sm text-gray-500",
                                            {format!(
                                                "{}: {} • {}: {}",
                                                t("duty_types.priority"),
                                                d.priority,
                                                t("duty_types.people_per_day"),
                                                d.people_per_day,
                                            )}
                                        }
                                        if let Some(desc) = d.description.clone() {
                                            div { class: "text-sm text-gray-400", {desc} }
                                        }
                                    }
                                    div { class: "flex items-center gap-2",
                                        button {
                                            class: "h-8 px-3 rounded-md border border-gray-300 text-sm hover:bg-gray-50",
                                            onclick: {
                                                let d = d.clone();
                                                move |_| open_edit(d.clone())
                                            },
                                            {t("common.edit")}
                                        }
                                        button {
                                            class: "h-8 px-3 rounded-md border border-red-300 text-red-700 text-sm hover:bg-red-50",
                                            onclick: {
                                                let d = d.clone();
                                                move |_| confirm_delete.set(Some(d.clone()))
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

        if modal_open() {
            div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
                div { class: "w-full max-w-md rounded-lg bg-white shadow-lg p-5 space-y-4",
                    h2 { class: "text-lg font-semibold",
                        {if form.read().id.is_some() { t("duty_types.edit_title") } else { t("duty_types.new_title") }}
                    }
                    if let Some(err) = error.read().clone() {
                        p { class: "text-red-600 text-sm", {err} }
                    }
                    div { class: "space-y-3",
                        input {
                            class: "h-10 w-full rounded-md border border-gray-300 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            placeholder: t("duty_types.name"),
                            value: form.read().name.clone(),
                            oninput: move |e| form.write().name = e.value(),
                        }
                        textarea {
                            class: "w-full rounded-md border border-gray-300 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            rows: 2,
                            placeholder: t("structures.description"),
                            value: form.read().description.clone(),
                            oninput: move |e| form.write().description = e.value(),
                        }
                        div { class: "grid grid-cols-2 gap-3",
                            div {
                                label { class: "text-xs text-gray-600", {t("duty_types.priority")} }
                                input {
                                    class: "h-10 w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                                    r#type: "number",
                                    value: form.read().priority.clone(),
                                    oninput: move |e| form.write().priority = e.value(),
                                }
                            }
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
                        }
                        div {
                            label { class: "text-xs text-gray-600", {t("duty_types.category")} }
                            select {
                                class: "h-10 w-full rounded-md border border-gray-300 px-2 text-sm",
                                value: form.read().duty_category.clone(),
                                onchange: move |e| form.write().duty_category = e.value(),
                                option { value: CATEGORY_ACADEMIC, {t("duty_types.category_academic")} }
                                option { value: CATEGORY_DIVISION, {t("duty_types.category_division")} }
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
                            {if form.read().id.is_some() { t("common.save") } else { t("common.create") }}
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
                        {format!("{} «{}»?", t("duty_types.confirm_delete"), target.name)}
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
                                        match api::delete_duty_type(id).await {
                                            Ok(()) => refetch(),
                                            Err(e) => error.set(Some(
                                                e.detail_or(&t("duty_types.error_delete")).to_string(),
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
    }
}
