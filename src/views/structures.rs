use dioxus::prelude::*;

use crate::api;
use crate::components::{Breadcrumbs, Crumb};
use crate::i18n::t;
use crate::models::{name_matches, Department, DepartmentPayload};
use crate::Route;

#[derive(PartialEq, Clone, Default)]
struct StructureForm {
    id: Option<i64>,
    name: String,
    description: String,
}

/// Top-level organizational units (`parent_id == null`).
#[component]
pub fn Structures() -> Element {
    let mut list = use_signal(Vec::<Department>::new);
    let mut query = use_signal(String::new);
    let mut modal_open = use_signal(|| false);
    let mut form = use_signal(StructureForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut confirm_delete = use_signal(|| Option::<Department>::None);

    let refetch = move || {
        spawn(async move {
            match api::list_departments().await {
                Ok(items) => {
                    list.set(items.into_iter().filter(|d| d.parent_id.is_none()).collect())
                }
                Err(_) => error.set(Some(t("structures.error_load"))),
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
        form.set(StructureForm::default());
        modal_open.set(true);
    };
    let mut open_edit = move |d: Department| {
        error.set(None);
        form.set(StructureForm {
            id: Some(d.id),
            name: d.name,
            description: d.description.unwrap_or_default(),
        });
        modal_open.set(true);
    };

    let on_submit = move |_| {
        error.set(None);
        let f = form.read().clone();
        if f.name.trim().is_empty() {
            error.set(Some(t("structures.error_required")));
            return;
        }
        let payload = DepartmentPayload {
            name: f.name.trim().to_string(),
            description: {
                let d = f.description.trim().to_string();
                if d.is_empty() { None } else { Some(d) }
            },
            parent_id: None,
        };
        spawn(async move {
            let result = match f.id {
                Some(id) => api::update_department(id, &payload).await,
                None => api::create_department(&payload).await,
            };
            match result {
                Ok(_) => {
                    refetch();
                    modal_open.set(false);
                }
                Err(e) => error.set(Some(e.detail_or(&t("structures.error_save")).to_string())),
            }
        });
    };

    rsx! {
        Breadcrumbs { items: vec![Crumb::here(t("nav.structures"))] }

        div { class: "bg-white rounded-lg shadow p-6 space-y-4",
            div { class: "flex flex-col sm:flex-row gap-2 sm:items-center sm:justify-between",
                h1 { class: "text-xl sm:text-2xl font-semibold", {t("nav.structures")} }
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
                        {t("structures.new")}
                    }
                }
            }

            if let Some(err) = error.read().clone() {
                div { class: "text-red-600 text-sm bg-red-50 border border-red-200 rounded-md p-3", {err} }
            }

            {
                let items = filtered();
                if items.is_empty() {
                    rsx! { div { class: "text-sm text-gray-500 py-6 text-center", {t("structures.empty")} } }
                } else {
                    rsx! {
                        ul { class: "divide-y divide-gray-200",
                            for d in items.into_iter() {
                                li { class: "py-3 flex items-center justify-between gap-3",
                                    Link {
                                        to: Route::Subdepartments { structure_id: d.id },
                                        class: "min-w-0 flex-1 cursor-pointer hover:bg-gray-50 rounded-md px-3 -mx-3 py-2",
                                        div { class: "font-medium text-gray-900", {d.name.clone()} }
                                        if let Some(desc) = d.description.clone() {
                                            div { class: "text-sm text-gray-500", {desc} }
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

        // Add/edit modal
        if modal_open() {
            div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
                div { class: "w-full max-w-md rounded-lg bg-white shadow-lg p-5 space-y-4",
                    h2 { class: "text-lg font-semibold",
                        {if form.read().id.is_some() { t("structures.edit_title") } else { t("structures.new_title") }}
                    }
                    if let Some(err) = error.read().clone() {
                        p { class: "text-red-600 text-sm", {err} }
                    }
                    div { class: "space-y-3",
                        input {
                            class: "h-10 w-full rounded-md border border-gray-300 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            placeholder: t("structures.name"),
                            value: form.read().name.clone(),
                            oninput: move |e| form.write().name = e.value(),
                        }
                        textarea {
                            class: "w-full rounded-md border border-gray-300 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            rows: 3,
                            placeholder: t("structures.description"),
                            value: form.read().description.clone(),
                            oninput: move |e| form.write().description = e.value(),
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

        // Confirm delete
        if let Some(target) = confirm_delete.read().clone() {
            div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
                div { class: "w-full max-w-md rounded-lg bg-white shadow-lg p-5 space-y-4",
                    h2 { class: "text-lg font-semibold", {t("common.confirm_delete_title")} }
                    p { class: "text-sm text-gray-600",
                        {format!("{} «{}»?", t("structures.confirm_delete"), target.name)}
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
                                        match api::delete_department(id).await {
                                            Ok(()) => refetch(),
                                            Err(e) => error.set(Some(
                                                e.detail_or(&t("structures.error_delete")).to_string(),
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
