use dioxus::prelude::*;

use crate::api;
use crate::components::{Breadcrumbs, Crumb, PreferenceCalendarModal, StatusCalendarModal};
use crate::i18n::t;
use crate::models::{
    employee_matches, status_color, status_label, Department, Employee, EmployeeDutyType,
    EmployeePayload, Group, MILITARY_RANKS, STATUS_CODES,
};
use crate::Route;

#[derive(PartialEq, Clone, Default)]
struct EmployeeForm {
    id: Option<i64>,
    last_name: String,
    first_name: String,
    middle_name: String,
    position: String,
    rank: String,
    group_id: String,
    duty_count: String,
}

/// Department detail: employee roster with search and filters, employee CRUD,
/// group transfer and the per-employee calendar/assignment modals.
#[component]
pub fn DepartmentDetail(structure_id: i64, department_id: i64) -> Element {
    let mut structure = use_signal(|| Option::<Department>::None);
    let mut department = use_signal(|| Option::<Department>::None);
    let mut employees = use_signal(Vec::<Employee>::new);
    let mut groups = use_signal(Vec::<Group>::new);
    let mut query = use_signal(String::new);
    let mut status_filter = use_signal(String::new);
    let mut group_filter = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let mut modal_open = use_signal(|| false);
    let mut form = use_signal(EmployeeForm::default);
    let mut confirm_delete = use_signal(|| Option::<Employee>::None);
    let mut transfer_target = use_signal(|| Option::<Employee>::None);
    let mut transfer_group = use_signal(String::new);
    let mut status_calendar_for = use_signal(|| Option::<Employee>::None);
    let mut preference_calendar_for = use_signal(|| Option::<Employee>::None);
    let mut duty_types_for = use_signal(|| Option::<Employee>::None);

    let refetch = move || {
        spawn(async move {
            match api::list_department_employees(department_id).await {
                Ok(items) => employees.set(items),
                Err(_) => error.set(Some(t("employees.error_load"))),
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
            // Groups feed the filter dropdown and the transfer modal; a
            // failure here just leaves both empty.
            if let Ok(g) = api::list_groups(department_id).await {
                groups.set(g);
            }
            match api::list_department_employees(department_id).await {
                Ok(items) => employees.set(items),
                Err(_) => error.set(Some(t("employees.error_load"))),
            }
        });
    }));

    let filtered = move || {
        let q = query.read().clone();
        let status = status_filter.read().clone();
        let group = group_filter.read().clone();
        employees
            .read()
            .iter()
            .filter(|e| employee_matches(e, &q))
            .filter(|e| status.is_empty() || e.status == status)
            .filter(|e| {
                group.is_empty()
                    || e.group_id.map(|g| g.to_string()).unwrap_or_default() == group
            })
            .cloned()
            .collect::<Vec<_>>()
    };

    let open_create = move |_| {
        error.set(None);
        form.set(EmployeeForm { duty_count: "0".into(), ..Default::default() });
        modal_open.set(true);
    };
    let mut open_edit = move |e: Employee| {
        error.set(None);
        form.set(EmployeeForm {
            id: Some(e.id),
            last_name: e.last_name,
            first_name: e.first_name,
            middle_name: e.middle_name.unwrap_or_default(),
            position: e.position,
            rank: e.rank.unwrap_or_default(),
            group_id: e.group_id.map(|g| g.to_string()).unwrap_or_default(),
            duty_count: e.duty_count.to_string(),
        });
        modal_open.set(true);
    };

    let on_submit = move |_| {
        error.set(None);
        let f = form.read().clone();
        if f.last_name.trim().is_empty()
            || f.first_name.trim().is_empty()
            || f.position.trim().is_empty()
        {
            error.set(Some(t("employees.error_required")));
            return;
        }
        let payload = EmployeePayload {
            last_name: f.last_name.trim().to_string(),
            first_name: f.first_name.trim().to_string(),
            middle_name: {
                let m = f.middle_name.trim().to_string();
                if m.is_empty() { None } else { Some(m) }
            },
            position: f.position.trim().to_string(),
            rank: {
                let r = f.rank.trim().to_string();
                if r.is_empty() { None } else { Some(r) }
            },
            department_id,
            group_id: f.group_id.parse::<i64>().ok(),
        };
        spawn(async move {
            let result = match f.id {
                Some(id) => api::update_employee(id, &payload).await.map(|e| (id, e)),
                None => api::create_employee(&payload).await.map(|e| (e.id, e)),
            };
            match result {
                Ok((id, saved)) => {
                    if let Ok(count) = f.duty_count.trim().parse::<i64>() {
                        if count != saved.duty_count {
                            let _ = api::set_employee_duty_count(id, count).await;
                        }
                    }
                    refetch();
                    modal_open.set(false);
                }
                Err(e) => error.set(Some(e.detail_or(&t("employees.error_save")).to_string())),
            }
        });
    };

    let structure_name = structure.read().as_ref().map(|s| s.name.clone()).unwrap_or_default();
    let department_name = department.read().as_ref().map(|d| d.name.clone()).unwrap_or_default();

    rsx! {
        Breadcrumbs {
            items: vec![
                Crumb::link(t("nav.structures"), Route::Structures {}),
                Crumb::link(structure_name.clone(), Route::Subdepartments { structure_id }),
                Crumb::here(department_name.clone()),
            ],
        }

        div { class: "bg-white rounded-lg shadow p-6 space-y-4",
            div { class: "flex flex-col lg:flex-row gap-2 lg:items-center lg:justify-between",
                div {
                    h1 { class: "text-xl sm:text-2xl font-semibold", {department_name} }
                    p { class: "text-sm text-gray-500",
                        {format!("{}: {}", t("employees.total"), employees.read().len())}
                    }
                }
                div { class: "flex flex-wrap items-center gap-2",
                    input {
                        class: "h-10 w-full sm:w-56 rounded-md border border-gray-300 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
                        placeholder: t("common.search_placeholder"),
                        value: query.read().clone(),
                        oninput: move |e| query.set(e.value()),
                    }
                    select {
                        class: "h-10 rounded-md border border-gray-300 px-2 text-sm",
                        value: status_filter.read().clone(),
                        onchange: move |e| status_filter.set(e.value()),
                        option { value: "", {t("employees.all_statuses")} }
                        for code in STATUS_CODES {
                            option { value: *code, {format!("{} — {}", code, status_label(code))} }
                        }
                    }
                    select {
                        class: "h-10 rounded-md border border-gray-300 px-2 text-sm",
                        value: group_filter.read().clone(),
                        onchange: move |e| group_filter.set(e.value()),
                        option { value: "", {t("employees.all_groups")} }
                        for g in groups.read().iter() {
                            option { value: g.id.to_string(), {g.name.clone()} }
                        }
                    }
                    button {
                        class: "h-10 px-4 rounded-md bg-indigo-600 hover:bg-indigo-500 text-white text-sm font-medium",
                        onclick: open_create,
                        {t("employees.new")}
                    }
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
                                            {format!(" • {}: {}", t("employees.duty_count"), e.duty_count)}
                                        }
                                    }
                                    div { class: "flex flex-wrap items-center gap-2",
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
                                            class: "h-8 px-2 rounded-md border border-gray-300 text-xs hover:bg-gray-50",
                                            onclick: {
                                                let e = e.clone();
                                                move |_| duty_types_for.set(Some(e.clone()))
                                            },
                                            {t("employees.duty_types")}
                                        }
                                        button {
                                            class: "h-8 px-2 rounded-md border border-gray-300 text-xs hover:bg-gray-50",
                                            onclick: {
                                                let e = e.clone();
                                                move |_| {
                                                    transfer_group.set(
                                                        e.group_id.map(|g| g.to_string()).unwrap_or_default(),
                                                    );
                                                    transfer_target.set(Some(e.clone()));
                                                }
                                            },
                                            {t("employees.transfer")}
                                        }
                                        button {
                                            class: "h-8 px-2 rounded-md border border-gray-300 text-xs hover:bg-gray-50",
                                            onclick: {
                                                let e = e.clone();
                                                move |_| open_edit(e.clone())
                                            },
                                            {t("common.edit")}
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

        // Add/edit employee modal
        if modal_open() {
            div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
                div { class: "w-full max-w-lg rounded-lg bg-white shadow-lg p-5 space-y-4",
                    h2 { class: "text-lg font-semibold",
                        {if form.read().id.is_some() { t("employees.edit_title") } else { t("employees.new_title") }}
                    }
                    if let Some(err) = error.read().clone() {
                        p { class: "text-red-600 text-sm", {err} }
                    }
                    div { class: "grid grid-cols-1 sm:grid-cols-2 gap-3",
                        input {
                            class: "h-10 rounded-md border border-gray-300 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            placeholder: t("employees.last_name"),
                            value: form.read().last_name.clone(),
                            oninput: move |e| form.write().last_name = e.value(),
                        }
                        input {
                            class: "h-10 rounded-md border border-gray-300 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            placeholder: t("employees.first_name"),
                            value: form.read().first_name.clone(),
                            oninput: move |e| form.write().first_name = e.value(),
                        }
                        input {
                            class: "h-10 rounded-md border border-gray-300 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            placeholder: t("employees.middle_name"),
                            value: form.read().middle_name.clone(),
                            oninput: move |e| form.write().middle_name = e.value(),
                        }
                        input {
                            class: "h-10 rounded-md border border-gray-300 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            placeholder: t("employees.position"),
                            value: form.read().position.clone(),
                            oninput: move |e| form.write().position = e.value(),
                        }
                        select {
                            class: "h-10 rounded-md border border-gray-300 px-2 text-sm",
                            value: form.read().rank.clone(),
                            onchange: move |e| form.write().rank = e.value(),
                            option { value: "", {t("employees.no_rank")} }
                            for rank in MILITARY_RANKS {
                                option { value: *rank, {*rank} }
                            }
                        }
                        select {
                            class: "h-10 rounded-md border border-gray-300 px-2 text-sm",
                            value: form.read().group_id.clone(),
                            onchange: move |e| form.write().group_id = e.value(),
                            option { value: "", {t("employees.no_group")} }
                            for g in groups.read().iter() {
                                option { value: g.id.to_string(), {g.name.clone()} }
                            }
                        }
                        if form.read().id.is_some() {
                            div { class: "flex items-center gap-2",
                                label { class: "text-sm text-gray-600", {t("employees.duty_count")} }
                                input {
                                    class: "h-10 w-24 rounded-md border border-gray-300 px-3 py-2 text-sm",
                                    r#type: "number",
                                    min: 0,
                                    value: form.read().duty_count.clone(),
                                    oninput: move |e| form.write().duty_count = e.value(),
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
                            {if form.read().id.is_some() { t("common.save") } else { t("common.create") }}
                        }
                    }
                }
            }
        }

        // Transfer between groups
        if let Some(target) = transfer_target.read().clone() {
            div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
                div { class: "w-full max-w-md rounded-lg bg-white shadow-lg p-5 space-y-4",
                    h2 { class: "text-lg font-semibold", {t("employees.transfer_title")} }
                    p { class: "text-sm text-gray-600", {target.full_name()} }
                    select {
                        class: "h-10 w-full rounded-md border border-gray-300 px-2 text-sm",
                        value: transfer_group.read().clone(),
                        onchange: move |e| transfer_group.set(e.value()),
                        option { value: "", {t("employees.no_group")} }
                        for g in groups.read().iter() {
                            option { value: g.id.to_string(), {g.name.clone()} }
                        }
                    }
                    div { class: "flex items-center justify-end gap-2",
                        button {
                            class: "h-9 px-3 rounded-md border border-gray-300 text-sm hover:bg-gray-50",
                            onclick: move |_| transfer_target.set(None),
                            {t("common.cancel")}
                        }
                        button {
                            class: "h-9 px-3 rounded-md bg-indigo-600 hover:bg-indigo-500 text-white text-sm",
                            onclick: {
                                let id = target.id;
                                move |_| {
                                    let group_id = transfer_group.read().parse::<i64>().ok();
                                    spawn(async move {
                                        match api::set_employee_group(id, group_id).await {
                                            Ok(()) => {
                                                refetch();
                                                transfer_target.set(None);
                                            }
                                            Err(e) => error.set(Some(
                                                e.detail_or(&t("employees.error_transfer")).to_string(),
                                            )),
                                        }
                                    });
                                }
                            },
                            {t("employees.transfer")}
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
        if let Some(emp) = duty_types_for.read().clone() {
            EmployeeDutyTypesModal {
                employee: emp,
                on_close: move |_| duty_types_for.set(None),
            }
        }
    }
}

/// Duty-type assignment for one employee. Links are toggled through
/// `is_active`, not deleted, so history survives.
#[component]
pub fn EmployeeDutyTypesModal(employee: Employee, on_close: EventHandler<()>) -> Element {
    let employee_id = employee.id;
    let mut links = use_signal(Vec::<EmployeeDutyType>::new);
    let mut all_types = use_signal(Vec::<crate::models::DutyType>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let refetch = move || {
        spawn(async move {
            match api::list_employee_duty_types(employee_id).await {
                Ok(items) => links.set(items),
                Err(_) => error.set(Some(t("employee_duty_types.error_load"))),
            }
        });
    };

    use_effect(move || {
        spawn(async move {
            // The picker list is non-critical: on failure it just stays empty.
            if let Ok(types) = api::list_duty_types().await {
                all_types.set(types);
            }
            match api::list_employee_duty_types(employee_id).await {
                Ok(items) => links.set(items),
                Err(_) => error.set(Some(t("employee_duty_types.error_load"))),
            }
        });
    });

    let mut toggle = move |duty_type_id: i64| {
        if busy() {
            return;
        }
        let existing = links
            .read()
            .iter()
            .find(|l| l.duty_type_id == duty_type_id)
            .map(|l| (l.id, l.is_active));
        spawn(async move {
            busy.set(true);
            error.set(None);
            let result = match existing {
                Some((link_id, active)) => {
                    api::set_employee_duty_type_active(link_id, !active).await.map(|_| ())
                }
                None => api::attach_employee_duty_type(employee_id, duty_type_id).await.map(|_| ()),
            };
            match result {
                Ok(()) => refetch(),
                Err(e) => {
                    error.set(Some(e.detail_or(&t("employee_duty_types.error_save")).to_string()))
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
            div { class: "w-full max-w-lg rounded-lg bg-white shadow-lg p-5 space-y-4",
                div { class: "flex items-center justify-between",
                    div {
                        h2 { class: "text-lg font-semibold", {t("employee_duty_types.title")} }
                        p { class: "text-sm text-gray-500", {employee.full_name()} }
                    }
                }
                if let Some(err) = error.read().clone() {
                    p { class: "text-red-600 text-sm", {err} }
                }
                ul { class: "divide-y divide-gray-200 rounded-md border border-gray-200 max-h-96 overflow-y-auto",
                    for dt in all_types.read().iter().cloned() {
                        li { class: "px-3 py-2 flex items-center justify-between gap-3",
                            div { class: "min-w-0",
                                div { class: "text-sm font-medium text-gray-900", {dt.name.clone()} }
                                div { class: "text-xs text-gray-500",
                                    {format!("{}: {}", t("duty_types.category"), t(&format!("duty_types.category_{}", dt.duty_category)))}
                                }
                            }
                            input {
                                r#type: "checkbox",
                                checked: links
                                    .read()
                                    .iter()
                                    .any(|l| l.duty_type_id == dt.id && l.is_active),
                                onchange: {
                                    let id = dt.id;
                                    move |_| toggle(id)
                                },
                            }
                        }
                    }
                }
                div { class: "flex justify-end",
                    button {
                        class: "h-9 px-3 rounded-md border border-gray-300 text-sm hover:bg-gray-50",
                        onclick: move |_| on_close.call(()),
                        {t("common.close")}
                    }
                }
            }
        }
    }
}
