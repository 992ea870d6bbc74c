//! Configured REST client plus one typed function per backend operation.
//!
//! All state lives in the backend; views call these functions and refetch
//! after every mutation. Every failed response is logged before it is
//! returned, and the backend's `detail` message is carried through so modals
//! can show it verbatim.

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::models::*;

const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Base URL of the backend. Baked in via `API_BASE_URL` at build time (the
/// wasm bundle has no process environment); native builds may override it at
/// runtime.
pub fn base_url() -> String {
    #[cfg(not(target_arch = "wasm32"))]
    if let Ok(url) = std::env::var("API_BASE_URL") {
        return url.trim_end_matches('/').to_string();
    }
    option_env!("API_BASE_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

static CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response; `detail` is the backend's message when it sent one.
    #[error("{detail}")]
    Api { status: u16, detail: String },
    #[error("сетевая ошибка: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// The message a modal should show inline: the backend `detail` verbatim
    /// or the supplied generic fallback.
    pub fn detail_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            ApiError::Api { detail, .. } if !detail.is_empty() => detail,
            _ => fallback,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

fn url(path: &str) -> String {
    format!("{}{}", base_url(), path)
}

/// Response-error hook shared by every call: non-success responses become
/// `ApiError::Api` with the FastAPI `detail` string extracted, and every
/// error is logged.
async fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str().map(String::from)))
        .unwrap_or_default();
    error!(status = status.as_u16(), %detail, "api error");
    Err(ApiError::Api { status: status.as_u16(), detail })
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T> {
    let resp = CLIENT.get(url(path)).send().await.inspect_err(log_net)?;
    Ok(check(resp).await?.json().await?)
}

pub async fn get_bytes(path: &str) -> Result<Vec<u8>> {
    let resp = CLIENT.get(url(path)).send().await.inspect_err(log_net)?;
    Ok(check(resp).await?.bytes().await?.to_vec())
}

pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T> {
    let resp = CLIENT
        .post(url(path))
        .json(body)
        .send()
        .await
        .inspect_err(log_net)?;
    Ok(check(resp).await?.json().await?)
}

pub async fn put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T> {
    let resp = CLIENT
        .put(url(path))
        .json(body)
        .send()
        .await
        .inspect_err(log_net)?;
    Ok(check(resp).await?.json().await?)
}

pub async fn patch<B: Serialize>(path: &str, body: &B) -> Result<()> {
    let resp = CLIENT
        .patch(url(path))
        .json(body)
        .send()
        .await
        .inspect_err(log_net)?;
    check(resp).await?;
    Ok(())
}

pub async fn delete(path: &str) -> Result<()> {
    let resp = CLIENT.delete(url(path)).send().await.inspect_err(log_net)?;
    check(resp).await?;
    Ok(())
}

fn log_net(err: &reqwest::Error) {
    error!(%err, "request failed");
}

// ===== Departments =====

pub async fn list_departments() -> Result<Vec<Department>> {
    get("/departments").await
}

pub async fn get_department(id: i64) -> Result<Department> {
    get(&format!("/departments/{id}")).await
}

pub async fn list_subdepartments(id: i64) -> Result<Vec<Department>> {
    get(&format!("/departments/{id}/subdepartments")).await
}

pub async fn list_subdepartments_with_stats(id: i64) -> Result<Vec<DepartmentStats>> {
    get(&format!("/departments/{id}/subdepartments-with-stats")).await
}

pub async fn create_department(payload: &DepartmentPayload) -> Result<Department> {
    post("/departments", payload).await
}

pub async fn update_department(id: i64, payload: &DepartmentPayload) -> Result<Department> {
    put(&format!("/departments/{id}"), payload).await
}

pub async fn delete_department(id: i64) -> Result<()> {
    delete(&format!("/departments/{id}")).await
}

// ===== Groups =====

pub async fn list_groups(department_id: i64) -> Result<Vec<Group>> {
    get(&format!("/groups?department_id={department_id}")).await
}

pub async fn get_group(id: i64) -> Result<Group> {
    get(&format!("/groups/{id}")).await
}

pub async fn list_group_employees(id: i64) -> Result<Vec<Employee>> {
    get(&format!("/groups/{id}/employees")).await
}

pub async fn create_group(payload: &GroupPayload) -> Result<Group> {
    post("/groups", payload).await
}

pub async fn update_group(id: i64, payload: &GroupPayload) -> Result<Group> {
    put(&format!("/groups/{id}"), payload).await
}

pub async fn delete_group(id: i64) -> Result<()> {
    delete(&format!("/groups/{id}")).await
}

// ===== Employees =====

pub async fn list_department_employees(department_id: i64) -> Result<Vec<Employee>> {
    get(&format!("/employees/department/{department_id}")).await
}

pub async fn list_structure_employees_with_status(structure_id: i64) -> Result<Vec<Employee>> {
    get(&format!("/employees/structure/{structure_id}/with-status")).await
}

pub async fn create_employee(payload: &EmployeePayload) -> Result<Employee> {
    post("/employees", payload).await
}

pub async fn update_employee(id: i64, payload: &EmployeePayload) -> Result<Employee> {
    put(&format!("/employees/{id}"), payload).await
}

pub async fn delete_employee(id: i64) -> Result<()> {
    delete(&format!("/employees/{id}")).await
}

pub async fn set_employee_status(id: i64, status: &str) -> Result<()> {
    patch(&format!("/employees/{id}/status"), &serde_json::json!({ "status": status })).await
}

pub async fn set_employee_group(id: i64, group_id: Option<i64>) -> Result<()> {
    patch(&format!("/employees/{id}/group"), &serde_json::json!({ "group_id": group_id })).await
}

pub async fn set_employee_duty_count(id: i64, duty_count: i64) -> Result<()> {
    patch(
        &format!("/employees/{id}/duty-count"),
        &serde_json::json!({ "duty_count": duty_count }),
    )
    .await
}

// ===== Duty types =====

pub async fn list_duty_types() -> Result<Vec<DutyType>> {
    get("/duty-types").await
}

pub async fn list_unique_duty_types() -> Result<Vec<DutyType>> {
    get("/duty-types/unique").await
}

pub async fn list_department_duty_types(department_id: i64) -> Result<Vec<DutyType>> {
    get(&format!("/duty-types/department/{department_id}")).await
}

pub async fn create_duty_type(payload: &DutyTypePayload) -> Result<DutyType> {
    post("/duty-types", payload).await
}

pub async fn create_department_duty_type(
    department_id: i64,
    payload: &DutyTypePayload,
) -> Result<DutyType> {
    let body = serde_json::json!({
        "department_id": department_id,
        "name": payload.name,
        "description": payload.description,
        "priority": payload.priority,
        "people_per_day": payload.people_per_day,
        "duty_category": payload.duty_category,
    });
    post("/duty-types/department", &body).await
}

pub async fn update_duty_type(id: i64, payload: &DutyTypePayload) -> Result<DutyType> {
    put(&format!("/duty-types/{id}"), payload).await
}

pub async fn delete_duty_type(id: i64) -> Result<()> {
    delete(&format!("/duty-types/{id}")).await
}

pub async fn detach_duty_type(duty_type_id: i64, department_id: i64) -> Result<()> {
    delete(&format!("/duty-types/{duty_type_id}/department/{department_id}")).await
}

// ===== Employee duty-type links =====

pub async fn list_employee_duty_types(employee_id: i64) -> Result<Vec<EmployeeDutyType>> {
    get(&format!("/employees/{employee_id}/duty-types")).await
}

pub async fn attach_employee_duty_type(employee_id: i64, duty_type_id: i64) -> Result<EmployeeDutyType> {
    post(
        &format!("/employees/{employee_id}/duty-types"),
        &serde_json::json!({ "duty_type_id": duty_type_id }),
    )
    .await
}

pub async fn set_employee_duty_type_active(link_id: i64, is_active: bool) -> Result<EmployeeDutyType> {
    put(
        &format!("/employee-duty-types/{link_id}"),
        &serde_json::json!({ "is_active": is_active }),
    )
    .await
}

pub async fn delete_employee_duty_type(link_id: i64) -> Result<()> {
    delete(&format!("/employee-duty-types/{link_id}")).await
}

// ===== Status schedules =====

pub async fn list_status_schedules(employee_id: i64, year: i32, month: u32) -> Result<Vec<StatusSchedule>> {
    get(&format!("/employees/{employee_id}/status-schedules?year={year}&month={month}")).await
}

pub async fn create_status_schedule(
    employee_id: i64,
    payload: &StatusSchedulePayload,
) -> Result<StatusSchedule> {
    post(&format!("/employees/{employee_id}/status-schedules"), payload).await
}

pub async fn delete_status_schedule(id: i64) -> Result<()> {
    delete(&format!("/employees/status-schedules/{id}")).await
}

// ===== Duty preferences =====

pub async fn list_duty_preferences(employee_id: i64, year: i32, month: u32) -> Result<Vec<DutyPreference>> {
    get(&format!("/employees/{employee_id}/duty-preferences?year={year}&month={month}")).await
}

pub async fn create_duty_preference(
    employee_id: i64,
    payload: &DutyPreferencePayload,
) -> Result<DutyPreference> {
    post(&format!("/employees/{employee_id}/duty-preferences"), payload).await
}

pub async fn delete_duty_preference(id: i64) -> Result<()> {
    delete(&format!("/employees/duty-preferences/{id}")).await
}

pub async fn clear_duty_preferences(employee_id: i64, year: i32, month: u32) -> Result<()> {
    delete(&format!("/employees/{employee_id}/duty-preferences/month?year={year}&month={month}")).await
}

// ===== Academic duty days =====

pub async fn list_department_duty_days(
    year: i32,
    month: u32,
    duty_type_id: i64,
    department_id: i64,
) -> Result<Vec<DepartmentDutyDay>> {
    get(&format!(
        "/academic-duty/department-days?year={year}&month={month}&duty_type_id={duty_type_id}&department_id={department_id}"
    ))
    .await
}

pub async fn create_department_duty_day(payload: &DutyDayPayload) -> Result<DepartmentDutyDay> {
    post("/academic-duty/department-days", payload).await
}

pub async fn delete_department_duty_day(id: i64) -> Result<()> {
    delete(&format!("/academic-duty/department-days/{id}")).await
}

// ===== Duty distribution =====

pub async fn generate_distribution(year: i32, month: u32) -> Result<Vec<DutyRecord>> {
    post("/duty-distribution/generate", &serde_json::json!({ "year": year, "month": month })).await
}

pub async fn list_distribution(year: i32, month: u32) -> Result<Vec<DutyRecord>> {
    get(&format!("/duty-distribution/all?year={year}&month={month}")).await
}

pub async fn list_department_distribution(department_id: i64) -> Result<Vec<DutyRecord>> {
    get(&format!("/duty-distribution/department/{department_id}")).await
}

pub async fn list_duty_type_distribution(duty_type_id: i64) -> Result<Vec<DutyRecord>> {
    get(&format!("/duty-distribution/duty-type/{duty_type_id}")).await
}

pub async fn clear_distribution(year: i32, month: u32) -> Result<()> {
    delete(&format!("/duty-distribution/clear?year={year}&month={month}")).await
}

pub async fn export_distribution(year: i32, month: u32) -> Result<Vec<u8>> {
    get_bytes(&format!("/duty-distribution/export?year={year}&month={month}")).await
}

pub async fn export_department_distribution(
    department_id: i64,
    year: i32,
    month: u32,
) -> Result<Vec<u8>> {
    get_bytes(&format!(
        "/duty-distribution/export/department/{department_id}?year={year}&month={month}"
    ))
    .await
}

/// Filename convention for the xlsx exports.
pub fn export_filename(department_id: Option<i64>, year: i32, month: u32) -> String {
    match department_id {
        Some(id) => format!("department_{id}_duties_{year}_{month:02}.xlsx"),
        None => format!("duty_distribution_{year}_{month:02}.xlsx"),
    }
}

// ===== Status sync =====

pub async fn sync_all_employees() -> Result<serde_json::Value> {
    post("/sync-all-employees", &serde_json::json!({})).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trims_trailing_slash() {
        assert!(!base_url().ends_with('/'));
    }

    #[test]
    fn export_filenames_follow_convention() {
        assert_eq!(export_filename(None, 2024, 3), "duty_distribution_2024_03.xlsx");
        assert_eq!(
            export_filename(Some(7), 2024, 11),
            "department_7_duties_2024_11.xlsx"
        );
    }

    #[test]
    fn api_error_prefers_backend_detail() {
        let err = ApiError::Api { status: 409, detail: "Сотрудник уже в наряде".into() };
        assert_eq!(err.detail_or("Ошибка"), "Сотрудник уже в наряде");
        let blank = ApiError::Api { status: 500, detail: String::new() };
        assert_eq!(blank.detail_or("Ошибка"), "Ошибка");
    }
}
