use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::selection::DateSpan;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

/// `subdepartments-with-stats` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentStats {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub group_count: i64,
    #[serde(default)]
    pub employee_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub department_id: i64,
    #[serde(default)]
    pub employee_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub position: String,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub department_id: i64,
    #[serde(default)]
    pub group_id: Option<i64>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub duty_count: i64,
    #[serde(default)]
    pub duty_types: Vec<DutyType>,
}

fn default_status() -> String {
    STATUS_PRESENT.to_string()
}

impl Employee {
    /// "Фамилия Имя Отчество"
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(m) if !m.is_empty() => {
                format!("{} {} {}", self.last_name, self.first_name, m)
            }
            _ => format!("{} {}", self.last_name, self.first_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DutyType {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: i64,
    #[serde(default = "default_people_per_day")]
    pub people_per_day: i64,
    #[serde(default = "default_category")]
    pub duty_category: String,
}

fn default_people_per_day() -> i64 {
    1
}

fn default_category() -> String {
    CATEGORY_ACADEMIC.to_string()
}

pub const CATEGORY_ACADEMIC: &str = "academic";
pub const CATEGORY_DIVISION: &str = "division";

/// Employee ↔ duty-type link. Toggled via `is_active`, never hard-deleted,
/// so past assignments stay queryable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDutyType {
    pub id: i64,
    pub employee_id: i64,
    pub duty_type_id: i64,
    #[serde(default)]
    pub duty_type_name: String,
    pub is_active: bool,
}

/// A department's academic duty day. No per-employee assignee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentDutyDay {
    pub id: i64,
    pub department_id: i64,
    pub duty_type_id: i64,
    #[serde(default)]
    pub duty_type_name: String,
    pub duty_date: NaiveDate,
}

impl DateSpan for DepartmentDutyDay {
    fn span(&self) -> (NaiveDate, NaiveDate) {
        (self.duty_date, self.duty_date)
    }
}

/// A scheduled status over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSchedule {
    pub id: i64,
    pub employee_id: i64,
    pub status: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

impl DateSpan for StatusSchedule {
    fn span(&self) -> (NaiveDate, NaiveDate) {
        (self.start_date, self.end_date)
    }
}

pub const PREFERENCE_PREFERRED: &str = "preferred";
pub const PREFERENCE_UNAVAILABLE: &str = "unavailable";

/// A single-day duty preference, `preferred` or `unavailable`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DutyPreference {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub preference_type: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl DateSpan for DutyPreference {
    fn span(&self) -> (NaiveDate, NaiveDate) {
        (self.date, self.date)
    }
}

/// One generated duty assignment as the distribution endpoints report it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DutyRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub date: NaiveDate,
    #[serde(default)]
    pub employee_name: String,
    pub department_id: i64,
    #[serde(default)]
    pub department_name: String,
    pub duty_type_id: i64,
    #[serde(default)]
    pub duty_type_name: String,
}

// ===== Create/update payloads =====

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentPayload {
    pub name: String,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupPayload {
    pub name: String,
    pub description: Option<String>,
    pub department_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeePayload {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub position: String,
    pub rank: Option<String>,
    pub department_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DutyTypePayload {
    pub name: String,
    pub description: Option<String>,
    pub priority: i64,
    pub people_per_day: i64,
    pub duty_category: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusSchedulePayload {
    pub status: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DutyPreferencePayload {
    pub date: NaiveDate,
    pub preference_type: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DutyDayPayload {
    pub department_id: i64,
    pub duty_type_id: i64,
    pub duty_date: NaiveDate,
}

// ===== Status codes =====

pub const STATUS_PRESENT: &str = "НЛ";
pub const STATUS_SICK: &str = "Б";
pub const STATUS_TRIP: &str = "К";
pub const STATUS_LEAVE: &str = "О";
pub const STATUS_INTERNAL_DUTY: &str = "НВ";
pub const STATUS_GARRISON_DUTY: &str = "НГ";

pub const STATUS_CODES: &[&str] = &[
    STATUS_PRESENT,
    STATUS_SICK,
    STATUS_TRIP,
    STATUS_LEAVE,
    STATUS_INTERNAL_DUTY,
    STATUS_GARRISON_DUTY,
];

/// Russian label for a status short code. Unknown codes pass through.
pub fn status_label(code: &str) -> &str {
    match code {
        STATUS_PRESENT => "Налицо",
        STATUS_SICK => "Болен",
        STATUS_TRIP => "Командировка",
        STATUS_LEAVE => "Отпуск",
        STATUS_INTERNAL_DUTY => "Наряд внутренний",
        STATUS_GARRISON_DUTY => "Наряд гарнизонный",
        other => other,
    }
}

/// Tailwind background class for status badges and calendar cells.
pub fn status_color(code: &str) -> &'static str {
    match code {
        STATUS_PRESENT => "bg-emerald-500",
        STATUS_SICK => "bg-red-500",
        STATUS_TRIP => "bg-blue-500",
        STATUS_LEAVE => "bg-green-500",
        STATUS_INTERNAL_DUTY => "bg-amber-500",
        STATUS_GARRISON_DUTY => "bg-orange-500",
        _ => "bg-gray-500",
    }
}

pub const MILITARY_RANKS: &[&str] = &[
    "Гражданский персонал",
    "Рядовой",
    "Ефрейтор",
    "Младший сержант",
    "Сержант",
    "Старший сержант",
    "Старшина",
    "Прапорщик",
    "Старший прапорщик",
    "Лейтенант",
    "Старший лейтенант",
    "Капитан",
    "Майор",
    "Подполковник",
    "Полковник",
    "Генерал-майор",
    "Генерал-лейтенант",
    "Генерал-Полковник",
];

// ===== Client-side search =====

/// Case-insensitive substring match against the concatenated name fields.
pub fn employee_matches(e: &Employee, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    e.full_name().to_lowercase().contains(&q)
}

pub fn name_matches(name: &str, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    q.is_empty() || name.to_lowercase().contains(&q)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emp(last: &str, first: &str) -> Employee {
        Employee {
            id: 1,
            last_name: last.into(),
            first_name: first.into(),
            middle_name: None,
            position: "Оператор".into(),
            rank: None,
            department_id: 1,
            group_id: None,
            status: STATUS_PRESENT.into(),
            duty_count: 0,
            duty_types: Vec::new(),
        }
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let ivanov = emp("Иванов", "Иван");
        let petrov = emp("Петров", "Пётр");
        let hits: Vec<&Employee> = [&ivanov, &petrov]
            .into_iter()
            .filter(|e| employee_matches(e, "ива"))
            .collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].last_name, "Иванов");
    }

    #[test]
    fn empty_query_matches_everyone() {
        assert!(employee_matches(&emp("Иванов", "Иван"), "  "));
    }

    #[test]
    fn full_name_skips_missing_middle_name() {
        let mut e = emp("Иванов", "Иван");
        assert_eq!(e.full_name(), "Иванов Иван");
        e.middle_name = Some("Иванович".into());
        assert_eq!(e.full_name(), "Иванов Иван Иванович");
    }

    #[test]
    fn status_labels_cover_all_codes() {
        for code in STATUS_CODES {
            assert_ne!(status_label(code), *code);
            assert!(status_color(code).starts_with("bg-"));
        }
    }

    #[test]
    fn status_schedule_deserializes_range() {
        let s: StatusSchedule = serde_json::from_str(
            r#"{"id":7,"employee_id":3,"status":"Б","start_date":"2024-03-02","end_date":"2024-03-05"}"#,
        )
        .unwrap();
        assert_eq!(s.span().0.to_string(), "2024-03-02");
        assert_eq!(s.span().1.to_string(), "2024-03-05");
        assert_eq!(s.notes, None);
    }
}
