#![cfg_attr(feature = "bundle", windows_subsystem = "windows")]

use dioxus::prelude::*;

mod api;
mod components;
mod dates;
mod i18n;
mod models;
mod selection;
mod views;

use components::Layout;
use views::{
    AcademicDutyStructures, AcademicDutySubdepartments, AcademicDutyTypes, DepartmentDetail,
    DepartmentGroups, DutyDistribution, DutyTypes, GroupEmployees, Home, PersonnelByStatus,
    PersonnelStructure, PersonnelStructures, Structures, Subdepartments,
};

/// Path parameters carry all navigational context; there is no
/// query-string-backed view state.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/departments")]
    Structures {},
    #[route("/departments/:structure_id/subdepartments")]
    Subdepartments { structure_id: i64 },
    #[route("/departments/:structure_id/subdepartments/:department_id")]
    DepartmentDetail { structure_id: i64, department_id: i64 },
    #[route("/departments/:structure_id/:department_id/groups")]
    DepartmentGroups { structure_id: i64, department_id: i64 },
    #[route("/departments/:structure_id/:department_id/groups/:group_id/employees")]
    GroupEmployees { structure_id: i64, department_id: i64, group_id: i64 },
    #[route("/duty-types")]
    DutyTypes {},
    #[route("/duty-structures")]
    AcademicDutyStructures {},
    #[route("/duty-structures/:structure_id/subdepartments")]
    AcademicDutySubdepartments { structure_id: i64 },
    #[route("/duty-structures/:structure_id/subdepartments/:department_id/duty-types")]
    AcademicDutyTypes { structure_id: i64, department_id: i64 },
    #[route("/duty-distribution")]
    DutyDistribution {},
    #[route("/personnel-expense")]
    PersonnelStructures {},
    #[route("/personnel-expense/:structure_id/subdepartments")]
    PersonnelStructure { structure_id: i64 },
    #[route("/personnel-expense/:structure_id/employees/status/:status")]
    PersonnelByStatus { structure_id: i64, status: String },
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::provide_i18n();

    rsx! {
        document::Stylesheet { href: asset!("assets/tailwind.css") }
        head {
            document::Meta { name: "description", content: "Система нарядов" }
        }
        Router::<Route> {}
    }
}
