pub mod academic_duty;
pub mod department;
pub mod distribution;
pub mod duty_types;
pub mod group_employees;
pub mod groups;
pub mod home;
pub mod personnel;
pub mod structures;
pub mod subdepartments;

pub use academic_duty::{AcademicDutyStructures, AcademicDutySubdepartments, AcademicDutyTypes};
pub use department::DepartmentDetail;
pub use distribution::DutyDistribution;
pub use duty_types::DutyTypes;
pub use group_employees::GroupEmployees;
pub use groups::DepartmentGroups;
pub use home::Home;
pub use personnel::{PersonnelByStatus, PersonnelStructure, PersonnelStructures};
pub use structures::Structures;
pub use subdepartments::Subdepartments;
