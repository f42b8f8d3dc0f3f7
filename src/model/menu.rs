use serde::Serialize;
use utoipa::ToSchema;

use super::role::{Capability, Role};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MenuItem {
    #[schema(value_type = String, example = "attendance")]
    pub key: &'static str,
    #[schema(value_type = String, example = "Attendance")]
    pub label: &'static str,
    #[schema(value_type = String, example = "/attendance")]
    pub path: &'static str,
    /// Visible when the role holds any of these.
    #[serde(skip)]
    pub requires: &'static [Capability],
}

macro_rules! item {
    ($key:literal, $label:literal, $path:literal, [$($cap:ident),+]) => {
        MenuItem {
            key: $key,
            label: $label,
            path: $path,
            requires: &[$(Capability::$cap),+],
        }
    };
}

pub const MENU: &[MenuItem] = &[
    item!("dashboard", "Dashboard", "/dashboard", [ViewDashboard]),
    item!("employees", "Employees", "/employees", [ManageEmployees]),
    item!("attendance", "Attendance", "/attendance", [ViewAttendance, ViewTeamAttendance]),
    item!("leave", "Leave", "/leave", [ApplyLeave, ApproveLeave]),
    item!("tasks", "Tasks", "/tasks", [ViewTasks, ManageTasks]),
    item!("payroll", "Payroll", "/payroll", [ManagePayroll]),
    item!("payslips", "Payslips", "/payslips", [ViewPayslips]),
    item!("sales", "Sales", "/sales", [ViewSales, RecordSales]),
    item!("team", "Team", "/team", [ManageTeam]),
];

pub fn menu_for(role: Role) -> Vec<MenuItem> {
    MENU
        .iter()
        .filter(|item| item.requires.iter().any(|c| role.can(*c)))
        .cloned()
        .collect()
}
