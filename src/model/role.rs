use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, EnumIter, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin = 1,
    Hr = 2,
    Tl = 3,
    Employee = 4,
}

/// Things a dashboard user may do. Checked only through [`Role::can`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Display, EnumIter, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Capability {
    ViewDashboard,
    ManageEmployees,
    ViewAttendance,
    ViewTeamAttendance,
    ApplyLeave,
    ApproveLeave,
    ViewTasks,
    ManageTasks,
    ManagePayroll,
    ViewPayslips,
    ViewSales,
    RecordSales,
    ManageTeam,
}

use Capability::*;

const HR_CAPABILITIES: &[Capability] = &[
    ViewDashboard,
    ManageEmployees,
    ViewAttendance,
    ViewTeamAttendance,
    ApplyLeave,
    ApproveLeave,
    ViewTasks,
    ManagePayroll,
    ViewPayslips,
    ViewSales,
];

const TL_CAPABILITIES: &[Capability] = &[
    ViewDashboard,
    ViewAttendance,
    ViewTeamAttendance,
    ApplyLeave,
    ViewTasks,
    ManageTasks,
    ViewPayslips,
    ViewSales,
    RecordSales,
    ManageTeam,
];

const EMPLOYEE_CAPABILITIES: &[Capability] = &[
    ViewDashboard,
    ViewAttendance,
    ApplyLeave,
    ViewTasks,
    ViewPayslips,
    RecordSales,
];

impl Role {
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Role::Admin),
            2 => Some(Role::Hr),
            3 => Some(Role::Tl),
            4 => Some(Role::Employee),
            _ => None,
        }
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn can(self, capability: Capability) -> bool {
        match self {
            Role::Admin => true,
            Role::Hr => HR_CAPABILITIES.contains(&capability),
            Role::Tl => TL_CAPABILITIES.contains(&capability),
            Role::Employee => EMPLOYEE_CAPABILITIES.contains(&capability),
        }
    }

    pub fn capabilities(self) -> Vec<Capability> {
        use strum::IntoEnumIterator;
        Capability::iter().filter(|c| self.can(*c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn ids_round_trip() {
        for role in Role::iter() {
            assert_eq!(Role::from_id(role.id()), Some(role));
        }
        assert_eq!(Role::from_id(0), None);
        assert_eq!(Role::from_id(5), None);
    }

    #[test]
    fn string_forms() {
        assert_eq!(Role::from_str("TL").unwrap(), Role::Tl);
        assert_eq!(Role::from_str("ADMIN").unwrap(), Role::Admin);
        assert_eq!(Role::Hr.to_string(), "HR");
        assert_eq!(Role::Employee.to_string(), "EMPLOYEE");
        assert!(Role::from_str("admin").is_err());
    }

    #[test]
    fn admin_has_everything() {
        assert_eq!(Role::Admin.capabilities().len(), Capability::iter().count());
    }

    #[test]
    fn everyone_sees_own_attendance() {
        for role in Role::iter() {
            assert!(role.can(ViewAttendance), "{role} cannot view attendance");
            assert!(role.can(ViewDashboard));
        }
    }

    #[test]
    fn employee_is_restricted() {
        let role = Role::Employee;
        assert!(!role.can(ManageEmployees));
        assert!(!role.can(ApproveLeave));
        assert!(!role.can(ManagePayroll));
        assert!(!role.can(ViewTeamAttendance));
        assert!(role.can(ApplyLeave));
    }

    #[test]
    fn team_lead_manages_team_not_payroll() {
        assert!(Role::Tl.can(ManageTeam));
        assert!(Role::Tl.can(ManageTasks));
        assert!(!Role::Tl.can(ManagePayroll));
        assert!(!Role::Hr.can(ManageTeam));
        assert!(Role::Hr.can(ApproveLeave));
    }
}
