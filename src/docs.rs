use crate::api::calendar::{
    CalendarRequest, MonthQuery, MonthView, MonthsResponse, Step, SummaryResponse,
};
use crate::api::menu::MenuResponse;
use crate::calendar::counter::AttendanceSummary;
use crate::calendar::grid::{DayCell, DayStatus};
use crate::calendar::normalizer::ExpandedLeaveInterval;
use crate::model::leave_record::{LeaveRecord, LeaveStatus};
use crate::model::menu::MenuItem;
use crate::model::role::{Capability, Role};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRM Calendar API",
        version = "1.0.0",
        description = r#"
## HRM Attendance Calendar

Derived attendance views for the HRM dashboards. Dashboards post the employee's
join date and the leave list they fetched from the HRM backend; nothing is stored.

### Features
- **Attendance summary**: present days, absent days and approved leave intervals
- **Month carousel**: months from the join month to the current month
- **Month grid**: one cell per day tagged future, before-join, on-leave, present or weekend
- **Role menu**: dashboard entries for ADMIN, HR, TL and EMPLOYEE

### Security
All `/api` endpoints require a **JWT Bearer** access token issued by the HRM auth service.
"#,
    ),
    paths(
        crate::api::calendar::summary,
        crate::api::calendar::months,
        crate::api::calendar::month,

        crate::api::menu::menu
    ),
    components(
        schemas(
            CalendarRequest,
            LeaveRecord,
            LeaveStatus,
            SummaryResponse,
            AttendanceSummary,
            ExpandedLeaveInterval,
            MonthsResponse,
            MonthQuery,
            Step,
            MonthView,
            DayCell,
            DayStatus,
            MenuResponse,
            MenuItem,
            Role,
            Capability
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Calendar", description = "Attendance calendar APIs"),
        (name = "Menu", description = "Role based dashboard menu"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
