use crate::auth::auth::AuthUser;
use crate::calendar::counter::AttendanceSummary;
use crate::calendar::grid::DayCell;
use crate::calendar::normalizer::ExpandedLeaveInterval;
use crate::calendar::dates::parse_calendar_date;
use crate::calendar::{AttendanceCalendar, CalendarError};
use crate::model::leave_record::LeaveRecord;
use crate::model::role::Capability;
use actix_web::{HttpResponse, Responder, web};
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Data the dashboard already fetched from the HRM backend.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "joinDate": "2024-01-01",
    "today": "2024-01-10",
    "leaves": [{
        "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
        "leaveType": "Sick",
        "reason": "Flu",
        "from": "2024-01-08",
        "to": "2024-01-09",
        "status": "Approved"
    }]
}))]
pub struct CalendarRequest {
    /// Employee `JoiningDate`
    #[serde(alias = "JoiningDate", alias = "joining_date")]
    pub join_date: String,
    /// Reference date, defaults to the server's local date
    #[schema(format = "date", example = "2024-01-10")]
    pub today: Option<String>,
    #[serde(default)]
    pub leaves: Vec<LeaveRecord>,
}

impl CalendarRequest {
    fn calendar(&self) -> Result<AttendanceCalendar, CalendarError> {
        let today = match self.today.as_deref() {
            Some(raw) => parse_calendar_date(raw)
                .ok_or_else(|| CalendarError::InvalidToday(raw.to_string()))?,
            None => Local::now().date_naive(),
        };
        AttendanceCalendar::new(&self.join_date, today, &self.leaves)
    }
}

#[derive(Serialize, ToSchema)]
pub struct SummaryResponse {
    pub summary: AttendanceSummary,
    pub intervals: Vec<ExpandedLeaveInterval>,
}

#[derive(Serialize, ToSchema)]
#[schema(example = json!({ "months": ["2023-12", "2024-01"], "selected": 1 }))]
pub struct MonthsResponse {
    pub months: Vec<String>,
    pub selected: usize,
}

#[derive(Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct MonthQuery {
    /// Calendar year to show
    #[schema(example = 2024)]
    pub year: Option<i32>,
    /// Month to show, 1-12
    #[schema(example = 1)]
    pub month: Option<u32>,
    /// Move one month from the selected one
    pub step: Option<Step>,
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Next,
    Previous,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthView {
    #[schema(example = 2024)]
    pub year: i32,
    #[schema(example = 1)]
    pub month: u32,
    /// Carousel position of this month
    pub index: usize,
    pub total_months: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub cells: Vec<DayCell>,
}

/// Attendance summary for one employee
#[utoipa::path(
    post,
    path = "/api/calendar/summary",
    request_body(
        content = CalendarRequest,
        description = "Join date and leave history",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Present/absent counts and approved intervals", body = SummaryResponse),
        (status = 400, description = "Join date or today could not be parsed, or tenure too long", body = Object, example = json!({
            "message": "Invalid join date: 01/01/2024"
        })),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Calendar"
)]
pub async fn summary(
    auth: AuthUser,
    payload: web::Json<CalendarRequest>,
) -> actix_web::Result<impl Responder> {
    auth.require(Capability::ViewAttendance)?;

    let calendar = payload.calendar()?;
    let summary = calendar.summary();

    tracing::debug!(
        user_id = auth.user_id,
        username = %auth.username,
        employee_id = ?auth.employee_id,
        present = summary.present_days,
        absent = summary.absent_days,
        "Attendance summary computed"
    );

    Ok(HttpResponse::Ok().json(SummaryResponse {
        summary,
        intervals: calendar.leaves.intervals,
    }))
}

/// Months navigable in the calendar carousel
#[utoipa::path(
    post,
    path = "/api/calendar/months",
    request_body(content = CalendarRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Months from join month to current month", body = MonthsResponse),
        (status = 400, description = "Join date or today could not be parsed, or tenure too long"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Calendar"
)]
pub async fn months(
    auth: AuthUser,
    payload: web::Json<CalendarRequest>,
) -> actix_web::Result<impl Responder> {
    auth.require(Capability::ViewAttendance)?;

    let carousel = payload.calendar()?.carousel();

    Ok(HttpResponse::Ok().json(MonthsResponse {
        months: carousel
            .months()
            .iter()
            .map(|m| m.format("%Y-%m").to_string())
            .collect(),
        selected: carousel.index(),
    }))
}

/// Day grid for one month
///
/// Without `year`/`month`, or with a month outside the carousel, the current
/// month is returned. `step` then moves one month, clamped to the carousel.
#[utoipa::path(
    post,
    path = "/api/calendar/month",
    params(MonthQuery),
    request_body(content = CalendarRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Day cells for the month", body = MonthView),
        (status = 400, description = "Join date or today could not be parsed, or tenure too long"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Calendar"
)]
pub async fn month(
    auth: AuthUser,
    query: web::Query<MonthQuery>,
    payload: web::Json<CalendarRequest>,
) -> actix_web::Result<impl Responder> {
    auth.require(Capability::ViewAttendance)?;

    let calendar = payload.calendar()?;
    let mut carousel = calendar.carousel();

    if let (Some(year), Some(month)) = (query.year, query.month) {
        if !carousel.select(year, month) {
            tracing::debug!(year, month, "Requested month outside carousel, showing current");
        }
    }

    match query.step {
        Some(Step::Next) => carousel.next(),
        Some(Step::Previous) => carousel.previous(),
        None => {}
    }

    let current = carousel.current();

    Ok(HttpResponse::Ok().json(MonthView {
        year: current.year(),
        month: current.month(),
        index: carousel.index(),
        total_months: carousel.len(),
        has_previous: carousel.has_previous(),
        has_next: carousel.has_next(),
        cells: calendar.month(current.year(), current.month()),
    }))
}
