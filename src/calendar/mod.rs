//! Attendance calendar aggregation.
//!
//! Everything here is a pure function of the join date, today's date and the
//! leave list fetched by the caller.

pub mod carousel;
pub mod counter;
pub mod dates;
pub mod grid;
pub mod normalizer;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use chrono::NaiveDate;
use derive_more::Display;

use crate::model::leave_record::LeaveRecord;
use carousel::MonthCarousel;
use counter::AttendanceSummary;
use grid::DayCell;
use normalizer::NormalizedLeaves;

/// Longest tenure the counters will walk, about a century.
pub const MAX_TENURE_DAYS: i64 = 100 * 366;

#[derive(Debug, Display)]
pub enum CalendarError {
    #[display(fmt = "Invalid join date: {}", _0)]
    InvalidJoinDate(String),
    #[display(fmt = "Invalid today date: {}", _0)]
    InvalidToday(String),
    #[display(fmt = "Join date {} is more than {} days before {}", join_date, MAX_TENURE_DAYS, today)]
    TenureTooLong { join_date: NaiveDate, today: NaiveDate },
}

impl std::error::Error for CalendarError {}

impl ResponseError for CalendarError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "message": self.to_string()
        }))
    }
}

/// Normalized inputs for one employee, shared by all calendar views.
#[derive(Debug, Clone)]
pub struct AttendanceCalendar {
    pub join_date: NaiveDate,
    pub today: NaiveDate,
    pub leaves: NormalizedLeaves,
}

impl AttendanceCalendar {
    pub fn new(join_date: &str, today: NaiveDate, records: &[LeaveRecord]) -> Result<Self, CalendarError> {
        let join_date = dates::parse_calendar_date(join_date)
            .ok_or_else(|| CalendarError::InvalidJoinDate(join_date.to_string()))?;

        if (today - join_date).num_days() > MAX_TENURE_DAYS {
            return Err(CalendarError::TenureTooLong { join_date, today });
        }

        Ok(Self {
            join_date,
            today,
            leaves: normalizer::normalize(records),
        })
    }

    pub fn summary(&self) -> AttendanceSummary {
        counter::summarize(self.join_date, self.today, &self.leaves)
    }

    pub fn carousel(&self) -> MonthCarousel {
        MonthCarousel::new(self.join_date, self.today)
    }

    pub fn month(&self, year: i32, month: u32) -> Vec<DayCell> {
        grid::build_month(year, month, self.join_date, self.today, &self.leaves)
    }
}
