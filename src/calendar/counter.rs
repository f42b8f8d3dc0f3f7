use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::dates::{days_inclusive, is_sunday};
use super::normalizer::NormalizedLeaves;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    #[schema(example = 7)]
    pub present_days: u32,
    #[schema(example = 2)]
    pub absent_days: u32,
    #[schema(example = 1)]
    pub leave_application_count: u32,
}

/// Non-Sunday days in `[join_date, today]` that are not on approved leave.
/// Zero when `join_date` is after `today`.
pub fn present_days(join_date: NaiveDate, today: NaiveDate, leaves: &NormalizedLeaves) -> u32 {
    days_inclusive(join_date, today)
        .filter(|d| !is_sunday(*d) && !leaves.is_on_leave(*d))
        .count() as u32
}

/// Non-Sunday days summed over every approved interval.
///
/// Not clipped to the tenure window and not deduplicated across overlapping
/// intervals.
pub fn absent_days(leaves: &NormalizedLeaves) -> u32 {
    leaves
        .intervals
        .iter()
        .flat_map(|i| i.dates.iter())
        .filter(|d| !is_sunday(**d))
        .count() as u32
}

pub fn summarize(join_date: NaiveDate, today: NaiveDate, leaves: &NormalizedLeaves) -> AttendanceSummary {
    AttendanceSummary {
        present_days: present_days(join_date, today, leaves),
        absent_days: absent_days(leaves),
        leave_application_count: leaves.intervals.len() as u32,
    }
}
