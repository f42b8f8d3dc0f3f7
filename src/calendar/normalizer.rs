use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::dates::{days_inclusive, parse_calendar_date};
use crate::model::leave_record::LeaveRecord;

/// An approved leave expanded into its individual days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedLeaveInterval {
    pub id: String,
    #[serde(rename = "type")]
    pub leave_type: String,
    pub reason: String,
    #[schema(value_type = String, format = "date", example = "2024-01-08")]
    pub start: NaiveDate,
    #[schema(value_type = String, format = "date", example = "2024-01-09")]
    pub end: NaiveDate,
    /// Calendar days in `[start, end]`, Sundays included.
    pub total_days: u32,
    #[schema(value_type = Vec<String>)]
    pub dates: Vec<NaiveDate>,
}

impl ExpandedLeaveInterval {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedLeaves {
    pub intervals: Vec<ExpandedLeaveInterval>,
    /// Every day covered by at least one approved interval.
    pub day_index: BTreeSet<NaiveDate>,
}

impl NormalizedLeaves {
    pub fn is_on_leave(&self, date: NaiveDate) -> bool {
        self.day_index.contains(&date)
    }

    /// First interval, in input order, covering `date`.
    pub fn interval_for(&self, date: NaiveDate) -> Option<&ExpandedLeaveInterval> {
        self.intervals.iter().find(|i| i.contains(date))
    }
}

/// Longest single leave accepted, in calendar days.
pub const MAX_LEAVE_SPAN_DAYS: i64 = 366;

/// Keep approved records and expand each into its days.
///
/// Records with an unparseable, inverted or over-long range are skipped with
/// a warning.
pub fn normalize(records: &[LeaveRecord]) -> NormalizedLeaves {
    let mut out = NormalizedLeaves::default();

    for record in records.iter().filter(|r| r.is_approved()) {
        let Some(interval) = expand(record) else {
            continue;
        };
        out.day_index.extend(interval.dates.iter().copied());
        out.intervals.push(interval);
    }

    out
}

fn expand(record: &LeaveRecord) -> Option<ExpandedLeaveInterval> {
    let (Some(start), Some(end)) = (
        parse_calendar_date(&record.from),
        parse_calendar_date(&record.to),
    ) else {
        tracing::warn!(
            leave_id = %record.id,
            from = %record.from,
            to = %record.to,
            "Skipping leave record with unparseable dates"
        );
        return None;
    };

    if start > end {
        tracing::warn!(leave_id = %record.id, %start, %end, "Skipping leave record ending before it starts");
        return None;
    }

    let span = (end - start).num_days() + 1;
    if span > MAX_LEAVE_SPAN_DAYS {
        tracing::warn!(
            leave_id = %record.id,
            %start,
            %end,
            span,
            max = MAX_LEAVE_SPAN_DAYS,
            "Skipping leave record longer than the maximum span"
        );
        return None;
    }

    let dates: Vec<NaiveDate> = days_inclusive(start, end).collect();

    Some(ExpandedLeaveInterval {
        id: record.id.clone(),
        leave_type: record.leave_type.clone(),
        reason: record.reason.clone(),
        start,
        end,
        total_days: dates.len() as u32,
        dates,
    })
}
