use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::dates::{days_inclusive, is_sunday, month_bounds};
use super::normalizer::{ExpandedLeaveInterval, NormalizedLeaves};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DayStatus {
    Future,
    BeforeJoin,
    OnLeave,
    Present,
    /// Sunday inside the tenure window, rendered as a neutral cell.
    #[serde(rename = "excluded-weekend-fallback")]
    Weekend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DayCell {
    #[schema(value_type = String, format = "date", example = "2024-01-08")]
    pub date: NaiveDate,
    pub status: DayStatus,
    /// Interval shown in the tooltip for this day.
    pub leave: Option<ExpandedLeaveInterval>,
}

pub fn classify(
    date: NaiveDate,
    join_date: NaiveDate,
    today: NaiveDate,
    leaves: &NormalizedLeaves,
) -> DayStatus {
    if date > today {
        DayStatus::Future
    } else if date < join_date {
        DayStatus::BeforeJoin
    } else if leaves.is_on_leave(date) {
        DayStatus::OnLeave
    } else if !is_sunday(date) {
        DayStatus::Present
    } else {
        DayStatus::Weekend
    }
}

/// One cell per day of `year`/`month`, first to last. Empty for an invalid month.
pub fn build_month(
    year: i32,
    month: u32,
    join_date: NaiveDate,
    today: NaiveDate,
    leaves: &NormalizedLeaves,
) -> Vec<DayCell> {
    let Some((first, last)) = month_bounds(year, month) else {
        return Vec::new();
    };

    days_inclusive(first, last)
        .map(|date| DayCell {
            date,
            status: classify(date, join_date, today, leaves),
            leave: leaves.interval_for(date).cloned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::normalizer::normalize;
    use crate::calendar::normalizer::tests::leave;
    use crate::model::leave_record::LeaveStatus::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn month_lengths() {
        let leaves = NormalizedLeaves::default();
        let join = d(2020, 1, 1);
        let today = d(2030, 1, 1);

        assert_eq!(build_month(2024, 2, join, today, &leaves).len(), 29);
        assert_eq!(build_month(2023, 2, join, today, &leaves).len(), 28);
        assert_eq!(build_month(2024, 4, join, today, &leaves).len(), 30);
        assert_eq!(build_month(2024, 12, join, today, &leaves).len(), 31);
        assert!(build_month(2024, 13, join, today, &leaves).is_empty());

        let cells = build_month(2024, 12, join, today, &leaves);
        assert_eq!(cells.first().map(|c| c.date), Some(d(2024, 12, 1)));
        assert_eq!(cells.last().map(|c| c.date), Some(d(2024, 12, 31)));
    }

    #[test]
    fn status_priority() {
        let leaves = normalize(&[leave("a", "2024-01-03", "2024-01-12", Approved)]);
        let join = d(2024, 1, 5);
        let today = d(2024, 1, 10);

        let cells = build_month(2024, 1, join, today, &leaves);
        let status = |day: u32| cells[(day - 1) as usize].status;

        // leave before joining still reads as before-join
        assert_eq!(status(3), DayStatus::BeforeJoin);
        assert_eq!(status(5), DayStatus::OnLeave);
        // Sunday on leave is on-leave, not weekend
        assert_eq!(status(7), DayStatus::OnLeave);
        assert_eq!(status(10), DayStatus::OnLeave);
        // future leave days are future
        assert_eq!(status(11), DayStatus::Future);
        assert_eq!(status(12), DayStatus::Future);
    }

    #[test]
    fn present_and_weekend_cells() {
        let leaves = NormalizedLeaves::default();
        let cells = build_month(2024, 1, d(2024, 1, 1), d(2024, 1, 31), &leaves);

        assert_eq!(cells[0].status, DayStatus::Present);
        assert_eq!(cells[6].status, DayStatus::Weekend);
        assert!(cells.iter().all(|c| c.leave.is_none()));
        assert_eq!(
            cells.iter().filter(|c| c.status == DayStatus::Weekend).count(),
            4
        );
    }

    #[test]
    fn on_leave_cells_match_day_index_inside_month() {
        let leaves = normalize(&[
            leave("a", "2024-01-29", "2024-02-02", Approved),
            leave("b", "2024-02-14", "2024-02-16", Approved),
            leave("c", "2024-02-15", "2024-02-19", Approved),
        ]);
        let cells = build_month(2024, 2, d(2023, 6, 1), d(2024, 6, 1), &leaves);

        let in_month = leaves
            .day_index
            .iter()
            .filter(|day| **day >= d(2024, 2, 1) && **day <= d(2024, 2, 29))
            .count();
        let on_leave = cells.iter().filter(|c| c.status == DayStatus::OnLeave).count();

        assert_eq!(on_leave, in_month);
        assert_eq!(on_leave, 2 + 6);
    }

    #[test]
    fn tooltip_interval_is_first_match() {
        let leaves = normalize(&[
            leave("a", "2024-02-14", "2024-02-16", Approved),
            leave("b", "2024-02-15", "2024-02-19", Approved),
        ]);
        let cells = build_month(2024, 2, d(2023, 6, 1), d(2024, 6, 1), &leaves);
        let tooltip = |day: u32| cells[(day - 1) as usize].leave.as_ref().map(|i| i.id.clone());

        assert_eq!(tooltip(14).as_deref(), Some("a"));
        assert_eq!(tooltip(15).as_deref(), Some("a"));
        assert_eq!(tooltip(17).as_deref(), Some("b"));
        assert_eq!(tooltip(20), None);
    }

    #[test]
    fn status_serializes_as_tag() {
        assert_eq!(
            serde_json::to_value(DayStatus::BeforeJoin).unwrap(),
            serde_json::json!("before-join")
        );
        assert_eq!(
            serde_json::to_value(DayStatus::Weekend).unwrap(),
            serde_json::json!("excluded-weekend-fallback")
        );
    }
}
