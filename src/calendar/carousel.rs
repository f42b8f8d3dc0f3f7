use chrono::{Datelike, NaiveDate};

use super::dates::{month_start, next_month_start};

/// Cursor over the months from the join month to the current month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCarousel {
    months: Vec<NaiveDate>,
    cursor: usize,
}

impl MonthCarousel {
    /// Starts on the current month. A join date after `today` still yields
    /// the join month as the single entry.
    pub fn new(join_date: NaiveDate, today: NaiveDate) -> Self {
        let first = month_start(join_date);
        let last = month_start(today);

        let mut months = vec![first];
        let mut current = first;
        while current < last {
            match next_month_start(current) {
                Some(next) => {
                    months.push(next);
                    current = next;
                }
                None => break,
            }
        }

        let cursor = months.len() - 1;
        Self { months, cursor }
    }

    pub fn months(&self) -> &[NaiveDate] {
        &self.months
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn index(&self) -> usize {
        self.cursor
    }

    pub fn last_index(&self) -> usize {
        self.months.len() - 1
    }

    /// First day of the selected month.
    pub fn current(&self) -> NaiveDate {
        self.months[self.cursor]
    }

    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    pub fn has_next(&self) -> bool {
        self.cursor < self.last_index()
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.cursor += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.has_previous() {
            self.cursor -= 1;
        }
    }

    /// Jump to `year`/`month` if it is in range. Returns whether the cursor moved.
    pub fn select(&mut self, year: i32, month: u32) -> bool {
        match self
            .months
            .iter()
            .position(|m| m.year() == year && m.month() == month)
        {
            Some(idx) => {
                self.cursor = idx;
                true
            }
            None => false,
        }
    }
}
