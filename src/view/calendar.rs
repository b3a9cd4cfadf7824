use chrono::{Datelike, NaiveDate};

use crate::models::{Priority, Task};

/// Urgency flag for a calendar day.
///
/// A day with any incomplete high-priority task is `High`; otherwise any
/// incomplete medium-priority task makes it `Medium`; otherwise `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFlag {
    None,
    Medium,
    High,
}

/// One day of the month with the tasks due on it.
#[derive(Debug, Clone)]
pub struct DayCell {
    pub day: u32,
    pub tasks: Vec<Task>,
    pub flag: DayFlag,
}

/// A month of tasks, laid out for a 7-column Sunday-first grid.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub year: i32,
    /// 1-12.
    pub month: u32,
    /// Blank cells before day 1 (weekday of the 1st, Sunday = 0).
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    /// Project the task list onto a month. Tasks land on a day only when
    /// their due-date string equals that day's zero-padded `YYYY-MM-DD`;
    /// there is no range or date-object comparison.
    pub fn project(tasks: &[Task], year: i32, month: u32) -> Self {
        let leading_blanks = NaiveDate::from_ymd_opt(year, month, 1)
            .map(|d| d.weekday().num_days_from_sunday())
            .unwrap_or(0);

        let days = (1..=days_in_month(year, month))
            .map(|day| {
                let date_str = format!("{year:04}-{month:02}-{day:02}");
                let day_tasks: Vec<Task> = tasks
                    .iter()
                    .filter(|t| t.due_date == date_str)
                    .cloned()
                    .collect();
                let flag = flag_for(&day_tasks);
                DayCell {
                    day,
                    tasks: day_tasks,
                    flag,
                }
            })
            .collect();

        Self {
            year,
            month,
            leading_blanks,
            days,
        }
    }

    /// Days with at least one task due.
    pub fn busy_days(&self) -> impl Iterator<Item = &DayCell> + '_ {
        self.days.iter().filter(|cell| !cell.tasks.is_empty())
    }
}

fn flag_for(tasks: &[Task]) -> DayFlag {
    let pending = |p: Priority| tasks.iter().any(|t| t.priority == p && !t.completed);
    if pending(Priority::High) {
        DayFlag::High
    } else if pending(Priority::Medium) {
        DayFlag::Medium
    } else {
        DayFlag::None
    }
}

/// Number of days in a month, from the day before the 1st of the next one.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2023, 12), 31);
        assert_eq!(days_in_month(2023, 11), 30);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29); // leap year
    }

    #[test]
    fn test_leading_blanks_sunday_first() {
        // 2023-12-01 was a Friday
        let grid = MonthGrid::project(&[], 2023, 12);
        assert_eq!(grid.leading_blanks, 5);

        // 2023-10-01 was a Sunday
        let grid = MonthGrid::project(&[], 2023, 10);
        assert_eq!(grid.leading_blanks, 0);
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "Unknown");
    }
}
