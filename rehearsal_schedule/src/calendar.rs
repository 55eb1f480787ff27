//! Month grid model for the mini calendar.
//!
//! A grid is always six Monday-first weeks (42 cells). Days from the
//! neighbouring months pad the first and last rows and are flagged
//! `outside_month`.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;

use crate::core::key_dates::KeyDate;
use crate::time::{parse_canonical, to_canonical};

/// Cells in a grid: six weeks of seven days.
pub const GRID_CELLS: usize = 42;

/// Column headers, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["L", "M", "M", "J", "V", "S", "D"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    /// Canonical date of the cell.
    pub date: String,
    /// Day of month shown in the cell.
    pub day: u32,
    pub outside_month: bool,
    pub has_key_date: bool,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<DayCell>,
    #[serde(skip)]
    today: String,
    #[serde(skip)]
    marked: BTreeSet<String>,
}

impl MonthGrid {
    /// Build the grid for `year`/`month`.
    ///
    /// # Arguments
    /// * `year`, `month` - Month to display (`month` is 1-based)
    /// * `today` - Canonical reference date, highlighted when visible
    /// * `key_dates` - Milestones; cells on a dated milestone are flagged
    ///
    /// # Returns
    /// `None` if `month` is not in `1..=12` or the year is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use rehearsal_schedule::calendar::MonthGrid;
    /// use rehearsal_schedule::core::key_dates::default_key_dates;
    ///
    /// let grid = MonthGrid::build(2025, 9, "2025-09-15", &default_key_dates()).unwrap();
    /// assert_eq!(grid.cells.len(), 42);
    /// // September 2025 starts on a Monday.
    /// assert_eq!(grid.cells[0].date, "2025-09-01");
    /// ```
    pub fn build(year: i32, month: u32, today: &str, key_dates: &[KeyDate]) -> Option<Self> {
        let marked = key_dates
            .iter()
            .filter_map(|k| k.date.clone())
            .collect::<BTreeSet<_>>();
        Self::with_marks(year, month, today.to_string(), marked)
    }

    /// Grid for the month containing `today`.
    pub fn containing_today(today: &str, key_dates: &[KeyDate]) -> Option<Self> {
        let date = parse_canonical(today)?;
        Self::build(date.year(), date.month(), today, key_dates)
    }

    /// The month before this one, with the same reference date and marks.
    pub fn previous(&self) -> Option<Self> {
        let (year, month) = if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        };
        Self::with_marks(year, month, self.today.clone(), self.marked.clone())
    }

    /// The month after this one, with the same reference date and marks.
    pub fn next(&self) -> Option<Self> {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        Self::with_marks(year, month, self.today.clone(), self.marked.clone())
    }

    /// Cells belonging to the displayed month.
    pub fn month_days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter(|c| !c.outside_month)
    }

    fn with_marks(
        year: i32,
        month: u32,
        today: String,
        marked: BTreeSet<String>,
    ) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let lead = i64::from(first.weekday().num_days_from_monday());
        let start = first - Duration::days(lead);

        let cells = (0..GRID_CELLS as i64)
            .map(|offset| {
                let date = start + Duration::days(offset);
                let canonical = to_canonical(date);
                DayCell {
                    day: date.day(),
                    outside_month: date.month() != month || date.year() != year,
                    has_key_date: marked.contains(&canonical),
                    is_today: canonical == today,
                    date: canonical,
                }
            })
            .collect();

        Some(Self {
            year,
            month,
            cells,
            today,
            marked,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::key_dates::default_key_dates;

    #[test]
    fn test_grid_pads_with_neighbouring_months() {
        // October 2025 starts on a Wednesday.
        let grid = MonthGrid::build(2025, 10, "2025-10-18", &default_key_dates()).unwrap();

        assert_eq!(grid.cells.len(), GRID_CELLS);
        assert_eq!(grid.cells[0].date, "2025-09-29");
        assert!(grid.cells[0].outside_month);
        assert_eq!(grid.cells[2].date, "2025-10-01");
        assert!(!grid.cells[2].outside_month);
        assert_eq!(grid.month_days().count(), 31);

        let last = &grid.cells[GRID_CELLS - 1];
        assert_eq!(last.date, "2025-11-09");
        assert!(last.outside_month);
    }

    #[test]
    fn test_key_dates_and_today_flags() {
        let grid = MonthGrid::build(2025, 10, "2025-10-18", &default_key_dates()).unwrap();

        let flagged: Vec<_> = grid
            .cells
            .iter()
            .filter(|c| c.has_key_date)
            .map(|c| c.date.as_str())
            .collect();
        assert_eq!(flagged, vec!["2025-10-18", "2025-10-29"]);

        let today: Vec<_> = grid.cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].day, 18);
    }

    #[test]
    fn test_navigation_wraps_years() {
        let grid = MonthGrid::build(2025, 1, "2025-01-03", &[]).unwrap();

        let previous = grid.previous().unwrap();
        assert_eq!((previous.year, previous.month), (2024, 12));
        assert!(previous.cells.iter().any(|c| c.is_today));

        let next = previous.next().unwrap().next().unwrap();
        assert_eq!((next.year, next.month), (2025, 2));
    }

    #[test]
    fn test_navigation_keeps_marks() {
        let grid = MonthGrid::build(2025, 9, "2025-09-01", &default_key_dates()).unwrap();
        let october = grid.next().unwrap();
        assert!(october.cells.iter().any(|c| c.date == "2025-10-29" && c.has_key_date));
    }

    #[test]
    fn test_invalid_month() {
        assert!(MonthGrid::build(2025, 13, "2025-09-01", &[]).is_none());
        assert!(MonthGrid::containing_today("", &[]).is_none());
    }

    #[test]
    fn test_containing_today() {
        let grid = MonthGrid::containing_today("2025-02-14", &[]).unwrap();
        assert_eq!((grid.year, grid.month), (2025, 2));
        // February 2025 starts on a Saturday.
        assert_eq!(grid.cells[0].date, "2025-01-27");
    }
}
