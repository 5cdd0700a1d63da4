//! Calendar mapping from grid coordinates to dates.
//!
//! Contribution-style views lay a year out as columns of weeks with Sunday as
//! the first row, so column 0 begins on the Sunday on or before January 1 of
//! the target year. Cells painted before January 1 or after December 31 map
//! to dates in the neighboring year and are filtered by the planner.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::CalendarError;

/// Grid-to-date mapper for one target year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCalendar {
    year: i32,
    anchor: NaiveDate,
}

impl YearCalendar {
    /// Build the calendar for `year`, anchoring cell (0, 0) on the most
    /// recent Sunday on or before January 1. When January 1 is itself a
    /// Sunday, it is the anchor.
    pub fn new(year: i32) -> Result<Self, CalendarError> {
        let jan_1 = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or(CalendarError::YearOutOfRange(year))?;
        let days_back = i64::from(jan_1.weekday().num_days_from_sunday());
        Ok(Self {
            year,
            anchor: jan_1 - Duration::days(days_back),
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Date assigned to grid coordinate (0, 0).
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Date of the cell at (`day_of_week`, `week`). Pure and strictly
    /// increasing in `week * 7 + day_of_week`; `day_of_week` is expected in
    /// `0..=6` with 0 = Sunday.
    pub fn map_cell(&self, week: usize, day_of_week: usize) -> NaiveDate {
        self.anchor + Duration::days((week * 7 + day_of_week) as i64)
    }

    /// Whether `date` falls inside the target year.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn anchor_for_2024_is_the_previous_sunday() {
        // January 1, 2024 is a Monday.
        let calendar = YearCalendar::new(2024).unwrap();
        assert_eq!(calendar.anchor(), date(2023, 12, 31));
        assert_eq!(calendar.map_cell(0, 0), date(2023, 12, 31));
        assert_eq!(calendar.map_cell(0, 1), date(2024, 1, 1));
    }

    #[test]
    fn anchor_stays_on_january_1_when_it_is_a_sunday() {
        // January 1, 2023 is a Sunday.
        let calendar = YearCalendar::new(2023).unwrap();
        assert_eq!(calendar.anchor(), date(2023, 1, 1));
        assert_eq!(calendar.map_cell(0, 0), date(2023, 1, 1));
    }

    #[test]
    fn mapping_is_strictly_increasing_in_cell_offset() {
        let calendar = YearCalendar::new(2024).unwrap();
        let mut previous = calendar.map_cell(0, 0);
        for offset in 1..(52 * 7) {
            let next = calendar.map_cell(offset / 7, offset % 7);
            assert_eq!(next - previous, Duration::days(1));
            previous = next;
        }
    }

    #[test]
    fn contains_filters_neighboring_years() {
        let calendar = YearCalendar::new(2024).unwrap();
        assert!(!calendar.contains(date(2023, 12, 31)));
        assert!(calendar.contains(date(2024, 1, 1)));
        assert!(calendar.contains(date(2024, 12, 31)));
        assert!(!calendar.contains(date(2025, 1, 1)));
    }

    #[test]
    fn week_columns_advance_by_seven_days() {
        let calendar = YearCalendar::new(2024).unwrap();
        assert_eq!(
            calendar.map_cell(1, 0) - calendar.map_cell(0, 0),
            Duration::days(7)
        );
        assert_eq!(calendar.map_cell(2, 3), date(2024, 1, 17));
    }
}
