//! Month-grid generation: the fixed 42-cell calendar view with spill-over
//! into the neighboring months, plus the date-key encoding shared with the
//! stats walk.

use chrono::{Datelike, Duration, NaiveDate};

/// Six weeks of seven days, enough to cover any month at any weekday offset.
pub const GRID_CELLS: usize = 42;

/// A month that has already been rolled into the `1..=12` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Accepts any 1-based month number (0, negative, or beyond 12) and rolls
    /// the overflow into the year, the same arithmetic that resolves day
    /// spill in the grid. Years are pinned to the span chrono can represent.
    pub fn normalize(year: i32, month: i32) -> Self {
        let months = year as i64 * 12 + month as i64 - 1;
        let year = months
            .div_euclid(12)
            .clamp((NaiveDate::MIN.year() + 1) as i64, (NaiveDate::MAX.year() - 1) as i64);
        Self {
            year: year as i32,
            month: months.rem_euclid(12) as u32 + 1,
        }
    }

    fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }
}

/// One of the 42 positions of a month view. Ephemeral: recomputed on every
/// call, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub key: String,
}

/// Build the 42-cell grid for a month, ordered left-to-right, top-to-bottom,
/// weeks starting on Sunday. Cells before the 1st and after the last day of
/// the month carry dates from the neighboring months.
pub fn month_grid(ym: YearMonth) -> Vec<GridCell> {
    let start = ym.first_day() - Duration::days(first_weekday_index(ym) as i64);
    (0..GRID_CELLS as i64)
        .map(|offset| {
            let date = start + Duration::days(offset);
            GridCell {
                in_current_month: date.year() == ym.year && date.month() == ym.month,
                key: date_key(date),
                date,
            }
        })
        .collect()
}

/// Weekday index of the 1st of the month, 0 = Sunday .. 6 = Saturday.
pub fn first_weekday_index(ym: YearMonth) -> u32 {
    ym.first_day().weekday().num_days_from_sunday()
}

pub fn days_in_month(ym: YearMonth) -> u32 {
    match ym.month {
        2 => {
            if is_leap_year(ym.year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Canonical zero-padded `YYYY-MM-DD` encoding used as the log key.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}
