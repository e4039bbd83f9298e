//! Calendar engine - month grid computation
//!
//! Turns a (year, month) cursor into the cells of a Sunday-first month grid:
//!
//! ```text
//!  M  S  S  R  K  J  S
//!  .  1  2  3  4  5  6     <- one leading blank: 1 Jan 2024 is a Monday
//!  7  8  9 10 11 12 13
//! ...
//! ```
//!
//! Rendering is a pure function of the cursor, the holiday table and
//! today's date; nothing here touches the clock.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::holidays::{HolidayKey, HolidayTable};


/// Number of columns in the grid (one per weekday)
pub const WEEK_LEN: usize = 7;

/// Navigation step for the month cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

impl Step {
    pub fn delta(self) -> i32 {
        match self {
            Step::Previous => -1,
            Step::Next => 1,
        }
    }
}

/// Error parsing a `YYYY-MM` month argument
#[derive(Debug, Error, PartialEq)]
pub enum CursorParseError {
    #[error("expected YYYY-MM, got `{0}`")]
    Format(String),
    #[error("month `{0}` is out of range")]
    OutOfRange(String),
}

/// The (year, month) the calendar is showing.
///
/// Month is 0-based and always within `0..=11`. The cursor keeps the first
/// day of the month, so every cursor maps to a real date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthCursor {
    first: NaiveDate,
}

impl MonthCursor {
    /// Cursor for a year and 0-based month; `None` if the month is not in
    /// `0..=11` or the year is outside the representable date range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if month > 11 {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month + 1, 1).map(|first| Self { first })
    }

    /// Cursor for the month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 0-based month
    pub fn month(&self) -> u32 {
        self.first.month0()
    }

    /// The neighbouring month in the given direction, wrapping the month
    /// and carrying into the year. `None` only at the edge of the date range.
    pub fn stepped(&self, step: Step) -> Option<Self> {
        let mut year = self.year();
        let mut month = self.month() as i32 + step.delta();
        if month > 11 {
            month = 0;
            year += 1;
        } else if month < 0 {
            month = 11;
            year -= 1;
        }
        Self::new(year, month as u32)
    }

    /// Move the cursor one month. Returns false (and stays put) at the edge
    /// of the date range.
    pub fn navigate(&mut self, step: Step) -> bool {
        match self.stepped(step) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }

    /// Days in the month: the day before the first of the next month.
    pub fn days_in_month(&self) -> u32 {
        self.stepped(Step::Next)
            .and_then(|next| next.first.pred_opt())
            .map(|last| last.day())
            // December of the last representable year
            .unwrap_or(31)
    }

    /// Weekday of the 1st, 0 = Sunday .. 6 = Saturday
    pub fn starting_weekday(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    /// Whether `date` falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month0() == self.month()
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month() + 1)
    }
}

impl FromStr for MonthCursor {
    type Err = CursorParseError;

    /// Parse `YYYY-MM` with a 1-based month.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (year, month) = s
            .rsplit_once('-')
            .ok_or_else(|| CursorParseError::Format(s.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| CursorParseError::Format(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| CursorParseError::Format(s.to_string()))?;
        if !(1..=12).contains(&month) {
            return Err(CursorParseError::OutOfRange(s.to_string()));
        }
        Self::new(year, month - 1).ok_or_else(|| CursorParseError::OutOfRange(s.to_string()))
    }
}

/// One cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    /// Leading blank before day 1
    OtherMonth,
    Day {
        day: u32,
        is_today: bool,
        is_holiday: bool,
    },
}

impl DayCell {
    pub fn day(&self) -> Option<u32> {
        match self {
            DayCell::Day { day, .. } => Some(*day),
            DayCell::OtherMonth => None,
        }
    }

    pub fn is_today(&self) -> bool {
        matches!(self, DayCell::Day { is_today: true, .. })
    }

    pub fn is_holiday(&self) -> bool {
        matches!(self, DayCell::Day { is_holiday: true, .. })
    }

    #[allow(dead_code)] // Used in tests
    pub fn is_other_month(&self) -> bool {
        matches!(self, DayCell::OtherMonth)
    }
}

/// Rendered month: leading blanks followed by one cell per day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    cursor: MonthCursor,
    leading_blanks: usize,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    /// All cells in display order, blanks included
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn leading_blanks(&self) -> usize {
        self.leading_blanks
    }

    pub fn days_in_month(&self) -> u32 {
        (self.cells.len() - self.leading_blanks) as u32
    }

    /// Cell index of a day of the month
    pub fn index_of_day(&self, day: u32) -> Option<usize> {
        if day == 0 || day > self.days_in_month() {
            return None;
        }
        Some(self.leading_blanks + day as usize - 1)
    }

    pub fn cell_for_day(&self, day: u32) -> Option<&DayCell> {
        self.index_of_day(day).and_then(|i| self.cells.get(i))
    }

    /// Number of grid rows needed (4 to 6)
    pub fn row_count(&self) -> usize {
        self.cells.len().div_ceil(WEEK_LEN)
    }

    /// Cells grouped into weeks
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(WEEK_LEN)
    }
}

/// Compute the grid for `cursor`, flagging today's cell and holidays.
pub fn render(cursor: MonthCursor, holidays: &HolidayTable, today: NaiveDate) -> MonthGrid {
    let leading_blanks = cursor.starting_weekday() as usize;
    let days_in_month = cursor.days_in_month();
    let showing_today = cursor.contains(today);

    let mut cells = Vec::with_capacity(leading_blanks + days_in_month as usize);
    cells.extend(std::iter::repeat(DayCell::OtherMonth).take(leading_blanks));

    for day in 1..=days_in_month {
        let key = HolidayKey::new(day, cursor.month() + 1);
        cells.push(DayCell::Day {
            day,
            is_today: showing_today && today.day() == day,
            is_holiday: holidays.get(cursor.year(), &key).is_some(),
        });
    }

    MonthGrid {
        cursor,
        leading_blanks,
        cells,
    }
}
