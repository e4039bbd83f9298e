//! Plain-text rendering of the dashboard, used by `--once`.
//!
//! Each grid cell is four characters wide: `  7 ` for a plain day, `  1*`
//! for a holiday and `[15]` for today.

use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::calendar::{DayCell, MonthGrid, WEEK_LEN};
use crate::greeting::Greeting;
use crate::holidays::HolidayTable;
use crate::locale;

const CELL_WIDTH: usize = 4;

fn format_cell(cell: &DayCell) -> String {
    match *cell {
        DayCell::OtherMonth => " ".repeat(CELL_WIDTH),
        DayCell::Day { day, is_today: true, .. } => format!("[{:>2}]", day),
        DayCell::Day { day, is_holiday: true, .. } => format!("{:>3}*", day),
        DayCell::Day { day, .. } => format!("{:>3} ", day),
    }
}

/// Month title, weekday header and grid rows
pub fn format_month(grid: &MonthGrid) -> String {
    let cursor = grid.cursor();
    let width = CELL_WIDTH * WEEK_LEN;
    let mut out = String::new();

    let title = locale::month_title(cursor.year(), cursor.month());
    let _ = writeln!(out, "{:^width$}", title, width = width);

    let header: String = locale::WEEKDAY_INITIALS
        .iter()
        .map(|initial| format!("{:>3} ", initial))
        .collect();
    let _ = writeln!(out, "{}", header.trim_end());

    for week in grid.weeks() {
        let row: String = week.iter().map(format_cell).collect();
        let _ = writeln!(out, "{}", row.trim_end());
    }
    out
}

/// Full dashboard: clock line, greeting, month grid and the month's holidays
pub fn format_dashboard(
    now: NaiveDateTime,
    greeting: &Greeting,
    grid: &MonthGrid,
    holidays: &HolidayTable,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", locale::format_long_datetime(now));
    let _ = writeln!(out, "{}", greeting);
    let _ = writeln!(out);
    out.push_str(&format_month(grid));

    let cursor = grid.cursor();
    let month_holidays = holidays.month_holidays(cursor.year(), cursor.month());
    if !month_holidays.is_empty() {
        let _ = writeln!(out);
        for (day, name) in month_holidays {
            let _ = writeln!(out, "{:>3}  {}", day, name);
        }
    }
    out
}
