//! Fixed Indonesian (`id-ID`) names and date formatting.

use chrono::{Datelike, NaiveDateTime, Timelike};

pub const MONTH_NAMES: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

pub const MONTH_NAMES_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Sunday first
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu",
];

pub const WEEKDAY_NAMES_SHORT: [&str; 7] = ["Min", "Sen", "Sel", "Rab", "Kam", "Jum", "Sab"];

/// Column headers of the calendar grid, Sunday first
pub const WEEKDAY_INITIALS: [&str; 7] = ["M", "S", "S", "R", "K", "J", "S"];

/// Name of a 0-based month. Out-of-range values fall back to the last month.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month as usize).min(11)]
}

/// Calendar title, e.g. `Januari 2024`
pub fn month_title(year: i32, month: u32) -> String {
    format!("{} {}", month_name(month), year)
}

/// Long clock line, e.g. `Sabtu, 17 Oktober 2026 pukul 09.05.03`
pub fn format_long_datetime(now: NaiveDateTime) -> String {
    format!(
        "{}, {} {} {} pukul {:02}.{:02}.{:02}",
        WEEKDAY_NAMES[now.weekday().num_days_from_sunday() as usize],
        now.day(),
        month_name(now.month0()),
        now.year(),
        now.hour(),
        now.minute(),
        now.second()
    )
}

/// Compact date for the sidebar, e.g. `Sab, 17 Okt`
pub fn format_short_date(now: NaiveDateTime) -> String {
    format!(
        "{}, {} {}",
        WEEKDAY_NAMES_SHORT[now.weekday().num_days_from_sunday() as usize],
        now.day(),
        MONTH_NAMES_SHORT[now.month0() as usize]
    )
}

/// Heading of the day-detail popup, e.g. `📅 17 Agustus 2024`
pub fn day_heading(day: u32, month: u32, year: i32) -> String {
    format!("📅 {} {} {}", day, month_name(month), year)
}

/// Shown for days without a holiday
pub const NO_EVENTS: &str = "Tidak ada kegiatan khusus.";
