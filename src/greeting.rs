//! Greeting banner resolution.
//!
//! The banner follows the hour of day, unless today is a holiday in
//! today's year, in which case the holiday name is shown instead.

use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::holidays::HolidayTable;

/// Time-of-day band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPart {
    Morning,
    Midday,
    Afternoon,
    Night,
}

impl DayPart {
    /// Band for an hour in `0..24`: before 12, before 15, before 18, rest.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            h if h < 12 => DayPart::Morning,
            h if h < 15 => DayPart::Midday,
            h if h < 18 => DayPart::Afternoon,
            _ => DayPart::Night,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            DayPart::Morning => "Selamat pagi! Semangat untuk hari ini! 🌅",
            DayPart::Midday => "Selamat siang! Semoga aktivitas berjalan lancar! ☀️",
            DayPart::Afternoon => "Selamat sore! Semoga hari Anda produktif! 🌇",
            DayPart::Night => "Selamat malam! Istirahat yang cukup! 🌙",
        }
    }
}

/// Resolved banner content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Greeting {
    TimeOfDay(DayPart),
    Holiday(String),
}

impl Greeting {
    pub fn is_holiday(&self) -> bool {
        matches!(self, Greeting::Holiday(_))
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Greeting::TimeOfDay(part) => f.write_str(part.message()),
            Greeting::Holiday(name) => write!(f, "🎉 {} 🎉", name),
        }
    }
}

/// Pick the greeting for an hour and a date (0-based month).
pub fn resolve(hour: u32, day: u32, month: u32, year: i32, holidays: &HolidayTable) -> Greeting {
    match holidays.lookup(year, month, day) {
        Some(name) => Greeting::Holiday(name.to_string()),
        None => Greeting::TimeOfDay(DayPart::from_hour(hour)),
    }
}

/// Greeting for a local timestamp
pub fn resolve_at(now: NaiveDateTime, holidays: &HolidayTable) -> Greeting {
    resolve(now.hour(), now.day(), now.month0(), now.year(), holidays)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(DayPart::from_hour(0), DayPart::Morning);
        assert_eq!(DayPart::from_hour(11), DayPart::Morning);
        assert_eq!(DayPart::from_hour(12), DayPart::Midday);
        assert_eq!(DayPart::from_hour(14), DayPart::Midday);
        assert_eq!(DayPart::from_hour(15), DayPart::Afternoon);
        assert_eq!(DayPart::from_hour(17), DayPart::Afternoon);
        assert_eq!(DayPart::from_hour(18), DayPart::Night);
        assert_eq!(DayPart::from_hour(23), DayPart::Night);
    }

    #[test]
    fn test_morning_without_holiday() {
        let table = HolidayTable::builtin();
        let greeting = resolve(9, 2, 0, 2024, &table);
        assert_eq!(greeting, Greeting::TimeOfDay(DayPart::Morning));
        assert_eq!(
            greeting.to_string(),
            "Selamat pagi! Semangat untuk hari ini! 🌅"
        );
    }

    #[test]
    fn test_holiday_overrides_time_of_day() {
        let table = HolidayTable::builtin();
        for year in [2024, 2025] {
            let greeting = resolve(9, 17, 7, year, &table);
            assert!(greeting.is_holiday());
            assert_eq!(greeting.to_string(), "🎉 Hari Kemerdekaan RI 🎉");
        }
    }

    #[test]
    fn test_holiday_outside_table_years() {
        let table = HolidayTable::builtin();
        assert_eq!(
            resolve(20, 17, 7, 2030, &table),
            Greeting::TimeOfDay(DayPart::Night)
        );
    }

    #[test]
    fn test_resolve_at() {
        let table = HolidayTable::builtin();
        let now = NaiveDate::from_ymd_opt(2024, 12, 25)
            .unwrap()
            .and_hms_opt(16, 0, 0)
            .unwrap();
        assert_eq!(resolve_at(now, &table).to_string(), "🎉 Hari Natal 🎉");

        let plain = NaiveDate::from_ymd_opt(2024, 12, 24)
            .unwrap()
            .and_hms_opt(16, 0, 0)
            .unwrap();
        assert_eq!(
            resolve_at(plain, &table),
            Greeting::TimeOfDay(DayPart::Afternoon)
        );
    }
}
