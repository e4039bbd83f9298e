//! National holiday lookup table.
//!
//! Holidays are keyed by year, then by a zero-padded `DD-MM` key. The
//! built-in table covers the Indonesian national holidays for 2024 and 2025;
//! a user TOML file can add years or override single entries:
//!
//! ```toml
//! [2026]
//! "01-01" = "Tahun Baru 2026 Masehi"
//! "17-08" = "Hari Kemerdekaan RI"
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while building a holiday table from user input
#[derive(Debug, Error)]
pub enum HolidayError {
    #[error("invalid year `{0}` in holiday table")]
    InvalidYear(String),
    #[error("invalid holiday key `{key}` for {year} (expected DD-MM)")]
    InvalidKey { year: i32, key: String },
    #[error("failed to read holiday file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed holiday table")]
    Syntax(#[from] toml::de::Error),
}

/// Zero-padded `DD-MM` date key, independent of year and weekday
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HolidayKey(String);

impl HolidayKey {
    /// Build a key from a day of month and a 1-based month.
    pub fn new(day: u32, month: u32) -> Self {
        Self(format!("{:02}-{:02}", day, month))
    }

    /// Parse a `DD-MM` key, rejecting anything that is not exactly two
    /// zero-padded digits on each side of the dash.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b'-' {
            return None;
        }
        let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
        if !digits.iter().all(u8::is_ascii_digit) {
            return None;
        }
        let day: u32 = s[0..2].parse().ok()?;
        let month: u32 = s[3..5].parse().ok()?;
        if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
            return None;
        }
        Some(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Day of month encoded in the key
    pub fn day(&self) -> u32 {
        self.0[0..2].parse().unwrap_or(0)
    }
}

impl fmt::Display for HolidayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// (year, day, month, name)
const BUILTIN: &[(i32, u32, u32, &str)] = &[
    (2024, 1, 1, "Tahun Baru 2024 Masehi"),
    (2024, 8, 2, "Tahun Baru Imlek 2575"),
    (2024, 11, 3, "Hari Raya Nyepi 1946 Saka"),
    (2024, 29, 3, "Wafat Isa Al-Masih"),
    (2024, 10, 4, "Hari Raya Idul Fitri 1445 H"),
    (2024, 11, 4, "Hari Raya Idul Fitri 1445 H"),
    (2024, 1, 5, "Hari Buruh Internasional"),
    (2024, 9, 5, "Kenaikan Isa Al-Masih"),
    (2024, 23, 5, "Hari Raya Waisak 2568 BE"),
    (2024, 1, 6, "Hari Lahir Pancasila"),
    (2024, 17, 6, "Hari Raya Idul Adha 1445 H"),
    (2024, 7, 7, "Tahun Baru Islam 1446 H"),
    (2024, 17, 8, "Hari Kemerdekaan RI"),
    (2024, 16, 9, "Maulid Nabi Muhammad SAW"),
    (2024, 25, 12, "Hari Natal"),
    (2025, 1, 1, "Tahun Baru 2025 Masehi"),
    (2025, 29, 1, "Tahun Baru Imlek 2576"),
    (2025, 3, 3, "Hari Raya Nyepi 1947 Saka"),
    (2025, 31, 3, "Maulid Nabi Muhammad SAW"),
    (2025, 18, 4, "Wafat Isa Al-Masih"),
    (2025, 30, 4, "Hari Raya Idul Fitri 1446 H"),
    // 01-05 is listed twice for 2025; the later entry wins
    (2025, 1, 5, "Hari Raya Idul Fitri 1446 H"),
    (2025, 1, 5, "Hari Buruh Internasional"),
    (2025, 29, 5, "Kenaikan Isa Al-Masih"),
    (2025, 30, 6, "Hari Raya Waisak 2569 BE"),
    (2025, 1, 6, "Hari Lahir Pancasila"),
    (2025, 7, 9, "Hari Raya Idul Adha 1446 H"),
    (2025, 27, 9, "Tahun Baru Islam 1447 H"),
    (2025, 17, 8, "Hari Kemerdekaan RI"),
    (2025, 25, 12, "Hari Natal"),
];

/// Read-only mapping year -> `DD-MM` -> holiday name
#[derive(Debug, Clone, Default)]
pub struct HolidayTable {
    years: HashMap<i32, HashMap<HolidayKey, String>>,
}

impl HolidayTable {
    /// Table with no entries
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in national holidays
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for &(year, day, month, name) in BUILTIN {
            table.insert(year, HolidayKey::new(day, month), name);
        }
        table
    }

    /// Insert or replace a single entry
    pub fn insert(&mut self, year: i32, key: HolidayKey, name: impl Into<String>) {
        self.years.entry(year).or_default().insert(key, name.into());
    }

    /// Merge `other` into this table; entries in `other` win.
    pub fn merge(&mut self, other: HolidayTable) {
        for (year, entries) in other.years {
            self.years.entry(year).or_default().extend(entries);
        }
    }

    /// Exact-match lookup of a key within a year
    pub fn get(&self, year: i32, key: &HolidayKey) -> Option<&str> {
        self.years
            .get(&year)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// Look up a holiday by year, 0-based month and day of month.
    pub fn lookup(&self, year: i32, month: u32, day: u32) -> Option<&str> {
        self.get(year, &HolidayKey::new(day, month + 1))
    }

    /// Holidays falling in the given 0-based month, ordered by day
    pub fn month_holidays(&self, year: i32, month: u32) -> Vec<(u32, &str)> {
        let suffix = format!("-{:02}", month + 1);
        let mut found: Vec<(u32, &str)> = self
            .years
            .get(&year)
            .into_iter()
            .flat_map(|entries| entries.iter())
            .filter(|(key, _)| key.as_str().ends_with(&suffix))
            .map(|(key, name)| (key.day(), name.as_str()))
            .collect();
        found.sort();
        found
    }

    /// Number of years with at least one entry
    pub fn year_count(&self) -> usize {
        self.years.len()
    }

    /// Total number of entries across all years
    pub fn len(&self) -> usize {
        self.years.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse a TOML holiday table (`[year]` tables of `"DD-MM" = "name"`).
    pub fn from_toml_str(content: &str) -> Result<Self, HolidayError> {
        let raw: BTreeMap<String, BTreeMap<String, String>> = toml::from_str(content)?;

        let mut table = Self::empty();
        for (year_str, entries) in raw {
            let year: i32 = year_str
                .trim()
                .parse()
                .map_err(|_| HolidayError::InvalidYear(year_str.clone()))?;
            for (key_str, name) in entries {
                let key = HolidayKey::parse(&key_str).ok_or(HolidayError::InvalidKey {
                    year,
                    key: key_str.clone(),
                })?;
                table.insert(year, key, name);
            }
        }
        Ok(table)
    }

    /// Load a TOML holiday table from disk.
    pub fn load_file(path: &Path) -> Result<Self, HolidayError> {
        let content = std::fs::read_to_string(path).map_err(|source| HolidayError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded {} holidays across {} years from {}",
            table.len(),
            table.year_count(),
            path.display()
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_zero_padding() {
        assert_eq!(HolidayKey::new(1, 1).as_str(), "01-01");
        assert_eq!(HolidayKey::new(17, 8).as_str(), "17-08");
        assert_eq!(HolidayKey::new(25, 12).as_str(), "25-12");
        assert_eq!(HolidayKey::new(9, 5).as_str().len(), 5);
    }

    #[test]
    fn test_key_parse() {
        assert_eq!(HolidayKey::parse("17-08"), Some(HolidayKey::new(17, 8)));
        assert!(HolidayKey::parse("1-8").is_none());
        assert!(HolidayKey::parse("17/08").is_none());
        assert!(HolidayKey::parse("32-01").is_none());
        assert!(HolidayKey::parse("01-13").is_none());
        assert!(HolidayKey::parse("00-01").is_none());
        assert!(HolidayKey::parse("+1-01").is_none());
    }

    #[test]
    fn test_builtin_lookup() {
        let table = HolidayTable::builtin();
        assert_eq!(table.lookup(2024, 0, 1), Some("Tahun Baru 2024 Masehi"));
        assert_eq!(table.lookup(2024, 7, 17), Some("Hari Kemerdekaan RI"));
        assert_eq!(table.lookup(2025, 7, 17), Some("Hari Kemerdekaan RI"));
        assert_eq!(table.lookup(2024, 0, 2), None);
    }

    #[test]
    fn test_lookup_is_year_scoped() {
        let table = HolidayTable::builtin();
        // 08-02 is Imlek in 2024 only
        assert!(table.lookup(2024, 1, 8).is_some());
        assert!(table.lookup(2025, 1, 8).is_none());
        assert!(table.lookup(2023, 0, 1).is_none());
    }

    #[test]
    fn test_duplicate_builtin_key_last_wins() {
        let table = HolidayTable::builtin();
        assert_eq!(table.lookup(2025, 4, 1), Some("Hari Buruh Internasional"));
    }

    #[test]
    fn test_month_holidays_sorted() {
        let table = HolidayTable::builtin();
        let april = table.month_holidays(2024, 3);
        assert_eq!(
            april,
            vec![
                (10, "Hari Raya Idul Fitri 1445 H"),
                (11, "Hari Raya Idul Fitri 1445 H"),
            ]
        );
        assert!(table.month_holidays(2024, 9).is_empty());
    }

    #[test]
    fn test_from_toml() {
        let table = HolidayTable::from_toml_str(
            r#"
            [2026]
            "01-01" = "Tahun Baru 2026 Masehi"
            "17-08" = "Hari Kemerdekaan RI"
            "#,
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(2026, 7, 17), Some("Hari Kemerdekaan RI"));
    }

    #[test]
    fn test_from_toml_rejects_bad_key() {
        let err = HolidayTable::from_toml_str("[2026]\n\"1-1\" = \"x\"\n").unwrap_err();
        assert!(matches!(err, HolidayError::InvalidKey { year: 2026, .. }));
    }

    #[test]
    fn test_from_toml_rejects_bad_year() {
        let err = HolidayTable::from_toml_str("[next]\n\"01-01\" = \"x\"\n").unwrap_err();
        assert!(matches!(err, HolidayError::InvalidYear(_)));
    }

    #[test]
    fn test_merge_overrides() {
        let mut table = HolidayTable::builtin();
        let mut extra = HolidayTable::empty();
        extra.insert(2024, HolidayKey::new(1, 1), "Tahun Baru");
        extra.insert(2026, HolidayKey::new(25, 12), "Hari Natal");
        table.merge(extra);

        assert_eq!(table.lookup(2024, 0, 1), Some("Tahun Baru"));
        assert_eq!(table.lookup(2026, 11, 25), Some("Hari Natal"));
        assert_eq!(table.year_count(), 3);
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holidays.toml");
        std::fs::write(&path, "[2027]\n\"17-08\" = \"Hari Kemerdekaan RI\"\n").unwrap();

        let table = HolidayTable::load_file(&path).unwrap();
        assert_eq!(table.lookup(2027, 7, 17), Some("Hari Kemerdekaan RI"));

        let missing = HolidayTable::load_file(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(HolidayError::Read { .. })));
    }
}
