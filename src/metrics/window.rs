//! Calendar-day keys and rolling windows
//!
//! "Today" is the local-device calendar date. Timestamps from the backend
//! come either zoned (RFC 3339) or naive; naive ones are already local
//! wall-clock and keep their own date, zoned ones are converted into the
//! bucketing timezone before truncation.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Format of every date key
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Length of the dashboard window
pub const DEFAULT_WINDOW_DAYS: usize = 7;

/// A calendar day, printed as `YYYY-MM-DD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build from year/month/day, `None` if the date does not exist
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// `MM-DD`, used for chart axis labels
    pub fn short_label(&self) -> String {
        self.0.format("%m-%d").to_string()
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DATE_KEY_FORMAT).map(Self)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        // Some endpoints return full datetimes where a date is expected
        let day = raw.get(..10).unwrap_or(&raw);
        day.parse().map_err(serde::de::Error::custom)
    }
}

/// An instant as the backend reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Carries an explicit offset (`...Z`, `...+02:00`)
    Zoned(DateTime<FixedOffset>),
    /// Local wall-clock without offset (`2024-03-11T10:15:30.123`)
    Naive(NaiveDateTime),
}

impl Timestamp {
    /// Calendar day of this instant as observed in `tz`.
    pub fn day_in<Tz: TimeZone>(&self, tz: &Tz) -> DateKey {
        match self {
            Timestamp::Zoned(dt) => DateKey(dt.with_timezone(tz).date_naive()),
            Timestamp::Naive(naive) => DateKey(naive.date()),
        }
    }

    /// Calendar day on the local device
    pub fn local_day(&self) -> DateKey {
        self.day_in(&Local)
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match DateTime::parse_from_rfc3339(s) {
            Ok(dt) => Ok(Timestamp::Zoned(dt)),
            Err(_) => s.parse::<NaiveDateTime>().map(Timestamp::Naive),
        }
    }
}

/// Today's date on the local device
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The `n` calendar days ending at `reference`, oldest first.
///
/// Pure in `reference`: repeated calls with the same date give the same keys.
/// The window never reaches before [`NaiveDate::MIN`]; when `n` is larger
/// than [`days_through`]`(reference)` the result starts at that date and has
/// exactly that many keys.
pub fn last_n_days(n: usize, reference: NaiveDate) -> Vec<DateKey> {
    let len = n.min(days_through(reference));
    let mut keys: Vec<DateKey> = std::iter::successors(Some(reference), |day| day.pred_opt())
        .take(len)
        .map(DateKey)
        .collect();
    keys.reverse();
    keys
}

/// Number of representable calendar days up to and including `reference`
pub fn days_through(reference: NaiveDate) -> usize {
    let before = reference.signed_duration_since(NaiveDate::MIN).num_days();
    usize::try_from(before)
        .map(|days| days.saturating_add(1))
        .unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_key_format_and_parse() {
        let key = DateKey::from_ymd(2024, 3, 1).unwrap();
        assert_eq!(key.to_string(), "2024-03-01");
        assert_eq!(key.short_label(), "03-01");
        assert_eq!("2024-03-01".parse::<DateKey>().unwrap(), key);
        assert!("2024-13-01".parse::<DateKey>().is_err());
        assert!(DateKey::from_ymd(2023, 2, 29).is_none());
    }

    #[test]
    fn test_date_key_serde() {
        let key: DateKey = serde_json::from_str("\"2024-03-10\"").unwrap();
        assert_eq!(key, DateKey::from_ymd(2024, 3, 10).unwrap());
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2024-03-10\"");

        let from_datetime: DateKey = serde_json::from_str("\"2024-03-10T00:00:00\"").unwrap();
        assert_eq!(from_datetime, key);
    }

    #[test]
    fn test_last_n_days_basic() {
        let keys = last_n_days(7, date(2024, 3, 11));
        let labels: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(
            labels,
            vec![
                "2024-03-05",
                "2024-03-06",
                "2024-03-07",
                "2024-03-08",
                "2024-03-09",
                "2024-03-10",
                "2024-03-11",
            ]
        );
    }

    #[test]
    fn test_last_n_days_month_rollover() {
        let keys = last_n_days(7, date(2024, 3, 1));
        assert_eq!(keys.len(), 7);
        assert_eq!(keys[0].to_string(), "2024-02-24");
        // Leap day is part of the window
        assert!(keys.iter().any(|k| k.to_string() == "2024-02-29"));
        assert_eq!(keys[6].to_string(), "2024-03-01");
    }

    #[test]
    fn test_last_n_days_year_rollover() {
        let keys = last_n_days(7, date(2025, 1, 2));
        assert_eq!(keys[0].to_string(), "2024-12-27");
        assert_eq!(keys[6].to_string(), "2025-01-02");
    }

    #[test]
    fn test_last_n_days_contiguous_for_every_weekday() {
        let start = date(2024, 1, 1);
        for offset in 0..400 {
            let reference = start + Duration::days(offset);
            let keys = last_n_days(DEFAULT_WINDOW_DAYS, reference);

            assert_eq!(keys.len(), 7);
            assert_eq!(keys.last().unwrap().date(), reference);
            for pair in keys.windows(2) {
                assert_eq!(pair[1].date() - pair[0].date(), Duration::days(1));
            }
        }
    }

    #[test]
    fn test_last_n_days_is_stable() {
        let reference = date(2024, 6, 15);
        assert_eq!(last_n_days(7, reference), last_n_days(7, reference));
        assert!(last_n_days(0, reference).is_empty());
    }

    #[test]
    fn test_last_n_days_stops_at_earliest_date() {
        let reference = NaiveDate::MIN + Duration::days(2);
        assert_eq!(days_through(reference), 3);

        let keys = last_n_days(10, reference);
        assert_eq!(keys.len(), 3);
        assert_eq!(keys[0].date(), NaiveDate::MIN);
        assert_eq!(keys[2].date(), reference);

        assert_eq!(last_n_days(usize::MAX, NaiveDate::MIN), vec![DateKey(NaiveDate::MIN)]);
    }

    #[test]
    fn test_last_n_days_huge_window_is_exact() {
        assert!(days_through(date(2024, 3, 11)) > 90_000_000);

        // Never panics and never wraps into future dates
        let reference = NaiveDate::MIN + Duration::days(100);
        let keys = last_n_days(usize::MAX, reference);
        assert_eq!(keys.len(), 101);
        assert_eq!(keys.first().map(|k| k.date()), Some(NaiveDate::MIN));
        assert_eq!(keys.last().map(|k| k.date()), Some(reference));
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_timestamp_parse_variants() {
        let zoned: Timestamp = "2024-03-10T23:30:00Z".parse().unwrap();
        assert!(matches!(zoned, Timestamp::Zoned(_)));

        let naive: Timestamp = "2024-03-10T23:30:00.123".parse().unwrap();
        assert!(matches!(naive, Timestamp::Naive(_)));

        let from_json: Timestamp = serde_json::from_str("\"2024-03-10T08:00:00\"").unwrap();
        assert!(matches!(from_json, Timestamp::Naive(_)));

        let from_json: Timestamp = serde_json::from_str("\"2024-03-10T08:00:00+05:30\"").unwrap();
        assert!(matches!(from_json, Timestamp::Zoned(_)));
    }

    #[test]
    fn test_timestamp_day_depends_on_timezone() {
        let ts: Timestamp = "2024-03-10T23:30:00Z".parse().unwrap();
        assert_eq!(ts.day_in(&Utc).to_string(), "2024-03-10");

        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(ts.day_in(&plus_two).to_string(), "2024-03-11");

        let minus_five = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(ts.day_in(&minus_five).to_string(), "2024-03-10");
    }

    #[test]
    fn test_naive_timestamp_keeps_its_date() {
        let ts: Timestamp = "2024-03-10T23:30:00".parse().unwrap();
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(ts.day_in(&plus_two).to_string(), "2024-03-10");
        assert_eq!(ts.day_in(&Utc).to_string(), "2024-03-10");
    }
}
