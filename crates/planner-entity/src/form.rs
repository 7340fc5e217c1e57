//! Deserializers for values posted straight from browser forms.
//!
//! An untouched `<input type="date">` submits `""`, a filled one submits
//! `YYYY-MM-DD`, and `datetime-local` submits `YYYY-MM-DDTHH:MM`. Values
//! without an offset are read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::de::{self, Deserialize, Deserializer};

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a form timestamp. Blank input is `None`.
pub fn parse_instant(raw: &str) -> Result<Option<DateTime<Utc>>, String> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(None);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(Some(naive.and_utc()));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(Some(date.and_time(NaiveTime::MIN).and_utc()));
    }
    Err(format!("invalid date or time: '{s}'"))
}

/// `null`, a missing key and `""` all read as `None`.
/// Pair with `#[serde(default)]`.
pub fn optional_instant<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_instant(&raw).map_err(de::Error::custom),
        None => Ok(None),
    }
}

/// Patch semantics for a clearable timestamp: a missing key is `None`
/// (unchanged), while `null` or `""` is `Some(None)` (clear).
/// Pair with `#[serde(default)]`.
pub fn patch_instant<'de, D>(deserializer: D) -> Result<Option<Option<DateTime<Utc>>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_instant(&raw).map(Some).map_err(de::Error::custom),
        None => Ok(Some(None)),
    }
}

/// Patch semantics for any clearable field: a missing key is `None`,
/// `null` is `Some(None)`. Pair with `#[serde(default)]`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_blank_is_none() {
        assert_eq!(parse_instant("").unwrap(), None);
        assert_eq!(parse_instant("   ").unwrap(), None);
    }

    #[test]
    fn test_accepts_browser_formats() {
        let midnight = Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap();
        let ten = Utc.with_ymd_and_hms(2026, 5, 1, 10, 0, 0).unwrap();
        assert_eq!(parse_instant("2026-05-01").unwrap(), Some(midnight));
        assert_eq!(parse_instant("2026-05-01T10:00").unwrap(), Some(ten));
        assert_eq!(parse_instant("2026-05-01T10:00:00").unwrap(), Some(ten));
        assert_eq!(parse_instant("2026-05-01T10:00:00Z").unwrap(), Some(ten));
        assert_eq!(
            parse_instant("2026-05-01T12:00:00+02:00").unwrap(),
            Some(ten)
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_instant("next tuesday").is_err());
        assert!(parse_instant("2026-13-01").is_err());
    }
}
