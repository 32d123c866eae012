//! API date handling.
//!
//! The API emits `2017-05-02T14:03:22Z`, occasionally with fractional
//! seconds. Parsing accepts both; formatting sticks to the first.

use chrono::{DateTime, NaiveDateTime, Utc};

pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
pub const DATE_FORMAT_WITH_MS: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

pub fn parse_api_date(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, DATE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, DATE_FORMAT_WITH_MS))
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn format_api_date(value: &DateTime<Utc>) -> String {
    value.format(DATE_FORMAT).to_string()
}

/// Serde helper for the optional date fields the models carry.
///
/// Deserialization is lenient: an unparseable date reads as `None` rather
/// than failing the whole payload.
pub mod optional {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&super::format_api_date(date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.as_deref().and_then(super::parse_api_date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_plain_format() {
        let date = parse_api_date("2017-05-02T14:03:22Z").unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2017, 5, 2, 14, 3, 22).unwrap());
    }

    #[test]
    fn parses_fractional_seconds_fallback() {
        let date = parse_api_date("2017-05-02T14:03:22.123Z").unwrap();
        assert_eq!(date.timestamp(), 1493733802);
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(parse_api_date("2017-05-02").is_none());
        assert!(parse_api_date("not a date").is_none());
    }

    #[test]
    fn formats_without_fractional_seconds() {
        let date = Utc.with_ymd_and_hms(2017, 5, 2, 14, 3, 22).unwrap();
        assert_eq!(format_api_date(&date), "2017-05-02T14:03:22Z");
    }
}
