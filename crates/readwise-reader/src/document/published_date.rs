//! Decoding for the `published_date` field.
//!
//! Unlike the other timestamps, the API sends this one as epoch
//! milliseconds, as a bare `YYYY-MM-DD` date, or as `null`. Each shape is
//! parsed into the same `DateTime<Utc>`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, de::Error as _};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPublishedDate {
    Millis(i64),
    FractionalMillis(f64),
    Text(String),
}

impl RawPublishedDate {
    fn into_timestamp(self) -> Result<DateTime<Utc>, String> {
        match self {
            RawPublishedDate::Millis(ms) => from_millis(ms),
            RawPublishedDate::FractionalMillis(ms) => from_millis(ms as i64),
            RawPublishedDate::Text(text) => parse_text(&text),
        }
    }
}

fn from_millis(ms: i64) -> Result<DateTime<Utc>, String> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| format!("published date {ms}ms is out of range"))
}

fn parse_text(text: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }

    // Accept full timestamps too, which is how documents serialize back out.
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| format!("invalid published date {text:?}"))
}

pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawPublishedDate>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => raw.into_timestamp().map(Some).map_err(D::Error::custom),
    }
}
