use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// Interprets a posting timestamp from a store export.
///
/// Accepted shapes:
/// - RFC 3339 string, `YYYY-MM-DDTHH:MM:SS[.fff]` (read as UTC) or `YYYY-MM-DD`
/// - epoch milliseconds as a JSON number
/// - a server timestamp object `{"seconds", "nanoseconds"}` (or the `_seconds` /
///   `_nanoseconds` spelling of admin exports)
///
/// Everything else yields `None`.
pub fn parse_created_at(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(raw) => parse_timestamp_str(raw),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f.trunc() as i64))
            .and_then(DateTime::from_timestamp_millis),
        Value::Object(map) => {
            let seconds = map
                .get("seconds")
                .or_else(|| map.get("_seconds"))
                .and_then(Value::as_i64)?;
            let nanos = map
                .get("nanoseconds")
                .or_else(|| map.get("_nanoseconds"))
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(0);
            DateTime::from_timestamp(seconds, nanos)
        }
        _ => None,
    }
}

fn parse_timestamp_str(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// serde adapter for `createdAt`: never fails, unreadable values become `None`.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let parsed = value.as_ref().and_then(parse_created_at);
    if parsed.is_none() {
        if let Some(raw) = value.filter(|v| !v.is_null()) {
            debug!(created_at = %raw, "unparseable createdAt; ranking as oldest");
        }
    }
    Ok(parsed)
}

/// Sort key used for tie-breaking: missing timestamps count as the epoch.
pub fn ranking_timestamp_millis(created_at: Option<&DateTime<Utc>>) -> i64 {
    created_at.map_or(0, DateTime::timestamp_millis)
}
