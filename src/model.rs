use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ─── Domain type ─────────────────────────────────────────────────

/// One measurement of a single text-generation request.
///
/// Numeric fields are signed and carry no range check; whatever the seed
/// file holds is averaged as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkingResult {
    pub request_id: String,
    pub prompt_text: String,
    pub generated_text: String,
    pub token_count: i64,
    /// Milliseconds
    pub time_to_first_token: i64,
    /// Milliseconds
    pub time_per_output_token: i64,
    /// Milliseconds
    pub total_generation_time: i64,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

// ─── Timestamps ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ISO 8601 timestamp {0:?}")]
pub struct TimestampError(pub String);

/// Parses an ISO 8601 timestamp and normalizes it to UTC.
///
/// Accepts extended (`2024-05-01T12:00:00+02:00`) and basic
/// (`20240501T120000+0200`) forms, `T` or a single space between date and
/// time, times of hour, minute or second precision with an optional
/// `.`/`,` fraction, and offsets written `Z`, `±hh`, `±hhmm`, `±hh:mm` or
/// `±hh:mm:ss`. Values without an offset are taken to be UTC; a bare date
/// means midnight.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, TimestampError> {
    parse_iso8601(s).ok_or_else(|| TimestampError(s.to_owned()))
}

fn parse_iso8601(s: &str) -> Option<DateTime<Utc>> {
    // Everything below slices by byte offset.
    if !s.is_ascii() {
        return None;
    }
    let Some(sep) = s.find(['T', 't', ' ']) else {
        return parse_date(s)?.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    };

    let date = parse_date(&s[..sep])?;
    let (time, offset) = split_offset(&s[sep + 1..])?;
    let naive = NaiveDateTime::new(date, parse_time(time)?);

    match offset {
        None => Some(naive.and_utc()),
        Some(offset) => naive
            .and_local_timezone(offset)
            .single()
            .map(|dt| dt.with_timezone(&Utc)),
    }
}

/// `YYYY-MM-DD` or `YYYYMMDD`.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let (y, m, d) = match s.len() {
        10 if &s[4..5] == "-" && &s[7..8] == "-" => (&s[..4], &s[5..7], &s[8..]),
        8 => (&s[..4], &s[4..6], &s[6..]),
        _ => return None,
    };
    NaiveDate::from_ymd_opt(number(y)? as i32, number(m)?, number(d)?)
}

/// `hh`, `hh:mm`, `hh:mm:ss[.f]` or the basic `hhmm`, `hhmmss[.f]`.
fn parse_time(s: &str) -> Option<NaiveTime> {
    let (clock, nanos) = match s.find(['.', ',']) {
        Some(i) => (&s[..i], Some(fraction_nanos(&s[i + 1..])?)),
        None => (s, None),
    };

    match (clock_fields(clock)?.as_slice(), nanos) {
        ([h], None) => NaiveTime::from_hms_opt(*h, 0, 0),
        ([h, m], None) => NaiveTime::from_hms_opt(*h, *m, 0),
        ([h, m, sec], nanos) => NaiveTime::from_hms_nano_opt(*h, *m, *sec, nanos.unwrap_or(0)),
        _ => None,
    }
}

/// Splits a trailing `Z` or `±hh[[:]mm[[:]ss]]` offset off the time part.
fn split_offset(s: &str) -> Option<(&str, Option<FixedOffset>)> {
    if let Some(time) = s.strip_suffix('Z').or_else(|| s.strip_suffix('z')) {
        return Some((time, FixedOffset::east_opt(0)));
    }
    let Some(i) = s.find(['+', '-']) else {
        return Some((s, None));
    };

    let (h, m, sec) = match clock_fields(&s[i + 1..])?.as_slice() {
        [h] => (*h, 0, 0),
        [h, m] => (*h, *m, 0),
        [h, m, sec] => (*h, *m, *sec),
        _ => return None,
    };
    if h > 23 || m > 59 || sec > 59 {
        return None;
    }

    let secs = (h * 3600 + m * 60 + sec) as i32;
    let secs = if s[i..].starts_with('-') { -secs } else { secs };
    Some((&s[..i], Some(FixedOffset::east_opt(secs)?)))
}

/// Two-digit groups, either `:`-separated or packed (`hhmmss`).
fn clock_fields(s: &str) -> Option<Vec<u32>> {
    let groups: Vec<&str> = if s.contains(':') {
        s.split(':').collect()
    } else if s.len() % 2 == 0 {
        (0..s.len()).step_by(2).map(|i| &s[i..i + 2]).collect()
    } else {
        return None;
    };
    if groups.is_empty() || groups.len() > 3 || groups.iter().any(|g| g.len() != 2) {
        return None;
    }
    groups.into_iter().map(number).collect()
}

/// One to nine fractional digits, scaled to nanoseconds.
fn fraction_nanos(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 9 {
        return None;
    }
    Some(number(s)? * 10u32.pow(9 - s.len() as u32))
}

/// ASCII digits only: no sign, no whitespace.
fn number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}
