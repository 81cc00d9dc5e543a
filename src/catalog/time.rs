//! Date and duration normalization for catalog suppliers
//!
//! Video listings carry publication dates as relative strings ("3 weeks ago")
//! and lengths as clock strings ("1:12:45"). Both are normalized here before
//! an item is built, so recency sorting compares real points in time.

use super::error::CatalogError;
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Normalize a date string to a point in time
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DD` dates (midnight UTC), and
/// relative phrases measured back from `now`:
/// `"just now"`, `"today"`, `"yesterday"`, `"5 days ago"`, `"a month ago"`.
/// Months count as 30 days and years as 365.
///
/// # Errors
///
/// Returns `CatalogError::InvalidDate` if the string matches none of the forms.
pub fn parse_date(input: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, CatalogError> {
    let trimmed = input.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        && let Some(midnight) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(midnight.and_utc());
    }

    parse_relative(trimmed, now).ok_or_else(|| CatalogError::InvalidDate(input.to_string()))
}

fn parse_relative(input: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let lower = input.to_lowercase();
    match lower.as_str() {
        "just now" | "now" | "today" => return Some(now),
        "yesterday" => return Some(now - Duration::days(1)),
        _ => {}
    }

    let rest = lower.strip_suffix("ago")?.trim_end();
    let mut parts = rest.split_whitespace();
    let amount = match parts.next()? {
        "a" | "an" | "one" => 1,
        n => n.parse::<i64>().ok()?,
    };
    let unit = parts.next()?;
    if parts.next().is_some() || amount < 0 {
        return None;
    }

    let unit = unit.strip_suffix('s').unwrap_or(unit);
    let delta = match unit {
        "second" | "sec" => Duration::try_seconds(amount)?,
        "minute" | "min" => Duration::try_minutes(amount)?,
        "hour" | "hr" => Duration::try_hours(amount)?,
        "day" => Duration::try_days(amount)?,
        "week" => Duration::try_weeks(amount)?,
        "month" => Duration::try_days(amount.checked_mul(30)?)?,
        "year" => Duration::try_days(amount.checked_mul(365)?)?,
        _ => return None,
    };
    now.checked_sub_signed(delta)
}

/// Parse a `mm:ss` or `hh:mm:ss` clock duration into seconds
///
/// # Errors
///
/// Returns `CatalogError::InvalidDuration` for any other shape, or when the
/// minute/second fields are 60 or more.
pub fn parse_duration(input: &str) -> Result<u32, CatalogError> {
    let invalid = || CatalogError::InvalidDuration(input.to_string());

    let fields: Vec<u32> = input
        .trim()
        .split(':')
        .map(|f| f.parse::<u32>().map_err(|_| invalid()))
        .collect::<Result<_, _>>()?;

    let (hours, minutes, seconds) = match fields.as_slice() {
        [m, s] => (0, *m, *s),
        [h, m, s] if *m < 60 => (*h, *m, *s),
        _ => return Err(invalid()),
    };
    if seconds >= 60 {
        return Err(invalid());
    }

    hours
        .checked_mul(3600)
        .and_then(|h| h.checked_add(minutes.checked_mul(60)?))
        .and_then(|t| t.checked_add(seconds))
        .ok_or_else(invalid)
}
