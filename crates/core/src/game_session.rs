//! Game session constraints: slot capacity and scheduling input.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Minimum number of player slots in a session.
pub const MIN_SLOTS: i32 = 1;

/// Maximum number of player slots in a session.
pub const MAX_SLOTS: i32 = 6;

/// Accepted formats for the `date` field (`<input type="date">` and
/// `<input type="datetime-local">`).
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Validate that a slot count lies within `[MIN_SLOTS, MAX_SLOTS]`.
pub fn validate_slots(slots: i32) -> Result<(), CoreError> {
    if !(MIN_SLOTS..=MAX_SLOTS).contains(&slots) {
        return Err(CoreError::Validation(format!(
            "slots must be between {MIN_SLOTS} and {MAX_SLOTS}, got {slots}"
        )));
    }
    Ok(())
}

/// Parse and range-check the `slots` form field.
pub fn parse_slots(raw: &str) -> Result<i32, CoreError> {
    let slots = raw
        .trim()
        .parse::<i32>()
        .map_err(|_| CoreError::Validation("slots must be a whole number".into()))?;
    validate_slots(slots)?;
    Ok(slots)
}

/// Parse the session `date` field into a UTC timestamp.
///
/// A bare date is scheduled at midnight UTC.
pub fn parse_session_date(raw: &str) -> Result<Timestamp, CoreError> {
    let value = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "date must look like YYYY-MM-DD or YYYY-MM-DDTHH:MM, got '{value}'"
            ))
        })
}

/// Whether a session with `slots` capacity and `taken` linked characters
/// can accept one more.
pub fn has_free_slot(slots: i32, taken: i64) -> bool {
    taken < i64::from(slots)
}
