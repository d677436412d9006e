//! Helpers for interpreting urlencoded form submissions.
//!
//! Browsers omit unchecked checkboxes entirely and send `on` for checked
//! ones; other clients send `true` / `1`. Form types deserialize every field
//! as a plain string (missing fields become empty) and use these helpers to
//! turn them into typed values.

use crate::error::CoreError;

/// Generic message shown whenever a form is incomplete or malformed.
pub const MSG_FILL_ALL_FIELDS: &str = "Fill in all fields correctly";

/// Values accepted as "checked" for boolean form fields (case-insensitive).
const TRUTHY_VALUES: &[&str] = &["on", "true", "1", "yes"];

/// Interpret a checkbox-style field.
///
/// Returns `None` when the field was absent or blank, so callers can tell a
/// missing field apart from an explicit `false`.
pub fn parse_flag(raw: &str) -> Option<bool> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    Some(
        TRUTHY_VALUES
            .iter()
            .any(|truthy| value.eq_ignore_ascii_case(truthy)),
    )
}

/// `true` only when the field is present and truthy.
pub fn is_truthy(raw: &str) -> bool {
    parse_flag(raw).unwrap_or(false)
}

/// Trim a required text field, rejecting blank input.
pub fn require_text<'a>(raw: &'a str, name: &str) -> Result<&'a str, CoreError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{name} is required")));
    }
    Ok(value)
}

/// Parse an optional integer field. Blank input yields `None`.
pub fn parse_optional_i32(raw: &str, name: &str) -> Result<Option<i32>, CoreError> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<i32>()
        .map(Some)
        .map_err(|_| CoreError::Validation(format!("{name} must be a whole number")))
}
