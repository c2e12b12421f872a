use chrono::NaiveDate;
use uuid::Uuid;

use crate::server::error::AppError;

/// Parses a UUID from a path segment or body field.
///
/// # Arguments
/// - `field` - Name reported back to the caller on failure
/// - `value` - Raw string to parse
///
/// # Returns
/// - `Ok(Uuid)` - Successfully parsed identifier
/// - `Err(AppError::BadRequest)` - The value is not a valid UUID
pub fn parse_uuid(field: &str, value: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value.trim())
        .map_err(|_| AppError::BadRequest(format!("Invalid UUID format for {}", field)))
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest(format!("Invalid date for {}, expected YYYY-MM-DD", field))
    })
}

/// Unwraps a required body field, rejecting absent and blank strings.
pub fn require_string(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!(
            "Missing required field: {}",
            field
        ))),
    }
}

/// Unwraps any required body field.
pub fn require<T>(field: &str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("Missing required field: {}", field)))
}

/// Parses a required UUID body field.
pub fn require_uuid(field: &str, value: Option<String>) -> Result<Uuid, AppError> {
    let value = require_string(field, value)?;
    parse_uuid(field, &value)
}
