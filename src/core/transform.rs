//! Post-processing transforms
//!
//! A transform turns the raw JSON found in the source record into the typed
//! value of a column. Transforms only ever see non-null values; a present
//! `null` short-circuits to [`FieldValue::Null`] before they run.

use chrono::DateTime;
use rust_decimal::Decimal;
use serde_json::Value;

use super::error::{FieldError, FieldResult};
use super::field::FieldValue;

/// Signature shared by every transform: field name, raw value
pub type Transform = fn(&str, &Value) -> FieldResult<FieldValue>;

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Transform: store the raw value verbatim
pub fn identity(_: &str, value: &Value) -> FieldResult<FieldValue> {
    Ok(FieldValue::Json(value.clone()))
}

/// Transform: integer cents to currency units, exact, two decimal places
pub fn currency_scale(field: &str, value: &Value) -> FieldResult<FieldValue> {
    let cents = value
        .as_i64()
        .map(i128::from)
        .or_else(|| value.as_u64().map(i128::from))
        .ok_or_else(|| FieldError::invalid(field, "integer amount in cents", value))?;

    Ok(FieldValue::Decimal(Decimal::from_i128_with_scale(cents, 2)))
}

/// Transform: seconds since the Unix epoch to a UTC datetime
///
/// Fractional seconds are kept down to the nanosecond.
pub fn timestamp(field: &str, value: &Value) -> FieldResult<FieldValue> {
    let parsed = if let Some(secs) = value.as_i64() {
        DateTime::from_timestamp(secs, 0)
    } else if let Some(secs) = value.as_f64() {
        let mut whole = secs.floor();
        let mut nanos = ((secs - whole) * NANOS_PER_SECOND).round();
        if nanos >= NANOS_PER_SECOND {
            whole += 1.0;
            nanos = 0.0;
        }
        if whole < i64::MIN as f64 || whole > i64::MAX as f64 {
            None
        } else {
            DateTime::from_timestamp(whole as i64, nanos as u32)
        }
    } else {
        return Err(FieldError::invalid(field, "unix timestamp in seconds", value));
    };

    parsed
        .map(FieldValue::DateTime)
        .ok_or_else(|| FieldError::invalid(field, "timestamp within the supported range", value))
}

/// Transform: strings pass through, numbers and booleans are stringified
pub fn text(field: &str, value: &Value) -> FieldResult<FieldValue> {
    match value {
        Value::String(s) => Ok(FieldValue::String(s.clone())),
        Value::Number(n) => Ok(FieldValue::String(n.to_string())),
        Value::Bool(b) => Ok(FieldValue::String(b.to_string())),
        _ => Err(FieldError::invalid(field, "string", value)),
    }
}

/// Transform: 64-bit signed integer
pub fn integer(field: &str, value: &Value) -> FieldResult<FieldValue> {
    value
        .as_i64()
        .map(FieldValue::Integer)
        .ok_or_else(|| FieldError::invalid(field, "integer", value))
}

pub fn boolean(field: &str, value: &Value) -> FieldResult<FieldValue> {
    value
        .as_bool()
        .map(FieldValue::Boolean)
        .ok_or_else(|| FieldError::invalid(field, "boolean", value))
}
