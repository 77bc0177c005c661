//! Reusable column validators
//!
//! Each validator checks one constraint of a storage column and passes
//! values it does not apply to.

use rust_decimal::Decimal;

use crate::core::field::FieldValue;

/// Validator: value is not null
pub fn not_null() -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &FieldValue| {
        if value.is_null() {
            Err(format!("'{}' cannot be null", field))
        } else {
            Ok(())
        }
    }
}

/// Validator: string is not empty
pub fn not_blank() -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &FieldValue| match value.as_string() {
        Some("") => Err(format!("'{}' cannot be blank", field)),
        _ => Ok(()),
    }
}

/// Validator: string length in characters must not exceed `max`
pub fn max_length(
    max: usize,
) -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &FieldValue| {
        if let Some(s) = value.as_string() {
            let len = s.chars().count();
            if len > max {
                return Err(format!(
                    "'{}' must not exceed {} characters (currently: {})",
                    field, max, len
                ));
            }
        }
        Ok(())
    }
}

/// Validator: decimal fits `max_digits` total digits with `decimal_places` after the point
pub fn decimal_digits(
    max_digits: u32,
    decimal_places: u32,
) -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &FieldValue| {
        let Some(d) = value.as_decimal() else {
            return Ok(());
        };
        let (digits, decimals) = digit_counts(d);
        let whole_digits = digits - decimals;

        if digits > max_digits {
            Err(format!(
                "'{}' must not have more than {} digits in total (value: {})",
                field, max_digits, d
            ))
        } else if decimals > decimal_places {
            Err(format!(
                "'{}' must not have more than {} decimal places (value: {})",
                field, decimal_places, d
            ))
        } else if whole_digits > max_digits.saturating_sub(decimal_places) {
            Err(format!(
                "'{}' must not have more than {} digits before the decimal point (value: {})",
                field,
                max_digits.saturating_sub(decimal_places),
                d
            ))
        } else {
            Ok(())
        }
    }
}

/// Validator: integer must not be negative
pub fn non_negative() -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &FieldValue| match value.as_integer() {
        Some(i) if i < 0 => Err(format!("'{}' must be positive (value: {})", field, i)),
        _ => Ok(()),
    }
}

/// Total significant digits and digits after the point, as stored at the decimal's scale
fn digit_counts(d: Decimal) -> (u32, u32) {
    let decimals = d.scale();
    let mantissa_digits = d.mantissa().unsigned_abs().to_string().len() as u32;
    (mantissa_digits.max(decimals), decimals)
}
