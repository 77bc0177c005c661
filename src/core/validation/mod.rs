//! Column validation
//!
//! Checks a resolved value against the storage column of its descriptor
//! before it is handed to the persistence layer.

pub mod validators;

use super::descriptor::FieldDescriptor;
use super::error::{FieldError, FieldResult};
use super::field::{FieldKind, FieldValue};

type Validator = Box<dyn Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync>;

/// Validate `value` against the column described by `descriptor`
pub fn validate_column(descriptor: &FieldDescriptor, value: &FieldValue) -> FieldResult<()> {
    let column = descriptor.column();

    if value.is_null() {
        if column.nullable {
            return Ok(());
        }
        return validators::not_null()(descriptor.name(), value)
            .map_err(|message| validation_error(descriptor, message));
    }

    let mut checks: Vec<Validator> = Vec::new();
    if let Some(max) = column.max_length {
        checks.push(Box::new(validators::max_length(max)));
    }
    if !column.blank {
        checks.push(Box::new(validators::not_blank()));
    }
    if let (Some(max_digits), Some(decimal_places)) = (column.max_digits, column.decimal_places) {
        checks.push(Box::new(validators::decimal_digits(max_digits, decimal_places)));
    }
    if descriptor.kind() == FieldKind::PositiveInteger {
        checks.push(Box::new(validators::non_negative()));
    }

    run(descriptor, value, &checks)
}

fn run(descriptor: &FieldDescriptor, value: &FieldValue, checks: &[Validator]) -> FieldResult<()> {
    checks
        .iter()
        .try_for_each(|check| check(descriptor.name(), value))
        .map_err(|message| validation_error(descriptor, message))
}

fn validation_error(descriptor: &FieldDescriptor, message: String) -> FieldError {
    FieldError::Validation {
        field: descriptor.name().to_string(),
        message,
    }
}
