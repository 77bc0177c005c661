//! Field value resolution
//!
//! [`resolve`] is the single entry point that turns one source record into
//! one column value. Every field kind goes through it: the deprecated check,
//! the lookup, the missing-key policy and the null short-circuit are applied
//! here once, and only the final transform depends on the kind.

use serde_json::Value;
use tracing::{debug, warn};

use super::descriptor::{FieldDescriptor, Lookup};
use super::error::{FieldError, FieldResult};
use super::field::FieldValue;
use super::path;

/// Resolve the value of `descriptor` from `source`
///
/// - Deprecated fields never look at `source` and yield `Null`.
/// - A missing key fails with [`FieldError::MissingRequiredField`] when the
///   field is required and yields `Null` otherwise.
/// - A present `null` yields `Null` without running the transform.
pub fn resolve(descriptor: &FieldDescriptor, source: &Value) -> FieldResult<FieldValue> {
    if descriptor.is_deprecated() {
        debug!(field = descriptor.name(), "skipping deprecated field");
        return Ok(FieldValue::Null);
    }

    let lookup = descriptor.lookup();
    let raw = match &lookup {
        Lookup::Source => Some(source),
        Lookup::Key(key) => source.as_object().and_then(|object| object.get(*key)),
        Lookup::Path(nested) => path::nested_get(source, nested),
    };

    let Some(raw) = raw else {
        if descriptor.is_required() {
            warn!(field = descriptor.name(), lookup = %lookup, "required field missing from source");
            return Err(FieldError::MissingRequiredField {
                field: descriptor.name().to_string(),
                path: lookup.to_string(),
            });
        }
        debug!(field = descriptor.name(), lookup = %lookup, "optional field missing, storing null");
        return Ok(FieldValue::Null);
    };

    if raw.is_null() {
        return Ok(FieldValue::Null);
    }

    (descriptor.kind().transform())(descriptor.name(), raw)
}
