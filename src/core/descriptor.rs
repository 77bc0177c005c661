//! Field declarations
//!
//! A [`FieldDescriptor`] is built once, at schema-definition time, from a
//! [`FieldKind`] and a set of [`FieldOptions`]. Construction validates the
//! combination of options and derives the column's nullability, so a
//! descriptor that exists is always a valid one.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

use super::error::{ConfigError, FieldResult};
use super::field::{ColumnSpec, FieldKind, FieldValue};
use super::{path, resolver, validation};

/// Construction-time options of a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOptions {
    /// Key in the provider object when it differs from the column name.
    /// A dotted value addresses a nested key (`"card.last4"`).
    pub stripe_name: Option<String>,

    /// Path prefix used with the column name when `stripe_name` is unset
    pub nested_name: Option<String>,

    /// Absence from the provider object is an error
    pub stripe_required: bool,

    /// Column kept for historical data but never synced
    pub deprecated: bool,

    pub max_length: Option<usize>,

    /// Force a nullable column
    pub null: bool,

    /// Override whether the empty string is accepted
    pub blank: Option<bool>,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            stripe_name: None,
            nested_name: None,
            stripe_required: true,
            deprecated: false,
            max_length: None,
            null: false,
            blank: None,
        }
    }
}

impl FieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stripe_name(mut self, stripe_name: impl Into<String>) -> Self {
        self.stripe_name = Some(stripe_name.into());
        self
    }

    pub fn nested_name(mut self, nested_name: impl Into<String>) -> Self {
        self.nested_name = Some(nested_name.into());
        self
    }

    pub fn stripe_required(mut self, stripe_required: bool) -> Self {
        self.stripe_required = stripe_required;
        self
    }

    /// Shorthand for `stripe_required(false)`
    pub fn optional(self) -> Self {
        self.stripe_required(false)
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn null(mut self) -> Self {
        self.null = true;
        self
    }

    pub fn blank(mut self, blank: bool) -> Self {
        self.blank = Some(blank);
        self
    }
}

/// Where a descriptor reads its value from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The whole source object
    Source,
    /// A single top-level key, taken literally
    Key(&'a str),
    /// A dotted nested path
    Path(Cow<'a, str>),
}

impl fmt::Display for Lookup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Source => f.write_str("<source>"),
            Lookup::Key(key) => f.write_str(key),
            Lookup::Path(path) => f.write_str(path),
        }
    }
}

/// Immutable, validated description of one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    kind: FieldKind,
    stripe_name: Option<String>,
    nested_name: Option<String>,
    stripe_required: bool,
    deprecated: bool,
    column: ColumnSpec,
}

impl FieldDescriptor {
    /// Declare a field, failing fast on invalid option combinations
    pub fn new(
        name: impl Into<String>,
        kind: FieldKind,
        options: FieldOptions,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        let FieldOptions {
            stripe_name,
            nested_name,
            stripe_required,
            deprecated,
            max_length,
            null,
            blank,
        } = options;

        if name.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: name,
                option: "name".to_string(),
                value: String::new(),
                message: "column name cannot be empty".to_string(),
            });
        }

        for (option, value) in [("stripe_name", &stripe_name), ("nested_name", &nested_name)] {
            let Some(value) = value else { continue };
            if !path::is_well_formed(value) {
                return Err(ConfigError::InvalidValue {
                    field: name,
                    option: option.to_string(),
                    value: value.clone(),
                    message: "path segments cannot be empty".to_string(),
                });
            }
        }

        if max_length == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: name,
                option: "max_length".to_string(),
                value: "0".to_string(),
                message: "max_length must be positive".to_string(),
            });
        }

        match kind {
            FieldKind::Boolean if deprecated => {
                return Err(ConfigError::DeprecatedBoolean { field: name });
            }
            FieldKind::Id if deprecated || !stripe_required || null => {
                return Err(ConfigError::NullableIdentifier { field: name });
            }
            _ => {}
        }

        let mut column = kind.default_column();
        if max_length.is_some() {
            column.max_length = max_length;
        }
        if let Some(blank) = blank {
            column.blank = blank;
        }
        column.nullable = column.nullable || null || !stripe_required || deprecated;
        column.default_null = deprecated;

        Ok(Self {
            name,
            kind,
            stripe_name,
            nested_name,
            stripe_required,
            deprecated,
            column,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn stripe_name(&self) -> Option<&str> {
        self.stripe_name.as_deref()
    }

    pub fn nested_name(&self) -> Option<&str> {
        self.nested_name.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.stripe_required
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    /// Whether the field is exchanged with the provider
    pub fn is_synced(&self) -> bool {
        !self.deprecated
    }

    pub fn column(&self) -> &ColumnSpec {
        &self.column
    }

    /// Where the value lives in a source record
    ///
    /// `stripe_name` wins over `nested_name`. JSON fields without a
    /// `stripe_name` read the whole source object.
    pub fn lookup(&self) -> Lookup<'_> {
        match (&self.stripe_name, &self.nested_name) {
            (Some(stripe_name), _) => Lookup::Path(Cow::Borrowed(stripe_name.as_str())),
            (None, _) if self.kind == FieldKind::Json => Lookup::Source,
            (None, Some(nested_name)) => Lookup::Path(Cow::Owned(path::join(nested_name, &self.name))),
            (None, None) => Lookup::Key(self.name.as_str()),
        }
    }

    /// Resolve this field's value from one source record
    pub fn resolve(&self, source: &Value) -> FieldResult<FieldValue> {
        resolver::resolve(self, source)
    }

    /// Check a resolved value against the storage column
    pub fn validate(&self, value: &FieldValue) -> FieldResult<()> {
        validation::validate_column(self, value)
    }

    /// Resolve then validate
    pub fn clean(&self, source: &Value) -> FieldResult<FieldValue> {
        let value = self.resolve(source)?;
        self.validate(&value)?;
        Ok(value)
    }
}
