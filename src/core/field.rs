//! Field kinds, column metadata and resolved value types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::transform::{self, Transform};

/// A typed value ready to be handed to a persistence layer
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Decimal(Decimal),
    Boolean(bool),
    DateTime(DateTime<Utc>),
    Json(Value),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a decimal if possible
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            FieldValue::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            FieldValue::Json(v) => Some(v),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

/// The semantic type of a field
///
/// Each kind selects the post-processing transform applied to the raw
/// source value and the defaults of its storage column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Amount in cents, stored in currency units with two decimal places
    Currency,
    /// Non-nullable boolean
    Boolean,
    NullBoolean,
    Char,
    Text,
    /// Provider object identifier, at most 50 characters, never null or blank
    Id,
    /// Seconds since the Unix epoch, stored as a UTC datetime
    #[serde(rename = "datetime")]
    DateTime,
    Integer,
    PositiveInteger,
    /// Structured data; without a stripe name the whole source object is stored
    Json,
}

impl FieldKind {
    /// Post-processing transform for this kind
    pub fn transform(self) -> Transform {
        match self {
            FieldKind::Currency => transform::currency_scale,
            FieldKind::Boolean | FieldKind::NullBoolean => transform::boolean,
            FieldKind::Char | FieldKind::Text | FieldKind::Id => transform::text,
            FieldKind::DateTime => transform::timestamp,
            FieldKind::Integer | FieldKind::PositiveInteger => transform::integer,
            FieldKind::Json => transform::identity,
        }
    }

    /// Column defaults before field options are applied
    pub fn default_column(self) -> ColumnSpec {
        let base = ColumnSpec::default();
        match self {
            FieldKind::Currency => ColumnSpec {
                decimal_places: Some(2),
                max_digits: Some(7),
                ..base
            },
            FieldKind::Id => ColumnSpec {
                max_length: Some(ID_MAX_LENGTH),
                blank: false,
                ..base
            },
            FieldKind::NullBoolean => ColumnSpec {
                nullable: true,
                ..base
            },
            _ => base,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Currency => "currency",
            FieldKind::Boolean => "boolean",
            FieldKind::NullBoolean => "null_boolean",
            FieldKind::Char => "char",
            FieldKind::Text => "text",
            FieldKind::Id => "id",
            FieldKind::DateTime => "datetime",
            FieldKind::Integer => "integer",
            FieldKind::PositiveInteger => "positive_integer",
            FieldKind::Json => "json",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Enough space to hold any provider identifier
pub const ID_MAX_LENGTH: usize = 50;

/// Storage column metadata owned by the persistence layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    /// Maximum length in characters for string columns
    pub max_length: Option<usize>,
    pub decimal_places: Option<u32>,
    pub max_digits: Option<u32>,
    pub nullable: bool,
    /// Whether the empty string is accepted
    pub blank: bool,
    /// Whether the column defaults to null
    pub default_null: bool,
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            max_length: None,
            decimal_places: None,
            max_digits: None,
            nullable: false,
            blank: true,
            default_null: false,
        }
    }
}
