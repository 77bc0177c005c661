//! Typed error handling for field resolution
//!
//! Two layers of errors exist:
//!
//! - [`FieldError`]: raised while resolving or validating a value for one
//!   record. A required key that is absent fails the whole record.
//! - [`ConfigError`]: raised while declaring fields or loading schemas.
//!   These are programming errors and surface before any record is read.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_fields::prelude::*;
//!
//! match descriptor.resolve(&source) {
//!     Ok(value) => store(value),
//!     Err(FieldError::MissingRequiredField { field, .. }) => {
//!         eprintln!("record is missing {}", field);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Errors raised while turning an external record into column values
#[derive(Debug, Error)]
pub enum FieldError {
    /// A required, non-deprecated field is absent from the source data
    #[error("Missing required field '{field}' (looked up '{path}')")]
    MissingRequiredField { field: String, path: String },

    /// The source value has the wrong JSON type or is out of range
    #[error("Invalid value for field '{field}': expected {expected}, got {value}")]
    InvalidValue {
        field: String,
        expected: &'static str,
        value: String,
    },

    /// A resolved value does not fit its storage column
    #[error("Validation failed for field '{field}': {message}")]
    Validation { field: String, message: String },

    /// Declaration-time error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FieldError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            FieldError::MissingRequiredField { .. } => "MISSING_REQUIRED_FIELD",
            FieldError::InvalidValue { .. } => "INVALID_FIELD_VALUE",
            FieldError::Validation { .. } => "FIELD_VALIDATION_FAILED",
            FieldError::Config(e) => e.error_code(),
        }
    }

    /// Name of the field the error is about, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            FieldError::MissingRequiredField { field, .. }
            | FieldError::InvalidValue { field, .. }
            | FieldError::Validation { field, .. } => Some(field),
            FieldError::Config(e) => e.field(),
        }
    }

    pub(crate) fn invalid(field: &str, expected: &'static str, value: &serde_json::Value) -> Self {
        FieldError::InvalidValue {
            field: field.to_string(),
            expected,
            value: value.to_string(),
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to field declarations and schema configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required boolean cannot hold the null a deprecated column needs
    #[error(
        "Boolean field '{field}' cannot be deprecated, declare it as a null_boolean field instead"
    )]
    DeprecatedBoolean { field: String },

    /// Identifier columns are never null, so they cannot be optional or deprecated
    #[error("Identifier field '{field}' can never be null, it cannot be deprecated or optional")]
    NullableIdentifier { field: String },

    /// Invalid value for a field option
    #[error("Invalid value '{value}' for option '{option}' of field '{field}': {message}")]
    InvalidValue {
        field: String,
        option: String,
        value: String,
        message: String,
    },

    /// Two fields of the same model share a column name
    #[error("Field '{field}' is declared more than once in model '{model}'")]
    DuplicateField { model: String, field: String },

    /// Failed to parse configuration
    #[error("Failed to parse config '{}': {message}", .file.as_deref().unwrap_or("<inline>"))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// IO error while reading configuration
    #[error("IO error: {message}")]
    IoError { message: String },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::DeprecatedBoolean { .. } => "DEPRECATED_BOOLEAN_FIELD",
            ConfigError::NullableIdentifier { .. } => "NULLABLE_IDENTIFIER_FIELD",
            ConfigError::InvalidValue { .. } => "INVALID_FIELD_OPTION",
            ConfigError::DuplicateField { .. } => "DUPLICATE_FIELD",
            ConfigError::ParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::FileNotFound { .. } => "CONFIG_FILE_NOT_FOUND",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::DeprecatedBoolean { field }
            | ConfigError::NullableIdentifier { field }
            | ConfigError::InvalidValue { field, .. }
            | ConfigError::DuplicateField { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError {
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for field resolution
pub type FieldResult<T> = Result<T, FieldError>;

// =============================================================================
// Tests
// =============================================================================
