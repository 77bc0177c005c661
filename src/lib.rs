//! # stripe-fields
//!
//! Field descriptors that map attributes of Stripe JSON objects onto typed
//! database column values.
//!
//! ## Features
//!
//! - **Nested Lookup**: `stripe_name = "card.last4"` reads `obj["card"]["last4"]`
//! - **Required/Optional Keys**: absence of a required key fails the record, optional keys resolve to null
//! - **Deprecated Columns**: kept for historical data, never read from the provider
//! - **Exact Currency**: amounts in cents become two-place decimals without float error
//! - **Timestamps**: seconds since the epoch become UTC datetimes
//! - **Validated Declarations**: invalid option combinations fail when the field is declared
//! - **Configuration-Based**: declare model schemas in YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stripe_fields::prelude::*;
//! use serde_json::json;
//!
//! let charge = ModelSchema::new(
//!     "charge",
//!     [
//!         FieldDescriptor::new("stripe_id", FieldKind::Id, FieldOptions::new().stripe_name("id"))?,
//!         FieldDescriptor::new("amount", FieldKind::Currency, FieldOptions::new())?,
//!         FieldDescriptor::new("created", FieldKind::DateTime, FieldOptions::new())?,
//!     ],
//! )?;
//!
//! let record = charge.clean_record(&json!({"id": "ch_1", "amount": 1050, "created": 0}))?;
//! assert_eq!(record["amount"].as_decimal().unwrap().to_string(), "10.50");
//! ```

pub mod config;
pub mod core;
pub mod model;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        descriptor::{FieldDescriptor, FieldOptions, Lookup},
        error::{ConfigError, FieldError, FieldResult},
        field::{ColumnSpec, FieldKind, FieldValue},
        resolver::resolve,
    };

    // === Model ===
    pub use crate::model::{ModelSchema, Record};

    // === Config ===
    pub use crate::config::{FieldConfig, ModelConfig, SchemaConfig};

    // === External dependencies ===
    pub use chrono::{DateTime, Utc};
    pub use rust_decimal::Decimal;
}
