//! Core module containing field descriptors, resolution and validation

pub mod descriptor;
pub mod error;
pub mod field;
pub mod path;
pub mod resolver;
pub mod transform;
pub mod validation;

pub use descriptor::{FieldDescriptor, FieldOptions, Lookup};
pub use error::{ConfigError, FieldError, FieldResult};
pub use field::{ColumnSpec, FieldKind, FieldValue};
pub use resolver::resolve;
pub use transform::Transform;
