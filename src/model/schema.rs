//! Model schemas
//!
//! A [`ModelSchema`] groups the field descriptors of one model and resolves
//! a whole provider object into an ordered [`Record`] of column values.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::core::{ConfigError, FieldDescriptor, FieldResult, FieldValue};

/// Column values of one record, in field declaration order
pub type Record = IndexMap<String, FieldValue>;

/// Ordered set of field descriptors for one model
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSchema {
    name: String,
    /// Maps column name -> descriptor, in declaration order
    fields: IndexMap<String, FieldDescriptor>,
}

impl ModelSchema {
    /// Create a schema, rejecting duplicate column names
    pub fn new(
        name: impl Into<String>,
        fields: impl IntoIterator<Item = FieldDescriptor>,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        let mut by_name = IndexMap::new();

        for field in fields {
            let column = field.name().to_string();
            if by_name.contains_key(&column) {
                return Err(ConfigError::DuplicateField {
                    model: name,
                    field: column,
                });
            }
            by_name.insert(column, field);
        }

        Ok(Self {
            name,
            fields: by_name,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a field by column name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    /// All fields, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values()
    }

    /// Fields exchanged with the provider (everything not deprecated)
    pub fn synced_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields().filter(|field| field.is_synced())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Resolve every field from one provider object
    ///
    /// Fields are resolved in declaration order; the first error fails the
    /// whole record.
    pub fn resolve_record(&self, source: &Value) -> FieldResult<Record> {
        self.build_record(source, FieldDescriptor::resolve)
    }

    /// Resolve and validate every field from one provider object
    pub fn clean_record(&self, source: &Value) -> FieldResult<Record> {
        self.build_record(source, FieldDescriptor::clean)
    }

    fn build_record(
        &self,
        source: &Value,
        step: impl Fn(&FieldDescriptor, &Value) -> FieldResult<FieldValue>,
    ) -> FieldResult<Record> {
        let record = self
            .fields
            .iter()
            .map(|(name, field)| step(field, source).map(|value| (name.clone(), value)))
            .collect::<FieldResult<Record>>()?;

        debug!(model = %self.name, fields = record.len(), "resolved record");
        Ok(record)
    }
}
