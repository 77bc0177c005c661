//! Schema configuration loading
//!
//! Model schemas can be declared in YAML instead of code:
//!
//! ```yaml
//! models:
//!   - name: charge
//!     fields:
//!       - { name: stripe_id, kind: id, stripe_name: id }
//!       - { name: amount, kind: currency }
//!       - { name: card_last_4, kind: char, stripe_name: card.last4, max_length: 4 }
//!       - { name: disputed, kind: boolean, stripe_required: false }
//! ```
//!
//! Building a schema validates every field, so an invalid declaration fails
//! at load time rather than on the first record.

use crate::core::{ConfigError, FieldDescriptor, FieldKind, FieldOptions};
use crate::model::ModelSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Configuration of a single field
///
/// Unknown keys are rejected so a misspelled option fails at load time
/// instead of leaving the field with its default behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    /// Column name
    pub name: String,

    pub kind: FieldKind,

    #[serde(default)]
    pub stripe_name: Option<String>,

    #[serde(default)]
    pub nested_name: Option<String>,

    #[serde(default = "default_stripe_required")]
    pub stripe_required: bool,

    #[serde(default)]
    pub deprecated: bool,

    #[serde(default)]
    pub max_length: Option<usize>,

    #[serde(default)]
    pub null: bool,

    #[serde(default)]
    pub blank: Option<bool>,
}

fn default_stripe_required() -> bool {
    true
}

impl FieldConfig {
    /// Construction options carried by this entry
    pub fn options(&self) -> FieldOptions {
        FieldOptions {
            stripe_name: self.stripe_name.clone(),
            nested_name: self.nested_name.clone(),
            stripe_required: self.stripe_required,
            deprecated: self.deprecated,
            max_length: self.max_length,
            null: self.null,
            blank: self.blank,
        }
    }

    pub fn build(&self) -> Result<FieldDescriptor, ConfigError> {
        FieldDescriptor::new(self.name.clone(), self.kind, self.options())
    }
}

/// Configuration of a model and its fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    pub name: String,

    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

impl ModelConfig {
    pub fn build(&self) -> Result<ModelSchema, ConfigError> {
        let fields = self
            .fields
            .iter()
            .map(FieldConfig::build)
            .collect::<Result<Vec<_>, _>>()?;
        ModelSchema::new(self.name.clone(), fields)
    }
}

/// Complete configuration: a list of models
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaConfig {
    #[serde(default)]
    pub models: Vec<ModelConfig>,
}

impl SchemaConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.display().to_string()),
            message: e.to_string(),
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Merge several configurations
    ///
    /// A later model with the same name replaces the earlier one.
    pub fn merge(configs: impl IntoIterator<Item = SchemaConfig>) -> Self {
        let mut models: Vec<ModelConfig> = Vec::new();

        for model in configs.into_iter().flat_map(|config| config.models) {
            match models.iter_mut().find(|existing| existing.name == model.name) {
                Some(existing) => {
                    debug!(model = %model.name, "replacing model from an earlier config");
                    *existing = model;
                }
                None => models.push(model),
            }
        }

        Self { models }
    }

    /// Find a model configuration by name
    pub fn model(&self, name: &str) -> Option<&ModelConfig> {
        self.models.iter().find(|model| model.name == name)
    }

    /// Build and validate every model schema
    pub fn build(&self) -> Result<Vec<ModelSchema>, ConfigError> {
        self.models.iter().map(ModelConfig::build).collect()
    }
}
