use crate::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Describes a record type's fields for construction and massive assignment.
///
/// The safe-attribute set is explicit configuration here; in the consuming
/// framework it is derived from the validation rules active for the current
/// scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSchema {
    pub record_type: String,
    pub fields: Vec<FieldSpec>,
}

/// One field of a [`RecordSchema`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    /// Whether the field may be set through massive assignment.
    pub safe: bool,
    /// Value applied on construction. Absent fields start unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl FieldSpec {
    /// Shorthand for a massively-assignable field.
    #[must_use]
    pub fn safe(name: &str) -> Self {
        Self { name: name.to_string(), safe: true, default: None }
    }

    /// Shorthand for a field that assignment must never touch.
    #[must_use]
    pub fn readonly(name: &str) -> Self {
        Self { name: name.to_string(), safe: false, default: None }
    }

    /// Attaches a construction-time default value.
    #[must_use]
    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }
}

impl RecordSchema {
    /// Creates a schema for `record_type` with the given fields.
    #[must_use]
    pub fn new(record_type: &str, fields: Vec<FieldSpec>) -> Self {
        Self { record_type: record_type.to_string(), fields }
    }

    /// The attribute names that are safe to be massively assigned.
    #[must_use]
    pub fn safe_attribute_names(&self) -> HashSet<String> {
        self.fields
            .iter()
            .filter(|f| f.safe)
            .map(|f| f.name.clone())
            .collect()
    }

    /// Constructs a new record of this schema's type with field defaults
    /// applied.
    #[must_use]
    pub fn new_record(&self) -> Record {
        let mut record = Record::new(&self.record_type);
        for field in &self.fields {
            if let Some(default) = &field.default {
                record.set(&field.name, default.clone());
            }
        }
        record
    }

    /// Looks up a field spec by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}
