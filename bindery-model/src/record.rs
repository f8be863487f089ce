use crate::AttributeMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// A generic child record held by a collection.
///
/// The `attributes` field holds arbitrary JSON whose structure is defined by
/// the record's [`RecordSchema`](crate::RecordSchema). Deleting a record
/// during reconciliation never removes it from its collection — it is
/// tombstoned via [`Record::mark_delete`] so a later save pass can issue the
/// physical delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub record_type: String,
    pub attributes: AttributeMap,
    /// Tombstone set by reconciliation deletes; false on construction.
    #[serde(default)]
    pub marked_for_delete: bool,
    /// Per-attribute validation messages, in attribute order.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl Record {
    /// Creates an empty record of the given type.
    #[must_use]
    pub fn new(record_type: &str) -> Self {
        Self {
            record_type: record_type.to_string(),
            attributes: AttributeMap::new(),
            marked_for_delete: false,
            errors: BTreeMap::new(),
        }
    }

    /// Returns an attribute value, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Extract a string attribute.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(|v| v.as_str())
    }

    /// Extract a boolean attribute.
    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.attributes.get(name).and_then(|v| v.as_bool())
    }

    /// Extract a numeric attribute.
    #[must_use]
    pub fn get_number(&self, name: &str) -> Option<f64> {
        self.attributes.get(name).and_then(|v| v.as_f64())
    }

    /// Sets a single attribute unconditionally.
    ///
    /// Trusted-caller path: overlays and hooks use this. Untrusted input
    /// goes through [`Record::assign`].
    pub fn set(&mut self, name: &str, value: Value) {
        self.attributes.insert(name.to_string(), value);
    }

    /// Sets the attribute values in a massive way.
    ///
    /// Each incoming pair is applied only when its name is in `safe` — the
    /// assignable-attribute whitelist, typically
    /// [`RecordSchema::safe_attribute_names`](crate::RecordSchema::safe_attribute_names).
    /// Names outside the whitelist are skipped and logged, never applied.
    pub fn assign(&mut self, values: &AttributeMap, safe: &HashSet<String>) {
        for (name, value) in values {
            if safe.contains(name) {
                self.attributes.insert(name.clone(), value.clone());
            } else {
                debug!(
                    record_type = %self.record_type,
                    attribute = %name,
                    "skipping unsafe attribute in massive assignment"
                );
            }
        }
    }

    /// Marks this record for deletion on the next save pass.
    pub fn mark_delete(&mut self) {
        self.marked_for_delete = true;
    }

    /// Whether this record has been tombstoned.
    #[must_use]
    pub fn is_marked_for_delete(&self) -> bool {
        self.marked_for_delete
    }

    /// Attaches a validation message to an attribute.
    pub fn add_error(&mut self, attribute: &str, message: String) {
        self.errors.entry(attribute.to_string()).or_default().push(message);
    }

    /// Whether any attribute carries a validation message.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The validation messages attached to one attribute.
    #[must_use]
    pub fn errors_for(&self, attribute: &str) -> &[String] {
        self.errors.get(attribute).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Clears all validation messages.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }
}
