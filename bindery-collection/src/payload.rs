//! Normalization of posted reconciliation input.

use crate::{CollectionError, CollectionResult};
use bindery_model::{AttributeMap, RecordKey};
use serde_json::Value;

/// Normalized reconciliation input.
///
/// Two forms exist in the wild: a bare list of surviving identifiers
/// (checkbox groups, multi-selects), and a map of identifier → attribute
/// data (tabular sub-forms). `null` and the empty string normalize to the
/// empty payload — an empty selection posts as `""` on most form stacks —
/// and everything else malformed fails fast with
/// [`CollectionError::InvalidPayload`] before any record is touched.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The surviving-id form. Data per key is unknown; reconciliation
    /// passes `None` to the update/insert paths.
    IdList(Vec<RecordKey>),
    /// The id → attribute-data form, in the order the entries arrived.
    KeyedMap(Vec<(RecordKey, AttributeMap)>),
}

impl Payload {
    /// Normalizes a raw posted value into the id-list form.
    ///
    /// Accepts an array of scalar keys, `null`, or `""`. Anything else —
    /// and any non-scalar list element — is an invalid payload.
    pub fn from_id_list_value(value: Value) -> CollectionResult<Self> {
        match value {
            Value::Null => Ok(Self::IdList(Vec::new())),
            Value::String(s) if s.is_empty() => Ok(Self::IdList(Vec::new())),
            Value::Array(items) => {
                let mut keys = Vec::with_capacity(items.len());
                for item in &items {
                    let key = RecordKey::from_json(item)
                        .ok_or_else(|| CollectionError::InvalidPayload(shape_of(item)))?;
                    keys.push(key);
                }
                Ok(Self::IdList(keys))
            }
            other => Err(CollectionError::InvalidPayload(shape_of(&other))),
        }
    }

    /// Normalizes a raw posted value into the keyed-map form.
    ///
    /// Accepts an object whose values are attribute objects, `null`, or
    /// `""`. Object keys canonicalize through [`RecordKey::canonical`], so
    /// `"7"` addresses the record keyed `7`.
    pub fn from_keyed_map_value(value: Value) -> CollectionResult<Self> {
        match value {
            Value::Null => Ok(Self::KeyedMap(Vec::new())),
            Value::String(s) if s.is_empty() => Ok(Self::KeyedMap(Vec::new())),
            Value::Object(map) => {
                let mut entries = Vec::with_capacity(map.len());
                for (raw_key, data) in map {
                    let attrs = data
                        .as_object()
                        .cloned()
                        .ok_or_else(|| CollectionError::InvalidPayload(shape_of(&data)))?;
                    entries.push((RecordKey::canonical(&raw_key), attrs));
                }
                Ok(Self::KeyedMap(entries))
            }
            other => Err(CollectionError::InvalidPayload(shape_of(&other))),
        }
    }

    /// Number of keys in the payload.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::IdList(keys) => keys.len(),
            Self::KeyedMap(entries) => entries.len(),
        }
    }

    /// True when the payload names no keys: reconciles to "delete
    /// everything, insert nothing".
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Membership test by key equality.
    #[must_use]
    pub fn contains(&self, key: &RecordKey) -> bool {
        match self {
            Self::IdList(keys) => keys.contains(key),
            Self::KeyedMap(entries) => entries.iter().any(|(k, _)| k == key),
        }
    }

    /// The attribute data associated with `key`, when this is a keyed map.
    #[must_use]
    pub fn data_for(&self, key: &RecordKey) -> Option<&AttributeMap> {
        match self {
            Self::IdList(_) => None,
            Self::KeyedMap(entries) => {
                entries.iter().find(|(k, _)| k == key).map(|(_, d)| d)
            }
        }
    }

    /// Iterates payload keys with their optional data, in payload order.
    pub fn entries(&self) -> Box<dyn Iterator<Item = (&RecordKey, Option<&AttributeMap>)> + '_> {
        match self {
            Self::IdList(keys) => Box::new(keys.iter().map(|k| (k, None))),
            Self::KeyedMap(entries) => {
                Box::new(entries.iter().map(|(k, d)| (k, Some(d))))
            }
        }
    }
}

fn shape_of(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "a boolean".to_string(),
        Value::Number(n) => format!("the number {n}"),
        Value::String(s) => format!("the string {s:?}"),
        Value::Array(_) => "an array".to_string(),
        Value::Object(_) => "an object".to_string(),
    }
}
