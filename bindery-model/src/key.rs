//! Record identity within a collection.
//!
//! Keys arrive from two places: the collection's own container keys, and
//! posted identifier values (form fields, query strings), which are always
//! text. Canonical-integer text collapses to the integer form so that a
//! posted `"7"` addresses the record stored under `7`.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Identifies one record inside a [`RecordSet`](https://docs.rs/bindery-collection).
///
/// Either an integer or a string. Keys compare by value, never by
/// truthiness: `Int(0)` and `Str("0".into())` canonicalize to the same key
/// and are as present as any other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordKey {
    Int(i64),
    Str(String),
}

impl RecordKey {
    /// Builds a key from text, collapsing canonical integer forms.
    ///
    /// A string is canonical when it round-trips through `i64` unchanged:
    /// `"0"`, `"42"`, `"-7"` become [`RecordKey::Int`]; `"01"`, `" 1"`, and
    /// `"1.0"` stay strings. This mirrors how posted identifiers address
    /// integer-keyed records.
    #[must_use]
    pub fn canonical(s: &str) -> Self {
        match s.parse::<i64>() {
            Ok(n) if n.to_string() == s => Self::Int(n),
            _ => Self::Str(s.to_string()),
        }
    }

    /// Builds a key from a JSON scalar, if the value is one.
    ///
    /// Numbers must be integral; strings canonicalize. Returns `None` for
    /// any other JSON shape (including fractional numbers).
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_i64().map(Self::Int),
            serde_json::Value::String(s) => Some(Self::canonical(s)),
            _ => None,
        }
    }

    /// Returns the integer form, if this key is one.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Str(_) => None,
        }
    }

    /// The key as a JSON scalar, for writing into an attribute bag.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Int(n) => serde_json::Value::from(*n),
            Self::Str(s) => serde_json::Value::from(s.clone()),
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for RecordKey {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for RecordKey {
    fn from(s: &str) -> Self {
        Self::canonical(s)
    }
}

impl From<String> for RecordKey {
    fn from(s: String) -> Self {
        Self::canonical(&s)
    }
}

impl FromStr for RecordKey {
    type Err = Infallible;

    /// Every string is a key; canonical integer forms collapse to `Int`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::canonical(s))
    }
}
