//! Core record model for bindery.
//!
//! Defines the types the reconciliation and formatting layers depend on:
//! - [`RecordKey`] — a child record's identity within a collection (integer
//!   or string, with canonical-integer coercion)
//! - [`Record`] — the generic data container (type name, JSON attribute bag,
//!   delete tombstone, per-attribute error bag)
//! - [`RecordSchema`] / [`FieldSpec`] — declares a record type's fields,
//!   which of them are massively assignable, and their default values
//!
//! Records carry arbitrary JSON attributes; structure is imposed externally
//! by a [`RecordSchema`]. Assignment from untrusted input always goes through
//! [`Record::assign`], which filters by the schema's safe-attribute set.

mod key;
mod record;
mod schema;

pub use key::RecordKey;
pub use record::Record;
pub use schema::{FieldSpec, RecordSchema};

/// The JSON object type used for attribute bags and incoming attribute data.
pub type AttributeMap = serde_json::Map<String, serde_json::Value>;
