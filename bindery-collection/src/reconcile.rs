//! The keyed diff and its default behaviors.

use crate::{CollectionError, CollectionResult, Payload, RecordSet};
use bindery_model::{AttributeMap, Record, RecordKey, RecordSchema};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A child attribute populated from the owning context.
///
/// `child` is set from the parent attribute named `parent`; the two names
/// coincide in the common case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyAttribute {
    pub child: String,
    pub parent: String,
}

impl CopyAttribute {
    /// Copies a parent attribute into the same-named child attribute.
    #[must_use]
    pub fn same(name: &str) -> Self {
        Self { child: name.to_string(), parent: name.to_string() }
    }

    /// Copies a parent attribute into a differently-named child attribute.
    #[must_use]
    pub fn renamed(child: &str, parent: &str) -> Self {
        Self { child: child.to_string(), parent: parent.to_string() }
    }
}

/// Per-record interception of the reconciliation paths.
///
/// Each method is consulted before the default behavior for its record;
/// returning `true` means "handled" and suppresses the default. All three
/// default to `false`, so most callers implement only the path they
/// customize — or use [`NoHooks`].
///
/// Suppression changes what happens to the record, not which partition its
/// key lands in: a handled delete is still reported as deleted.
pub trait ReconcileHooks {
    /// A key present in the payload but absent from the set.
    /// Default behavior when unhandled: construct, assign, overlay, attach.
    fn on_insert(&mut self, key: &RecordKey, data: Option<&AttributeMap>) -> bool {
        let _ = (key, data);
        false
    }

    /// A key present in both the set and the payload.
    /// Default behavior when unhandled: apply the copy/force overlay only.
    fn on_update(
        &mut self,
        key: &RecordKey,
        record: &mut Record,
        data: Option<&AttributeMap>,
    ) -> bool {
        let _ = (key, record, data);
        false
    }

    /// A key present in the set but absent from the payload.
    /// Default behavior when unhandled: tombstone via `mark_delete`.
    fn on_delete(&mut self, key: &RecordKey, record: &mut Record) -> bool {
        let _ = (key, record);
        false
    }
}

/// The no-op hook set: every path takes its default behavior.
pub struct NoHooks;

impl ReconcileHooks for NoHooks {}

/// The pure keyed diff of a set against a payload.
///
/// `to_update` and `to_delete` follow set iteration order; `to_insert`
/// follows payload order. The three vectors partition
/// `keys(set) ∪ keys(payload)` — no key appears in more than one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconcilePlan {
    pub to_insert: Vec<RecordKey>,
    pub to_update: Vec<RecordKey>,
    pub to_delete: Vec<RecordKey>,
}

impl ReconcilePlan {
    /// Computes the partition without touching the set.
    ///
    /// A record's effective key is its `id_attribute` value when that
    /// attribute is configured and present, else its container key.
    #[must_use]
    pub fn compute(set: &RecordSet, payload: &Payload, id_attribute: Option<&str>) -> Self {
        let mut seen = Vec::with_capacity(set.len());
        let mut to_update = Vec::new();
        let mut to_delete = Vec::new();

        for (container_key, record) in set.iter() {
            let key = effective_key(container_key, record, id_attribute);
            if payload.contains(&key) {
                to_update.push(key.clone());
            } else {
                to_delete.push(key.clone());
            }
            seen.push(key);
        }

        let to_insert = payload
            .entries()
            .filter(|(key, _)| !seen.contains(key))
            .map(|(key, _)| key.clone())
            .collect();

        Self { to_insert, to_update, to_delete }
    }
}

/// What a reconcile pass applied, per partition, in application order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReconcileOutcome {
    pub inserted: Vec<RecordKey>,
    pub updated: Vec<RecordKey>,
    pub deleted: Vec<RecordKey>,
}

/// Applies a payload to a record set through the default behaviors.
///
/// Configuration mirrors the collection it reconciles:
/// - `schema` constructs new records and supplies the massive-assignment
///   whitelist;
/// - `id_attribute` names the attribute carrying a record's key when the
///   set is not keyed by id directly (new records get it assigned);
/// - `copy_attributes` are populated from the parent context on every
///   insert and update;
/// - `force_attributes` are overwritten on every insert and update;
/// - `default_attributes` are applied to genuinely new records only.
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    pub schema: Option<RecordSchema>,
    pub id_attribute: Option<String>,
    pub copy_attributes: Vec<CopyAttribute>,
    pub force_attributes: AttributeMap,
    pub default_attributes: AttributeMap,
}

impl Reconciler {
    /// Creates a reconciler with no schema and no overlays.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the schema used to construct inserted records.
    #[must_use]
    pub fn with_schema(mut self, schema: RecordSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Names the attribute that supplies a record's key.
    #[must_use]
    pub fn with_id_attribute(mut self, name: &str) -> Self {
        self.id_attribute = Some(name.to_string());
        self
    }

    /// Adds a copy-from-parent overlay attribute.
    #[must_use]
    pub fn copy_attribute(mut self, copy: CopyAttribute) -> Self {
        self.copy_attributes.push(copy);
        self
    }

    /// Adds an always-overwritten overlay attribute.
    #[must_use]
    pub fn force_attribute(mut self, name: &str, value: serde_json::Value) -> Self {
        self.force_attributes.insert(name.to_string(), value);
        self
    }

    /// Adds a new-records-only overlay attribute.
    #[must_use]
    pub fn default_attribute(mut self, name: &str, value: serde_json::Value) -> Self {
        self.default_attributes.insert(name.to_string(), value);
        self
    }

    /// Reconciles `set` against `payload`, mutating `set` in place.
    ///
    /// Walks existing records in insertion order (update or delete), then
    /// attaches the payload keys not seen (insert). `parent` supplies the
    /// values for `copy_attributes`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::MissingSchema`] when an unhandled insert has no
    /// schema to construct from. Updates and deletes applied before the
    /// failing insert stay applied; callers needing atomicity check
    /// [`ReconcilePlan::compute`] (pure) before reconciling.
    pub fn reconcile(
        &self,
        set: &mut RecordSet,
        payload: &Payload,
        parent: &AttributeMap,
        hooks: &mut dyn ReconcileHooks,
    ) -> CollectionResult<ReconcileOutcome> {
        let mut outcome = ReconcileOutcome::default();
        let mut seen = Vec::with_capacity(set.len());

        for (container_key, record) in set.iter_mut() {
            let key = effective_key(container_key, record, self.id_attribute.as_deref());
            if payload.contains(&key) {
                let data = payload.data_for(&key);
                if !hooks.on_update(&key, record, data) {
                    // Incoming data is intentionally not applied here: the
                    // default policy lets existing records keep their
                    // attributes plus the overlay.
                    self.apply_overlay(record, parent, false);
                }
                debug!(key = %key, "reconcile: updated record");
                outcome.updated.push(key.clone());
            } else {
                if !hooks.on_delete(&key, record) {
                    record.mark_delete();
                }
                debug!(key = %key, "reconcile: deleted record");
                outcome.deleted.push(key.clone());
            }
            seen.push(key);
        }

        let to_insert: Vec<(RecordKey, Option<AttributeMap>)> = payload
            .entries()
            .filter(|(key, _)| !seen.contains(key))
            .map(|(key, data)| (key.clone(), data.cloned()))
            .collect();

        for (key, data) in to_insert {
            if !hooks.on_insert(&key, data.as_ref()) {
                let record = self.build_record(&key, data.as_ref(), parent)?;
                set.insert(key.clone(), record);
            }
            debug!(key = %key, "reconcile: inserted record");
            outcome.inserted.push(key);
        }

        Ok(outcome)
    }

    /// The default insert path: construct from the schema, assign the id
    /// attribute and the payload data, then overlay.
    fn build_record(
        &self,
        key: &RecordKey,
        data: Option<&AttributeMap>,
        parent: &AttributeMap,
    ) -> CollectionResult<Record> {
        let schema = self
            .schema
            .as_ref()
            .ok_or_else(|| CollectionError::MissingSchema(key.clone()))?;

        let mut record = schema.new_record();
        if let Some(id_attribute) = &self.id_attribute {
            record.set(id_attribute, key.to_json());
        }
        if let Some(data) = data {
            record.assign(data, &schema.safe_attribute_names());
        }
        self.apply_overlay(&mut record, parent, true);
        Ok(record)
    }

    /// Copy attributes from the parent context, then forced values, then —
    /// for new records only — the new-record defaults.
    fn apply_overlay(&self, record: &mut Record, parent: &AttributeMap, is_new: bool) {
        for copy in &self.copy_attributes {
            if let Some(value) = parent.get(&copy.parent) {
                record.set(&copy.child, value.clone());
            }
        }
        for (name, value) in &self.force_attributes {
            record.set(name, value.clone());
        }
        if is_new {
            for (name, value) in &self.default_attributes {
                record.set(name, value.clone());
            }
        }
    }
}

/// A record's key for reconciliation: the configured id attribute when
/// present on the record, else the container key.
fn effective_key(
    container_key: &RecordKey,
    record: &Record,
    id_attribute: Option<&str>,
) -> RecordKey {
    id_attribute
        .and_then(|name| record.get(name))
        .and_then(RecordKey::from_json)
        .unwrap_or_else(|| container_key.clone())
}
