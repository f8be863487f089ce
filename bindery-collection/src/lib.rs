//! Record-set reconciliation for bindery.
//!
//! A collection edited through a form comes back as a flat payload: either a
//! list of surviving identifiers, or a map of identifier → attribute data.
//! This crate diffs that payload against the currently attached records and
//! applies the insert/update/delete partition:
//!
//! - **[`RecordSet`]**: the insertion-ordered `RecordKey → Record` container
//! - **[`Payload`]**: normalized reconciliation input (id list or keyed map)
//! - **[`ReconcilePlan`]**: the pure keyed diff — which keys insert, update,
//!   delete
//! - **[`Reconciler`]**: applies a plan through default behaviors
//!   (construct + assign + overlay, overlay-only update, tombstone delete)
//!   that [`ReconcileHooks`] may intercept per record
//! - **[`plan_link_writes`]**: the junction-table write plan for
//!   many-to-many links (delete by owner, re-insert desired rows)
//!
//! Reconciliation is keyed, never positional: a record's key is its
//! configured id attribute when present, else its container key, and
//! membership is tested by key equality — an id of `0` is as present as any
//! other.
//!
//! # Example
//!
//! ```
//! use bindery_collection::{NoHooks, Payload, Reconciler, RecordSet};
//! use bindery_model::{FieldSpec, Record, RecordSchema};
//!
//! let mut set = RecordSet::new();
//! set.insert(1.into(), Record::new("tag_link"));
//! set.insert(2.into(), Record::new("tag_link"));
//!
//! let schema = RecordSchema::new("tag_link", vec![FieldSpec::safe("label")]);
//! let reconciler = Reconciler::new().with_schema(schema);
//!
//! let payload = Payload::from_id_list_value(serde_json::json!([2, 3])).unwrap();
//! let outcome = reconciler
//!     .reconcile(&mut set, &payload, &Default::default(), &mut NoHooks)
//!     .unwrap();
//!
//! assert_eq!(outcome.deleted, vec![1.into()]);
//! assert_eq!(outcome.updated, vec![2.into()]);
//! assert_eq!(outcome.inserted, vec![3.into()]);
//! ```

mod error;
mod links;
mod payload;
mod reconcile;
mod set;

pub use error::{CollectionError, CollectionResult};
pub use links::{plan_link_writes, write_links, JunctionTable, LinkOp, LinkStore, LinkWritePlan};
pub use payload::Payload;
pub use reconcile::{
    CopyAttribute, NoHooks, ReconcileHooks, ReconcileOutcome, ReconcilePlan, Reconciler,
};
pub use set::RecordSet;
