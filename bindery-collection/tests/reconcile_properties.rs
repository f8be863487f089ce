//! Property-based tests for the reconciliation partition.
//!
//! Two invariants hold for every set/payload pair:
//! - Partition: the insert/update/delete sets split
//!   `keys(set) ∪ keys(payload)` with no key in more than one set.
//! - Idempotence: after applying a payload and purging tombstones (the save
//!   pass), reconciling the same payload again yields zero inserts and zero
//!   deletes.

use bindery_collection::{NoHooks, Payload, ReconcilePlan, Reconciler, RecordSet};
use bindery_model::{FieldSpec, Record, RecordKey, RecordSchema};
use proptest::prelude::*;
use std::collections::HashSet;

fn key_strategy() -> impl Strategy<Value = RecordKey> {
    prop_oneof![
        (0i64..40).prop_map(RecordKey::Int),
        "[a-e]{1,2}".prop_map(RecordKey::Str),
    ]
}

fn key_set_strategy() -> impl Strategy<Value = Vec<RecordKey>> {
    prop::collection::hash_set(key_strategy(), 0..12)
        .prop_map(|keys| keys.into_iter().collect())
}

fn set_from(keys: &[RecordKey]) -> RecordSet {
    keys.iter()
        .map(|k| (k.clone(), Record::new("item")))
        .collect()
}

fn schema() -> RecordSchema {
    RecordSchema::new("item", vec![FieldSpec::safe("name")])
}

proptest! {
    /// The three partitions cover the key union exactly once each.
    #[test]
    fn plan_partitions_the_key_union(
        existing in key_set_strategy(),
        posted in key_set_strategy(),
    ) {
        let set = set_from(&existing);
        let payload = Payload::IdList(posted.clone());
        let plan = ReconcilePlan::compute(&set, &payload, None);

        let union: HashSet<RecordKey> = existing.iter().chain(posted.iter()).cloned().collect();
        let mut covered: HashSet<RecordKey> = HashSet::new();
        for key in plan.to_insert.iter().chain(&plan.to_update).chain(&plan.to_delete) {
            // No key lands in two partitions.
            prop_assert!(covered.insert(key.clone()), "key {key} in two partitions");
        }
        prop_assert_eq!(covered, union);
    }

    /// Updates are the intersection, deletes set-minus-payload, inserts
    /// payload-minus-set.
    #[test]
    fn plan_respects_set_algebra(
        existing in key_set_strategy(),
        posted in key_set_strategy(),
    ) {
        let set = set_from(&existing);
        let payload = Payload::IdList(posted.clone());
        let plan = ReconcilePlan::compute(&set, &payload, None);

        let existing: HashSet<RecordKey> = existing.into_iter().collect();
        let posted: HashSet<RecordKey> = posted.into_iter().collect();

        for key in &plan.to_update {
            prop_assert!(existing.contains(key) && posted.contains(key));
        }
        for key in &plan.to_delete {
            prop_assert!(existing.contains(key) && !posted.contains(key));
        }
        for key in &plan.to_insert {
            prop_assert!(!existing.contains(key) && posted.contains(key));
        }
    }

    /// Reconcile → save → reconcile with the same payload is all updates.
    #[test]
    fn reconcile_is_idempotent_after_save(
        existing in key_set_strategy(),
        posted in key_set_strategy(),
    ) {
        let mut set = set_from(&existing);
        let payload = Payload::IdList(posted.clone());
        let reconciler = Reconciler::new().with_schema(schema());
        let parent = Default::default();

        reconciler.reconcile(&mut set, &payload, &parent, &mut NoHooks).unwrap();
        set.purge_deleted();

        let second = reconciler.reconcile(&mut set, &payload, &parent, &mut NoHooks).unwrap();

        prop_assert!(second.inserted.is_empty());
        prop_assert!(second.deleted.is_empty());
        prop_assert_eq!(second.updated.len(), posted.len());
    }

    /// Applying a plan's partition through the driver reports exactly the
    /// planned keys.
    #[test]
    fn outcome_agrees_with_plan(
        existing in key_set_strategy(),
        posted in key_set_strategy(),
    ) {
        let mut set = set_from(&existing);
        let payload = Payload::IdList(posted.clone());
        let reconciler = Reconciler::new().with_schema(schema());
        let plan = ReconcilePlan::compute(&set, &payload, None);

        let outcome = reconciler
            .reconcile(&mut set, &payload, &Default::default(), &mut NoHooks)
            .unwrap();

        prop_assert_eq!(outcome.inserted, plan.to_insert);
        prop_assert_eq!(outcome.updated, plan.to_update);
        prop_assert_eq!(outcome.deleted, plan.to_delete);
    }
}
