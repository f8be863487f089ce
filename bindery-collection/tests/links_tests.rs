use bindery_collection::{plan_link_writes, write_links, JunctionTable, LinkOp, LinkStore};
use bindery_model::RecordKey;

fn post_tag() -> JunctionTable {
    JunctionTable::new("post_tag", "post_id", "tag_id")
}

// ── Planning ─────────────────────────────────────────────────────

#[test]
fn plan_is_delete_then_one_insert_per_related_key() {
    let plan = plan_link_writes(&post_tag(), &7.into(), &[3.into(), 5.into()]);

    assert_eq!(plan.table, post_tag());
    assert_eq!(
        plan.ops,
        vec![
            LinkOp::DeleteByOwner { owner: 7.into() },
            LinkOp::Insert { owner: 7.into(), related: 3.into() },
            LinkOp::Insert { owner: 7.into(), related: 5.into() },
        ]
    );
}

#[test]
fn empty_related_set_plans_the_delete_alone() {
    let plan = plan_link_writes(&post_tag(), &7.into(), &[]);
    assert_eq!(plan.ops, vec![LinkOp::DeleteByOwner { owner: 7.into() }]);
}

#[test]
fn plan_preserves_related_key_order() {
    let related: Vec<RecordKey> = vec![9.into(), 1.into(), 4.into()];
    let plan = plan_link_writes(&post_tag(), &2.into(), &related);
    let inserted: Vec<_> = plan
        .ops
        .iter()
        .filter_map(|op| match op {
            LinkOp::Insert { related, .. } => Some(related.clone()),
            LinkOp::DeleteByOwner { .. } => None,
        })
        .collect();
    assert_eq!(inserted, related);
}

// ── Execution ────────────────────────────────────────────────────

#[derive(Default)]
struct MemoryStore {
    rows: Vec<(RecordKey, RecordKey)>,
    fail_on_insert_of: Option<RecordKey>,
}

impl LinkStore for MemoryStore {
    type Error = String;

    fn delete_by_owner(
        &mut self,
        _table: &JunctionTable,
        owner: &RecordKey,
    ) -> Result<(), Self::Error> {
        self.rows.retain(|(o, _)| o != owner);
        Ok(())
    }

    fn insert_link(
        &mut self,
        _table: &JunctionTable,
        owner: &RecordKey,
        related: &RecordKey,
    ) -> Result<(), Self::Error> {
        if self.fail_on_insert_of.as_ref() == Some(related) {
            return Err(format!("insert of {related} refused"));
        }
        let row = (owner.clone(), related.clone());
        if !self.rows.contains(&row) {
            self.rows.push(row);
        }
        Ok(())
    }
}

#[test]
fn write_links_rewrites_one_owners_rows() {
    let mut store = MemoryStore::default();
    store.rows.push((7.into(), 1.into()));
    store.rows.push((8.into(), 1.into()));

    let plan = plan_link_writes(&post_tag(), &7.into(), &[2.into(), 3.into()]);
    let applied = write_links(&mut store, &plan).unwrap();

    assert_eq!(applied, 3);
    // Owner 7 fully rewritten; owner 8 untouched.
    assert_eq!(
        store.rows,
        vec![
            (8.into(), 1.into()),
            (7.into(), 2.into()),
            (7.into(), 3.into()),
        ]
    );
}

#[test]
fn replaying_a_plan_is_idempotent() {
    let mut store = MemoryStore::default();
    let plan = plan_link_writes(&post_tag(), &7.into(), &[2.into()]);

    write_links(&mut store, &plan).unwrap();
    write_links(&mut store, &plan).unwrap();

    assert_eq!(store.rows, vec![(7.into(), 2.into())]);
}

#[test]
fn store_error_stops_the_plan() {
    let mut store = MemoryStore {
        fail_on_insert_of: Some(3.into()),
        ..Default::default()
    };
    let plan = plan_link_writes(&post_tag(), &7.into(), &[2.into(), 3.into(), 4.into()]);

    let err = write_links(&mut store, &plan).unwrap_err();
    assert!(err.contains("refused"));
    // The delete and the first insert landed; nothing after the failure did.
    assert_eq!(store.rows, vec![(7.into(), 2.into())]);
}
