//! Junction-table write planning for many-to-many links.
//!
//! Saving a many-to-many relation rewrites one owner's rows in the junction
//! table: every existing row for the owner is deleted, then one row per
//! desired related key is inserted. Both store operations are idempotent by
//! contract (delete of nothing and insert of an existing pair are no-ops),
//! so replaying a plan is harmless.
//!
//! This module plans the writes as data; executing them against a real
//! database is the caller's concern, behind [`LinkStore`].

use bindery_model::RecordKey;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Addresses a junction table: the table name and its two key columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JunctionTable {
    pub table: String,
    pub owner_column: String,
    pub related_column: String,
}

impl JunctionTable {
    #[must_use]
    pub fn new(table: &str, owner_column: &str, related_column: &str) -> Self {
        Self {
            table: table.to_string(),
            owner_column: owner_column.to_string(),
            related_column: related_column.to_string(),
        }
    }
}

/// One planned junction write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LinkOp {
    /// Remove every row whose owner column equals `owner`.
    DeleteByOwner { owner: RecordKey },
    /// Insert the `(owner, related)` pair if absent.
    Insert { owner: RecordKey, related: RecordKey },
}

/// The ordered writes that rewrite one owner's links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkWritePlan {
    pub table: JunctionTable,
    pub ops: Vec<LinkOp>,
}

/// Plans the rewrite of `owner`'s junction rows to exactly `related`.
///
/// One [`LinkOp::DeleteByOwner`] followed by one [`LinkOp::Insert`] per
/// related key, in input order. An empty `related` slice plans the delete
/// alone — the "unlink everything" case.
#[must_use]
pub fn plan_link_writes(
    table: &JunctionTable,
    owner: &RecordKey,
    related: &[RecordKey],
) -> LinkWritePlan {
    let mut ops = Vec::with_capacity(related.len() + 1);
    ops.push(LinkOp::DeleteByOwner { owner: owner.clone() });
    for key in related {
        ops.push(LinkOp::Insert { owner: owner.clone(), related: key.clone() });
    }
    LinkWritePlan { table: table.clone(), ops }
}

/// Executes junction writes. Implementations must make both operations
/// idempotent: deleting absent rows and inserting an existing pair succeed
/// without effect.
pub trait LinkStore {
    type Error;

    fn delete_by_owner(
        &mut self,
        table: &JunctionTable,
        owner: &RecordKey,
    ) -> Result<(), Self::Error>;

    fn insert_link(
        &mut self,
        table: &JunctionTable,
        owner: &RecordKey,
        related: &RecordKey,
    ) -> Result<(), Self::Error>;
}

/// Drives a [`LinkStore`] through a plan, stopping at the first store
/// error. Returns the number of operations applied.
pub fn write_links<S: LinkStore>(store: &mut S, plan: &LinkWritePlan) -> Result<usize, S::Error> {
    let mut applied = 0;
    for op in &plan.ops {
        match op {
            LinkOp::DeleteByOwner { owner } => {
                debug!(table = %plan.table.table, owner = %owner, "link write: delete by owner");
                store.delete_by_owner(&plan.table, owner)?;
            }
            LinkOp::Insert { owner, related } => {
                debug!(table = %plan.table.table, owner = %owner, related = %related, "link write: insert");
                store.insert_link(&plan.table, owner, related)?;
            }
        }
        applied += 1;
    }
    Ok(applied)
}
