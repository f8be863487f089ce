//! The insertion-ordered record container.

use bindery_model::{Record, RecordKey};
use serde::{Deserialize, Serialize};

/// An ordered mapping from [`RecordKey`] to [`Record`].
///
/// Every key maps to at most one record. Iteration follows insertion order;
/// inserting under an existing key replaces the record in place, keeping its
/// position. Order matters for display and for deterministic reconciliation
/// output, but reconciliation itself is keyed, not positional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSet {
    entries: Vec<(RecordKey, Record)>,
}

impl RecordSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Number of records, tombstoned ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the set holds no records at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of records not marked for delete.
    #[must_use]
    pub fn active_len(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, r)| !r.is_marked_for_delete())
            .count()
    }

    /// True when a record is attached under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &RecordKey) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Returns the record attached under `key`.
    #[must_use]
    pub fn get(&self, key: &RecordKey) -> Option<&Record> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, r)| r)
    }

    /// Mutable access to the record attached under `key`.
    pub fn get_mut(&mut self, key: &RecordKey) -> Option<&mut Record> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, r)| r)
    }

    /// Attaches `record` under `key`.
    ///
    /// Replaces in place when the key already exists (position preserved);
    /// appends otherwise. Returns the replaced record, if any.
    pub fn insert(&mut self, key: RecordKey, record: Record) -> Option<Record> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, record)),
            None => {
                self.entries.push((key, record));
                None
            }
        }
    }

    /// Appends `record` under the next free integer key and returns it.
    ///
    /// The next key is one past the largest integer key present, starting
    /// at 0 — the usual behavior of positional containers.
    pub fn append(&mut self, record: Record) -> RecordKey {
        let next = self
            .entries
            .iter()
            .filter_map(|(k, _)| k.as_int())
            .max()
            .map_or(0, |n| n + 1);
        let key = RecordKey::Int(next);
        self.entries.push((key.clone(), record));
        key
    }

    /// Detaches and returns the record under `key`.
    pub fn remove(&mut self, key: &RecordKey) -> Option<Record> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Physically removes tombstoned records, as a save pass does after
    /// issuing its deletes. Returns how many were dropped.
    pub fn purge_deleted(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(_, r)| !r.is_marked_for_delete());
        before - self.entries.len()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&RecordKey, &Record)> {
        self.entries.iter().map(|(k, r)| (k, r))
    }

    /// Iterates entries in insertion order with mutable records.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&RecordKey, &mut Record)> {
        self.entries.iter_mut().map(|(k, r)| (&*k, r))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &RecordKey> {
        self.entries.iter().map(|(k, _)| k)
    }
}

impl FromIterator<(RecordKey, Record)> for RecordSet {
    fn from_iter<I: IntoIterator<Item = (RecordKey, Record)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, record) in iter {
            set.insert(key, record);
        }
        set
    }
}
