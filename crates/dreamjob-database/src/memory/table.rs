//! Concurrent id-keyed table shared by the in-memory repositories.

use std::sync::atomic::{AtomicI32, Ordering};

use dashmap::DashMap;

use dreamjob_core::error::AppError;
use dreamjob_core::result::AppResult;

/// A map from server-assigned ids to rows.
///
/// Ids start at 1 and come from an atomic counter, so concurrent inserts
/// never share an id and ids are never reused after deletion.
#[derive(Debug)]
pub struct IdTable<T> {
    rows: DashMap<i32, T>,
    next_id: AtomicI32,
}

impl<T: Clone> IdTable<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicI32::new(1),
        }
    }

    /// Allocate a fresh id, let `build` stamp it onto a row, and store the row.
    pub fn insert_with(&self, build: impl FnOnce(i32) -> T) -> AppResult<T> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        if id < 1 {
            return Err(AppError::database("In-memory id space exhausted"));
        }
        let row = build(id);
        self.rows.insert(id, row.clone());
        Ok(row)
    }

    /// Clone of the row with the given id.
    pub fn get(&self, id: i32) -> Option<T> {
        self.rows.get(&id).map(|row| row.value().clone())
    }

    /// Remove a row and hand it back, if it existed.
    pub fn remove(&self, id: i32) -> Option<T> {
        self.rows.remove(&id).map(|(_, row)| row)
    }

    /// Mutate the row in place under its shard lock.
    ///
    /// `apply` sees the row before the change, so whatever it returns was read
    /// atomically with the write. `None` when there is no row with that id.
    pub fn update<R>(&self, id: i32, apply: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.rows.get_mut(&id).map(|mut row| apply(row.value_mut()))
    }

    /// Snapshot of all rows ordered by id.
    pub fn values(&self) -> Vec<T> {
        let mut rows: Vec<(i32, T)> = self
            .rows
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();
        rows.sort_by_key(|(id, _)| *id);
        rows.into_iter().map(|(_, row)| row).collect()
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T: Clone> Default for IdTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
