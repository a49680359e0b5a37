use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::{
    entities::record::Record,
    errors::AppError,
    repositories::record_store::{not_found, read_only, RecordStore},
};

/// Process-local store used when no database is configured, and in tests.
pub struct MemoryStore<T> {
    rows: RwLock<Vec<T>>,
    next_id: AtomicI64,
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        MemoryStore {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for MemoryStore<T> {
    async fn list(&self, limit: Option<i64>) -> Result<Vec<T>, AppError> {
        let rows = self.rows.read();
        let take = limit
            .map(|l| usize::try_from(l.max(0)).unwrap_or(usize::MAX))
            .unwrap_or(usize::MAX);
        Ok(rows.iter().take(take).cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<T, AppError> {
        self.rows
            .read()
            .iter()
            .find(|row| row.id() == id)
            .cloned()
            .ok_or_else(|| not_found::<T>(id))
    }

    async fn create(&self, new: &T::New) -> Result<T, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let row = T::from_new(id, Utc::now(), new);
        self.rows.write().push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: i64, changes: &T::Changes) -> Result<T, AppError> {
        if !T::EDITABLE {
            return Err(read_only::<T>());
        }

        let mut rows = self.rows.write();
        let row = rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or_else(|| not_found::<T>(id))?;
        row.apply_changes(changes);
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut rows = self.rows.write();
        let before = rows.len();
        rows.retain(|row| row.id() != id);

        if rows.len() == before {
            return Err(not_found::<T>(id));
        }

        Ok(())
    }
}
