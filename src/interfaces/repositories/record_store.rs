use async_trait::async_trait;

use crate::{entities::record::Record, errors::AppError};

/// Generic persistence over one record type: all rows, first N rows, row by id,
/// plus the create/update/delete operations the admin scaffold needs.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// Rows ordered by id; `limit` caps the count.
    async fn list(&self, limit: Option<i64>) -> Result<Vec<T>, AppError>;

    async fn get(&self, id: i64) -> Result<T, AppError>;

    async fn create(&self, new: &T::New) -> Result<T, AppError>;

    async fn update(&self, id: i64, changes: &T::Changes) -> Result<T, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Reachability probe for the health endpoint.
    async fn check_connection(&self) -> Result<(), AppError> {
        Ok(())
    }
}

pub(crate) fn not_found<T: Record>(id: i64) -> AppError {
    AppError::NotFound(format!("{} {} not found", T::LABEL, id))
}

pub(crate) fn read_only<T: Record>() -> AppError {
    AppError::MethodNotAllowed(format!("{} records cannot be edited", T::LABEL))
}
