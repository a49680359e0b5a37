use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use validator::{Validate, ValidationErrors};

/// A row type persisted by a `RecordStore` and exposed by the admin scaffold.
///
/// `New` is the create payload, `Changes` the partial update payload.
/// Ids and `created_at` are always assigned by the store.
pub trait Record: Serialize + Clone + Send + Sync + 'static {
    type New: DeserializeOwned + Validate + Clone + Send + Sync + 'static;
    type Changes: DeserializeOwned + Validate + Send + Sync + 'static;

    /// Human readable type name used in error messages.
    const LABEL: &'static str;

    /// Whether rows may be modified after creation.
    const EDITABLE: bool = true;

    fn id(&self) -> i64;

    fn from_new(id: i64, created_at: DateTime<Utc>, new: &Self::New) -> Self;

    fn apply_changes(&mut self, changes: &Self::Changes);
}

/// Update payload for record types that cannot be edited.
#[derive(Debug, Default, Clone, serde::Deserialize)]
pub struct NoChanges {}

impl Validate for NoChanges {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}
