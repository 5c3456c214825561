//! File metadata record.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Metadata describing one stored blob.
///
/// Records are immutable once written: replacing a candidate's file means
/// writing a new record with a new id and deleting the old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct FileRecord {
    /// Server-assigned identifier. `0` means "not yet stored".
    pub id: i32,
    /// The display name supplied by the uploader.
    pub name: String,
    /// Where the blob store keeps the content. Never serialized outward.
    #[serde(skip_serializing, default)]
    pub storage_path: String,
}

impl FileRecord {
    /// Build a record that has not been persisted yet.
    pub fn new(name: impl Into<String>, storage_path: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            storage_path: storage_path.into(),
        }
    }
}
