//! Candidate entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A job candidate with exactly one attached file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Candidate {
    /// Server-assigned identifier. `0` means "not yet stored".
    pub id: i32,
    /// Candidate name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// When the candidate was created.
    pub creation_date: DateTime<Utc>,
    /// The city the candidate lives in.
    pub city_id: i32,
    /// The attached file record. `0` until the first file is stored.
    pub file_id: i32,
}

impl Candidate {
    /// Build a candidate that has not been persisted yet and has no file.
    pub fn new(name: impl Into<String>, description: impl Into<String>, city_id: i32) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            creation_date: Utc::now(),
            city_id,
            file_id: 0,
        }
    }

    /// Whether a file has been attached.
    pub fn has_file(&self) -> bool {
        self.file_id > 0
    }
}
