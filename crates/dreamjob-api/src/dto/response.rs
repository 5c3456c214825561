//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dreamjob_entity::candidate::Candidate;

/// Candidate as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateResponse {
    /// Candidate id.
    pub id: i32,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Creation time.
    pub creation_date: DateTime<Utc>,
    /// City id.
    pub city_id: i32,
    /// Attached file id.
    pub file_id: i32,
    /// Where the attached file can be downloaded.
    pub file_url: String,
}

impl From<Candidate> for CandidateResponse {
    fn from(c: Candidate) -> Self {
        Self {
            file_url: format!("/files/{}", c.file_id),
            id: c.id,
            name: c.name,
            description: c.description,
            creation_date: c.creation_date,
            city_id: c.city_id,
            file_id: c.file_id,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` when every component is usable, `"degraded"` otherwise.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Blob store provider and whether it is usable.
    pub storage: ComponentHealth,
    /// Whether the metadata store is reachable.
    pub database: ComponentHealth,
}

/// Health of a single component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// Provider name.
    pub provider: String,
    /// Whether the component is usable.
    pub healthy: bool,
}
