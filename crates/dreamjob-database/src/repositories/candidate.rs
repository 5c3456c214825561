//! PostgreSQL candidate repository.

use async_trait::async_trait;
use sqlx::PgPool;

use dreamjob_core::error::{AppError, ErrorKind};
use dreamjob_core::result::AppResult;
use dreamjob_core::traits::repository::Repository;
use dreamjob_entity::candidate::Candidate;

use super::CandidateRepository;

const COLUMNS: &str = "id, name, description, creation_date, city_id, file_id";

/// Candidates backed by the `candidates` table.
#[derive(Debug, Clone)]
pub struct PgCandidateRepository {
    pool: PgPool,
}

impl PgCandidateRepository {
    /// Create a new candidate repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Candidate, i32> for PgCandidateRepository {
    async fn save(&self, entity: &Candidate) -> AppResult<Candidate> {
        sqlx::query_as::<_, Candidate>(&format!(
            "INSERT INTO candidates (name, description, creation_date, city_id, file_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
        ))
        .bind(&entity.name)
        .bind(&entity.description)
        .bind(entity.creation_date)
        .bind(entity.city_id)
        .bind(entity.file_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to save candidate", e))
    }

    async fn find_by_id(&self, id: &i32) -> AppResult<Option<Candidate>> {
        sqlx::query_as::<_, Candidate>(&format!("SELECT {COLUMNS} FROM candidates WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find candidate", e))
    }

    async fn delete_by_id(&self, id: &i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM candidates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete candidate", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_all(&self) -> AppResult<Vec<Candidate>> {
        sqlx::query_as::<_, Candidate>(&format!("SELECT {COLUMNS} FROM candidates ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list candidates", e))
    }
}

#[async_trait]
impl CandidateRepository for PgCandidateRepository {
    async fn update(&self, candidate: &Candidate) -> AppResult<Option<i32>> {
        // The row lock taken by the subquery makes the returned file id the
        // one this statement overwrote, even with concurrent writers.
        sqlx::query_scalar::<_, i32>(
            "UPDATE candidates c \
             SET name = $2, description = $3, city_id = $4, file_id = $5 \
             FROM (SELECT id, file_id FROM candidates WHERE id = $1 FOR UPDATE) old \
             WHERE c.id = old.id \
             RETURNING old.file_id",
        )
        .bind(candidate.id)
        .bind(&candidate.name)
        .bind(&candidate.description)
        .bind(candidate.city_id)
        .bind(candidate.file_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update candidate", e))
    }

    async fn update_details(&self, candidate: &Candidate) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE candidates SET name = $2, description = $3, city_id = $4 WHERE id = $1",
        )
        .bind(candidate.id)
        .bind(&candidate.name)
        .bind(&candidate.description)
        .bind(candidate.city_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update candidate details", e)
        })?;
        Ok(result.rows_affected() > 0)
    }

    async fn take_by_id(&self, id: &i32) -> AppResult<Option<Candidate>> {
        sqlx::query_as::<_, Candidate>(&format!(
            "DELETE FROM candidates WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete candidate", e))
    }
}
