//! PostgreSQL file record repository.

use async_trait::async_trait;
use sqlx::PgPool;

use dreamjob_core::error::{AppError, ErrorKind};
use dreamjob_core::result::AppResult;
use dreamjob_core::traits::repository::Repository;
use dreamjob_entity::file::FileRecord;

/// File records backed by the `files` table.
#[derive(Debug, Clone)]
pub struct PgFileRepository {
    pool: PgPool,
}

impl PgFileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<FileRecord, i32> for PgFileRepository {
    async fn save(&self, entity: &FileRecord) -> AppResult<FileRecord> {
        sqlx::query_as::<_, FileRecord>(
            "INSERT INTO files (name, storage_path) VALUES ($1, $2) \
             RETURNING id, name, storage_path",
        )
        .bind(&entity.name)
        .bind(&entity.storage_path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to save file record", e))
    }

    async fn find_by_id(&self, id: &i32) -> AppResult<Option<FileRecord>> {
        sqlx::query_as::<_, FileRecord>("SELECT id, name, storage_path FROM files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file record", e))
    }

    async fn delete_by_id(&self, id: &i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM files WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete file record", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_all(&self) -> AppResult<Vec<FileRecord>> {
        sqlx::query_as::<_, FileRecord>("SELECT id, name, storage_path FROM files ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list file records", e))
    }
}
