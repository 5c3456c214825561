//! In-memory file record repository.

use async_trait::async_trait;

use dreamjob_core::result::AppResult;
use dreamjob_core::traits::repository::Repository;
use dreamjob_entity::file::FileRecord;

use super::IdTable;

/// File records held in process memory.
#[derive(Debug, Default)]
pub struct MemoryFileRepository {
    table: IdTable<FileRecord>,
}

impl MemoryFileRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<FileRecord, i32> for MemoryFileRepository {
    async fn save(&self, entity: &FileRecord) -> AppResult<FileRecord> {
        self.table.insert_with(|id| FileRecord {
            id,
            ..entity.clone()
        })
    }

    async fn find_by_id(&self, id: &i32) -> AppResult<Option<FileRecord>> {
        Ok(self.table.get(*id))
    }

    async fn delete_by_id(&self, id: &i32) -> AppResult<bool> {
        Ok(self.table.remove(*id).is_some())
    }

    async fn find_all(&self) -> AppResult<Vec<FileRecord>> {
        Ok(self.table.values())
    }
}
