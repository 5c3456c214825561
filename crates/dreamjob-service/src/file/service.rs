//! Stores, fetches and deletes files as blob plus metadata record.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use dreamjob_core::error::{AppError, ErrorKind};
use dreamjob_core::result::AppResult;
use dreamjob_core::traits::repository::Repository;
use dreamjob_core::traits::storage::BlobStore;
use dreamjob_database::repositories::FileRepository;
use dreamjob_entity::file::{FileContent, FileRecord};

/// Keeps blob content and [`FileRecord`]s consistent.
///
/// Ordering rules:
/// - `save` writes the blob before the record, so a record never points at
///   content that was not written. A failed record write leaves an orphaned
///   blob behind, which is tolerated.
/// - `delete_by_id` removes the blob before the record.
#[derive(Clone)]
pub struct FileService {
    /// Where the bytes go.
    store: Arc<dyn BlobStore>,
    /// Where the metadata goes.
    files: Arc<dyn FileRepository>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(store: Arc<dyn BlobStore>, files: Arc<dyn FileRepository>) -> Self {
        Self { store, files }
    }

    /// Store `content` and return the persisted record.
    ///
    /// Empty content is stored as a zero-length blob.
    pub async fn save(&self, content: FileContent) -> AppResult<FileRecord> {
        let FileContent { name, data } = content;
        let size = data.len();

        let path = self.store.put(data, &name).await?;
        let record = self.files.save(&FileRecord::new(name, path)).await?;

        info!(file_id = record.id, name = %record.name, size, "Stored file");
        Ok(record)
    }

    /// Load the content of the file with the given id.
    ///
    /// Returns `Ok(None)` when no record exists. A record whose blob is gone
    /// or unreadable is a `Storage` error, never empty content.
    pub async fn fetch(&self, id: i32) -> AppResult<Option<FileContent>> {
        let Some(record) = self.files.find_by_id(&id).await? else {
            debug!(file_id = id, "File record not found");
            return Ok(None);
        };

        let data = self.store.get(&record.storage_path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("File {id} references a missing or unreadable blob"),
                e,
            )
        })?;

        Ok(Some(FileContent::new(record.name, data)))
    }

    /// Delete the file with the given id. Deleting an unknown id is a no-op.
    pub async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        let Some(record) = self.files.find_by_id(&id).await? else {
            debug!(file_id = id, "Nothing to delete");
            return Ok(());
        };

        self.store.delete(&record.storage_path).await?;
        self.files.delete_by_id(&id).await?;

        info!(file_id = id, "Deleted file");
        Ok(())
    }

    /// Whether the blob store is usable.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.store.health_check().await
    }

    /// Provider name of the blob store.
    pub fn storage_provider(&self) -> &str {
        self.store.provider_type()
    }
}

impl fmt::Debug for FileService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileService")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
