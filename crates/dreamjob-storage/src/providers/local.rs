//! Local filesystem blob store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};
use uuid::Uuid;

use dreamjob_core::error::{AppError, ErrorKind};
use dreamjob_core::result::AppResult;
use dreamjob_core::traits::storage::BlobStore;

/// Longest suffix of the suggested name kept in a blob file name.
const MAX_NAME_BYTES: usize = 200;

/// Local filesystem blob store.
///
/// Every blob lives directly under `root` as `{uuid}{name}`. The UUID is a
/// fresh v4 value per write, so concurrent writers never need to coordinate.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    /// Directory holding all blobs.
    root: PathBuf,
}

impl LocalBlobStore {
    /// Create a blob store rooted at the given path, creating the directory
    /// if it does not exist yet.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Startup,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        info!(root = %root.display(), "Blob storage root ready");
        Ok(Self { root })
    }

    /// Build a fresh, unique path for a blob with the given suggested name.
    fn new_blob_path(&self, suggested_name: &str) -> PathBuf {
        let token = Uuid::new_v4();
        self.root
            .join(format!("{token}{}", sanitize_name(suggested_name)))
    }

    /// Write `data` to `temp_path` and flush it to disk.
    async fn write_temp(temp_path: &Path, data: &[u8]) -> std::io::Result<()> {
        let mut file = fs::File::create(temp_path).await?;
        file.write_all(data).await?;
        file.sync_all().await?;
        Ok(())
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(fs::metadata(&self.root)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false))
    }

    async fn put(&self, data: Bytes, suggested_name: &str) -> AppResult<String> {
        let full_path = self.new_blob_path(suggested_name);
        let temp_path = temp_path_for(&full_path);

        // Readers only ever see the final name after the rename.
        if let Err(e) = Self::write_temp(&temp_path, &data).await {
            let _ = fs::remove_file(&temp_path).await;
            warn!(path = %full_path.display(), error = %e, "Blob write failed");
            return Err(AppError::with_source(
                ErrorKind::Storage,
                "Failed to write blob",
                e,
            ));
        }

        if let Err(e) = fs::rename(&temp_path, &full_path).await {
            let _ = fs::remove_file(&temp_path).await;
            warn!(path = %full_path.display(), error = %e, "Blob rename failed");
            return Err(AppError::with_source(
                ErrorKind::Storage,
                "Failed to move blob into place",
                e,
            ));
        }

        let path = full_path.to_string_lossy().into_owned();
        debug!(path = %path, bytes = data.len(), "Stored blob");
        Ok(path)
    }

    async fn get(&self, path: &str) -> AppResult<Bytes> {
        let data = fs::read(path).await.map_err(|e| {
            warn!(path, error = %e, "Blob read failed");
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found("Blob not found")
            } else {
                AppError::with_source(ErrorKind::Storage, "Failed to read blob", e)
            }
        })?;
        Ok(Bytes::from(data))
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        match fs::remove_file(path).await {
            Ok(()) => {
                debug!(path, "Deleted blob");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                warn!(path, error = %e, "Blob delete failed");
                Err(AppError::with_source(
                    ErrorKind::Storage,
                    "Failed to delete blob",
                    e,
                ))
            }
        }
    }
}

/// Reduce an uploader-supplied name to something safe to append to a token.
///
/// Only the last path component survives, so the blob always lands directly
/// under the root. Overlong names keep their tail (and thus the extension).
fn sanitize_name(name: &str) -> &str {
    let last = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let last = match last {
        "." | ".." => "",
        other => other,
    };

    if last.len() <= MAX_NAME_BYTES {
        return last;
    }
    let mut start = last.len() - MAX_NAME_BYTES;
    while !last.is_char_boundary(start) {
        start += 1;
    }
    &last[start..]
}

/// Sibling path used while a blob is being written.
fn temp_path_for(full_path: &Path) -> PathBuf {
    let file_name = full_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    full_path.with_file_name(format!(".{file_name}.part"))
}
