//! Blob store trait for pluggable content storage backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for raw file content storage.
///
/// A blob store only knows about bytes and opaque paths. It hands out a
/// fresh, collision-free path on every [`BlobStore::put`]; the path is
/// recorded by the caller and is never shown to anyone outside the
/// service layer.
///
/// Implementations must not retry internally: a single failed attempt is
/// surfaced immediately.
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// Check whether the store is usable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Store `data` under a newly generated unique path derived from
    /// `suggested_name` and return that path.
    ///
    /// A concurrent reader of the returned path sees either nothing or the
    /// complete content, never a partial write.
    async fn put(&self, data: Bytes, suggested_name: &str) -> AppResult<String>;

    /// Read the complete content stored at `path`.
    ///
    /// Returns a `NotFound` error when nothing is stored there.
    async fn get(&self, path: &str) -> AppResult<Bytes>;

    /// Delete the content at `path`. Deleting a missing path succeeds.
    async fn delete(&self, path: &str) -> AppResult<()>;
}
