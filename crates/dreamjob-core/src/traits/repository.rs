//! Generic repository trait for record storage.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic record store keyed by a server-assigned id.
///
/// This trait is defined with generic type parameters so that each
/// entity can have a strongly typed repository. Entity-specific
/// operations are defined on extension traits next to the implementations.
///
/// Every implementation must be safe to share between concurrent callers
/// without external locking: two simultaneous [`Repository::save`] calls
/// never receive the same id.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static + serde::Serialize,
    Id: Send + Sync + 'static,
{
    /// Persist a new entity under a freshly assigned id and return the
    /// stored entity. Any id already present on the input is ignored.
    async fn save(&self, entity: &Entity) -> AppResult<Entity>;

    /// Find an entity by its id.
    async fn find_by_id(&self, id: &Id) -> AppResult<Option<Entity>>;

    /// Delete an entity by its id. Returns `true` if something was removed.
    async fn delete_by_id(&self, id: &Id) -> AppResult<bool>;

    /// List all entities ordered by id.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;
}
