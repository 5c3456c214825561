//! Repository manager that dispatches to the configured metadata store.

use std::fmt;
use std::sync::Arc;

use tracing::info;

use dreamjob_core::config::DatabaseConfig;
use dreamjob_core::error::AppError;
use dreamjob_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::repositories::{
    CandidateRepository, FileRepository, PgCandidateRepository, PgFileRepository,
};

/// Holds the file and candidate repositories for the configured provider.
///
/// The provider is selected at construction time based on configuration.
#[derive(Clone)]
pub struct RepositoryManager {
    files: Arc<dyn FileRepository>,
    candidates: Arc<dyn CandidateRepository>,
    /// Name of the backing provider.
    provider: &'static str,
    /// Present only for the `postgres` provider.
    pool: Option<DatabasePool>,
}

impl RepositoryManager {
    /// Create the repositories named by `config.provider`.
    ///
    /// For `postgres` this connects and applies pending migrations.
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL repositories");
                let pool = DatabasePool::connect(config).await?;
                crate::migration::run_migrations(pool.pool()).await?;
                Ok(Self {
                    files: Arc::new(PgFileRepository::new(pool.pool().clone())),
                    candidates: Arc::new(PgCandidateRepository::new(pool.pool().clone())),
                    provider: "postgres",
                    pool: Some(pool),
                })
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory repositories");
                Ok(Self::in_memory())
            }
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// Fresh, empty in-memory repositories.
    #[cfg(feature = "memory")]
    pub fn in_memory() -> Self {
        Self {
            provider: "memory",
            ..Self::from_repositories(
                Arc::new(crate::memory::MemoryFileRepository::new()),
                Arc::new(crate::memory::MemoryCandidateRepository::new()),
            )
        }
    }

    /// Wrap existing repositories (for testing).
    pub fn from_repositories(
        files: Arc<dyn FileRepository>,
        candidates: Arc<dyn CandidateRepository>,
    ) -> Self {
        Self {
            files,
            candidates,
            provider: "custom",
            pool: None,
        }
    }

    /// Name of the backing provider: `postgres`, `memory` or `custom`.
    pub fn provider(&self) -> &str {
        self.provider
    }

    /// The file record repository.
    pub fn files(&self) -> Arc<dyn FileRepository> {
        Arc::clone(&self.files)
    }

    /// The candidate repository.
    pub fn candidates(&self) -> Arc<dyn CandidateRepository> {
        Arc::clone(&self.candidates)
    }

    /// Check that the metadata store is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release database connections, if any.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

impl fmt::Debug for RepositoryManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepositoryManager")
            .field("provider", &self.provider)
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}
