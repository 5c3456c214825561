//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use dreamjob_core::config::AppConfig;
use dreamjob_database::RepositoryManager;
use dreamjob_service::{CandidateService, FileService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Metadata store (used for health reporting)
    pub repositories: RepositoryManager,
    /// Stored file lifecycle
    pub file_service: Arc<FileService>,
    /// Candidate lifecycle
    pub candidate_service: Arc<CandidateService>,
}

impl AppState {
    /// Wire the services on top of an existing repository manager.
    pub fn new(
        config: AppConfig,
        repositories: RepositoryManager,
        file_service: Arc<FileService>,
    ) -> Self {
        let candidate_service = Arc::new(CandidateService::new(
            repositories.candidates(),
            Arc::clone(&file_service),
        ));
        Self {
            config: Arc::new(config),
            repositories,
            file_service,
            candidate_service,
        }
    }
}
