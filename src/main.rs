//! DreamJob Server: candidates and their attached files.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use dreamjob_api::AppState;
use dreamjob_core::config::AppConfig;
use dreamjob_core::error::AppError;
use dreamjob_database::RepositoryManager;
use dreamjob_service::FileService;
use dreamjob_storage::LocalBlobStore;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load `config/default.toml`, the `DREAMJOB_ENV` overlay and `DREAMJOB__*` variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("DREAMJOB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting DreamJob v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Blob storage root (fatal if it cannot be created) ──
    let store = LocalBlobStore::new(&config.storage.root_path).await?;

    // ── Step 2: Metadata store ───────────────────────────────────
    tracing::info!(provider = %config.database.provider, "Initializing metadata store");
    let repositories = RepositoryManager::new(&config.database).await?;

    // ── Step 3: Services and HTTP server ─────────────────────────
    let file_service = Arc::new(FileService::new(Arc::new(store), repositories.files()));
    let state = AppState::new(config, repositories.clone(), file_service);

    let result = dreamjob_api::app::run_server(state).await;

    repositories.close().await;
    tracing::info!("DreamJob server shut down");
    result
}
