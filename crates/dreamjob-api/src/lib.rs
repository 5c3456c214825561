//! # dreamjob-api
//!
//! HTTP API layer for DreamJob built on Axum.
//!
//! Exposes candidate CRUD with multipart file upload, raw file download,
//! and a health endpoint, plus request logging and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
