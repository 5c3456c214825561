//! Convenience result type alias for DreamJob.

use crate::error::AppError;

/// A specialized `Result` type for DreamJob operations.
pub type AppResult<T> = Result<T, AppError>;
