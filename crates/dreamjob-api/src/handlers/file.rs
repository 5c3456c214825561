//! Raw file download.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;

use dreamjob_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /files/{id}
pub async fn download_file(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let content = state
        .file_service
        .fetch(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("File {id} not found")))?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .header(header::CONTENT_DISPOSITION, content_disposition(&content.name))
        .header(header::CONTENT_LENGTH, content.len())
        .body(Body::from(content.data))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}

/// `attachment` disposition with a header-safe rendering of `name`.
fn content_disposition(name: &str) -> String {
    let safe: String = name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect();
    format!("attachment; filename=\"{safe}\"")
}
