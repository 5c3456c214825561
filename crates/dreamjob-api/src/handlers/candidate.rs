//! Candidate CRUD handlers.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;

use dreamjob_entity::candidate::Candidate;

use crate::dto::request::CandidateForm;
use crate::dto::response::CandidateResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/candidates
pub async fn list_candidates(
    State(state): State<AppState>,
) -> Result<Json<Vec<CandidateResponse>>, ApiError> {
    let candidates = state.candidate_service.find_all().await?;
    Ok(Json(candidates.into_iter().map(Into::into).collect()))
}

/// GET /api/candidates/{id}
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CandidateResponse>, ApiError> {
    let candidate = state
        .candidate_service
        .find_by_id(id)
        .await?
        .ok_or_else(|| candidate_not_found(id))?;
    Ok(Json(candidate.into()))
}

/// POST /api/candidates (multipart)
pub async fn create_candidate(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<CandidateResponse>), ApiError> {
    let (candidate, content) = CandidateForm::from_multipart(multipart).await?.into_parts()?;
    let stored = state.candidate_service.create(candidate, content).await?;
    Ok((StatusCode::CREATED, Json(stored.into())))
}

/// PUT /api/candidates/{id} (multipart, `file` optional)
pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<Json<CandidateResponse>, ApiError> {
    let (candidate, content) = CandidateForm::from_multipart(multipart).await?.into_parts()?;
    let candidate = Candidate { id, ..candidate };

    if !state.candidate_service.update(candidate, content).await? {
        return Err(candidate_not_found(id));
    }

    let updated = state
        .candidate_service
        .find_by_id(id)
        .await?
        .ok_or_else(|| candidate_not_found(id))?;
    Ok(Json(updated.into()))
}

/// DELETE /api/candidates/{id}
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if state.candidate_service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(candidate_not_found(id))
    }
}

fn candidate_not_found(id: i32) -> ApiError {
    ApiError::not_found(format!("Candidate {id} not found"))
}
