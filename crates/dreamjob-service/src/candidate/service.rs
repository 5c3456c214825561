//! Candidate create/update/delete with attached file management.

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use dreamjob_core::result::AppResult;
use dreamjob_core::traits::repository::Repository;
use dreamjob_database::repositories::CandidateRepository;
use dreamjob_entity::candidate::Candidate;
use dreamjob_entity::file::FileContent;

use crate::file::FileService;

/// Keeps every stored candidate attached to exactly one stored file.
///
/// Orderings favor "no dangling reference" over "no orphaned blob": a new
/// file is always written before the candidate points at it, and an old
/// file is only removed after nothing points at it any more.
#[derive(Clone)]
pub struct CandidateService {
    /// Candidate records.
    candidates: Arc<dyn CandidateRepository>,
    /// Attached files.
    files: Arc<FileService>,
}

impl CandidateService {
    /// Creates a new candidate service.
    pub fn new(candidates: Arc<dyn CandidateRepository>, files: Arc<FileService>) -> Self {
        Self { candidates, files }
    }

    /// Store the file, attach it and persist the candidate.
    ///
    /// Any id or `file_id` on the input is ignored; `creation_date` is set to
    /// now. Empty content still creates a zero-length file.
    pub async fn create(&self, candidate: Candidate, content: FileContent) -> AppResult<Candidate> {
        let file = self.files.save(content).await?;

        let candidate = Candidate {
            file_id: file.id,
            creation_date: Utc::now(),
            ..candidate
        };

        match self.candidates.save(&candidate).await {
            Ok(stored) => {
                info!(candidate_id = stored.id, file_id = file.id, "Created candidate");
                Ok(stored)
            }
            Err(e) => {
                self.discard_file(file.id).await;
                Err(e)
            }
        }
    }

    /// Update the candidate with the same id.
    ///
    /// Empty `content` keeps the current file and only rewrites name,
    /// description and city. Non-empty `content` replaces the file: the new
    /// one is stored and attached first, then the old one is removed.
    ///
    /// Returns `false` when no candidate has that id.
    pub async fn update(&self, candidate: Candidate, content: FileContent) -> AppResult<bool> {
        if content.is_empty() {
            let updated = self.candidates.update_details(&candidate).await?;
            if updated {
                info!(candidate_id = candidate.id, "Updated candidate details");
            }
            return Ok(updated);
        }

        if self.candidates.find_by_id(&candidate.id).await?.is_none() {
            return Ok(false);
        }

        let file = self.files.save(content).await?;
        let candidate = Candidate {
            file_id: file.id,
            ..candidate
        };

        // The replaced id comes from the write itself, so concurrent updates
        // each remove a different file and none is left unreferenced.
        let old_file_id = match self.candidates.update(&candidate).await {
            Ok(Some(old_file_id)) => old_file_id,
            Ok(None) => {
                self.discard_file(file.id).await;
                return Ok(false);
            }
            Err(e) => {
                self.discard_file(file.id).await;
                return Err(e);
            }
        };

        info!(
            candidate_id = candidate.id,
            old_file_id,
            new_file_id = file.id,
            "Replaced candidate file"
        );

        if old_file_id > 0 && old_file_id != file.id {
            if let Err(e) = self.files.delete_by_id(old_file_id).await {
                warn!(
                    candidate_id = candidate.id,
                    file_id = old_file_id,
                    error = %e,
                    "Failed to delete replaced file"
                );
            }
        }
        Ok(true)
    }

    /// Delete the candidate and then the file it pointed at when removed.
    ///
    /// Returns `false`, touching no file, when no candidate has that id.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let Some(removed) = self.candidates.take_by_id(&id).await? else {
            return Ok(false);
        };
        if removed.has_file() {
            self.files.delete_by_id(removed.file_id).await?;
        }

        info!(candidate_id = id, file_id = removed.file_id, "Deleted candidate");
        Ok(true)
    }

    /// Find a candidate by id.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Candidate>> {
        self.candidates.find_by_id(&id).await
    }

    /// List all candidates ordered by id.
    pub async fn find_all(&self) -> AppResult<Vec<Candidate>> {
        self.candidates.find_all().await
    }

    /// The file service managing attached files.
    pub fn files(&self) -> &FileService {
        &self.files
    }

    /// Remove a file nothing points at. Failures are only logged.
    async fn discard_file(&self, file_id: i32) {
        if let Err(e) = self.files.delete_by_id(file_id).await {
            warn!(file_id, error = %e, "Failed to discard unattached file");
        }
    }
}

impl fmt::Debug for CandidateService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidateService")
            .field("files", &self.files)
            .finish_non_exhaustive()
    }
}
