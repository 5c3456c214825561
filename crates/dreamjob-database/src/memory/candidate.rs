//! In-memory candidate repository.

use async_trait::async_trait;

use dreamjob_core::result::AppResult;
use dreamjob_core::traits::repository::Repository;
use dreamjob_entity::candidate::Candidate;

use super::IdTable;
use crate::repositories::CandidateRepository;

/// Candidates held in process memory.
#[derive(Debug, Default)]
pub struct MemoryCandidateRepository {
    table: IdTable<Candidate>,
}

impl MemoryCandidateRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Candidate, i32> for MemoryCandidateRepository {
    async fn save(&self, entity: &Candidate) -> AppResult<Candidate> {
        self.table.insert_with(|id| Candidate {
            id,
            ..entity.clone()
        })
    }

    async fn find_by_id(&self, id: &i32) -> AppResult<Option<Candidate>> {
        Ok(self.table.get(*id))
    }

    async fn delete_by_id(&self, id: &i32) -> AppResult<bool> {
        Ok(self.table.remove(*id).is_some())
    }

    async fn find_all(&self) -> AppResult<Vec<Candidate>> {
        Ok(self.table.values())
    }
}

#[async_trait]
impl CandidateRepository for MemoryCandidateRepository {
    async fn update(&self, candidate: &Candidate) -> AppResult<Option<i32>> {
        Ok(self.table.update(candidate.id, |stored| {
            stored.name.clone_from(&candidate.name);
            stored.description.clone_from(&candidate.description);
            stored.city_id = candidate.city_id;
            std::mem::replace(&mut stored.file_id, candidate.file_id)
        }))
    }

    async fn update_details(&self, candidate: &Candidate) -> AppResult<bool> {
        Ok(self.table.update(candidate.id, |stored| {
            stored.name.clone_from(&candidate.name);
            stored.description.clone_from(&candidate.description);
            stored.city_id = candidate.city_id;
        })
        .is_some())
    }

    async fn take_by_id(&self, id: &i32) -> AppResult<Option<Candidate>> {
        Ok(self.table.remove(*id))
    }
}
