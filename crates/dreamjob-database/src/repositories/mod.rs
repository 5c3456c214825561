//! Record store contracts and their PostgreSQL implementations.

use async_trait::async_trait;

use dreamjob_core::result::AppResult;
use dreamjob_core::traits::repository::Repository;
use dreamjob_entity::candidate::Candidate;
use dreamjob_entity::file::FileRecord;

pub mod candidate;
pub mod file;

pub use candidate::PgCandidateRepository;
pub use file::PgFileRepository;

/// Store of [`FileRecord`]s. File records are never modified after insert.
pub trait FileRepository: Repository<FileRecord, i32> {}

impl<T> FileRepository for T where T: Repository<FileRecord, i32> {}

/// Store of [`Candidate`]s.
#[async_trait]
pub trait CandidateRepository: Repository<Candidate, i32> {
    /// Overwrite name, description, city and file reference of the candidate
    /// with the same id. `creation_date` is never changed.
    ///
    /// Returns the `file_id` the row held right before this write, read in
    /// the same atomic step, or `None` when no candidate has that id.
    async fn update(&self, candidate: &Candidate) -> AppResult<Option<i32>>;

    /// Overwrite name, description and city, leaving `file_id` untouched.
    ///
    /// Returns `false` when no candidate has that id.
    async fn update_details(&self, candidate: &Candidate) -> AppResult<bool>;

    /// Delete the candidate and return the row as it was when removed.
    async fn take_by_id(&self, id: &i32) -> AppResult<Option<Candidate>>;
}
