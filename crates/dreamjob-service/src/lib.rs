//! # dreamjob-service
//!
//! Lifecycle services for DreamJob. [`FileService`] keeps blobs and their
//! metadata records in step; [`CandidateService`] keeps each candidate
//! attached to exactly one stored file across create, update and delete.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod candidate;
pub mod file;

pub use candidate::CandidateService;
pub use file::FileService;
