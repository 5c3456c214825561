//! # dreamjob-database
//!
//! Metadata store implementations for DreamJob: PostgreSQL repositories,
//! thread-safe in-memory repositories, and the manager that picks one of
//! them from configuration.

pub mod connection;
#[cfg(feature = "memory")]
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;

pub use connection::DatabasePool;
pub use provider::RepositoryManager;
pub use repositories::{CandidateRepository, FileRepository};
