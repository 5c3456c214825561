//! Core traits defined in `dreamjob-core` and implemented by other crates.

pub mod repository;
pub mod storage;

pub use repository::Repository;
pub use storage::BlobStore;
