//! # dreamjob-storage
//!
//! Blob store implementations for DreamJob. Content is addressed by the
//! opaque path handed out on write; metadata lives elsewhere.

pub mod providers;

#[cfg(feature = "local")]
pub use providers::LocalBlobStore;
