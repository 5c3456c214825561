//! Stored file lifecycle: blob plus metadata record.

pub mod service;

pub use service::FileService;
