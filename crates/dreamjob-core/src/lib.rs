//! # dreamjob-core
//!
//! Core crate for DreamJob. Contains the blob store and repository traits,
//! configuration schemas, and the unified error system.
//!
//! This crate has **no** internal dependencies on other DreamJob crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
