//! HTTP request handlers.

pub mod candidate;
pub mod file;
pub mod health;
