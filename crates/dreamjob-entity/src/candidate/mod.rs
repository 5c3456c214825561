//! Candidate domain entities.

pub mod model;

pub use model::Candidate;
