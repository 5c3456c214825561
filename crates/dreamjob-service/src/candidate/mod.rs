//! Candidate lifecycle with attached file management.

pub mod service;

pub use service::CandidateService;
