//! Thread-safe in-memory repositories.
//!
//! Used for local development and tests. Data lives only as long as the
//! process does.

mod candidate;
mod file;
mod table;

pub use candidate::MemoryCandidateRepository;
pub use file::MemoryFileRepository;
pub use table::IdTable;
