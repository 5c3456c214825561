//! File domain entities.

pub mod content;
pub mod model;

pub use content::FileContent;
pub use model::FileRecord;
