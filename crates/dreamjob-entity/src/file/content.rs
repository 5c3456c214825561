//! Transient file content passed into and out of the service layer.

use bytes::Bytes;

/// A named chunk of bytes: what an uploader sends and what a download returns.
///
/// Never persisted as a whole. The bytes go to the blob store and the name
/// goes into [`FileRecord::name`](super::FileRecord::name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    /// The display name of the file.
    pub name: String,
    /// The raw content.
    pub data: Bytes,
}

impl FileContent {
    /// Creates a new file content value.
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Content with no name and no bytes, meaning "no file supplied".
    pub fn empty() -> Self {
        Self::new("", Bytes::new())
    }

    /// Whether the content carries no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }
}
