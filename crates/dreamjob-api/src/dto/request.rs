//! Request DTOs.

use axum::extract::Multipart;
use bytes::Bytes;

use dreamjob_entity::candidate::Candidate;
use dreamjob_entity::file::FileContent;

use crate::error::ApiError;

/// Multipart form submitted when creating or updating a candidate.
///
/// Fields: `name`, `description`, `city_id` and an optional `file`.
/// A missing or empty `file` part yields empty [`FileContent`].
#[derive(Debug, Clone, Default)]
pub struct CandidateForm {
    /// Candidate name.
    pub name: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// City id, as submitted.
    pub city_id: Option<String>,
    /// Uploaded file name.
    pub file_name: Option<String>,
    /// Uploaded file bytes.
    pub file_data: Option<Bytes>,
}

impl CandidateForm {
    /// Read all parts of a multipart body. Unknown parts are ignored.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let part = field.name().unwrap_or("").to_string();
            match part.as_str() {
                "name" => form.name = Some(field.text().await?),
                "description" => form.description = Some(field.text().await?),
                "city_id" => form.city_id = Some(field.text().await?),
                "file" => {
                    form.file_name = field.file_name().map(String::from);
                    form.file_data = Some(field.bytes().await?);
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// Split the form into the candidate fields and the attached content.
    pub fn into_parts(self) -> Result<(Candidate, FileContent), ApiError> {
        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ApiError::validation("name is required"))?;

        let city_id = self
            .city_id
            .ok_or_else(|| ApiError::validation("city_id is required"))?
            .trim()
            .parse::<i32>()
            .map_err(|_| ApiError::validation("city_id must be an integer"))?;

        let candidate = Candidate::new(name, self.description.unwrap_or_default(), city_id);
        let content = FileContent::new(
            self.file_name.unwrap_or_default(),
            self.file_data.unwrap_or_default(),
        );
        Ok((candidate, content))
    }
}
