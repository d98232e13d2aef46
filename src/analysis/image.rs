use crate::{Error, Result};

/// MIME types the studio accepts, matching the page's upload filter.
pub const ACCEPTED_MIME_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Raw file field as received from the multipart form, before validation.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// An upload that passed validation and is ready to send to the model.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl UploadedImage {
    /// Validates an optional upload. Absent and empty uploads are rejected
    /// here, before any remote call happens.
    pub fn from_upload(upload: Option<FileUpload>) -> Result<Self> {
        let upload = upload.ok_or(Error::MissingImage)?;

        if upload.data.is_empty() {
            return Err(Error::MissingImage);
        }

        let mime_type = upload
            .content_type
            .ok_or_else(|| Error::UnsupportedImageType("unknown".to_string()))?;

        if !ACCEPTED_MIME_TYPES.contains(&mime_type.as_str()) {
            return Err(Error::UnsupportedImageType(mime_type));
        }

        Ok(Self {
            mime_type,
            data: upload.data,
        })
    }
}
