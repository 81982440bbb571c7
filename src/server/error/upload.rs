use axum::{extract::multipart::MultipartError, http::StatusCode};
use thiserror::Error;

/// Errors raised while receiving uploaded files.
#[derive(Error, Debug)]
pub enum UploadError {
    /// The file's MIME type maps to no upload folder.
    #[error("Unsupported file type: {0}")]
    UnsupportedContentType(String),

    /// A multipart file field arrived without a file name.
    #[error("Uploaded file is missing a file name")]
    MissingFileName,

    /// The request contained no file fields.
    #[error("No files were uploaded")]
    Empty,

    /// The multipart body could not be read.
    #[error(transparent)]
    Multipart(#[from] MultipartError),
}

impl UploadError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Multipart(err) => err.status(),
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
