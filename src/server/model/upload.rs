//! Upload routing models.

use std::path::PathBuf;

/// MIME types stored in the `doc` folder.
const DOCUMENT_CONTENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

/// Folder beneath the upload root that a file is written into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFolder {
    Image,
    Media,
    Doc,
}

impl UploadFolder {
    /// Picks the folder for a MIME type, or `None` if the type is not accepted.
    ///
    /// Parameters such as `; charset=utf-8` and letter case are ignored.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if essence.starts_with("image/") {
            Some(Self::Image)
        } else if essence.starts_with("video/") || essence.starts_with("audio/") {
            Some(Self::Media)
        } else if DOCUMENT_CONTENT_TYPES.contains(&essence.as_str()) {
            Some(Self::Doc)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Media => "media",
            Self::Doc => "doc",
        }
    }
}

/// A file written to disk during an upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub folder: UploadFolder,
    pub path: PathBuf,
    pub content_type: String,
}
