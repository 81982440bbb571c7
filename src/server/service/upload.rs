//! Request-scoped storage of uploaded files.
//!
//! An [`UploadBatch`] writes each accepted file beneath the upload root in the
//! folder chosen by its MIME type and remembers what it wrote. A failed request
//! calls [`UploadBatch::rollback`] to remove every file of the batch; a successful
//! one calls [`UploadBatch::commit`] to keep them.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use chrono::Utc;
use tokio::{fs, io::AsyncWriteExt};

use crate::server::{
    error::{upload::UploadError, AppError},
    model::upload::{StoredFile, UploadFolder},
};

/// Name used when a file name has no usable characters left after sanitizing.
const FALLBACK_FILE_NAME: &str = "file";

pub struct UploadBatch {
    root: PathBuf,
    written: Vec<StoredFile>,
}

impl UploadBatch {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            written: Vec::new(),
        }
    }

    /// Files written so far, in upload order.
    pub fn files(&self) -> &[StoredFile] {
        &self.written
    }

    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }

    /// Writes one file to `<root>/<folder>/<unix-millis>-<name>`.
    ///
    /// The content type is checked before anything touches the disk. A numeric
    /// suffix is added when the target name is already taken.
    ///
    /// # Returns
    /// - `Ok(StoredFile)` - The file was written and recorded in the batch
    /// - `Err(AppError::UploadErr)` - The content type is not accepted
    /// - `Err(AppError::IoErr)` - The folder or file could not be written
    pub async fn store(
        &mut self,
        file_name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<StoredFile, AppError> {
        let folder = UploadFolder::from_content_type(content_type)
            .ok_or_else(|| UploadError::UnsupportedContentType(content_type.to_string()))?;

        let dir = self.root.join(folder.as_str());
        fs::create_dir_all(&dir).await?;

        let name = format!(
            "{}-{}",
            Utc::now().timestamp_millis(),
            sanitize_file_name(file_name)
        );
        let (path, mut file) = create_unique(&dir, &name).await?;

        let stored = StoredFile {
            folder,
            path,
            content_type: content_type.to_string(),
        };
        self.written.push(stored.clone());

        file.write_all(bytes).await?;
        file.flush().await?;

        Ok(stored)
    }

    /// Keeps every written file and returns them.
    pub fn commit(self) -> Vec<StoredFile> {
        self.written
    }

    /// Removes every file written by this batch.
    pub async fn rollback(self) {
        for stored in self.written {
            if let Err(e) = fs::remove_file(&stored.path).await {
                if e.kind() != ErrorKind::NotFound {
                    tracing::warn!(
                        "Failed to remove uploaded file {}: {}",
                        stored.path.display(),
                        e
                    );
                }
            }
        }
    }
}

/// Creates `name` in `dir`, or `<stem>-<n>.<ext>` if that already exists.
async fn create_unique(dir: &Path, name: &str) -> Result<(PathBuf, fs::File), std::io::Error> {
    let mut path = dir.join(name);
    let mut attempt = 1;

    loop {
        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                path = dir.join(numbered(name, attempt));
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

fn numbered(name: &str, n: u32) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{}-{}.{}", stem, n, ext),
        _ => format!("{}-{}", name, n),
    }
}

/// Reduces a client supplied file name to a safe single path component.
///
/// Directory parts are dropped, whitespace becomes `-`, and anything other than
/// ASCII letters, digits, `.`, `-`, or `_` is removed.
pub fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let sanitized: String = base
        .chars()
        .filter_map(|c| {
            if c.is_whitespace() {
                Some('-')
            } else if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                Some(c)
            } else {
                None
            }
        })
        .collect();

    let trimmed = sanitized.trim_start_matches('.');
    if trimmed.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        trimmed.to_lowercase()
    }
}
