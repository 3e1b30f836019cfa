//! Types for staged files

use std::path::Path;

use bytes::Bytes;
use serde::Serialize;

use crate::error::{Error, Result};

/// MIME types offered by the file picker
pub const ACCEPTED_MIME_TYPES: &[&str] = &["video/mp4", "audio/mp3", "audio/wav"];

/// Equivalent spellings of the accepted types, as reported by browsers and
/// `mime_guess`
const ACCEPTED_ALIASES: &[&str] = &["audio/mpeg", "audio/x-wav", "audio/wave"];

/// Icon class of a staged file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Video,
    Other,
}

/// A file selected for upload, held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub data: Bytes,
}

impl StagedFile {
    /// Stage in-memory content; the size is the content length
    pub fn new(name: &str, mime_type: &str, data: impl Into<Bytes>) -> Self {
        let data = data.into();
        Self {
            name: name.to_string(),
            size: data.len() as u64,
            mime_type: mime_type.to_string(),
            data,
        }
    }

    /// Read a file from disk, guessing its MIME type from the extension
    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| Error::general(format!("Not a file path: {}", path.display())))?;
        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        let data = tokio::fs::read(path).await?;

        Ok(Self::new(&name, &mime_type, data))
    }

    /// `Video` for `video/*`, `Other` for everything else
    pub fn kind(&self) -> FileKind {
        if self.mime_type.starts_with("video/") {
            FileKind::Video
        } else {
            FileKind::Other
        }
    }

    pub fn is_video(&self) -> bool {
        self.kind() == FileKind::Video
    }

    /// Size in mebibytes
    pub fn size_in_mb(&self) -> f64 {
        self.size as f64 / 1024.0 / 1024.0
    }

    /// Size as shown in the staging list, e.g. `1.50 MB`. Ties round up.
    pub fn display_size(&self) -> String {
        let rounded = (self.size_in_mb() * 100.0).round() / 100.0;
        format!("{:.2} MB", rounded)
    }

    /// Whether the file picker would offer this type. Staging does not
    /// filter on it.
    pub fn is_accepted(&self) -> bool {
        let mime = self.mime_type.as_str();
        ACCEPTED_MIME_TYPES.contains(&mime) || ACCEPTED_ALIASES.contains(&mime)
    }
}
