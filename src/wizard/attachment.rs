//! File attachments held by the wizard until submission

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{OnboardError, Result};

/// A newly chosen file, read into memory.
///
/// Only the metadata is serialized; the bytes travel separately (multipart
/// part or outbox file).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileHandle {
    pub file_name: String,
    pub size: u64,
    pub content_type: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl FileHandle {
    /// Build a handle from bytes already in memory
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            size: bytes.len() as u64,
            file_name,
            content_type,
            bytes,
        }
    }

    /// Read a file from disk
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| OnboardError::Path(format!("Not a file path: {}", path.display())))?
            .to_string();
        let bytes = std::fs::read(path).map_err(|e| {
            OnboardError::Path(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Ok(Self::from_bytes(file_name, bytes))
    }
}

/// Content of an attachment slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attachment {
    /// Chosen in this session
    File(FileHandle),
    /// Already stored by the backend (edit mode)
    Reference(String),
}

impl Attachment {
    pub fn file_name(&self) -> &str {
        match self {
            Attachment::File(handle) => &handle.file_name,
            Attachment::Reference(name) => name,
        }
    }

    pub fn new_file(&self) -> Option<&FileHandle> {
        match self {
            Attachment::File(handle) => Some(handle),
            Attachment::Reference(_) => None,
        }
    }
}

/// What the presentation layer shows for an attachment slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentView {
    New(String),
    Existing(String),
    Placeholder,
}

impl From<Option<&Attachment>> for AttachmentView {
    fn from(attachment: Option<&Attachment>) -> Self {
        match attachment {
            Some(Attachment::File(handle)) => AttachmentView::New(handle.file_name.clone()),
            Some(Attachment::Reference(name)) => AttachmentView::Existing(name.clone()),
            None => AttachmentView::Placeholder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_content_type() {
        let handle = FileHandle::from_bytes("photo.jpg", vec![0xff, 0xd8]);
        assert_eq!(handle.content_type, "image/jpeg");
        assert_eq!(handle.size, 2);

        let unknown = FileHandle::from_bytes("blob", vec![]);
        assert_eq!(unknown.content_type, "application/octet-stream");
    }

    #[test]
    fn open_reads_file_name_and_bytes() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("passbook.pdf");
        std::fs::write(&path, b"%PDF").unwrap();

        let handle = FileHandle::open(&path).unwrap();
        assert_eq!(handle.file_name, "passbook.pdf");
        assert_eq!(handle.bytes, b"%PDF");
        assert_eq!(handle.content_type, "application/pdf");
    }

    #[test]
    fn open_missing_file_fails() {
        assert!(FileHandle::open("/definitely/not/here.png").is_err());
    }
}
