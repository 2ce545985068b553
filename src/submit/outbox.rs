//! Captures submissions as files for later upload

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{SubmitError, Submitter};
use crate::wizard::SubmissionPayload;

/// Writes each submission to `<dir>/<timestamp>-<uuid>/`: `payload.json`
/// plus one file per new attachment.
#[derive(Debug, Clone)]
pub struct OutboxSubmitter {
    dir: PathBuf,
}

impl OutboxSubmitter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_name() -> String {
        format!(
            "{}-{}",
            chrono::Utc::now().format("%Y%m%dT%H%M%S"),
            uuid::Uuid::new_v4().simple()
        )
    }
}

#[async_trait]
impl Submitter for OutboxSubmitter {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
        let entry = self.dir.join(Self::entry_name());
        tokio::fs::create_dir_all(&entry).await.map_err(|e| {
            SubmitError::new(format!("Failed to create outbox entry {}: {}", entry.display(), e))
        })?;

        let json = serde_json::to_vec_pretty(payload)?;
        tokio::fs::write(entry.join("payload.json"), json).await?;

        for (part, file) in payload.uploads() {
            let path = entry.join(format!("{}-{}", part, file.file_name));
            debug!(path = %path.display(), size = file.size, "Writing attachment");
            tokio::fs::write(&path, &file.bytes).await?;
        }

        info!(entry = %entry.display(), "Registration written to outbox");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "outbox"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::FileHandle;

    #[tokio::test]
    async fn writes_payload_and_uploads() {
        let dir = tempfile::TempDir::new().unwrap();
        let submitter = OutboxSubmitter::new(dir.path());

        let payload = SubmissionPayload {
            first_name: "Ravi".to_string(),
            photo: Some(FileHandle::from_bytes("ravi.jpg", vec![9, 9])),
            photo_file_name: Some("ravi.jpg".to_string()),
            ..Default::default()
        };
        submitter.submit(&payload).await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        let entry = entries[0].as_ref().unwrap().path();

        let json = std::fs::read_to_string(entry.join("payload.json")).unwrap();
        let written: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(written["firstName"], "Ravi");
        assert_eq!(written["photoFileName"], "ravi.jpg");
        assert_eq!(std::fs::read(entry.join("photo-ravi.jpg")).unwrap(), vec![9, 9]);
    }
}
