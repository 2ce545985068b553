use crate::{OnboardError, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Platform directories used by fpo-onboard
#[derive(Debug, Clone)]
pub struct OnboardPaths {
    /// Configuration directory
    pub config_dir: PathBuf,
    /// Data directory (outbox, logs)
    pub data_dir: PathBuf,
    /// Default outbox for captured registrations
    pub outbox_dir: PathBuf,
}

impl OnboardPaths {
    /// Create new paths instance using standard directories
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("org", "fpo", "fpo-onboard").ok_or_else(|| {
            OnboardError::Path("Failed to determine project directories".to_string())
        })?;

        let data_dir = dirs.data_dir().to_path_buf();
        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
            outbox_dir: data_dir.join("outbox"),
            data_dir,
        })
    }

    /// Paths rooted in a single directory
    pub fn for_root(root: &std::path::Path) -> Self {
        Self {
            config_dir: root.to_path_buf(),
            data_dir: root.to_path_buf(),
            outbox_dir: root.join("outbox"),
        }
    }

    /// User-level onboard.yaml
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(crate::config::CONFIG_FILE)
    }

    /// Log file used while the terminal UI owns the screen
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join("fpo-onboard.log")
    }

    /// Ensure the data directory exists
    pub fn ensure_data_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir).map_err(|e| {
            OnboardError::Path(format!(
                "Failed to create data directory {}: {}",
                self.data_dir.display(),
                e
            ))
        })
    }
}
