use super::types::{OnboardConfig, SubmissionTarget};
use crate::io::paths::OnboardPaths;
use crate::{OnboardError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "onboard.yaml";

/// Configuration loader for onboard.yaml
pub struct ConfigLoader {
    /// Explicit file from --config
    explicit: Option<PathBuf>,
    /// Directory searched before the platform config directory
    working_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            explicit: None,
            working_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Use this file instead of searching
    pub fn with_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        self.explicit = path.map(|p| p.as_ref().to_path_buf());
        self
    }

    pub fn with_working_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.working_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Load configuration file from path
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<OnboardConfig> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            OnboardError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let mut config: OnboardConfig = serde_yaml_ng::from_str(&contents).map_err(|e| {
            OnboardError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
        })?;

        Self::validate(&config)?;

        // Relative outbox paths are relative to the config file
        if let SubmissionTarget::Outbox { dir } = &mut config.submission {
            if dir.is_relative() {
                if let Some(parent) = path.parent() {
                    *dir = parent.join(&*dir);
                }
            }
        }

        Ok(config)
    }

    /// Resolve the configuration: explicit file, then the working
    /// directory, then the platform config directory, then defaults.
    pub fn load(&self) -> Result<OnboardConfig> {
        if let Some(path) = &self.explicit {
            debug!(path = %path.display(), "Loading explicit config");
            return Self::load_file(path);
        }

        let local = self.working_dir.join(CONFIG_FILE);
        if local.exists() {
            debug!(path = %local.display(), "Loading project config");
            return Self::load_file(local);
        }

        match OnboardPaths::new() {
            Ok(paths) => {
                let user = paths.config_file();
                if user.exists() {
                    debug!(path = %user.display(), "Loading user config");
                    return Self::load_file(user);
                }
                Ok(OnboardConfig {
                    submission: SubmissionTarget::Outbox {
                        dir: paths.outbox_dir.clone(),
                    },
                    ..OnboardConfig::default()
                })
            }
            Err(e) => {
                warn!("Falling back to built-in configuration: {}", e);
                Ok(OnboardConfig::default())
            }
        }
    }

    /// Validate configuration content
    fn validate(config: &OnboardConfig) -> Result<()> {
        match &config.submission {
            SubmissionTarget::Http { endpoint } => {
                if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                    return Err(OnboardError::Config(format!(
                        "Submission endpoint must be an http(s) URL, got '{}'",
                        endpoint
                    )));
                }
            }
            SubmissionTarget::Outbox { dir } => {
                if dir.as_os_str().is_empty() {
                    return Err(OnboardError::Config(
                        "Outbox directory must not be empty".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
