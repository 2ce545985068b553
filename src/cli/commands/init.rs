use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;

use super::{CommandHandler, CommandResult};
use crate::config::{CONFIG_FILE, CONFIG_TEMPLATE};
use crate::{OnboardError, Result};

/// Handler for the `init` command
pub struct InitCommand {
    pub output: PathBuf,
    pub force: bool,
}

impl InitCommand {
    pub fn new(output: PathBuf, force: bool) -> Self {
        Self { output, force }
    }
}

#[async_trait]
impl CommandHandler for InitCommand {
    async fn execute(&self) -> Result<CommandResult> {
        let config_path = self.output.join(CONFIG_FILE);

        if config_path.exists() && !self.force {
            return Ok(CommandResult::Warning(format!(
                "{} already exists; use --force to overwrite",
                config_path.display()
            )));
        }

        fs::create_dir_all(&self.output).map_err(|e| {
            OnboardError::Config(format!(
                "Failed to create directory {}: {}",
                self.output.display(),
                e
            ))
        })?;

        fs::write(&config_path, CONFIG_TEMPLATE).map_err(|e| {
            OnboardError::Config(format!(
                "Failed to write config {}: {}",
                config_path.display(),
                e
            ))
        })?;

        tracing::info!(path = %config_path.display(), "Wrote configuration template");
        Ok(CommandResult::Success(Some(format!(
            "Wrote {}",
            config_path.display()
        ))))
    }

    fn name(&self) -> &'static str {
        "init"
    }
}
