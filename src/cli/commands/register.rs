use async_trait::async_trait;
use std::path::PathBuf;

use super::{CommandHandler, CommandResult};
use crate::Result;

/// Handler for the `register` command
#[cfg_attr(not(feature = "tui"), allow(dead_code))]
pub struct RegisterCommand {
    pub config: Option<PathBuf>,
    pub embedded: bool,
    pub edit: Option<PathBuf>,
}

impl RegisterCommand {
    pub fn new(config: Option<PathBuf>, embedded: bool, edit: Option<PathBuf>) -> Self {
        Self {
            config,
            embedded,
            edit,
        }
    }
}

#[cfg(feature = "tui")]
#[async_trait]
impl CommandHandler for RegisterCommand {
    async fn execute(&self) -> Result<CommandResult> {
        use super::load_record;
        use crate::config::ConfigLoader;
        use crate::wizard::{CloseReason, Presentation, Wizard, WizardOptions};

        let config = ConfigLoader::new().with_file(self.config.as_ref()).load()?;
        let submitter = crate::submit::from_config(&config)?;

        let presentation = if self.embedded {
            Presentation::Embedded
        } else {
            config.presentation
        };
        let prefill = self.edit.as_deref().map(load_record).transpose()?;
        let wizard = Wizard::new(WizardOptions {
            presentation,
            prefill,
        });

        match crate::cli::tui::run(wizard, submitter).await? {
            Some(CloseReason::Submitted) => Ok(CommandResult::Success(Some(
                "Registration submitted".to_string(),
            ))),
            Some(CloseReason::Cancelled) => Ok(CommandResult::Warning(
                "Registration cancelled; nothing was submitted".to_string(),
            )),
            None => Ok(CommandResult::Warning(
                "Registration wizard exited without an outcome".to_string(),
            )),
        }
    }

    fn name(&self) -> &'static str {
        "register"
    }
}

#[cfg(not(feature = "tui"))]
#[async_trait]
impl CommandHandler for RegisterCommand {
    async fn execute(&self) -> Result<CommandResult> {
        Ok(CommandResult::Error(
            "The interactive wizard requires the 'tui' feature; rebuild with --features tui, or use `fpo-onboard submit`".to_string(),
        ))
    }

    fn name(&self) -> &'static str {
        "register"
    }
}
