use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{load_record, CommandHandler, CommandResult};
use crate::config::ConfigLoader;
use crate::submit;
use crate::wizard::{
    Attachment, Field, FileHandle, SubmitOutcome, Transition, Wizard, WizardOptions,
};
use crate::{OnboardError, Result};

/// Handler for the `submit` command
pub struct SubmitCommand {
    pub file: PathBuf,
    pub config: Option<PathBuf>,
}

impl SubmitCommand {
    pub fn new(file: PathBuf, config: Option<PathBuf>) -> Self {
        Self { file, config }
    }

    /// Swap file-name references for the files themselves when they sit
    /// next to the record file.
    fn attach_local_files(wizard: &mut Wizard, base: &Path) -> Result<()> {
        let mut slots = vec![Field::Photo, Field::Passbook];
        if let Some(document_type) = wizard.record().documents.document_type() {
            slots.push(Field::DocumentFile(document_type));
        }

        for field in slots {
            let name = match wizard.record().value(field) {
                crate::wizard::FieldValue::Attachment(Some(Attachment::Reference(name))) => {
                    name.clone()
                }
                _ => continue,
            };
            let candidate = base.join(&name);
            if candidate.is_file() {
                debug!(field = %field, path = %candidate.display(), "Attaching local file");
                wizard.choose_attachment(field, FileHandle::open(&candidate)?)?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CommandHandler for SubmitCommand {
    async fn execute(&self) -> Result<CommandResult> {
        let config = ConfigLoader::new().with_file(self.config.as_ref()).load()?;
        let submitter = submit::from_config(&config)?;

        let record = load_record(&self.file)?;
        let mut wizard = Wizard::new(WizardOptions {
            presentation: config.presentation,
            prefill: Some(record),
        });

        let base = self
            .file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::attach_local_files(&mut wizard, &base)?;

        while !wizard.step().is_last() {
            if let Transition::Blocked(errors) = wizard.next()? {
                return Ok(CommandResult::Error(format!(
                    "{} is incomplete: {}",
                    wizard.step(),
                    errors
                )));
            }
        }

        let outcome = match wizard.submit(submitter.as_ref()).await {
            Ok(outcome) => outcome,
            Err(OnboardError::Validation { step, errors }) => {
                return Ok(CommandResult::Error(format!("{} is incomplete: {}", step, errors)));
            }
            Err(e) => return Err(e),
        };

        match outcome {
            SubmitOutcome::Submitted => {
                info!(submitter = submitter.name(), "Registration submitted");
                Ok(CommandResult::Success(Some(format!(
                    "Registration submitted ({})",
                    submitter.name()
                ))))
            }
            SubmitOutcome::Rejected(message) => Ok(CommandResult::Error(format!(
                "Submission failed: {}",
                message
            ))),
        }
    }

    fn name(&self) -> &'static str {
        "submit"
    }
}
