pub mod init;
pub mod register;
pub mod submit;
pub mod validate;

use async_trait::async_trait;
use std::path::Path;

use crate::wizard::{RegistrationRecord, SubmissionPayload};
use crate::{OnboardError, Result};

/// Common trait for all command handlers
#[async_trait]
pub trait CommandHandler {
    /// Execute the command
    async fn execute(&self) -> Result<CommandResult>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Command execution result
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Success with optional message
    Success(Option<String>),
    /// Error with message
    Error(String),
    /// Warning with message
    Warning(String),
}

impl CommandResult {
    /// Convert to exit code
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandResult::Success(_) => 0,
            CommandResult::Error(_) => 1,
            CommandResult::Warning(_) => 0,
        }
    }
}

/// Read a record file in the payload shape
pub fn load_record(path: &Path) -> Result<RegistrationRecord> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        OnboardError::Path(format!("Failed to read record file {}: {}", path.display(), e))
    })?;
    let existing: SubmissionPayload = serde_json::from_str(&contents)?;
    Ok(RegistrationRecord::from_existing(existing))
}
