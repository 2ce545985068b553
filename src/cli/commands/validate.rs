use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::{load_record, CommandHandler, CommandResult};
use crate::cli::OutputFormat;
use crate::wizard::validation::validate_record;
use crate::wizard::{FieldErrors, Step};
use crate::Result;

/// Handler for the `validate` command
pub struct ValidateCommand {
    pub file: PathBuf,
    pub format: OutputFormat,
}

impl ValidateCommand {
    /// Create new validate command
    pub fn new(file: PathBuf, format: OutputFormat) -> Self {
        Self { file, format }
    }

    fn render_text(report: &BTreeMap<Step, FieldErrors>) -> String {
        let mut out = String::new();
        for (step, errors) in report {
            out.push_str(&format!("{}\n", step));
            for (field, message) in errors.iter() {
                out.push_str(&format!("  {:<16} {}\n", field.key(), message));
            }
        }
        out
    }
}

#[async_trait]
impl CommandHandler for ValidateCommand {
    async fn execute(&self) -> Result<CommandResult> {
        let record = load_record(&self.file)?;
        let report = validate_record(&record);

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text if !report.is_empty() => {
                print!("{}", Self::render_text(&report));
            }
            OutputFormat::Text => {}
        }

        if report.is_empty() {
            Ok(CommandResult::Success(Some(format!(
                "{}: all {} steps pass",
                self.file.display(),
                Step::COUNT
            ))))
        } else {
            let fields: usize = report.values().map(FieldErrors::len).sum();
            Ok(CommandResult::Error(format!(
                "{}: {} field(s) failed on {} step(s)",
                self.file.display(),
                fields,
                report.len()
            )))
        }
    }

    fn name(&self) -> &'static str {
        "validate"
    }
}
