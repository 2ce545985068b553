//! The wizard state machine: step navigation, input, submission

use std::fmt;
use tracing::{debug, info, warn};

use super::attachment::{Attachment, AttachmentView, FileHandle};
use super::choices::DocumentType;
use super::field::Field;
use super::payload::SubmissionPayload;
use super::record::{FieldValue, RegistrationRecord};
use super::step::Step;
use super::validation::{self, FieldErrors};
use crate::submit::{SubmitError, Submitter};
use crate::{OnboardError, Result};

/// How the host presents the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    /// Full page; the host navigates away on success
    #[default]
    Standalone,
    /// Overlay inside a dashboard; inline error text is hidden
    Embedded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardMode {
    New,
    Edit,
}

/// Why the wizard closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Submitted,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Open,
    Submitting,
    Closed(CloseReason),
}

/// Result of a `next` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Advanced(Step),
    /// Stayed on the step; carries the errors that blocked it
    Blocked(FieldErrors),
}

/// Result of a finished submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    Rejected(String),
}

/// Host-side options
#[derive(Debug, Clone, Default)]
pub struct WizardOptions {
    pub presentation: Presentation,
    pub prefill: Option<RegistrationRecord>,
}

impl WizardOptions {
    pub fn standalone() -> Self {
        Self::default()
    }

    pub fn embedded() -> Self {
        Self {
            presentation: Presentation::Embedded,
            prefill: None,
        }
    }

    pub fn with_prefill(mut self, record: RegistrationRecord) -> Self {
        self.prefill = Some(record);
        self
    }
}

type CloseHook = Box<dyn FnMut(CloseReason) + Send>;

/// Eight-step registration wizard.
///
/// Owns the record and is the only path that mutates it.
pub struct Wizard {
    record: RegistrationRecord,
    step: Step,
    errors: FieldErrors,
    presentation: Presentation,
    mode: WizardMode,
    status: Status,
    submit_error: Option<String>,
    on_close: Option<CloseHook>,
}

impl fmt::Debug for Wizard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wizard")
            .field("step", &self.step)
            .field("mode", &self.mode)
            .field("presentation", &self.presentation)
            .field("status", &self.status)
            .field("errors", &self.errors)
            .field("submit_error", &self.submit_error)
            .finish_non_exhaustive()
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(WizardOptions::default())
    }
}

impl Wizard {
    pub fn new(options: WizardOptions) -> Self {
        let (record, mode) = match options.prefill {
            Some(record) => (record, WizardMode::Edit),
            None => (RegistrationRecord::default(), WizardMode::New),
        };
        debug!(?mode, presentation = ?options.presentation, "Registration wizard opened");
        Self {
            record,
            step: Step::Personal,
            errors: FieldErrors::default(),
            presentation: options.presentation,
            mode,
            status: Status::Open,
            submit_error: None,
            on_close: None,
        }
    }

    /// Register the host's close notification
    pub fn on_close<F>(mut self, hook: F) -> Self
    where
        F: FnMut(CloseReason) + Send + 'static,
    {
        self.on_close = Some(Box::new(hook));
        self
    }

    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn mode(&self) -> WizardMode {
        self.mode
    }

    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.status, Status::Closed(_))
    }

    pub fn is_submitting(&self) -> bool {
        self.status == Status::Submitting
    }

    /// Every recorded field error, independent of presentation
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Error text to render inline; nothing when embedded
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        match self.presentation {
            Presentation::Standalone => self.errors.get(field),
            Presentation::Embedded => None,
        }
    }

    /// Message of the last rejected submission
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn fields(&self) -> Vec<Field> {
        self.step.fields(&self.record)
    }

    pub fn attachment_view(&self, field: Field) -> AttachmentView {
        match self.record.value(field) {
            FieldValue::Attachment(attachment) => AttachmentView::from(attachment),
            _ => AttachmentView::Placeholder,
        }
    }

    fn ensure_open(&self) -> Result<()> {
        match self.status {
            Status::Closed(_) => Err(OnboardError::Closed),
            _ => Ok(()),
        }
    }

    /// Open and not waiting on a submission
    fn ensure_idle(&self) -> Result<()> {
        self.ensure_open()?;
        if self.status == Status::Submitting {
            return Err(OnboardError::SubmissionInFlight);
        }
        Ok(())
    }

    /// Validate the current step and advance on success
    pub fn next(&mut self) -> Result<Transition> {
        self.ensure_idle()?;
        let Some(target) = self.step.next() else {
            return Err(OnboardError::NotAvailable {
                action: "Next",
                step: self.step,
            });
        };

        let errors = validation::validate_step(self.step, &self.record);
        let current = self.step;
        self.errors.retain(|field| field.step() != current);

        if !errors.is_empty() {
            debug!(step = ?current, count = errors.len(), "Step blocked by validation");
            self.errors.extend(errors.clone());
            return Ok(Transition::Blocked(errors));
        }

        debug!(from = ?current, to = ?target, "Advancing step");
        self.step = target;
        Ok(Transition::Advanced(target))
    }

    /// Go back one step without validating
    pub fn previous(&mut self) -> Result<Step> {
        self.ensure_idle()?;
        let target = self.step.previous().ok_or(OnboardError::NotAvailable {
            action: "Previous",
            step: self.step,
        })?;
        debug!(from = ?self.step, to = ?target, "Going back");
        self.step = target;
        Ok(target)
    }

    /// Set a text or choice field. Clears that field's error.
    pub fn input(&mut self, field: Field, value: &str) -> Result<()> {
        self.ensure_idle()?;
        if field == Field::DocumentType {
            return match value.trim() {
                "" => {
                    if let Some(previous) = self.record.documents.clear() {
                        self.drop_document_errors(previous);
                    }
                    self.errors.remove(field);
                    Ok(())
                }
                other => {
                    let document_type = other.parse::<DocumentType>().map_err(|_| {
                        OnboardError::UnknownOption {
                            field: field.key(),
                            value: value.to_string(),
                        }
                    })?;
                    self.select_document_type(document_type)
                }
            };
        }
        self.record.set_text(field, value)?;
        self.errors.remove(field);
        Ok(())
    }

    /// Activate one document sub-record, dropping the previous one's errors
    pub fn select_document_type(&mut self, document_type: DocumentType) -> Result<()> {
        self.ensure_idle()?;
        if let Some(Some(previous)) = self.record.documents.select(document_type) {
            debug!(from = ?previous, to = ?document_type, "Document type switched");
            self.drop_document_errors(previous);
        }
        self.errors.remove(Field::DocumentType);
        Ok(())
    }

    fn drop_document_errors(&mut self, document_type: DocumentType) {
        self.errors.retain(|field| {
            !matches!(field, Field::DocumentNumber(d) | Field::DocumentFile(d) if d == document_type)
        });
    }

    /// Replace the file in an attachment slot
    pub fn choose_attachment(&mut self, field: Field, file: FileHandle) -> Result<()> {
        self.ensure_idle()?;
        debug!(field = %field, file = %file.file_name, size = file.size, "Attachment chosen");
        *self.record.attachment_slot(field)? = Some(Attachment::File(file));
        self.errors.remove(field);
        Ok(())
    }

    /// Empty an attachment slot, back to the placeholder
    pub fn remove_attachment(&mut self, field: Field) -> Result<()> {
        self.ensure_idle()?;
        *self.record.attachment_slot(field)? = None;
        Ok(())
    }

    /// Assemble the payload without submitting it
    pub fn payload(&self) -> SubmissionPayload {
        SubmissionPayload::from(&self.record)
    }

    /// Start a submission from the last step.
    ///
    /// Returns the payload for the host to hand to its submitter, then
    /// `finish_submit` must be called with the outcome.
    pub fn begin_submit(&mut self) -> Result<SubmissionPayload> {
        self.ensure_idle()?;
        if !self.step.is_last() {
            return Err(OnboardError::NotAvailable {
                action: "Submit",
                step: self.step,
            });
        }

        let mut errors = validation::validate_step(self.step, &self.record);
        for (step, step_errors) in validation::validate_record(&self.record) {
            if step != self.step {
                warn!(step = ?step, "Earlier step no longer valid at submit");
            }
            errors.extend(step_errors);
        }
        if !errors.is_empty() {
            self.errors.extend(errors.clone());
            return Err(OnboardError::Validation {
                step: self.step,
                errors,
            });
        }

        self.errors.clear();
        self.submit_error = None;
        self.status = Status::Submitting;
        info!("Submitting registration");
        Ok(self.payload())
    }

    /// Apply the submitter's outcome
    pub fn finish_submit(
        &mut self,
        outcome: std::result::Result<(), SubmitError>,
    ) -> Result<SubmitOutcome> {
        if self.status != Status::Submitting {
            return Err(OnboardError::NotAvailable {
                action: "Finish submit",
                step: self.step,
            });
        }
        match outcome {
            Ok(()) => {
                info!("Registration submitted");
                self.close(CloseReason::Submitted);
                Ok(SubmitOutcome::Submitted)
            }
            Err(e) => {
                warn!(error = %e, "Registration submission rejected");
                let message = e.to_string();
                self.status = Status::Open;
                self.submit_error = Some(message.clone());
                Ok(SubmitOutcome::Rejected(message))
            }
        }
    }

    /// Submit through `submitter`, awaiting the outcome
    pub async fn submit<S>(&mut self, submitter: &S) -> Result<SubmitOutcome>
    where
        S: Submitter + ?Sized,
    {
        let payload = self.begin_submit()?;
        let outcome = submitter.submit(&payload).await;
        self.finish_submit(outcome)
    }

    /// Close without submitting; the record is discarded
    pub fn cancel(&mut self) -> Result<()> {
        self.ensure_idle()?;
        info!("Registration cancelled");
        self.close(CloseReason::Cancelled);
        Ok(())
    }

    fn close(&mut self, reason: CloseReason) {
        self.record = RegistrationRecord::default();
        self.errors.clear();
        self.submit_error = None;
        self.step = Step::Personal;
        self.status = Status::Closed(reason);
        if let Some(hook) = self.on_close.as_mut() {
            hook(reason);
        }
    }
}
