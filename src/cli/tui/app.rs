use ratatui::{
    crossterm::event::{self, Event, KeyEventKind},
    DefaultTerminal, Frame,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time;
use tracing::{debug, warn};

use super::events::AppEvent;
use super::form::{cycle_option, key_action, Action, FormState};
use super::theme::Theme;
use crate::submit::{SubmitError, Submitter};
use crate::wizard::{
    CloseReason, FieldKind, FieldValue, FileHandle, Presentation, Status, SubmissionPayload,
    SubmitOutcome, Transition, Wizard,
};
use crate::{OnboardError, Result};

const IN_FLIGHT: &str = "Submission in progress; wait for the outcome";

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Form,
    Success,
}

/// Work the event loop must start on the app's behalf
#[derive(Debug)]
pub enum Effect {
    Submit(SubmissionPayload),
}

/// Main application struct
pub struct App {
    wizard: Wizard,
    form: FormState,
    submitter: Arc<dyn Submitter>,
    theme: Theme,
    screen: Screen,
    should_quit: bool,
    /// Event sender for background tasks
    event_tx: Option<UnboundedSender<AppEvent>>,
    show_submit_error: bool,
    /// Captured before the wizard resets its record on close
    submitted_name: String,
}

impl App {
    pub fn new(wizard: Wizard, submitter: Arc<dyn Submitter>) -> Self {
        Self {
            wizard,
            form: FormState::default(),
            submitter,
            theme: Theme::default(),
            screen: Screen::Form,
            should_quit: false,
            event_tx: None,
            show_submit_error: false,
            submitted_name: String::new(),
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn showing_submit_error(&self) -> bool {
        self.show_submit_error
    }

    /// How the wizard ended, if it did
    pub fn close_reason(&self) -> Option<CloseReason> {
        match self.wizard.status() {
            Status::Closed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Run the application
    pub async fn run(mut self) -> Result<Option<CloseReason>> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();
        self.event_tx = Some(event_tx.clone());

        // Spawn input handler; it stops once the receiver is gone
        let input_tx = event_tx.clone();
        tokio::task::spawn_blocking(move || loop {
            if input_tx.is_closed() {
                break;
            }
            match event::poll(Duration::from_millis(100)) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(_) => break,
            }
            let sent = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    input_tx.send(AppEvent::Key(key))
                }
                Ok(Event::Resize(width, height)) => input_tx.send(AppEvent::Resize(width, height)),
                Ok(_) => Ok(()),
                Err(_) => break,
            };
            if sent.is_err() {
                break;
            }
        });

        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        ratatui::restore();
        result?;
        Ok(self.close_reason())
    }

    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            // Handle events with timeout for redraws
            match time::timeout(Duration::from_millis(50), event_rx.recv()).await {
                Ok(Some(event)) => self.handle_event(event)?,
                Ok(None) => break, // Channel closed
                Err(_) => self.handle_event(AppEvent::Tick)?,
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        match self.screen {
            Screen::Form => super::screens::step::render(
                frame,
                &self.wizard,
                &self.form,
                &self.theme,
                self.show_submit_error,
            ),
            Screen::Success => super::screens::success::render(
                frame,
                &self.submitted_name,
                self.submitter.name(),
                &self.theme,
            ),
        }
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Key(key) => {
                if self.screen == Screen::Success {
                    self.should_quit = true;
                    return Ok(());
                }
                if let Some(action) = key_action(key, self.form.is_editing()) {
                    if let Some(effect) = self.apply(action)? {
                        self.spawn(effect);
                    }
                }
            }
            AppEvent::SubmissionFinished(outcome) => self.finish_submission(outcome)?,
            AppEvent::Resize(..) | AppEvent::Tick => {}
        }
        Ok(())
    }

    fn spawn(&self, effect: Effect) {
        let Effect::Submit(payload) = effect;
        let Some(tx) = self.event_tx.clone() else {
            warn!("No event channel; submission dropped");
            return;
        };
        let submitter = Arc::clone(&self.submitter);
        tokio::spawn(async move {
            let outcome = submitter.submit(&payload).await;
            let _ = tx.send(AppEvent::SubmissionFinished(outcome));
        });
    }

    /// Apply the submitter's result to the wizard and the screen
    pub fn finish_submission(
        &mut self,
        outcome: std::result::Result<(), SubmitError>,
    ) -> Result<()> {
        match self.wizard.finish_submit(outcome)? {
            SubmitOutcome::Submitted => match self.wizard.presentation() {
                Presentation::Standalone => self.screen = Screen::Success,
                Presentation::Embedded => self.should_quit = true,
            },
            SubmitOutcome::Rejected(message) => {
                debug!(%message, "Showing submission error");
                self.show_submit_error = true;
                self.form.notice = None;
            }
        }
        Ok(())
    }

    /// Apply one form action. Recoverable problems land in the notice line.
    pub fn apply(&mut self, action: Action) -> Result<Option<Effect>> {
        match self.dispatch(action) {
            Err(OnboardError::SubmissionInFlight) => {
                self.form.notice = Some(IN_FLIGHT.to_string());
                Ok(None)
            }
            other => other,
        }
    }

    fn dispatch(&mut self, action: Action) -> Result<Option<Effect>> {
        let count = self.wizard.fields().len();
        match action {
            Action::FocusNext => self.form.focus_next(count),
            Action::FocusPrevious => self.form.focus_previous(count),
            Action::Activate => self.activate()?,
            Action::CycleForward => self.cycle(true)?,
            Action::CycleBackward => self.cycle(false)?,
            Action::RemoveAttachment => {
                if let Some(field) = self.form.focused_field(&self.wizard) {
                    if field.kind() == FieldKind::Attachment {
                        self.wizard.remove_attachment(field)?;
                    }
                }
            }
            Action::NextStep => self.next_step()?,
            Action::PreviousStep => match self.wizard.previous() {
                Ok(_) => {
                    self.form.reset();
                    self.form.notice = None;
                }
                Err(OnboardError::NotAvailable { .. }) => {
                    self.form.notice = Some("Already on the first step".to_string());
                }
                Err(e) => return Err(e),
            },
            Action::Submit => return self.submit(),
            Action::Cancel => {
                self.wizard.cancel()?;
                self.should_quit = true;
            }
            // A pending submission must report its outcome before the app exits
            Action::Quit => {
                if !self.wizard.is_closed() {
                    self.wizard.cancel()?;
                }
                self.should_quit = true;
            }
            Action::DismissMessage => self.show_submit_error = false,
            Action::Edit(key) => self.form.apply_edit(key),
            Action::CommitEdit => self.commit_edit()?,
            Action::AbortEdit => {
                self.form.abort_edit();
                self.form.notice = None;
            }
        }
        Ok(None)
    }

    fn activate(&mut self) -> Result<()> {
        let Some(field) = self.form.focused_field(&self.wizard) else {
            return Ok(());
        };
        match field.kind() {
            FieldKind::Text => {
                let current = self.wizard.record().display(field);
                self.form.begin_edit(field, current);
            }
            FieldKind::Choice => self.cycle(true)?,
            FieldKind::Attachment => {
                self.form.begin_edit(field, String::new());
                self.form.notice = Some("Type the path of the file to attach".to_string());
            }
        }
        Ok(())
    }

    fn cycle(&mut self, forward: bool) -> Result<()> {
        let Some(field) = self.form.focused_field(&self.wizard) else {
            return Ok(());
        };
        let FieldValue::Choice(current) = self.wizard.record().value(field) else {
            return Ok(());
        };
        if let Some(option) = cycle_option(field.options(), current, forward) {
            self.wizard.input(field, option)?;
            self.form.clamp(self.wizard.fields().len());
        }
        Ok(())
    }

    fn commit_edit(&mut self) -> Result<()> {
        let Some((field, value)) = self.form.take_edit() else {
            return Ok(());
        };
        self.form.notice = None;

        if field.kind() == FieldKind::Attachment {
            let path = value.trim();
            if path.is_empty() {
                return Ok(());
            }
            return match FileHandle::open(path) {
                Ok(file) => self.wizard.choose_attachment(field, file),
                Err(e) => {
                    self.form.notice = Some(format!("Could not read {}: {}", path, e));
                    Ok(())
                }
            };
        }

        match self.wizard.input(field, &value) {
            Ok(()) => Ok(()),
            Err(e @ OnboardError::UnknownOption { .. }) => {
                self.form.notice = Some(e.to_string());
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn next_step(&mut self) -> Result<()> {
        match self.wizard.next() {
            Ok(Transition::Advanced(_)) => {
                self.form.reset();
                self.form.notice = None;
            }
            Ok(Transition::Blocked(errors)) => {
                if let Some((field, _)) = errors.iter().next() {
                    self.form.focus_field(&self.wizard, field);
                }
                self.form.notice = Some(format!(
                    "{} field(s) need attention before continuing",
                    errors.len()
                ));
            }
            Err(OnboardError::NotAvailable { .. }) => {
                self.form.notice = Some("This is the last step; press 's' to submit".to_string());
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn submit(&mut self) -> Result<Option<Effect>> {
        let personal = &self.wizard.record().personal;
        let name = format!("{} {}", personal.first_name.trim(), personal.last_name.trim());

        match self.wizard.begin_submit() {
            Ok(payload) => {
                self.submitted_name = name.trim().to_string();
                self.show_submit_error = false;
                self.form.notice = None;
                Ok(Some(Effect::Submit(payload)))
            }
            Err(OnboardError::Validation { errors, .. }) => {
                let earlier = errors.iter().any(|(field, _)| field.step() != self.wizard.step());
                self.form.notice = Some(if earlier {
                    format!(
                        "{} field(s) need attention, including earlier steps",
                        errors.len()
                    )
                } else {
                    format!("{} field(s) need attention before submitting", errors.len())
                });
                Ok(None)
            }
            Err(OnboardError::NotAvailable { .. }) => {
                self.form.notice = Some("Submit is available on the last step".to_string());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
