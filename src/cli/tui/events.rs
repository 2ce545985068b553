use ratatui::crossterm::event::KeyEvent;

use crate::submit::SubmitError;

/// All possible events in the application
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Resize(u16, u16),

    // Async task events - Submission
    SubmissionFinished(Result<(), SubmitError>),

    // UI events
    Tick,
}
