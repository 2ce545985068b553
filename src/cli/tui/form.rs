//! Focus, inline editing and key bindings for the step form

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_input::{Input, InputRequest};

use crate::wizard::{Field, Wizard};

/// Cursor-level edits applied to the active input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

impl EditKey {
    fn request(self) -> InputRequest {
        match self {
            EditKey::Insert(c) => InputRequest::InsertChar(c),
            EditKey::Backspace => InputRequest::DeletePrevChar,
            EditKey::Delete => InputRequest::DeleteNextChar,
            EditKey::Left => InputRequest::GoToPrevChar,
            EditKey::Right => InputRequest::GoToNextChar,
            EditKey::Home => InputRequest::GoToStart,
            EditKey::End => InputRequest::GoToEnd,
        }
    }
}

/// What a key press means on the form screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    FocusNext,
    FocusPrevious,
    /// Edit a text field, pick a file, or cycle a choice
    Activate,
    CycleForward,
    CycleBackward,
    RemoveAttachment,
    NextStep,
    PreviousStep,
    Submit,
    Cancel,
    Quit,
    DismissMessage,
    Edit(EditKey),
    CommitEdit,
    AbortEdit,
}

/// Map a key press to an action
pub fn key_action(key: KeyEvent, editing: bool) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    if editing {
        return match key.code {
            KeyCode::Enter => Some(Action::CommitEdit),
            KeyCode::Esc => Some(Action::AbortEdit),
            KeyCode::Char(c) => Some(Action::Edit(EditKey::Insert(c))),
            KeyCode::Backspace => Some(Action::Edit(EditKey::Backspace)),
            KeyCode::Delete => Some(Action::Edit(EditKey::Delete)),
            KeyCode::Left => Some(Action::Edit(EditKey::Left)),
            KeyCode::Right => Some(Action::Edit(EditKey::Right)),
            KeyCode::Home => Some(Action::Edit(EditKey::Home)),
            KeyCode::End => Some(Action::Edit(EditKey::End)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Down | KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::Up | KeyCode::BackTab => Some(Action::FocusPrevious),
        KeyCode::Enter => Some(Action::Activate),
        KeyCode::Right => Some(Action::CycleForward),
        KeyCode::Left => Some(Action::CycleBackward),
        KeyCode::Delete | KeyCode::Char('x') => Some(Action::RemoveAttachment),
        KeyCode::PageDown | KeyCode::Char('n') => Some(Action::NextStep),
        KeyCode::PageUp | KeyCode::Char('p') => Some(Action::PreviousStep),
        KeyCode::Char('s') => Some(Action::Submit),
        KeyCode::Char('d') => Some(Action::DismissMessage),
        KeyCode::Esc => Some(Action::Cancel),
        _ => None,
    }
}

/// Next or previous option key, wrapping around. With nothing selected,
/// forward picks the first option and backward the last.
pub fn cycle_option(
    options: &'static [&'static str],
    current: Option<&str>,
    forward: bool,
) -> Option<&'static str> {
    if options.is_empty() {
        return None;
    }
    let len = options.len();
    let index = match current.and_then(|c| options.iter().position(|o| *o == c)) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    Some(options[index])
}

/// Per-step form state
#[derive(Debug, Default)]
pub struct FormState {
    pub focused: usize,
    pub editing: Option<Field>,
    pub input: Input,
    /// One-line status under the form
    pub notice: Option<String>,
}

impl FormState {
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn focused_field(&self, wizard: &Wizard) -> Option<Field> {
        wizard.fields().get(self.focused).copied()
    }

    pub fn focus_next(&mut self, count: usize) {
        if count > 0 {
            self.focused = (self.focused + 1) % count;
        }
    }

    pub fn focus_previous(&mut self, count: usize) {
        if count > 0 {
            self.focused = (self.focused + count - 1) % count;
        }
    }

    /// Keep focus inside a field list that may have shrunk
    pub fn clamp(&mut self, count: usize) {
        if self.focused >= count {
            self.focused = count.saturating_sub(1);
        }
    }

    pub fn focus_field(&mut self, wizard: &Wizard, field: Field) {
        if let Some(index) = wizard.fields().iter().position(|f| *f == field) {
            self.focused = index;
        }
    }

    /// Fresh state for a newly entered step
    pub fn reset(&mut self) {
        self.focused = 0;
        self.editing = None;
        self.input.reset();
    }

    pub fn begin_edit(&mut self, field: Field, current: String) {
        self.input = Input::new(current);
        self.editing = Some(field);
    }

    pub fn apply_edit(&mut self, key: EditKey) {
        self.input.handle(key.request());
    }

    pub fn abort_edit(&mut self) {
        self.editing = None;
        self.input.reset();
    }

    /// Finish editing, returning the field and the entered text
    pub fn take_edit(&mut self) -> Option<(Field, String)> {
        let field = self.editing.take()?;
        let value = self.input.value().to_string();
        self.input.reset();
        Some((field, value))
    }
}
