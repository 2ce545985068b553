use ratatui::style::{Color, Modifier, Style};

use crate::wizard::{AttachmentView, Step};

/// Consistent theme for the TUI
pub struct Theme {
    pub selected: Style,
    pub focused: Style,
    pub error: Style,
    pub success: Style,
    pub muted: Style,
    pub highlight: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selected: Style::default()
                .bg(Color::Rgb(50, 50, 80))
                .add_modifier(Modifier::BOLD),
            focused: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            success: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            muted: Style::default()
                .fg(Color::DarkGray),
            highlight: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Theme {
    /// Marker for a step in the progress trail
    pub fn step_marker(step: Step, current: Step) -> &'static str {
        if step < current {
            "✓"
        } else if step == current {
            "●"
        } else {
            "○"
        }
    }

    /// Text and style for an attachment slot
    pub fn attachment(&self, view: &AttachmentView) -> (String, Style) {
        match view {
            AttachmentView::New(name) => (format!("📎 {} (new)", name), self.success),
            AttachmentView::Existing(name) => (format!("📎 {} (on file)", name), Style::default()),
            AttachmentView::Placeholder => ("— no file —".to_string(), self.muted),
        }
    }
}
