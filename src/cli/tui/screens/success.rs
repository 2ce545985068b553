//! Shown after a standalone submission succeeds

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::cli::tui::theme::Theme;

pub fn render(frame: &mut Frame, employee: &str, submitter: &str, theme: &Theme) {
    let main_block = Block::default()
        .title(" ✅ Registration Submitted ")
        .borders(Borders::ALL)
        .border_style(theme.success);
    let inner = main_block.inner(frame.area());
    frame.render_widget(main_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Message
            Constraint::Min(1),    // Flexible space
            Constraint::Length(1), // Help bar
        ])
        .split(inner);

    let name = if employee.trim().is_empty() {
        "The employee".to_string()
    } else {
        employee.trim().to_string()
    };
    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(name, theme.highlight),
            Span::raw(" has been registered."),
        ]),
        Line::from(Span::styled(format!("Sent via {}", submitter), theme.muted)),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), chunks[0]);

    let help = Paragraph::new("Press any key to exit")
        .style(theme.muted)
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}
