//! Modal overlay for submission messages

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Calculate centered modal area
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render a bordered message box over `area`
pub fn render_message_modal(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    hint: &str,
    border: Style,
) {
    let modal_area = centered_rect(60, 30, area);
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border);
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let body = Paragraph::new(message.to_string()).wrap(Wrap { trim: true });
    frame.render_widget(body, chunks[0]);

    let footer = Paragraph::new(Line::from(hint.to_string())).alignment(Alignment::Center);
    frame.render_widget(footer, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let modal = centered_rect(60, 50, area);
        assert_eq!(modal.width, 60);
        assert_eq!(modal.height, 20);
        assert_eq!(modal.x, 20);
        assert_eq!(modal.y, 10);
    }

    #[test]
    fn test_modal_border_uses_given_style() {
        use ratatui::{backend::TestBackend, style::Color, Terminal};

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let border = Style::default().fg(Color::Red);
        terminal
            .draw(|frame| {
                render_message_modal(frame, frame.area(), "Oops", "It broke", "Press d", border)
            })
            .unwrap();

        let modal = centered_rect(60, 30, Rect::new(0, 0, 100, 40));
        let corner = &terminal.backend().buffer()[(modal.x, modal.y)];
        assert_eq!(corner.symbol(), "╭");
        assert_eq!(corner.fg, Color::Red);
    }
}
