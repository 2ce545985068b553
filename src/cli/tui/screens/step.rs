//! The form screen for the current step

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use crate::cli::tui::form::FormState;
use crate::cli::tui::modal;
use crate::cli::tui::theme::Theme;
use crate::wizard::{Field, FieldKind, Step, Wizard, WizardMode};

pub fn render(
    frame: &mut Frame,
    wizard: &Wizard,
    form: &FormState,
    theme: &Theme,
    show_submit_error: bool,
) {
    let title = match wizard.mode() {
        WizardMode::New => " New Employee Registration ",
        WizardMode::Edit => " Edit Employee Registration ",
    };
    let main_block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme.highlight);
    let inner = main_block.inner(frame.area());
    frame.render_widget(main_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Step trail
            Constraint::Length(1), // Progress
            Constraint::Length(1), // Spacing
            Constraint::Min(5),    // Fields
            Constraint::Length(1), // Notice
            Constraint::Length(1), // Help bar
        ])
        .split(inner);

    render_trail(frame, chunks[0], wizard.step(), theme);
    render_progress(frame, chunks[1], wizard.step(), theme);
    render_fields(frame, chunks[3], wizard, form, theme);
    render_notice(frame, chunks[4], wizard, form, theme);
    render_help_bar(frame, chunks[5], wizard, form, theme);

    if show_submit_error {
        if let Some(message) = wizard.submit_error() {
            modal::render_message_modal(
                frame,
                frame.area(),
                "Submission failed",
                message,
                "Press 'd' to dismiss, 's' to retry",
                theme.error,
            );
        }
    }
}

fn render_trail(frame: &mut Frame, area: Rect, current: Step, theme: &Theme) {
    let mut spans = Vec::with_capacity(Step::COUNT * 2);
    for step in Step::ALL {
        let style = if step == current {
            theme.focused
        } else if step < current {
            theme.success
        } else {
            theme.muted
        };
        spans.push(Span::styled(
            format!("{} {}", Theme::step_marker(step, current), step.title()),
            style,
        ));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_progress(frame: &mut Frame, area: Rect, current: Step, theme: &Theme) {
    let position = current.index() + 1;
    let gauge = Gauge::default()
        .gauge_style(theme.highlight)
        .ratio(position as f64 / Step::COUNT as f64)
        .label(current.to_string());
    frame.render_widget(gauge, area);
}

fn field_line(wizard: &Wizard, form: &FormState, field: Field, theme: &Theme) -> Vec<Line<'static>> {
    let focused = form.focused_field(wizard) == Some(field);
    let marker = if focused { "▶ " } else { "  " };
    let label_style = if focused {
        theme.focused
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let value: Span<'static> = if form.editing == Some(field) {
        Span::styled(format!("{}▏", form.input.value()), theme.selected)
    } else {
        match field.kind() {
            FieldKind::Attachment => {
                let (text, style) = theme.attachment(&wizard.attachment_view(field));
                Span::styled(text, style)
            }
            FieldKind::Choice => {
                let shown = wizard.record().display(field);
                if shown.is_empty() {
                    Span::styled("‹ select ›".to_string(), theme.muted)
                } else {
                    Span::raw(format!("‹ {} ›", shown))
                }
            }
            FieldKind::Text => Span::raw(wizard.record().display(field)),
        }
    };

    let mut lines = vec![Line::from(vec![
        Span::raw(marker),
        Span::styled(format!("{:<24}", field.label()), label_style),
        value,
    ])];
    if let Some(message) = wizard.visible_error(field) {
        lines.push(Line::from(Span::styled(
            format!("    {}", message),
            theme.error,
        )));
    }
    lines
}

fn render_fields(frame: &mut Frame, area: Rect, wizard: &Wizard, form: &FormState, theme: &Theme) {
    let items: Vec<ListItem> = wizard
        .fields()
        .into_iter()
        .map(|field| ListItem::new(field_line(wizard, form, field, theme)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" {} ", wizard.step().title()))
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}

fn render_notice(frame: &mut Frame, area: Rect, wizard: &Wizard, form: &FormState, theme: &Theme) {
    let line = if wizard.is_submitting() {
        Line::from(Span::styled("Submitting registration…", theme.highlight))
    } else if let Some(notice) = &form.notice {
        Line::from(Span::styled(notice.clone(), theme.muted))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, wizard: &Wizard, form: &FormState, theme: &Theme) {
    let help = if form.is_editing() {
        "Enter save · Esc discard"
    } else if wizard.step().is_last() {
        "↑↓ move · Enter edit · ←→ choose · x remove file · p back · s submit · Esc cancel"
    } else if wizard.step().is_first() {
        "↑↓ move · Enter edit · ←→ choose · x remove file · n next · Esc cancel"
    } else {
        "↑↓ move · Enter edit · ←→ choose · x remove file · p back · n next · Esc cancel"
    };
    frame.render_widget(Paragraph::new(help).style(theme.muted), area);
}
