//! Field rendering utilities for the wizard form

use crate::state::{FieldId, FieldKind, QuoteWizard};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw one form field box with its value, cursor, and inline error
pub fn draw_field(frame: &mut Frame, area: Rect, wizard: &QuoteWizard, field: FieldId) {
    let is_active = wizard.active_field() == field;
    let error = wizard.error_for(field);
    let value = wizard.draft.get(field);

    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut title = vec![Span::raw(format!(" {} ", field.label()))];
    if let Some(message) = error {
        title.push(Span::styled(
            format!("✗ {message} "),
            Style::default().fg(Color::Red),
        ));
    }

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(border_style);

    let content = match field.kind() {
        FieldKind::Choice(_) => choice_line(value, is_active),
        _ => text_lines(value, is_active, field.is_multiline()),
    };

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Render a choice value with cycle arrows when focused
fn choice_line(value: &str, is_active: bool) -> Paragraph<'_> {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let line = if is_active {
        let shown = if value.is_empty() { "choose" } else { value };
        Line::from(vec![
            Span::styled("◂ ", Style::default().fg(Color::DarkGray)),
            Span::styled(shown, style),
            Span::styled(" ▸", Style::default().fg(Color::DarkGray)),
        ])
    } else if value.is_empty() {
        Line::from(Span::styled("(not set)", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(Span::styled(value, style))
    };

    Paragraph::new(line)
}

/// Render a text value with a trailing cursor when focused
fn text_lines(value: &str, is_active: bool, is_multiline: bool) -> Paragraph<'_> {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = if is_active { "▌" } else { "" };

    if is_multiline {
        let mut lines: Vec<Line> = value.lines().map(|l| Line::from(l.to_string())).collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        let display = if value.is_empty() && !is_active {
            "(empty)"
        } else {
            value
        };
        Paragraph::new(Line::from(vec![
            Span::styled(display, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    }
}
